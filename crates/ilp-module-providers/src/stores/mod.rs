//! Store Implementations
//!
//! | Store | Persistence |
//! |-------|-------------|
//! | [`InMemoryStore`] | None, contents are lost on drop |

pub mod in_memory;

pub use in_memory::InMemoryStore;
