//! Plugin Implementations
//!
//! | Plugin | Peer |
//! |--------|------|
//! | [`MirrorPlugin`] | Itself: outgoing data and money hit the local handlers |

pub mod mirror;

pub use mirror::MirrorPlugin;
