//! Backend Implementations
//!
//! | Backend | Rate source |
//! |---------|-------------|
//! | [`OneToOneBackend`] | Asset scales only, minus a configured spread |

pub mod one_to_one;

pub use one_to_one::{OneToOneBackend, OneToOneBackendOptions};
