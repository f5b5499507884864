//! Logger Implementations
//!
//! | Logger | Output |
//! |--------|--------|
//! | [`ConsoleLogger`] | Lines on stdout/stderr prefixed with the namespace |
//! | [`DebugLogger`] | `tracing` events carrying the namespace as a field |

pub mod console;
pub mod debug;

pub use console::ConsoleLogger;
pub use debug::DebugLogger;

use serde::Deserialize;

/// Options shared by the built-in loggers
///
/// A missing namespace yields an empty one, which fails logger validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggerOptions {
    #[serde(default)]
    pub namespace: String,
}
