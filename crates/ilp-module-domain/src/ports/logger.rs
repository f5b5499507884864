//! Logger role contract

use downcast_rs::{DowncastSync, impl_downcast};

/// Namespaced log writer
///
/// A logger is only considered valid when its namespace is non-empty.
pub trait Logger: DowncastSync {
    /// Namespace prefixing every line written by this logger
    fn namespace(&self) -> &str;

    /// Write an informational message
    fn info(&self, message: &str);

    /// Write a warning
    fn warn(&self, message: &str);

    /// Write an error
    fn error(&self, message: &str);

    /// Write a debug message
    fn debug(&self, message: &str);

    /// Write a trace message
    fn trace(&self, message: &str);
}
impl_downcast!(sync Logger);

impl std::fmt::Debug for dyn Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("namespace", &self.namespace())
            .finish()
    }
}
