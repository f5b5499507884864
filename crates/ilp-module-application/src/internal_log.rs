//! The framework's own logger
//!
//! The internal logger is itself built by the module pipeline, which needs a
//! logger to report what it is doing. [`InternalLog`] breaks that cycle: it
//! starts out writing to an explicitly injected fallback and switches, exactly
//! once, to the pipeline-built logger when [`InternalLog::install`] is called.

use std::sync::{Arc, OnceLock};

use ilp_module_domain::Logger;

/// Fallback plus a once-only installed logger
pub struct InternalLog {
    fallback: Arc<dyn Logger>,
    installed: OnceLock<Arc<dyn Logger>>,
}

impl InternalLog {
    /// Create a log that writes to `fallback` until a logger is installed
    pub fn new(fallback: Arc<dyn Logger>) -> Self {
        Self {
            fallback,
            installed: OnceLock::new(),
        }
    }

    /// The installed logger, or the fallback before installation
    pub fn get(&self) -> &dyn Logger {
        self.installed.get().unwrap_or(&self.fallback).as_ref()
    }

    /// Install the pipeline-built logger; returns `false` if one was already installed
    pub fn install(&self, logger: Arc<dyn Logger>) -> bool {
        self.installed.set(logger).is_ok()
    }

    pub fn is_installed(&self) -> bool {
        self.installed.get().is_some()
    }
}

impl std::fmt::Debug for InternalLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InternalLog")
            .field("namespace", &self.get().namespace())
            .field("installed", &self.is_installed())
            .finish()
    }
}

/// Minimal logger forwarding to `tracing`, used before the pipeline is available
#[derive(Debug, Clone)]
pub struct FallbackLogger {
    namespace: String,
}

impl FallbackLogger {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Logger for FallbackLogger {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn info(&self, message: &str) {
        tracing::info!(namespace = %self.namespace, "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(namespace = %self.namespace, "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(namespace = %self.namespace, "{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!(namespace = %self.namespace, "{message}");
    }

    fn trace(&self, message: &str) {
        tracing::trace!(namespace = %self.namespace, "{message}");
    }
}
