//! Debug logger
//!
//! Forwards every message to `tracing`, so output is filtered and formatted
//! by whatever subscriber the application installed.

use ilp_module_domain::error::Result;
use ilp_module_domain::{Logger, ModuleInstance, ModuleOptions, ModuleServices};
use tracing::{debug, error, info, trace, warn};

use super::LoggerOptions;

/// Logger emitting `tracing` events tagged with its namespace
#[derive(Debug, Clone)]
pub struct DebugLogger {
    namespace: String,
}

impl DebugLogger {
    pub fn new(options: LoggerOptions) -> Self {
        Self {
            namespace: options.namespace,
        }
    }
}

impl Logger for DebugLogger {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn info(&self, message: &str) {
        info!(namespace = %self.namespace, "{message}");
    }

    fn warn(&self, message: &str) {
        warn!(namespace = %self.namespace, "{message}");
    }

    fn error(&self, message: &str) {
        error!(namespace = %self.namespace, "{message}");
    }

    fn debug(&self, message: &str) {
        debug!(namespace = %self.namespace, "{message}");
    }

    fn trace(&self, message: &str) {
        trace!(namespace = %self.namespace, "{message}");
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use ilp_module_application::registry::{BUILTIN_MODULES, ModuleEntry, ModuleExport};

/// Factory function for creating debug logger instances.
fn debug_logger_factory(
    options: ModuleOptions,
    _services: Option<ModuleServices>,
) -> Result<ModuleInstance> {
    let options: LoggerOptions = options.deserialize("debug")?;
    Ok(ModuleInstance::logger(DebugLogger::new(options)))
}

#[linkme::distributed_slice(BUILTIN_MODULES)]
static DEBUG_LOGGER: ModuleEntry = ModuleEntry {
    role: "logger",
    name: "debug",
    description: "Logger emitting tracing events",
    export: ModuleExport::default_export(debug_logger_factory),
};
