//! Console logger
//!
//! Writes every message directly to the process console. Informational and
//! debug output goes to stdout, warnings, errors and traces to stderr.

use ilp_module_domain::error::Result;
use ilp_module_domain::{Logger, ModuleInstance, ModuleOptions, ModuleServices};

use super::LoggerOptions;

/// Logger writing namespaced lines to stdout/stderr
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    namespace: String,
}

impl ConsoleLogger {
    pub fn new(options: LoggerOptions) -> Self {
        Self {
            namespace: options.namespace,
        }
    }

    fn line(&self, level: &str, message: &str) -> String {
        format!("{} {level} {message}", self.namespace)
    }
}

impl Logger for ConsoleLogger {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn info(&self, message: &str) {
        println!("{}", self.line("info", message));
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", self.line("warn", message));
    }

    fn error(&self, message: &str) {
        eprintln!("{}", self.line("error", message));
    }

    fn debug(&self, message: &str) {
        println!("{}", self.line("debug", message));
    }

    fn trace(&self, message: &str) {
        eprintln!("{}", self.line("trace", message));
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use ilp_module_application::registry::{BUILTIN_MODULES, ModuleEntry, ModuleExport};

/// Factory function for creating console logger instances.
fn console_logger_factory(
    options: ModuleOptions,
    _services: Option<ModuleServices>,
) -> Result<ModuleInstance> {
    let options: LoggerOptions = options.deserialize("console")?;
    Ok(ModuleInstance::logger(ConsoleLogger::new(options)))
}

#[linkme::distributed_slice(BUILTIN_MODULES)]
static CONSOLE_LOGGER: ModuleEntry = ModuleEntry {
    role: "logger",
    name: "console",
    description: "Logger writing to stdout/stderr",
    export: ModuleExport::default_export(console_logger_factory),
};
