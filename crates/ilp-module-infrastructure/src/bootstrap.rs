//! Loader assembly
//!
//! Builds a [`ModuleLoader`] over the linked built-ins, applies the framework
//! configuration and swaps the fallback logger for the pipeline-built one.

use std::sync::Arc;

use ilp_module_application::ModuleLoader;
use ilp_module_domain::error::Result;
use ilp_module_domain::Environment;
use tracing::debug;

use crate::config::FrameworkConfig;
use crate::environment::ProcessEnvironment;

// Force linkme registration of the built-in modules
extern crate ilp_module_providers;

/// Initialised loader reading the process environment
pub fn bootstrap(config: &FrameworkConfig) -> Result<ModuleLoader> {
    bootstrap_with_env(config, Arc::new(ProcessEnvironment))
}

/// Initialised loader reading `env`
pub fn bootstrap_with_env(
    config: &FrameworkConfig,
    env: Arc<dyn Environment>,
) -> Result<ModuleLoader> {
    let mut builder = ModuleLoader::builder(env);
    if let Some(root) = &config.module_root {
        builder = builder.module_root(root.clone());
    }
    if let Some(dir) = &config.framework_dir {
        builder = builder.framework_dir(dir.clone());
    }

    let loader = builder.build();
    loader.init()?;
    debug!(
        module_root = %loader.get_module_root().display(),
        modules = loader.registry().list().len(),
        "Module loader ready"
    );
    Ok(loader)
}
