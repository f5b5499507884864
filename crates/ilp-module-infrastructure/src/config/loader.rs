//! Configuration loader
//!
//! Sources are merged in this order, later sources overriding earlier ones:
//!
//! 1. `FrameworkConfig::default()`
//! 2. TOML file: the explicit path, or `ilp-module.toml` in the search directory
//! 3. Environment variables prefixed `ILP_MODULE__`, nested with `__`
//!    (e.g. `ILP_MODULE__LOGGING__LEVEL=debug`)

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use ilp_module_domain::error::{Error, Result};

use crate::config::FrameworkConfig;
use crate::constants::{CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_FILENAME};
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Directory searched for the default configuration file
    search_dir: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            search_dir: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Look for `ilp-module.toml` in `dir` instead of the working directory
    pub fn with_search_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.search_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    pub fn load(&self) -> Result<FrameworkConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(FrameworkConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = self.find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let config: FrameworkConfig = figment
            .extract()
            .map_err(|e| Error::configuration(format!("Failed to extract configuration: {e}")))?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &FrameworkConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config).map_err(|e| {
            Error::configuration_with_source("Failed to serialize config to TOML", e)
        })?;
        std::fs::write(path.as_ref(), toml_string)?;
        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn find_default_config_path(&self) -> Option<PathBuf> {
        let dir = match &self.search_dir {
            Some(dir) => dir.clone(),
            None => env::current_dir().ok()?,
        };
        Some(dir.join(DEFAULT_CONFIG_FILENAME)).filter(|path| path.exists())
    }
}

fn validate_config(config: &FrameworkConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    Ok(())
}
