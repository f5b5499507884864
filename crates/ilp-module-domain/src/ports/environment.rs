//! Environment port
//!
//! The resolver and the locator read `ILP_*` variables through this trait so
//! that embedding applications and tests can supply their own values.

use std::collections::HashMap;
use std::path::PathBuf;

/// Read-only view of process configuration
pub trait Environment: Send + Sync {
    /// Value of the variable `key`, if set
    fn var(&self, key: &str) -> Option<String>;

    /// Directory relative paths are resolved against
    fn current_dir(&self) -> Option<PathBuf>;

    /// Value of `key` when set to a non-empty string
    fn non_empty_var(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// In-memory environment
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
    current_dir: Option<PathBuf>,
}

impl MapEnvironment {
    /// Create an empty environment with no working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Set the working directory
    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Set a variable in place
    pub fn set_var(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Remove a variable in place
    pub fn remove_var(&mut self, key: &str) {
        self.vars.remove(key);
    }
}

impl Environment for MapEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn current_dir(&self) -> Option<PathBuf> {
        self.current_dir.clone()
    }
}
