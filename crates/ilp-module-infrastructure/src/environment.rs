//! Process environment adapter

use std::env;
use std::path::PathBuf;

use ilp_module_domain::Environment;

/// Reads variables and the working directory of the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn current_dir(&self) -> Option<PathBuf> {
        env::current_dir().ok()
    }
}
