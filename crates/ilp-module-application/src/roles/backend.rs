//! Backend contract and defaults

use ilp_module_domain::{Capability, ModuleOptions};

pub const REQUIRED: &[Capability] = Capability::BACKEND;

pub fn load_defaults() -> (String, ModuleOptions) {
    ("one-to-one".to_string(), ModuleOptions::new().with("spread", 0))
}
