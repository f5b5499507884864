//! Store contract and defaults

use ilp_module_domain::{Capability, ModuleOptions};

pub const REQUIRED: &[Capability] = Capability::STORE;

pub fn load_defaults() -> (String, ModuleOptions) {
    (
        "in-memory".to_string(),
        ModuleOptions::new().with("prefix", "ilp:"),
    )
}
