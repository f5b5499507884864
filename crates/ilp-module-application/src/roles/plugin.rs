//! Plugin contract and defaults

use ilp_module_domain::{Capability, ModuleOptions};

use crate::registry::ModuleRegistry;

pub const REQUIRED: &[Capability] = Capability::PLUGIN;

/// Package preferred as the default plugin when it is linked
pub const BTP_PLUGIN_PACKAGE: &str = "ilp-plugin-btp";

/// `ilp-plugin-btp` with a fresh shared secret when linked, the loop-back `mirror` otherwise
pub fn load_defaults(registry: &ModuleRegistry) -> (String, ModuleOptions) {
    if registry.package_exists(BTP_PLUGIN_PACKAGE) {
        let secret = hex::encode(rand::random::<[u8; 16]>());
        return (
            BTP_PLUGIN_PACKAGE.to_string(),
            ModuleOptions::new().with("server", format!("btp+ws://:{secret}@localhost:7768")),
        );
    }
    ("mirror".to_string(), ModuleOptions::new())
}
