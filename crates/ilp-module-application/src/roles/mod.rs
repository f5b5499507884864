//! Known role contracts
//!
//! Each known role declares the capabilities an instance must expose and the
//! module name and options used when nothing else is configured. Role types
//! outside this list are custom: they get neither.

pub mod backend;
pub mod logger;
pub mod plugin;
pub mod store;

use ilp_module_domain::{Capability, ModuleInstance, ModuleOptions, RoleType};

use crate::registry::ModuleRegistry;

/// A role type with a declared contract and defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownRole {
    Logger,
    Store,
    Plugin,
    Backend,
}

impl KnownRole {
    pub const ALL: [KnownRole; 4] = [
        KnownRole::Logger,
        KnownRole::Store,
        KnownRole::Plugin,
        KnownRole::Backend,
    ];

    /// The known role named by `role`, if any
    pub fn from_role(role: &RoleType) -> Option<Self> {
        match role.as_str() {
            "logger" => Some(Self::Logger),
            "store" => Some(Self::Store),
            "plugin" => Some(Self::Plugin),
            "backend" => Some(Self::Backend),
            _ => None,
        }
    }

    pub fn role_type(self) -> RoleType {
        match self {
            Self::Logger => RoleType::LOGGER,
            Self::Store => RoleType::STORE,
            Self::Plugin => RoleType::PLUGIN,
            Self::Backend => RoleType::BACKEND,
        }
    }

    /// Capabilities an instance must expose to satisfy this role
    pub fn required_capabilities(self) -> &'static [Capability] {
        match self {
            Self::Logger => logger::REQUIRED,
            Self::Store => store::REQUIRED,
            Self::Plugin => plugin::REQUIRED,
            Self::Backend => backend::REQUIRED,
        }
    }

    /// Whether `instance` exposes every required capability
    pub fn is_valid_instance(self, instance: &ModuleInstance) -> bool {
        let provided = instance.capabilities();
        self.required_capabilities()
            .iter()
            .all(|capability| provided.contains(capability))
    }

    /// Default module name and options, probing `registry` for optional packages
    pub fn load_defaults(self, registry: &ModuleRegistry) -> (String, ModuleOptions) {
        match self {
            Self::Logger => logger::load_defaults(),
            Self::Store => store::load_defaults(),
            Self::Plugin => plugin::load_defaults(registry),
            Self::Backend => backend::load_defaults(),
        }
    }
}
