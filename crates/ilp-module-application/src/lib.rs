//! # ilp-module application layer
//!
//! Turns a role type plus optional explicit name and options into a
//! validated module instance:
//!
//! ```text
//! create_module(role, name?, options?, services?)
//!        │
//!        ▼
//! Resolver   explicit → ILP_<ROLE>[_OPTIONS] → role defaults
//!        │
//!        ▼
//! Locator    ilp-<role>-<name> package → <module root>/<role>s/<name> → built-in
//!        │
//!        ▼
//! Loader     factory(options, services)   (services default to { log })
//!        │
//!        ▼
//! Validator  capability check for known roles, custom roles always pass
//! ```

pub mod internal_log;
pub mod loader;
pub mod locator;
pub mod registry;
pub mod resolver;
pub mod roles;
pub mod validator;

pub use internal_log::{FallbackLogger, InternalLog};
pub use loader::{DEFAULT_FRAMEWORK_DIR, ModuleLoader, ModuleLoaderBuilder};
pub use locator::{
    ApplicationLocator, BuiltinLocator, LocatedModule, Locator, ModuleLocator, ModuleReference,
    PackageLocator,
};
pub use registry::{
    BUILTIN_MODULES, ModuleEntry, ModuleExport, ModuleFactory, ModuleListing, ModuleRegistry,
    PACKAGE_MODULES, module_path, normalize_path,
};
pub use resolver::Resolver;
pub use roles::KnownRole;
pub use validator::Validator;
