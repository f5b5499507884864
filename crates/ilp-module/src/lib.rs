//! # ilp-module
//!
//! Resolution and instantiation of pluggable Interledger modules.
//!
//! A module is requested by role type (`logger`, `store`, `plugin`,
//! `backend`, or any application-defined role) and optionally by name and
//! options. The framework settles on a name and options, finds the module,
//! builds it with a logger injected and checks the result against the role's
//! contract.
//!
//! ## Example
//!
//! ```ignore
//! use ilp_module::{FrameworkConfig, bootstrap};
//!
//! let modules = bootstrap(&FrameworkConfig::default())?;
//! let store = modules.create_store(None, None, None)?;
//! store.put("balance", "100").await?;
//! ```
//!
//! ## Configuration through the environment
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `ILP_<ROLE>` | Module name for the role, e.g. `ILP_STORE=in-memory` |
//! | `ILP_<ROLE>_OPTIONS` | JSON object of constructor options |
//! | `ILP_MODULE_ROOT` | Directory holding application modules |
//!
//! ## Architecture
//!
//! - `domain` - role contracts, value objects and errors
//! - `application` - registry, resolver, locator, validator and loader
//! - `providers` - built-in modules
//! - `infrastructure` - process environment, configuration, logging

/// Domain layer - role contracts, value objects and errors
pub mod domain {
    pub use ilp_module_domain::*;
}

/// Application layer - the module pipeline
pub mod application {
    pub use ilp_module_application::*;
}

/// Built-in modules
pub mod providers {
    pub use ilp_module_providers::*;
}

/// Infrastructure layer - environment, configuration, logging and bootstrap
pub mod infrastructure {
    pub use ilp_module_infrastructure::*;
}

pub use ilp_module_application::{
    BUILTIN_MODULES, ModuleEntry, ModuleExport, ModuleFactory, ModuleLoader, ModuleRegistry,
    PACKAGE_MODULES,
};
pub use ilp_module_domain::{
    Backend, Environment, Error, Logger, ModuleInstance, ModuleOptions, ModuleServices, Plugin,
    Result, RoleType, Store,
};
pub use ilp_module_infrastructure::{
    ConfigLoader, FrameworkConfig, LoggingConfig, ProcessEnvironment, bootstrap,
};
