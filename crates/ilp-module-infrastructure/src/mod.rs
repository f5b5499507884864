//! # Infrastructure Layer
//!
//! Process-facing concerns around the module pipeline.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`environment`] | `std::env` adapter for the `Environment` port |
//! | [`config`] | Figment-based framework configuration |
//! | [`logging`] | Structured logging with tracing |
//! | [`bootstrap`] | Assembles and initialises a [`ModuleLoader`](ilp_module_application::ModuleLoader) |
//! | [`constants`] | Configuration constants |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod environment;
pub mod logging;

pub use bootstrap::{bootstrap, bootstrap_with_env};
pub use config::{ConfigLoader, FrameworkConfig, LoggingConfig};
pub use environment::ProcessEnvironment;
