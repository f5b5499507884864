//! # ilp-module domain
//!
//! Role contracts, value objects and errors shared by every layer of the
//! module framework.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ports`] | `Logger`, `Store`, `Plugin`, `Backend` contracts and the `Environment` port |
//! | [`value_objects`] | `RoleType`, `ModuleOptions`, `ModuleServices`, `ModuleInstance`, capabilities, account data |
//! | [`error`] | The framework-wide [`Error`](error::Error) and [`Result`](error::Result) |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Backend, Environment, Logger, MapEnvironment, Plugin, Store};
pub use value_objects::{
    Capability, CapabilitySet, ModuleInstance, ModuleOptions, ModuleServices, RoleType,
};
