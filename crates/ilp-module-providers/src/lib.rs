//! # ilp-module built-in modules
//!
//! Default implementations of every known role. Each module registers itself
//! in the `BUILTIN_MODULES` slice, so linking this crate is enough to make
//! them locatable.
//!
//! | Role | Name | Implementation |
//! |------|------|----------------|
//! | logger | `console` | [`loggers::ConsoleLogger`] |
//! | logger | `debug` | [`loggers::DebugLogger`] |
//! | store | `in-memory` | [`stores::InMemoryStore`] |
//! | plugin | `mirror` | [`plugins::MirrorPlugin`] |
//! | backend | `one-to-one` | [`backends::OneToOneBackend`] |

pub use ilp_module_domain::error::{Error, Result};

/// Logger implementations
pub mod loggers;

/// Store implementations
pub mod stores;

/// Plugin implementations
pub mod plugins;

/// Backend implementations
pub mod backends;
