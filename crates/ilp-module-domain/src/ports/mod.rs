//! Role contracts and external ports
//!
//! Each known role type has a trait here. Implementations live in
//! `ilp-module-providers` or in the embedding application.

pub mod backend;
pub mod environment;
pub mod logger;
pub mod plugin;
pub mod store;

pub use backend::{Backend, RateEndpoint, SubmitPaymentParams};
pub use environment::{Environment, MapEnvironment};
pub use logger::Logger;
pub use plugin::{DataHandler, MoneyHandler, Plugin, PluginConnectOptions, PluginEvent};
pub use store::Store;
