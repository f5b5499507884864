//! Plugin role contract
//!
//! A plugin moves opaque data and money between this node and a peer. The
//! contract is transport-agnostic: nothing here assumes a wire protocol.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use downcast_rs::{DowncastSync, impl_downcast};
use futures::future::BoxFuture;
use serde_json::Value;
use tokio::sync::broadcast;

use crate::error::{Error, Result};

/// Handler invoked with incoming data, returning the response payload
pub type DataHandler = Arc<dyn Fn(Vec<u8>) -> BoxFuture<'static, Result<Vec<u8>>> + Send + Sync>;

/// Handler invoked with an incoming amount
pub type MoneyHandler = Arc<dyn Fn(String) -> BoxFuture<'static, Result<()>> + Send + Sync>;

/// Options accepted by [`Plugin::connect`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginConnectOptions {
    pub timeout: Option<Duration>,
}

/// Connection state change broadcast to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginEvent {
    Connect,
    Disconnect,
}

/// Data and money transport to a single peer
#[async_trait]
pub trait Plugin: DowncastSync {
    /// Open the connection to the peer
    async fn connect(&self, options: PluginConnectOptions) -> Result<()>;

    /// Close the connection to the peer
    async fn disconnect(&self) -> Result<()>;

    /// Whether [`connect`](Plugin::connect) has completed and no disconnect followed
    fn is_connected(&self) -> bool;

    /// Send data to the peer and wait for its response
    async fn send_data(&self, data: Vec<u8>) -> Result<Vec<u8>>;

    /// Send an amount (in the account's base unit) to the peer
    async fn send_money(&self, amount: &str) -> Result<()>;

    /// Register the handler for incoming data; only one may be registered
    fn register_data_handler(&self, handler: DataHandler) -> Result<()>;

    /// Remove the data handler, if any
    fn deregister_data_handler(&self);

    /// Register the handler for incoming money; only one may be registered
    fn register_money_handler(&self, handler: MoneyHandler) -> Result<()>;

    /// Remove the money handler, if any
    fn deregister_money_handler(&self);

    /// Subscribe to connect/disconnect events
    fn subscribe(&self) -> broadcast::Receiver<PluginEvent>;

    /// Administrative information about the plugin
    async fn get_admin_info(&self) -> Result<Value> {
        Err(Error::plugin("admin info is not supported"))
    }

    /// Apply administrative information, returning the result
    async fn send_admin_info(&self, _info: Value) -> Result<Value> {
        Err(Error::plugin("admin info is not supported"))
    }
}
impl_downcast!(sync Plugin);

impl std::fmt::Debug for dyn Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plugin")
            .field("connected", &self.is_connected())
            .finish_non_exhaustive()
    }
}
