//! Mirror plugin
//!
//! A plugin whose peer is itself: data and money sent through it are handed
//! straight to the handlers registered on the same instance. Useful for tests
//! and local loopback setups.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use ilp_module_domain::error::{Error, Result};
use ilp_module_domain::ports::{DataHandler, MoneyHandler, PluginConnectOptions, PluginEvent};
use ilp_module_domain::{Logger, ModuleInstance, ModuleOptions, ModuleServices, Plugin};
use tokio::sync::broadcast;

/// Capacity of the connect/disconnect event channel
const EVENT_CAPACITY: usize = 16;

/// Plugin that loops every outgoing call back into its own handlers
pub struct MirrorPlugin {
    connected: AtomicBool,
    data_handler: RwLock<Option<DataHandler>>,
    money_handler: RwLock<Option<MoneyHandler>>,
    events: broadcast::Sender<PluginEvent>,
    log: Arc<dyn Logger>,
}

impl MirrorPlugin {
    /// Plugin interface version implemented
    pub const VERSION: u32 = 2;

    pub fn new(log: Arc<dyn Logger>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            connected: AtomicBool::new(false),
            data_handler: RwLock::new(None),
            money_handler: RwLock::new(None),
            events,
            log,
        }
    }

    fn emit(&self, event: PluginEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }

    fn data_handler(&self) -> Result<DataHandler> {
        self.data_handler
            .read()
            .map_err(|_| Error::plugin("data handler lock poisoned"))?
            .clone()
            .ok_or_else(|| Error::plugin("no data handler registered"))
    }

    fn money_handler(&self) -> Result<MoneyHandler> {
        self.money_handler
            .read()
            .map_err(|_| Error::plugin("money handler lock poisoned"))?
            .clone()
            .ok_or_else(|| Error::plugin("no money handler registered"))
    }
}

impl std::fmt::Debug for MirrorPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MirrorPlugin")
            .field("connected", &self.is_connected())
            .field("namespace", &self.log.namespace())
            .finish()
    }
}

#[async_trait]
impl Plugin for MirrorPlugin {
    async fn connect(&self, _options: PluginConnectOptions) -> Result<()> {
        self.connected.store(true, Ordering::SeqCst);
        self.log.debug("Connected");
        self.emit(PluginEvent::Connect);
        Ok(())
    }

    async fn disconnect(&self) -> Result<()> {
        self.connected.store(false, Ordering::SeqCst);
        self.log.debug("Disconnected");
        self.emit(PluginEvent::Disconnect);
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn send_data(&self, data: Vec<u8>) -> Result<Vec<u8>> {
        self.log
            .trace(&format!("Mirrored data: {}", hex::encode(&data)));
        let handler = self.data_handler()?;
        handler(data).await
    }

    async fn send_money(&self, amount: &str) -> Result<()> {
        self.log.trace(&format!("Mirrored money: {amount}"));
        let handler = self.money_handler()?;
        handler(amount.to_string()).await
    }

    fn register_data_handler(&self, handler: DataHandler) -> Result<()> {
        let mut slot = self
            .data_handler
            .write()
            .map_err(|_| Error::plugin("data handler lock poisoned"))?;
        if slot.is_some() {
            return Err(Error::plugin("A data handler is already registered"));
        }
        self.log.debug("Registered data handler");
        *slot = Some(handler);
        Ok(())
    }

    fn deregister_data_handler(&self) {
        if let Ok(mut slot) = self.data_handler.write() {
            *slot = None;
        }
        self.log.debug("Deregistered data handler");
    }

    fn register_money_handler(&self, handler: MoneyHandler) -> Result<()> {
        let mut slot = self
            .money_handler
            .write()
            .map_err(|_| Error::plugin("money handler lock poisoned"))?;
        if slot.is_some() {
            return Err(Error::plugin("A money handler is already registered"));
        }
        self.log.debug("Registered money handler");
        *slot = Some(handler);
        Ok(())
    }

    fn deregister_money_handler(&self) {
        if let Ok(mut slot) = self.money_handler.write() {
            *slot = None;
        }
        self.log.debug("Deregistered money handler");
    }

    fn subscribe(&self) -> broadcast::Receiver<PluginEvent> {
        self.events.subscribe()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use ilp_module_application::registry::{BUILTIN_MODULES, ModuleEntry, ModuleExport};

/// Factory function for creating mirror plugin instances.
fn mirror_plugin_factory(
    _options: ModuleOptions,
    services: Option<ModuleServices>,
) -> Result<ModuleInstance> {
    let services = services.ok_or_else(|| Error::missing_service("MirrorPlugin", "log"))?;
    Ok(ModuleInstance::plugin(MirrorPlugin::new(services.log)))
}

#[linkme::distributed_slice(BUILTIN_MODULES)]
static MIRROR_PLUGIN: ModuleEntry = ModuleEntry {
    role: "plugin",
    name: "mirror",
    description: "Loopback plugin delivering to its own handlers",
    export: ModuleExport::default_export(mirror_plugin_factory),
};
