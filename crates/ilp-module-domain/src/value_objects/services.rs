//! Services injected into every module constructor

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::AccountInfo;
use crate::ports::{Logger, Store};

/// Account-info lookup handed to backends
pub type AccountInfoLookup = Arc<dyn Fn(&str) -> Option<AccountInfo> + Send + Sync>;

/// Collaborators supplied to a module constructor
///
/// `log` is always present. The remaining entries are optional and
/// role-specific.
#[derive(Clone)]
pub struct ModuleServices {
    /// Logger the module writes to
    pub log: Arc<dyn Logger>,
    /// Store the module may persist state in
    pub store: Option<Arc<dyn Store>>,
    /// Account-info lookup used by backends
    pub get_info: Option<AccountInfoLookup>,
    extra: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl ModuleServices {
    /// Services containing only a logger
    pub fn new(log: Arc<dyn Logger>) -> Self {
        Self {
            log,
            store: None,
            get_info: None,
            extra: HashMap::new(),
        }
    }

    /// Add a store
    pub fn with_store(mut self, store: Arc<dyn Store>) -> Self {
        self.store = Some(store);
        self
    }

    /// Add an account-info lookup
    pub fn with_account_info<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<AccountInfo> + Send + Sync + 'static,
    {
        self.get_info = Some(Arc::new(lookup));
        self
    }

    /// Add an application-defined service
    pub fn with_service<T: Any + Send + Sync>(mut self, key: impl Into<String>, service: T) -> Self {
        self.extra.insert(key.into(), Arc::new(service));
        self
    }

    /// Application-defined service registered under `key` with type `T`
    pub fn service<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        self.extra
            .get(key)
            .cloned()
            .and_then(|service| service.downcast::<T>().ok())
    }
}

impl fmt::Debug for ModuleServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleServices")
            .field("log", &self.log.namespace())
            .field("store", &self.store.is_some())
            .field("get_info", &self.get_info.is_some())
            .field("extra", &self.extra.keys().collect::<Vec<_>>())
            .finish()
    }
}
