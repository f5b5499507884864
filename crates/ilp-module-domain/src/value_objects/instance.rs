//! Constructed module instances

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::{Capability, CapabilitySet};
use crate::ports::{Backend, Logger, Plugin, Store};

/// What a module factory returns
///
/// One variant per known role plus `Custom` for application-defined roles.
/// Ownership passes entirely to the caller.
#[derive(Clone)]
pub enum ModuleInstance {
    Logger(Arc<dyn Logger>),
    Store(Arc<dyn Store>),
    Plugin(Arc<dyn Plugin>),
    Backend(Arc<dyn Backend>),
    Custom(Arc<dyn Any + Send + Sync>),
}

impl ModuleInstance {
    pub fn logger(logger: impl Logger) -> Self {
        Self::Logger(Arc::new(logger))
    }

    pub fn store(store: impl Store) -> Self {
        Self::Store(Arc::new(store))
    }

    pub fn plugin(plugin: impl Plugin) -> Self {
        Self::Plugin(Arc::new(plugin))
    }

    pub fn backend(backend: impl Backend) -> Self {
        Self::Backend(Arc::new(backend))
    }

    pub fn custom<T: Any + Send + Sync>(value: T) -> Self {
        Self::Custom(Arc::new(value))
    }

    /// Short name of the variant
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Logger(_) => "logger",
            Self::Store(_) => "store",
            Self::Plugin(_) => "plugin",
            Self::Backend(_) => "backend",
            Self::Custom(_) => "custom",
        }
    }

    /// Contract members this instance provides
    pub fn capabilities(&self) -> CapabilitySet {
        let mut set: CapabilitySet = match self {
            Self::Logger(_) => Capability::LOGGER_WRITERS.iter().copied().collect(),
            Self::Store(_) => Capability::STORE.iter().copied().collect(),
            Self::Plugin(_) => Capability::PLUGIN.iter().copied().collect(),
            Self::Backend(_) => Capability::BACKEND.iter().copied().collect(),
            Self::Custom(_) => CapabilitySet::new(),
        };
        if let Self::Logger(logger) = self {
            if !logger.namespace().is_empty() {
                set.insert(Capability::Namespace);
            }
        }
        set
    }

    pub fn into_logger(self) -> Option<Arc<dyn Logger>> {
        match self {
            Self::Logger(logger) => Some(logger),
            _ => None,
        }
    }

    pub fn into_store(self) -> Option<Arc<dyn Store>> {
        match self {
            Self::Store(store) => Some(store),
            _ => None,
        }
    }

    pub fn into_plugin(self) -> Option<Arc<dyn Plugin>> {
        match self {
            Self::Plugin(plugin) => Some(plugin),
            _ => None,
        }
    }

    pub fn into_backend(self) -> Option<Arc<dyn Backend>> {
        match self {
            Self::Backend(backend) => Some(backend),
            _ => None,
        }
    }

    /// Concrete value of a `Custom` instance
    pub fn downcast_custom<T: Any + Send + Sync>(self) -> Option<Arc<T>> {
        match self {
            Self::Custom(value) => value.downcast::<T>().ok(),
            _ => None,
        }
    }
}

impl fmt::Debug for ModuleInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModuleInstance").field(&self.kind()).finish()
    }
}
