//! In-memory store implementation
//!
//! Keeps every entry in a concurrent hash map. Keys are stored under the
//! configured prefix, so several stores can share one map without clashing.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use ilp_module_domain::error::Result;
use ilp_module_domain::{ModuleInstance, ModuleOptions, ModuleServices, Store};
use serde::Deserialize;

/// Options accepted by [`InMemoryStore`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InMemoryStoreOptions {
    #[serde(default)]
    pub prefix: String,
}

/// In-memory key/value store
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    prefix: String,
    entries: Arc<DashMap<String, String>>,
}

impl InMemoryStore {
    /// Create an empty store prefixing every key with `prefix`
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            entries: Arc::new(DashMap::new()),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn key(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .get(&self.key(key))
            .map(|entry| entry.value().clone()))
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(self.key(key), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.remove(&self.key(key));
        Ok(())
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use ilp_module_application::registry::{BUILTIN_MODULES, ModuleEntry, ModuleExport};

/// Factory function for creating in-memory store instances.
fn in_memory_store_factory(
    options: ModuleOptions,
    _services: Option<ModuleServices>,
) -> Result<ModuleInstance> {
    let options: InMemoryStoreOptions = options.deserialize("in-memory")?;
    Ok(ModuleInstance::store(InMemoryStore::new(options.prefix)))
}

#[linkme::distributed_slice(BUILTIN_MODULES)]
static IN_MEMORY_STORE: ModuleEntry = ModuleEntry {
    role: "store",
    name: "in-memory",
    description: "In-memory key/value store",
    export: ModuleExport::default_export(in_memory_store_factory),
};
