//! Store role contract

use async_trait::async_trait;
use downcast_rs::{DowncastSync, impl_downcast};

use crate::error::Result;

/// String key/value store
#[async_trait]
pub trait Store: DowncastSync {
    /// Get the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    async fn delete(&self, key: &str) -> Result<()>;
}
impl_downcast!(sync Store);

impl std::fmt::Debug for dyn Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}
