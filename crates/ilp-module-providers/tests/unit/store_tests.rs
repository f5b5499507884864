//! Tests for the in-memory store

use ilp_module_domain::{ModuleOptions, Store};
use ilp_module_providers::stores::InMemoryStore;

use crate::common::loader;

#[tokio::test]
async fn test_put_get_delete() {
    let store = InMemoryStore::new("ilp:");

    assert_eq!(store.get("k").await.unwrap(), None);
    store.put("k", "v").await.unwrap();
    assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));

    store.put("k", "w").await.unwrap();
    assert_eq!(store.get("k").await.unwrap(), Some("w".to_string()));
    assert_eq!(store.len(), 1);

    store.delete("k").await.unwrap();
    assert_eq!(store.get("k").await.unwrap(), None);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_delete_missing_key_is_ok() {
    let store = InMemoryStore::new("");
    assert!(store.delete("missing").await.is_ok());
}

#[tokio::test]
async fn test_clones_share_entries_under_prefix() {
    let store = InMemoryStore::new("a:");
    let clone = store.clone();
    clone.put("k", "v").await.unwrap();

    assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));
    assert_eq!(store.prefix(), "a:");
}

#[tokio::test]
async fn test_default_store_uses_ilp_prefix() {
    let store = loader()
        .create_store(None, None, None)
        .expect("in-memory store is the default");
    let store = store
        .downcast_arc::<InMemoryStore>()
        .ok()
        .expect("default store is in-memory");
    assert_eq!(store.prefix(), "ilp:");
}

#[tokio::test]
async fn test_explicit_prefix_wins() {
    let store = loader()
        .create_store(
            Some("in-memory"),
            Some(ModuleOptions::new().with("prefix", "TEST")),
            None,
        )
        .expect("in-memory store is built in");
    let store = store
        .downcast_arc::<InMemoryStore>()
        .ok()
        .expect("store is in-memory");
    assert_eq!(store.prefix(), "TEST");
}
