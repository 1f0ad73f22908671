//! In-process list store.

use crate::domain::repositories::{ListStore, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// A list store that keeps everything in process memory.
///
/// Contents are lost on restart.
///
/// # Use Cases
///
/// - Integration tests that need a working store without a network
/// - Local development of the capture page
#[derive(Default)]
pub struct MemoryListStore {
    lists: RwLock<HashMap<String, Vec<String>>>,
}

impl MemoryListStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using MemoryListStore");
        Self::default()
    }

    /// Creates a store with `list` already written under `key`.
    pub fn with_list(key: &str, list: Vec<String>) -> Self {
        let mut lists = HashMap::new();
        lists.insert(key.to_string(), list);
        Self {
            lists: RwLock::new(lists),
        }
    }

    /// Returns a copy of the list under `key`, if any.
    pub async fn snapshot(&self, key: &str) -> Option<Vec<String>> {
        self.lists.read().await.get(key).cloned()
    }
}

#[async_trait]
impl ListStore for MemoryListStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Vec<String>>> {
        Ok(self.lists.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, list: &[String]) -> StoreResult<()> {
        self.lists
            .write()
            .await
            .insert(key.to_string(), list.to_vec());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_absent_key() {
        let store = MemoryListStore::new();
        assert_eq!(store.get("emails").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_replaces_list() {
        let store = MemoryListStore::with_list("emails", vec!["a@x.com".to_string()]);

        store
            .set("emails", &["b@x.com".to_string()])
            .await
            .unwrap();

        assert_eq!(
            store.snapshot("emails").await,
            Some(vec!["b@x.com".to_string()])
        );
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let store = MemoryListStore::new();
        store.set("one", &["a@x.com".to_string()]).await.unwrap();

        assert_eq!(store.get("two").await.unwrap(), None);
        assert!(store.health_check().await);
    }
}
