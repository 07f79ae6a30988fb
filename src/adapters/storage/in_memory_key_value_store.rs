//! In-Memory Key-Value Store Adapter
//!
//! Holds the three persisted entries in a map of serialized strings.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{KeyValueStore, StorageError, StorageKey};

/// In-memory store keeping values in their serialized text form, matching
/// the behavior of the persisted store it stands in for.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<StorageKey, String>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored entries (useful for tests).
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Number of present keys.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn load(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(&key).cloned())
    }

    async fn store(&self, key: StorageKey, value: String) -> Result<(), StorageError> {
        self.entries.write().await.insert(key, value);
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        self.entries.write().await.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_empty() {
        let store = InMemoryKeyValueStore::new();
        assert!(store.is_empty().await);
        assert!(store.load(StorageKey::Accounts).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn store_load_remove_cycle() {
        let store = InMemoryKeyValueStore::new();

        store.store(StorageKey::ActiveSession, "{}".into()).await.unwrap();
        assert_eq!(store.len().await, 1);
        assert_eq!(
            store.load(StorageKey::ActiveSession).await.unwrap().as_deref(),
            Some("{}")
        );

        store.remove(StorageKey::ActiveSession).await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn clear_drops_everything() {
        let store = InMemoryKeyValueStore::new();
        store.store(StorageKey::Accounts, "[]".into()).await.unwrap();
        store.store(StorageKey::CommentLog, "[]".into()).await.unwrap();

        store.clear().await;
        assert!(store.is_empty().await);
    }
}
