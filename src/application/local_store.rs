//! Typed persistence layer over the raw key-value port.
//!
//! Owns the serialized forms of the account collection, the active
//! session, and the comment log. Every service reads and writes those
//! collections exclusively through here; in-memory copies held by callers
//! are not authoritative until written back.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::account::{Account, Session};
use crate::domain::comment::Comment;
use crate::ports::{KeyValueStore, StorageError, StorageKey};

/// Typed reader/writer for the three persisted collections.
///
/// Absent keys load as empty defaults. There is no atomicity across keys;
/// each collection is read-modify-written on its own.
#[derive(Clone)]
pub struct LocalStore {
    store: Arc<dyn KeyValueStore>,
}

impl LocalStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The registered account collection, `[]` when nothing is persisted.
    pub async fn load_accounts(&self) -> Result<Vec<Account>, StorageError> {
        self.load_or_default(StorageKey::Accounts).await
    }

    pub async fn store_accounts(&self, accounts: &[Account]) -> Result<(), StorageError> {
        self.store_value(StorageKey::Accounts, &accounts).await
    }

    /// The persisted session, if someone is logged in.
    pub async fn load_session(&self) -> Result<Option<Session>, StorageError> {
        match self.store.load(StorageKey::ActiveSession).await? {
            None => Ok(None),
            Some(raw) => self.decode(StorageKey::ActiveSession, &raw).map(Some),
        }
    }

    pub async fn store_session(&self, session: &Session) -> Result<(), StorageError> {
        self.store_value(StorageKey::ActiveSession, session).await
    }

    /// Drops the persisted session. Safe to call with no session present.
    pub async fn clear_session(&self) -> Result<(), StorageError> {
        self.store.remove(StorageKey::ActiveSession).await
    }

    /// The global comment log, `[]` when nothing is persisted.
    pub async fn load_comments(&self) -> Result<Vec<Comment>, StorageError> {
        self.load_or_default(StorageKey::CommentLog).await
    }

    pub async fn store_comments(&self, comments: &[Comment]) -> Result<(), StorageError> {
        self.store_value(StorageKey::CommentLog, &comments).await
    }

    async fn load_or_default<T>(&self, key: StorageKey) -> Result<T, StorageError>
    where
        T: DeserializeOwned + Default,
    {
        match self.store.load(key).await? {
            None => Ok(T::default()),
            Some(raw) => self.decode(key, &raw),
        }
    }

    async fn store_value<T: Serialize>(&self, key: StorageKey, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|e| StorageError::SerializationFailed {
            key,
            reason: e.to_string(),
        })?;
        self.store.store(key, raw).await
    }

    fn decode<T: DeserializeOwned>(&self, key: StorageKey, raw: &str) -> Result<T, StorageError> {
        serde_json::from_str(raw).map_err(|e| {
            tracing::warn!(%key, error = %e, "corrupt persisted entry");
            StorageError::DeserializationFailed {
                key,
                reason: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryKeyValueStore;
    use crate::domain::foundation::SiteId;

    fn store() -> (Arc<InMemoryKeyValueStore>, LocalStore) {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        (kv.clone(), LocalStore::new(kv))
    }

    #[tokio::test]
    async fn absent_collections_load_as_empty_defaults() {
        let (_, local) = store();
        assert!(local.load_accounts().await.unwrap().is_empty());
        assert!(local.load_session().await.unwrap().is_none());
        assert!(local.load_comments().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn accounts_round_trip_with_persisted_shape() {
        let (kv, local) = store();

        let mut account = Account::new("alice", "pw1");
        account.favorites = vec![SiteId::new(3), SiteId::new(7)];
        local.store_accounts(&[account.clone()]).await.unwrap();

        let raw = kv.load(StorageKey::Accounts).await.unwrap().unwrap();
        assert_eq!(
            raw,
            r#"[{"username":"alice","password":"pw1","favorites":[3,7]}]"#
        );

        let loaded = local.load_accounts().await.unwrap();
        assert_eq!(loaded, vec![account]);
    }

    #[tokio::test]
    async fn session_round_trip_omits_password() {
        let (kv, local) = store();

        let session = Account::new("alice", "pw1").to_session();
        local.store_session(&session).await.unwrap();

        let raw = kv.load(StorageKey::ActiveSession).await.unwrap().unwrap();
        assert_eq!(raw, r#"{"username":"alice","favorites":[]}"#);

        assert_eq!(local.load_session().await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn clear_session_is_idempotent() {
        let (_, local) = store();
        local.clear_session().await.unwrap();

        local
            .store_session(&Account::new("a", "b").to_session())
            .await
            .unwrap();
        local.clear_session().await.unwrap();
        local.clear_session().await.unwrap();
        assert!(local.load_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_entry_surfaces_deserialization_error() {
        let (kv, local) = store();
        kv.store(StorageKey::CommentLog, "not json".into())
            .await
            .unwrap();

        let err = local.load_comments().await.unwrap_err();
        assert!(matches!(
            err,
            StorageError::DeserializationFailed {
                key: StorageKey::CommentLog,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn legacy_entries_without_favorites_still_load() {
        let (kv, local) = store();
        kv.store(
            StorageKey::Accounts,
            r#"[{"username":"old","password":"pw"}]"#.into(),
        )
        .await
        .unwrap();

        let accounts = local.load_accounts().await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert!(accounts[0].favorites.is_empty());
    }
}
