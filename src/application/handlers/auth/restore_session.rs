//! RestoreSessionHandler - adopts the persisted session at process start.

use crate::application::LocalStore;
use crate::domain::account::Session;
use crate::ports::StorageError;

/// Handler for restoring a previously persisted session.
///
/// The persisted session is adopted as-is, without re-validating it
/// against the account collection. Accounts are never removed, so a
/// restored session always has a backing account in practice.
#[derive(Clone)]
pub struct RestoreSessionHandler {
    store: LocalStore,
}

impl RestoreSessionHandler {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Option<Session>, StorageError> {
        let session = self.store.load_session().await?;
        if let Some(session) = &session {
            tracing::debug!(username = %session.username, "session restored");
        }
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryKeyValueStore;
    use crate::domain::account::Account;
    use std::sync::Arc;

    #[tokio::test]
    async fn absent_session_restores_as_none() {
        let store = LocalStore::new(Arc::new(InMemoryKeyValueStore::new()));
        let restored = RestoreSessionHandler::new(store).handle().await.unwrap();
        assert!(restored.is_none());
    }

    #[tokio::test]
    async fn persisted_session_is_adopted_without_revalidation() {
        let store = LocalStore::new(Arc::new(InMemoryKeyValueStore::new()));

        // No matching entry in the account collection; restore adopts the
        // session anyway.
        let session = Account::new("ghost", "pw").to_session();
        store.store_session(&session).await.unwrap();

        let restored = RestoreSessionHandler::new(store).handle().await.unwrap();
        assert_eq!(restored, Some(session));
    }
}
