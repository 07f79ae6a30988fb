//! ToggleFavoriteHandler - flips a site in and out of the session's
//! favorites set.

use crate::application::LocalStore;
use crate::domain::account::Session;
use crate::domain::foundation::SiteId;
use crate::ports::StorageError;

/// Command naming the site to toggle.
#[derive(Debug, Clone, Copy)]
pub struct ToggleFavoriteCommand {
    pub site_id: SiteId,
}

/// Handler for favorite toggling.
///
/// This is the one operation that updates two persisted keys: the active
/// session and the account collection. The session is written first; a
/// failure between the two writes leaves the collection one toggle behind
/// until the next successful toggle rewrites it.
#[derive(Clone)]
pub struct ToggleFavoriteHandler {
    store: LocalStore,
}

impl ToggleFavoriteHandler {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Returns the updated session, or `None` when no session was passed
    /// in, in which case nothing is read or written.
    pub async fn handle(
        &self,
        cmd: ToggleFavoriteCommand,
        session: Option<&Session>,
    ) -> Result<Option<Session>, StorageError> {
        let Some(session) = session else {
            tracing::warn!(site_id = %cmd.site_id, "favorite toggle declined: not logged in");
            return Ok(None);
        };

        let mut updated = session.clone();
        updated.toggle_favorite(cmd.site_id);

        self.store.store_session(&updated).await?;

        let mut accounts = self.store.load_accounts().await?;
        for account in accounts.iter_mut() {
            if account.username == updated.username {
                account.favorites = updated.favorites.clone();
            }
        }
        self.store.store_accounts(&accounts).await?;

        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryKeyValueStore;
    use crate::application::handlers::auth::{SignUpCommand, SignUpHandler};
    use std::sync::Arc;

    async fn signed_up() -> (LocalStore, ToggleFavoriteHandler, Session) {
        let store = LocalStore::new(Arc::new(InMemoryKeyValueStore::new()));
        let session = SignUpHandler::new(store.clone())
            .handle(SignUpCommand {
                username: "alice".to_string(),
                password: "pw1".to_string(),
            })
            .await
            .unwrap();
        (store.clone(), ToggleFavoriteHandler::new(store), session)
    }

    fn cmd(id: u32) -> ToggleFavoriteCommand {
        ToggleFavoriteCommand {
            site_id: SiteId::new(id),
        }
    }

    #[tokio::test]
    async fn anonymous_toggle_is_a_silent_no_op() {
        let (store, handler, _) = signed_up().await;
        store.clear_session().await.unwrap();

        let result = handler.handle(cmd(3), None).await.unwrap();
        assert!(result.is_none());
        assert!(store.load_session().await.unwrap().is_none());
        assert!(store.load_accounts().await.unwrap()[0].favorites.is_empty());
    }

    #[tokio::test]
    async fn toggle_adds_then_removes() {
        let (_, handler, session) = signed_up().await;

        let session = handler.handle(cmd(3), Some(&session)).await.unwrap().unwrap();
        assert_eq!(session.favorites, vec![SiteId::new(3)]);

        let session = handler.handle(cmd(3), Some(&session)).await.unwrap().unwrap();
        assert!(session.favorites.is_empty());
    }

    #[tokio::test]
    async fn both_persisted_copies_stay_in_sync() {
        let (store, handler, session) = signed_up().await;

        let session = handler.handle(cmd(7), Some(&session)).await.unwrap().unwrap();

        let persisted_session = store.load_session().await.unwrap().unwrap();
        let accounts = store.load_accounts().await.unwrap();
        assert_eq!(persisted_session.favorites, session.favorites);
        assert_eq!(accounts[0].favorites, session.favorites);
    }

    #[tokio::test]
    async fn only_the_matching_account_is_rewritten() {
        let (store, handler, session) = signed_up().await;
        SignUpHandler::new(store.clone())
            .handle(SignUpCommand {
                username: "bob".to_string(),
                password: "pw2".to_string(),
            })
            .await
            .unwrap();

        handler.handle(cmd(2), Some(&session)).await.unwrap();

        let accounts = store.load_accounts().await.unwrap();
        let bob = accounts.iter().find(|a| a.username == "bob").unwrap();
        assert!(bob.favorites.is_empty());
    }

    #[tokio::test]
    async fn re_added_favorite_moves_to_the_back() {
        let (_, handler, session) = signed_up().await;

        let session = handler.handle(cmd(3), Some(&session)).await.unwrap().unwrap();
        let session = handler.handle(cmd(7), Some(&session)).await.unwrap().unwrap();
        // favorites = [3, 7]
        let session = handler.handle(cmd(3), Some(&session)).await.unwrap().unwrap();
        assert_eq!(session.favorites, vec![SiteId::new(7)]);
        let session = handler.handle(cmd(3), Some(&session)).await.unwrap().unwrap();
        assert_eq!(session.favorites, vec![SiteId::new(7), SiteId::new(3)]);
    }
}
