//! LogInHandler - Command handler for authenticating against the
//! persisted account collection.

use crate::application::LocalStore;
use crate::domain::account::{AuthError, Session};

/// Command carrying the submitted credentials.
#[derive(Debug, Clone)]
pub struct LogInCommand {
    pub username: String,
    pub password: String,
}

/// Handler for log-in.
#[derive(Clone)]
pub struct LogInHandler {
    store: LocalStore,
}

impl LogInHandler {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Finds the first account whose username and password both match
    /// exactly. Unknown usernames and wrong passwords yield the same
    /// error, so a caller cannot probe which usernames exist.
    ///
    /// # Errors
    ///
    /// - `AuthError::InvalidCredentials` when no account matches
    /// - `AuthError::Storage` when the persisted store fails
    pub async fn handle(&self, cmd: LogInCommand) -> Result<Session, AuthError> {
        let accounts = self.store.load_accounts().await?;

        let account = accounts
            .iter()
            .find(|a| a.username == cmd.username && a.password == cmd.password)
            .ok_or(AuthError::InvalidCredentials)?;

        let session = account.to_session();
        self.store.store_session(&session).await?;
        tracing::debug!(username = %session.username, "logged in");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryKeyValueStore;
    use crate::application::handlers::auth::{SignUpCommand, SignUpHandler};
    use crate::domain::foundation::SiteId;
    use std::sync::Arc;

    async fn seeded() -> (LocalStore, LogInHandler) {
        let store = LocalStore::new(Arc::new(InMemoryKeyValueStore::new()));
        SignUpHandler::new(store.clone())
            .handle(SignUpCommand {
                username: "alice".to_string(),
                password: "pw1".to_string(),
            })
            .await
            .unwrap();
        store.clear_session().await.unwrap();
        (store.clone(), LogInHandler::new(store))
    }

    fn cmd(username: &str, password: &str) -> LogInCommand {
        LogInCommand {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn matching_credentials_restore_the_account_view() {
        let (store, handler) = seeded().await;

        let session = handler.handle(cmd("alice", "pw1")).await.unwrap();
        assert_eq!(session.username, "alice");
        assert!(session.favorites.is_empty());
        assert_eq!(store.load_session().await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_are_indistinguishable() {
        let (_, handler) = seeded().await;

        let wrong_password = handler.handle(cmd("alice", "nope")).await.unwrap_err();
        let unknown_user = handler.handle(cmd("mallory", "pw1")).await.unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_user, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.user_message(), unknown_user.user_message());
    }

    #[tokio::test]
    async fn failed_log_in_does_not_create_a_session() {
        let (store, handler) = seeded().await;
        let _ = handler.handle(cmd("alice", "nope")).await;
        assert!(store.load_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn log_in_carries_current_favorites() {
        let (store, handler) = seeded().await;

        let mut accounts = store.load_accounts().await.unwrap();
        accounts[0].favorites = vec![SiteId::new(4)];
        store.store_accounts(&accounts).await.unwrap();

        let session = handler.handle(cmd("alice", "pw1")).await.unwrap();
        assert_eq!(session.favorites, vec![SiteId::new(4)]);
    }
}
