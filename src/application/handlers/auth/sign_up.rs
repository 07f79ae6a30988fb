//! SignUpHandler - Command handler for creating a new account.

use crate::application::LocalStore;
use crate::domain::account::{Account, AuthError, Session};
use crate::domain::foundation::ValidationError;

/// Command to register a new account.
#[derive(Debug, Clone)]
pub struct SignUpCommand {
    pub username: String,
    pub password: String,
}

/// Handler for sign-up.
///
/// A successful sign-up also logs the new account in, mirroring the
/// original front-end flow.
#[derive(Clone)]
pub struct SignUpHandler {
    store: LocalStore,
}

impl SignUpHandler {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// - `AuthError::Validation` when either field is empty or whitespace
    /// - `AuthError::UsernameTaken` when the exact username already exists
    /// - `AuthError::Storage` when the persisted store fails
    pub async fn handle(&self, cmd: SignUpCommand) -> Result<Session, AuthError> {
        if cmd.username.trim().is_empty() {
            return Err(ValidationError::empty_field("username").into());
        }
        if cmd.password.trim().is_empty() {
            return Err(ValidationError::empty_field("password").into());
        }

        // Always check against a fresh load; another sign-up may have
        // happened since this process last read the collection.
        let mut accounts = self.store.load_accounts().await?;
        if accounts.iter().any(|a| a.username == cmd.username) {
            return Err(AuthError::UsernameTaken);
        }

        let account = Account::new(cmd.username, cmd.password);
        let session = account.to_session();
        accounts.push(account);
        self.store.store_accounts(&accounts).await?;

        self.store.store_session(&session).await?;
        tracing::debug!(username = %session.username, "account created");
        Ok(session)
    }
}
