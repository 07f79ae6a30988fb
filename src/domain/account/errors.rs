//! Auth-specific error types.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::StorageError;

/// Errors surfaced by the sign-up and log-in operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Username already exists. Please choose another one.")]
    UsernameTaken,

    #[error("Invalid username or password.")]
    InvalidCredentials,

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Message suitable for showing directly to the person at the keyboard.
    ///
    /// Storage failures are reworded as a recoverable warning rather than
    /// leaking adapter detail.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Storage(_) => {
                "Saved data is currently unavailable. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}
