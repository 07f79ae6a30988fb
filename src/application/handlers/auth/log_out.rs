//! LogOutHandler - clears the active session.

use crate::application::LocalStore;
use crate::ports::StorageError;

/// Handler for log-out. Idempotent; logging out with no session is a
/// successful no-op.
#[derive(Clone)]
pub struct LogOutHandler {
    store: LocalStore,
}

impl LogOutHandler {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<(), StorageError> {
        self.store.clear_session().await
    }
}
