//! Key-Value Store Port - Interface for the origin-scoped persisted store.
//!
//! The front-end this core was extracted from persisted everything in the
//! browser's local storage under three fixed string keys. This port keeps
//! that contract: string keys, string values, no atomicity across keys.

use async_trait::async_trait;
use std::fmt;

/// The three persisted entries. The key set is closed; nothing else is
/// ever written to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// The registered account collection.
    Accounts,
    /// The currently authenticated account, if any.
    ActiveSession,
    /// The global append-only comment log.
    CommentLog,
}

impl StorageKey {
    /// The literal key name, unchanged from the original front-end so an
    /// exported browser store can be dropped in as-is.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Accounts => "users",
            StorageKey::ActiveSession => "user",
            StorageKey::CommentLog => "comments",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during store operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to serialize value for key '{key}': {reason}")]
    SerializationFailed { key: StorageKey, reason: String },

    #[error("Failed to deserialize value for key '{key}': {reason}")]
    DeserializationFailed { key: StorageKey, reason: String },
}

/// Port for loading and storing the three persisted entries.
///
/// Values are serialized text. Absent keys load as `None`; the typed layer
/// above maps absence to empty defaults. Each key is read-modify-written
/// independently.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Load the serialized value for a key, or `None` if absent.
    async fn load(&self, key: StorageKey) -> Result<Option<String>, StorageError>;

    /// Store the serialized value for a key, replacing any prior value.
    async fn store(&self, key: StorageKey, value: String) -> Result<(), StorageError>;

    /// Remove the key entirely. Removing an absent key is not an error.
    async fn remove(&self, key: StorageKey) -> Result<(), StorageError>;
}
