//! File-based Key-Value Store Adapter
//!
//! Stores each entry as one JSON text file under a base directory, the
//! desktop stand-in for the browser's origin-scoped local storage.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{KeyValueStore, StorageError, StorageKey};

/// File-backed store with one file per [`StorageKey`].
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new file store rooted at a base directory.
    ///
    /// The directory is created lazily on the first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn entry_path(&self, key: StorageKey) -> PathBuf {
        self.base_path.join(format!("{}.json", key.as_str()))
    }

    async fn ensure_base_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn load(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        let path = self.entry_path(key);
        if !path.exists() {
            tracing::debug!(%key, "no persisted entry");
            return Ok(None);
        }

        let value = fs::read_to_string(&path)
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(Some(value))
    }

    async fn store(&self, key: StorageKey, value: String) -> Result<(), StorageError> {
        self.ensure_base_dir().await?;

        let path = self.entry_path(key);
        tracing::debug!(%key, bytes = value.len(), "writing persisted entry");
        fs::write(&path, value)
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }

    async fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        let path = self.entry_path(key);
        if path.exists() {
            fs::remove_file(&path)
                .await
                .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        }
        Ok(())
    }
}
