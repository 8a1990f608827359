//! JSON-file-backed storage backend.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::sync::RwLock;
use tracing::warn;

use super::{KeyValueStore, StorageError};

/// Durable store persisting all entries as a single JSON file.
///
/// The full `key -> value` map is rewritten on every `set`. Intended for
/// small device-local state where a database is overkill.
pub struct FileStore {
    entries: RwLock<HashMap<String, String>>,
    path: PathBuf,
}

impl FileStore {
    /// Open a store at `path`, loading existing entries.
    ///
    /// A missing file starts empty and is created on first write. A file
    /// that cannot be parsed also starts empty, with a logged warning,
    /// rather than failing startup.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the parent directory cannot be created.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let entries = match fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                warn!(path = %path.display(), "discarding unparseable store file: {e}");
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };

        Ok(Self {
            entries: RwLock::new(entries),
            path,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn save(&self) -> Result<(), StorageError> {
        let data = {
            let entries = self.entries.read().await;
            serde_json::to_vec(&*entries)?
        };
        fs::write(&self.path, data).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.write().await.insert(key.to_owned(), value);
        self.save().await
    }
}
