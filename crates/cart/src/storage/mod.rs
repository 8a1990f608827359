//! Persistent key-value storage abstraction.
//!
//! The cart treats its durable slot as an opaque external collaborator: a
//! string-keyed get/set store. [`FileStore`] is the device-local default;
//! [`MemoryStore`] backs tests and ephemeral carts.

use async_trait::async_trait;
use thiserror::Error;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing medium holds data that could not be encoded or decoded.
    #[error("storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// String-keyed get/set storage.
///
/// Implementations can be file-backed, in-memory, or remote KV. They must
/// be thread-safe; the cart holds one behind `Arc<dyn KeyValueStore>`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing medium cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing medium cannot be written.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}
