//! Unified error handling for cart operations.
//!
//! All fallible cart operations return `Result<T, CartError>`. Programming
//! errors (accessing the cart before the provider is initialized) panic
//! instead - see [`crate::provider`].

use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Reading or writing the persistent slot failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The cart list could not be encoded as a snapshot.
    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;
