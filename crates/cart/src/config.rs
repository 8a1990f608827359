//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_STORAGE_PATH` - Path of the JSON file backing the persistent
//!   store (default: `data/cart.json`)

use std::path::PathBuf;

/// Default location of the cart storage file.
const DEFAULT_STORAGE_PATH: &str = "data/cart.json";

/// Cart configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Path of the JSON file backing the persistent store.
    pub storage_path: PathBuf,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    /// Every variable has a default, so loading is infallible.
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            storage_path: PathBuf::from(get_env_or_default(
                "CART_STORAGE_PATH",
                DEFAULT_STORAGE_PATH,
            )),
        }
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
