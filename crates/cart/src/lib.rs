//! GoMarketplace Cart - client-side shopping cart state.
//!
//! The cart is the authoritative in-memory list of items for the lifetime
//! of the application session, mirrored to a local persistent key-value
//! store after every mutation and reloaded once at startup.
//!
//! # Architecture
//!
//! - [`store::CartStore`] - the state container: one-shot load, three
//!   mutators (add, increment, decrement), read access and a watch-based
//!   update feed
//! - [`storage`] - the opaque string-keyed get/set abstraction the cart
//!   persists through, with file-backed and in-memory implementations
//! - [`provider::CartProvider`] - the dependency-injection boundary
//!   consumers obtain the cart through
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use go_marketplace_cart::models::storage_keys;
//! use go_marketplace_cart::storage::MemoryStore;
//! use go_marketplace_cart::{CartStore, NewCartItem};
//! use go_marketplace_core::{Price, ProductId};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> go_marketplace_cart::Result<()> {
//! let cart = CartStore::load(Arc::new(MemoryStore::new()), storage_keys::CART).await;
//!
//! cart.add(NewCartItem {
//!     id: ProductId::new("p1"),
//!     title: "Shirt".into(),
//!     image_url: "https://cdn.example.com/shirt.png".into(),
//!     price: Price::new("10".parse().unwrap()),
//! })
//! .await?;
//!
//! assert_eq!(cart.total_quantity(), 1);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod storage;
pub mod store;

pub use config::CartConfig;
pub use error::{CartError, Result};
pub use models::{CartItem, NewCartItem};
pub use provider::CartProvider;
pub use store::CartStore;
