//! Integration tests for GoMarketplace.
//!
//! # Test Categories
//!
//! - `cart_flow` - End-to-end cart scenarios against file-backed storage
//! - `cart_contracts` - Publication, failure, and concurrency contracts

use go_marketplace_cart::NewCartItem;
use go_marketplace_core::{Price, ProductId};

/// Build an add-descriptor for tests.
///
/// # Panics
///
/// Panics if `price` is not a valid decimal literal.
#[must_use]
pub fn test_item(id: &str, title: &str, price: &str) -> NewCartItem {
    NewCartItem {
        id: ProductId::new(id),
        title: title.to_string(),
        image_url: format!("https://cdn.example.com/{id}.png"),
        price: Price::new(price.parse().expect("valid decimal literal")),
    }
}
