//! Cart data model.
//!
//! Types persisted in the cart snapshot and the descriptor consumers pass
//! when adding an item.

use serde::{Deserialize, Serialize};

use go_marketplace_core::{Price, ProductId};

/// A product entry in the cart.
///
/// At most one `CartItem` exists per distinct `id`; `quantity` is always
/// at least 1 while the item is present (a decrement from 1 removes the
/// entry instead of storing a zero).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Unique identifier of the purchasable entity.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Display image reference.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
    /// Number of units currently in the cart.
    pub quantity: u32,
}

impl CartItem {
    /// The line total for this entry (`price x quantity`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Descriptor for an item entering the cart - a [`CartItem`] without the
/// quantity, which always starts at 1.
///
/// No shape validation is applied to the fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCartItem {
    /// Unique identifier of the purchasable entity.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Display image reference.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
}

impl From<NewCartItem> for CartItem {
    fn from(item: NewCartItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            image_url: item.image_url,
            price: item.price,
            quantity: 1,
        }
    }
}

/// Persistent storage keys for cart data.
pub mod storage_keys {
    /// Key the serialized cart snapshot is stored under.
    pub const CART: &str = "@GoMarketplace:Cart";
}
