//! The cart store: the authoritative in-memory cart mirrored to storage.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tracing::{debug, instrument, warn};

use go_marketplace_core::{Price, ProductId};

use crate::config::CartConfig;
use crate::error::Result;
use crate::models::{CartItem, NewCartItem, storage_keys};
use crate::storage::{FileStore, KeyValueStore};

/// In-memory cart list mirrored to one persistent key-value slot.
///
/// The store owns the list for the lifetime of the process. Every mutation
/// recomputes the full list under an exclusive lock, writes the snapshot
/// to storage, and only then publishes the new list - readers never
/// observe in-memory state ahead of what is persisted, and concurrent
/// mutations cannot lose updates.
///
/// `CartStore` is cheaply cloneable via `Arc`; clones share the same state.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    storage: Arc<dyn KeyValueStore>,
    key: String,
    /// Serializes every read-modify-persist-publish sequence.
    write_lock: Mutex<()>,
    products: watch::Sender<Vec<CartItem>>,
}

impl CartStore {
    /// Load the cart persisted in `storage` under `key`.
    ///
    /// One-shot: a missing, unreadable, or unparseable snapshot yields an
    /// empty cart. Load failures are logged, never surfaced - no prior
    /// cart and a broken one are treated identically.
    pub async fn load(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let products = match storage.get(&key).await {
            Ok(Some(snapshot)) => match serde_json::from_str(&snapshot) {
                Ok(items) => items,
                Err(e) => {
                    warn!(key, "ignoring unparseable cart snapshot: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key, "could not read cart snapshot, starting empty: {e}");
                Vec::new()
            }
        };

        let (tx, _rx) = watch::channel(products);
        Self {
            inner: Arc::new(CartStoreInner {
                storage,
                key,
                write_lock: Mutex::new(()),
                products: tx,
            }),
        }
    }

    /// Open the file-backed cart described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage file location is unusable.
    pub async fn open_with_config(config: &CartConfig) -> Result<Self> {
        let storage = FileStore::open(&config.storage_path).await?;
        Ok(Self::load(Arc::new(storage), storage_keys::CART).await)
    }

    /// Current cart contents, in insertion order.
    #[must_use]
    pub fn products(&self) -> Vec<CartItem> {
        self.inner.products.borrow().clone()
    }

    /// Subscribe to cart updates.
    ///
    /// The receiver yields the full post-mutation list after every
    /// published change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<CartItem>> {
        self.inner.products.subscribe()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.products.borrow().is_empty()
    }

    /// Total number of units across all items.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.inner.products.borrow().iter().map(|p| p.quantity).sum()
    }

    /// Sum of `price x quantity` over all items.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.inner
            .products
            .borrow()
            .iter()
            .fold(Price::ZERO, |total, p| total + p.line_total())
    }

    /// Add `item` to the cart with quantity 1.
    ///
    /// Idempotent: if an item with the same id is already present the cart
    /// is left untouched - no quantity bump, no duplicate entry, no write.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted; the published
    /// list is unchanged in that case.
    #[instrument(skip(self, item), fields(id = %item.id))]
    pub async fn add(&self, item: NewCartItem) -> Result<()> {
        let _guard = self.inner.write_lock.lock().await;

        let mut products = self.products();
        if products.iter().any(|p| p.id == item.id) {
            debug!("item already in cart");
            return Ok(());
        }

        products.push(item.into());
        self.commit(products).await
    }

    /// Increase the quantity of the item with `id` by one.
    ///
    /// An unknown id leaves the list unchanged, but the snapshot is still
    /// written and republished.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted; the published
    /// list is unchanged in that case.
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn increment(&self, id: &ProductId) -> Result<()> {
        let _guard = self.inner.write_lock.lock().await;

        let mut products = self.products();
        if let Some(item) = products.iter_mut().find(|p| &p.id == id) {
            item.quantity += 1;
        }

        self.commit(products).await
    }

    /// Decrease the quantity of the item with `id` by one, removing the
    /// item entirely when its quantity was 1.
    ///
    /// An unknown id leaves the list unchanged, but the snapshot is still
    /// written and republished.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted; the published
    /// list is unchanged in that case.
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn decrement(&self, id: &ProductId) -> Result<()> {
        let _guard = self.inner.write_lock.lock().await;

        let mut products = self.products();
        match products.iter().find(|p| &p.id == id).map(|p| p.quantity) {
            Some(quantity) if quantity > 1 => {
                if let Some(item) = products.iter_mut().find(|p| &p.id == id) {
                    item.quantity -= 1;
                }
            }
            Some(_) => products.retain(|p| &p.id != id),
            None => {}
        }

        self.commit(products).await
    }

    /// Persist `products` as the new snapshot, then publish it.
    ///
    /// Publication only happens after a successful write, so consumers
    /// never see a list that storage does not hold.
    async fn commit(&self, products: Vec<CartItem>) -> Result<()> {
        let snapshot = serde_json::to_string(&products)?;
        self.inner.storage.set(&self.inner.key, snapshot).await?;
        self.inner.products.send_replace(products);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn item(id: &str, price: &str) -> NewCartItem {
        NewCartItem {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            image_url: format!("https://cdn.example.com/{id}.png"),
            price: Price::new(price.parse().unwrap()),
        }
    }

    async fn empty_cart() -> (Arc<MemoryStore>, CartStore) {
        let storage = Arc::new(MemoryStore::new());
        let cart = CartStore::load(storage.clone(), storage_keys::CART).await;
        (storage, cart)
    }

    async fn stored_snapshot(storage: &MemoryStore) -> Option<String> {
        storage.get(storage_keys::CART).await.unwrap()
    }

    #[tokio::test]
    async fn add_appends_with_quantity_one() {
        let (_storage, cart) = empty_cart().await;

        cart.add(item("p1", "10")).await.unwrap();

        let products = cart.products();
        assert_eq!(products.len(), 1);
        let added = products.first().unwrap();
        assert_eq!(added.id, ProductId::new("p1"));
        assert_eq!(added.quantity, 1);
    }

    #[tokio::test]
    async fn add_existing_id_is_a_pure_noop() {
        let (storage, cart) = empty_cart().await;
        cart.add(item("p1", "10")).await.unwrap();
        let snapshot_before = stored_snapshot(&storage).await;

        // same id, different metadata - still ignored
        cart.add(item("p1", "99")).await.unwrap();

        assert_eq!(cart.products().len(), 1);
        assert_eq!(cart.total_quantity(), 1);
        // nothing was re-persisted either
        assert_eq!(stored_snapshot(&storage).await, snapshot_before);
    }

    #[tokio::test]
    async fn increment_bumps_only_the_target_item() {
        let (_storage, cart) = empty_cart().await;
        cart.add(item("p1", "10")).await.unwrap();
        cart.add(item("p2", "20")).await.unwrap();

        cart.increment(&ProductId::new("p1")).await.unwrap();

        let quantities: Vec<u32> = cart.products().iter().map(|p| p.quantity).collect();
        assert_eq!(quantities, vec![2, 1]);
    }

    #[tokio::test]
    async fn decrement_above_one_lowers_quantity() {
        let (_storage, cart) = empty_cart().await;
        cart.add(item("p1", "10")).await.unwrap();
        cart.increment(&ProductId::new("p1")).await.unwrap();

        cart.decrement(&ProductId::new("p1")).await.unwrap();

        assert_eq!(cart.products().first().unwrap().quantity, 1);
    }

    #[tokio::test]
    async fn decrement_at_one_removes_the_item() {
        let (_storage, cart) = empty_cart().await;
        cart.add(item("p1", "10")).await.unwrap();
        cart.add(item("p2", "20")).await.unwrap();

        cart.decrement(&ProductId::new("p1")).await.unwrap();

        let products = cart.products();
        assert_eq!(products.len(), 1);
        assert!(!products.iter().any(|p| p.id == ProductId::new("p1")));
    }

    #[tokio::test]
    async fn unknown_id_still_persists_and_republishes() {
        let (storage, cart) = empty_cart().await;
        cart.add(item("p1", "10")).await.unwrap();

        let mut updates = cart.subscribe();
        updates.mark_unchanged();

        cart.increment(&ProductId::new("ghost")).await.unwrap();
        assert!(updates.has_changed().unwrap());
        updates.mark_unchanged();

        cart.decrement(&ProductId::new("ghost")).await.unwrap();
        assert!(updates.has_changed().unwrap());

        // the list itself is untouched
        assert_eq!(cart.total_quantity(), 1);
        // and the unchanged list was re-persisted
        let snapshot = stored_snapshot(&storage).await.unwrap();
        let stored: Vec<CartItem> = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(stored, cart.products());
    }

    #[tokio::test]
    async fn persisted_snapshot_matches_memory_after_each_mutation() {
        let (storage, cart) = empty_cart().await;

        cart.add(item("p1", "10")).await.unwrap();
        cart.add(item("p2", "5.50")).await.unwrap();
        cart.increment(&ProductId::new("p2")).await.unwrap();
        cart.decrement(&ProductId::new("p1")).await.unwrap();

        let snapshot = stored_snapshot(&storage).await.unwrap();
        let stored: Vec<CartItem> = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(stored, cart.products());
    }

    #[tokio::test]
    async fn load_restores_items_order_and_quantities() {
        let (storage, cart) = empty_cart().await;
        cart.add(item("p1", "10")).await.unwrap();
        cart.add(item("p2", "20")).await.unwrap();
        cart.increment(&ProductId::new("p2")).await.unwrap();

        let reloaded = CartStore::load(storage, storage_keys::CART).await;
        assert_eq!(reloaded.products(), cart.products());
    }

    #[tokio::test]
    async fn load_with_corrupt_snapshot_starts_empty() {
        let storage = Arc::new(MemoryStore::new());
        storage
            .set(storage_keys::CART, "{not json".to_string())
            .await
            .unwrap();

        let cart = CartStore::load(storage, storage_keys::CART).await;
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn derived_accessors() {
        let (_storage, cart) = empty_cart().await;
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Price::ZERO);

        cart.add(item("p1", "19.99")).await.unwrap();
        cart.increment(&ProductId::new("p1")).await.unwrap();
        cart.add(item("p2", "5")).await.unwrap();

        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.subtotal(), Price::new("44.98".parse().unwrap()));
    }
}
