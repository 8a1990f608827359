//! Dependency-injection boundary for the cart store.
//!
//! The provider is an explicit state-holder constructed once at
//! application start and threaded (by reference or clone of the installed
//! store) to whichever components need cart access. It is deliberately not
//! a global: the application owns the instance.

use std::sync::OnceLock;

use crate::store::CartStore;

/// Holder wiring one [`CartStore`] into the application.
///
/// Requesting the cart before a store has been installed is a programming
/// error at the call site and fails loudly, never returning a degraded or
/// empty cart.
#[derive(Default)]
pub struct CartProvider {
    store: OnceLock<CartStore>,
}

impl CartProvider {
    /// Create an empty provider.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store: OnceLock::new(),
        }
    }

    /// Install the cart store.
    ///
    /// # Panics
    ///
    /// Panics if a store was already installed; the cart must be wired
    /// exactly once during application startup.
    pub fn install(&self, store: CartStore) {
        assert!(
            self.store.set(store).is_ok(),
            "CartProvider::install called twice; wire the cart store exactly once at startup"
        );
    }

    /// Access the installed cart store.
    ///
    /// # Panics
    ///
    /// Panics if no store has been installed. Call [`Self::install`]
    /// during application startup before handing the provider to
    /// consumers.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        self.store
            .get()
            .expect("cart accessed before CartProvider::install; wire the cart store at startup")
    }

    /// Whether a store has been installed.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.store.get().is_some()
    }
}
