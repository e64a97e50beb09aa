//! The cart: an ordered, persisted collection of quantity-bearing lines.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use clementine_core::{CartItem, Product, ProductId};

use super::{MAX_ITEMS, hydrate, persist};
use crate::storage::{CART_KEY, LocalStore};

/// The shopping cart.
///
/// At most one line exists per distinct product id; repeated adds increment
/// that line's quantity instead of inserting a duplicate row. Insertion
/// order is preserved across session reloads.
///
/// Prices are snapshots taken when a line is first created and are never
/// refreshed afterwards - a deliberate product decision, so catalog price
/// changes mid-session do not retroactively alter a cart the user already
/// committed to. `remove_item` followed by `add_item` takes a fresh
/// snapshot.
pub struct CartStore<S: LocalStore> {
    storage: S,
    items: Vec<CartItem>,
}

impl<S: LocalStore> CartStore<S> {
    /// Hydrate a cart from `storage`. Missing or corrupt data starts empty.
    pub fn new(storage: S) -> Self {
        let items = hydrate(&storage, CART_KEY);
        Self { storage, items }
    }

    /// Add a product to the cart.
    ///
    /// If a line for this product already exists its quantity is incremented
    /// and its price snapshot is left untouched. Otherwise a new line with
    /// quantity 1 is inserted, unless the cart is already at [`MAX_ITEMS`]
    /// distinct lines, in which case the insertion is ignored with a warning.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == product.id) {
            // Snapshot semantics: only the quantity moves.
            item.quantity += 1;
        } else if self.items.len() >= MAX_ITEMS {
            warn!(
                product_id = %product.id,
                max = MAX_ITEMS,
                "Cart is at capacity, ignoring new line"
            );
            return;
        } else {
            self.items.push(CartItem::from_product(product));
        }
        self.persist();
    }

    /// Remove the line matching `id`. No-op if absent.
    pub fn remove_item(&mut self, id: ProductId) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            debug!(product_id = %id, "remove_item on absent id, nothing to do");
            return;
        }
        self.persist();
    }

    /// Increment the quantity of the line matching `id`. No-op if absent.
    pub fn increase_quantity(&mut self, id: ProductId) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity += 1;
            self.persist();
        }
    }

    /// Decrement the quantity of the line matching `id`, but never below 1.
    ///
    /// Removal is only ever explicit via [`Self::remove_item`] - a guard
    /// against accidental deletion through repeated decrement clicks.
    pub fn decrease_quantity(&mut self, id: ProductId) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id)
            && item.quantity > 1
        {
            item.quantity -= 1;
            self.persist();
        }
    }

    /// Empty the cart and delete its storage key.
    ///
    /// Afterwards the store is indistinguishable from a fresh hydration.
    pub fn clear(&mut self) {
        self.items.clear();
        if let Err(e) = self.storage.remove(CART_KEY) {
            warn!(error = %e, "Failed to clear persisted cart");
        }
    }

    /// Sum of `price * quantity` over all lines. Pure read, full precision.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total unit count across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    fn persist(&self) {
        persist(&self.storage, CART_KEY, &self.items);
    }
}
