//! The wishlist: an ordered, persisted set of saved products.

use std::collections::HashSet;

use tracing::{debug, warn};

use clementine_core::{Product, ProductId, WishlistItem};

use super::{MAX_ITEMS, hydrate, persist};
use crate::storage::{LocalStore, WISHLIST_KEY};

/// The wishlist.
///
/// Set semantics over product ids: adding an already-present product is
/// silently ignored, not an error. The public contract is still an ordered
/// sequence - insertion order is preserved across reloads - but an internal
/// id index keeps [`Self::contains`] O(1) so the view layer can toggle a
/// "favorited" indicator per product card without scanning.
pub struct WishlistStore<S: LocalStore> {
    storage: S,
    items: Vec<WishlistItem>,
    ids: HashSet<ProductId>,
}

impl<S: LocalStore> WishlistStore<S> {
    /// Hydrate a wishlist from `storage`. Missing or corrupt data starts
    /// empty.
    pub fn new(storage: S) -> Self {
        let items: Vec<WishlistItem> = hydrate(&storage, WISHLIST_KEY);
        let ids = items.iter().map(|item| item.id).collect();
        Self { storage, items, ids }
    }

    /// Add a product, snapshotting its effective price. Duplicates are
    /// silently ignored; insertions past [`MAX_ITEMS`] are dropped with a
    /// warning.
    pub fn add(&mut self, product: &Product) {
        if self.ids.contains(&product.id) {
            debug!(product_id = %product.id, "Product already wishlisted");
            return;
        }
        if self.items.len() >= MAX_ITEMS {
            warn!(
                product_id = %product.id,
                max = MAX_ITEMS,
                "Wishlist is at capacity, ignoring entry"
            );
            return;
        }
        self.ids.insert(product.id);
        self.items.push(WishlistItem::from_product(product));
        self.persist();
    }

    /// Remove the entry matching `id`. No-op if absent.
    pub fn remove(&mut self, id: ProductId) {
        if !self.ids.remove(&id) {
            return;
        }
        self.items.retain(|item| item.id != id);
        self.persist();
    }

    /// Empty the wishlist and persist the empty collection.
    ///
    /// Afterwards the store is indistinguishable from a fresh hydration.
    pub fn clear(&mut self) {
        self.items.clear();
        self.ids.clear();
        self.persist();
    }

    /// Whether `id` is wishlisted. O(1).
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the wishlist has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) {
        persist(&self.storage, WISHLIST_KEY, &self.items);
    }
}
