//! Persisted collection stores: cart and wishlist.
//!
//! Both stores follow the same lifecycle: hydrate from local storage at
//! construction, mutate in memory through synchronous operations, and mirror
//! the full collection back to storage after every mutation. Operations are
//! total over "item present or absent" - acting on an absent id is a no-op,
//! never an error.
//!
//! Mutations run to completion before the next one starts (the stores take
//! `&mut self`), which is the sole concurrency guarantee the design relies
//! on. Nothing awaits between reading and writing the collection.
//!
//! Persistence is best-effort: a corrupt payload hydrates as an empty
//! collection, and a failed write is logged while the in-memory state stays
//! authoritative for the session.

mod cart;
mod wishlist;

pub use cart::CartStore;
pub use wishlist::WishlistStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::storage::LocalStore;

/// Upper bound on distinct lines per collection.
///
/// Browser-profile storage is quota-limited, so unbounded growth eventually
/// turns every persist into a failure. Inserting a new line past this bound
/// is ignored with a warning; quantity bumps on existing lines are unaffected.
pub const MAX_ITEMS: usize = 100;

/// Load a collection from storage, treating any failure as empty.
fn hydrate<S: LocalStore, T: DeserializeOwned>(storage: &S, key: &str) -> Vec<T> {
    match storage.get(key) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(key, error = %e, "Discarding corrupt persisted collection");
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!(key, error = %e, "Failed to read persisted collection, starting empty");
            Vec::new()
        }
    }
}

/// Serialize the full collection to storage, tolerating write failure.
fn persist<S: LocalStore, T: Serialize>(storage: &S, key: &str, items: &[T]) {
    match serde_json::to_string(items) {
        Ok(json) => {
            if let Err(e) = storage.set(key, &json) {
                warn!(key, error = %e, "Failed to persist collection, in-memory state remains authoritative");
            }
        }
        Err(e) => warn!(key, error = %e, "Failed to serialize collection"),
    }
}
