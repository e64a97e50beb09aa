//! Local durable storage for the cart and wishlist collections.
//!
//! [`LocalStore`] is the injectable stand-in for browser local storage: a
//! string key-value surface with synchronous reads and writes. The stores
//! in [`crate::store`] mirror their full collection through it on every
//! mutation. Storage is a best-effort client cache, not a source of truth,
//! so there is no partial-write protection and a failed write is tolerated:
//! the in-memory collection remains authoritative for the session.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Storage key holding the serialized cart collection.
pub const CART_KEY: &str = "cart";

/// Storage key holding the serialized wishlist collection.
pub const WISHLIST_KEY: &str = "wishlist";

/// Errors from the local storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed (quota exceeded, permissions, missing dir).
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend rejected the write.
    #[error("storage write rejected: {0}")]
    WriteRejected(String),
}

/// Synchronous string key-value storage.
///
/// Implementations take `&self`; backends that need mutation use interior
/// mutability so stores can hold a shared handle.
pub trait LocalStore {
    /// Read the value under `key`, `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
