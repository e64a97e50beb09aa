//! In-memory local storage, used in tests and as a throwaway backend.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{LocalStore, StorageError};

/// Local storage held entirely in memory.
///
/// With `fail_writes` enabled every `set`/`remove` returns an error, which
/// tests use to verify that the collections stay authoritative in memory
/// when persistence is unavailable (private browsing, quota exceeded).
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: bool,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects every write.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            fail_writes: true,
        }
    }

    /// Create a store pre-seeded with `key` -> `value`.
    #[must_use]
    pub fn seeded(key: &str, value: &str) -> Self {
        let store = Self::new();
        let mut entries = store.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        drop(entries);
        store
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::WriteRejected("writes disabled".to_string()));
        }
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::WriteRejected("writes disabled".to_string()));
        }
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
        store.remove("cart").unwrap();
        assert!(store.get("cart").unwrap().is_none());
    }

    #[test]
    fn test_failing_store_rejects_writes_but_reads() {
        let store = MemoryStore::failing();
        assert!(store.set("cart", "[]").is_err());
        assert!(store.remove("cart").is_err());
        assert!(store.get("cart").unwrap().is_none());
    }
}
