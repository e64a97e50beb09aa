//! File-backed local storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{LocalStore, StorageError};

/// Local storage backed by one file per key under a data directory.
///
/// Writes are synchronous and whole-file, matching the at-least-once
/// durability contract of the collections: every mutation rewrites the full
/// serialized collection.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store writes under.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl LocalStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.get("cart").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.set("cart", "[1,2,3]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn test_set_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.set("wishlist", "[]").unwrap();
        store.set("wishlist", "[4]").unwrap();
        assert_eq!(store.get("wishlist").unwrap().as_deref(), Some("[4]"));
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.remove("cart").unwrap();
    }

    #[test]
    fn test_remove_deletes_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.set("cart", "[]").unwrap();
        store.remove("cart").unwrap();
        assert!(store.get("cart").unwrap().is_none());
    }
}
