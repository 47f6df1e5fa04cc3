//! Durable key-value storage for session-surviving state.
//!
//! Favorites and the theme preference outlive the process; this module
//! gives them a small string store with one UTF-8 file per key under a
//! root directory. Reads of absent keys return `None`, writes overwrite
//! the whole value.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Errors raised by the key-value store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access storage: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// A directory-backed store of string values under fixed keys.
///
/// Keys are simple names (no path separators); each key maps to a file
/// directly under the store's root directory.
#[derive(Debug, Clone)]
pub struct KeyValueStore {
    root: Utf8PathBuf,
}

impl KeyValueStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::IoError` when the directory cannot be
    /// created.
    pub fn open(root: impl Into<Utf8PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(KeyValueStore { root })
    }

    /// Returns the value stored under `key`, or `None` when absent.
    pub fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::write(&path, value)?;
        Ok(())
    }

    /// Removes `key` from the store; removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<Utf8PathBuf, StorageError> {
        if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn open_temp_store() -> (TempDir, KeyValueStore) {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap();
        let store = KeyValueStore::open(root).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_get_absent_key_is_none() {
        let (_temp_dir, store) = open_temp_store();
        assert!(store.get("favorites").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let (_temp_dir, store) = open_temp_store();
        store.set("favorites", r#"["A","B"]"#).unwrap();
        assert_eq!(store.get("favorites").unwrap().unwrap(), r#"["A","B"]"#);
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let (_temp_dir, store) = open_temp_store();
        store.set("theme", "light").unwrap();
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().unwrap(), "dark");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_temp_dir, store) = open_temp_store();
        store.set("theme", "dark").unwrap();
        store.remove("theme").unwrap();
        store.remove("theme").unwrap();
        assert!(store.get("theme").unwrap().is_none());
    }

    #[test]
    fn test_open_creates_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp_dir.path().join("nested/state")).unwrap();

        let store = KeyValueStore::open(root.clone()).unwrap();
        store.set("favorites", "[]").unwrap();
        assert_eq!(store.root(), root);
    }

    #[test]
    fn test_invalid_keys_are_rejected() {
        let (_temp_dir, store) = open_temp_store();
        for key in ["", "a/b", "a\\b", ".", ".."] {
            assert!(matches!(
                store.get(key),
                Err(StorageError::InvalidKey(_))
            ));
        }
    }

    #[test]
    fn test_values_survive_reopen() {
        let (_temp_dir, store) = open_temp_store();
        store.set("favorites", r#"["A"]"#).unwrap();

        let reopened = KeyValueStore::open(store.root().to_path_buf()).unwrap();
        assert_eq!(reopened.get("favorites").unwrap().unwrap(), r#"["A"]"#);
    }
}
