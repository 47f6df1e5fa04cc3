//! The persisted favorite set.
//!
//! Favorites are recipe titles kept in a [`BTreeSet`] and written through
//! to durable storage on every toggle, serialized as a JSON array of
//! strings under a fixed key. The set is small and human-driven, so the
//! whole value is rewritten on each mutation without batching.

use crate::storage::{KeyValueStore, StorageError};
use log::{debug, warn};
use std::collections::BTreeSet;

/// Storage key the serialized favorite set lives under.
pub const FAVORITES_KEY: &str = "favorites";

/// The set of favorited recipe titles, backed by durable storage.
///
/// Loading never fails: an absent or malformed persisted value yields the
/// empty set. Mutations persist immediately; a persistence failure is
/// logged and the in-memory set stays authoritative for the session.
#[derive(Debug)]
pub struct FavoriteRegistry {
    store: KeyValueStore,
    titles: BTreeSet<String>,
}

impl FavoriteRegistry {
    /// Loads the favorite set from `store`.
    ///
    /// An absent key or an unparsable payload is treated as the empty set,
    /// never as an error.
    pub fn load(store: KeyValueStore) -> Self {
        let titles = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(titles) => titles.into_iter().collect(),
                Err(err) => {
                    warn!("discarding malformed favorites payload: {err}");
                    BTreeSet::new()
                }
            },
            Ok(None) => BTreeSet::new(),
            Err(err) => {
                warn!("failed to read favorites: {err}");
                BTreeSet::new()
            }
        };

        debug!("loaded {} favorite(s)", titles.len());
        FavoriteRegistry { store, titles }
    }

    /// Returns true if `title` is currently favorited.
    pub fn is_favorite(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    /// Toggles `title` and persists the updated set.
    ///
    /// Returns the new membership state: `true` when the title was added,
    /// `false` when it was removed.
    pub fn toggle(&mut self, title: &str) -> bool {
        let now_favorite = if self.titles.contains(title) {
            self.titles.remove(title);
            false
        } else {
            self.titles.insert(title.to_string());
            true
        };

        if let Err(err) = self.write_back() {
            warn!("failed to persist favorites: {err}");
        }
        now_favorite
    }

    /// Read-only view of the favorited titles, for the filter engine.
    pub fn titles(&self) -> &BTreeSet<String> {
        &self.titles
    }

    /// Number of favorited titles.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Returns true when nothing is favorited.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Serializes the whole set and overwrites the stored value.
    fn write_back(&self) -> Result<(), StorageError> {
        // BTreeSet iteration keeps the serialized sequence ordered
        let titles: Vec<&String> = self.titles.iter().collect();
        let payload = serde_json::to_string(&titles)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
        self.store.set(FAVORITES_KEY, &payload)
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
    fn test_load_without_persisted_value_is_empty() {
        let (_temp_dir, store) = open_temp_store();
        let registry = FavoriteRegistry::load(store);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_load_malformed_payload_is_empty() {
        let (_temp_dir, store) = open_temp_store();
        store.set(FAVORITES_KEY, "not-json").unwrap();

        let registry = FavoriteRegistry::load(store);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_load_non_array_payload_is_empty() {
        let (_temp_dir, store) = open_temp_store();
        store.set(FAVORITES_KEY, r#"{"A": true}"#).unwrap();

        let registry = FavoriteRegistry::load(store);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_toggle_reports_new_state() {
        let (_temp_dir, store) = open_temp_store();
        let mut registry = FavoriteRegistry::load(store);

        assert!(registry.toggle("Chocolate Cake"));
        assert!(registry.is_favorite("Chocolate Cake"));

        assert!(!registry.toggle("Chocolate Cake"));
        assert!(!registry.is_favorite("Chocolate Cake"));
    }

    #[test]
    fn test_toggle_round_trip_restores_persisted_value() {
        let (_temp_dir, store) = open_temp_store();
        let before = store.get(FAVORITES_KEY).unwrap();

        let mut registry = FavoriteRegistry::load(store.clone());
        registry.toggle("Chili");
        registry.toggle("Chili");

        // Membership restored; the persisted value is the empty array again
        assert!(!registry.is_favorite("Chili"));
        assert!(before.is_none());
        assert_eq!(store.get(FAVORITES_KEY).unwrap().unwrap(), "[]");
    }

    #[test]
    fn test_toggle_writes_through_immediately() {
        let (_temp_dir, store) = open_temp_store();
        let mut registry = FavoriteRegistry::load(store.clone());

        registry.toggle("B");
        registry.toggle("A");

        // Ordered serialization, not insertion order
        assert_eq!(store.get(FAVORITES_KEY).unwrap().unwrap(), r#"["A","B"]"#);
    }

    #[test]
    fn test_persisted_set_survives_reload() {
        let (_temp_dir, store) = open_temp_store();

        let mut registry = FavoriteRegistry::load(store.clone());
        registry.toggle("Chocolate Cake");
        registry.toggle("Chili");

        let reloaded = FavoriteRegistry::load(store);
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.is_favorite("Chocolate Cake"));
        assert!(reloaded.is_favorite("Chili"));
    }

    #[test]
    fn test_titles_view_matches_membership() {
        let (_temp_dir, store) = open_temp_store();
        let mut registry = FavoriteRegistry::load(store);
        registry.toggle("A");

        assert!(registry.titles().contains("A"));
        assert_eq!(registry.len(), 1);
    }
}
