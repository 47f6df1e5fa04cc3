//! Persisted theme preference.
//!
//! Shares the key-value storage mechanism with favorites; no filtering
//! logic depends on it.

use crate::storage::{KeyValueStore, StorageError};
use log::warn;

/// Storage key the theme preference lives under.
pub const THEME_KEY: &str = "theme";

/// The user's light/dark preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Reads the persisted preference; absent or unknown values mean
    /// [`Light`](ThemePreference::Light).
    ///
    /// Accepts both encodings found in the wild: `"dark"`/`"light"` and
    /// the legacy `"1"`/`"0"` flags.
    pub fn load(store: &KeyValueStore) -> Self {
        match store.get(THEME_KEY) {
            Ok(Some(raw)) => Self::from_stored(&raw),
            Ok(None) => ThemePreference::default(),
            Err(err) => {
                warn!("failed to read theme preference: {err}");
                ThemePreference::default()
            }
        }
    }

    /// Persists the preference as `"dark"` or `"light"`.
    pub fn store(self, store: &KeyValueStore) -> Result<(), StorageError> {
        store.set(THEME_KEY, self.as_str())
    }

    /// Returns true for [`Dark`](ThemePreference::Dark).
    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    fn from_stored(raw: &str) -> Self {
        match raw.trim() {
            "dark" | "1" => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
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
    fn test_absent_value_defaults_to_light() {
        let (_temp_dir, store) = open_temp_store();
        assert_eq!(ThemePreference::load(&store), ThemePreference::Light);
    }

    #[test]
    fn test_both_encodings_decode() {
        let (_temp_dir, store) = open_temp_store();

        for raw in ["dark", "1"] {
            store.set(THEME_KEY, raw).unwrap();
            assert_eq!(ThemePreference::load(&store), ThemePreference::Dark);
        }
        for raw in ["light", "0"] {
            store.set(THEME_KEY, raw).unwrap();
            assert_eq!(ThemePreference::load(&store), ThemePreference::Light);
        }
    }

    #[test]
    fn test_unknown_value_defaults_to_light() {
        let (_temp_dir, store) = open_temp_store();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(ThemePreference::load(&store), ThemePreference::Light);
    }

    #[test]
    fn test_store_writes_string_form() {
        let (_temp_dir, store) = open_temp_store();

        ThemePreference::Dark.store(&store).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().unwrap(), "dark");

        ThemePreference::Light.store(&store).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().unwrap(), "light");
    }

    #[test]
    fn test_round_trip() {
        let (_temp_dir, store) = open_temp_store();
        ThemePreference::Dark.store(&store).unwrap();
        assert!(ThemePreference::load(&store).is_dark());
    }
}
