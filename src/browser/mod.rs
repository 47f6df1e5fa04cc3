//! The session controller.
//!
//! `RecipeBrowser` is constructed once at startup and owns everything the
//! presentation layer needs: the immutable recipe store, the persisted
//! favorite registry, the persisted theme preference and the transient
//! filter state. The presentation layer translates raw user events into
//! calls on this object and re-renders from [`visible`].
//!
//! [`visible`]: RecipeBrowser::visible

use crate::favorites::FavoriteRegistry;
use crate::filter::{self, CategoryFilter, FilterState};
use crate::model::Recipe;
use crate::storage::{KeyValueStore, StorageError};
use crate::store::RecipeStore;
use crate::theme::ThemePreference;
use camino::Utf8Path;
use log::warn;

/// Session-scoped owner of recipe data, favorites and filter state.
pub struct RecipeBrowser {
    store: RecipeStore,
    favorites: FavoriteRegistry,
    storage: KeyValueStore,
    state: FilterState,
    theme: ThemePreference,
    load_error: Option<String>,
}

impl RecipeBrowser {
    /// Opens a browser session.
    ///
    /// Reads the recipe collection from `data_file` and the persisted
    /// favorites and theme from a key-value store under `storage_root`.
    /// A collection that fails to load is not fatal: the session starts
    /// with an empty store and the failure is available from
    /// [`load_error`](RecipeBrowser::load_error) for a status message.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only when the storage root cannot be
    /// opened — without it there is nowhere to persist favorites.
    pub fn open(data_file: &Utf8Path, storage_root: &Utf8Path) -> Result<Self, StorageError> {
        let storage = KeyValueStore::open(storage_root.to_path_buf())?;
        let store_result = RecipeStore::load(data_file);
        Ok(Self::assemble(store_result, storage))
    }

    /// Opens a browser session over an in-memory JSON collection.
    ///
    /// Same contract as [`open`](RecipeBrowser::open), for documents that
    /// arrive over the network instead of from disk.
    pub fn from_json(content: &str, storage_root: &Utf8Path) -> Result<Self, StorageError> {
        let storage = KeyValueStore::open(storage_root.to_path_buf())?;
        let store_result = RecipeStore::from_json(content);
        Ok(Self::assemble(store_result, storage))
    }

    fn assemble(
        store_result: Result<RecipeStore, crate::store::LoadError>,
        storage: KeyValueStore,
    ) -> Self {
        let (store, load_error) = match store_result {
            Ok(store) => (store, None),
            Err(err) => {
                warn!("failed to load recipe collection: {err}");
                (RecipeStore::default(), Some(err.to_string()))
            }
        };

        let favorites = FavoriteRegistry::load(storage.clone());
        let theme = ThemePreference::load(&storage);

        RecipeBrowser {
            store,
            favorites,
            storage,
            state: FilterState::default(),
            theme,
            load_error,
        }
    }

    /// The recipes matching the current filter state, in document order.
    pub fn visible(&self) -> Vec<Recipe> {
        filter::filter(self.store.recipes(), &self.state, self.favorites.titles())
    }

    /// The collection load failure, if the session started degraded.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// The current filter state.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Number of recipes in the loaded collection.
    pub fn recipe_count(&self) -> usize {
        self.store.len()
    }

    // ---- filter state -----------------------------------------------------

    /// Replaces the free-text search query.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
    }

    /// Replaces the category restriction.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.state.category = category;
    }

    /// Toggles a tag and returns its new active state.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.state.active_tags.remove(tag) {
            false
        } else {
            self.state.active_tags.insert(tag.to_string());
            true
        }
    }

    /// Switches the favorites-only view on or off.
    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.state.favorites_only = favorites_only;
    }

    /// Resets the filter state to its defaults.
    pub fn clear_filters(&mut self) {
        self.state.clear();
    }

    // ---- favorites --------------------------------------------------------

    /// Toggles a favorite and returns its new state; persisted immediately.
    pub fn toggle_favorite(&mut self, title: &str) -> bool {
        self.favorites.toggle(title)
    }

    /// Returns true if `title` is favorited.
    pub fn is_favorite(&self, title: &str) -> bool {
        self.favorites.is_favorite(title)
    }

    /// Number of favorited titles.
    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    // ---- facets and suggestions -------------------------------------------

    /// Sorted category list for the category selector.
    pub fn categories(&self) -> Vec<String> {
        self.store.categories()
    }

    /// Sorted tag list for the tag buttons.
    pub fn all_tags(&self) -> Vec<String> {
        self.store.all_tags()
    }

    /// Title suggestions for the current search text, capped at `limit`.
    pub fn suggestions(&self, limit: usize) -> Vec<String> {
        filter::suggest(self.store.recipes(), &self.state.search_text, limit)
    }

    // ---- theme ------------------------------------------------------------

    /// The active theme preference.
    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    /// Switches the theme and persists the choice.
    pub fn set_theme(&mut self, theme: ThemePreference) {
        self.theme = theme;
        if let Err(err) = theme.store(&self.storage) {
            warn!("failed to persist theme preference: {err}");
        }
    }
}
