//! UniFFI bindings for cross-platform support (iOS, Android).
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! The presentation shell holds one [`FfiRecipeBrowser`], forwards user
//! events (text typed, category picked, tag or favorite clicked) into it,
//! and re-renders from `visible()`.

use crate::browser::RecipeBrowser;
use crate::filter::{CategoryFilter, FilterState};
use crate::model::Recipe;
use crate::storage::StorageError;
use crate::store::LoadError;
use crate::theme::ThemePreference;
use camino::Utf8Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum BrowserError {
    #[error("Load error: {message}")]
    LoadError { message: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },
}

impl From<LoadError> for BrowserError {
    fn from(e: LoadError) -> Self {
        BrowserError::LoadError {
            message: e.to_string(),
        }
    }
}

impl From<StorageError> for BrowserError {
    fn from(e: StorageError) -> Self {
        BrowserError::StorageError {
            message: e.to_string(),
        }
    }
}

/// FFI-safe representation of a recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipe {
    /// Recipe title; unique within the collection
    pub title: String,
    /// Category name ("Uncategorized" when the document had none)
    pub category: String,
    /// Tags attached to the recipe
    pub tags: Vec<String>,
    /// Ingredient list as display text
    pub ingredients: String,
    /// Preparation instructions as display text
    pub instructions: String,
    /// Reference or URL of the title image, if any
    pub image: Option<String>,
}

impl From<&Recipe> for FfiRecipe {
    fn from(r: &Recipe) -> Self {
        FfiRecipe {
            title: r.title.clone(),
            category: r.category.clone(),
            tags: r.tags.clone(),
            ingredients: r.ingredients.clone(),
            instructions: r.instructions.clone(),
            image: r.image.clone(),
        }
    }
}

/// FFI-safe snapshot of the current filter state.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFilterState {
    /// Free-text search query
    pub search_text: String,
    /// Selected category, or None for all categories
    pub category: Option<String>,
    /// Active tags, in sorted order
    pub active_tags: Vec<String>,
    /// Whether only favorites are shown
    pub favorites_only: bool,
}

impl From<&FilterState> for FfiFilterState {
    fn from(state: &FilterState) -> Self {
        FfiFilterState {
            search_text: state.search_text.clone(),
            category: state.category.selected().map(String::from),
            active_tags: state.active_tags.iter().cloned().collect(),
            favorites_only: state.favorites_only,
        }
    }
}

/// FFI handle to a browser session.
///
/// The core is single-threaded; the mutex only satisfies the shared-object
/// boundary uniffi requires.
#[derive(uniffi::Object)]
pub struct FfiRecipeBrowser {
    inner: Mutex<RecipeBrowser>,
}

impl FfiRecipeBrowser {
    fn new(browser: RecipeBrowser) -> Self {
        FfiRecipeBrowser {
            inner: Mutex::new(browser),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RecipeBrowser> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[uniffi::export]
impl FfiRecipeBrowser {
    /// Returns the recipes matching the current filter state.
    pub fn visible(&self) -> Vec<FfiRecipe> {
        self.lock().visible().iter().map(FfiRecipe::from).collect()
    }

    /// Returns the collection load failure message, if any.
    pub fn load_error(&self) -> Option<String> {
        self.lock().load_error().map(String::from)
    }

    /// Returns a snapshot of the current filter state.
    pub fn filter_state(&self) -> FfiFilterState {
        FfiFilterState::from(self.lock().state())
    }

    /// Returns the number of recipes in the collection.
    pub fn recipe_count(&self) -> u32 {
        self.lock().recipe_count() as u32
    }

    /// Replaces the free-text search query.
    pub fn set_search_text(&self, text: String) {
        self.lock().set_search_text(text);
    }

    /// Selects a category, or all categories when None.
    pub fn select_category(&self, category: Option<String>) {
        self.lock()
            .set_category(CategoryFilter::from_selection(category));
    }

    /// Toggles a tag and returns its new active state.
    pub fn toggle_tag(&self, tag: String) -> bool {
        self.lock().toggle_tag(&tag)
    }

    /// Switches the favorites-only view on or off.
    pub fn set_favorites_only(&self, favorites_only: bool) {
        self.lock().set_favorites_only(favorites_only);
    }

    /// Resets all filters to their defaults.
    pub fn clear_filters(&self) {
        self.lock().clear_filters();
    }

    /// Toggles a favorite and returns its new state.
    pub fn toggle_favorite(&self, title: String) -> bool {
        self.lock().toggle_favorite(&title)
    }

    /// Returns true if the title is favorited.
    pub fn is_favorite(&self, title: String) -> bool {
        self.lock().is_favorite(&title)
    }

    /// Returns the number of favorited titles.
    pub fn favorite_count(&self) -> u32 {
        self.lock().favorite_count() as u32
    }

    /// Returns the sorted category list for the category selector.
    pub fn categories(&self) -> Vec<String> {
        self.lock().categories()
    }

    /// Returns the sorted tag list for the tag buttons.
    pub fn all_tags(&self) -> Vec<String> {
        self.lock().all_tags()
    }

    /// Returns title suggestions for the current search text.
    pub fn suggestions(&self, limit: u32) -> Vec<String> {
        self.lock().suggestions(limit as usize)
    }

    /// Returns true when the dark theme is active.
    pub fn dark_theme(&self) -> bool {
        self.lock().theme().is_dark()
    }

    /// Switches the theme and persists the choice.
    pub fn set_dark_theme(&self, dark: bool) {
        let theme = if dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        };
        self.lock().set_theme(theme);
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Opens a browser session.
///
/// Reads the recipe collection from `data_file` and persisted state from
/// `storage_dir`. A collection that fails to load still yields a session;
/// check `load_error()` for the status message.
///
/// # Arguments
/// * `data_file` - Path to the recipe collection JSON document
/// * `storage_dir` - Directory for persisted favorites and theme
///
/// # Returns
/// The browser session, or an error when the storage directory cannot be
/// opened.
#[uniffi::export]
pub fn open_browser(
    data_file: String,
    storage_dir: String,
) -> Result<Arc<FfiRecipeBrowser>, BrowserError> {
    let browser = RecipeBrowser::open(Utf8Path::new(&data_file), Utf8Path::new(&storage_dir))?;
    Ok(Arc::new(FfiRecipeBrowser::new(browser)))
}

/// Opens a browser session over an in-memory JSON collection.
///
/// Useful when the collection document arrives over the network rather
/// than from disk.
///
/// # Arguments
/// * `json` - The collection document (a JSON array of recipes)
/// * `storage_dir` - Directory for persisted favorites and theme
#[uniffi::export]
pub fn browser_from_json(
    json: String,
    storage_dir: String,
) -> Result<Arc<FfiRecipeBrowser>, BrowserError> {
    let browser = RecipeBrowser::from_json(&json, Utf8Path::new(&storage_dir))?;
    Ok(Arc::new(FfiRecipeBrowser::new(browser)))
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
