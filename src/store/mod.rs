//! Recipe collection loading.
//!
//! A collection is a single static JSON document holding an array of
//! recipe objects. It is read once at startup and kept immutable in
//! memory for the session; there is no retry and no cache beyond the
//! in-memory copy.

use crate::model::Recipe;
use camino::Utf8Path;
use log::debug;
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors that can occur when loading a recipe collection.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read recipe collection: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse recipe collection: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Recipe collection must be a JSON array of recipes")]
    NotAnArray,
}

/// The immutable recipe list for the session.
///
/// A load failure is non-fatal for the application: the caller keeps an
/// empty store (the default value) and surfaces the error as a status
/// message. Filtering an empty store is valid and yields empty results.
#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Loads a collection from a JSON document on disk.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` when the file cannot be read, the document is
    /// not valid JSON, the top-level value is not an array, or an element
    /// is missing its `title`.
    pub fn load(path: &Utf8Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        let store = Self::from_json(&content)?;
        debug!("loaded {} recipe(s) from {path}", store.len());
        Ok(store)
    }

    /// Builds a store from an in-memory JSON document.
    ///
    /// Same validation as [`load`](RecipeStore::load); useful for
    /// documents that arrive over the network instead of from disk.
    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        let document: serde_json::Value = serde_json::from_str(content)?;
        if !document.is_array() {
            return Err(LoadError::NotAnArray);
        }

        let recipes: Vec<Recipe> = serde_json::from_value(document)?;
        Ok(RecipeStore { recipes })
    }

    /// The loaded recipes, in document order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of loaded recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns true when no recipes are loaded.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Sorted, deduplicated list of the categories in the collection.
    ///
    /// Recipes without a category in the source document appear under
    /// "Uncategorized". Feeds the category selector.
    pub fn categories(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self.recipes.iter().map(|r| r.category.as_str()).collect();
        unique.into_iter().map(String::from).collect()
    }

    /// Sorted, deduplicated list of every tag in the collection.
    ///
    /// Feeds the tag buttons.
    pub fn all_tags(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self
            .recipes
            .iter()
            .flat_map(|r| r.tags.iter().map(String::as_str))
            .collect();
        unique.into_iter().map(String::from).collect()
    }
}
