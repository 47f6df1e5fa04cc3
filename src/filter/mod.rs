//! The filter engine: a pure pipeline from the loaded recipe list and the
//! current view state to the visible recipe sequence.
//!
//! Filtering is deterministic, side-effect free and order-preserving. The
//! engine only reads the recipe list and the favorite set; it never
//! mutates either.

use crate::model::Recipe;
use std::collections::BTreeSet;

mod model;

pub use model::{CategoryFilter, FilterState};

/// Filters `recipes` down to the sequence matching `state`.
///
/// A recipe is kept when all four clauses hold:
/// 1. the search text is empty, or it occurs case-insensitively in the
///    recipe's title, ingredients or instructions (substring match, so
///    `"cake"` matches `"cupcake"`);
/// 2. the category filter is [`CategoryFilter::All`], or equals the
///    recipe's category exactly (case-sensitive);
/// 3. every active tag is present on the recipe (no active tags means no
///    restriction);
/// 4. favorites-only is off, or the recipe's title is in `favorites`.
///
/// The relative order of `recipes` is preserved and the result may be
/// empty. Filtering an empty list is valid and yields an empty list.
pub fn filter(recipes: &[Recipe], state: &FilterState, favorites: &BTreeSet<String>) -> Vec<Recipe> {
    let query = state.search_text.trim().to_lowercase();

    recipes
        .iter()
        .filter(|recipe| {
            matches_text(recipe, &query)
                && matches_category(recipe, &state.category)
                && matches_tags(recipe, &state.active_tags)
                && (!state.favorites_only || favorites.contains(&recipe.title))
        })
        .cloned()
        .collect()
}

/// Returns up to `limit` recipe titles containing `query`.
///
/// Powers a suggestion box under the search input: case-insensitive
/// substring match against titles only, in collection order. An empty or
/// whitespace query yields no suggestions.
pub fn suggest(recipes: &[Recipe], query: &str, limit: usize) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    recipes
        .iter()
        .filter(|recipe| recipe.title.to_lowercase().contains(&query))
        .take(limit)
        .map(|recipe| recipe.title.clone())
        .collect()
}

/// Text clause; `query` is already trimmed and lowercased.
fn matches_text(recipe: &Recipe, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let haystack = format!(
        "{} {} {}",
        recipe.title, recipe.ingredients, recipe.instructions
    )
    .to_lowercase();
    haystack.contains(query)
}

fn matches_category(recipe: &Recipe, category: &CategoryFilter) -> bool {
    match category {
        CategoryFilter::All => true,
        CategoryFilter::Named(name) => recipe.category == *name,
    }
}

/// Tag clause: every active tag must be present (AND semantics).
fn matches_tags(recipe: &Recipe, active_tags: &BTreeSet<String>) -> bool {
    active_tags.iter().all(|tag| recipe.has_tag(tag))
}
