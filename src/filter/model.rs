use std::collections::BTreeSet;

/// Category restriction for the current view.
///
/// The typed form of the `"all"` sentinel a category selector reports:
/// either no restriction, or an exact category name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Restrict to recipes in exactly this category (case-sensitive).
    Named(String),
}

impl CategoryFilter {
    /// Builds a filter from a selector value, mapping `None` to [`All`].
    ///
    /// [`All`]: CategoryFilter::All
    pub fn from_selection(selection: Option<String>) -> Self {
        match selection {
            Some(category) => CategoryFilter::Named(category),
            None => CategoryFilter::All,
        }
    }

    /// Returns the selected category name, or `None` for [`All`].
    ///
    /// [`All`]: CategoryFilter::All
    pub fn selected(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Named(category) => Some(category),
        }
    }
}

/// Transient view state driving a filter pass.
///
/// Owned by the presentation side of the application and passed by value
/// into [`filter`](crate::filter::filter) on every recompute; never
/// persisted. The default value matches every recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text search query; empty means no text restriction.
    pub search_text: String,
    /// Category restriction from the category selector.
    pub category: CategoryFilter,
    /// Tags toggled on; a recipe must carry all of them.
    pub active_tags: BTreeSet<String>,
    /// When set, only favorited recipes pass.
    pub favorites_only: bool,
}

impl FilterState {
    /// Resets all filters to their defaults: empty search, all categories,
    /// no active tags, favorites-only off.
    pub fn clear(&mut self) {
        *self = FilterState::default();
    }
}
