pub mod browser;
pub mod favorites;
pub mod ffi;
pub mod filter;
pub mod model;
pub mod storage;
pub mod store;
pub mod theme;

pub use browser::RecipeBrowser;
pub use favorites::{FavoriteRegistry, FAVORITES_KEY};
pub use filter::{filter, suggest, CategoryFilter, FilterState};
pub use model::{Recipe, UNCATEGORIZED};
pub use storage::{KeyValueStore, StorageError};
pub use store::{LoadError, RecipeStore};
pub use theme::{ThemePreference, THEME_KEY};

uniffi::setup_scaffolding!();
