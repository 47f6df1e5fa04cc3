mod recipe;

pub use recipe::{Recipe, UNCATEGORIZED};
