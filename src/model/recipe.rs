use serde::{Deserialize, Deserializer, Serialize};

/// Category assigned to recipes whose source document carries none.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A single recipe record from the collection document.
///
/// Recipes are immutable once loaded and owned by the
/// [`RecipeStore`](crate::store::RecipeStore) for the session. The `title`
/// is the recipe's identifier within a collection (favorites are keyed by
/// it); every other field is optional in the source document and
/// deserializes to a sensible default.
///
/// # Examples
///
/// ```
/// use recipe_browser::Recipe;
///
/// let recipe: Recipe = serde_json::from_str(
///     r#"{"title": "Chocolate Cake", "tags": ["sweet"]}"#,
/// )?;
/// assert_eq!(recipe.title, "Chocolate Cake");
/// assert_eq!(recipe.category, "Uncategorized");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe title; unique within a collection and the favorite key.
    pub title: String,
    /// Category for the category selector; defaults to "Uncategorized".
    #[serde(default = "default_category", deserialize_with = "category_or_default")]
    pub category: String,
    /// Free-form labels used for faceted filtering.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ingredient list as display text.
    #[serde(default)]
    pub ingredients: String,
    /// Preparation instructions as display text.
    #[serde(default)]
    pub instructions: String,
    /// Reference or URL of the title image, if any.
    #[serde(default)]
    pub image: Option<String>,
}

impl Recipe {
    /// Returns true if the recipe carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

fn default_category() -> String {
    UNCATEGORIZED.to_string()
}

/// Missing, null and blank categories all collapse to the default.
fn category_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(match value {
        Some(category) if !category.trim().is_empty() => category,
        _ => default_category(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_full_recipe_deserializes() {
        let recipe: Recipe = serde_json::from_str(indoc! {r#"
            {
                "title": "Chocolate Cake",
                "category": "Dessert",
                "tags": ["sweet", "baking"],
                "ingredients": "flour, cocoa, sugar",
                "instructions": "Mix and bake.",
                "image": "img/cake.jpg"
            }"#})
        .unwrap();

        assert_eq!(recipe.title, "Chocolate Cake");
        assert_eq!(recipe.category, "Dessert");
        assert_eq!(recipe.tags, vec!["sweet", "baking"]);
        assert_eq!(recipe.ingredients, "flour, cocoa, sugar");
        assert_eq!(recipe.instructions, "Mix and bake.");
        assert_eq!(recipe.image.as_deref(), Some("img/cake.jpg"));
    }

    #[test]
    fn test_missing_fields_default() {
        let recipe: Recipe = serde_json::from_str(r#"{"title": "Toast"}"#).unwrap();

        assert_eq!(recipe.category, UNCATEGORIZED);
        assert!(recipe.tags.is_empty());
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
        assert!(recipe.image.is_none());
    }

    #[test]
    fn test_null_and_blank_category_default() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"title": "Toast", "category": null}"#).unwrap();
        assert_eq!(recipe.category, UNCATEGORIZED);

        let recipe: Recipe =
            serde_json::from_str(r#"{"title": "Toast", "category": "  "}"#).unwrap();
        assert_eq!(recipe.category, UNCATEGORIZED);
    }

    #[test]
    fn test_missing_title_is_an_error() {
        let result = serde_json::from_str::<Recipe>(r#"{"category": "Dessert"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_has_tag() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"title": "Chili", "tags": ["spicy", "quick"]}"#).unwrap();

        assert!(recipe.has_tag("spicy"));
        assert!(!recipe.has_tag("sweet"));
        // Tag comparison is exact, not case-folded
        assert!(!recipe.has_tag("Spicy"));
    }
}
