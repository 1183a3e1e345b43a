//! Product category domain model.

use serde::{Deserialize, Serialize};

use clementine_core::CategoryId;

/// A product category.
///
/// The `id` is assigned once at creation and never changes. Deleting a
/// category does not cascade to products referencing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category ID, immutable once set.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
}

impl Category {
    /// Create a new category with a freshly generated identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: CategoryId::generate(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Input for creating a new category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryInput {
    /// Display name. Must not be blank.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_distinct_ids() {
        let a = Category::new("Shoes", "Footwear");
        let b = Category::new("Shoes", "Footwear");
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Shoes");
        assert_eq!(a.description, "Footwear");
    }

    #[test]
    fn test_json_round_trip() {
        let category = Category::new("Hats", "Headwear");
        let json = serde_json::to_string(&category).expect("serialize");
        let back: Category = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, category);
    }
}
