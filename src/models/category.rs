//! Category models.

use serde::{Deserialize, Serialize};

use super::serde_util;

/// A product category.
///
/// Parent categories have no `parent_category_id`; child categories carry
/// the id of their parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category id
    #[serde(deserialize_with = "serde_util::int")]
    pub category_id: i64,
    /// Category name in the requested language
    #[serde(default)]
    pub category_name: String,
    /// Id of the parent category, for child categories
    #[serde(
        default,
        deserialize_with = "serde_util::opt_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_category_id: Option<i64>,
}

impl Category {
    /// Returns `true` if this is a top-level category.
    pub fn is_parent(&self) -> bool {
        self.parent_category_id.is_none()
    }

    /// Returns `true` if this category sits directly under `parent_id`.
    pub fn is_child_of(&self, parent_id: i64) -> bool {
        self.parent_category_id == Some(parent_id)
    }
}

/// Keep only top-level categories, in their original order.
pub fn filter_parent_categories(categories: &[Category]) -> Vec<Category> {
    categories.iter().filter(|c| c.is_parent()).cloned().collect()
}

/// Keep only the direct children of `parent_id`, in their original order.
pub fn filter_child_categories(categories: &[Category], parent_id: i64) -> Vec<Category> {
    categories
        .iter()
        .filter(|c| c.is_child_of(parent_id))
        .cloned()
        .collect()
}
