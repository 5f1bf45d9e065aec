use serde::{Deserialize, Serialize};

/// A spending category as served by `categories/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "category")]
    pub name: String,
}

/// A subcategory scoped to one category, served by
/// `subcategories/?category_id=<id>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subcategory {
    pub id: i64,
    #[serde(rename = "subcategory_name")]
    pub name: String,
    #[serde(rename = "category")]
    pub category_id: i64,
}
