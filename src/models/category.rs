// src/models/category.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Represents the 'categories' table in the database.
/// Reference data seeded by the initial migration.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    /// Display name, e.g. "Geography".
    /// Mapped from the database column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category_type: String,
}

/// `{id: type}` object as returned by the listing endpoints.
/// JSON object keys are the ids rendered as strings.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn to_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|c| (c.id, c.category_type))
        .collect()
}
