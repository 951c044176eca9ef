//! Category entity - top-level grouping for titles (film, book, song...)

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Category entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Snowflake,
    pub name: String,
    /// URL-safe identifier, unique, ASCII alphanumeric only
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new Category
    pub fn new(id: Snowflake, name: String, slug: String) -> Self {
        Self {
            id,
            name,
            slug,
            created_at: Utc::now(),
        }
    }
}
