//! Genre entity - many-to-many tag on titles

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Genre entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: Snowflake,
    pub name: String,
    /// URL-safe identifier, unique
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl Genre {
    /// Create a new Genre
    pub fn new(id: Snowflake, name: String, slug: String) -> Self {
        Self {
            id,
            name,
            slug,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_creation() {
        let genre = Genre::new(Snowflake::new(1), "Science Fiction".to_string(), "sci-fi".to_string());
        assert_eq!(genre.slug, "sci-fi");
    }
}
