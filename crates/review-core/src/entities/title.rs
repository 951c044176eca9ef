//! Title entity - a reviewable work

use chrono::{DateTime, Datelike, Utc};

use crate::value_objects::Snowflake;

/// Title entity representing a catalogued work (film, book, song)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub id: Snowflake,
    pub name: String,
    /// Release year; must not exceed the current year
    pub year: i32,
    pub description: Option<String>,
    /// Set to None when the category is deleted
    pub category_id: Option<Snowflake>,
    pub genre_ids: Vec<Snowflake>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Title {
    /// Create a new Title
    pub fn new(id: Snowflake, name: String, year: i32) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            year,
            description: None,
            category_id: None,
            genre_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether a release year is acceptable at this moment
    pub fn year_is_valid(year: i32) -> bool {
        year <= Utc::now().year()
    }

    /// Update the title name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }
}
