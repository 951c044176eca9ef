//! Title database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the titles table.
///
/// Genre associations live in the title_genres join table and are
/// attached by the repository.
#[derive(Debug, Clone, FromRow)]
pub struct TitleModel {
    pub id: i64,
    pub name: String,
    pub year: i32,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
