//! Genre database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the genres table
#[derive(Debug, Clone, FromRow)]
pub struct GenreModel {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}
