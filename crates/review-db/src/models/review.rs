//! Review database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the reviews table
#[derive(Debug, Clone, FromRow)]
pub struct ReviewModel {
    pub id: i64,
    pub title_id: i64,
    pub author_id: i64,
    pub score: i32,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
