//! Review entity - a scored text review of a title

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Review entity.
///
/// At most one review exists per (title, author) pair; title and author
/// are fixed for the record's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: Snowflake,
    pub title_id: Snowflake,
    pub author_id: Snowflake,
    /// Integer score in [1, 10]
    pub score: i32,
    pub text: String,
    /// Set once at creation; partial edits never reset it
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Lowest accepted score
    pub const MIN_SCORE: i32 = 1;
    /// Highest accepted score
    pub const MAX_SCORE: i32 = 10;

    /// Create a new Review
    pub fn new(id: Snowflake, title_id: Snowflake, author_id: Snowflake, score: i32, text: String) -> Self {
        Self {
            id,
            title_id,
            author_id,
            score,
            text,
            created_at: Utc::now(),
        }
    }

    /// Whether a score falls inside the accepted range
    pub const fn score_in_range(score: i32) -> bool {
        score >= Self::MIN_SCORE && score <= Self::MAX_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_range() {
        assert!(Review::score_in_range(1));
        assert!(Review::score_in_range(10));
        assert!(!Review::score_in_range(0));
        assert!(!Review::score_in_range(11));
    }

    #[test]
    fn test_review_creation() {
        let review = Review::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(20),
            8,
            "Worth a second watch".to_string(),
        );
        assert_eq!(review.title_id, Snowflake::new(10));
        assert_eq!(review.author_id, Snowflake::new(20));
    }
}
