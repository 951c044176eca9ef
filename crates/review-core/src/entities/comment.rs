//! Comment entity - a reply attached to a review

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub review_id: Snowflake,
    pub author_id: Snowflake,
    pub text: String,
    /// Set once at creation; edits never reset it
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(id: Snowflake, review_id: Snowflake, author_id: Snowflake, text: String) -> Self {
        Self {
            id,
            review_id,
            author_id,
            text,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_creation() {
        let comment = Comment::new(
            Snowflake::new(1),
            Snowflake::new(5),
            Snowflake::new(7),
            "Agreed".to_string(),
        );
        assert_eq!(comment.review_id, Snowflake::new(5));
    }
}
