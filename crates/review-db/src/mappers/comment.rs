//! Comment entity <-> model mapper

use review_core::entities::Comment;
use review_core::value_objects::Snowflake;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            review_id: Snowflake::new(model.review_id),
            author_id: Snowflake::new(model.author_id),
            text: model.text,
            created_at: model.created_at,
        }
    }
}
