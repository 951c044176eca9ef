//! Review entity <-> model mapper

use review_core::entities::Review;
use review_core::value_objects::Snowflake;

use crate::models::ReviewModel;

impl From<ReviewModel> for Review {
    fn from(model: ReviewModel) -> Self {
        Review {
            id: Snowflake::new(model.id),
            title_id: Snowflake::new(model.title_id),
            author_id: Snowflake::new(model.author_id),
            score: model.score,
            text: model.text,
            created_at: model.created_at,
        }
    }
}
