//! Genre entity <-> model mapper

use review_core::entities::Genre;
use review_core::value_objects::Snowflake;

use crate::models::GenreModel;

impl From<GenreModel> for Genre {
    fn from(model: GenreModel) -> Self {
        Genre {
            id: Snowflake::new(model.id),
            name: model.name,
            slug: model.slug,
            created_at: model.created_at,
        }
    }
}
