//! Title entity <-> model mapper

use review_core::entities::Title;
use review_core::value_objects::Snowflake;

use crate::models::TitleModel;

impl TitleModel {
    /// Build the entity, attaching genre ids loaded from the join table
    pub fn into_entity(self, genre_ids: Vec<Snowflake>) -> Title {
        Title {
            id: Snowflake::new(self.id),
            name: self.name,
            year: self.year,
            description: self.description,
            category_id: self.category_id.map(Snowflake::new),
            genre_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
