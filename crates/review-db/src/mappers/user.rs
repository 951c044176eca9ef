//! User entity <-> model mapper

use review_core::entities::{Role, User};
use review_core::value_objects::Snowflake;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            bio: model.bio,
            // The role column is CHECK-constrained to the known values;
            // anything else maps to the least privileged role.
            role: Role::parse(&model.role).unwrap_or(Role::User),
            is_staff: model.is_staff,
            is_superuser: model.is_superuser,
            confirmation_code: model.confirmation_code,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
