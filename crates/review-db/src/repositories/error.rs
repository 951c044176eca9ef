//! Error handling utilities for repositories

use review_core::error::DomainError;
use review_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and map it via the violated constraint name.
///
/// Lets a single insert distinguish which uniqueness slot was lost in a
/// race (e.g. username vs email).
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.constraint());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(username: &str) -> DomainError {
    DomainError::UserNotFound(username.to_string())
}

/// Create a "title not found" error
pub fn title_not_found(id: Snowflake) -> DomainError {
    DomainError::TitleNotFound(id)
}

/// Create a "category not found" error
pub fn category_not_found(slug: &str) -> DomainError {
    DomainError::CategoryNotFound(slug.to_string())
}

/// Create a "genre not found" error
pub fn genre_not_found(slug: &str) -> DomainError {
    DomainError::GenreNotFound(slug.to_string())
}

/// Create a "review not found" error
pub fn review_not_found(id: Snowflake) -> DomainError {
    DomainError::ReviewNotFound(id)
}

/// Create a "comment not found" error
pub fn comment_not_found(id: Snowflake) -> DomainError {
    DomainError::CommentNotFound(id)
}
