//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Title not found: {0}")]
    TitleNotFound(Snowflake),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Genre not found: {0}")]
    GenreNotFound(String),

    #[error("Review not found: {0}")]
    ReviewNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Username is reserved: {0}")]
    ReservedUsername(String),

    #[error("Invalid slug: {0}")]
    InvalidSlug(String),

    #[error("Release year {year} is in the future (current year {current})")]
    YearInFuture { year: i32, current: i32 },

    #[error("Score {0} is out of range (1-10)")]
    ScoreOutOfRange(i32),

    #[error("Email does not match the registered address")]
    EmailMismatch,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Admin access required")]
    AdminRequired,

    #[error("Not the resource author")]
    NotAuthor,

    #[error("Authentication required")]
    AuthenticationRequired,

    // =========================================================================
    // Authentication Errors
    // =========================================================================
    #[error("Invalid confirmation code")]
    InvalidConfirmationCode,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Username already in use")]
    UsernameAlreadyExists,

    #[error("A review for this title by this author already exists")]
    DuplicateReview,

    #[error("Slug already in use: {0}")]
    SlugAlreadyExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::TitleNotFound(_) => "UNKNOWN_TITLE",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::GenreNotFound(_) => "UNKNOWN_GENRE",
            Self::ReviewNotFound(_) => "UNKNOWN_REVIEW",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::ReservedUsername(_) => "RESERVED_USERNAME",
            Self::InvalidSlug(_) => "INVALID_SLUG",
            Self::YearInFuture { .. } => "YEAR_IN_FUTURE",
            Self::ScoreOutOfRange(_) => "SCORE_OUT_OF_RANGE",
            Self::EmailMismatch => "EMAIL_MISMATCH",

            // Authorization
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::NotAuthor => "NOT_AUTHOR",
            Self::AuthenticationRequired => "AUTHENTICATION_REQUIRED",

            // Authentication
            Self::InvalidConfirmationCode => "INVALID_CONFIRMATION_CODE",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::DuplicateReview => "DUPLICATE_REVIEW",
            Self::SlugAlreadyExists(_) => "SLUG_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::TitleNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::GenreNotFound(_)
                | Self::ReviewNotFound(_)
                | Self::CommentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::InvalidUsername(_)
                | Self::ReservedUsername(_)
                | Self::InvalidSlug(_)
                | Self::YearInFuture { .. }
                | Self::ScoreOutOfRange(_)
                | Self::EmailMismatch
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::AdminRequired | Self::NotAuthor | Self::AuthenticationRequired
        )
    }

    /// Check if this is an authentication error
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::InvalidConfirmationCode)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::UsernameAlreadyExists
                | Self::DuplicateReview
                | Self::SlugAlreadyExists(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound("alice".to_string());
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::DuplicateReview;
        assert_eq!(err.code(), "DUPLICATE_REVIEW");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::UserNotFound("x".to_string()).is_not_found());
        assert!(DomainError::TitleNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::EmailAlreadyExists.is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::YearInFuture { year: 3000, current: 2026 }.is_validation());
        assert!(DomainError::ScoreOutOfRange(11).is_validation());
        assert!(DomainError::EmailMismatch.is_validation());
        assert!(!DomainError::DuplicateReview.is_validation());
    }

    #[test]
    fn test_is_authentication_vs_authorization() {
        assert!(DomainError::InvalidConfirmationCode.is_authentication());
        assert!(!DomainError::InvalidConfirmationCode.is_authorization());
        assert!(DomainError::AdminRequired.is_authorization());
        assert!(DomainError::NotAuthor.is_authorization());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::DuplicateReview.is_conflict());
        assert!(DomainError::UsernameAlreadyExists.is_conflict());
        assert!(DomainError::SlugAlreadyExists("movies".to_string()).is_conflict());
        assert!(!DomainError::AdminRequired.is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::ScoreOutOfRange(0);
        assert_eq!(err.to_string(), "Score 0 is out of range (1-10)");
    }
}
