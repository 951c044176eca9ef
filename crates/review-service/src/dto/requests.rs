//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Format rules (username alphabet, slug alphabet, score range) live in
//! review-core; the custom validators here just delegate to them.

use review_core::entities::Role;
use review_core::value_objects::{is_valid_category_slug, is_valid_slug};
use serde::Deserialize;
use validator::{Validate, ValidationError};

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if review_core::entities::is_valid_username(username) {
        Ok(())
    } else {
        Err(ValidationError::new("username")
            .with_message("Username must contain only letters and digits".into()))
    }
}

fn validate_category_slug(slug: &str) -> Result<(), ValidationError> {
    if is_valid_category_slug(slug) {
        Ok(())
    } else {
        Err(ValidationError::new("slug")
            .with_message("Slug must contain only letters and digits".into()))
    }
}

fn validate_genre_slug(slug: &str) -> Result<(), ValidationError> {
    if is_valid_slug(slug) {
        Ok(())
    } else {
        Err(ValidationError::new("slug")
            .with_message("Slug must contain only letters, digits, '-' and '_'".into()))
    }
}

fn validate_genre_slugs(slugs: &[String]) -> Result<(), ValidationError> {
    if slugs.iter().all(|s| is_valid_slug(s)) {
        Ok(())
    } else {
        Err(ValidationError::new("genre")
            .with_message("Genre slugs must contain only letters, digits, '-' and '_'".into()))
    }
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Signup request: registers an identity and mails a confirmation code
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(
        length(min = 1, max = 150, message = "Username must be 1-150 characters"),
        custom(function = validate_username)
    )]
    pub username: String,

    #[validate(email(message = "Invalid email format"), length(max = 254))]
    pub email: String,
}

/// Token request: exchanges a confirmation code for an access token
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be 1-150 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 16, message = "Confirmation code is required"))]
    pub confirmation_code: String,
}

// ============================================================================
// User Requests (admin surface + self profile)
// ============================================================================

/// Create user request (admin). The account is confirmed implicitly:
/// no confirmation code is issued.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(
        length(min = 1, max = 150, message = "Username must be 1-150 characters"),
        custom(function = validate_username)
    )]
    pub username: String,

    #[validate(email(message = "Invalid email format"), length(max = 254))]
    pub email: String,

    #[validate(length(max = 150))]
    pub first_name: Option<String>,

    #[validate(length(max = 150))]
    pub last_name: Option<String>,

    pub bio: Option<String>,

    #[serde(default)]
    pub role: Option<Role>,
}

/// Update user request (admin patch by username)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "Invalid email format"), length(max = 254))]
    pub email: Option<String>,

    #[validate(length(max = 150))]
    pub first_name: Option<String>,

    #[validate(length(max = 150))]
    pub last_name: Option<String>,

    pub bio: Option<String>,

    pub role: Option<Role>,
}

/// Update own profile request. The role field is absent on purpose:
/// it is read-only on self-edit.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSelfRequest {
    #[validate(email(message = "Invalid email format"), length(max = 254))]
    pub email: Option<String>,

    #[validate(length(max = 150))]
    pub first_name: Option<String>,

    #[validate(length(max = 150))]
    pub last_name: Option<String>,

    pub bio: Option<String>,
}

// ============================================================================
// Catalogue Requests
// ============================================================================

/// Create category request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 256, message = "Name must be 1-256 characters"))]
    pub name: String,

    #[validate(
        length(min = 1, max = 50, message = "Slug must be 1-50 characters"),
        custom(function = validate_category_slug)
    )]
    pub slug: String,
}

/// Create genre request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGenreRequest {
    #[validate(length(min = 1, max = 256, message = "Name must be 1-256 characters"))]
    pub name: String,

    #[validate(
        length(min = 1, max = 50, message = "Slug must be 1-50 characters"),
        custom(function = validate_genre_slug)
    )]
    pub slug: String,
}

/// Create title request. Category and genres are referenced by slug.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTitleRequest {
    #[validate(length(min = 1, max = 256, message = "Name must be 1-256 characters"))]
    pub name: String,

    /// Release year; checked against the current year at the service layer
    pub year: i32,

    pub description: Option<String>,

    pub category: Option<String>,

    #[serde(default)]
    #[validate(custom(function = validate_genre_slugs))]
    pub genre: Vec<String>,
}

/// Update title request (partial)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTitleRequest {
    #[validate(length(min = 1, max = 256, message = "Name must be 1-256 characters"))]
    pub name: Option<String>,

    pub year: Option<i32>,

    pub description: Option<String>,

    pub category: Option<String>,

    #[validate(custom(function = validate_genre_slugs))]
    pub genre: Option<Vec<String>>,
}

// ============================================================================
// Review / Comment Requests
// ============================================================================

/// Create review request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(length(min = 1, message = "Review text is required"))]
    pub text: String,

    #[validate(range(min = 1, max = 10, message = "Score must be between 1 and 10"))]
    pub score: i32,
}

/// Update review request (partial; title and author are immutable)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(length(min = 1, message = "Review text must not be empty"))]
    pub text: Option<String>,

    #[validate(range(min = 1, max = 10, message = "Score must be between 1 and 10"))]
    pub score: Option<i32>,
}

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "Comment text is required"))]
    pub text: String,
}

/// Update comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, message = "Comment text must not be empty"))]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_valid() {
        let request = SignupRequest {
            username: "newuser".to_string(),
            email: "a@x.com".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_signup_request_bad_username() {
        let request = SignupRequest {
            username: "new user".to_string(),
            email: "a@x.com".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_signup_request_bad_email() {
        let request = SignupRequest {
            username: "newuser".to_string(),
            email: "not-an-email".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_review_score_bounds() {
        let ok = CreateReviewRequest {
            text: "fine".to_string(),
            score: 10,
        };
        assert!(ok.validate().is_ok());

        let too_high = CreateReviewRequest {
            text: "fine".to_string(),
            score: 11,
        };
        assert!(too_high.validate().is_err());

        let too_low = CreateReviewRequest {
            text: "fine".to_string(),
            score: 0,
        };
        assert!(too_low.validate().is_err());
    }

    #[test]
    fn test_category_slug_rejects_dashes() {
        let request = CreateCategoryRequest {
            name: "Science Fiction".to_string(),
            slug: "sci-fi".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_genre_slug_accepts_dashes() {
        let request = CreateGenreRequest {
            name: "Science Fiction".to_string(),
            slug: "sci-fi".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_title_genre_slugs_validated() {
        let request = CreateTitleRequest {
            name: "Solaris".to_string(),
            year: 1972,
            description: None,
            category: None,
            genre: vec!["sci-fi".to_string(), "bad slug".to_string()],
        };
        assert!(request.validate().is_err());
    }
}
