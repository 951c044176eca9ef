//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    // Mix in the pid so repeated test runs against the same database
    // do not collide on unique usernames/slugs
    let pid = u64::from(std::process::id());
    COUNTER.fetch_add(1, Ordering::SeqCst) + pid * 1_000_000
}

/// Signup request
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
}

impl SignupRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
        }
    }
}

/// Token request
#[derive(Debug, Serialize)]
pub struct TokenRequest {
    pub username: String,
    pub confirmation_code: String,
}

/// Signup response
#[derive(Debug, Deserialize)]
pub struct SignupResponse {
    pub username: String,
    pub email: String,
}

/// Token response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub email: String,
    pub role: String,
    pub bio: Option<String>,
}

/// Create category request
#[derive(Debug, Serialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub slug: String,
}

impl CreateCategoryRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Category {suffix}"),
            slug: format!("cat{suffix}"),
        }
    }
}

/// Category response
#[derive(Debug, Deserialize)]
pub struct CategoryResponse {
    pub name: String,
    pub slug: String,
}

/// Create genre request
#[derive(Debug, Serialize)]
pub struct CreateGenreRequest {
    pub name: String,
    pub slug: String,
}

impl CreateGenreRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Genre {suffix}"),
            slug: format!("genre-{suffix}"),
        }
    }
}

/// Genre response
#[derive(Debug, Deserialize)]
pub struct GenreResponse {
    pub name: String,
    pub slug: String,
}

/// Create title request
#[derive(Debug, Serialize)]
pub struct CreateTitleRequest {
    pub name: String,
    pub year: i32,
    pub description: Option<String>,
    pub category: Option<String>,
    pub genre: Vec<String>,
}

impl CreateTitleRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Title {suffix}"),
            year: 1999,
            description: Some("A test title".to_string()),
            category: None,
            genre: Vec::new(),
        }
    }
}

/// Title response
#[derive(Debug, Deserialize)]
pub struct TitleResponse {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub genre: Vec<GenreResponse>,
    pub category: Option<CategoryResponse>,
}

/// Create review request
#[derive(Debug, Serialize)]
pub struct CreateReviewRequest {
    pub text: String,
    pub score: i32,
}

/// Review response
#[derive(Debug, Deserialize)]
pub struct ReviewResponse {
    pub id: String,
    pub author: String,
    pub text: String,
    pub score: i32,
    pub pub_date: String,
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub author: String,
    pub text: String,
    pub pub_date: String,
}

/// Paginated response wrapper
#[derive(Debug, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct PaginationMeta {
    pub after: Option<String>,
    pub has_more: bool,
    pub limit: i32,
}
