//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Category, Comment, Genre, Review, Title, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// List users, optionally filtered by username substring
    async fn list(
        &self,
        search: Option<&str>,
        limit: i64,
        after: Option<Snowflake>,
    ) -> RepoResult<Vec<User>>;

    /// Create a new user.
    ///
    /// Unique violations on username or email must map to the matching
    /// conflict error so concurrent signups resolve deterministically.
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Update profile fields and role
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Overwrite the stored confirmation code
    async fn set_confirmation_code(&self, id: Snowflake, code: &str) -> RepoResult<()>;

    /// Delete a user by username
    async fn delete_by_username(&self, username: &str) -> RepoResult<()>;
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find category by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Category>>;

    /// Find category by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>>;

    /// List categories, optionally filtered by name substring
    async fn list(
        &self,
        search: Option<&str>,
        limit: i64,
        after: Option<Snowflake>,
    ) -> RepoResult<Vec<Category>>;

    /// Create a new category
    async fn create(&self, category: &Category) -> RepoResult<()>;

    /// Delete a category; dependent titles keep existing with a null category
    async fn delete_by_slug(&self, slug: &str) -> RepoResult<()>;
}

// ============================================================================
// Genre Repository
// ============================================================================

#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Find genre by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Genre>>;

    /// Resolve several slugs at once; order follows the input
    async fn find_by_slugs(&self, slugs: &[String]) -> RepoResult<Vec<Genre>>;

    /// Resolve several ids at once; order follows the input
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<Genre>>;

    /// List genres, optionally filtered by name substring
    async fn list(
        &self,
        search: Option<&str>,
        limit: i64,
        after: Option<Snowflake>,
    ) -> RepoResult<Vec<Genre>>;

    /// Create a new genre
    async fn create(&self, genre: &Genre) -> RepoResult<()>;

    /// Delete a genre; association rows go with it
    async fn delete_by_slug(&self, slug: &str) -> RepoResult<()>;
}

// ============================================================================
// Title Repository
// ============================================================================

/// Filter options for title listings
#[derive(Debug, Clone, Default)]
pub struct TitleQuery {
    pub category_slug: Option<String>,
    pub genre_slug: Option<String>,
    pub name: Option<String>,
    pub year: Option<i32>,
    pub limit: i64,
    pub after: Option<Snowflake>,
}

#[async_trait]
pub trait TitleRepository: Send + Sync {
    /// Find title by ID (genre associations included)
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Title>>;

    /// List titles matching the query
    async fn list(&self, query: TitleQuery) -> RepoResult<Vec<Title>>;

    /// Create a new title with its genre associations
    async fn create(&self, title: &Title) -> RepoResult<()>;

    /// Update mutable fields; genre associations are replaced wholesale
    async fn update(&self, title: &Title) -> RepoResult<()>;

    /// Delete a title; its reviews (and their comments) go with it
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Review Repository
// ============================================================================

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find review by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Review>>;

    /// List reviews for a title
    async fn find_by_title(
        &self,
        title_id: Snowflake,
        limit: i64,
        after: Option<Snowflake>,
    ) -> RepoResult<Vec<Review>>;

    /// Whether a review by this author for this title already exists.
    ///
    /// Point-in-time check for a clean error message; the composite
    /// unique index remains the correctness mechanism under races.
    async fn exists_for(&self, title_id: Snowflake, author_id: Snowflake) -> RepoResult<bool>;

    /// Average score across a title's reviews; None when it has none
    async fn average_score(&self, title_id: Snowflake) -> RepoResult<Option<f64>>;

    /// Create a new review; a unique violation maps to `DuplicateReview`
    async fn create(&self, review: &Review) -> RepoResult<()>;

    /// Update score and text only; the creation timestamp is untouched
    async fn update(&self, review: &Review) -> RepoResult<()>;

    /// Delete a review; its comments go with it
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// List comments for a review
    async fn find_by_review(
        &self,
        review_id: Snowflake,
        limit: i64,
        after: Option<Snowflake>,
    ) -> RepoResult<Vec<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Update the text only; the creation timestamp is untouched
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}
