//! # review-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `review-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! The SQL migrations under `migrations/` carry the storage contract: unique
//! constraints on username, email, slugs and the (title, author) review pair,
//! cascade deletes Title→Review→Comment, and set-null Category→Title.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgCategoryRepository, PgCommentRepository, PgGenreRepository, PgReviewRepository,
    PgTitleRepository, PgUserRepository,
};
