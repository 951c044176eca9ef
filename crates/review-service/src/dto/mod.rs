//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateCategoryRequest, CreateCommentRequest, CreateGenreRequest, CreateReviewRequest,
    CreateTitleRequest, CreateUserRequest, SignupRequest, TokenRequest, UpdateCommentRequest,
    UpdateReviewRequest, UpdateSelfRequest, UpdateTitleRequest, UpdateUserRequest,
};

// Re-export commonly used response types
pub use responses::{
    CategoryResponse, CommentResponse, GenreResponse, HealthChecks, HealthResponse,
    PaginatedResponse, PaginationMeta, ReadinessResponse, ReviewResponse, SignupResponse,
    TitleResponse, TokenResponse, UserResponse,
};

// Re-export mappers and helper structs
pub use mappers::{CommentWithAuthor, ReviewWithAuthor, TitleWithDetails};
