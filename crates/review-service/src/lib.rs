//! # review-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CategoryResponse, CommentResponse, CreateCategoryRequest, CreateCommentRequest,
    CreateGenreRequest, CreateReviewRequest, CreateTitleRequest, CreateUserRequest, GenreResponse,
    HealthChecks, HealthResponse, PaginatedResponse, PaginationMeta, ReadinessResponse,
    ReviewResponse, SignupRequest, SignupResponse, TitleResponse, TokenRequest, TokenResponse,
    UpdateCommentRequest, UpdateReviewRequest, UpdateSelfRequest, UpdateTitleRequest,
    UpdateUserRequest, UserResponse,
};
pub use services::{
    AccessService, CategoryService, CommentService, GenreService, ReviewService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, SignupService, TitleService, TokenService,
    UserService,
};
