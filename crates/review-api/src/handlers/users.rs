//! User handlers
//!
//! Endpoints for the /users/me profile surface and the admin user
//! administration surface.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use review_service::{
    CreateUserRequest, PaginatedResponse, UpdateSelfRequest, UpdateUserRequest, UserResponse,
    UserService,
};
use serde::Deserialize;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Username search query parameters
#[derive(Debug, Default, Deserialize)]
pub struct UserSearchParams {
    pub search: Option<String>,
}

/// Get current user
///
/// GET /users/me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_current(auth.user_id).await?;
    Ok(Json(response))
}

/// Update current user (role is read-only here)
///
/// PATCH /users/me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateSelfRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_current(auth.user_id, request).await?;
    Ok(Json(response))
}

/// List users (admin only)
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
    Query(params): Query<UserSearchParams>,
) -> ApiResult<Json<PaginatedResponse<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service
        .list(
            auth.user_id,
            params.search.as_deref(),
            i64::from(pagination.limit),
            pagination.after,
        )
        .await?;
    Ok(Json(response))
}

/// Create a user (admin only)
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get a user by username (admin only)
///
/// GET /users/{username}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_by_username(auth.user_id, &username).await?;
    Ok(Json(response))
}

/// Patch a user by username (admin only)
///
/// PATCH /users/{username}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service
        .update_by_username(auth.user_id, &username, request)
        .await?;
    Ok(Json(response))
}

/// Delete a user by username (admin only)
///
/// DELETE /users/{username}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.delete_by_username(auth.user_id, &username).await?;
    Ok(NoContent)
}
