//! Comment handlers
//!
//! Same policy shape as reviews: public reads, authenticated creation,
//! author/moderator/admin edits.

use axum::{
    extract::{Path, State},
    Json,
};
use review_service::{
    CommentResponse, CommentService, CreateCommentRequest, PaginatedResponse,
    UpdateCommentRequest,
};

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

use super::parse_id;

/// List comments on a review
///
/// GET /titles/{title_id}/reviews/{review_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path((title_id, review_id)): Path<(String, String)>,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<CommentResponse>>> {
    let title_id = parse_id(&title_id, "title_id")?;
    let review_id = parse_id(&review_id, "review_id")?;
    let service = CommentService::new(state.service_context());
    let response = service
        .list(title_id, review_id, i64::from(pagination.limit), pagination.after)
        .await?;
    Ok(Json(response))
}

/// Get a single comment
///
/// GET /titles/{title_id}/reviews/{review_id}/comments/{comment_id}
pub async fn get_comment(
    State(state): State<AppState>,
    Path((title_id, review_id, comment_id)): Path<(String, String, String)>,
) -> ApiResult<Json<CommentResponse>> {
    let title_id = parse_id(&title_id, "title_id")?;
    let review_id = parse_id(&review_id, "review_id")?;
    let comment_id = parse_id(&comment_id, "comment_id")?;
    let service = CommentService::new(state.service_context());
    let response = service.get(title_id, review_id, comment_id).await?;
    Ok(Json(response))
}

/// Create a comment
///
/// POST /titles/{title_id}/reviews/{review_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((title_id, review_id)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let title_id = parse_id(&title_id, "title_id")?;
    let review_id = parse_id(&review_id, "review_id")?;
    let service = CommentService::new(state.service_context());
    let response = service
        .create(auth.user_id, title_id, review_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Patch a comment's text
///
/// PATCH /titles/{title_id}/reviews/{review_id}/comments/{comment_id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((title_id, review_id, comment_id)): Path<(String, String, String)>,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let title_id = parse_id(&title_id, "title_id")?;
    let review_id = parse_id(&review_id, "review_id")?;
    let comment_id = parse_id(&comment_id, "comment_id")?;
    let service = CommentService::new(state.service_context());
    let response = service
        .update(auth.user_id, title_id, review_id, comment_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete a comment
///
/// DELETE /titles/{title_id}/reviews/{review_id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((title_id, review_id, comment_id)): Path<(String, String, String)>,
) -> ApiResult<NoContent> {
    let title_id = parse_id(&title_id, "title_id")?;
    let review_id = parse_id(&review_id, "review_id")?;
    let comment_id = parse_id(&comment_id, "comment_id")?;
    let service = CommentService::new(state.service_context());
    service
        .delete(auth.user_id, title_id, review_id, comment_id)
        .await?;
    Ok(NoContent)
}
