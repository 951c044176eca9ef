//! Review handlers
//!
//! Listing and detail are public; creation requires authentication and
//! the one-review-per-(title, author) guard; edits follow the
//! author/moderator/admin object policy.

use axum::{
    extract::{Path, State},
    Json,
};
use review_service::{
    CreateReviewRequest, PaginatedResponse, ReviewResponse, ReviewService, UpdateReviewRequest,
};

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

use super::parse_id;

/// List reviews for a title
///
/// GET /titles/{title_id}/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(title_id): Path<String>,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<ReviewResponse>>> {
    let title_id = parse_id(&title_id, "title_id")?;
    let service = ReviewService::new(state.service_context());
    let response = service
        .list(title_id, i64::from(pagination.limit), pagination.after)
        .await?;
    Ok(Json(response))
}

/// Get a single review
///
/// GET /titles/{title_id}/reviews/{review_id}
pub async fn get_review(
    State(state): State<AppState>,
    Path((title_id, review_id)): Path<(String, String)>,
) -> ApiResult<Json<ReviewResponse>> {
    let title_id = parse_id(&title_id, "title_id")?;
    let review_id = parse_id(&review_id, "review_id")?;
    let service = ReviewService::new(state.service_context());
    let response = service.get(title_id, review_id).await?;
    Ok(Json(response))
}

/// Create a review
///
/// POST /titles/{title_id}/reviews
pub async fn create_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(title_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateReviewRequest>,
) -> ApiResult<Created<Json<ReviewResponse>>> {
    let title_id = parse_id(&title_id, "title_id")?;
    let service = ReviewService::new(state.service_context());
    let response = service.create(auth.user_id, title_id, request).await?;
    Ok(Created(Json(response)))
}

/// Patch a review's score/text
///
/// PATCH /titles/{title_id}/reviews/{review_id}
pub async fn update_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((title_id, review_id)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<UpdateReviewRequest>,
) -> ApiResult<Json<ReviewResponse>> {
    let title_id = parse_id(&title_id, "title_id")?;
    let review_id = parse_id(&review_id, "review_id")?;
    let service = ReviewService::new(state.service_context());
    let response = service
        .update(auth.user_id, title_id, review_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete a review; comments cascade
///
/// DELETE /titles/{title_id}/reviews/{review_id}
pub async fn delete_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((title_id, review_id)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let title_id = parse_id(&title_id, "title_id")?;
    let review_id = parse_id(&review_id, "review_id")?;
    let service = ReviewService::new(state.service_context());
    service.delete(auth.user_id, title_id, review_id).await?;
    Ok(NoContent)
}
