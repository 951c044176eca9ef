//! Title handlers
//!
//! Listing and detail are public; mutation requires admin (enforced by
//! the service).

use axum::{
    extract::{Path, Query, State},
    Json,
};
use review_core::traits::TitleQuery;
use review_service::{
    CreateTitleRequest, PaginatedResponse, TitleResponse, TitleService, UpdateTitleRequest,
};
use serde::Deserialize;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

use super::parse_id;

/// Title filter query parameters
#[derive(Debug, Default, Deserialize)]
pub struct TitleFilterParams {
    pub category: Option<String>,
    pub genre: Option<String>,
    pub name: Option<String>,
    pub year: Option<i32>,
}

/// List titles with filters
///
/// GET /titles
pub async fn list_titles(
    State(state): State<AppState>,
    pagination: Pagination,
    Query(params): Query<TitleFilterParams>,
) -> ApiResult<Json<PaginatedResponse<TitleResponse>>> {
    let service = TitleService::new(state.service_context());
    let response = service
        .list(TitleQuery {
            category_slug: params.category,
            genre_slug: params.genre,
            name: params.name,
            year: params.year,
            limit: i64::from(pagination.limit),
            after: pagination.after,
        })
        .await?;
    Ok(Json(response))
}

/// Get a title with its derived rating
///
/// GET /titles/{title_id}
pub async fn get_title(
    State(state): State<AppState>,
    Path(title_id): Path<String>,
) -> ApiResult<Json<TitleResponse>> {
    let title_id = parse_id(&title_id, "title_id")?;
    let service = TitleService::new(state.service_context());
    let response = service.get(title_id).await?;
    Ok(Json(response))
}

/// Create a title (admin only)
///
/// POST /titles
pub async fn create_title(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateTitleRequest>,
) -> ApiResult<Created<Json<TitleResponse>>> {
    let service = TitleService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Patch a title (admin only)
///
/// PATCH /titles/{title_id}
pub async fn update_title(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(title_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateTitleRequest>,
) -> ApiResult<Json<TitleResponse>> {
    let title_id = parse_id(&title_id, "title_id")?;
    let service = TitleService::new(state.service_context());
    let response = service.update(auth.user_id, title_id, request).await?;
    Ok(Json(response))
}

/// Delete a title (admin only); reviews and comments cascade
///
/// DELETE /titles/{title_id}
pub async fn delete_title(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(title_id): Path<String>,
) -> ApiResult<NoContent> {
    let title_id = parse_id(&title_id, "title_id")?;
    let service = TitleService::new(state.service_context());
    service.delete(auth.user_id, title_id).await?;
    Ok(NoContent)
}
