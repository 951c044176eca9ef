//! Genre handlers
//!
//! Listing is public; mutation requires admin (enforced by the service).

use axum::{
    extract::{Path, Query, State},
    Json,
};
use review_service::{CreateGenreRequest, GenreResponse, GenreService, PaginatedResponse};
use serde::Deserialize;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Name search query parameters
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

/// List genres
///
/// GET /genres
pub async fn list_genres(
    State(state): State<AppState>,
    pagination: Pagination,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<PaginatedResponse<GenreResponse>>> {
    let service = GenreService::new(state.service_context());
    let response = service
        .list(
            params.search.as_deref(),
            i64::from(pagination.limit),
            pagination.after,
        )
        .await?;
    Ok(Json(response))
}

/// Create a genre (admin only)
///
/// POST /genres
pub async fn create_genre(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateGenreRequest>,
) -> ApiResult<Created<Json<GenreResponse>>> {
    let service = GenreService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Delete a genre by slug (admin only)
///
/// DELETE /genres/{slug}
pub async fn delete_genre(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
) -> ApiResult<NoContent> {
    let service = GenreService::new(state.service_context());
    service.delete(auth.user_id, &slug).await?;
    Ok(NoContent)
}
