//! Category handlers
//!
//! Listing is public; mutation requires admin (enforced by the service).

use axum::{
    extract::{Path, Query, State},
    Json,
};
use review_service::{CategoryResponse, CategoryService, CreateCategoryRequest, PaginatedResponse};
use serde::Deserialize;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Name search query parameters
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

/// List categories
///
/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
    pagination: Pagination,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<PaginatedResponse<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let response = service
        .list(
            params.search.as_deref(),
            i64::from(pagination.limit),
            pagination.after,
        )
        .await?;
    Ok(Json(response))
}

/// Create a category (admin only)
///
/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<Created<Json<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Delete a category by slug (admin only)
///
/// DELETE /categories/{slug}
pub async fn delete_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
) -> ApiResult<NoContent> {
    let service = CategoryService::new(state.service_context());
    service.delete(auth.user_id, &slug).await?;
    Ok(NoContent)
}
