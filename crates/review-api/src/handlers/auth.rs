//! Authentication handlers
//!
//! Endpoints for the two-step signup/token handshake.

use axum::{extract::State, Json};
use review_service::{SignupRequest, SignupResponse, SignupService, TokenRequest, TokenResponse, TokenService};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Register an identity and mail a confirmation code
///
/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Json<SignupResponse>> {
    let service = SignupService::new(state.service_context());
    let response = service.signup(request).await?;
    Ok(Json(response))
}

/// Exchange a confirmation code for an access token
///
/// POST /auth/token
pub async fn token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TokenRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let service = TokenService::new(state.service_context());
    let response = service.issue_token(request).await?;
    Ok(Json(response))
}
