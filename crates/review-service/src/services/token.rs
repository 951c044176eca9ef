//! Token service
//!
//! Exchanges a (username, confirmation code) pair for a signed access token.

use review_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{TokenRequest, TokenResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Token issuance service
pub struct TokenService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TokenService<'a> {
    /// Create a new TokenService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue an access token.
    ///
    /// The stored confirmation code is compared exactly; a mismatch is a
    /// hard authentication rejection, never ignored. Issuance leaves the
    /// stored code untouched.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn issue_token(&self, request: TokenRequest) -> ServiceResult<TokenResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", request.username.clone()))?;

        if !user.confirmation_code_matches(&request.confirmation_code) {
            warn!(user_id = %user.id, "Token issuance failed: confirmation code mismatch");
            return Err(DomainError::InvalidConfirmationCode.into());
        }

        let token = self
            .ctx
            .jwt_service()
            .issue(user.id)
            .map_err(ServiceError::from)?;

        info!(user_id = %user.id, "Access token issued");

        Ok(TokenResponse::from(token))
    }
}

#[cfg(test)]
mod tests {
    // Token issuance against a live store is exercised in the workspace
    // integration tests; the code-match rule itself is covered by
    // User::confirmation_code_matches unit tests in review-core.
}
