//! Signup service
//!
//! Drives the signup/confirmation state machine: registers identities,
//! regenerates confirmation codes on retries, and mails codes out-of-band.

use review_core::entities::{generate_confirmation_code, is_reserved_username, User};
use review_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{SignupRequest, SignupResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

const MAIL_SUBJECT: &str = "Confirmation code";

/// Signup service
pub struct SignupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SignupService<'a> {
    /// Create a new SignupService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register an identity, or re-issue the confirmation code for a
    /// pending one.
    ///
    /// State machine per username:
    /// - unregistered + fresh email: record created, code mailed
    /// - pending, same email: code regenerated and redelivered (idempotent retry)
    /// - pending, different email: rejected, no mutation
    /// - reserved username: rejected
    /// - email bound to another username: rejected
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<SignupResponse> {
        if is_reserved_username(&request.username) {
            return Err(DomainError::ReservedUsername(request.username).into());
        }

        if let Some(existing) = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
        {
            // Retry path: the email must match the registered address
            if existing.email != request.email {
                return Err(DomainError::EmailMismatch.into());
            }

            let code = generate_confirmation_code();
            self.ctx
                .user_repo()
                .set_confirmation_code(existing.id, &code)
                .await?;
            self.deliver_code(&existing.email, &code);

            info!(user_id = %existing.id, "Confirmation code regenerated");

            return Ok(SignupResponse {
                username: existing.username,
                email: existing.email,
            });
        }

        // Fresh username: the email must not belong to someone else
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let code = generate_confirmation_code();
        let mut user = User::new(
            self.ctx.generate_id(),
            request.username,
            request.email,
        );
        user.set_confirmation_code(code.clone());

        // A concurrent signup for the same username or email loses to the
        // unique constraints here and surfaces as a conflict.
        self.ctx.user_repo().create(&user).await?;
        self.deliver_code(&user.email, &code);

        info!(user_id = %user.id, "User registered, confirmation code sent");

        Ok(SignupResponse {
            username: user.username,
            email: user.email,
        })
    }

    /// Mail the code out-of-band; delivery failures are not surfaced
    fn deliver_code(&self, email: &str, code: &str) {
        self.ctx
            .mailer()
            .send(email, MAIL_SUBJECT, &format!("Your code: {code}"));
    }
}
