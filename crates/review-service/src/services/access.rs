//! Access control service
//!
//! Bridges authenticated request state to the centralized policy in
//! review-core. Loads the caller's record, builds an [`Actor`], and turns
//! policy denials into `ServiceError::PermissionDenied`.

use review_core::policy::{self, Action, Actor, ResourceKind};
use review_core::Snowflake;
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Access control service
pub struct AccessService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccessService<'a> {
    /// Create a new AccessService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build the actor for a caller. `None` means an anonymous request;
    /// a token whose user no longer exists is rejected.
    #[instrument(skip(self))]
    pub async fn actor(&self, user_id: Option<Snowflake>) -> ServiceResult<Actor> {
        let Some(user_id) = user_id else {
            return Ok(Actor::Anonymous);
        };

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(Actor::from_user(&user))
    }

    /// Require read access to a resource kind
    pub fn require_read(&self, actor: &Actor, kind: ResourceKind) -> ServiceResult<()> {
        if !policy::can_read(actor, kind) {
            debug!(?kind, "Read denied by policy");
            return Err(ServiceError::permission_denied(label(Action::Read, kind)));
        }
        Ok(())
    }

    /// Require the coarse-grained write permission
    pub fn require(&self, actor: &Actor, action: Action, kind: ResourceKind) -> ServiceResult<()> {
        if !policy::can_write(actor, action, kind) {
            debug!(?action, ?kind, "Write denied by policy");
            return Err(ServiceError::permission_denied(label(action, kind)));
        }
        Ok(())
    }

    /// Require the object-level permission. Runs the coarse check first;
    /// a denial at either stage surfaces as forbidden, never a no-op.
    pub fn require_object(
        &self,
        actor: &Actor,
        action: Action,
        kind: ResourceKind,
        author_id: Snowflake,
    ) -> ServiceResult<()> {
        if !policy::authorize(actor, action, kind, Some(author_id)).is_allowed() {
            debug!(?action, ?kind, %author_id, "Object write denied by policy");
            return Err(ServiceError::permission_denied(label(action, kind)));
        }
        Ok(())
    }
}

fn label(action: Action, kind: ResourceKind) -> String {
    format!("{action:?} {kind:?}").to_lowercase()
}
