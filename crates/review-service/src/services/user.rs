//! User service
//!
//! Admin-facing user administration plus the /users/me profile surface.
//! Admin-created accounts are confirmed implicitly: no confirmation code
//! is ever issued for them.

use review_core::entities::User;
use review_core::policy::{Action, ResourceKind};
use review_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CreateUserRequest, PaginatedResponse, UpdateSelfRequest, UpdateUserRequest, UserResponse,
};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List users (admin only), optionally filtered by username substring
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        caller_id: Snowflake,
        search: Option<&str>,
        limit: i64,
        after: Option<Snowflake>,
    ) -> ServiceResult<PaginatedResponse<UserResponse>> {
        let access = AccessService::new(self.ctx);
        let actor = access.actor(Some(caller_id)).await?;
        access.require_read(&actor, ResourceKind::User)?;

        let users = self.ctx.user_repo().list(search, limit + 1, after).await?;

        let has_more = users.len() as i64 > limit;
        let page: Vec<&User> = users.iter().take(limit as usize).collect();
        let after = page.last().map(|u| u.id.to_string());
        let data = page.into_iter().map(UserResponse::from).collect();

        Ok(PaginatedResponse::new(data, after, has_more, limit as i32))
    }

    /// Create a user (admin only)
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn create(
        &self,
        caller_id: Snowflake,
        request: CreateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let access = AccessService::new(self.ctx);
        let actor = access.actor(Some(caller_id)).await?;
        access.require(&actor, Action::Create, ResourceKind::User)?;

        let mut user = User::new(self.ctx.generate_id(), request.username, request.email);
        user.first_name = request.first_name;
        user.last_name = request.last_name;
        user.bio = request.bio;
        if let Some(role) = request.role {
            user.role = role;
        }

        self.ctx.user_repo().create(&user).await?;

        info!(user_id = %user.id, "User created by admin");

        Ok(UserResponse::from(&user))
    }

    /// Get a user by username (admin only)
    #[instrument(skip(self))]
    pub async fn get_by_username(
        &self,
        caller_id: Snowflake,
        username: &str,
    ) -> ServiceResult<UserResponse> {
        let access = AccessService::new(self.ctx);
        let actor = access.actor(Some(caller_id)).await?;
        access.require_read(&actor, ResourceKind::User)?;

        let user = self.load(username).await?;
        Ok(UserResponse::from(&user))
    }

    /// Patch a user by username (admin only)
    #[instrument(skip(self, request))]
    pub async fn update_by_username(
        &self,
        caller_id: Snowflake,
        username: &str,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let access = AccessService::new(self.ctx);
        let actor = access.actor(Some(caller_id)).await?;
        access.require(&actor, Action::Update, ResourceKind::User)?;

        let mut user = self.load(username).await?;
        apply_profile_changes(
            &mut user,
            request.email,
            request.first_name,
            request.last_name,
            request.bio,
        );
        if let Some(role) = request.role {
            user.role = role;
        }

        self.ctx.user_repo().update(&user).await?;

        Ok(UserResponse::from(&user))
    }

    /// Delete a user by username (admin only)
    #[instrument(skip(self))]
    pub async fn delete_by_username(
        &self,
        caller_id: Snowflake,
        username: &str,
    ) -> ServiceResult<()> {
        let access = AccessService::new(self.ctx);
        let actor = access.actor(Some(caller_id)).await?;
        access.require(&actor, Action::Delete, ResourceKind::User)?;

        self.ctx.user_repo().delete_by_username(username).await?;

        info!(username, "User deleted by admin");
        Ok(())
    }

    /// Get the caller's own profile
    #[instrument(skip(self))]
    pub async fn get_current(&self, caller_id: Snowflake) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(caller_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", caller_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Patch the caller's own profile; the role is read-only here
    #[instrument(skip(self, request))]
    pub async fn update_current(
        &self,
        caller_id: Snowflake,
        request: UpdateSelfRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(caller_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", caller_id.to_string()))?;

        apply_profile_changes(
            &mut user,
            request.email,
            request.first_name,
            request.last_name,
            request.bio,
        );

        self.ctx.user_repo().update(&user).await?;

        Ok(UserResponse::from(&user))
    }

    async fn load(&self, username: &str) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()).into())
    }
}

fn apply_profile_changes(
    user: &mut User,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    bio: Option<String>,
) {
    if let Some(email) = email {
        user.email = email;
    }
    if let Some(first_name) = first_name {
        user.first_name = Some(first_name);
    }
    if let Some(last_name) = last_name {
        user.last_name = Some(last_name);
    }
    if let Some(bio) = bio {
        user.bio = Some(bio);
    }
}
