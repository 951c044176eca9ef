//! Comment service
//!
//! Comments hang off reviews and follow the same object policy:
//! author, moderator, or admin may modify.

use review_core::entities::Comment;
use review_core::policy::{Action, ResourceKind};
use review_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{
    CommentResponse, CommentWithAuthor, CreateCommentRequest, PaginatedResponse,
    UpdateCommentRequest,
};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List comments on a review; readable by anyone
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        title_id: Snowflake,
        review_id: Snowflake,
        limit: i64,
        after: Option<Snowflake>,
    ) -> ServiceResult<PaginatedResponse<CommentResponse>> {
        self.ensure_review_in_title(title_id, review_id).await?;

        let comments = self
            .ctx
            .comment_repo()
            .find_by_review(review_id, limit + 1, after)
            .await?;

        let has_more = comments.len() as i64 > limit;
        let mut data = Vec::with_capacity(comments.len().min(limit as usize));
        let mut after = None;
        for comment in comments.into_iter().take(limit as usize) {
            after = Some(comment.id.to_string());
            data.push(self.compose(comment).await?);
        }

        Ok(PaginatedResponse::new(data, after, has_more, limit as i32))
    }

    /// Get a single comment; readable by anyone
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        title_id: Snowflake,
        review_id: Snowflake,
        comment_id: Snowflake,
    ) -> ServiceResult<CommentResponse> {
        self.ensure_review_in_title(title_id, review_id).await?;
        let comment = self.load(review_id, comment_id).await?;
        self.compose(comment).await
    }

    /// Create a comment on a review
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        author_id: Snowflake,
        title_id: Snowflake,
        review_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let access = AccessService::new(self.ctx);
        let actor = access.actor(Some(author_id)).await?;
        access.require(&actor, Action::Create, ResourceKind::Comment)?;

        self.ensure_review_in_title(title_id, review_id).await?;

        let comment = Comment::new(self.ctx.generate_id(), review_id, author_id, request.text);
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, %review_id, "Comment created");

        self.compose(comment).await
    }

    /// Patch a comment's text; author, moderator, or admin.
    ///
    /// The creation timestamp is never reset.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller_id: Snowflake,
        title_id: Snowflake,
        review_id: Snowflake,
        comment_id: Snowflake,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        self.ensure_review_in_title(title_id, review_id).await?;
        let mut comment = self.load(review_id, comment_id).await?;

        let access = AccessService::new(self.ctx);
        let actor = access.actor(Some(caller_id)).await?;
        access.require_object(&actor, Action::Update, ResourceKind::Comment, comment.author_id)?;

        comment.text = request.text;
        self.ctx.comment_repo().update(&comment).await?;

        self.compose(comment).await
    }

    /// Delete a comment; author, moderator, or admin
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        caller_id: Snowflake,
        title_id: Snowflake,
        review_id: Snowflake,
        comment_id: Snowflake,
    ) -> ServiceResult<()> {
        self.ensure_review_in_title(title_id, review_id).await?;
        let comment = self.load(review_id, comment_id).await?;

        let access = AccessService::new(self.ctx);
        let actor = access.actor(Some(caller_id)).await?;
        access.require_object(&actor, Action::Delete, ResourceKind::Comment, comment.author_id)?;

        self.ctx.comment_repo().delete(comment.id).await?;

        info!(%comment_id, "Comment deleted");
        Ok(())
    }

    /// Load a comment and verify it belongs to the review in the path
    async fn load(&self, review_id: Snowflake, comment_id: Snowflake) -> ServiceResult<Comment> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        if comment.review_id != review_id {
            return Err(ServiceError::not_found("Comment", comment_id.to_string()));
        }

        Ok(comment)
    }

    /// Verify the review exists and belongs to the title in the path
    async fn ensure_review_in_title(
        &self,
        title_id: Snowflake,
        review_id: Snowflake,
    ) -> ServiceResult<()> {
        let review = self
            .ctx
            .review_repo()
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Review", review_id.to_string()))?;

        if review.title_id != title_id {
            return Err(ServiceError::not_found("Review", review_id.to_string()));
        }

        Ok(())
    }

    async fn compose(&self, comment: Comment) -> ServiceResult<CommentResponse> {
        let author = self
            .ctx
            .user_repo()
            .find_by_id(comment.author_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", comment.author_id.to_string()))?;

        Ok(CommentResponse::from(CommentWithAuthor {
            comment,
            author_username: author.username,
        }))
    }
}
