//! Review service
//!
//! Carries the one-review-per-(title, author) uniqueness guard. The
//! request-layer existence check gives a clean conflict message; the
//! storage-layer constraint settles concurrent races.

use review_core::entities::Review;
use review_core::policy::{Action, ResourceKind};
use review_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CreateReviewRequest, PaginatedResponse, ReviewResponse, ReviewWithAuthor, UpdateReviewRequest,
};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Review service
pub struct ReviewService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReviewService<'a> {
    /// Create a new ReviewService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List reviews for a title; readable by anyone
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        title_id: Snowflake,
        limit: i64,
        after: Option<Snowflake>,
    ) -> ServiceResult<PaginatedResponse<ReviewResponse>> {
        self.ensure_title_exists(title_id).await?;

        let reviews = self
            .ctx
            .review_repo()
            .find_by_title(title_id, limit + 1, after)
            .await?;

        let has_more = reviews.len() as i64 > limit;
        let mut data = Vec::with_capacity(reviews.len().min(limit as usize));
        let mut after = None;
        for review in reviews.into_iter().take(limit as usize) {
            after = Some(review.id.to_string());
            data.push(self.compose(review).await?);
        }

        Ok(PaginatedResponse::new(data, after, has_more, limit as i32))
    }

    /// Get a single review; readable by anyone
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        title_id: Snowflake,
        review_id: Snowflake,
    ) -> ServiceResult<ReviewResponse> {
        let review = self.load(title_id, review_id).await?;
        self.compose(review).await
    }

    /// Create a review.
    ///
    /// The (title, author) pair is fixed at creation and never checked
    /// again on update.
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        author_id: Snowflake,
        title_id: Snowflake,
        request: CreateReviewRequest,
    ) -> ServiceResult<ReviewResponse> {
        let access = AccessService::new(self.ctx);
        let actor = access.actor(Some(author_id)).await?;
        access.require(&actor, Action::Create, ResourceKind::Review)?;

        self.ensure_title_exists(title_id).await?;

        if !Review::score_in_range(request.score) {
            return Err(DomainError::ScoreOutOfRange(request.score).into());
        }

        // Fast-path duplicate check for a clean error; the composite
        // unique index decides under concurrency.
        if self
            .ctx
            .review_repo()
            .exists_for(title_id, author_id)
            .await?
        {
            return Err(DomainError::DuplicateReview.into());
        }

        let review = Review::new(
            self.ctx.generate_id(),
            title_id,
            author_id,
            request.score,
            request.text,
        );
        self.ctx.review_repo().create(&review).await?;

        info!(review_id = %review.id, %title_id, "Review created");

        self.compose(review).await
    }

    /// Patch a review's score/text; author, moderator, or admin.
    ///
    /// The creation timestamp is never reset.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller_id: Snowflake,
        title_id: Snowflake,
        review_id: Snowflake,
        request: UpdateReviewRequest,
    ) -> ServiceResult<ReviewResponse> {
        let mut review = self.load(title_id, review_id).await?;

        let access = AccessService::new(self.ctx);
        let actor = access.actor(Some(caller_id)).await?;
        access.require_object(&actor, Action::Update, ResourceKind::Review, review.author_id)?;

        if let Some(score) = request.score {
            if !Review::score_in_range(score) {
                return Err(DomainError::ScoreOutOfRange(score).into());
            }
            review.score = score;
        }
        if let Some(text) = request.text {
            review.text = text;
        }

        self.ctx.review_repo().update(&review).await?;

        self.compose(review).await
    }

    /// Delete a review; author, moderator, or admin. Comments cascade.
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        caller_id: Snowflake,
        title_id: Snowflake,
        review_id: Snowflake,
    ) -> ServiceResult<()> {
        let review = self.load(title_id, review_id).await?;

        let access = AccessService::new(self.ctx);
        let actor = access.actor(Some(caller_id)).await?;
        access.require_object(&actor, Action::Delete, ResourceKind::Review, review.author_id)?;

        self.ctx.review_repo().delete(review.id).await?;

        info!(%review_id, "Review deleted");
        Ok(())
    }

    /// Load a review and verify it belongs to the title in the path
    async fn load(&self, title_id: Snowflake, review_id: Snowflake) -> ServiceResult<Review> {
        let review = self
            .ctx
            .review_repo()
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Review", review_id.to_string()))?;

        if review.title_id != title_id {
            return Err(ServiceError::not_found("Review", review_id.to_string()));
        }

        Ok(review)
    }

    async fn ensure_title_exists(&self, title_id: Snowflake) -> ServiceResult<()> {
        self.ctx
            .title_repo()
            .find_by_id(title_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Title", title_id.to_string()))?;
        Ok(())
    }

    async fn compose(&self, review: Review) -> ServiceResult<ReviewResponse> {
        let author = self
            .ctx
            .user_repo()
            .find_by_id(review.author_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", review.author_id.to_string()))?;

        Ok(ReviewResponse::from(ReviewWithAuthor {
            review,
            author_username: author.username,
        }))
    }
}
