//! PostgreSQL implementation of ReviewRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use review_core::entities::Review;
use review_core::error::DomainError;
use review_core::traits::{RepoResult, ReviewRepository};
use review_core::value_objects::Snowflake;

use crate::models::ReviewModel;

use super::error::{map_db_error, map_unique_violation, review_not_found};

/// PostgreSQL implementation of ReviewRepository
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    /// Create a new PgReviewRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Review>> {
        let result = sqlx::query_as::<_, ReviewModel>(
            r"
            SELECT id, title_id, author_id, score, text, created_at
            FROM reviews
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Review::from))
    }

    #[instrument(skip(self))]
    async fn find_by_title(
        &self,
        title_id: Snowflake,
        limit: i64,
        after: Option<Snowflake>,
    ) -> RepoResult<Vec<Review>> {
        let result = sqlx::query_as::<_, ReviewModel>(
            r"
            SELECT id, title_id, author_id, score, text, created_at
            FROM reviews
            WHERE title_id = $1
              AND ($2::BIGINT IS NULL OR id > $2)
            ORDER BY id
            LIMIT $3
            ",
        )
        .bind(title_id.into_inner())
        .bind(after.map(Snowflake::into_inner))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Review::from).collect())
    }

    #[instrument(skip(self))]
    async fn exists_for(&self, title_id: Snowflake, author_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM reviews WHERE title_id = $1 AND author_id = $2)
            ",
        )
        .bind(title_id.into_inner())
        .bind(author_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn average_score(&self, title_id: Snowflake) -> RepoResult<Option<f64>> {
        let result = sqlx::query_scalar::<_, Option<f64>>(
            r"
            SELECT AVG(score)::FLOAT8 FROM reviews WHERE title_id = $1
            ",
        )
        .bind(title_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, review), fields(review_id = %review.id))]
    async fn create(&self, review: &Review) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO reviews (id, title_id, author_id, score, text, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(review.id.into_inner())
        .bind(review.title_id.into_inner())
        .bind(review.author_id.into_inner())
        .bind(review.score)
        .bind(&review.text)
        .bind(review.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // The loser of a concurrent create race lands here
            map_unique_violation(e, |_| DomainError::DuplicateReview)
        })?;

        Ok(())
    }

    #[instrument(skip(self, review), fields(review_id = %review.id))]
    async fn update(&self, review: &Review) -> RepoResult<()> {
        // Only score and text are mutable; created_at stays untouched
        let result = sqlx::query(
            r"
            UPDATE reviews SET score = $2, text = $3 WHERE id = $1
            ",
        )
        .bind(review.id.into_inner())
        .bind(review.score)
        .bind(&review.text)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(review_not_found(review.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Comments go with the review via FK cascade
        let result = sqlx::query(
            r"
            DELETE FROM reviews WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(review_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReviewRepository>();
    }
}
