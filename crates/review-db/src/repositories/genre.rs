//! PostgreSQL implementation of GenreRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use review_core::entities::Genre;
use review_core::error::DomainError;
use review_core::traits::{GenreRepository, RepoResult};
use review_core::value_objects::Snowflake;

use crate::models::GenreModel;

use super::error::{genre_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of GenreRepository
#[derive(Clone)]
pub struct PgGenreRepository {
    pool: PgPool,
}

impl PgGenreRepository {
    /// Create a new PgGenreRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenreRepository for PgGenreRepository {
    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Genre>> {
        let result = sqlx::query_as::<_, GenreModel>(
            r"
            SELECT id, name, slug, created_at FROM genres WHERE slug = $1
            ",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Genre::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slugs(&self, slugs: &[String]) -> RepoResult<Vec<Genre>> {
        let rows = sqlx::query_as::<_, GenreModel>(
            r"
            SELECT id, name, slug, created_at FROM genres WHERE slug = ANY($1)
            ",
        )
        .bind(slugs)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        // Preserve the caller's order
        let mut found: Vec<Genre> = rows.into_iter().map(Genre::from).collect();
        found.sort_by_key(|g| slugs.iter().position(|s| *s == g.slug).unwrap_or(usize::MAX));
        Ok(found)
    }

    #[instrument(skip(self))]
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<Genre>> {
        let raw: Vec<i64> = ids.iter().copied().map(Snowflake::into_inner).collect();
        let rows = sqlx::query_as::<_, GenreModel>(
            r"
            SELECT id, name, slug, created_at FROM genres WHERE id = ANY($1)
            ",
        )
        .bind(&raw)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        // Preserve the caller's order
        let mut found: Vec<Genre> = rows.into_iter().map(Genre::from).collect();
        found.sort_by_key(|g| ids.iter().position(|id| *id == g.id).unwrap_or(usize::MAX));
        Ok(found)
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        search: Option<&str>,
        limit: i64,
        after: Option<Snowflake>,
    ) -> RepoResult<Vec<Genre>> {
        let result = sqlx::query_as::<_, GenreModel>(
            r"
            SELECT id, name, slug, created_at FROM genres
            WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
              AND ($2::BIGINT IS NULL OR id > $2)
            ORDER BY id
            LIMIT $3
            ",
        )
        .bind(search)
        .bind(after.map(Snowflake::into_inner))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Genre::from).collect())
    }

    #[instrument(skip(self, genre), fields(slug = %genre.slug))]
    async fn create(&self, genre: &Genre) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO genres (id, name, slug, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(genre.id.into_inner())
        .bind(&genre.name)
        .bind(&genre.slug)
        .bind(genre.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let slug = genre.slug.clone();
            map_unique_violation(e, move |_| DomainError::SlugAlreadyExists(slug))
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_slug(&self, slug: &str) -> RepoResult<()> {
        // Join rows in title_genres are removed by the FK cascade
        let result = sqlx::query(
            r"
            DELETE FROM genres WHERE slug = $1
            ",
        )
        .bind(slug)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(genre_not_found(slug));
        }

        Ok(())
    }
}
