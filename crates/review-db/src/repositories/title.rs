//! PostgreSQL implementation of TitleRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use review_core::entities::Title;
use review_core::traits::{RepoResult, TitleQuery, TitleRepository};
use review_core::value_objects::Snowflake;

use crate::models::TitleModel;

use super::error::{map_db_error, title_not_found};

/// PostgreSQL implementation of TitleRepository
#[derive(Clone)]
pub struct PgTitleRepository {
    pool: PgPool,
}

impl PgTitleRepository {
    /// Create a new PgTitleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load genre ids for a set of titles in one query
    async fn genre_ids_for(&self, title_ids: &[i64]) -> RepoResult<HashMap<i64, Vec<Snowflake>>> {
        let rows = sqlx::query_as::<_, (i64, i64)>(
            r"
            SELECT title_id, genre_id FROM title_genres
            WHERE title_id = ANY($1)
            ORDER BY title_id, genre_id
            ",
        )
        .bind(title_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut map: HashMap<i64, Vec<Snowflake>> = HashMap::new();
        for (title_id, genre_id) in rows {
            map.entry(title_id).or_default().push(Snowflake::new(genre_id));
        }
        Ok(map)
    }
}

#[async_trait]
impl TitleRepository for PgTitleRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Title>> {
        let result = sqlx::query_as::<_, TitleModel>(
            r"
            SELECT id, name, year, description, category_id, created_at, updated_at
            FROM titles
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let Some(model) = result else {
            return Ok(None);
        };

        let mut genres = self.genre_ids_for(&[model.id]).await?;
        let genre_ids = genres.remove(&model.id).unwrap_or_default();
        Ok(Some(model.into_entity(genre_ids)))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: TitleQuery) -> RepoResult<Vec<Title>> {
        let models = sqlx::query_as::<_, TitleModel>(
            r"
            SELECT DISTINCT t.id, t.name, t.year, t.description, t.category_id,
                   t.created_at, t.updated_at
            FROM titles t
            LEFT JOIN categories c ON c.id = t.category_id
            LEFT JOIN title_genres tg ON tg.title_id = t.id
            LEFT JOIN genres g ON g.id = tg.genre_id
            WHERE ($1::TEXT IS NULL OR c.slug = $1)
              AND ($2::TEXT IS NULL OR g.slug = $2)
              AND ($3::TEXT IS NULL OR t.name ILIKE '%' || $3 || '%')
              AND ($4::INT IS NULL OR t.year = $4)
              AND ($5::BIGINT IS NULL OR t.id > $5)
            ORDER BY t.id
            LIMIT $6
            ",
        )
        .bind(&query.category_slug)
        .bind(&query.genre_slug)
        .bind(&query.name)
        .bind(query.year)
        .bind(query.after.map(Snowflake::into_inner))
        .bind(query.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let mut genres = self.genre_ids_for(&ids).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let genre_ids = genres.remove(&m.id).unwrap_or_default();
                m.into_entity(genre_ids)
            })
            .collect())
    }

    #[instrument(skip(self, title), fields(title_id = %title.id))]
    async fn create(&self, title: &Title) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO titles (id, name, year, description, category_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(title.id.into_inner())
        .bind(&title.name)
        .bind(title.year)
        .bind(&title.description)
        .bind(title.category_id.map(Snowflake::into_inner))
        .bind(title.created_at)
        .bind(title.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for genre_id in &title.genre_ids {
            sqlx::query(
                r"
                INSERT INTO title_genres (title_id, genre_id) VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                ",
            )
            .bind(title.id.into_inner())
            .bind(genre_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self, title), fields(title_id = %title.id))]
    async fn update(&self, title: &Title) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE titles
            SET name = $2, year = $3, description = $4, category_id = $5, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(title.id.into_inner())
        .bind(&title.name)
        .bind(title.year)
        .bind(&title.description)
        .bind(title.category_id.map(Snowflake::into_inner))
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(title_not_found(title.id));
        }

        // Genre associations are replaced wholesale
        sqlx::query("DELETE FROM title_genres WHERE title_id = $1")
            .bind(title.id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        for genre_id in &title.genre_ids {
            sqlx::query(
                r"
                INSERT INTO title_genres (title_id, genre_id) VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                ",
            )
            .bind(title.id.into_inner())
            .bind(genre_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Reviews and their comments go with the title via FK cascades
        let result = sqlx::query(
            r"
            DELETE FROM titles WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(title_not_found(id));
        }

        Ok(())
    }
}
