//! Genre service
//!
//! Same shape as the category service: public listing, admin-only mutation.

use review_core::entities::Genre;
use review_core::policy::{Action, ResourceKind};
use review_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CreateGenreRequest, GenreResponse, PaginatedResponse};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Genre service
pub struct GenreService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GenreService<'a> {
    /// Create a new GenreService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List genres; readable by anyone
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        search: Option<&str>,
        limit: i64,
        after: Option<Snowflake>,
    ) -> ServiceResult<PaginatedResponse<GenreResponse>> {
        let genres = self.ctx.genre_repo().list(search, limit + 1, after).await?;

        let has_more = genres.len() as i64 > limit;
        let page: Vec<&Genre> = genres.iter().take(limit as usize).collect();
        let after = page.last().map(|g| g.id.to_string());
        let data = page.into_iter().map(GenreResponse::from).collect();

        Ok(PaginatedResponse::new(data, after, has_more, limit as i32))
    }

    /// Create a genre (admin only)
    #[instrument(skip(self, request), fields(slug = %request.slug))]
    pub async fn create(
        &self,
        caller_id: Snowflake,
        request: CreateGenreRequest,
    ) -> ServiceResult<GenreResponse> {
        let access = AccessService::new(self.ctx);
        let actor = access.actor(Some(caller_id)).await?;
        access.require(&actor, Action::Create, ResourceKind::Genre)?;

        let genre = Genre::new(self.ctx.generate_id(), request.name, request.slug);
        self.ctx.genre_repo().create(&genre).await?;

        info!(slug = %genre.slug, "Genre created");

        Ok(GenreResponse::from(&genre))
    }

    /// Delete a genre by slug (admin only)
    #[instrument(skip(self))]
    pub async fn delete(&self, caller_id: Snowflake, slug: &str) -> ServiceResult<()> {
        let access = AccessService::new(self.ctx);
        let actor = access.actor(Some(caller_id)).await?;
        access.require(&actor, Action::Delete, ResourceKind::Genre)?;

        self.ctx.genre_repo().delete_by_slug(slug).await?;

        info!(slug, "Genre deleted");
        Ok(())
    }
}
