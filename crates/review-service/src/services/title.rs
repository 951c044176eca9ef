//! Title service
//!
//! Handles catalogue title CRUD and composes responses with the derived
//! rating. Mutation is admin-only; the release year is validated against
//! the current year.

use chrono::{Datelike, Utc};
use review_core::entities::{Genre, Title};
use review_core::policy::{Action, ResourceKind};
use review_core::traits::TitleQuery;
use review_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CreateTitleRequest, PaginatedResponse, TitleResponse, TitleWithDetails, UpdateTitleRequest,
};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Title service
pub struct TitleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TitleService<'a> {
    /// Create a new TitleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List titles with filters; readable by anyone
    #[instrument(skip(self))]
    pub async fn list(&self, mut query: TitleQuery) -> ServiceResult<PaginatedResponse<TitleResponse>> {
        let limit = query.limit;
        query.limit = limit + 1;
        let titles = self.ctx.title_repo().list(query).await?;

        let has_more = titles.len() as i64 > limit;
        let mut data = Vec::with_capacity(titles.len().min(limit as usize));
        let mut after = None;
        for title in titles.into_iter().take(limit as usize) {
            after = Some(title.id.to_string());
            data.push(self.compose(title).await?);
        }

        Ok(PaginatedResponse::new(data, after, has_more, limit as i32))
    }

    /// Get a title by ID; readable by anyone
    #[instrument(skip(self))]
    pub async fn get(&self, title_id: Snowflake) -> ServiceResult<TitleResponse> {
        let title = self.load(title_id).await?;
        self.compose(title).await
    }

    /// Create a title (admin only)
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        caller_id: Snowflake,
        request: CreateTitleRequest,
    ) -> ServiceResult<TitleResponse> {
        let access = AccessService::new(self.ctx);
        let actor = access.actor(Some(caller_id)).await?;
        access.require(&actor, Action::Create, ResourceKind::Title)?;

        check_year(request.year)?;

        let category = self.resolve_category(request.category.as_deref()).await?;
        let genres = self.resolve_genres(&request.genre).await?;

        let mut title = Title::new(self.ctx.generate_id(), request.name, request.year);
        title.description = request.description;
        title.category_id = category.as_ref().map(|c| c.id);
        title.genre_ids = genres.iter().map(|g| g.id).collect();

        self.ctx.title_repo().create(&title).await?;

        info!(title_id = %title.id, "Title created");

        Ok(TitleResponse::from(TitleWithDetails {
            title,
            category,
            genres,
            rating: None,
        }))
    }

    /// Patch a title (admin only)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller_id: Snowflake,
        title_id: Snowflake,
        request: UpdateTitleRequest,
    ) -> ServiceResult<TitleResponse> {
        let access = AccessService::new(self.ctx);
        let actor = access.actor(Some(caller_id)).await?;
        access.require(&actor, Action::Update, ResourceKind::Title)?;

        let mut title = self.load(title_id).await?;

        if let Some(name) = request.name {
            title.set_name(name);
        }
        if let Some(year) = request.year {
            check_year(year)?;
            title.year = year;
        }
        if let Some(description) = request.description {
            title.set_description(Some(description));
        }
        if let Some(category_slug) = request.category.as_deref() {
            let category = self.resolve_category(Some(category_slug)).await?;
            title.category_id = category.map(|c| c.id);
        }
        if let Some(genre_slugs) = &request.genre {
            let genres = self.resolve_genres(genre_slugs).await?;
            title.genre_ids = genres.iter().map(|g| g.id).collect();
        }

        self.ctx.title_repo().update(&title).await?;

        self.compose(title).await
    }

    /// Delete a title (admin only); reviews and comments cascade
    #[instrument(skip(self))]
    pub async fn delete(&self, caller_id: Snowflake, title_id: Snowflake) -> ServiceResult<()> {
        let access = AccessService::new(self.ctx);
        let actor = access.actor(Some(caller_id)).await?;
        access.require(&actor, Action::Delete, ResourceKind::Title)?;

        self.ctx.title_repo().delete(title_id).await?;

        info!(%title_id, "Title deleted");
        Ok(())
    }

    async fn load(&self, title_id: Snowflake) -> ServiceResult<Title> {
        self.ctx
            .title_repo()
            .find_by_id(title_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Title", title_id.to_string()))
    }

    /// Resolve a category slug; a named slug must exist
    async fn resolve_category(
        &self,
        slug: Option<&str>,
    ) -> ServiceResult<Option<review_core::entities::Category>> {
        match slug {
            None => Ok(None),
            Some(slug) => {
                let category = self
                    .ctx
                    .category_repo()
                    .find_by_slug(slug)
                    .await?
                    .ok_or_else(|| DomainError::CategoryNotFound(slug.to_string()))?;
                Ok(Some(category))
            }
        }
    }

    /// Resolve genre slugs; every named slug must exist
    async fn resolve_genres(&self, slugs: &[String]) -> ServiceResult<Vec<Genre>> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }
        let genres = self.ctx.genre_repo().find_by_slugs(slugs).await?;
        if genres.len() != slugs.len() {
            let missing = slugs
                .iter()
                .find(|s| !genres.iter().any(|g| g.slug == **s))
                .cloned()
                .unwrap_or_default();
            return Err(DomainError::GenreNotFound(missing).into());
        }
        Ok(genres)
    }

    /// Attach category, genres, and the derived rating to a title
    async fn compose(&self, title: Title) -> ServiceResult<TitleResponse> {
        let category = match title.category_id {
            Some(id) => self.ctx.category_repo().find_by_id(id).await?,
            None => None,
        };
        let genres = self.ctx.genre_repo().find_by_ids(&title.genre_ids).await?;
        let rating = self.ctx.review_repo().average_score(title.id).await?;

        Ok(TitleResponse::from(TitleWithDetails {
            title,
            category,
            genres,
            rating,
        }))
    }
}

/// The release year must not exceed the current year
fn check_year(year: i32) -> ServiceResult<()> {
    let current = Utc::now().year();
    if year > current {
        return Err(DomainError::YearInFuture { year, current }.into());
    }
    Ok(())
}
