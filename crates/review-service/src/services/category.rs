//! Category service
//!
//! Catalogue listing is public; mutation is admin-only per the policy.

use review_core::entities::Category;
use review_core::policy::{Action, ResourceKind};
use review_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CategoryResponse, CreateCategoryRequest, PaginatedResponse};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    /// Create a new CategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List categories; readable by anyone
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        search: Option<&str>,
        limit: i64,
        after: Option<Snowflake>,
    ) -> ServiceResult<PaginatedResponse<CategoryResponse>> {
        let categories = self
            .ctx
            .category_repo()
            .list(search, limit + 1, after)
            .await?;

        let has_more = categories.len() as i64 > limit;
        let page: Vec<&Category> = categories.iter().take(limit as usize).collect();
        let after = page.last().map(|c| c.id.to_string());
        let data = page.into_iter().map(CategoryResponse::from).collect();

        Ok(PaginatedResponse::new(data, after, has_more, limit as i32))
    }

    /// Create a category (admin only)
    #[instrument(skip(self, request), fields(slug = %request.slug))]
    pub async fn create(
        &self,
        caller_id: Snowflake,
        request: CreateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        let access = AccessService::new(self.ctx);
        let actor = access.actor(Some(caller_id)).await?;
        access.require(&actor, Action::Create, ResourceKind::Category)?;

        let category = Category::new(self.ctx.generate_id(), request.name, request.slug);
        self.ctx.category_repo().create(&category).await?;

        info!(slug = %category.slug, "Category created");

        Ok(CategoryResponse::from(&category))
    }

    /// Delete a category by slug (admin only).
    ///
    /// Dependent titles keep existing with a null category.
    #[instrument(skip(self))]
    pub async fn delete(&self, caller_id: Snowflake, slug: &str) -> ServiceResult<()> {
        let access = AccessService::new(self.ctx);
        let actor = access.actor(Some(caller_id)).await?;
        access.require(&actor, Action::Delete, ResourceKind::Category)?;

        self.ctx.category_repo().delete_by_slug(slug).await?;

        info!(slug, "Category deleted");
        Ok(())
    }
}
