use database::{Page, PageRequest};
use std::sync::Arc;
use tracing::instrument;

use super::mapper;
use super::models::{CategoryDetail, CategoryRequest, CategoryResponse};
use super::repository::CategoryRepository;
use crate::entity::category;
use crate::error::{CatalogError, CatalogResult, EntityKind};
use crate::shared::{observe, observe_page};

const KIND: EntityKind = EntityKind::Category;

#[derive(Clone)]
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, page), fields(page = page.page, size = page.size, sort = %page.sort))]
    pub async fn find_all(&self, page: &PageRequest) -> CatalogResult<Page<CategoryResponse>> {
        let result = self.repository.find_all(page).await;
        observe_page(KIND, "find_all", result).map(|rows| rows.map(mapper::to_response))
    }

    #[instrument(skip(self), fields(category_id = id))]
    pub async fn find_by_id(&self, id: i64) -> CatalogResult<CategoryDetail> {
        let result = self
            .repository
            .find_with_subcategories(id)
            .await
            .and_then(|row| row.ok_or(CatalogError::not_found(KIND, id)));
        observe(KIND, "find_by_id", result).map(mapper::to_detail)
    }

    #[instrument(skip(self, request), fields(category_name = %request.name))]
    pub async fn save(&self, request: CategoryRequest) -> CatalogResult<CategoryResponse> {
        let result = self.try_save(request).await;
        observe(KIND, "save", result).map(mapper::to_response)
    }

    async fn try_save(&self, request: CategoryRequest) -> CatalogResult<category::Model> {
        if self.repository.exists_by_name(&request.name, None).await? {
            return Err(CatalogError::already_exists(KIND, "name", request.name));
        }
        self.repository.insert(mapper::to_new_entity(request)).await
    }

    #[instrument(skip(self, request), fields(category_id = id))]
    pub async fn update(
        &self,
        id: i64,
        request: CategoryRequest,
    ) -> CatalogResult<CategoryResponse> {
        let result = self.try_update(id, request).await;
        observe(KIND, "update", result).map(mapper::to_response)
    }

    async fn try_update(
        &self,
        id: i64,
        request: CategoryRequest,
    ) -> CatalogResult<category::Model> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(CatalogError::not_found(KIND, id));
        }
        if self.repository.exists_by_name(&request.name, Some(id)).await? {
            return Err(CatalogError::already_exists(KIND, "name", request.name));
        }
        self.repository.update(mapper::to_entity(id, request)).await
    }

    #[instrument(skip(self), fields(category_id = id))]
    pub async fn delete_by_id(&self, id: i64) -> CatalogResult<()> {
        let result = self.repository.delete_by_id(id).await;
        observe(KIND, "delete", result)
    }
}
