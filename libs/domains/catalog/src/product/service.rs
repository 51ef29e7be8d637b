use database::{Page, PageRequest};
use std::sync::Arc;
use tracing::instrument;

use super::mapper;
use super::models::{ProductDetail, ProductRequest, ProductResponse};
use super::repository::{ProductRepository, ProductWithSubcategory};
use crate::error::{CatalogError, CatalogResult, EntityKind};
use crate::shared::{observe, observe_page};

const KIND: EntityKind = EntityKind::Product;

#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, page), fields(page = page.page, size = page.size, sort = %page.sort))]
    pub async fn find_all(&self, page: &PageRequest) -> CatalogResult<Page<ProductResponse>> {
        let result = self.repository.find_all(page).await;
        observe_page(KIND, "find_all", result).map(|rows| rows.map(mapper::to_response))
    }

    /// Case-insensitive substring match on the name
    #[instrument(skip(self, page))]
    pub async fn find_all_by_name(
        &self,
        word: &str,
        page: &PageRequest,
    ) -> CatalogResult<Page<ProductResponse>> {
        let result = self.repository.find_all_by_name(word, page).await;
        observe_page(KIND, "find_all_by_name", result)
            .map(|rows| rows.map(mapper::to_response))
    }

    /// Case-insensitive substring match on the description
    #[instrument(skip(self, page))]
    pub async fn find_all_by_description(
        &self,
        word: &str,
        page: &PageRequest,
    ) -> CatalogResult<Page<ProductResponse>> {
        let result = self.repository.find_all_by_description(word, page).await;
        observe_page(KIND, "find_all_by_description", result)
            .map(|rows| rows.map(mapper::to_response))
    }

    #[instrument(skip(self), fields(product_id = id))]
    pub async fn find_by_id(&self, id: i64) -> CatalogResult<ProductDetail> {
        let result = self
            .repository
            .find_with_relations(id)
            .await
            .and_then(|row| row.ok_or(CatalogError::not_found(KIND, id)));
        observe(KIND, "find_by_id", result).map(mapper::to_detail)
    }

    #[instrument(skip(self, request), fields(barcode = %request.barcode))]
    pub async fn save(&self, request: ProductRequest) -> CatalogResult<ProductResponse> {
        let result = self.try_save(request).await;
        observe(KIND, "save", result).map(mapper::to_response)
    }

    async fn try_save(&self, request: ProductRequest) -> CatalogResult<ProductWithSubcategory> {
        if self.repository.exists_by_barcode(&request.barcode, None).await? {
            return Err(CatalogError::already_exists(KIND, "barcode", request.barcode));
        }
        self.repository.insert(mapper::to_new_entity(request)).await
    }

    #[instrument(skip(self, request), fields(product_id = id))]
    pub async fn update(
        &self,
        id: i64,
        request: ProductRequest,
    ) -> CatalogResult<ProductResponse> {
        let result = self.try_update(id, request).await;
        observe(KIND, "update", result).map(mapper::to_response)
    }

    async fn try_update(
        &self,
        id: i64,
        request: ProductRequest,
    ) -> CatalogResult<ProductWithSubcategory> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(CatalogError::not_found(KIND, id));
        }
        if self
            .repository
            .exists_by_barcode(&request.barcode, Some(id))
            .await?
        {
            return Err(CatalogError::already_exists(KIND, "barcode", request.barcode));
        }
        self.repository.update(mapper::to_entity(id, request)).await
    }

    #[instrument(skip(self), fields(product_id = id))]
    pub async fn delete_by_id(&self, id: i64) -> CatalogResult<()> {
        let result = self.repository.delete_by_id(id).await;
        observe(KIND, "delete", result)
    }
}
