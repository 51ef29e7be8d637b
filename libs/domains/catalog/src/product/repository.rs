use async_trait::async_trait;
use database::{Page, PageRequest};

use crate::entity::{inventory, product, subcategory};
use crate::error::CatalogResult;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductWithSubcategory {
    pub product: product::Model,
    pub subcategory: subcategory::Model,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductWithRelations {
    pub product: product::Model,
    pub subcategory: subcategory::Model,
    pub inventory: Option<inventory::Model>,
}

/// Product persistence. Writes return the row together with its subcategory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self, page: &PageRequest) -> CatalogResult<Page<ProductWithSubcategory>>;

    /// Products whose name contains `word`, ignoring case
    async fn find_all_by_name(
        &self,
        word: &str,
        page: &PageRequest,
    ) -> CatalogResult<Page<ProductWithSubcategory>>;

    /// Products whose description contains `word`, ignoring case
    async fn find_all_by_description(
        &self,
        word: &str,
        page: &PageRequest,
    ) -> CatalogResult<Page<ProductWithSubcategory>>;

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<product::Model>>;

    async fn find_with_relations(&self, id: i64) -> CatalogResult<Option<ProductWithRelations>>;

    /// Whether a product other than `exclude_id` already uses `barcode`
    async fn exists_by_barcode(
        &self,
        barcode: &str,
        exclude_id: Option<i64>,
    ) -> CatalogResult<bool>;

    async fn insert(&self, product: product::ActiveModel) -> CatalogResult<ProductWithSubcategory>;

    async fn update(&self, product: product::ActiveModel) -> CatalogResult<ProductWithSubcategory>;

    async fn delete_by_id(&self, id: i64) -> CatalogResult<()>;
}
