use async_trait::async_trait;
use database::{Page, PageRequest};

use crate::entity::{inventory, product};
use crate::error::CatalogResult;

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryWithProduct {
    pub inventory: inventory::Model,
    pub product: product::Model,
}

/// Stock record persistence. A product has at most one record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn find_all(&self, page: &PageRequest) -> CatalogResult<Page<InventoryWithProduct>>;

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<inventory::Model>>;

    async fn find_with_product(&self, id: i64) -> CatalogResult<Option<InventoryWithProduct>>;

    /// Whether a record other than `exclude_id` already tracks `product_id`
    async fn exists_by_product_id(
        &self,
        product_id: i64,
        exclude_id: Option<i64>,
    ) -> CatalogResult<bool>;

    async fn insert(
        &self,
        inventory: inventory::ActiveModel,
    ) -> CatalogResult<InventoryWithProduct>;

    async fn update(
        &self,
        inventory: inventory::ActiveModel,
    ) -> CatalogResult<InventoryWithProduct>;

    async fn delete_by_id(&self, id: i64) -> CatalogResult<()>;
}
