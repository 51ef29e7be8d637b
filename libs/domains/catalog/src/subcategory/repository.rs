use async_trait::async_trait;
use database::{Page, PageRequest};

use crate::entity::{category, product, subcategory};
use crate::error::CatalogResult;

#[derive(Debug, Clone, PartialEq)]
pub struct SubcategoryWithCategory {
    pub subcategory: subcategory::Model,
    pub category: category::Model,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubcategoryWithRelations {
    pub subcategory: subcategory::Model,
    pub category: category::Model,
    pub products: Vec<product::Model>,
}

/// Subcategory persistence. Writes return the row together with its category.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubcategoryRepository: Send + Sync {
    async fn find_all(&self, page: &PageRequest) -> CatalogResult<Page<SubcategoryWithCategory>>;

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<subcategory::Model>>;

    async fn find_with_relations(
        &self,
        id: i64,
    ) -> CatalogResult<Option<SubcategoryWithRelations>>;

    /// Whether a subcategory other than `exclude_id` already uses `name`
    async fn exists_by_name(&self, name: &str, exclude_id: Option<i64>) -> CatalogResult<bool>;

    async fn insert(
        &self,
        subcategory: subcategory::ActiveModel,
    ) -> CatalogResult<SubcategoryWithCategory>;

    async fn update(
        &self,
        subcategory: subcategory::ActiveModel,
    ) -> CatalogResult<SubcategoryWithCategory>;

    async fn delete_by_id(&self, id: i64) -> CatalogResult<()>;
}
