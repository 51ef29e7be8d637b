use async_trait::async_trait;
use database::{Page, PageRequest};

use crate::entity::{category, subcategory};
use crate::error::CatalogResult;

/// A category with the subcategories that reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWithSubcategories {
    pub category: category::Model,
    pub subcategories: Vec<subcategory::Model>,
}

/// Category persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// One sorted page of categories
    async fn find_all(&self, page: &PageRequest) -> CatalogResult<Page<category::Model>>;

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<category::Model>>;

    async fn find_with_subcategories(
        &self,
        id: i64,
    ) -> CatalogResult<Option<CategoryWithSubcategories>>;

    /// Whether a category other than `exclude_id` already uses `name`
    async fn exists_by_name(&self, name: &str, exclude_id: Option<i64>) -> CatalogResult<bool>;

    async fn insert(&self, category: category::ActiveModel) -> CatalogResult<category::Model>;

    async fn update(&self, category: category::ActiveModel) -> CatalogResult<category::Model>;

    /// Deleting a missing id is not an error
    async fn delete_by_id(&self, id: i64) -> CatalogResult<()>;
}
