use async_trait::async_trait;
use database::{BaseRepository, Page, PageRequest};
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, ModelTrait};

use super::repository::{CategoryRepository, CategoryWithSubcategories};
use crate::entity::{category, subcategory};
use crate::error::CatalogResult;

pub struct PgCategoryRepository {
    base: BaseRepository<category::Entity>,
}

impl PgCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn find_all(&self, page: &PageRequest) -> CatalogResult<Page<category::Model>> {
        Ok(self.base.find_page(category::Entity::find(), page).await?)
    }

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<category::Model>> {
        Ok(self.base.find_by_id(id).await?)
    }

    async fn find_with_subcategories(
        &self,
        id: i64,
    ) -> CatalogResult<Option<CategoryWithSubcategories>> {
        let Some(category) = self.base.find_by_id(id).await? else {
            return Ok(None);
        };

        let subcategories = category
            .find_related(subcategory::Entity)
            .all(self.base.db())
            .await?;

        Ok(Some(CategoryWithSubcategories {
            category,
            subcategories,
        }))
    }

    async fn exists_by_name(&self, name: &str, exclude_id: Option<i64>) -> CatalogResult<bool> {
        let mut condition = Condition::all().add(category::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            condition = condition.add(category::Column::Id.ne(id));
        }
        Ok(self.base.exists(condition).await?)
    }

    async fn insert(&self, category: category::ActiveModel) -> CatalogResult<category::Model> {
        let model = self.base.insert(category).await?;
        tracing::info!(category_id = model.id, "Created category");
        Ok(model)
    }

    async fn update(&self, category: category::ActiveModel) -> CatalogResult<category::Model> {
        let model = self.base.update(category).await?;
        tracing::info!(category_id = model.id, "Updated category");
        Ok(model)
    }

    async fn delete_by_id(&self, id: i64) -> CatalogResult<()> {
        let rows = self.base.delete_by_id(id).await?;
        if rows > 0 {
            tracing::info!(category_id = id, "Deleted category");
        }
        Ok(())
    }
}
