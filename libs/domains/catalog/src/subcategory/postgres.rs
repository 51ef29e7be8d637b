use async_trait::async_trait;
use database::{BaseRepository, Page, PageRequest};
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, LoaderTrait, ModelTrait};

use super::repository::{SubcategoryRepository, SubcategoryWithCategory, SubcategoryWithRelations};
use crate::entity::{category, product, subcategory};
use crate::error::{CatalogResult, EntityKind};
use crate::shared::missing_parent;

pub struct PgSubcategoryRepository {
    base: BaseRepository<subcategory::Entity>,
}

impl PgSubcategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    async fn with_category(
        &self,
        subcategory: subcategory::Model,
    ) -> CatalogResult<SubcategoryWithCategory> {
        let category = subcategory
            .find_related(category::Entity)
            .one(self.base.db())
            .await?
            .ok_or_else(|| missing_parent(EntityKind::Category, subcategory.category_id))?;

        Ok(SubcategoryWithCategory {
            subcategory,
            category,
        })
    }
}

#[async_trait]
impl SubcategoryRepository for PgSubcategoryRepository {
    async fn find_all(&self, page: &PageRequest) -> CatalogResult<Page<SubcategoryWithCategory>> {
        let mut page = self.base.find_page(subcategory::Entity::find(), page).await?;
        let rows = std::mem::take(&mut page.items);

        // One query for all parents on the page
        let categories = rows.load_one(category::Entity, self.base.db()).await?;
        let items = rows
            .into_iter()
            .zip(categories)
            .map(|(subcategory, category)| match category {
                Some(category) => Ok(SubcategoryWithCategory {
                    subcategory,
                    category,
                }),
                None => Err(missing_parent(EntityKind::Category, subcategory.category_id)),
            })
            .collect::<CatalogResult<Vec<_>>>()?;

        Ok(page.replace_items(items))
    }

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<subcategory::Model>> {
        Ok(self.base.find_by_id(id).await?)
    }

    async fn find_with_relations(
        &self,
        id: i64,
    ) -> CatalogResult<Option<SubcategoryWithRelations>> {
        let Some(subcategory) = self.base.find_by_id(id).await? else {
            return Ok(None);
        };

        let products = subcategory
            .find_related(product::Entity)
            .all(self.base.db())
            .await?;
        let SubcategoryWithCategory {
            subcategory,
            category,
        } = self.with_category(subcategory).await?;

        Ok(Some(SubcategoryWithRelations {
            subcategory,
            category,
            products,
        }))
    }

    async fn exists_by_name(&self, name: &str, exclude_id: Option<i64>) -> CatalogResult<bool> {
        let mut condition = Condition::all().add(subcategory::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            condition = condition.add(subcategory::Column::Id.ne(id));
        }
        Ok(self.base.exists(condition).await?)
    }

    async fn insert(
        &self,
        subcategory: subcategory::ActiveModel,
    ) -> CatalogResult<SubcategoryWithCategory> {
        let model = self.base.insert(subcategory).await?;
        tracing::info!(
            subcategory_id = model.id,
            category_id = model.category_id,
            "Created subcategory"
        );
        self.with_category(model).await
    }

    async fn update(
        &self,
        subcategory: subcategory::ActiveModel,
    ) -> CatalogResult<SubcategoryWithCategory> {
        let model = self.base.update(subcategory).await?;
        tracing::info!(subcategory_id = model.id, "Updated subcategory");
        self.with_category(model).await
    }

    async fn delete_by_id(&self, id: i64) -> CatalogResult<()> {
        let rows = self.base.delete_by_id(id).await?;
        if rows > 0 {
            tracing::info!(subcategory_id = id, "Deleted subcategory");
        }
        Ok(())
    }
}
