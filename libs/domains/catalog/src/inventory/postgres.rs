use async_trait::async_trait;
use database::{BaseRepository, Page, PageRequest};
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, LoaderTrait, ModelTrait};

use super::repository::{InventoryRepository, InventoryWithProduct};
use crate::entity::{inventory, product};
use crate::error::{CatalogResult, EntityKind};
use crate::shared::missing_parent;

pub struct PgInventoryRepository {
    base: BaseRepository<inventory::Entity>,
}

impl PgInventoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    async fn with_product(&self, inventory: inventory::Model) -> CatalogResult<InventoryWithProduct> {
        let product = inventory
            .find_related(product::Entity)
            .one(self.base.db())
            .await?
            .ok_or_else(|| missing_parent(EntityKind::Product, inventory.product_id))?;

        Ok(InventoryWithProduct { inventory, product })
    }
}

#[async_trait]
impl InventoryRepository for PgInventoryRepository {
    async fn find_all(&self, page: &PageRequest) -> CatalogResult<Page<InventoryWithProduct>> {
        let mut page = self.base.find_page(inventory::Entity::find(), page).await?;
        let rows = std::mem::take(&mut page.items);

        let products = rows.load_one(product::Entity, self.base.db()).await?;
        let items = rows
            .into_iter()
            .zip(products)
            .map(|(inventory, product)| match product {
                Some(product) => Ok(InventoryWithProduct { inventory, product }),
                None => Err(missing_parent(EntityKind::Product, inventory.product_id)),
            })
            .collect::<CatalogResult<Vec<_>>>()?;

        Ok(page.replace_items(items))
    }

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<inventory::Model>> {
        Ok(self.base.find_by_id(id).await?)
    }

    async fn find_with_product(&self, id: i64) -> CatalogResult<Option<InventoryWithProduct>> {
        match self.base.find_by_id(id).await? {
            Some(inventory) => self.with_product(inventory).await.map(Some),
            None => Ok(None),
        }
    }

    async fn exists_by_product_id(
        &self,
        product_id: i64,
        exclude_id: Option<i64>,
    ) -> CatalogResult<bool> {
        let mut condition = Condition::all().add(inventory::Column::ProductId.eq(product_id));
        if let Some(id) = exclude_id {
            condition = condition.add(inventory::Column::Id.ne(id));
        }
        Ok(self.base.exists(condition).await?)
    }

    async fn insert(
        &self,
        inventory: inventory::ActiveModel,
    ) -> CatalogResult<InventoryWithProduct> {
        let model = self.base.insert(inventory).await?;
        tracing::info!(
            inventory_id = model.id,
            product_id = model.product_id,
            "Created inventory"
        );
        self.with_product(model).await
    }

    async fn update(
        &self,
        inventory: inventory::ActiveModel,
    ) -> CatalogResult<InventoryWithProduct> {
        let model = self.base.update(inventory).await?;
        tracing::info!(inventory_id = model.id, "Updated inventory");
        self.with_product(model).await
    }

    async fn delete_by_id(&self, id: i64) -> CatalogResult<()> {
        let rows = self.base.delete_by_id(id).await?;
        if rows > 0 {
            tracing::info!(inventory_id = id, "Deleted inventory");
        }
        Ok(())
    }
}
