use database::{Page, PageRequest};
use std::sync::Arc;
use tracing::instrument;

use super::mapper;
use super::models::{InventoryRequest, InventoryResponse};
use super::repository::{InventoryRepository, InventoryWithProduct};
use crate::error::{CatalogError, CatalogResult, EntityKind};
use crate::shared::{observe, observe_page};

const KIND: EntityKind = EntityKind::Inventory;

#[derive(Clone)]
pub struct InventoryService<R: InventoryRepository> {
    repository: Arc<R>,
}

impl<R: InventoryRepository> InventoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, page), fields(page = page.page, size = page.size, sort = %page.sort))]
    pub async fn find_all(&self, page: &PageRequest) -> CatalogResult<Page<InventoryResponse>> {
        let result = self.repository.find_all(page).await;
        observe_page(KIND, "find_all", result).map(|rows| rows.map(mapper::to_response))
    }

    #[instrument(skip(self), fields(inventory_id = id))]
    pub async fn find_by_id(&self, id: i64) -> CatalogResult<InventoryResponse> {
        let result = self
            .repository
            .find_with_product(id)
            .await
            .and_then(|row| row.ok_or(CatalogError::not_found(KIND, id)));
        observe(KIND, "find_by_id", result).map(mapper::to_response)
    }

    #[instrument(skip(self, request), fields(product_id = request.product.id))]
    pub async fn save(&self, request: InventoryRequest) -> CatalogResult<InventoryResponse> {
        let result = self.try_save(request).await;
        observe(KIND, "save", result).map(mapper::to_response)
    }

    async fn try_save(&self, request: InventoryRequest) -> CatalogResult<InventoryWithProduct> {
        let product_id = request.product.id;
        if self.repository.exists_by_product_id(product_id, None).await? {
            return Err(CatalogError::already_exists(KIND, "product id", product_id));
        }
        self.repository.insert(mapper::to_new_entity(request)).await
    }

    #[instrument(skip(self, request), fields(inventory_id = id, product_id = request.product.id))]
    pub async fn update(
        &self,
        id: i64,
        request: InventoryRequest,
    ) -> CatalogResult<InventoryResponse> {
        let result = self.try_update(id, request).await;
        observe(KIND, "update", result).map(mapper::to_response)
    }

    async fn try_update(
        &self,
        id: i64,
        request: InventoryRequest,
    ) -> CatalogResult<InventoryWithProduct> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(CatalogError::not_found(KIND, id));
        }
        let product_id = request.product.id;
        if self
            .repository
            .exists_by_product_id(product_id, Some(id))
            .await?
        {
            return Err(CatalogError::already_exists(KIND, "product id", product_id));
        }
        self.repository.update(mapper::to_entity(id, request)).await
    }

    #[instrument(skip(self), fields(inventory_id = id))]
    pub async fn delete_by_id(&self, id: i64) -> CatalogResult<()> {
        let result = self.repository.delete_by_id(id).await;
        observe(KIND, "delete", result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{inventory, product};
    use crate::inventory::repository::MockInventoryRepository;
    use crate::shared::EntityRef;
    use rust_decimal::Decimal;
    use sea_orm::ActiveValue::{Set, Unchanged};

    fn row(id: i64, product_id: i64) -> InventoryWithProduct {
        InventoryWithProduct {
            inventory: inventory::Model {
                id,
                quantity_available: 48,
                minimum_stock: 12,
                maximum_stock: 100,
                product_id,
            },
            product: product::Model {
                id: product_id,
                name: "Oso Almendrado".into(),
                description: None,
                size: "250 g".into(),
                price: Decimal::new(6490, 2),
                barcode: "7501000000035".into(),
                subcategory_id: 3,
            },
        }
    }

    fn request(product_id: i64) -> InventoryRequest {
        InventoryRequest {
            quantity_available: 48,
            minimum_stock: 12,
            maximum_stock: 100,
            product: EntityRef::new(product_id),
        }
    }

    #[tokio::test]
    async fn test_save_second_record_for_product_conflicts() {
        let mut repo = MockInventoryRepository::new();
        repo.expect_exists_by_product_id()
            .withf(|product_id, exclude| *product_id == 3 && exclude.is_none())
            .returning(|_, _| Ok(true));
        repo.expect_insert().never();

        let service = InventoryService::new(repo);
        let err = service.save(request(3)).await.unwrap_err();
        assert_eq!(err.to_string(), "Inventory with product id '3' already exists");
    }

    #[tokio::test]
    async fn test_save_links_requested_product() {
        let mut repo = MockInventoryRepository::new();
        repo.expect_exists_by_product_id().returning(|_, _| Ok(false));
        repo.expect_insert()
            .withf(|active| active.product_id == Set(3))
            .returning(|_| Ok(row(5, 3)));

        let service = InventoryService::new(repo);
        let saved = service.save(request(3)).await.unwrap();
        assert_eq!(saved.id, 5);
        assert_eq!(saved.product.name, "Oso Almendrado");
    }

    #[tokio::test]
    async fn test_update_moves_record_to_new_product() {
        let mut repo = MockInventoryRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(row(id, 3).inventory)));
        repo.expect_exists_by_product_id()
            .withf(|product_id, exclude| *product_id == 4 && *exclude == Some(3))
            .returning(|_, _| Ok(false));
        repo.expect_update()
            .withf(|active| active.id == Unchanged(3) && active.product_id == Set(4))
            .returning(|_| Ok(row(3, 4)));

        let service = InventoryService::new(repo);
        let updated = service.update(3, request(4)).await.unwrap();
        assert_eq!(updated.product.id, 4);
    }

    #[tokio::test]
    async fn test_update_missing_record() {
        let mut repo = MockInventoryRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_exists_by_product_id().never();
        repo.expect_update().never();

        let service = InventoryService::new(repo);
        let err = service.update(42, request(1)).await.unwrap_err();
        assert_eq!(err.to_string(), "Inventory with id 42 not found");
    }

    #[tokio::test]
    async fn test_find_all_maps_rows() {
        let mut repo = MockInventoryRepository::new();
        repo.expect_find_all()
            .returning(|page| Ok(Page::new(vec![row(1, 1), row(2, 2)], page, 4)));

        let service = InventoryService::new(repo);
        let page = service
            .find_all(&PageRequest::new(0, 2).unwrap())
            .await
            .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_elements, 4);
        assert_eq!(page.total_pages(), 2);
    }

    #[tokio::test]
    async fn test_delete_missing_is_success() {
        let mut repo = MockInventoryRepository::new();
        repo.expect_delete_by_id().returning(|_| Ok(()));

        let service = InventoryService::new(repo);
        assert!(service.delete_by_id(999).await.is_ok());
    }
}
