use database::{Page, PageRequest};
use std::sync::Arc;
use tracing::instrument;

use super::mapper;
use super::models::{SubcategoryDetail, SubcategoryRequest, SubcategoryResponse};
use super::repository::{SubcategoryRepository, SubcategoryWithCategory};
use crate::error::{CatalogError, CatalogResult, EntityKind};
use crate::shared::{observe, observe_page};

const KIND: EntityKind = EntityKind::Subcategory;

#[derive(Clone)]
pub struct SubcategoryService<R: SubcategoryRepository> {
    repository: Arc<R>,
}

impl<R: SubcategoryRepository> SubcategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, page), fields(page = page.page, size = page.size, sort = %page.sort))]
    pub async fn find_all(&self, page: &PageRequest) -> CatalogResult<Page<SubcategoryResponse>> {
        let result = self.repository.find_all(page).await;
        observe_page(KIND, "find_all", result).map(|rows| rows.map(mapper::to_response))
    }

    #[instrument(skip(self), fields(subcategory_id = id))]
    pub async fn find_by_id(&self, id: i64) -> CatalogResult<SubcategoryDetail> {
        let result = self
            .repository
            .find_with_relations(id)
            .await
            .and_then(|row| row.ok_or(CatalogError::not_found(KIND, id)));
        observe(KIND, "find_by_id", result).map(mapper::to_detail)
    }

    #[instrument(
        skip(self, request),
        fields(subcategory_name = %request.name, category_id = request.category.id)
    )]
    pub async fn save(&self, request: SubcategoryRequest) -> CatalogResult<SubcategoryResponse> {
        let result = self.try_save(request).await;
        observe(KIND, "save", result).map(mapper::to_response)
    }

    async fn try_save(
        &self,
        request: SubcategoryRequest,
    ) -> CatalogResult<SubcategoryWithCategory> {
        if self.repository.exists_by_name(&request.name, None).await? {
            return Err(CatalogError::already_exists(KIND, "name", request.name));
        }
        self.repository.insert(mapper::to_new_entity(request)).await
    }

    #[instrument(skip(self, request), fields(subcategory_id = id))]
    pub async fn update(
        &self,
        id: i64,
        request: SubcategoryRequest,
    ) -> CatalogResult<SubcategoryResponse> {
        let result = self.try_update(id, request).await;
        observe(KIND, "update", result).map(mapper::to_response)
    }

    async fn try_update(
        &self,
        id: i64,
        request: SubcategoryRequest,
    ) -> CatalogResult<SubcategoryWithCategory> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(CatalogError::not_found(KIND, id));
        }
        if self.repository.exists_by_name(&request.name, Some(id)).await? {
            return Err(CatalogError::already_exists(KIND, "name", request.name));
        }
        self.repository.update(mapper::to_entity(id, request)).await
    }

    #[instrument(skip(self), fields(subcategory_id = id))]
    pub async fn delete_by_id(&self, id: i64) -> CatalogResult<()> {
        let result = self.repository.delete_by_id(id).await;
        observe(KIND, "delete", result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{category, product, subcategory};
    use crate::shared::EntityRef;
    use crate::subcategory::repository::{MockSubcategoryRepository, SubcategoryWithRelations};
    use rust_decimal::Decimal;
    use sea_orm::ActiveValue::Set;

    fn dulces() -> category::Model {
        category::Model {
            id: 2,
            name: "Dulces".into(),
            description: None,
        }
    }

    fn gomitas(id: i64) -> subcategory::Model {
        subcategory::Model {
            id,
            name: "Gomitas".into(),
            description: None,
            category_id: 2,
        }
    }

    fn request(name: &str, category_id: i64) -> SubcategoryRequest {
        SubcategoryRequest {
            name: name.to_string(),
            description: None,
            category: EntityRef::new(category_id),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_nests_category_and_products() {
        let mut repo = MockSubcategoryRepository::new();
        repo.expect_find_with_relations().returning(|id| {
            Ok(Some(SubcategoryWithRelations {
                subcategory: gomitas(id),
                category: dulces(),
                products: vec![product::Model {
                    id: 2,
                    name: "Estrella Marina".into(),
                    description: None,
                    size: "1 kg".into(),
                    price: Decimal::new(9500, 2),
                    barcode: "7501000000028".into(),
                    subcategory_id: id,
                }],
            }))
        });

        let service = SubcategoryService::new(repo);
        let detail = service.find_by_id(2).await.unwrap();

        assert_eq!(detail.category.name, "Dulces");
        assert_eq!(detail.products[0].name, "Estrella Marina");
        assert_eq!(detail.products[0].price, Decimal::new(9500, 2));
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let mut repo = MockSubcategoryRepository::new();
        repo.expect_find_with_relations().returning(|_| Ok(None));

        let service = SubcategoryService::new(repo);
        let err = service.find_by_id(8).await.unwrap_err();
        assert_eq!(err.to_string(), "Subcategory with id 8 not found");
    }

    #[tokio::test]
    async fn test_save_links_the_requested_category() {
        let mut repo = MockSubcategoryRepository::new();
        repo.expect_exists_by_name().returning(|_, _| Ok(false));
        repo.expect_insert()
            .withf(|active| active.category_id == Set(2))
            .returning(|_| {
                Ok(SubcategoryWithCategory {
                    subcategory: gomitas(6),
                    category: dulces(),
                })
            });

        let service = SubcategoryService::new(repo);
        let saved = service.save(request("Gomitas", 2)).await.unwrap();

        assert_eq!(saved.id, 6);
        assert_eq!(saved.category.id, 2);
        assert_eq!(saved.category.name, "Dulces");
    }

    #[tokio::test]
    async fn test_save_duplicate_name() {
        let mut repo = MockSubcategoryRepository::new();
        repo.expect_exists_by_name().returning(|_, _| Ok(true));
        repo.expect_insert().never();

        let service = SubcategoryService::new(repo);
        let err = service.save(request("Gomitas", 2)).await.unwrap_err();
        assert_eq!(err.to_string(), "Subcategory with name 'Gomitas' already exists");
    }

    #[tokio::test]
    async fn test_update_missing_leaves_storage_alone() {
        let mut repo = MockSubcategoryRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_exists_by_name().never();
        repo.expect_update().never();

        let service = SubcategoryService::new(repo);
        let err = service.update(12, request("Gomitas", 2)).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { kind: EntityKind::Subcategory, id: 12 }));
    }
}
