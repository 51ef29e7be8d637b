//! Integration tests for the Catalog domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - Migrations create the schema and seed rows
//! - Paged, sorted queries and substring search behave as expected
//! - Unique keys and foreign keys are enforced by the database
//!
//! They need a Docker daemon: `cargo test -p domain_catalog -- --ignored`

use database::{PageRequest, Sort};
use domain_catalog::*;
use rust_decimal::Decimal;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn new_category(name: &str) -> entity::category::ActiveModel {
    entity::category::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(None),
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires docker"]
async fn test_seed_rows_are_paged() {
    let db = TestDatabase::new().await;
    let repo = PgCategoryRepository::new(db.connection());

    let request = PageRequest::new(0, 3).unwrap().with_sort(Sort::asc("name"));
    let page = repo.find_all(&request).await.unwrap();

    let names: Vec<_> = page.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Bebidas", "Botanas", "Dulces"]);
    assert_eq!(page.total_elements, 4);
    assert_eq!(page.total_pages(), 2);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_insert_continues_after_seed_ids() {
    let db = TestDatabase::new().await;
    let repo = PgCategoryRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("insert_after_seed");

    let created = repo
        .insert(new_category(&builder.name("category", "main")))
        .await
        .unwrap();
    assert_eq!(created.id, 5);

    let fetched = repo.find_with_subcategories(created.id).await.unwrap();
    let fetched = assert_some(fetched, "category should exist");
    assert!(fetched.subcategories.is_empty());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_duplicate_name_is_rejected_by_database() {
    let db = TestDatabase::new().await;
    let repo = PgCategoryRepository::new(db.connection());

    let result = repo.insert(new_category("Botanas")).await;
    assert!(matches!(result, Err(CatalogError::Database(_))));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_exists_by_name_excludes_self() {
    let db = TestDatabase::new().await;
    let repo = PgCategoryRepository::new(db.connection());

    assert!(repo.exists_by_name("Botanas", None).await.unwrap());
    assert!(!repo.exists_by_name("Botanas", Some(1)).await.unwrap());
    assert!(repo.exists_by_name("Botanas", Some(2)).await.unwrap());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_delete_referenced_category_fails() {
    let db = TestDatabase::new().await;
    let repo = PgCategoryRepository::new(db.connection());

    let result = repo.delete_by_id(2).await;
    assert!(matches!(result, Err(CatalogError::Database(_))));
    assert!(repo.find_by_id(2).await.unwrap().is_some());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_delete_missing_row_is_ok() {
    let db = TestDatabase::new().await;
    let repo = PgInventoryRepository::new(db.connection());

    repo.delete_by_id(999).await.unwrap();
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_subcategory_page_loads_categories() {
    let db = TestDatabase::new().await;
    let repo = PgSubcategoryRepository::new(db.connection());

    let request = PageRequest::default().with_sort(Sort::desc("name"));
    let page = repo.find_all(&request).await.unwrap();

    assert_eq!(page.items[0].subcategory.name, "Refrescos");
    assert_eq!(page.items[0].category.name, "Bebidas");
    assert_eq!(page.total_elements, 5);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_product_search_is_case_insensitive_substring() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let request = PageRequest::default().with_sort(Sort::asc("name"));

    let page = repo.find_all_by_name("NA", &request).await.unwrap();
    let names: Vec<_> = page.items.iter().map(|p| p.product.name.as_str()).collect();
    assert_eq!(names, vec!["Estrella Marina", "Vaca Napolitana"]);

    let page = repo.find_all_by_description("chocolate", &request).await.unwrap();
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.items[0].subcategory.name, "Chocolates");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_product_search_treats_wildcards_literally() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let page = repo
        .find_all_by_name("%", &PageRequest::default())
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_elements, 0);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_products_sorted_by_price() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let request = PageRequest::new(0, 2).unwrap().with_sort(Sort::desc("price"));
    let page = repo.find_all(&request).await.unwrap();

    assert_eq!(page.items[0].product.price, Decimal::new(9500, 2));
    assert_eq!(page.items[1].product.name, "Oso Almendrado");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_product_relations_include_inventory() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let found = repo.find_with_relations(4).await.unwrap();
    let found = assert_some(found, "product should exist");

    assert_eq!(found.subcategory.name, "Dulces de leche");
    let stock = assert_some(found.inventory, "product should be stocked");
    assert_eq!(stock.quantity_available, 0);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_product_roundtrip_keeps_price_scale() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("price_scale");

    let created = repo
        .insert(entity::product::ActiveModel {
            id: NotSet,
            name: Set(builder.name("product", "main")),
            description: Set(None),
            size: Set("1 pz".into()),
            price: Set(Decimal::new(999_999_99, 2)),
            barcode: Set(builder.barcode(1)),
            subcategory_id: Set(1),
        })
        .await
        .unwrap();

    let fetched = repo.find_by_id(created.product.id).await.unwrap().unwrap();
    assert_eq!(fetched.price, Decimal::new(999_999_99, 2));
    assert_eq!(created.subcategory.name, "Cacahuates");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_inventory_update_moves_to_other_product() {
    let db = TestDatabase::new().await;
    let products = PgProductRepository::new(db.connection());
    let inventories = PgInventoryRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("move_inventory");

    let created = products
        .insert(entity::product::ActiveModel {
            id: NotSet,
            name: Set(builder.name("product", "spare")),
            description: Set(None),
            size: Set("1 pz".into()),
            price: Set(Decimal::new(100, 2)),
            barcode: Set(builder.barcode(2)),
            subcategory_id: Set(2),
        })
        .await
        .unwrap();

    let moved = inventories
        .update(entity::inventory::ActiveModel {
            id: Unchanged(1),
            quantity_available: Set(7),
            minimum_stock: Set(1),
            maximum_stock: Set(20),
            product_id: Set(created.product.id),
        })
        .await
        .unwrap();

    assert_eq!(moved.product.id, created.product.id);
    let still_tracked = inventories.exists_by_product_id(1, None).await.unwrap();
    assert!(!still_tracked);
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires docker"]
async fn test_service_reports_duplicate_before_storage() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    let result = service
        .save(product::ProductRequest {
            name: "Otra Ardilla".into(),
            description: None,
            size: "90 g".into(),
            price: Decimal::new(1850, 2),
            barcode: "7501000000011".into(),
            subcategory: EntityRef::new(1),
        })
        .await;

    assert!(matches!(
        result,
        Err(CatalogError::AlreadyExists {
            kind: EntityKind::Product,
            ..
        })
    ));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_empty_catalog_has_no_pages() {
    let db = TestDatabase::empty().await;
    let service = CategoryService::new(PgCategoryRepository::new(db.connection()));

    let page = service.find_all(&PageRequest::default()).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages(), 0);
}
