//! Handler tests for the Catalog domain
//!
//! These tests drive the four resource routers over the in-memory catalog:
//! - Request deserialization and validation
//! - Success and error envelopes
//! - HTTP status codes
//! - Paging metadata
//!
//! The repositories are the in-memory ones, so no database is needed.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_catalog::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app(catalog: InMemoryCatalog) -> Router {
    Router::new()
        .nest(
            "/category",
            category::handlers::router(CategoryService::new(catalog.clone())),
        )
        .nest(
            "/subcategory",
            subcategory::handlers::router(SubcategoryService::new(catalog.clone())),
        )
        .nest(
            "/product",
            product::handlers::router(ProductService::new(catalog.clone())),
        )
        .nest(
            "/inventory",
            inventory::handlers::router(InventoryService::new(catalog)),
        )
}

fn seeded_app() -> Router {
    app(InMemoryCatalog::with_seed_data())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Category lifecycle
// ============================================================================

#[tokio::test]
async fn test_category_lifecycle() {
    let app = seeded_app();

    let (status, body) = send(
        &app,
        "POST",
        "/category/save",
        Some(json!({"name": "Vinos", "description": "Tintos y blancos"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "status": "CREATED",
            "message": "Category created",
            "data": [{"id": 5, "name": "Vinos", "description": "Tintos y blancos"}],
            "metadata": null
        })
    );

    let (status, body) = send(&app, "GET", "/category/get/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["subcategories"], json!([]));

    let (status, body) = send(
        &app,
        "PUT",
        "/category/update/5",
        Some(json!({"name": "Vinos y Licores", "description": "Tintos y blancos"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Category updated");
    assert_eq!(body["data"][0]["name"], "Vinos y Licores");

    let (status, body) = send(&app, "DELETE", "/category/delete/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["metadata"], Value::Null);

    let (status, body) = send(&app, "GET", "/category/get/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "NOT_FOUND");
    assert_eq!(body["errors"], json!(["Category with id 5 not found"]));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_duplicate_category_name_conflicts() {
    let app = seeded_app();

    let (status, body) = send(&app, "POST", "/category/save", Some(json!({"name": "Botanas"}))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "CONFLICT");
    assert_eq!(
        body["errors"],
        json!(["Category with name 'Botanas' already exists"])
    );
}

#[tokio::test]
async fn test_renaming_to_own_name_is_allowed() {
    let app = seeded_app();

    let (status, _) = send(
        &app,
        "PUT",
        "/category/update/1",
        Some(json!({"name": "Botanas", "description": "Solo cacahuates"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_missing_category() {
    let app = seeded_app();

    let (status, body) = send(&app, "PUT", "/category/update/77", Some(json!({"name": "Nada"}))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"], json!(["Category with id 77 not found"]));
}

#[tokio::test]
async fn test_category_validation_lists_every_field() {
    let app = seeded_app();
    let long_description = "x".repeat(151);

    let (status, body) = send(
        &app,
        "POST",
        "/category/save",
        Some(json!({"name": "", "description": long_description})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e.as_str().unwrap().starts_with("name: ")));
    assert!(errors.contains(&json!("description: size must be at most 150")));
}

#[tokio::test]
async fn test_delete_missing_id_is_success() {
    let app = seeded_app();

    let (status, body) = send(&app, "DELETE", "/category/delete/999", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Category deleted");
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_non_numeric_id_is_server_error() {
    let app = seeded_app();

    let (status, body) = send(&app, "GET", "/category/get/abc", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "INTERNAL_SERVER_ERROR");
    assert!(body["errors"][0].as_str().unwrap().contains("abc"));
}

// ============================================================================
// Paging
// ============================================================================

#[tokio::test]
async fn test_get_all_sorted_page_with_metadata() {
    let app = seeded_app();

    let (status, body) = send(&app, "GET", "/category/getAll?page=0&size=2&sort=name,asc", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Categories retrieved");
    assert_eq!(names(&body), vec!["Bebidas", "Botanas"]);
    assert_eq!(
        body["metadata"],
        json!({
            "pageNumber": 0,
            "pageSize": 2,
            "numberOfElements": 2,
            "totalPages": 2,
            "totalElements": 4
        })
    );
}

#[tokio::test]
async fn test_get_all_defaults() {
    let app = seeded_app();

    let (status, body) = send(&app, "GET", "/subcategory/getAll", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metadata"]["pageNumber"], 0);
    assert_eq!(body["metadata"]["pageSize"], 5);
    assert_eq!(body["metadata"]["totalElements"], 5);
    assert_eq!(body["data"][0]["name"], "Cacahuates");
    assert_eq!(body["data"][0]["category"], json!({"id": 1, "name": "Botanas"}));
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let app = seeded_app();

    let (status, body) = send(&app, "GET", "/product/getAll?page=10&size=5", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["metadata"]["numberOfElements"], 0);
    assert_eq!(body["metadata"]["totalElements"], 4);
    assert_eq!(body["metadata"]["totalPages"], 1);
}

#[tokio::test]
async fn test_zero_page_size_is_rejected() {
    let app = seeded_app();

    let (status, body) = send(&app, "GET", "/category/getAll?size=0", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], json!(["size: must be greater than 0"]));
}

#[tokio::test]
async fn test_page_size_beyond_limit_range_is_rejected() {
    let app = seeded_app();

    let (status, body) = send(
        &app,
        "GET",
        "/product/getAll?size=18446744073709551615",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], json!(["size: must be at most 9223372036854775807"]));
}

#[tokio::test]
async fn test_unknown_sort_field_is_rejected() {
    let app = seeded_app();

    let (status, _) = send(&app, "GET", "/category/getAll?sort=colour,asc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_inventory_sorted_by_camel_case_field() {
    let app = seeded_app();

    let (status, body) = send(
        &app,
        "GET",
        "/inventory/getAll?sort=quantityAvailable,desc&size=2",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["quantityAvailable"], 120);
    assert_eq!(body["data"][1]["quantityAvailable"], 48);
    assert_eq!(body["data"][0]["product"]["name"], "Ardillas Saladas");
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn test_search_by_name_ignores_case() {
    let app = seeded_app();

    let (status, body) = send(&app, "GET", "/product/getAllByName/NA?sort=name,asc", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Estrella Marina", "Vaca Napolitana"]);
    assert_eq!(body["metadata"]["totalElements"], 2);
}

#[tokio::test]
async fn test_search_by_description_without_match() {
    let app = seeded_app();

    let (status, body) = send(&app, "GET", "/product/getAllByDescription/tequila", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["metadata"]["totalPages"], 0);
}

#[tokio::test]
async fn test_product_update_keeps_subcategory() {
    let app = seeded_app();

    let (status, body) = send(
        &app,
        "PUT",
        "/product/update/3",
        Some(json!({
            "name": "Oso Almendrado",
            "description": "Almendra cubierta de chocolate oscuro",
            "size": "250 g",
            "price": 69.9,
            "barcode": "7501000000035",
            "subcategory": {"id": 1}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["subcategory"], json!({"id": 3, "name": "Chocolates"}));

    let (_, body) = send(&app, "GET", "/product/get/3", None).await;
    let product = &body["data"][0];
    assert_eq!(product["subcategory"]["id"], 3);
    assert_eq!(product["price"], json!(69.9));
    assert_eq!(product["description"], "Almendra cubierta de chocolate oscuro");
}

#[tokio::test]
async fn test_subcategory_update_keeps_category() {
    let app = seeded_app();

    let (status, _) = send(
        &app,
        "PUT",
        "/subcategory/update/1",
        Some(json!({
            "name": "Cacahuates y semillas",
            "category": {"id": 3}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/subcategory/get/1", None).await;
    let subcategory = &body["data"][0];
    assert_eq!(subcategory["name"], "Cacahuates y semillas");
    assert_eq!(subcategory["category"], json!({"id": 1, "name": "Botanas"}));
    assert_eq!(subcategory["description"], Value::Null);
}

#[tokio::test]
async fn test_product_detail_embeds_relations() {
    let app = seeded_app();

    let (status, body) = send(&app, "GET", "/product/get/3", None).await;

    assert_eq!(status, StatusCode::OK);
    let product = &body["data"][0];
    assert_eq!(product["barcode"], "7501000000035");
    assert_eq!(product["price"], json!(64.9));
    assert_eq!(product["subcategory"], json!({"id": 3, "name": "Chocolates"}));
    assert_eq!(product["inventory"]["quantityAvailable"], 48);
}

#[tokio::test]
async fn test_save_product_validates_barcode_and_price() {
    let app = seeded_app();

    let (status, body) = send(
        &app,
        "POST",
        "/product/save",
        Some(json!({
            "name": "Mazapan",
            "size": "28 g",
            "price": -1.0,
            "barcode": "75010",
            "subcategory": {"id": 3}
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!([
            "barcode: must be exactly 13 digits",
            "price: must be greater than or equal to 0.00"
        ])
    );
}

#[tokio::test]
async fn test_save_product_with_duplicate_barcode() {
    let app = seeded_app();

    let (status, body) = send(
        &app,
        "POST",
        "/product/save",
        Some(json!({
            "name": "Mazapan",
            "size": "28 g",
            "price": 8.5,
            "barcode": "7501000000011",
            "subcategory": {"id": 3}
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["errors"],
        json!(["Product with barcode '7501000000011' already exists"])
    );
}

#[tokio::test]
async fn test_save_product_under_missing_subcategory_fails_in_storage() {
    let app = seeded_app();

    let (status, body) = send(
        &app,
        "POST",
        "/product/save",
        Some(json!({
            "name": "Mazapan",
            "size": "28 g",
            "price": 8.5,
            "barcode": "7501000000059",
            "subcategory": {"id": 404}
        })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "INTERNAL_SERVER_ERROR");
}

// ============================================================================
// Inventories
// ============================================================================

#[tokio::test]
async fn test_second_inventory_for_product_conflicts() {
    let app = seeded_app();

    let (status, body) = send(
        &app,
        "POST",
        "/inventory/save",
        Some(json!({
            "quantityAvailable": 1,
            "minimumStock": 1,
            "maximumStock": 10,
            "product": {"id": 2}
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["errors"],
        json!(["Inventory with product id '2' already exists"])
    );
}

#[tokio::test]
async fn test_inventory_for_new_product() {
    let catalog = InMemoryCatalog::with_seed_data();
    let app = app(catalog);

    let (status, body) = send(
        &app,
        "POST",
        "/product/save",
        Some(json!({
            "name": "Mazapan",
            "description": "Cacahuate molido",
            "size": "28 g",
            "price": 8.5,
            "barcode": "7501000000059",
            "subcategory": {"id": 4}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let product_id = body["data"][0]["id"].as_i64().unwrap();
    assert_eq!(product_id, 5);

    let (status, body) = send(
        &app,
        "POST",
        "/inventory/save",
        Some(json!({
            "quantityAvailable": 30,
            "minimumStock": 10,
            "maximumStock": 90,
            "product": {"id": product_id, "name": "Mazapan"}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"][0]["product"]["name"], "Mazapan");
    assert_eq!(body["data"][0]["product"]["price"], json!(8.5));

    let (status, body) = send(&app, "GET", "/product/get/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["inventory"]["maximumStock"], 90);
}

#[tokio::test]
async fn test_negative_stock_is_rejected() {
    let app = seeded_app();

    let (status, body) = send(
        &app,
        "PUT",
        "/inventory/update/1",
        Some(json!({
            "quantityAvailable": -3,
            "minimumStock": 1,
            "maximumStock": 10,
            "product": {"id": 1}
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!(["quantityAvailable: must be greater than or equal to 0"])
    );
}
