use axum::{
    Router,
    extract::State,
    routing::{delete, get, post, put},
};
use axum_helpers::{
    ApiResponse, IdPath, PageParams, PageQuery, ValidatedJson,
    errors::responses::{
        BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use super::models::{InventoryRequest, InventoryResponse, InventorySummary};
use super::repository::InventoryRepository;
use super::service::InventoryService;
use crate::error::CatalogResult;
use crate::product::ProductSummary;
use crate::shared::EntityRef;

const TAG: &str = "inventory";

#[derive(OpenApi)]
#[openapi(
    paths(get_all, get_by_id, save, update, delete_by_id),
    components(
        schemas(InventoryRequest, InventoryResponse, InventorySummary, ProductSummary, EntityRef),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags((name = TAG, description = "Stock levels per product"))
)]
pub struct ApiDoc;

pub fn router<R: InventoryRepository + 'static>(service: InventoryService<R>) -> Router {
    Router::new()
        .route("/getAll", get(get_all))
        .route("/get/{id}", get(get_by_id))
        .route("/save", post(save))
        .route("/update/{id}", put(update))
        .route("/delete/{id}", delete(delete_by_id))
        .with_state(Arc::new(service))
}

#[utoipa::path(
    get,
    path = "/getAll",
    tag = TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of stock records", body = ApiResponse<InventoryResponse>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_all<R: InventoryRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    PageParams(page): PageParams,
) -> CatalogResult<ApiResponse<InventoryResponse>> {
    let inventories = service.find_all(&page).await?;
    Ok(ApiResponse::page("Inventories retrieved", inventories))
}

#[utoipa::path(
    get,
    path = "/get/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Inventory id")),
    responses(
        (status = 200, description = "Inventory found", body = ApiResponse<InventoryResponse>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_by_id<R: InventoryRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    IdPath(id): IdPath,
) -> CatalogResult<ApiResponse<InventoryResponse>> {
    let inventory = service.find_by_id(id).await?;
    Ok(ApiResponse::ok("Inventory found", inventory))
}

/// Start tracking stock for a product; one record per product
#[utoipa::path(
    post,
    path = "/save",
    tag = TAG,
    request_body = InventoryRequest,
    responses(
        (status = 201, description = "Inventory created", body = ApiResponse<InventoryResponse>),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn save<R: InventoryRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    ValidatedJson(request): ValidatedJson<InventoryRequest>,
) -> CatalogResult<ApiResponse<InventoryResponse>> {
    let inventory = service.save(request).await?;
    Ok(ApiResponse::created("Inventory created", inventory))
}

#[utoipa::path(
    put,
    path = "/update/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Inventory id")),
    request_body = InventoryRequest,
    responses(
        (status = 200, description = "Inventory updated", body = ApiResponse<InventoryResponse>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update<R: InventoryRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<InventoryRequest>,
) -> CatalogResult<ApiResponse<InventoryResponse>> {
    let inventory = service.update(id, request).await?;
    Ok(ApiResponse::ok("Inventory updated", inventory))
}

#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Inventory id")),
    responses(
        (status = 200, description = "Inventory deleted", body = ApiResponse<InventoryResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_by_id<R: InventoryRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    IdPath(id): IdPath,
) -> CatalogResult<ApiResponse<InventoryResponse>> {
    service.delete_by_id(id).await?;
    Ok(ApiResponse::empty("Inventory deleted"))
}
