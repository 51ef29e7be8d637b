use axum::{
    Router,
    extract::{Path, State},
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

use super::models::{ProductDetail, ProductRequest, ProductResponse, ProductSummary};
use super::repository::ProductRepository;
use super::service::ProductService;
use crate::error::CatalogResult;
use crate::inventory::InventorySummary;
use crate::shared::EntityRef;
use crate::subcategory::SubcategorySummary;

const TAG: &str = "product";

#[derive(OpenApi)]
#[openapi(
    paths(
        get_all,
        get_all_by_name,
        get_all_by_description,
        get_by_id,
        save,
        update,
        delete_by_id
    ),
    components(
        schemas(
            ProductRequest,
            ProductResponse,
            ProductDetail,
            ProductSummary,
            SubcategorySummary,
            InventorySummary,
            EntityRef
        ),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags((name = TAG, description = "Products and product search"))
)]
pub struct ApiDoc;

pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new()
        .route("/getAll", get(get_all))
        .route("/getAllByName/{word}", get(get_all_by_name))
        .route("/getAllByDescription/{word}", get(get_all_by_description))
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
        (status = 200, description = "Page of products", body = ApiResponse<ProductResponse>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_all<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PageParams(page): PageParams,
) -> CatalogResult<ApiResponse<ProductResponse>> {
    let products = service.find_all(&page).await?;
    Ok(ApiResponse::page("Products retrieved", products))
}

/// Products whose name contains `word`, ignoring case
#[utoipa::path(
    get,
    path = "/getAllByName/{word}",
    tag = TAG,
    params(("word" = String, Path, description = "Text to look for"), PageQuery),
    responses(
        (status = 200, description = "Page of matching products", body = ApiResponse<ProductResponse>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_all_by_name<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(word): Path<String>,
    PageParams(page): PageParams,
) -> CatalogResult<ApiResponse<ProductResponse>> {
    let products = service.find_all_by_name(&word, &page).await?;
    Ok(ApiResponse::page("Products retrieved", products))
}

/// Products whose description contains `word`, ignoring case
#[utoipa::path(
    get,
    path = "/getAllByDescription/{word}",
    tag = TAG,
    params(("word" = String, Path, description = "Text to look for"), PageQuery),
    responses(
        (status = 200, description = "Page of matching products", body = ApiResponse<ProductResponse>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_all_by_description<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(word): Path<String>,
    PageParams(page): PageParams,
) -> CatalogResult<ApiResponse<ProductResponse>> {
    let products = service.find_all_by_description(&word, &page).await?;
    Ok(ApiResponse::page("Products retrieved", products))
}

/// A product with its subcategory and stock record
#[utoipa::path(
    get,
    path = "/get/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductDetail>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_by_id<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> CatalogResult<ApiResponse<ProductDetail>> {
    let product = service.find_by_id(id).await?;
    Ok(ApiResponse::ok("Product found", product))
}

#[utoipa::path(
    post,
    path = "/save",
    tag = TAG,
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn save<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(request): ValidatedJson<ProductRequest>,
) -> CatalogResult<ApiResponse<ProductResponse>> {
    let product = service.save(request).await?;
    Ok(ApiResponse::created("Product created", product))
}

#[utoipa::path(
    put,
    path = "/update/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<ProductRequest>,
) -> CatalogResult<ApiResponse<ProductResponse>> {
    let product = service.update(id, request).await?;
    Ok(ApiResponse::ok("Product updated", product))
}

#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<ProductResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_by_id<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> CatalogResult<ApiResponse<ProductResponse>> {
    service.delete_by_id(id).await?;
    Ok(ApiResponse::empty("Product deleted"))
}
