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

use super::models::{CategoryDetail, CategoryRequest, CategoryResponse, CategorySummary};
use super::repository::CategoryRepository;
use super::service::CategoryService;
use crate::error::CatalogResult;
use crate::subcategory::SubcategorySummary;

const TAG: &str = "category";

#[derive(OpenApi)]
#[openapi(
    paths(get_all, get_by_id, save, update, delete_by_id),
    components(
        schemas(CategoryRequest, CategoryResponse, CategoryDetail, CategorySummary, SubcategorySummary),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags((name = TAG, description = "Product categories"))
)]
pub struct ApiDoc;

pub fn router<R: CategoryRepository + 'static>(service: CategoryService<R>) -> Router {
    Router::new()
        .route("/getAll", get(get_all))
        .route("/get/{id}", get(get_by_id))
        .route("/save", post(save))
        .route("/update/{id}", put(update))
        .route("/delete/{id}", delete(delete_by_id))
        .with_state(Arc::new(service))
}

/// One page of categories
#[utoipa::path(
    get,
    path = "/getAll",
    tag = TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of categories", body = ApiResponse<CategoryResponse>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_all<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    PageParams(page): PageParams,
) -> CatalogResult<ApiResponse<CategoryResponse>> {
    let categories = service.find_all(&page).await?;
    Ok(ApiResponse::page("Categories retrieved", categories))
}

/// A category with its subcategories
#[utoipa::path(
    get,
    path = "/get/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryDetail>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_by_id<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    IdPath(id): IdPath,
) -> CatalogResult<ApiResponse<CategoryDetail>> {
    let category = service.find_by_id(id).await?;
    Ok(ApiResponse::ok("Category found", category))
}

#[utoipa::path(
    post,
    path = "/save",
    tag = TAG,
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponse>),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn save<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    ValidatedJson(request): ValidatedJson<CategoryRequest>,
) -> CatalogResult<ApiResponse<CategoryResponse>> {
    let category = service.save(request).await?;
    Ok(ApiResponse::created("Category created", category))
}

/// Replace every field of a category
#[utoipa::path(
    put,
    path = "/update/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Category id")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponse>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<CategoryRequest>,
) -> CatalogResult<ApiResponse<CategoryResponse>> {
    let category = service.update(id, request).await?;
    Ok(ApiResponse::ok("Category updated", category))
}

/// Delete a category; a missing id still succeeds
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<CategoryResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_by_id<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    IdPath(id): IdPath,
) -> CatalogResult<ApiResponse<CategoryResponse>> {
    service.delete_by_id(id).await?;
    Ok(ApiResponse::empty("Category deleted"))
}
