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

use super::models::{SubcategoryDetail, SubcategoryRequest, SubcategoryResponse, SubcategorySummary};
use super::repository::SubcategoryRepository;
use super::service::SubcategoryService;
use crate::category::CategorySummary;
use crate::error::CatalogResult;
use crate::product::ProductSummary;
use crate::shared::EntityRef;

const TAG: &str = "subcategory";

#[derive(OpenApi)]
#[openapi(
    paths(get_all, get_by_id, save, update, delete_by_id),
    components(
        schemas(
            SubcategoryRequest,
            SubcategoryResponse,
            SubcategoryDetail,
            SubcategorySummary,
            CategorySummary,
            ProductSummary,
            EntityRef
        ),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags((name = TAG, description = "Subcategories within a category"))
)]
pub struct ApiDoc;

pub fn router<R: SubcategoryRepository + 'static>(service: SubcategoryService<R>) -> Router {
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
        (status = 200, description = "Page of subcategories", body = ApiResponse<SubcategoryResponse>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_all<R: SubcategoryRepository>(
    State(service): State<Arc<SubcategoryService<R>>>,
    PageParams(page): PageParams,
) -> CatalogResult<ApiResponse<SubcategoryResponse>> {
    let subcategories = service.find_all(&page).await?;
    Ok(ApiResponse::page("Subcategories retrieved", subcategories))
}

/// A subcategory with its category and products
#[utoipa::path(
    get,
    path = "/get/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Subcategory id")),
    responses(
        (status = 200, description = "Subcategory found", body = ApiResponse<SubcategoryDetail>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_by_id<R: SubcategoryRepository>(
    State(service): State<Arc<SubcategoryService<R>>>,
    IdPath(id): IdPath,
) -> CatalogResult<ApiResponse<SubcategoryDetail>> {
    let subcategory = service.find_by_id(id).await?;
    Ok(ApiResponse::ok("Subcategory found", subcategory))
}

#[utoipa::path(
    post,
    path = "/save",
    tag = TAG,
    request_body = SubcategoryRequest,
    responses(
        (status = 201, description = "Subcategory created", body = ApiResponse<SubcategoryResponse>),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn save<R: SubcategoryRepository>(
    State(service): State<Arc<SubcategoryService<R>>>,
    ValidatedJson(request): ValidatedJson<SubcategoryRequest>,
) -> CatalogResult<ApiResponse<SubcategoryResponse>> {
    let subcategory = service.save(request).await?;
    Ok(ApiResponse::created("Subcategory created", subcategory))
}

#[utoipa::path(
    put,
    path = "/update/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Subcategory id")),
    request_body = SubcategoryRequest,
    responses(
        (status = 200, description = "Subcategory updated", body = ApiResponse<SubcategoryResponse>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update<R: SubcategoryRepository>(
    State(service): State<Arc<SubcategoryService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<SubcategoryRequest>,
) -> CatalogResult<ApiResponse<SubcategoryResponse>> {
    let subcategory = service.update(id, request).await?;
    Ok(ApiResponse::ok("Subcategory updated", subcategory))
}

#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Subcategory id")),
    responses(
        (status = 200, description = "Subcategory deleted", body = ApiResponse<SubcategoryResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_by_id<R: SubcategoryRepository>(
    State(service): State<Arc<SubcategoryService<R>>>,
    IdPath(id): IdPath,
) -> CatalogResult<ApiResponse<SubcategoryResponse>> {
    service.delete_by_id(id).await?;
    Ok(ApiResponse::empty("Subcategory deleted"))
}
