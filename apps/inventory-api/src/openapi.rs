use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::PageMetadata)
    ),
    info(
        title = "Inventory API",
        version = "0.1.0",
        description = "Categories, subcategories, products and their stock levels"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/category", api = domain_catalog::category::handlers::ApiDoc),
        (path = "/subcategory", api = domain_catalog::subcategory::handlers::ApiDoc),
        (path = "/product", api = domain_catalog::product::handlers::ApiDoc),
        (path = "/inventory", api = domain_catalog::inventory::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
