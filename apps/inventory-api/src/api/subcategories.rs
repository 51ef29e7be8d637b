use axum::Router;
use domain_catalog::subcategory::{PgSubcategoryRepository, SubcategoryService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgSubcategoryRepository::new(state.db.clone());
    let service = SubcategoryService::new(repository);
    handlers::router(service)
}
