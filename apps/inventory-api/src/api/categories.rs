use axum::Router;
use domain_catalog::category::{PgCategoryRepository, CategoryService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgCategoryRepository::new(state.db.clone());
    let service = CategoryService::new(repository);
    handlers::router(service)
}
