use axum::Router;
use domain_catalog::inventory::{PgInventoryRepository, InventoryService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgInventoryRepository::new(state.db.clone());
    let service = InventoryService::new(repository);
    handlers::router(service)
}
