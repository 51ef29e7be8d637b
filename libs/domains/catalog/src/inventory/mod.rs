pub mod handlers;
pub mod mapper;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use models::{InventoryRequest, InventoryResponse, InventorySummary};
pub use postgres::PgInventoryRepository;
pub use repository::{InventoryRepository, InventoryWithProduct};
pub use service::InventoryService;
