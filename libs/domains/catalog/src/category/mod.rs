pub mod handlers;
pub mod mapper;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use models::{CategoryDetail, CategoryRequest, CategoryResponse, CategorySummary};
pub use postgres::PgCategoryRepository;
pub use repository::{CategoryRepository, CategoryWithSubcategories};
pub use service::CategoryService;
