pub mod handlers;
pub mod mapper;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use models::{SubcategoryDetail, SubcategoryRequest, SubcategoryResponse, SubcategorySummary};
pub use postgres::PgSubcategoryRepository;
pub use repository::{SubcategoryRepository, SubcategoryWithCategory, SubcategoryWithRelations};
pub use service::SubcategoryService;
