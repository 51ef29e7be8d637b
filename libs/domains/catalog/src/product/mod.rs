pub mod handlers;
pub mod mapper;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use models::{ProductDetail, ProductRequest, ProductResponse, ProductSummary};
pub use postgres::PgProductRepository;
pub use repository::{ProductRepository, ProductWithRelations, ProductWithSubcategory};
pub use service::ProductService;
