//! Catalog Domain
//!
//! Categories, subcategories, products and their stock records, exposed as four
//! CRUD resources with paged listings.
//!
//! # Architecture
//!
//! Each resource module follows the same layering:
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, success envelope
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Existence and uniqueness checks, metrics
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + PostgreSQL and in-memory implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Entity    │  ← SeaORM models
//! └─────────────┘
//! ```
//!
//! The parent chain is category ← subcategory ← product ← inventory. Requests
//! reference a parent by id; responses embed a summary of it.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{PgCategoryRepository, CategoryService, category};
//! # fn example(db: sea_orm::DatabaseConnection) {
//! let service = CategoryService::new(PgCategoryRepository::new(db));
//! let router = category::handlers::router(service);
//! # }
//! ```

pub mod category;
pub mod entity;
pub mod error;
pub mod inventory;
pub mod memory;
pub mod product;
pub mod shared;
pub mod subcategory;

pub use category::{CategoryRepository, CategoryService, PgCategoryRepository};
pub use error::{CatalogError, CatalogResult, EntityKind};
pub use inventory::{InventoryRepository, InventoryService, PgInventoryRepository};
pub use memory::InMemoryCatalog;
pub use product::{PgProductRepository, ProductRepository, ProductService};
pub use shared::EntityRef;
pub use subcategory::{PgSubcategoryRepository, SubcategoryRepository, SubcategoryService};
