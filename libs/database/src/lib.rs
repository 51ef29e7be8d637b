//! PostgreSQL plumbing shared by the domain crates.
//!
//! - [`postgres`]: configuration, connection (with startup retry), migrations, health
//! - [`pagination`]: page requests, sort keys and page results
//! - [`repository`]: generic SeaORM repository with sorted, paged queries
//!
//! # Features
//!
//! - `config` - `core_config::FromEnv` for [`postgres::PostgresConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::postgres;
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "inventory_api").await?;
//! ```

pub mod common;
pub mod pagination;
pub mod postgres;
pub mod repository;

pub use common::{DatabaseError, DatabaseResult};
pub use pagination::{Direction, Page, PageRequest, PaginationError, Sort};
pub use repository::{BaseRepository, sort_rows};
