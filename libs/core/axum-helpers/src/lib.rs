//! # Axum Helpers
//!
//! Shared HTTP plumbing for the inventory services.
//!
//! ## Modules
//!
//! - **[`envelope`]**: success envelope (`status`, `message`, `data`, `metadata`)
//! - **[`errors`]**: [`AppError`], the [`ErrorCode`] status table and the error envelope
//! - **[`extractors`]**: numeric id path, validated JSON, paging query
//! - **[`http`]**: CORS and security headers
//! - **[`server`]**: router assembly, health endpoints, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, finalize_app};
//!
//! let router = create_router::<ApiDoc>(api_routes)?;
//! create_production_app(finalize_app(router), &config.server, timeout, async {}).await?;
//! ```

pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use envelope::{ApiResponse, PageMetadata};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, PageParams, PageQuery, ValidatedJson};

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    finalize_app, health_router, run_health_checks, shutdown_signal,
};
