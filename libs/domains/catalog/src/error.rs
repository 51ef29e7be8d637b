use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::{DatabaseError, PaginationError};
use observability::Outcome;
use sea_orm::DbErr;
use strum::Display;
use thiserror::Error;

/// The four catalog resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EntityKind {
    Category,
    Subcategory,
    Product,
    Inventory,
}

impl EntityKind {
    /// Lowercase name used as a metrics label.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Category => "category",
            EntityKind::Subcategory => "subcategory",
            EntityKind::Product => "product",
            EntityKind::Inventory => "inventory",
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{kind} with id {id} not found")]
    NotFound { kind: EntityKind, id: i64 },

    #[error("{kind} with {field} '{value}' already exists")]
    AlreadyExists {
        kind: EntityKind,
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    InvalidPage(#[from] PaginationError),

    #[error("{0}")]
    Database(#[from] DbErr),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    pub fn not_found(kind: EntityKind, id: i64) -> Self {
        CatalogError::NotFound { kind, id }
    }

    pub fn already_exists(kind: EntityKind, field: &'static str, value: impl ToString) -> Self {
        CatalogError::AlreadyExists {
            kind,
            field,
            value: value.to_string(),
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self {
            CatalogError::NotFound { .. } => Outcome::NotFound,
            CatalogError::AlreadyExists { .. } => Outcome::Conflict,
            CatalogError::InvalidPage(_) => Outcome::Invalid,
            CatalogError::Database(_) => Outcome::Error,
        }
    }
}

impl From<DatabaseError> for CatalogError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Postgres(e) => CatalogError::Database(e),
            DatabaseError::Pagination(e) => CatalogError::InvalidPage(e),
            DatabaseError::HealthCheckFailed(msg) => CatalogError::Database(DbErr::Custom(msg)),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            e @ CatalogError::NotFound { .. } => AppError::NotFound(e.to_string()),
            e @ CatalogError::AlreadyExists { .. } => AppError::AlreadyExists(e.to_string()),
            CatalogError::InvalidPage(e) => e.into(),
            CatalogError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
