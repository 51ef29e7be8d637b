use crate::pagination::PaginationError;

/// Error type for everything this crate does against PostgreSQL.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Errors raised by SeaORM or the driver underneath it
    #[error("{0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// The page request could not be turned into a query
    #[error(transparent)]
    Pagination(#[from] PaginationError),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
