//! Error codes and their HTTP status mapping.
//!
//! [`ErrorCode::status`] is the single lookup table from error kind to HTTP
//! status; [`AppError`](super::AppError) only picks the code.
//!
//! ```rust
//! use axum::http::StatusCode;
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::AlreadyExists.status(), StatusCode::CONFLICT);
//! assert_eq!(ErrorCode::AlreadyExists.as_str(), "ALREADY_EXISTS");
//! assert_eq!(ErrorCode::AlreadyExists.code(), 1004);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000s)
    /// A field constraint or query parameter was violated
    ValidationError,

    /// Request body is not valid JSON for the target type
    InvalidJson,

    /// Requested entity does not exist
    NotFound,

    /// Unique key already taken
    AlreadyExists,

    /// No route matches the request path
    RouteNotFound,

    // Server errors (2000s)
    /// Unclassified failure
    InternalError,

    /// Path parameter could not be converted to its target type
    InvalidPathParameter,

    /// Error reported by the database or its driver
    DatabaseError,

    /// A dependency is not available
    ServiceUnavailable,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::InvalidPathParameter => "INVALID_PATH_PARAMETER",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    /// Integer code attached to error logs as `error_code`.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidJson => 1002,
            Self::NotFound => 1003,
            Self::AlreadyExists => 1004,
            Self::RouteNotFound => 1005,
            Self::InternalError => 2001,
            Self::InvalidPathParameter => 2002,
            Self::DatabaseError => 2003,
            Self::ServiceUnavailable => 2004,
        }
    }

    /// HTTP status rendered for this kind of error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ValidationError | Self::InvalidJson => StatusCode::BAD_REQUEST,
            Self::NotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists => StatusCode::CONFLICT,
            // Non-numeric ids surface as unclassified failures
            Self::InternalError | Self::InvalidPathParameter | Self::DatabaseError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidJson => "Malformed request body",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::RouteNotFound => "The requested route does not exist",
            Self::InternalError => "An internal server error occurred",
            Self::InvalidPathParameter => "Invalid path parameter",
            Self::DatabaseError => "A database error occurred",
            Self::ServiceUnavailable => "Service temporarily unavailable",
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.status().is_server_error()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
