pub mod codes;
pub mod handlers;
pub mod request_path;
pub mod responses;

pub use codes::ErrorCode;
pub use request_path::{current_request_path, record_request_path};

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::{DatabaseError, PaginationError};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Error envelope returned by every failing request.
///
/// ```json
/// {
///   "status": "NOT_FOUND",
///   "errors": ["Category with id 42 not found"],
///   "path": "/api/category/get/42",
///   "timestamp": "2026-01-01T12:00:00.000Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status name
    #[schema(example = "NOT_FOUND")]
    pub status: String,
    /// One message per failure; one per violated field for validation errors
    pub errors: Vec<String>,
    /// Path of the request that failed
    #[schema(example = "/api/category/get/42")]
    pub path: String,
    /// RFC 3339 UTC time the error was produced
    pub timestamp: String,
}

impl ErrorResponse {
    /// Envelope for the request currently being served (see [`record_request_path`]).
    pub fn new(status: StatusCode, errors: Vec<String>) -> Self {
        Self {
            status: status_name(status),
            errors,
            path: current_request_path(),
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }
}

/// `StatusCode::NOT_FOUND` -> `"NOT_FOUND"`.
pub fn status_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(|reason| reason.to_ascii_uppercase().replace([' ', '-'], "_"))
        .unwrap_or_else(|| status.as_str().to_string())
}

/// Application error type rendered as an [`ErrorResponse`].
///
/// The variant selects an [`ErrorCode`], and the code decides the HTTP status.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("No route for {0}")]
    RouteNotFound(String),

    #[error("{0}")]
    InvalidPathParameter(String),

    #[error("{0}")]
    Database(#[from] DbErr),

    #[error("{0}")]
    Internal(String),

    #[error("{0}")]
    ServiceUnavailable(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::InvalidJson(_) => ErrorCode::InvalidJson,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::AlreadyExists(_) => ErrorCode::AlreadyExists,
            AppError::RouteNotFound(_) => ErrorCode::RouteNotFound,
            AppError::InvalidPathParameter(_) => ErrorCode::InvalidPathParameter,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::Internal(_) => ErrorCode::InternalError,
            AppError::ServiceUnavailable(_) => ErrorCode::ServiceUnavailable,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.code().status()
    }

    /// Messages placed in the envelope's `errors` array.
    pub fn messages(&self) -> Vec<String> {
        match self {
            AppError::Validation(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let status = code.status();

        if code.is_server_error() {
            tracing::error!(error_code = code.code(), kind = %code, "{}", self);
        } else {
            tracing::info!(error_code = code.code(), kind = %code, "{}", self);
        }

        let body = ErrorResponse::new(status, self.messages());
        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(validation_messages(&errors))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidJson(rejection.body_text())
    }
}

impl From<PaginationError> for AppError {
    fn from(error: PaginationError) -> Self {
        AppError::Validation(vec![error.to_string()])
    }
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::Postgres(e) => AppError::Database(e),
            DatabaseError::Pagination(e) => e.into(),
            DatabaseError::HealthCheckFailed(msg) => AppError::ServiceUnavailable(msg),
        }
    }
}

/// Flatten validator output into sorted `"field: message"` strings.
///
/// Field names are reported as they appear in JSON (`quantity_available` becomes
/// `quantityAvailable`). Nested structs and lists are prefixed with their path,
/// e.g. `category.id` or `items[0].name`.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut out = Vec::new();
    collect_validation_messages(errors, "", &mut out);
    out.sort();
    out
}

fn collect_validation_messages(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let field = camel_case(field);
        let path = if prefix.is_empty() {
            field
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("failed '{}' constraint", error.code));
                    out.push(format!("{path}: {message}"));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_validation_messages(nested, &path, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_validation_messages(nested, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' && !out.is_empty() {
            upper_next = true;
        } else if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
