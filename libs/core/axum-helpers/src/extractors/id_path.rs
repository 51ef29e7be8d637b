//! Numeric id path parameter.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Extracts a single `i64` path parameter such as `/get/{id}`.
///
/// A value that is not an integer is an unclassified failure (500), with the
/// parse error as its message.
///
/// ```ignore
/// async fn get_category(IdPath(id): IdPath) -> String {
///     format!("Category {}", id)
/// }
///
/// let app = Router::new().route("/get/{id}", get(get_category));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidPathParameter(e.body_text()))?;

        raw.trim()
            .parse::<i64>()
            .map(IdPath)
            .map_err(|e| AppError::InvalidPathParameter(format!("Invalid id '{}': {}", raw, e)))
    }
}
