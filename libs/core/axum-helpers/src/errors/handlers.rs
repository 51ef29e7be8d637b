use axum::{
    extract::OriginalUri,
    response::{IntoResponse, Response},
};

use super::AppError;

/// Router fallback: unknown routes get the standard error envelope with 404.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> Response {
    AppError::RouteNotFound(uri.path().to_string()).into_response()
}
