//! Request path for error envelopes.
//!
//! [`record_request_path`] stores the URI path in a task-local for the duration
//! of the request, so [`ErrorResponse::new`](super::ErrorResponse::new) can fill
//! in `path` wherever the error is converted into a response.

use axum::{extract::Request, middleware::Next, response::Response};

tokio::task_local! {
    static REQUEST_PATH: String;
}

/// Middleware; install on the outermost router.
pub async fn record_request_path(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    REQUEST_PATH.scope(path, next.run(request)).await
}

/// Path of the request being served, or an empty string outside of one.
pub fn current_request_path() -> String {
    REQUEST_PATH.try_with(Clone::clone).unwrap_or_default()
}
