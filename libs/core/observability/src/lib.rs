//! Prometheus metrics for the inventory services.
//!
//! - recorder installation and the `/metrics` handler
//! - [`middleware::metrics_middleware`] for per-route HTTP metrics
//! - [`CatalogMetrics`] for catalog operation outcomes
//!
//! ```rust,ignore
//! use observability::{init_metrics, metrics_handler, CatalogMetrics, Outcome};
//!
//! init_metrics()?;
//! CatalogMetrics::record_operation("category", "save", Outcome::Success);
//!
//! let app = Router::new().route("/metrics", get(metrics_handler));
//! ```

pub mod catalog;
pub mod middleware;

pub use catalog::{CatalogMetrics, Outcome};
pub use middleware::metrics_middleware;

// Re-export metrics macros for convenience
pub use metrics::{counter, gauge, histogram};

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the global Prometheus recorder. Later calls return the same handle.
pub fn init_metrics() -> Result<&'static PrometheusHandle, BuildError> {
    METRICS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new().install_recorder()?;
        info!("Prometheus metrics recorder initialized");
        register_metric_descriptions();
        Ok(handle)
    })
}

pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Axum handler for `/metrics`
pub async fn metrics_handler() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

fn register_metric_descriptions() {
    use metrics::{describe_counter, describe_histogram};

    describe_counter!("http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_counter!(
        "http_requests_errors_total",
        "Total number of HTTP requests answered with 4xx or 5xx"
    );

    describe_counter!(
        "catalog_operations_total",
        "Catalog operations by entity, operation and outcome"
    );
    describe_histogram!(
        "catalog_page_rows",
        "Rows returned per paged catalog query"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_is_idempotent_and_renders() {
        let first = init_metrics().unwrap() as *const PrometheusHandle;
        let second = init_metrics().unwrap() as *const PrometheusHandle;
        assert_eq!(first, second);

        CatalogMetrics::record_operation("category", "save", Outcome::Success);
        let rendered = metrics_handler().await;
        assert!(rendered.contains("catalog_operations_total"));
    }
}
