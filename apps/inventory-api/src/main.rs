use axum::{middleware, routing::get};
use axum_helpers::server::{create_production_app, create_router, finalize_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    observability::init_metrics()
        .map_err(|e| eyre::eyre!("Metrics recorder installation failed: {}", e))?;

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    if config.run_migrations {
        database::postgres::run_migrations::<Migrator>(&db, config.app.name)
            .await
            .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;
    } else {
        info!("RUN_MIGRATIONS=false, skipping migrations");
    }

    let state = AppState { config, db };

    // Per-route HTTP metrics; applied before nesting so the matched path is known
    let api_routes =
        api::routes(&state).layer(middleware::from_fn(observability::metrics_middleware));

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<openapi::ApiDoc>(api_routes)?;

    // - /health: liveness check with app name/version
    // - /ready: readiness check with a database round trip
    // - /metrics: Prometheus exposition
    let app = finalize_app(
        router
            .merge(health_router(state.config.app))
            .merge(api::ready_router(state.clone()))
            .route("/metrics", get(observability::metrics_handler)),
    );

    let server = state.config.server.clone();
    let db = state.db;

    info!(
        shutdown_timeout = ?server.shutdown_timeout,
        "Starting inventory API"
    );

    create_production_app(app, &server, server.shutdown_timeout, async move {
        info!("Shutting down: closing database connections");
        match db.close().await {
            Ok(_) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Inventory API shutdown complete");
    Ok(())
}
