use axum::{Router, middleware, routing::get};
use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use observability::{metrics_handler, metrics_middleware};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Compose the full application router.
///
/// - `/api/*`: recommendation endpoints, with docs and middleware from `create_router`
/// - `/health`: liveness with app name/version
/// - `/ready`: catalog and metrics checks
/// - `/metrics`: Prometheus text format
fn build_app(state: &AppState) -> eyre::Result<Router> {
    let api_routes = api::routes(state);
    let router = create_router::<openapi::ApiDoc>(
        api_routes,
        &state.config.server,
        &state.config.environment,
    )?;

    Ok(router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()))
        .route("/metrics", get(metrics_handler))
        .layer(middleware::from_fn(metrics_middleware)))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    observability::init_metrics()
        .map_err(|e| eyre::eyre!("Failed to install metrics recorder: {}", e))?;

    let state = AppState::new(config)?;
    let app = build_app(&state)?;

    info!(
        name = state.config.app.name,
        version = state.config.app.version,
        shutdown_timeout = ?state.config.server.shutdown_timeout,
        "Starting CloudSelect API"
    );

    let server_config = state.config.server.clone();
    let service = state.service;
    create_production_app(app, &server_config, async move {
        match service.assessment_count().await {
            Ok(count) => info!(assessments = count, "Discarding in-memory assessments"),
            Err(e) => tracing::warn!("Could not count stored assessments: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("CloudSelect API shutdown complete");
    Ok(())
}
