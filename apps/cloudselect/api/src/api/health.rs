//! Readiness checks for the recommendation service.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

/// Ready once the provider catalog is loaded and non-empty and the metrics
/// recorder is installed.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![
        (
            "catalog",
            Box::pin(async {
                if state.service.catalog().is_empty() {
                    Err("Provider catalog is empty".to_string())
                } else {
                    Ok(())
                }
            }),
        ),
        (
            "metrics",
            Box::pin(async {
                observability::get_metrics_handle()
                    .map(|_| ())
                    .ok_or_else(|| "Metrics recorder not installed".to_string())
            }),
        ),
    ];

    run_health_checks(checks).await.into_response()
}
