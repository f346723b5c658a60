//! Observability utilities for the cloud provider recommendation service.
//!
//! This crate provides:
//! - Prometheus metrics recording and export
//! - Assessment and catalog metrics
//! - Axum middleware for automatic request metrics
//!
//! # Example
//!
//! ```rust,ignore
//! use observability::{init_metrics, metrics_handler, AssessmentMetrics};
//!
//! init_metrics()?;
//!
//! AssessmentMetrics::set_catalog_size(11);
//! AssessmentMetrics::record_provider_lookup(true);
//!
//! let app = Router::new()
//!     .route("/metrics", get(metrics_handler));
//! ```

pub mod assessments;
pub mod middleware;

pub use assessments::{AssessmentMetrics, ScoringTimer};
pub use middleware::metrics_middleware;

pub use metrics::{counter, gauge, histogram};

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus metrics recorder.
///
/// Safe to call more than once; later calls return the handle installed by
/// the first. Fails if another global recorder was installed elsewhere.
pub fn init_metrics() -> Result<&'static PrometheusHandle, BuildError> {
    METRICS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new().install_recorder()?;

        info!("Prometheus metrics recorder initialized");
        register_metric_descriptions();

        Ok(handle)
    })
}

/// Get the metrics handle (must call init_metrics first)
pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Axum handler for /metrics endpoint
pub async fn metrics_handler() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

fn register_metric_descriptions() {
    use metrics::{describe_counter, describe_gauge, describe_histogram};

    // HTTP metrics
    describe_counter!("http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_counter!(
        "http_requests_errors_total",
        "Total number of HTTP request errors"
    );

    // Assessment metrics
    describe_counter!("assessments_total", "Total assessments scored");
    describe_histogram!(
        "assessment_scoring_duration_seconds",
        "Time spent scoring the catalog for one assessment"
    );
    describe_counter!(
        "top_recommendation_total",
        "Assessments won by each provider"
    );
    describe_histogram!(
        "recommendation_match_score",
        "Distribution of per-provider match scores"
    );

    // Catalog metrics
    describe_counter!(
        "provider_lookups_total",
        "Single-provider lookups by result"
    );
    describe_gauge!("catalog_providers", "Providers in the loaded catalog");

    // Email metrics
    describe_counter!(
        "email_results_requests_total",
        "Email-results requests by outcome"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_metrics_handler_renders_after_init() {
        let first = init_metrics().unwrap();
        let second = init_metrics().unwrap();
        assert!(std::ptr::eq(first, second));

        AssessmentMetrics::set_catalog_size(11);
        let body = metrics_handler().await;
        assert!(body.contains("catalog_providers"));
    }
}
