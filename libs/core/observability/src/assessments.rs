//! Assessment and catalog metrics for the recommendation service.

use metrics::{counter, gauge, histogram};
use std::time::{Duration, Instant};

/// Assessment metrics recorder
pub struct AssessmentMetrics;

impl AssessmentMetrics {
    // =========================================================================
    // Assessment Metrics
    // =========================================================================

    /// Record a completed assessment.
    ///
    /// `top` is the best-ranked provider and its score, `None` when the
    /// catalog was empty.
    pub fn record_assessment(
        providers_scored: usize,
        top: Option<(&str, u8)>,
        scores: impl IntoIterator<Item = u8>,
        duration: Duration,
    ) {
        counter!("assessments_total").increment(1);
        histogram!("assessment_scoring_duration_seconds").record(duration.as_secs_f64());

        for score in scores {
            histogram!("recommendation_match_score").record(f64::from(score));
        }

        if let Some((provider, score)) = top {
            counter!("top_recommendation_total", "provider" => provider.to_string()).increment(1);

            tracing::debug!(
                providers_scored = providers_scored,
                top_provider = provider,
                top_score = score,
                duration_ms = duration.as_millis() as u64,
                "Recorded assessment"
            );
        }
    }

    // =========================================================================
    // Catalog Metrics
    // =========================================================================

    /// Record a single-provider lookup, `found` or `not_found`
    pub fn record_provider_lookup(found: bool) {
        let result = if found { "found" } else { "not_found" };
        counter!("provider_lookups_total", "result" => result).increment(1);
    }

    /// Set the number of providers in the loaded catalog
    pub fn set_catalog_size(count: usize) {
        gauge!("catalog_providers").set(count as f64);
    }

    // =========================================================================
    // Email Metrics
    // =========================================================================

    /// Record an email-results request by outcome (`sent`, `invalid`, `not_found`)
    pub fn record_email_request(status: &'static str) {
        counter!("email_results_requests_total", "status" => status).increment(1);
    }
}

/// Measures the time spent scoring one assessment.
pub struct ScoringTimer {
    start: Instant,
}

impl ScoringTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
