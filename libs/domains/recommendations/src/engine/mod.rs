//! Recommendation engine.
//!
//! A pure, synchronous function of `(requirements, providers)`. Each provider
//! is priced, scored and given service picks independently:
//!
//! ```text
//! Provider ──> cost::estimate_cost ──> scoring::score_provider ──> services::recommend_services
//!                                                                              │
//!                                  Recommendation (one per provider) <─────────┘
//! ```
//!
//! The result keeps every provider and is stable-sorted by descending score,
//! so equal scores keep catalog order.

pub mod affinity;
pub mod cost;
pub mod scoring;
pub mod services;

use crate::models::{Provider, Recommendation, Requirements};

pub use cost::{estimate_cost, select_compute_tier};
pub use scoring::{ProviderScore, score_provider};
pub use services::recommend_services;

/// Build one recommendation for `provider`
pub fn recommend(requirements: &Requirements, provider: &Provider) -> Recommendation {
    let estimated_cost = estimate_cost(requirements, provider);
    let ProviderScore {
        score,
        reasons,
        warnings,
    } = score_provider(requirements, provider, &estimated_cost);

    Recommendation {
        provider_id: provider.id.clone(),
        match_score: score,
        estimated_cost,
        reasons,
        warnings,
        recommended_services: recommend_services(requirements, provider),
    }
}

/// Score every provider and rank them, best match first
pub fn generate_recommendations(
    requirements: &Requirements,
    providers: &[Provider],
) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = providers
        .iter()
        .map(|provider| recommend(requirements, provider))
        .collect();

    // `sort_by` is stable
    recommendations.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    recommendations
}
