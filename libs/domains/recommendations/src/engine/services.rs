//! Concrete service picks shown alongside a recommendation.

use crate::engine::cost::select_compute_tier;
use crate::models::{Provider, RecommendedServices, Requirements, StorageKind};

/// Name the compute tier, storage offerings and database a workload would use.
///
/// Uses the same tier selection as the cost estimator so the named services
/// always match the priced ones.
pub fn recommend_services(requirements: &Requirements, provider: &Provider) -> RecommendedServices {
    let compute = select_compute_tier(requirements, provider)
        .map(|tier| tier.name.clone())
        .unwrap_or_default();

    let requested = [
        (StorageKind::Block, requirements.storage.block),
        (StorageKind::Object, requirements.storage.object),
    ];
    let storage = requested
        .into_iter()
        .filter(|&(_, gb)| gb > 0.0)
        .filter_map(|(kind, _)| provider.storage_of(kind))
        .map(|offering| offering.name.clone())
        .collect();

    let database = requirements
        .database
        .then(|| provider.entry_database())
        .flatten()
        .map(|db| db.name.clone());

    RecommendedServices {
        compute,
        storage,
        database,
    }
}
