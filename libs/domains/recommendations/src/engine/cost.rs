//! Monthly cost estimation.

use crate::models::{ComputeTier, CostRange, Provider, Requirements, StorageKind};

/// Billing hours in a 30-day month
pub const HOURS_PER_MONTH: f64 = 24.0 * 30.0;

/// Flat surcharge for networking and miscellaneous costs
pub const NETWORK_BUFFER: f64 = 0.10;

const RANGE_LOW: f64 = 0.8;
const RANGE_HIGH: f64 = 1.2;

/// Pick the smallest tier satisfying both the vCPU and memory floor.
///
/// Tiers are scanned in catalog order; when none qualifies the last (largest)
/// tier is used. Returns `None` only for a provider with no compute tiers,
/// which the catalog rejects at load time.
pub fn select_compute_tier<'a>(
    requirements: &Requirements,
    provider: &'a Provider,
) -> Option<&'a ComputeTier> {
    let tiers = &provider.services.compute;
    tiers
        .iter()
        .find(|tier| {
            tier.vcpu >= requirements.compute.vcpu && tier.memory >= requirements.compute.memory
        })
        .or_else(|| tiers.last())
}

/// Unrounded monthly total before the range is applied
pub fn monthly_total(requirements: &Requirements, provider: &Provider) -> f64 {
    let mut total = select_compute_tier(requirements, provider)
        .map_or(0.0, |tier| tier.price_per_hour * HOURS_PER_MONTH);

    if let Some(block) = provider.storage_of(StorageKind::Block) {
        total += block.price_per_gb * requirements.storage.block;
    }
    if let Some(object) = provider.storage_of(StorageKind::Object) {
        total += object.price_per_gb * requirements.storage.object;
    }

    if requirements.database {
        if let Some(db) = provider.entry_database() {
            total += db.price_per_hour * HOURS_PER_MONTH;
        }
    }

    // The compute multiplier scales storage and database too.
    total *= provider.pricing.compute_multiplier;
    total + total * NETWORK_BUFFER
}

/// Estimate the monthly cost range for running the workload on `provider`
pub fn estimate_cost(requirements: &Requirements, provider: &Provider) -> CostRange {
    let total = monthly_total(requirements, provider);

    CostRange {
        min: round_usd(total * RANGE_LOW),
        max: round_usd(total * RANGE_HIGH),
    }
}

/// Round half away from zero to whole dollars
fn round_usd(amount: f64) -> u64 {
    amount.max(0.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProviderCatalog;
    use crate::engine::test_support::requirements;

    fn provider(id: &str) -> Provider {
        ProviderCatalog::seed().unwrap().get(id).unwrap().clone()
    }

    #[test]
    fn test_hetzner_minimal_workload() {
        let reqs = requirements();
        let hetzner = provider("hetzner");

        // 0.005 * 720 = 3.6, * 0.6 = 2.16, + 10% = 2.376
        assert!((monthly_total(&reqs, &hetzner) - 2.376).abs() < 1e-9);
        assert_eq!(estimate_cost(&reqs, &hetzner), CostRange { min: 2, max: 3 });
    }

    #[test]
    fn test_selects_first_tier_meeting_both_bounds() {
        let mut reqs = requirements();
        reqs.compute.vcpu = 1.0;
        reqs.compute.memory = 3.0;

        let aws = provider("aws");
        assert_eq!(select_compute_tier(&reqs, &aws).unwrap().name, "EC2 t3.medium");
    }

    #[test]
    fn test_falls_back_to_largest_tier() {
        let mut reqs = requirements();
        reqs.compute.vcpu = 4.0;
        reqs.compute.memory = 16.0;

        let aws = provider("aws");
        assert_eq!(select_compute_tier(&reqs, &aws).unwrap().name, "EC2 t3.large");

        // 0.0832 * 720 = 59.904, + 10% = 65.8944
        assert_eq!(estimate_cost(&reqs, &aws), CostRange { min: 53, max: 79 });
    }

    #[test]
    fn test_database_uses_first_tier() {
        let mut reqs = requirements();
        reqs.database = true;

        // (7.488 compute + 12.24 db) * 1.0 * 1.1 = 21.7008
        let aws = provider("aws");
        assert_eq!(estimate_cost(&reqs, &aws), CostRange { min: 17, max: 26 });
    }

    #[test]
    fn test_missing_database_costs_nothing() {
        let mut reqs = requirements();
        let hetzner = provider("hetzner");
        let without = estimate_cost(&reqs, &hetzner);

        reqs.database = true;
        assert_eq!(estimate_cost(&reqs, &hetzner), without);
    }

    #[test]
    fn test_storage_uses_first_offering_of_each_kind() {
        let mut reqs = requirements();
        reqs.storage.block = 100.0;
        reqs.storage.object = 50.0;

        // Hetzner has two block offerings and no object storage:
        // (3.6 + 0.0476 * 100) * 0.6 * 1.1 = 5.5176
        let hetzner = provider("hetzner");
        assert!((monthly_total(&reqs, &hetzner) - 5.5176).abs() < 1e-9);
        assert_eq!(estimate_cost(&reqs, &hetzner), CostRange { min: 4, max: 7 });
    }

    #[test]
    fn test_storage_and_network_multipliers_are_not_applied() {
        let reqs = requirements();
        let mut gcp = provider("gcp");
        let baseline = monthly_total(&reqs, &gcp);

        gcp.pricing.storage_multiplier = 10.0;
        gcp.pricing.network_multiplier = 10.0;
        assert_eq!(monthly_total(&reqs, &gcp), baseline);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_usd(2.5), 3);
        assert_eq!(round_usd(3.5), 4);
        assert_eq!(round_usd(2.4999), 2);
        assert_eq!(round_usd(-1.0), 0);
    }
}
