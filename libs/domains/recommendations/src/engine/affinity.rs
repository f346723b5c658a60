//! Provider-specific bonus tables.
//!
//! Each table maps a requirement value and a provider id to a fixed number
//! of points plus the reason reported with them. Values without rows score 0.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use once_cell::sync::Lazy;

use crate::models::{Budget, ProjectType};

/// Points awarded to one provider for one requirement value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bonus {
    pub points: u32,
    pub reason: &'static str,
}

/// Row of a bonus table: every listed provider gets the same bonus
pub type BonusRow<K> = (K, &'static [&'static str], u32, &'static str);

/// Lookup keyed by `(requirement value, provider id)`
#[derive(Debug, Clone)]
pub struct BonusTable<K> {
    rows: HashMap<K, HashMap<&'static str, Bonus>>,
}

impl<K: Eq + Hash + Copy> BonusTable<K> {
    pub fn from_rows(rows: &[BonusRow<K>]) -> Self {
        let mut table: HashMap<K, HashMap<&'static str, Bonus>> = HashMap::new();
        for &(key, providers, points, reason) in rows {
            let entries = table.entry(key).or_default();
            for &provider_id in providers {
                entries
                    .entry(provider_id)
                    .or_insert(Bonus { points, reason });
            }
        }
        Self { rows: table }
    }

    pub fn lookup<Q>(&self, key: &Q, provider_id: &str) -> Option<Bonus>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.rows.get(key)?.get(provider_id).copied()
    }
}

const PROJECT_AFFINITY_ROWS: &[BonusRow<ProjectType>] = &[
    (ProjectType::WebApp, &["aws", "azure"], 20, "Excellent for web applications"),
    (ProjectType::WebApp, &["gcp", "digitalocean", "vultr"], 18, "Very good for web applications"),
    (ProjectType::WebApp, &["hetzner", "linode"], 16, "Good performance for web applications"),
    (ProjectType::DataAnalytics, &["gcp"], 25, "Industry-leading AI/ML and analytics services"),
    (ProjectType::DataAnalytics, &["aws"], 20, "Comprehensive analytics platform"),
    (ProjectType::DataAnalytics, &["ibm"], 18, "Strong AI and analytics capabilities"),
    (ProjectType::Enterprise, &["aws", "azure", "ibm"], 22, "Enterprise-grade features and support"),
    (ProjectType::Enterprise, &["oracle"], 20, "Strong enterprise database capabilities"),
    // TODO: ecommerce, mobile-app and iot have no rows yet and score 0 here.
];

const REGIONAL_PREFERENCE_ROWS: &[BonusRow<&'static str>] = &[
    ("europe", &["hetzner", "ovh"], 15, "European-based provider with GDPR compliance"),
    ("europe", &["aws", "gcp", "azure"], 10, "Strong European presence"),
    ("asia-pacific", &["alibaba"], 15, "Leading provider in Asia-Pacific region"),
    ("asia-pacific", &["aws", "gcp"], 12, "Excellent Asia-Pacific coverage"),
];

const COST_FOCUS_ROWS: &[BonusRow<Budget>] = &[
    (Budget::UpTo50, &["hetzner", "vultr", "ovh"], 15, "Excellent price-performance ratio"),
    (Budget::UpTo50, &["digitalocean", "linode"], 12, "Good value for money"),
    (Budget::UpTo50, &["oracle"], 10, "Always Free tier available"),
    (Budget::UpTo200, &["hetzner", "vultr", "ovh"], 15, "Excellent price-performance ratio"),
    (Budget::UpTo200, &["digitalocean", "linode"], 12, "Good value for money"),
    (Budget::UpTo200, &["oracle"], 10, "Always Free tier available"),
];

/// Project-type affinity, keyed by `(projectType, providerId)`
pub static PROJECT_AFFINITY: Lazy<BonusTable<ProjectType>> =
    Lazy::new(|| BonusTable::from_rows(PROJECT_AFFINITY_ROWS));

/// Regional preference, keyed by `(primaryRegion, providerId)`
pub static REGIONAL_PREFERENCE: Lazy<BonusTable<&'static str>> =
    Lazy::new(|| BonusTable::from_rows(REGIONAL_PREFERENCE_ROWS));

/// Cost-optimization focus for the two lowest budget bands
pub static COST_FOCUS: Lazy<BonusTable<Budget>> =
    Lazy::new(|| BonusTable::from_rows(COST_FOCUS_ROWS));
