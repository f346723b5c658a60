//! Application state management.
//!
//! The state is cloned into every router that needs it (Arc clones only):
//! - Configuration
//! - The assessment service, which owns the provider catalog and assessment store

use domain_recommendations::{AssessmentService, InMemoryAssessmentRepository, ProviderCatalog};

use crate::config::Config;

pub type Service = AssessmentService<InMemoryAssessmentRepository>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    pub service: Service,
}

impl AppState {
    /// Seed the provider catalog and start an empty assessment store
    pub fn new(config: Config) -> eyre::Result<Self> {
        let catalog = ProviderCatalog::seed()?;
        let service = AssessmentService::new(catalog, InMemoryAssessmentRepository::new());

        Ok(Self { config, service })
    }
}
