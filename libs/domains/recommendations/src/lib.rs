//! Recommendations Domain
//!
//! Matches a questionnaire of workload requirements against a fixed catalog
//! of cloud providers and ranks them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, OpenAPI
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, metrics, persistence of assessments
//! └──┬───────┬──┘
//!    │       │
//! ┌──▼─────┐ ┌▼───────────┐
//! │ Engine │ │ Repository │  ← Pure scoring / assessment storage
//! └──┬─────┘ └────────────┘
//!    │
//! ┌──▼──────┐
//! │ Catalog │  ← Embedded provider seed data
//! └─────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_recommendations::{
//!     AssessmentService, InMemoryAssessmentRepository, ProviderCatalog,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = ProviderCatalog::seed()?;
//! let service = AssessmentService::new(catalog, InMemoryAssessmentRepository::new());
//! let router = domain_recommendations::handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use catalog::{ProviderCatalog, seed_providers};
pub use engine::{
    ProviderScore, estimate_cost, generate_recommendations, recommend, recommend_services,
    score_provider, select_compute_tier,
};
pub use error::{CatalogError, CatalogResult, RecommendationError, RecommendationResult};
pub use handlers::ApiDoc;
pub use models::{
    AssessmentResponse, AssessmentResult, Budget, ComputeNeeds, CostRange, EmailResultsRequest,
    EmailResultsResponse, ExpectedTraffic, NewAssessment, ProjectType, Provider, Recommendation,
    RecommendedServices, Requirements, ScalingNeeds, StorageNeeds, SupportImportance,
    TechnicalExpertise,
};
pub use repository::{AssessmentRepository, InMemoryAssessmentRepository};
pub use service::AssessmentService;
