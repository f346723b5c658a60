use axum::response::{IntoResponse, Response};
use axum_helpers::{ErrorCode, ErrorResponse};
use uuid::Uuid;

/// Result type for recommendation operations
pub type RecommendationResult<T> = Result<T, RecommendationError>;

/// Result type for catalog construction
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised around the recommendation engine
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("Provider not found: {0}")]
    ProviderNotFound(String),

    #[error("Assessment not found: {0}")]
    AssessmentNotFound(Uuid),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Seed data that breaks the engine's preconditions
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate provider id in catalog: {0}")]
    DuplicateProvider(String),

    #[error("Provider {0} has no compute tiers")]
    NoComputeTiers(String),
}

impl IntoResponse for RecommendationError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            Self::ProviderNotFound(_) => (ErrorCode::NotFound, "Provider not found".to_string()),
            Self::AssessmentNotFound(_) => {
                (ErrorCode::NotFound, "Assessment not found".to_string())
            }
            Self::InvalidInput(msg) => (ErrorCode::BadRequest, msg.clone()),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Recommendation request failed");
                (
                    ErrorCode::InternalError,
                    ErrorCode::InternalError.default_message().to_string(),
                )
            }
        };

        ErrorResponse::new(code, message).into_response()
    }
}
