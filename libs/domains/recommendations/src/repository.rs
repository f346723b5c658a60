use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::RecommendationResult;
use crate::models::{AssessmentResult, NewAssessment};

/// Repository trait for assessment persistence
///
/// Stores each `(requirements, recommendations)` pair under a freshly
/// generated id so it can be fetched again later.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Store an assessment and return it with its assigned id
    async fn put(&self, input: NewAssessment) -> RecommendationResult<AssessmentResult>;

    /// Get an assessment by ID
    async fn get(&self, id: Uuid) -> RecommendationResult<Option<AssessmentResult>>;

    /// Number of stored assessments
    async fn count(&self) -> RecommendationResult<usize>;
}

/// In-memory implementation of AssessmentRepository
///
/// Nothing is ever evicted; records live as long as the process.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAssessmentRepository {
    assessments: Arc<RwLock<HashMap<Uuid, AssessmentResult>>>,
}

impl InMemoryAssessmentRepository {
    pub fn new() -> Self {
        Self {
            assessments: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.assessments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.assessments.read().await.is_empty()
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    async fn put(&self, input: NewAssessment) -> RecommendationResult<AssessmentResult> {
        let assessment = AssessmentResult::new(input);

        let mut assessments = self.assessments.write().await;
        assessments.insert(assessment.id, assessment.clone());

        tracing::debug!(assessment_id = %assessment.id, "Stored assessment");
        Ok(assessment)
    }

    async fn get(&self, id: Uuid) -> RecommendationResult<Option<AssessmentResult>> {
        let assessments = self.assessments.read().await;
        Ok(assessments.get(&id).cloned())
    }

    async fn count(&self) -> RecommendationResult<usize> {
        Ok(self.len().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProviderCatalog;
    use crate::engine::{generate_recommendations, test_support::requirements};

    fn new_assessment() -> NewAssessment {
        let requirements = requirements();
        let catalog = ProviderCatalog::seed().unwrap();
        let recommendations = generate_recommendations(&requirements, catalog.providers());

        NewAssessment {
            requirements,
            recommendations,
        }
    }

    #[tokio::test]
    async fn test_put_and_get_assessment() {
        let repo = InMemoryAssessmentRepository::new();
        let input = new_assessment();

        let stored = repo.put(input.clone()).await.unwrap();
        assert_eq!(stored.requirements, input.requirements);
        assert_eq!(stored.recommendations.len(), 11);

        let fetched = repo.get(stored.id).await.unwrap();
        assert_eq!(fetched, Some(stored));
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let repo = InMemoryAssessmentRepository::new();
        repo.put(new_assessment()).await.unwrap();

        assert!(repo.get(Uuid::now_v7()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_each_put_gets_a_fresh_id() {
        let repo = InMemoryAssessmentRepository::new();
        let input = new_assessment();

        let first = repo.put(input.clone()).await.unwrap();
        let second = repo.put(input).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryAssessmentRepository::new();
        let handle = repo.clone();
        assert!(handle.is_empty().await);

        let stored = repo.put(new_assessment()).await.unwrap();
        assert!(handle.get(stored.id).await.unwrap().is_some());
    }
}
