use observability::{AssessmentMetrics, ScoringTimer};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::catalog::ProviderCatalog;
use crate::engine::generate_recommendations;
use crate::error::{RecommendationError, RecommendationResult};
use crate::models::{
    AssessmentResult, DEFAULT_EMAIL_SUBJECT, EmailResultsRequest, EmailResultsResponse,
    NewAssessment, Provider, Requirements,
};
use crate::repository::AssessmentRepository;

/// Service layer tying the catalog, the engine and assessment storage together
#[derive(Clone)]
pub struct AssessmentService<R: AssessmentRepository> {
    catalog: Arc<ProviderCatalog>,
    repository: Arc<R>,
}

impl<R: AssessmentRepository> AssessmentService<R> {
    pub fn new(catalog: ProviderCatalog, repository: R) -> Self {
        AssessmentMetrics::set_catalog_size(catalog.len());

        Self {
            catalog: Arc::new(catalog),
            repository: Arc::new(repository),
        }
    }

    pub fn catalog(&self) -> &ProviderCatalog {
        &self.catalog
    }

    /// All providers, in catalog order
    pub fn list_providers(&self) -> Vec<Provider> {
        self.catalog.providers().to_vec()
    }

    /// Get a single provider by id
    #[instrument(skip(self))]
    pub fn get_provider(&self, id: &str) -> RecommendationResult<Provider> {
        let provider = self.catalog.get(id).cloned();
        AssessmentMetrics::record_provider_lookup(provider.is_some());

        provider.ok_or_else(|| RecommendationError::ProviderNotFound(id.to_string()))
    }

    /// Score the catalog against `requirements` and store the result
    #[instrument(skip(self, requirements), fields(project_type = %requirements.project_type, budget = %requirements.budget))]
    pub async fn assess(&self, requirements: Requirements) -> RecommendationResult<AssessmentResult> {
        requirements
            .validate()
            .map_err(|e| RecommendationError::InvalidInput(e.to_string()))?;

        let timer = ScoringTimer::start();
        let recommendations = generate_recommendations(&requirements, self.catalog.providers());
        let elapsed = timer.elapsed();

        let top = recommendations
            .first()
            .map(|rec| (rec.provider_id.as_str(), rec.match_score));
        AssessmentMetrics::record_assessment(
            recommendations.len(),
            top,
            recommendations.iter().map(|rec| rec.match_score),
            elapsed,
        );

        let assessment = self
            .repository
            .put(NewAssessment {
                requirements,
                recommendations,
            })
            .await?;

        let top = assessment.recommendations.first();
        tracing::info!(
            assessment_id = %assessment.id,
            providers = assessment.recommendations.len(),
            top_provider = top.map(|rec| rec.provider_id.as_str()),
            top_score = top.map(|rec| rec.match_score),
            "Created assessment"
        );

        Ok(assessment)
    }

    /// Get a stored assessment by id
    #[instrument(skip(self), fields(assessment_id = %id))]
    pub async fn get_assessment(&self, id: Uuid) -> RecommendationResult<AssessmentResult> {
        self.repository
            .get(id)
            .await?
            .ok_or(RecommendationError::AssessmentNotFound(id))
    }

    pub async fn assessment_count(&self) -> RecommendationResult<usize> {
        self.repository.count().await
    }

    /// Pretend to email an assessment's results.
    ///
    /// Delivery is not implemented; the request is validated, the assessment
    /// must exist, and the would-be message is logged.
    #[instrument(skip(self, request), fields(assessment_id = %request.assessment_id))]
    pub async fn email_results(
        &self,
        request: EmailResultsRequest,
    ) -> RecommendationResult<EmailResultsResponse> {
        if let Err(e) = request.validate() {
            AssessmentMetrics::record_email_request("invalid");
            return Err(RecommendationError::InvalidInput(e.to_string()));
        }

        let assessment = match self.get_assessment(request.assessment_id).await {
            Ok(assessment) => assessment,
            Err(e) => {
                AssessmentMetrics::record_email_request("not_found");
                return Err(e);
            }
        };

        let subject = request
            .subject
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_EMAIL_SUBJECT);

        tracing::info!(
            to = %request.email,
            subject = subject,
            recommendations = assessment.recommendations.len(),
            "Email delivery is not configured; logging results email instead"
        );
        AssessmentMetrics::record_email_request("sent");

        Ok(EmailResultsResponse {
            success: true,
            message: "Email sent successfully".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::requirements;
    use crate::repository::MockAssessmentRepository;
    use mockall::predicate::eq;

    fn service(repo: MockAssessmentRepository) -> AssessmentService<MockAssessmentRepository> {
        AssessmentService::new(ProviderCatalog::seed().unwrap(), repo)
    }

    fn stored_assessment() -> AssessmentResult {
        AssessmentResult::new(NewAssessment {
            requirements: requirements(),
            recommendations: vec![],
        })
    }

    #[test]
    fn test_list_providers_in_catalog_order() {
        let service = service(MockAssessmentRepository::new());
        let ids: Vec<String> = service.list_providers().into_iter().map(|p| p.id).collect();

        assert_eq!(ids.len(), 11);
        assert_eq!(ids.first().map(String::as_str), Some("aws"));
        assert_eq!(ids.last().map(String::as_str), Some("vultr"));
    }

    #[test]
    fn test_get_provider() {
        let service = service(MockAssessmentRepository::new());

        assert_eq!(service.get_provider("ovh").unwrap().display_name, "OVHcloud");
        assert!(matches!(
            service.get_provider("nimbus"),
            Err(RecommendationError::ProviderNotFound(id)) if id == "nimbus"
        ));
    }

    #[tokio::test]
    async fn test_assess_scores_and_stores() {
        let mut mock_repo = MockAssessmentRepository::new();
        mock_repo
            .expect_put()
            .times(1)
            .returning(|input| Ok(AssessmentResult::new(input)));

        let service = service(mock_repo);
        let assessment = service.assess(requirements()).await.unwrap();

        assert_eq!(assessment.recommendations.len(), 11);
        assert_eq!(assessment.requirements, requirements());
        assert!(
            assessment
                .recommendations
                .windows(2)
                .all(|pair| pair[0].match_score >= pair[1].match_score)
        );
    }

    #[tokio::test]
    async fn test_assess_rejects_negative_requirements() {
        let mut mock_repo = MockAssessmentRepository::new();
        mock_repo.expect_put().never();

        let mut reqs = requirements();
        reqs.storage.object = -5.0;

        let result = service(mock_repo).assess(reqs).await;
        assert!(matches!(result, Err(RecommendationError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_get_assessment_not_found() {
        let id = Uuid::now_v7();
        let mut mock_repo = MockAssessmentRepository::new();
        mock_repo.expect_get().with(eq(id)).returning(|_| Ok(None));

        let result = service(mock_repo).get_assessment(id).await;
        assert!(matches!(result, Err(RecommendationError::AssessmentNotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_email_results_for_known_assessment() {
        let stored = stored_assessment();
        let id = stored.id;
        let mut mock_repo = MockAssessmentRepository::new();
        mock_repo
            .expect_get()
            .with(eq(id))
            .returning(move |_| Ok(Some(stored.clone())));

        let response = service(mock_repo)
            .email_results(EmailResultsRequest {
                email: "dev@example.com".to_string(),
                assessment_id: id,
                subject: None,
            })
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.message, "Email sent successfully");
    }

    #[tokio::test]
    async fn test_email_results_unknown_assessment() {
        let mut mock_repo = MockAssessmentRepository::new();
        mock_repo.expect_get().returning(|_| Ok(None));

        let result = service(mock_repo)
            .email_results(EmailResultsRequest {
                email: "dev@example.com".to_string(),
                assessment_id: Uuid::now_v7(),
                subject: Some("Results".to_string()),
            })
            .await;

        assert!(matches!(result, Err(RecommendationError::AssessmentNotFound(_))));
    }

    #[tokio::test]
    async fn test_email_results_invalid_address() {
        let mut mock_repo = MockAssessmentRepository::new();
        mock_repo.expect_get().never();

        let result = service(mock_repo)
            .email_results(EmailResultsRequest {
                email: "not-an-address".to_string(),
                assessment_id: Uuid::now_v7(),
                subject: None,
            })
            .await;

        assert!(matches!(result, Err(RecommendationError::InvalidInput(_))));
    }
}
