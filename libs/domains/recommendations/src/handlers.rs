use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::RecommendationResult;
use crate::models::{
    AssessmentResponse, AssessmentResult, Budget, ComputeNeeds, ComputeTier, CostRange,
    DatabaseTier, EmailResultsRequest, EmailResultsResponse, ExpectedTraffic, PricingMultipliers,
    ProjectType, Provider, ProviderServices, Recommendation, RecommendedServices, Requirements,
    ScalingNeeds, SetupComplexity, StorageKind, StorageNeeds, StorageOffering, SupportImportance,
    SupportQuality, TechnicalExpertise,
};
use crate::repository::AssessmentRepository;
use crate::service::AssessmentService;

const TAG: &str = "recommendations";

/// OpenAPI documentation for the recommendations API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_providers,
        get_provider,
        assess,
        get_assessment,
        email_results,
    ),
    components(
        schemas(
            Provider, ProviderServices, ComputeTier, StorageOffering, DatabaseTier,
            PricingMultipliers, StorageKind, SetupComplexity, SupportQuality,
            Requirements, ComputeNeeds, StorageNeeds, ProjectType, Budget, ExpectedTraffic,
            ScalingNeeds, TechnicalExpertise, SupportImportance,
            Recommendation, CostRange, RecommendedServices,
            AssessmentResponse, AssessmentResult, EmailResultsRequest, EmailResultsResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Cloud provider catalog and recommendations")
    )
)]
pub struct ApiDoc;

/// Create the recommendations router with all HTTP endpoints
pub fn router<R: AssessmentRepository + 'static>(service: AssessmentService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/providers", get(list_providers::<R>))
        .route("/providers/{id}", get(get_provider::<R>))
        .route("/assess", post(assess::<R>))
        .route("/assessment/{id}", get(get_assessment::<R>))
        .route("/email-results", post(email_results::<R>))
        .with_state(shared_service)
}

/// List every provider in the catalog
#[utoipa::path(
    get,
    path = "/providers",
    tag = TAG,
    responses(
        (status = 200, description = "Provider catalog", body = Vec<Provider>)
    )
)]
async fn list_providers<R: AssessmentRepository>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> Json<Vec<Provider>> {
    Json(service.list_providers())
}

/// Get a provider by id
#[utoipa::path(
    get,
    path = "/providers/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Provider id, e.g. `hetzner`")
    ),
    responses(
        (status = 200, description = "Provider found", body = Provider),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_provider<R: AssessmentRepository>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(id): Path<String>,
) -> RecommendationResult<Json<Provider>> {
    let provider = service.get_provider(&id)?;
    Ok(Json(provider))
}

/// Score every provider against the submitted requirements
#[utoipa::path(
    post,
    path = "/assess",
    tag = TAG,
    request_body = Requirements,
    responses(
        (status = 200, description = "Ranked recommendations", body = AssessmentResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn assess<R: AssessmentRepository>(
    State(service): State<Arc<AssessmentService<R>>>,
    ValidatedJson(requirements): ValidatedJson<Requirements>,
) -> RecommendationResult<Json<AssessmentResponse>> {
    let assessment = service.assess(requirements).await?;
    Ok(Json(assessment.into()))
}

/// Get a stored assessment
#[utoipa::path(
    get,
    path = "/assessment/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Assessment ID")
    ),
    responses(
        (status = 200, description = "Assessment found", body = AssessmentResult),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_assessment<R: AssessmentRepository>(
    State(service): State<Arc<AssessmentService<R>>>,
    UuidPath(id): UuidPath,
) -> RecommendationResult<Json<AssessmentResult>> {
    let assessment = service.get_assessment(id).await?;
    Ok(Json(assessment))
}

/// Email an assessment's results (delivery is logged, not sent)
#[utoipa::path(
    post,
    path = "/email-results",
    tag = TAG,
    request_body = EmailResultsRequest,
    responses(
        (status = 200, description = "Email accepted", body = EmailResultsResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn email_results<R: AssessmentRepository>(
    State(service): State<Arc<AssessmentService<R>>>,
    ValidatedJson(request): ValidatedJson<EmailResultsRequest>,
) -> RecommendationResult<Json<EmailResultsResponse>> {
    let response = service.email_results(request).await?;
    Ok(Json(response))
}
