use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Requirements
// ============================================================================

/// Kind of workload the user wants to deploy
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ProjectType {
    WebApp,
    DataAnalytics,
    Ecommerce,
    Enterprise,
    MobileApp,
    Iot,
}

/// Monthly budget band in USD
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum Budget {
    #[serde(rename = "0-50")]
    #[strum(serialize = "0-50")]
    UpTo50,
    #[serde(rename = "50-200")]
    #[strum(serialize = "50-200")]
    UpTo200,
    #[serde(rename = "200-1000")]
    #[strum(serialize = "200-1000")]
    UpTo1000,
    #[serde(rename = "1000+")]
    #[strum(serialize = "1000+")]
    Over1000,
}

impl Budget {
    /// Highest acceptable `estimatedCost.max` for this band, `None` when unbounded.
    ///
    /// Each ceiling sits 10-20% above the band's upper edge.
    pub fn ceiling(&self) -> Option<u64> {
        match self {
            Budget::UpTo50 => Some(60),
            Budget::UpTo200 => Some(220),
            Budget::UpTo1000 => Some(1100),
            Budget::Over1000 => None,
        }
    }

    /// Reason reported when a provider's estimate fits this band
    pub fn fit_reason(&self) -> &'static str {
        match self {
            Budget::UpTo50 => "Fits within your budget constraints",
            Budget::UpTo200 => "Good value within your budget range",
            Budget::UpTo1000 => "Suitable for your budget requirements",
            Budget::Over1000 => "Enterprise-level features for your budget",
        }
    }

    /// Whether an estimate with the given upper bound fits this band
    pub fn fits(&self, max_cost: u64) -> bool {
        self.ceiling().is_none_or(|ceiling| max_cost <= ceiling)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExpectedTraffic {
    Low,
    Medium,
    High,
    Enterprise,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScalingNeeds {
    Static,
    Moderate,
    Aggressive,
    Enterprise,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TechnicalExpertise {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SupportImportance {
    Low,
    Medium,
    High,
}

/// Minimum compute capacity the workload needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ComputeNeeds {
    #[validate(range(min = 0.0))]
    pub vcpu: f64,
    /// Memory in GB
    #[validate(range(min = 0.0))]
    pub memory: f64,
}

/// Storage volume the workload needs, in GB
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct StorageNeeds {
    #[validate(range(min = 0.0))]
    pub block: f64,
    #[validate(range(min = 0.0))]
    pub object: f64,
}

/// Answer set collected from the questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    pub project_type: ProjectType,
    pub budget: Budget,
    pub primary_region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_countries: Option<Vec<String>>,
    pub multi_region: bool,
    pub expected_traffic: ExpectedTraffic,
    pub scaling_needs: ScalingNeeds,
    pub compliance_requirements: Vec<String>,
    pub technical_expertise: TechnicalExpertise,
    pub support_importance: SupportImportance,
    #[validate(nested)]
    pub compute: ComputeNeeds,
    #[validate(nested)]
    pub storage: StorageNeeds,
    pub database: bool,
}

// ============================================================================
// Provider catalog
// ============================================================================

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StorageKind {
    Block,
    Object,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SetupComplexity {
    Easy,
    Medium,
    Hard,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SupportQuality {
    Basic,
    Good,
    Excellent,
}

/// A compute size offered at a fixed hourly price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComputeTier {
    pub name: String,
    #[serde(rename = "type")]
    pub instance_type: String,
    pub vcpu: f64,
    /// Memory in GB
    pub memory: f64,
    pub price_per_hour: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StorageOffering {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: StorageKind,
    #[serde(rename = "pricePerGB")]
    pub price_per_gb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseTier {
    pub name: String,
    /// Engine family, e.g. `mysql`
    #[serde(rename = "type")]
    pub engine: String,
    pub price_per_hour: f64,
}

/// Services a provider offers. Compute tiers are ordered by ascending
/// capacity, database tiers cheapest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderServices {
    pub compute: Vec<ComputeTier>,
    pub storage: Vec<StorageOffering>,
    pub database: Vec<DatabaseTier>,
}

/// Provider-wide pricing adjustments.
///
/// Only `compute_multiplier` takes part in cost estimation, and it scales the
/// whole monthly total. `storage_multiplier` and `network_multiplier` are
/// carried for display and are not applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricingMultipliers {
    pub compute_multiplier: f64,
    pub storage_multiplier: f64,
    pub network_multiplier: f64,
}

/// Cloud vendor entry in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub logo: String,
    pub description: String,
    pub regions: Vec<String>,
    pub services: ProviderServices,
    pub pricing: PricingMultipliers,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub best_for: Vec<String>,
    pub setup_complexity: SetupComplexity,
    pub support_quality: SupportQuality,
    pub compliance: Vec<String>,
}

impl Provider {
    /// First storage offering of the given kind
    pub fn storage_of(&self, kind: StorageKind) -> Option<&StorageOffering> {
        self.services.storage.iter().find(|s| s.kind == kind)
    }

    /// The tier used whenever a managed database is requested
    pub fn entry_database(&self) -> Option<&DatabaseTier> {
        self.services.database.first()
    }

    pub fn supports_compliance(&self, standard: &str) -> bool {
        self.compliance.iter().any(|c| c == standard)
    }
}

// ============================================================================
// Recommendations
// ============================================================================

/// Monthly cost range in whole USD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CostRange {
    pub min: u64,
    pub max: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecommendedServices {
    pub compute: String,
    pub storage: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

/// One provider's score, cost estimate and service picks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub provider_id: String,
    /// 0..=100
    pub match_score: u8,
    pub estimated_cost: CostRange,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
    pub recommended_services: RecommendedServices,
}

// ============================================================================
// Assessments
// ============================================================================

/// Input to the assessment store
#[derive(Debug, Clone, PartialEq)]
pub struct NewAssessment {
    pub requirements: Requirements,
    pub recommendations: Vec<Recommendation>,
}

/// Stored assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub id: Uuid,
    pub requirements: Requirements,
    pub recommendations: Vec<Recommendation>,
    pub created_at: DateTime<Utc>,
}

impl AssessmentResult {
    pub fn new(input: NewAssessment) -> Self {
        Self {
            id: Uuid::now_v7(),
            requirements: input.requirements,
            recommendations: input.recommendations,
            created_at: Utc::now(),
        }
    }
}

/// Response body of `POST /assess`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub assessment_id: Uuid,
    pub recommendations: Vec<Recommendation>,
}

impl From<AssessmentResult> for AssessmentResponse {
    fn from(result: AssessmentResult) -> Self {
        Self {
            assessment_id: result.id,
            recommendations: result.recommendations,
        }
    }
}

pub const DEFAULT_EMAIL_SUBJECT: &str = "Your CloudMatch Recommendations";

/// Request body of `POST /email-results`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailResultsRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    pub assessment_id: Uuid,
    #[serde(default)]
    pub subject: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmailResultsResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_budget_bands_deserialize_from_labels() {
        let bands: Vec<Budget> =
            serde_json::from_value(json!(["0-50", "50-200", "200-1000", "1000+"])).unwrap();
        assert_eq!(
            bands,
            vec![Budget::UpTo50, Budget::UpTo200, Budget::UpTo1000, Budget::Over1000]
        );
        assert_eq!(Budget::Over1000.to_string(), "1000+");
    }

    #[test]
    fn test_budget_fits_respects_ceiling() {
        assert!(Budget::UpTo50.fits(60));
        assert!(!Budget::UpTo50.fits(61));
        assert!(Budget::UpTo200.fits(220));
        assert!(!Budget::UpTo1000.fits(1101));
        assert!(Budget::Over1000.fits(u64::MAX));
    }

    #[test]
    fn test_project_type_uses_kebab_case() {
        let parsed: ProjectType = serde_json::from_value(json!("data-analytics")).unwrap();
        assert_eq!(parsed, ProjectType::DataAnalytics);
        assert_eq!(ProjectType::MobileApp.to_string(), "mobile-app");
        assert_eq!(
            serde_json::to_value(ProjectType::Iot).unwrap(),
            json!("iot")
        );
    }

    #[test]
    fn test_absent_database_is_omitted_from_json() {
        let services = RecommendedServices {
            compute: "CX11".to_string(),
            storage: vec![],
            database: None,
        };
        let value = serde_json::to_value(&services).unwrap();
        assert!(value.get("database").is_none());
    }

    #[test]
    fn test_negative_compute_fails_validation() {
        let needs = ComputeNeeds {
            vcpu: -1.0,
            memory: 2.0,
        };
        assert!(needs.validate().is_err());
    }
}
