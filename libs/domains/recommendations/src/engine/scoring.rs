//! Additive per-factor scoring.
//!
//! Factors are evaluated in a fixed order and each appends its reason or
//! warning as it goes, so the output order of `reasons` and `warnings` is the
//! evaluation order. Points are summed without a cap and clamped to 100 once
//! at the end.

use crate::engine::affinity::{Bonus, COST_FOCUS, PROJECT_AFFINITY, REGIONAL_PREFERENCE};
use crate::models::{
    CostRange, Provider, Requirements, SetupComplexity, SupportImportance, SupportQuality,
    TechnicalExpertise,
};

pub const MAX_SCORE: u32 = 100;

/// Outcome of scoring one provider
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProviderScore {
    pub score: u8,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
}

/// Running tally while factors are evaluated
#[derive(Debug, Default)]
struct Tally {
    points: u32,
    reasons: Vec<String>,
    warnings: Vec<String>,
}

impl Tally {
    fn award(&mut self, points: u32, reason: impl Into<String>) {
        self.points += points;
        self.reasons.push(reason.into());
    }

    fn award_bonus(&mut self, bonus: Option<Bonus>) {
        if let Some(bonus) = bonus {
            self.award(bonus.points, bonus.reason);
        }
    }

    fn warn(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    fn finish(self) -> ProviderScore {
        ProviderScore {
            score: self.points.min(MAX_SCORE) as u8,
            reasons: self.reasons,
            warnings: self.warnings,
        }
    }
}

/// Score `provider` against `requirements` given its estimated cost
pub fn score_provider(
    requirements: &Requirements,
    provider: &Provider,
    estimated_cost: &CostRange,
) -> ProviderScore {
    let mut tally = Tally::default();

    budget_fit(&mut tally, requirements, estimated_cost);
    regional_coverage(&mut tally, provider);
    tally.award_bonus(PROJECT_AFFINITY.lookup(&requirements.project_type, &provider.id));
    tally.award_bonus(
        REGIONAL_PREFERENCE.lookup(requirements.primary_region.as_str(), &provider.id),
    );
    tally.award_bonus(COST_FOCUS.lookup(&requirements.budget, &provider.id));
    expertise_fit(&mut tally, requirements, provider);
    compliance_fit(&mut tally, requirements, provider);
    support_fit(&mut tally, requirements, provider);

    let result = tally.finish();
    tracing::debug!(
        provider_id = %provider.id,
        score = result.score,
        warnings = result.warnings.len(),
        "Scored provider"
    );
    result
}

fn budget_fit(tally: &mut Tally, requirements: &Requirements, cost: &CostRange) {
    if requirements.budget.fits(cost.max) {
        tally.award(25, requirements.budget.fit_reason());
    } else {
        tally.warn("May exceed your stated budget");
    }
}

fn regional_coverage(tally: &mut Tally, provider: &Provider) {
    match provider.regions.len() {
        n if n >= 20 => tally.award(20, "Excellent global coverage"),
        n if n >= 10 => tally.award(15, "Good regional availability"),
        n if n >= 5 => tally.award(10, "Adequate regional coverage"),
        _ => {}
    }
}

fn expertise_fit(tally: &mut Tally, requirements: &Requirements, provider: &Provider) {
    if requirements.technical_expertise != TechnicalExpertise::Beginner {
        return;
    }

    match provider.setup_complexity {
        SetupComplexity::Easy => tally.award(15, "Beginner-friendly setup process"),
        SetupComplexity::Medium => {
            tally.points += 8;
            tally.warn("Moderate setup complexity for beginners");
        }
        SetupComplexity::Hard => tally.warn("Complex setup may be challenging"),
    }
}

fn compliance_fit(tally: &mut Tally, requirements: &Requirements, provider: &Provider) {
    let required = &requirements.compliance_requirements;
    if required.is_empty() {
        return;
    }

    let matched = required
        .iter()
        .filter(|standard| provider.supports_compliance(standard))
        .count();

    if matched == required.len() {
        tally.award(15, "Meets all compliance requirements");
    } else if matched > 0 {
        tally.award(
            10,
            format!("Meets {}/{} compliance requirements", matched, required.len()),
        );
    } else {
        tally.warn("May not meet compliance requirements");
    }
}

fn support_fit(tally: &mut Tally, requirements: &Requirements, provider: &Provider) {
    if requirements.support_importance != SupportImportance::High {
        return;
    }

    match provider.support_quality {
        SupportQuality::Excellent => tally.award(10, "Excellent support quality"),
        SupportQuality::Good => tally.award(5, "Good support available"),
        SupportQuality::Basic => {}
    }
}
