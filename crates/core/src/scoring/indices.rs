use crate::catalog::{AudienceProfile, ProjectArchetype, Region};
use crate::error::ScoringError;
use crate::scoring::demand::{expected_demand, governance_factor};
use crate::scoring::round_to;
use crate::weights::{
    DAYS_PER_YEAR, DEMAND_SATURATION, GOVERNANCE_SCALE, IAI_W_DEMAND, IAI_W_GOVERNANCE,
    IAI_W_ROI, IAI_W_SEASONALITY,
};

/// Investment Attractiveness Index, clamped to 0..=100.
///
/// Independent of the investment amount.
pub fn attractiveness_index(
    region: &Region,
    archetype: &ProjectArchetype,
    audience: &AudienceProfile,
) -> Result<u8, ScoringError> {
    let demand = expected_demand(region, archetype, audience);
    let normalized_demand = (demand as f64 / DEMAND_SATURATION).min(1.0);
    let normalized_governance = governance_factor(archetype)? * GOVERNANCE_SCALE;
    let normalized_roi = archetype.avg_roi;
    let seasonality_factor = 1.0 - archetype.seasonality_risk * audience.seasonality;

    let composite = IAI_W_DEMAND * normalized_demand
        + IAI_W_GOVERNANCE * normalized_governance
        + IAI_W_ROI * normalized_roi
        + IAI_W_SEASONALITY * seasonality_factor;

    Ok((100.0 * composite).round().clamp(0.0, 100.0) as u8)
}

/// Sustainability score: expected return over seasonality, cost and regulatory drag.
/// Rounded to 2 decimals, unbounded above.
pub fn sustainability_score(
    archetype: &ProjectArchetype,
    investment_amount: f64,
) -> Result<f64, ScoringError> {
    if !(investment_amount.is_finite() && investment_amount > 0.0) {
        return Err(ScoringError::InvalidInvestmentAmount(investment_amount));
    }

    let cost = archetype.default_operating_cost / investment_amount;
    let hurdles = archetype.permit_burden() as f64 / DAYS_PER_YEAR;
    let denominator = archetype.seasonality_risk + cost + hurdles;
    if !(denominator.is_finite() && denominator > 0.0) {
        return Err(ScoringError::DegenerateArchetype {
            id: archetype.id.clone(),
            field: "seasonality_risk + cost + hurdles",
        });
    }

    Ok(round_to(archetype.avg_roi / denominator, 2))
}
