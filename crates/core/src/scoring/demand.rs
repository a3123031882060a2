use crate::catalog::{AudienceProfile, ProjectArchetype, Region};
use crate::error::ScoringError;
use crate::scoring::round_to;

/// Expected demand: visitor and local terms, each scaled by the audience weight.
pub fn expected_demand(
    region: &Region,
    archetype: &ProjectArchetype,
    audience: &AudienceProfile,
) -> i64 {
    let visitors = archetype.visitor_weight * region.visitors as f64 * audience.weight;
    let locals = archetype.local_weight * region.population as f64 * audience.weight;
    (visitors + locals).round() as i64
}

/// Inverse bureaucratic friction, rounded to 3 decimals.
pub fn governance_factor(archetype: &ProjectArchetype) -> Result<f64, ScoringError> {
    let burden = archetype.permit_burden();
    if burden == 0 {
        return Err(ScoringError::DegenerateArchetype {
            id: archetype.id.clone(),
            field: "permits_required * avg_approval_days",
        });
    }
    Ok(round_to(1.0 / burden as f64, 3))
}
