//! Project scoring: demand, governance, attractiveness (IAI), sustainability
//! (SS), rule-based risks and advisory messages.
//!
//! Every function here is a pure computation over the [`Catalog`] and the
//! request; identical inputs give identical outputs.

pub mod advisory;
pub mod demand;
pub mod indices;

use crate::catalog::Catalog;
use crate::domain::recommendation::{Recommendation, RiskFinding};
use crate::domain::score::{ScoreResult, ScoringRequest};
use crate::error::ScoringError;

pub use advisory::{generate_recommendations, identify_risks};
pub use demand::{expected_demand, governance_factor};
pub use indices::{attractiveness_index, sustainability_score};

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

pub fn estimate_demand(
    catalog: &Catalog,
    region_id: &str,
    archetype_id: &str,
    audience_id: &str,
) -> Result<i64, ScoringError> {
    Ok(expected_demand(
        catalog.region(region_id)?,
        catalog.archetype(archetype_id)?,
        catalog.audience(audience_id)?,
    ))
}

pub fn risks_for(
    catalog: &Catalog,
    archetype_id: &str,
    audience_id: &str,
) -> Result<Vec<RiskFinding>, ScoringError> {
    Ok(identify_risks(
        catalog.archetype(archetype_id)?,
        catalog.audience(audience_id)?,
    ))
}

/// `archetype_id` is resolved so that a bad id is reported even though no
/// current rule depends on the archetype.
pub fn recommendations_for(
    catalog: &Catalog,
    iai: u8,
    ss: f64,
    archetype_id: &str,
    region_id: &str,
) -> Result<Vec<Recommendation>, ScoringError> {
    catalog.archetype(archetype_id)?;
    Ok(generate_recommendations(iai, ss, catalog.region(region_id)?))
}

pub fn score_project(catalog: &Catalog, req: &ScoringRequest) -> Result<ScoreResult, ScoringError> {
    let region = catalog.region(&req.region_id)?;
    let archetype = catalog.archetype(&req.archetype_id)?;
    let audience = catalog.audience(&req.audience_id)?;

    let ss = sustainability_score(archetype, req.investment_amount)?;
    let demand = expected_demand(region, archetype, audience);
    let iai = attractiveness_index(region, archetype, audience)?;
    let risks = identify_risks(archetype, audience);
    let recommendations = generate_recommendations(iai, ss, region);

    tracing::debug!(
        region = %region.id,
        archetype = %archetype.id,
        audience = %audience.id,
        amount = req.investment_amount,
        demand,
        iai,
        ss,
        risks_len = risks.len(),
        "scored project"
    );

    Ok(ScoreResult {
        demand,
        iai,
        ss,
        risks,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> ScoringRequest {
        ScoringRequest::new("salalah", "hotels", "tourists", 100_000.0)
    }

    #[test]
    fn scenario_a_matches_reference_numbers() {
        let result = score_project(&Catalog::builtin(), &scenario_a()).unwrap();
        assert_eq!(result.demand, 72_200);
        assert_eq!(result.iai, 83);
        assert_eq!(result.ss, 0.26);
        assert_eq!(result.risks.len(), 2);
        assert_eq!(result.recommendations.len(), 3);
    }

    #[test]
    fn scenario_b_doubles_amount() {
        let catalog = Catalog::builtin();
        let a = score_project(&catalog, &scenario_a()).unwrap();
        let mut req = scenario_a();
        req.investment_amount = 200_000.0;
        let b = score_project(&catalog, &req).unwrap();

        assert_eq!(b.iai, a.iai);
        assert_eq!(b.demand, a.demand);
        assert!(b.ss > a.ss);
    }

    #[test]
    fn scoring_is_deterministic() {
        let catalog = Catalog::builtin();
        for region in ["salalah", "muscat", "nizwa", "sur", "dhofar"] {
            for archetype in [
                "hotels",
                "restaurants",
                "cafes",
                "tour_operators",
                "eco_lodges",
                "retail",
            ] {
                for audience in ["tourists", "locals", "families", "business", "youth"] {
                    let req = ScoringRequest::new(region, archetype, audience, 50_000.0);
                    let first = score_project(&catalog, &req).unwrap();
                    let second = score_project(&catalog, &req).unwrap();
                    assert_eq!(first, second);
                    assert!(first.iai <= 100);
                }
            }
        }
    }

    #[test]
    fn unknown_ids_are_configuration_errors() {
        let catalog = Catalog::builtin();
        let req = ScoringRequest::new("salalah", "casino", "tourists", 1_000.0);
        let err = score_project(&catalog, &req).unwrap_err();
        assert_eq!(err, ScoringError::UnknownArchetype("casino".to_string()));
        assert!(err.is_configuration());

        assert!(estimate_demand(&catalog, "nowhere", "hotels", "tourists").is_err());
        assert!(risks_for(&catalog, "hotels", "aliens").is_err());
        assert!(recommendations_for(&catalog, 90, 3.0, "casino", "salalah").is_err());
    }

    #[test]
    fn invalid_amount_is_not_a_configuration_error() {
        let req = ScoringRequest::new("salalah", "hotels", "tourists", 0.0);
        let err = score_project(&Catalog::builtin(), &req).unwrap_err();
        assert!(!err.is_configuration());
    }

    #[test]
    fn id_based_helpers_agree_with_score_project() {
        let catalog = Catalog::builtin();
        let result = score_project(&catalog, &scenario_a()).unwrap();
        assert_eq!(
            estimate_demand(&catalog, "salalah", "hotels", "tourists").unwrap(),
            result.demand
        );
        assert_eq!(risks_for(&catalog, "hotels", "tourists").unwrap(), result.risks);
        assert_eq!(
            recommendations_for(&catalog, result.iai, result.ss, "hotels", "salalah").unwrap(),
            result.recommendations
        );
    }
}
