use crate::catalog::{AudienceProfile, ProjectArchetype, Region};
use crate::domain::recommendation::{Category, Recommendation, RiskFinding};
use crate::domain::RiskLevel;
use crate::weights::{
    IAI_SUCCESS_MIN, IAI_WARNING_MIN, PERMIT_COMPLEXITY_THRESHOLD, SEASONAL_RISK_THRESHOLD,
    SS_SUCCESS_MIN, SS_WARNING_MIN, TOURISM_DEPENDENCY_THRESHOLD,
};

pub const SEASONAL_RISK: &str = "seasonal risk";
pub const PERMIT_COMPLEXITY: &str = "permit complexity";
pub const TOURISM_DEPENDENCY: &str = "tourism dependency";

/// Every matching rule fires; an empty list is a valid result.
pub fn identify_risks(
    archetype: &ProjectArchetype,
    audience: &AudienceProfile,
) -> Vec<RiskFinding> {
    let mut out = Vec::new();

    if archetype.seasonality_risk > SEASONAL_RISK_THRESHOLD {
        out.push(RiskFinding {
            name: SEASONAL_RISK.to_string(),
            level: RiskLevel::High,
            description: format!(
                "{} revenue swings with the season (seasonality risk {:.0}%).",
                archetype.name,
                archetype.seasonality_risk * 100.0
            ),
        });
    }

    if archetype.permits_required > PERMIT_COMPLEXITY_THRESHOLD {
        out.push(RiskFinding {
            name: PERMIT_COMPLEXITY.to_string(),
            level: RiskLevel::Medium,
            description: format!(
                "Requires {} permits at about {} days each; expect a long licensing process.",
                archetype.permits_required, archetype.avg_approval_days
            ),
        });
    }

    if audience.seasonality > TOURISM_DEPENDENCY_THRESHOLD {
        out.push(RiskFinding {
            name: TOURISM_DEPENDENCY.to_string(),
            level: RiskLevel::Medium,
            description: format!(
                "{} demand is strongly seasonal ({:.0}%); off-season revenue may not cover costs.",
                audience.name,
                audience.seasonality * 100.0
            ),
        });
    }

    out
}

/// Attractiveness tier, sustainability tier, then the region's informational notes.
pub fn generate_recommendations(iai: u8, ss: f64, region: &Region) -> Vec<Recommendation> {
    let mut out = Vec::with_capacity(2 + region.advisories.len());

    out.push(if iai >= IAI_SUCCESS_MIN {
        Recommendation::new(
            Category::Success,
            format!("Attractiveness is high (IAI {iai}); the project fits this market well."),
        )
    } else if iai >= IAI_WARNING_MIN {
        Recommendation::new(
            Category::Warning,
            format!(
                "Attractiveness is moderate (IAI {iai}); review positioning and audience first."
            ),
        )
    } else {
        Recommendation::new(
            Category::Error,
            format!("Attractiveness is low (IAI {iai}); demand here is unlikely to be enough."),
        )
    });

    out.push(if ss >= SS_SUCCESS_MIN {
        Recommendation::new(
            Category::Success,
            format!(
                "Sustainability is strong (SS {ss:.2}); return outweighs risk and overhead."
            ),
        )
    } else if ss >= SS_WARNING_MIN {
        Recommendation::new(
            Category::Warning,
            format!(
                "Sustainability is fair (SS {ss:.2}); keep operating costs and approval delays low."
            ),
        )
    } else {
        Recommendation::new(
            Category::Error,
            format!(
                "Sustainability is weak (SS {ss:.2}); risk, cost and red tape outweigh return."
            ),
        )
    });

    out.extend(
        region
            .advisories
            .iter()
            .map(|note| Recommendation::new(Category::Info, note.clone())),
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn hotels_for_tourists_fire_permit_and_tourism_rules() {
        let c = Catalog::builtin();
        let risks = identify_risks(c.archetype("hotels").unwrap(), c.audience("tourists").unwrap());
        let names: Vec<_> = risks.iter().map(|r| r.name.as_str()).collect();
        // seasonality_risk of exactly 0.3 does not exceed the threshold.
        assert_eq!(names, vec![PERMIT_COMPLEXITY, TOURISM_DEPENDENCY]);
        assert!(risks.iter().all(|r| r.level == RiskLevel::Medium));
    }

    #[test]
    fn all_rules_fire_independently() {
        let c = Catalog::builtin();
        let risks = identify_risks(
            c.archetype("eco_lodges").unwrap(),
            c.audience("tourists").unwrap(),
        );
        let names: Vec<_> = risks.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec![SEASONAL_RISK, PERMIT_COMPLEXITY, TOURISM_DEPENDENCY]);
        assert_eq!(risks[0].level, RiskLevel::High);
    }

    #[test]
    fn no_matching_rule_yields_empty_list() {
        let c = Catalog::builtin();
        let risks = identify_risks(c.archetype("retail").unwrap(), c.audience("locals").unwrap());
        assert!(risks.is_empty());
    }

    #[test]
    fn tiers_follow_thresholds() {
        let c = Catalog::builtin();
        let muscat = c.region("muscat").unwrap();

        let cats = |iai, ss| -> Vec<Category> {
            generate_recommendations(iai, ss, muscat)
                .into_iter()
                .map(|r| r.category)
                .collect()
        };

        assert_eq!(cats(80, 2.0), vec![Category::Success, Category::Success]);
        assert_eq!(cats(79, 1.99), vec![Category::Warning, Category::Warning]);
        assert_eq!(cats(60, 1.0), vec![Category::Warning, Category::Warning]);
        assert_eq!(cats(59, 0.99), vec![Category::Error, Category::Error]);
    }

    #[test]
    fn region_notes_are_appended_after_tiers() {
        let c = Catalog::builtin();
        let recs = generate_recommendations(83, 0.26, c.region("salalah").unwrap());
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].category, Category::Success);
        assert_eq!(recs[1].category, Category::Error);
        assert_eq!(recs[2].category, Category::Info);
        assert!(recs[2].text.contains("Khareef"));
    }
}
