//! Opportunity matching: diff the portfolio's sector coverage against the
//! opportunity catalog.
//!
//! Ordering is deterministic. Within a sector the highest expected ROI wins and
//! ties go to the entry listed first in the catalog; every other walk follows
//! catalog order.

use crate::catalog::{Catalog, Opportunity};
use crate::domain::analysis::{MatchReason, OpportunityMatch, PortfolioStats, Priority};
use crate::domain::investment::sector_key;
use crate::domain::RiskLevel;
use crate::weights::{
    GROWTH_MIN_EXPECTED_ROI, MAX_DIVERSIFICATION_SECTORS, MAX_OPPORTUNITIES,
    RISK_REDUCTION_HIGH_SHARE,
};
use std::collections::BTreeSet;

struct Picks<'a> {
    seen: BTreeSet<&'a str>,
    out: Vec<OpportunityMatch>,
}

impl<'a> Picks<'a> {
    fn is_full(&self) -> bool {
        self.out.len() >= MAX_OPPORTUNITIES
    }

    fn push(&mut self, opportunity: &'a Opportunity, reason: MatchReason, priority: Priority) {
        if self.is_full() || !self.seen.insert(opportunity.id.as_str()) {
            return;
        }
        self.out.push(OpportunityMatch {
            reason,
            priority,
            opportunity: opportunity.clone(),
        });
    }
}

pub fn match_opportunities(stats: &PortfolioStats, catalog: &Catalog) -> Vec<OpportunityMatch> {
    let held: BTreeSet<String> = stats
        .sector_distribution
        .keys()
        .map(|s| sector_key(s))
        .collect();
    let is_held = |sector: &str| held.contains(&sector_key(sector));

    let mut picks = Picks {
        seen: BTreeSet::new(),
        out: Vec::with_capacity(MAX_OPPORTUNITIES),
    };

    let unheld = catalog
        .sectors()
        .into_iter()
        .filter(|s| !is_held(*s))
        .take(MAX_DIVERSIFICATION_SECTORS);
    for sector in unheld {
        if let Some(best) = best_in_sector(catalog, sector) {
            picks.push(best, MatchReason::Diversification, Priority::Medium);
        }
    }

    for opp in &catalog.opportunities {
        if is_held(&opp.sector) && opp.expected_roi > GROWTH_MIN_EXPECTED_ROI {
            picks.push(opp, MatchReason::Growth, Priority::High);
        }
    }

    if stats.risk_distribution.share(RiskLevel::High) > RISK_REDUCTION_HIGH_SHARE {
        for opp in &catalog.opportunities {
            if opp.risk_level == RiskLevel::Low {
                picks.push(opp, MatchReason::RiskReduction, Priority::High);
            }
        }
    }

    tracing::debug!(
        held_sectors = held.len(),
        matched = picks.out.len(),
        "matched opportunities"
    );

    picks.out
}

fn best_in_sector<'a>(catalog: &'a Catalog, sector: &str) -> Option<&'a Opportunity> {
    catalog
        .opportunities
        .iter()
        .filter(|o| o.sector == sector)
        .fold(None, |best: Option<&'a Opportunity>, o| match best {
            Some(b) if b.expected_roi >= o.expected_roi => Some(b),
            _ => Some(o),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::stats::compute_stats;
    use crate::portfolio::test_support::holding;

    fn ids(matches: &[OpportunityMatch]) -> Vec<&str> {
        matches.iter().map(|m| m.opportunity.id.as_str()).collect()
    }

    fn opp(id: &str, sector: &str, roi: f64, risk: RiskLevel) -> Opportunity {
        Opportunity {
            id: id.to_string(),
            sector: sector.to_string(),
            title: id.to_string(),
            region_id: None,
            expected_roi: roi,
            risk_level: risk,
            min_investment: 1_000.0,
        }
    }

    fn synthetic_catalog(opportunities: Vec<Opportunity>) -> Catalog {
        Catalog {
            regions: Vec::new(),
            archetypes: Vec::new(),
            audiences: Vec::new(),
            opportunities,
        }
    }

    #[test]
    fn empty_portfolio_gets_two_diversification_picks() {
        let out = match_opportunities(&compute_stats(&[]), &Catalog::builtin());
        assert_eq!(ids(&out), vec!["tour-khareef-camp", "food-seafood-grill"]);
        assert!(out.iter().all(|m| m.reason == MatchReason::Diversification));
    }

    #[test]
    fn diversification_then_growth_in_held_sectors() {
        let stats = compute_stats(&[holding("camp", Some("Tourism"), 1.0, 1.0, RiskLevel::Low)]);
        let out = match_opportunities(&stats, &Catalog::builtin());
        assert_eq!(
            ids(&out),
            vec![
                "food-seafood-grill",
                "re-serviced-apartments",
                "tour-khareef-camp",
                "tour-heritage-inn",
            ]
        );
        assert_eq!(out[2].reason, MatchReason::Growth);
        assert_eq!(out[2].priority, Priority::High);
    }

    #[test]
    fn ties_in_sector_go_to_first_catalog_entry() {
        let catalog = synthetic_catalog(vec![
            opp("first", "tourism", 0.2, RiskLevel::Medium),
            opp("second", "tourism", 0.2, RiskLevel::Medium),
            opp("lower", "tourism", 0.1, RiskLevel::Medium),
        ]);
        let out = match_opportunities(&compute_stats(&[]), &catalog);
        assert_eq!(ids(&out), vec!["first"]);
    }

    #[test]
    fn highest_roi_in_sector_wins_regardless_of_position() {
        let catalog = synthetic_catalog(vec![
            opp("low", "x", 0.1, RiskLevel::Medium),
            opp("high", "x", 0.3, RiskLevel::Medium),
        ]);
        let out = match_opportunities(&compute_stats(&[]), &catalog);
        assert_eq!(ids(&out), vec!["high"]);
        assert_eq!(out[0].reason, MatchReason::Diversification);
    }

    #[test]
    fn high_risk_portfolio_gets_risk_reduction_picks() {
        let catalog = synthetic_catalog(vec![
            opp("t-hot", "tourism", 0.3, RiskLevel::High),
            opp("t-safe", "tourism", 0.05, RiskLevel::Low),
            opp("r-safe", "retail", 0.08, RiskLevel::Low),
            opp("r-mid", "retail", 0.09, RiskLevel::Medium),
        ]);
        let stats = compute_stats(&[
            holding("a", Some("tourism"), 1.0, 1.0, RiskLevel::High),
            holding("b", Some("retail"), 1.0, 1.0, RiskLevel::High),
        ]);
        let out = match_opportunities(&stats, &catalog);
        assert_eq!(ids(&out), vec!["t-hot", "t-safe", "r-safe"]);
        assert_eq!(out[1].reason, MatchReason::RiskReduction);
    }

    #[test]
    fn never_repeats_and_never_exceeds_cap() {
        let catalog = Catalog::builtin();
        let sector_sets: [&[&str]; 4] = [
            &[],
            &["tourism"],
            &["tourism", "technology", "food_service"],
            &["retail", "agriculture", "logistics", "real_estate", "renewable_energy"],
        ];
        for sectors in sector_sets {
            for level in [RiskLevel::Low, RiskLevel::High] {
                let investments: Vec<_> = sectors
                    .iter()
                    .map(|s| holding(s, Some(*s), 1.0, 1.0, level))
                    .collect();
                let out = match_opportunities(&compute_stats(&investments), &catalog);
                assert!(out.len() <= MAX_OPPORTUNITIES);
                let unique: BTreeSet<_> = ids(&out).into_iter().collect();
                assert_eq!(unique.len(), out.len());
            }
        }
    }
}
