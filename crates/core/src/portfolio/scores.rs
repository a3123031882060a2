use crate::domain::analysis::PortfolioStats;
use crate::domain::RiskLevel;
use crate::weights::*;

fn clamp_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

/// First tier whose threshold `value` strictly exceeds.
fn tier_bonus(value: f64, tiers: &[(f64, f64)]) -> Option<f64> {
    tiers
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map(|(_, bonus)| *bonus)
}

pub(crate) fn pct(fraction: f64) -> f64 {
    fraction * 100.0
}

pub fn overall_score(stats: &PortfolioStats) -> u8 {
    if stats.is_empty() {
        return 0;
    }
    let total = stats.total_count as f64;
    let mut score = OVERALL_BASE;

    let avg_roi = pct(stats.average_roi);
    score += match tier_bonus(avg_roi, &OVERALL_ROI_TIERS) {
        Some(bonus) => bonus,
        None if avg_roi < 0.0 => OVERALL_NEGATIVE_ROI_PENALTY,
        None => 0.0,
    };

    let sectors = stats.sector_count();
    score += OVERALL_SECTOR_TIERS
        .iter()
        .find(|(min, _)| sectors >= *min)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(OVERALL_SINGLE_SECTOR_PENALTY);

    let risk = &stats.risk_distribution;
    let balance = (risk.low as f64 + risk.medium as f64 * 0.5) / total;
    let closeness = 1.0
        - ((balance - OVERALL_TARGET_RISK_BALANCE).abs() / OVERALL_TARGET_RISK_BALANCE);
    score += closeness.clamp(0.0, 1.0) * OVERALL_RISK_BALANCE_MAX;

    score += tier_bonus(stats.total_value, &OVERALL_VALUE_TIERS).unwrap_or(0.0);

    score += (stats.active_count as f64 / total) * OVERALL_ACTIVE_RATIO_MAX;

    clamp_score(score)
}

/// Bucket-weighted risk; higher means riskier. Neutral for an empty portfolio.
pub fn risk_score(stats: &PortfolioStats) -> u8 {
    if stats.is_empty() {
        return RISK_SCORE_NEUTRAL;
    }
    let risk = &stats.risk_distribution;
    let weighted = risk.count(RiskLevel::High) as f64 * RISK_WEIGHT_HIGH
        + risk.count(RiskLevel::Medium) as f64 * RISK_WEIGHT_MEDIUM
        + risk.count(RiskLevel::Low) as f64 * RISK_WEIGHT_LOW;
    clamp_score(weighted / stats.total_count as f64)
}

pub fn diversification_score(stats: &PortfolioStats) -> u8 {
    let Some((_, largest)) = stats.dominant_sector() else {
        return 0;
    };
    let sectors = stats.sector_count();
    let mut score = (sectors as f64 / ASSUMED_MAX_SECTORS).min(1.0) * DIVERSIFICATION_SPREAD_MAX;

    let largest_share = largest as f64 / stats.total_count as f64;
    score += if largest_share < DIVERSIFICATION_BROAD_SHARE {
        DIVERSIFICATION_BROAD_BONUS
    } else if largest_share < DIVERSIFICATION_MODERATE_SHARE {
        DIVERSIFICATION_MODERATE_BONUS
    } else {
        DIVERSIFICATION_CONCENTRATED_PENALTY
    };

    if sectors >= DIVERSIFICATION_MANY_SECTORS {
        score += DIVERSIFICATION_MANY_SECTORS_BONUS;
    }

    clamp_score(score)
}

pub fn performance_score(stats: &PortfolioStats) -> u8 {
    if stats.is_empty() {
        return 0;
    }
    let mut score = PERFORMANCE_BASE;

    let avg_roi = pct(stats.average_roi);
    score += match tier_bonus(avg_roi, &PERFORMANCE_AVG_ROI_TIERS) {
        Some(bonus) => bonus,
        None if avg_roi < 0.0 => PERFORMANCE_NEGATIVE_AVG_ROI_PENALTY,
        None => 0.0,
    };

    let total_roi = pct(stats.total_roi);
    score += match tier_bonus(total_roi, &PERFORMANCE_TOTAL_ROI_TIERS) {
        Some(bonus) => bonus,
        None if total_roi < PERFORMANCE_TOTAL_ROI_LOSS_PCT => PERFORMANCE_TOTAL_ROI_LOSS_PENALTY,
        None => 0.0,
    };

    if let (Some(best), Some(worst)) = (&stats.best_performer, &stats.worst_performer) {
        if pct(best.current_roi - worst.current_roi) > PERFORMANCE_SPREAD_PCT {
            score += PERFORMANCE_SPREAD_BONUS;
        }
    }

    clamp_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::stats::compute_stats;
    use crate::portfolio::test_support::holding;

    #[test]
    fn empty_portfolio_scores() {
        let stats = compute_stats(&[]);
        assert_eq!(overall_score(&stats), 0);
        assert_eq!(risk_score(&stats), 50);
        assert_eq!(diversification_score(&stats), 0);
        assert_eq!(performance_score(&stats), 0);
    }

    #[test]
    fn risk_score_weights_buckets() {
        let stats = compute_stats(&[
            holding("a", Some("x"), 1.0, 1.0, RiskLevel::High),
            holding("b", Some("x"), 1.0, 1.0, RiskLevel::Medium),
            holding("c", Some("x"), 1.0, 1.0, RiskLevel::Low),
            holding("d", Some("x"), 1.0, 1.0, RiskLevel::Low),
        ]);
        // (100 + 50 + 10 + 10) / 4 = 42.5
        assert_eq!(risk_score(&stats), 43);

        let all_high = compute_stats(&[holding("a", Some("x"), 1.0, 1.0, RiskLevel::High)]);
        assert_eq!(risk_score(&all_high), 100);
    }

    #[test]
    fn diversification_rewards_spread() {
        let concentrated = compute_stats(&[
            holding("a", Some("tourism"), 1.0, 1.0, RiskLevel::Low),
            holding("b", Some("tourism"), 1.0, 1.0, RiskLevel::Low),
        ]);
        // 1/8 * 70 - 15 = -6.25
        assert_eq!(diversification_score(&concentrated), 0);

        let spread = compute_stats(&[
            holding("a", Some("tourism"), 1.0, 1.0, RiskLevel::Low),
            holding("b", Some("retail"), 1.0, 1.0, RiskLevel::Low),
            holding("c", Some("technology"), 1.0, 1.0, RiskLevel::Low),
            holding("d", Some("logistics"), 1.0, 1.0, RiskLevel::Low),
        ]);
        // 4/8 * 70 + 20 + 10 = 65
        assert_eq!(diversification_score(&spread), 65);
    }

    #[test]
    fn overall_score_for_balanced_profitable_portfolio() {
        let stats = compute_stats(&[
            holding("a", Some("tourism"), 40_000.0, 48_000.0, RiskLevel::Low),
            holding("b", Some("retail"), 30_000.0, 36_000.0, RiskLevel::Medium),
            holding("c", Some("technology"), 20_000.0, 24_000.0, RiskLevel::Low),
            holding("d", Some("logistics"), 20_000.0, 24_000.0, RiskLevel::High),
        ]);
        // base 50, avg ROI 20% +15, 4 sectors +12,
        // balance (2 + 0.5) / 4 = 0.625 -> (1 - 0.075 / 0.7) * 10 ~ 8.93,
        // value 132k +7, all active +5 => ~97.9
        assert_eq!(overall_score(&stats), 98);
    }

    #[test]
    fn overall_score_penalizes_losses_and_single_sector() {
        let stats = compute_stats(&[
            holding("a", Some("tourism"), 10_000.0, 8_000.0, RiskLevel::High),
        ]);
        // 50 - 10 - 5 + 0 (balance 0) + 0 + 5 = 40
        assert_eq!(overall_score(&stats), 40);
    }

    #[test]
    fn performance_score_tiers_and_spread() {
        let stats = compute_stats(&[
            holding("a", Some("tourism"), 10_000.0, 13_000.0, RiskLevel::Low),
            holding("b", Some("retail"), 10_000.0, 10_500.0, RiskLevel::Low),
        ]);
        // avg 17.5% +15, total 17.5% +10, spread 25 points +5 => 80
        assert_eq!(performance_score(&stats), 80);

        let losing = compute_stats(&[holding(
            "a",
            Some("tourism"),
            10_000.0,
            9_000.0,
            RiskLevel::Low,
        )]);
        // 50 - 10 - 15 = 25
        assert_eq!(performance_score(&losing), 25);
    }

    #[test]
    fn scores_stay_in_bounds_for_extreme_inputs() {
        let stats = compute_stats(&[
            holding("moon", Some("a"), 1.0, 1_000_000.0, RiskLevel::Low),
            holding("crash", Some("b"), 1_000_000.0, 0.0, RiskLevel::High),
        ]);
        for score in [
            overall_score(&stats),
            risk_score(&stats),
            diversification_score(&stats),
            performance_score(&stats),
        ] {
            assert!(score <= 100);
        }
    }
}
