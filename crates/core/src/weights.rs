//! Fixed weights and tier thresholds used by the scorers.
//!
//! Percent thresholds are compared against ROI fractions multiplied by 100.

// Attractiveness index composition. Sum = 1.0.
pub const IAI_W_DEMAND: f64 = 0.4;
pub const IAI_W_GOVERNANCE: f64 = 0.2;
pub const IAI_W_ROI: f64 = 0.2;
pub const IAI_W_SEASONALITY: f64 = 0.2;

/// Demand at or above this saturates the demand term.
pub const DEMAND_SATURATION: f64 = 1000.0;

/// Governance factor is scaled by this before weighting.
pub const GOVERNANCE_SCALE: f64 = 100.0;

pub const DAYS_PER_YEAR: f64 = 365.0;

// Risk identifier rules.
pub const SEASONAL_RISK_THRESHOLD: f64 = 0.3;
pub const PERMIT_COMPLEXITY_THRESHOLD: u32 = 3;
pub const TOURISM_DEPENDENCY_THRESHOLD: f64 = 0.5;

// Recommendation tiers.
pub const IAI_SUCCESS_MIN: u8 = 80;
pub const IAI_WARNING_MIN: u8 = 60;
pub const SS_SUCCESS_MIN: f64 = 2.0;
pub const SS_WARNING_MIN: f64 = 1.0;

// Portfolio overall score.
pub const OVERALL_BASE: f64 = 50.0;
/// (average ROI % strictly above, bonus), first match wins.
pub const OVERALL_ROI_TIERS: [(f64, f64); 3] = [(15.0, 15.0), (10.0, 10.0), (5.0, 5.0)];
pub const OVERALL_NEGATIVE_ROI_PENALTY: f64 = -10.0;
/// (distinct sectors at least, bonus), first match wins.
pub const OVERALL_SECTOR_TIERS: [(usize, f64); 3] = [(4, 12.0), (3, 8.0), (2, 4.0)];
pub const OVERALL_SINGLE_SECTOR_PENALTY: f64 = -5.0;
/// Target share of `low + medium / 2` holdings.
pub const OVERALL_TARGET_RISK_BALANCE: f64 = 0.7;
pub const OVERALL_RISK_BALANCE_MAX: f64 = 10.0;
/// (total value strictly above, bonus), first match wins.
pub const OVERALL_VALUE_TIERS: [(f64, f64); 3] =
    [(100_000.0, 7.0), (50_000.0, 5.0), (20_000.0, 3.0)];
pub const OVERALL_ACTIVE_RATIO_MAX: f64 = 5.0;

// Portfolio risk score bucket weights.
pub const RISK_WEIGHT_HIGH: f64 = 100.0;
pub const RISK_WEIGHT_MEDIUM: f64 = 50.0;
pub const RISK_WEIGHT_LOW: f64 = 10.0;
pub const RISK_SCORE_NEUTRAL: u8 = 50;

// Diversification score.
pub const ASSUMED_MAX_SECTORS: f64 = 8.0;
pub const DIVERSIFICATION_SPREAD_MAX: f64 = 70.0;
pub const DIVERSIFICATION_BROAD_SHARE: f64 = 0.3;
pub const DIVERSIFICATION_BROAD_BONUS: f64 = 20.0;
pub const DIVERSIFICATION_MODERATE_SHARE: f64 = 0.5;
pub const DIVERSIFICATION_MODERATE_BONUS: f64 = 10.0;
pub const DIVERSIFICATION_CONCENTRATED_PENALTY: f64 = -15.0;
pub const DIVERSIFICATION_MANY_SECTORS: usize = 4;
pub const DIVERSIFICATION_MANY_SECTORS_BONUS: f64 = 10.0;

// Performance score.
pub const PERFORMANCE_BASE: f64 = 50.0;
/// (average ROI % strictly above, bonus), first match wins.
pub const PERFORMANCE_AVG_ROI_TIERS: [(f64, f64); 5] = [
    (20.0, 20.0),
    (15.0, 15.0),
    (10.0, 10.0),
    (5.0, 5.0),
    (0.0, 2.0),
];
pub const PERFORMANCE_NEGATIVE_AVG_ROI_PENALTY: f64 = -10.0;
/// (total ROI % strictly above, bonus), first match wins.
pub const PERFORMANCE_TOTAL_ROI_TIERS: [(f64, f64); 3] = [(25.0, 15.0), (15.0, 10.0), (5.0, 5.0)];
pub const PERFORMANCE_TOTAL_ROI_LOSS_PCT: f64 = -5.0;
pub const PERFORMANCE_TOTAL_ROI_LOSS_PENALTY: f64 = -15.0;
pub const PERFORMANCE_SPREAD_PCT: f64 = 20.0;
pub const PERFORMANCE_SPREAD_BONUS: f64 = 5.0;

// Insight thresholds.
pub const INSIGHT_EXCELLENT_AVG_ROI_PCT: f64 = 15.0;
pub const INSIGHT_WEAK_AVG_ROI_PCT: f64 = 5.0;
pub const INSIGHT_LIMITED_SECTORS: usize = 2;
pub const INSIGHT_BROAD_SECTORS: usize = 5;
pub const INSIGHT_HIGH_RISK_DANGER_SHARE: f64 = 0.6;
pub const INSIGHT_CONSERVATIVE_SHARE: f64 = 0.2;
pub const INSIGHT_STANDOUT_ROI_PCT: f64 = 20.0;

// Action recommendations.
pub const ACTION_DIVERSIFY_BELOW_SECTORS: usize = 3;
pub const ACTION_REBALANCE_HIGH_SHARE: f64 = 0.7;
pub const ACTION_GROWTH_HIGH_SHARE: f64 = 0.15;
pub const ACTION_IMPROVE_AVG_ROI_PCT: f64 = 8.0;
pub const ACTION_GROW_BELOW_VALUE: f64 = 20_000.0;

// Warnings.
pub const WARN_RISK_BUCKET_SHARE: f64 = 0.8;
pub const WARN_SECTOR_SHARE: f64 = 0.7;
pub const WARN_INACTIVE_SHARE: f64 = 0.3;

// Opportunity matching.
pub const MAX_OPPORTUNITIES: usize = 4;
pub const MAX_DIVERSIFICATION_SECTORS: usize = 2;
pub const GROWTH_MIN_EXPECTED_ROI: f64 = 0.15;
pub const RISK_REDUCTION_HIGH_SHARE: f64 = 0.6;

/// Sector label used when an investment has none.
pub const UNSPECIFIED_SECTOR: &str = "unspecified";
