//! Portfolio analytics: aggregate holdings into [`PortfolioStats`], then derive
//! scores, insights, action recommendations, warnings and opportunity matches.

pub mod advice;
pub mod ledger;
pub mod opportunities;
pub mod scores;
pub mod stats;

use crate::catalog::Catalog;
use crate::domain::analysis::{PortfolioAnalysis, PortfolioStats};
use crate::domain::investment::Investment;

pub use ledger::{InvestmentUpdate, Portfolio};
pub use stats::compute_stats;

pub fn analyze_stats(stats: &PortfolioStats, catalog: &Catalog) -> PortfolioAnalysis {
    let analysis = PortfolioAnalysis {
        overall_score: scores::overall_score(stats),
        risk_score: scores::risk_score(stats),
        diversification_score: scores::diversification_score(stats),
        performance_score: scores::performance_score(stats),
        insights: advice::insights(stats),
        recommendations: advice::recommendations(stats),
        warnings: advice::warnings(stats),
        opportunities: opportunities::match_opportunities(stats, catalog),
    };

    tracing::debug!(
        holdings = stats.total_count,
        overall = analysis.overall_score,
        risk = analysis.risk_score,
        diversification = analysis.diversification_score,
        performance = analysis.performance_score,
        warnings = analysis.warnings.len(),
        "analyzed portfolio"
    );

    analysis
}

/// Analyze a snapshot of holdings. Callers own the snapshot; the slice is not
/// re-read after stats are computed.
pub fn analyze_portfolio(catalog: &Catalog, investments: &[Investment]) -> PortfolioAnalysis {
    analyze_stats(&compute_stats(investments), catalog)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::contract::implied_roi;
    use crate::domain::investment::{Investment, InvestmentStatus};
    use crate::domain::RiskLevel;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    pub fn holding(
        name: &str,
        sector: Option<&str>,
        initial_amount: f64,
        current_value: f64,
        risk_level: RiskLevel,
    ) -> Investment {
        Investment {
            id: Uuid::new_v4(),
            name: name.to_string(),
            sector: sector.map(str::to_string),
            initial_amount,
            current_value,
            current_roi: implied_roi(initial_amount, current_value),
            risk_level,
            risk_label: Some(risk_level.to_string()),
            status: InvestmentStatus::Active,
            timeline: None,
            region: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }
}
