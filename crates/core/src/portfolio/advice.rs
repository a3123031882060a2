use crate::domain::analysis::{
    Action, Alert, Finding, Insight, PortfolioRecommendation, PortfolioStats, Priority, Severity,
    Warning,
};
use crate::domain::RiskLevel;
use crate::portfolio::scores::pct;
use crate::weights::*;

pub fn insights(stats: &PortfolioStats) -> Vec<Insight> {
    if stats.is_empty() {
        return vec![Finding::StartInvesting.into()];
    }

    let mut out: Vec<Insight> = Vec::new();

    let avg_roi = pct(stats.average_roi);
    if avg_roi > INSIGHT_EXCELLENT_AVG_ROI_PCT {
        out.push(Finding::ExcellentPerformance { average_roi_pct: avg_roi }.into());
    } else if avg_roi < INSIGHT_WEAK_AVG_ROI_PCT {
        out.push(Finding::WeakPerformance { average_roi_pct: avg_roi }.into());
    }

    let sectors = stats.sector_count();
    if sectors <= INSIGHT_LIMITED_SECTORS {
        out.push(Finding::LimitedDiversification { sector_count: sectors }.into());
    } else if sectors >= INSIGHT_BROAD_SECTORS {
        out.push(Finding::ExcellentDiversification { sector_count: sectors }.into());
    }

    let risk = &stats.risk_distribution;
    let high_share = risk.share(RiskLevel::High);
    if high_share > INSIGHT_HIGH_RISK_DANGER_SHARE {
        out.push(Finding::HighRiskConcentration { high_risk_share: high_share }.into());
    } else if high_share < INSIGHT_CONSERVATIVE_SHARE && risk.low + risk.medium > 0 {
        out.push(Finding::ConservativePortfolio { high_risk_share: high_share }.into());
    }

    if let Some(best) = &stats.best_performer {
        let roi_pct = pct(best.current_roi);
        if roi_pct > INSIGHT_STANDOUT_ROI_PCT {
            out.push(
                Finding::StandoutInvestment {
                    name: best.name.clone(),
                    roi_pct,
                }
                .into(),
            );
        }
    }

    out
}

/// Action suggestions, ordered by priority (stable within a priority).
pub fn recommendations(stats: &PortfolioStats) -> Vec<PortfolioRecommendation> {
    if stats.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut push = |priority, action| out.push(PortfolioRecommendation { priority, action });

    let sectors = stats.sector_count();
    if sectors < ACTION_DIVERSIFY_BELOW_SECTORS {
        push(Priority::High, Action::Diversify { sector_count: sectors });
    }

    let high_share = stats.risk_distribution.share(RiskLevel::High);
    if high_share > ACTION_REBALANCE_HIGH_SHARE {
        push(Priority::High, Action::Rebalance { high_risk_share: high_share });
    } else if high_share < ACTION_GROWTH_HIGH_SHARE {
        push(Priority::Medium, Action::PursueGrowth { high_risk_share: high_share });
    }

    let avg_roi = pct(stats.average_roi);
    if avg_roi < ACTION_IMPROVE_AVG_ROI_PCT {
        push(Priority::Medium, Action::ImprovePerformance { average_roi_pct: avg_roi });
    }

    if stats.total_value < ACTION_GROW_BELOW_VALUE {
        push(Priority::Low, Action::GrowPortfolio { total_value: stats.total_value });
    }

    out.sort_by_key(|r| r.priority);
    out
}

pub fn warnings(stats: &PortfolioStats) -> Vec<Warning> {
    if stats.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let total = stats.total_count as f64;

    for bucket in [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low] {
        let share = stats.risk_distribution.share(bucket);
        if share > WARN_RISK_BUCKET_SHARE {
            out.push(Warning {
                severity: if bucket == RiskLevel::High {
                    Severity::High
                } else {
                    Severity::Medium
                },
                alert: Alert::RiskConcentration { bucket, share },
            });
        }
    }

    if let Some((sector, count)) = stats.dominant_sector() {
        let share = count as f64 / total;
        if share > WARN_SECTOR_SHARE {
            out.push(Warning {
                severity: Severity::High,
                alert: Alert::SectorConcentration {
                    sector: sector.to_string(),
                    share,
                },
            });
        }
    }

    if stats.average_roi < 0.0 {
        out.push(Warning {
            severity: Severity::High,
            alert: Alert::NegativeReturns {
                average_roi_pct: pct(stats.average_roi),
            },
        });
    }

    let inactive_share = (stats.total_count - stats.active_count) as f64 / total;
    if inactive_share > WARN_INACTIVE_SHARE {
        out.push(Warning {
            severity: Severity::Medium,
            alert: Alert::InactiveHoldings { inactive_share },
        });
    }

    out
}
