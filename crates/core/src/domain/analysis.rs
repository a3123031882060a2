use crate::catalog::Opportunity;
use crate::domain::RiskLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskDistribution {
    pub fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::High => self.high += 1,
        }
    }

    pub fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }

    /// Share of holdings in `level`; 0 for an empty distribution.
    pub fn share(&self, level: RiskLevel) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(level) as f64 / total as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performer {
    pub id: Uuid,
    pub name: String,
    pub current_roi: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioStats {
    pub total_count: usize,
    pub total_value: f64,
    pub total_initial_amount: f64,
    /// Value-weighted return on the initial capital (fraction).
    pub total_roi: f64,
    /// Mean of each holding's own ROI (fraction).
    pub average_roi: f64,
    pub active_count: usize,
    pub best_performer: Option<Performer>,
    pub worst_performer: Option<Performer>,
    pub sector_distribution: BTreeMap<String, usize>,
    pub risk_distribution: RiskDistribution,
}

impl PortfolioStats {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    pub fn sector_count(&self) -> usize {
        self.sector_distribution.len()
    }

    /// Largest sector by holdings; ties go to the alphabetically first label.
    pub fn dominant_sector(&self) -> Option<(&str, usize)> {
        self.sector_distribution
            .iter()
            .fold(None::<(&str, usize)>, |best, (sector, &count)| match best {
                Some((_, c)) if c >= count => best,
                _ => Some((sector.as_str(), count)),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum Finding {
    StartInvesting,
    ExcellentPerformance { average_roi_pct: f64 },
    WeakPerformance { average_roi_pct: f64 },
    LimitedDiversification { sector_count: usize },
    ExcellentDiversification { sector_count: usize },
    HighRiskConcentration { high_risk_share: f64 },
    ConservativePortfolio { high_risk_share: f64 },
    StandoutInvestment { name: String, roi_pct: f64 },
}

impl Finding {
    pub fn tone(&self) -> Tone {
        match self {
            Self::StartInvesting | Self::ConservativePortfolio { .. } => Tone::Info,
            Self::ExcellentPerformance { .. }
            | Self::ExcellentDiversification { .. }
            | Self::StandoutInvestment { .. } => Tone::Success,
            Self::WeakPerformance { .. } | Self::LimitedDiversification { .. } => Tone::Warning,
            Self::HighRiskConcentration { .. } => Tone::Danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub tone: Tone,
    #[serde(flatten)]
    pub finding: Finding,
}

impl From<Finding> for Insight {
    fn from(finding: Finding) -> Self {
        Self {
            tone: finding.tone(),
            finding,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Diversify { sector_count: usize },
    Rebalance { high_risk_share: f64 },
    PursueGrowth { high_risk_share: f64 },
    ImprovePerformance { average_roi_pct: f64 },
    GrowPortfolio { total_value: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRecommendation {
    pub priority: Priority,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Alert {
    RiskConcentration { bucket: RiskLevel, share: f64 },
    SectorConcentration { sector: String, share: f64 },
    NegativeReturns { average_roi_pct: f64 },
    InactiveHoldings { inactive_share: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub severity: Severity,
    #[serde(flatten)]
    pub alert: Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchReason {
    Diversification,
    Growth,
    RiskReduction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityMatch {
    pub reason: MatchReason,
    pub priority: Priority,
    pub opportunity: Opportunity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAnalysis {
    pub overall_score: u8,
    pub risk_score: u8,
    pub diversification_score: u8,
    pub performance_score: u8,
    pub insights: Vec<Insight>,
    pub recommendations: Vec<PortfolioRecommendation>,
    pub warnings: Vec<Warning>,
    pub opportunities: Vec<OpportunityMatch>,
}
