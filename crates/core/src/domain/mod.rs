pub mod analysis;
pub mod contract;
pub mod investment;
pub mod recommendation;
pub mod score;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed three-level risk scale shared by findings, holdings and opportunities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl Default for RiskLevel {
    fn default() -> Self {
        Self::Medium
    }
}

impl RiskLevel {
    /// Classify a human-readable label. Unrecognized labels land in `Medium`.
    pub fn classify(label: &str) -> Self {
        let lower = label.trim().to_lowercase();
        if lower.contains("high") || lower.contains("عالي") {
            Self::High
        } else if lower.contains("low") || lower.contains("منخفض") {
            Self::Low
        } else {
            Self::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
