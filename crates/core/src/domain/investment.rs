use crate::domain::RiskLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvestmentStatus {
    Active,
    Paused,
    Completed,
    Other(String),
}

/// Grouping key for a sector label: trimmed and lowercased, so "Tourism"
/// and " tourism" land in the same bucket.
pub fn sector_key(label: &str) -> String {
    label.trim().to_lowercase()
}

impl InvestmentStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Default for InvestmentStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl From<String> for InvestmentStatus {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "paused" => Self::Paused,
            "completed" => Self::Completed,
            _ => Self::Other(s.trim().to_string()),
        }
    }
}

impl From<InvestmentStatus> for String {
    fn from(status: InvestmentStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for InvestmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("active"),
            Self::Paused => f.write_str("paused"),
            Self::Completed => f.write_str("completed"),
            Self::Other(s) => f.write_str(s),
        }
    }
}

/// A validated portfolio holding. Build one through
/// [`InvestmentInput::validate_and_into_investment`](crate::domain::contract::InvestmentInput).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: Uuid,
    pub name: String,
    pub sector: Option<String>,
    pub initial_amount: f64,
    pub current_value: f64,
    /// Fraction, may be negative.
    pub current_roi: f64,
    pub risk_level: RiskLevel,
    /// Label as entered by the holder; display only.
    pub risk_label: Option<String>,
    pub status: InvestmentStatus,
    pub timeline: Option<String>,
    pub region: Option<String>,
    pub created_at: DateTime<Utc>,
}
