use crate::domain::recommendation::{Recommendation, RiskFinding};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRequest {
    pub region_id: String,
    pub archetype_id: String,
    pub audience_id: String,
    pub investment_amount: f64,
}

impl ScoringRequest {
    pub fn new(
        region_id: impl Into<String>,
        archetype_id: impl Into<String>,
        audience_id: impl Into<String>,
        investment_amount: f64,
    ) -> Self {
        Self {
            region_id: region_id.into(),
            archetype_id: archetype_id.into(),
            audience_id: audience_id.into(),
            investment_amount,
        }
    }
}

/// Fully computed project score. Consumers must not re-derive the numeric fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub demand: i64,
    pub iai: u8,
    pub ss: f64,
    pub risks: Vec<RiskFinding>,
    pub recommendations: Vec<Recommendation>,
}
