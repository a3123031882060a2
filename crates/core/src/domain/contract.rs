use crate::domain::investment::{Investment, InvestmentStatus};
use crate::domain::RiskLevel;
use anyhow::ensure;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Investment record as supplied by a caller, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvestmentInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub sector: Option<String>,
    pub initial_amount: f64,
    /// Defaults to `initial_amount`.
    #[serde(default)]
    pub current_value: Option<f64>,
    /// Defaults to the value gain over `initial_amount`.
    #[serde(default)]
    pub current_roi: Option<f64>,
    /// Free-text risk label, e.g. "High" or "مخاطر منخفضة".
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl InvestmentInput {
    pub fn validate_and_into_investment(self, now: DateTime<Utc>) -> anyhow::Result<Investment> {
        let name = self.name.trim().to_string();
        ensure!(!name.is_empty(), "investment name must be non-empty");

        ensure!(
            self.initial_amount.is_finite() && self.initial_amount >= 0.0,
            "initial_amount must be a non-negative number (got {})",
            self.initial_amount
        );

        let current_value = self.current_value.unwrap_or(self.initial_amount);
        ensure!(
            current_value.is_finite(),
            "current_value must be finite for {name}"
        );

        let current_roi = match self.current_roi {
            Some(roi) => roi,
            None => implied_roi(self.initial_amount, current_value),
        };
        ensure!(current_roi.is_finite(), "current_roi must be finite for {name}");

        let risk_label = non_empty(self.risk_level);
        let risk_level = risk_label
            .as_deref()
            .map(RiskLevel::classify)
            .unwrap_or_default();

        let status = non_empty(self.status)
            .map(InvestmentStatus::from)
            .unwrap_or_default();

        Ok(Investment {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name,
            sector: non_empty(self.sector),
            initial_amount: self.initial_amount,
            current_value,
            current_roi,
            risk_level,
            risk_label,
            status,
            timeline: non_empty(self.timeline),
            region: non_empty(self.region),
            created_at: self.created_at.unwrap_or(now),
        })
    }
}

pub fn validate_all(
    inputs: Vec<InvestmentInput>,
    now: DateTime<Utc>,
) -> anyhow::Result<Vec<Investment>> {
    let mut out = Vec::with_capacity(inputs.len());
    for (idx, input) in inputs.into_iter().enumerate() {
        let investment = input
            .validate_and_into_investment(now)
            .map_err(|e| e.context(format!("invalid investment at index {idx}")))?;
        out.push(investment);
    }
    Ok(out)
}

pub(crate) fn implied_roi(initial_amount: f64, current_value: f64) -> f64 {
    if initial_amount > 0.0 {
        (current_value - initial_amount) / initial_amount
    } else {
        0.0
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn accepts_minimal_record_with_defaults() {
        let input: InvestmentInput = serde_json::from_value(json!({
            "name": "  Khareef Café ",
            "initial_amount": 10000.0,
        }))
        .unwrap();

        let inv = input.validate_and_into_investment(now()).unwrap();
        assert_eq!(inv.name, "Khareef Café");
        assert_eq!(inv.current_value, 10000.0);
        assert_eq!(inv.current_roi, 0.0);
        assert_eq!(inv.risk_level, RiskLevel::Medium);
        assert_eq!(inv.risk_label, None);
        assert_eq!(inv.status, InvestmentStatus::Active);
        assert_eq!(inv.sector, None);
        assert_eq!(inv.created_at, now());
    }

    #[test]
    fn classifies_risk_label_once_and_keeps_display_text() {
        let input: InvestmentInput = serde_json::from_value(json!({
            "name": "Desert camp",
            "initial_amount": 20000.0,
            "current_value": 25000.0,
            "risk_level": "مخاطر عالية",
            "status": "paused",
            "sector": "tourism",
        }))
        .unwrap();

        let inv = input.validate_and_into_investment(now()).unwrap();
        assert_eq!(inv.risk_level, RiskLevel::High);
        assert_eq!(inv.risk_label.as_deref(), Some("مخاطر عالية"));
        assert_eq!(inv.status, InvestmentStatus::Paused);
        assert!((inv.current_roi - 0.25).abs() < 1e-12);
    }

    #[test]
    fn unknown_risk_label_defaults_to_medium() {
        let input = InvestmentInput {
            name: "Mystery".to_string(),
            initial_amount: 1.0,
            risk_level: Some("spicy".to_string()),
            ..Default::default()
        };
        let inv = input.validate_and_into_investment(now()).unwrap();
        assert_eq!(inv.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn rejects_blank_name_and_bad_amounts() {
        let blank = InvestmentInput {
            name: "   ".to_string(),
            initial_amount: 1.0,
            ..Default::default()
        };
        assert!(blank.validate_and_into_investment(now()).is_err());

        let negative = InvestmentInput {
            name: "x".to_string(),
            initial_amount: -5.0,
            ..Default::default()
        };
        assert!(negative.validate_and_into_investment(now()).is_err());

        let nan_roi = InvestmentInput {
            name: "x".to_string(),
            initial_amount: 5.0,
            current_roi: Some(f64::NAN),
            ..Default::default()
        };
        assert!(nan_roi.validate_and_into_investment(now()).is_err());
    }

    #[test]
    fn validate_all_reports_offending_index() {
        let inputs = vec![
            InvestmentInput {
                name: "ok".to_string(),
                initial_amount: 1.0,
                ..Default::default()
            },
            InvestmentInput {
                name: "".to_string(),
                initial_amount: 1.0,
                ..Default::default()
            },
        ];
        let err = validate_all(inputs, now()).unwrap_err();
        assert!(format!("{err:#}").contains("index 1"));
    }
}
