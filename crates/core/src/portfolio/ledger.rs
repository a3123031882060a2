use crate::catalog::Catalog;
use crate::domain::analysis::{PortfolioAnalysis, PortfolioStats};
use crate::domain::contract::{implied_roi, InvestmentInput};
use crate::domain::investment::{Investment, InvestmentStatus};
use anyhow::{ensure, Context};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Value report for an existing holding. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct InvestmentUpdate {
    pub current_value: Option<f64>,
    /// When omitted alongside a new value, ROI is recomputed from the value.
    pub current_roi: Option<f64>,
    pub status: Option<InvestmentStatus>,
}

/// In-memory holdings of a single owner.
#[derive(Debug, Clone)]
pub struct Portfolio {
    owner: String,
    investments: Vec<Investment>,
}

impl Portfolio {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            investments: Vec::new(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn investments(&self) -> &[Investment] {
        &self.investments
    }

    pub fn add(&mut self, input: InvestmentInput, now: DateTime<Utc>) -> anyhow::Result<Uuid> {
        let investment = input.validate_and_into_investment(now)?;
        ensure!(
            self.find(investment.id).is_none(),
            "investment {} already exists in portfolio of {}",
            investment.id,
            self.owner
        );
        let id = investment.id;
        tracing::debug!(owner = %self.owner, %id, name = %investment.name, "added investment");
        self.investments.push(investment);
        Ok(id)
    }

    pub fn update(&mut self, id: Uuid, update: InvestmentUpdate) -> anyhow::Result<&Investment> {
        let idx = self
            .find(id)
            .with_context(|| format!("investment {id} not found in portfolio of {}", self.owner))?;
        if let Some(value) = update.current_value {
            ensure!(value.is_finite(), "current_value must be finite (got {value})");
        }
        if let Some(roi) = update.current_roi {
            ensure!(roi.is_finite(), "current_roi must be finite (got {roi})");
        }

        let inv = &mut self.investments[idx];
        if let Some(value) = update.current_value {
            inv.current_value = value;
            if update.current_roi.is_none() {
                inv.current_roi = implied_roi(inv.initial_amount, value);
            }
        }
        if let Some(roi) = update.current_roi {
            inv.current_roi = roi;
        }
        if let Some(status) = update.status {
            inv.status = status;
        }

        Ok(&self.investments[idx])
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Investment> {
        let idx = self.find(id)?;
        Some(self.investments.remove(idx))
    }

    /// Owned copy of the current holdings, to analyze without holding a borrow.
    pub fn snapshot(&self) -> Vec<Investment> {
        self.investments.clone()
    }

    pub fn analyze(&self, catalog: &Catalog) -> (PortfolioStats, PortfolioAnalysis) {
        let stats = crate::portfolio::stats::compute_stats(&self.investments);
        let analysis = crate::portfolio::analyze_stats(&stats, catalog);
        (stats, analysis)
    }

    fn find(&self, id: Uuid) -> Option<usize> {
        self.investments.iter().position(|i| i.id == id)
    }
}
