//! Read-only reference tables: regions, project archetypes, audience
//! profiles and the sector-tagged opportunity catalog.
//!
//! A [`Catalog`] is loaded once at startup and shared behind an `Arc`; nothing
//! in the engine mutates it afterwards.

mod builtin;

use crate::config::Settings;
use crate::domain::RiskLevel;
use crate::error::ScoringError;
use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubRegion {
    pub id: String,
    pub name: String,
    pub population: u64,
    pub visitors: u64,
}

/// Descriptive market data. Not used by scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketProfile {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub key_sectors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub population: u64,
    /// Monthly visitors.
    pub visitors: u64,
    #[serde(default)]
    pub subregions: Vec<SubRegion>,
    #[serde(default)]
    pub market: MarketProfile,
    /// Informational notes appended to every score for this region.
    #[serde(default)]
    pub advisories: Vec<String>,
}

impl Region {
    /// Region whose population and visitors are the sums over `subregions`.
    pub fn from_subregions(
        id: impl Into<String>,
        name: impl Into<String>,
        subregions: Vec<SubRegion>,
    ) -> Self {
        let population = subregions.iter().map(|s| s.population).sum();
        let visitors = subregions.iter().map(|s| s.visitors).sum();
        Self {
            id: id.into(),
            name: name.into(),
            population,
            visitors,
            subregions,
            market: MarketProfile::default(),
            advisories: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectArchetype {
    pub id: String,
    pub name: String,
    pub visitor_weight: f64,
    pub local_weight: f64,
    /// Fraction, e.g. 0.18 for 18%.
    pub avg_roi: f64,
    pub seasonality_risk: f64,
    pub permits_required: u32,
    pub avg_approval_days: u32,
    /// Monthly, in the same currency as investment amounts.
    pub default_operating_cost: f64,
}

impl ProjectArchetype {
    pub fn permit_burden(&self) -> u64 {
        u64::from(self.permits_required) * u64::from(self.avg_approval_days)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceProfile {
    pub id: String,
    pub name: String,
    pub weight: f64,
    pub seasonality: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub sector: String,
    pub title: String,
    #[serde(default)]
    pub region_id: Option<String>,
    /// Fraction.
    pub expected_roi: f64,
    pub risk_level: RiskLevel,
    pub min_investment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub regions: Vec<Region>,
    pub archetypes: Vec<ProjectArchetype>,
    pub audiences: Vec<AudienceProfile>,
    #[serde(default)]
    pub opportunities: Vec<Opportunity>,
}

impl Catalog {
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    pub fn from_json_str(s: &str) -> anyhow::Result<Self> {
        let catalog: Self =
            serde_json::from_str(s).context("catalog is not valid JSON for the catalog schema")?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("invalid catalog {}", path.display()))
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        match settings.catalog_path.as_deref() {
            Some(path) => {
                let catalog = Self::load(path)?;
                tracing::info!(
                    path = %path.display(),
                    regions = catalog.regions.len(),
                    archetypes = catalog.archetypes.len(),
                    audiences = catalog.audiences.len(),
                    opportunities = catalog.opportunities.len(),
                    "loaded reference catalog"
                );
                Ok(catalog)
            }
            None => {
                tracing::info!("CATALOG_PATH not set; using builtin reference catalog");
                Ok(Self::builtin())
            }
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure_unique_ids("region", self.regions.iter().map(|r| r.id.as_str()))?;
        ensure_unique_ids("archetype", self.archetypes.iter().map(|a| a.id.as_str()))?;
        ensure_unique_ids("audience", self.audiences.iter().map(|a| a.id.as_str()))?;
        ensure_unique_ids("opportunity", self.opportunities.iter().map(|o| o.id.as_str()))?;

        for a in &self.archetypes {
            ensure_fraction(&a.id, "visitor_weight", a.visitor_weight)?;
            ensure_fraction(&a.id, "local_weight", a.local_weight)?;
            ensure_fraction(&a.id, "seasonality_risk", a.seasonality_risk)?;
            ensure!(a.avg_roi.is_finite(), "archetype {}: avg_roi must be finite", a.id);
            ensure!(
                a.permits_required >= 1,
                "archetype {}: permits_required must be >= 1",
                a.id
            );
            ensure!(
                a.avg_approval_days >= 1,
                "archetype {}: avg_approval_days must be >= 1",
                a.id
            );
            ensure!(
                a.default_operating_cost.is_finite() && a.default_operating_cost >= 0.0,
                "archetype {}: default_operating_cost must be >= 0",
                a.id
            );
        }

        for a in &self.audiences {
            ensure!(
                a.weight.is_finite() && a.weight >= 0.0,
                "audience {}: weight must be >= 0",
                a.id
            );
            ensure_fraction(&a.id, "seasonality", a.seasonality)?;
        }

        for o in &self.opportunities {
            ensure!(!o.sector.trim().is_empty(), "opportunity {}: sector must be non-empty", o.id);
            ensure!(
                o.expected_roi.is_finite(),
                "opportunity {}: expected_roi must be finite",
                o.id
            );
            if let Some(region_id) = &o.region_id {
                ensure!(
                    self.regions.iter().any(|r| &r.id == region_id),
                    "opportunity {}: unknown region_id {region_id}",
                    o.id
                );
            }
        }

        Ok(())
    }

    pub fn region(&self, id: &str) -> Result<&Region, ScoringError> {
        self.regions
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| ScoringError::UnknownRegion(id.to_string()))
    }

    pub fn archetype(&self, id: &str) -> Result<&ProjectArchetype, ScoringError> {
        self.archetypes
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| ScoringError::UnknownArchetype(id.to_string()))
    }

    pub fn audience(&self, id: &str) -> Result<&AudienceProfile, ScoringError> {
        self.audiences
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| ScoringError::UnknownAudience(id.to_string()))
    }

    /// Distinct opportunity sectors in catalog order.
    pub fn sectors(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.opportunities
            .iter()
            .map(|o| o.sector.as_str())
            .filter(|s| seen.insert(*s))
            .collect()
    }
}

fn ensure_unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> anyhow::Result<()> {
    let mut seen = BTreeSet::new();
    for id in ids {
        ensure!(!id.trim().is_empty(), "{kind} id must be non-empty");
        ensure!(seen.insert(id), "duplicate {kind} id: {id}");
    }
    Ok(())
}

fn ensure_fraction(id: &str, field: &str, value: f64) -> anyhow::Result<()> {
    ensure!(
        (0.0..=1.0).contains(&value),
        "{id}: {field} must be between 0 and 1 (got {value})"
    );
    Ok(())
}
