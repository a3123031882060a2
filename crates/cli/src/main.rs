use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use investscope_core::catalog::Catalog;
use investscope_core::domain::analysis::{PortfolioAnalysis, PortfolioStats};
use investscope_core::domain::contract::{validate_all, InvestmentInput};
use investscope_core::domain::score::ScoringRequest;

#[derive(Debug, Parser)]
#[command(name = "investscope")]
struct Args {
    /// Reference catalog JSON file. Overrides CATALOG_PATH; defaults to the builtin catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a proposed project.
    Score {
        #[arg(long)]
        region: String,
        #[arg(long)]
        archetype: String,
        #[arg(long)]
        audience: String,
        #[arg(long)]
        amount: f64,
    },
    /// Analyze a portfolio file (a JSON array of investments or `{"investments": [...]}`).
    Analyze { path: PathBuf },
    /// Validate the reference catalog and print a summary.
    Catalog,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut settings = investscope_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();
    if let Some(path) = args.catalog.clone() {
        settings.catalog_path = Some(path);
    }

    if let Err(err) = run(&args, &settings) {
        sentry_anyhow::capture_anyhow(&err);
        tracing::error!(error = %err, "command failed");
        return Err(err);
    }
    Ok(())
}

fn run(args: &Args, settings: &investscope_core::config::Settings) -> anyhow::Result<()> {
    let catalog = Catalog::from_settings(settings)?;

    match &args.command {
        Command::Score {
            region,
            archetype,
            audience,
            amount,
        } => {
            let req = ScoringRequest::new(region, archetype, audience, *amount);
            let result = investscope_core::score_project(&catalog, &req)?;
            emit(&result, args.pretty)
        }
        Command::Analyze { path } => {
            let report = analyze_file(&catalog, path)?;
            tracing::info!(
                path = %path.display(),
                holdings = report.stats.total_count,
                overall = report.analysis.overall_score,
                "analyzed portfolio file"
            );
            emit(&report, args.pretty)
        }
        Command::Catalog => emit(&CatalogSummary::from(&catalog), args.pretty),
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PortfolioFile {
    Bare(Vec<InvestmentInput>),
    Wrapped { investments: Vec<InvestmentInput> },
}

impl PortfolioFile {
    fn into_inputs(self) -> Vec<InvestmentInput> {
        match self {
            Self::Bare(v) | Self::Wrapped { investments: v } => v,
        }
    }
}

#[derive(Debug, Serialize)]
struct PortfolioReport {
    stats: PortfolioStats,
    analysis: PortfolioAnalysis,
}

fn parse_portfolio(text: &str) -> anyhow::Result<Vec<InvestmentInput>> {
    let file: PortfolioFile =
        serde_json::from_str(text).context("portfolio file is not valid JSON for investments")?;
    Ok(file.into_inputs())
}

fn analyze_file(catalog: &Catalog, path: &Path) -> anyhow::Result<PortfolioReport> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read portfolio file {}", path.display()))?;
    let inputs = parse_portfolio(&text)?;
    let investments = validate_all(inputs, chrono::Utc::now())?;

    let stats = investscope_core::portfolio::compute_stats(&investments);
    let analysis = investscope_core::portfolio::analyze_stats(&stats, catalog);
    Ok(PortfolioReport { stats, analysis })
}

#[derive(Debug, Serialize)]
struct CatalogSummary {
    regions: Vec<String>,
    archetypes: Vec<String>,
    audiences: Vec<String>,
    sectors: Vec<String>,
    opportunities: usize,
}

impl From<&Catalog> for CatalogSummary {
    fn from(c: &Catalog) -> Self {
        Self {
            regions: c.regions.iter().map(|r| r.id.clone()).collect(),
            archetypes: c.archetypes.iter().map(|a| a.id.clone()).collect(),
            audiences: c.audiences.iter().map(|a| a.id.clone()).collect(),
            sectors: c.sectors().into_iter().map(str::to_string).collect(),
            opportunities: c.opportunities.len(),
        }
    }
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn init_sentry(
    settings: &investscope_core::config::Settings,
) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_score_command() {
        let args = Args::try_parse_from([
            "investscope",
            "score",
            "--region",
            "salalah",
            "--archetype",
            "hotels",
            "--audience",
            "tourists",
            "--amount",
            "100000",
            "--pretty",
        ])
        .unwrap();
        assert!(args.pretty);
        assert!(matches!(
            args.command,
            Command::Score { ref region, amount, .. } if region == "salalah" && amount == 100_000.0
        ));
    }

    #[test]
    fn portfolio_file_accepts_both_shapes() {
        let bare = r#"[{"name": "Camp", "initial_amount": 1000.0}]"#;
        let wrapped = r#"{"investments": [{"name": "Camp", "initial_amount": 1000.0}]}"#;
        assert_eq!(parse_portfolio(bare).unwrap().len(), 1);
        assert_eq!(parse_portfolio(wrapped).unwrap().len(), 1);
        assert!(parse_portfolio("{\"holdings\": []}").is_err());
    }

    #[test]
    fn catalog_summary_lists_ids() {
        let summary = CatalogSummary::from(&Catalog::builtin());
        assert!(summary.regions.contains(&"salalah".to_string()));
        assert!(summary.archetypes.contains(&"hotels".to_string()));
        assert!(summary.opportunities > 0);
    }
}
