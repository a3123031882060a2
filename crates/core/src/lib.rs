pub mod catalog;
pub mod domain;
pub mod error;
pub mod portfolio;
pub mod scoring;
pub mod weights;

pub use catalog::Catalog;
pub use error::ScoringError;
pub use portfolio::{analyze_portfolio, Portfolio};
pub use scoring::score_project;

pub mod config {
    use anyhow::Context;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Default)]
    pub struct Settings {
        pub catalog_path: Option<PathBuf>,
        pub sentry_dsn: Option<String>,
        pub port: Option<u16>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let port = match std::env::var("PORT") {
                Ok(s) => Some(
                    s.trim()
                        .parse::<u16>()
                        .with_context(|| format!("PORT must be a valid port number (got {s:?})"))?,
                ),
                Err(_) => None,
            };

            Ok(Self {
                catalog_path: std::env::var("CATALOG_PATH")
                    .ok()
                    .filter(|s| !s.trim().is_empty())
                    .map(PathBuf::from),
                sentry_dsn: std::env::var("SENTRY_DSN")
                    .ok()
                    .filter(|s| !s.trim().is_empty()),
                port,
            })
        }

        pub fn require_catalog_path(&self) -> anyhow::Result<&std::path::Path> {
            self.catalog_path
                .as_deref()
                .context("CATALOG_PATH is required")
        }
    }
}
