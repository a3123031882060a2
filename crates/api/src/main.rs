use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use investscope_core::catalog::Catalog;
use investscope_core::domain::analysis::{PortfolioAnalysis, PortfolioStats};
use investscope_core::domain::contract::{validate_all, InvestmentInput};
use investscope_core::domain::score::{ScoreResult, ScoringRequest};
use investscope_core::ScoringError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = investscope_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let catalog = match Catalog::from_settings(&settings) {
        Ok(catalog) => catalog,
        Err(e) => {
            sentry_anyhow::capture_anyhow(&e);
            tracing::error!(error = %e, "reference catalog failed to load");
            return Err(e);
        }
    };

    let state = AppState {
        catalog: Arc::new(catalog),
    };

    let app = router(state);

    let port = settings.port.unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/catalog", get(get_catalog))
        .route("/score", post(score))
        .route("/portfolio/analyze", post(analyze))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Clone)]
struct AppState {
    catalog: Arc<Catalog>,
}

type ApiError = (StatusCode, String);

async fn get_catalog(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.catalog.as_ref().clone())
}

async fn score(
    State(state): State<AppState>,
    Json(req): Json<ScoringRequest>,
) -> Result<Json<ScoreResult>, ApiError> {
    investscope_core::score_project(&state.catalog, &req)
        .map(Json)
        .map_err(|e| {
            tracing::warn!(
                error = %e,
                region = %req.region_id,
                archetype = %req.archetype_id,
                "score rejected"
            );
            (scoring_status(&e), e.to_string())
        })
}

fn scoring_status(e: &ScoringError) -> StatusCode {
    if e.is_configuration() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::BAD_REQUEST
    }
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    #[serde(default)]
    investments: Vec<InvestmentInput>,
}

#[derive(Debug, Serialize)]
struct ApiPortfolioReport {
    stats: PortfolioStats,
    analysis: PortfolioAnalysis,
}

async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<ApiPortfolioReport>, ApiError> {
    let investments = validate_all(req.investments, chrono::Utc::now()).map_err(|e| {
        tracing::warn!(error = %e, "portfolio rejected");
        (StatusCode::BAD_REQUEST, format!("{e:#}"))
    })?;

    let stats = investscope_core::portfolio::compute_stats(&investments);
    let analysis = investscope_core::portfolio::analyze_stats(&stats, &state.catalog);

    Ok(Json(ApiPortfolioReport { stats, analysis }))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
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
