//! HTTP surface for the dashboard front end.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::config::{AnalysisConfig, WindowSize, WorkshopConfig};
use crate::engine::Analyzer;
use crate::error::WorkshopError;
use crate::export::{ExportOutcome, PlaceholderExporter, ReportExporter};
use crate::prompts::{all_prompts, SectionPrompts};
use crate::report::AnalysisReport;
use crate::resources::Resources;
use crate::sample::SAMPLE_TEXT;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub analysis: Arc<AnalysisConfig>,
    pub resources: Arc<Resources>,
    pub exporter: Arc<dyn ReportExporter>,
}

impl AppState {
    pub fn new(cfg: &WorkshopConfig, resources: Arc<Resources>) -> Self {
        Self {
            analyzer: Arc::new(Analyzer::with_resources(resources.clone())),
            analysis: Arc::new(cfg.analysis.clone()),
            resources,
            exporter: Arc::new(PlaceholderExporter),
        }
    }

    /// Embedded resources and default configuration; handy for tests.
    pub fn with_defaults() -> Self {
        Self::new(
            &WorkshopConfig::default(),
            Arc::new(Resources::ready_embedded()),
        )
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/analyze", post(analyze))
        .route("/sample", get(sample))
        .route("/prompts", get(prompts))
        .route("/config", get(config))
        .route("/report", post(report))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Alias kept so callers can write `text_workshop::router`.
pub fn router(state: AppState) -> Router {
    create_router(state)
}

#[derive(Deserialize)]
struct AnalyzeReq {
    text: String,
    #[serde(default)]
    window_size: Option<usize>,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn bad_request(e: WorkshopError) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: e.to_string(),
        }),
    )
}

async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let cfg = match body.window_size {
        Some(n) => state
            .analysis
            .with_window_size(WindowSize::new(n).map_err(bad_request)?),
        None => state.analysis.as_ref().clone(),
    };
    debug!(target: "api", chars = body.text.len(), window = cfg.window_size.get(), "POST /analyze");
    Ok(Json(state.analyzer.analyze(&body.text, &cfg)))
}

#[derive(Serialize)]
struct SampleOut {
    text: &'static str,
}

async fn sample() -> Json<SampleOut> {
    Json(SampleOut { text: SAMPLE_TEXT })
}

async fn prompts() -> Json<Vec<SectionPrompts>> {
    Json(all_prompts())
}

#[derive(Serialize)]
struct ConfigOut {
    analysis: AnalysisConfig,
    resources_ready: bool,
    window_size_min: usize,
    window_size_max: usize,
    window_size_step: usize,
}

async fn config(State(state): State<AppState>) -> Json<ConfigOut> {
    use crate::config::workshop::{MAX_WINDOW_SIZE, MIN_WINDOW_SIZE, WINDOW_SIZE_STEP};
    Json(ConfigOut {
        analysis: state.analysis.as_ref().clone(),
        resources_ready: state.resources.is_ready(),
        window_size_min: MIN_WINDOW_SIZE,
        window_size_max: MAX_WINDOW_SIZE,
        window_size_step: WINDOW_SIZE_STEP,
    })
}

async fn report(State(state): State<AppState>) -> (StatusCode, Json<ExportOutcome>) {
    match state.exporter.export(None) {
        out @ ExportOutcome::NotImplemented { .. } => (StatusCode::NOT_IMPLEMENTED, Json(out)),
    }
}
