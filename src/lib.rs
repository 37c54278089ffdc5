// src/lib.rs
// Public library surface for the server binary, the CLI and integration tests.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod frequency;
pub mod highlight;
pub mod lexical;
pub mod metrics;
pub mod prompts;
pub mod render;
pub mod report;
pub mod resources;
pub mod sample;
pub mod sentences;
pub mod sentiment;
pub mod tokenize;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::config::{AnalysisConfig, WindowSize, WorkshopConfig};
pub use crate::engine::Analyzer;
pub use crate::error::WorkshopError;
pub use crate::report::AnalysisReport;
pub use crate::resources::Resources;
pub use crate::sentiment::{Polarity, SentimentOracle};
pub use crate::tokenize::Tokenizer;

use std::sync::Arc;
use tracing::{info, warn};

/// Load configuration and acquire language resources once, ahead of any
/// request. Missing resources are logged, not fatal: analyses will then carry
/// a warning and run on empty sequences.
pub fn bootstrap() -> anyhow::Result<(WorkshopConfig, Arc<Resources>)> {
    let cfg = WorkshopConfig::load_default()?;
    let resources = Arc::new(Resources::from_config(&cfg.resources));
    match resources.ensure_loaded() {
        Ok(_) => info!(target: "workshop", window = cfg.analysis.window_size.get(), "workshop ready"),
        Err(e) => warn!(target: "workshop", error = %e, "starting without language resources"),
    }
    Ok((cfg, resources))
}
