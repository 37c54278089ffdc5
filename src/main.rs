//! Text Workshop server entrypoint.
//! Boots the Axum HTTP server, wiring config, language resources, routes and metrics.

use shuttle_axum::ShuttleAxum;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use text_workshop::{api, metrics::Metrics};

/// Compact tracing logs; RUST_LOG overrides the default filter.
/// The Shuttle runtime may already own the global subscriber, in which case this is a no-op.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("text_workshop=info,warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    init_tracing();

    let (cfg, resources) = text_workshop::bootstrap()?;
    let state = api::AppState::new(&cfg, resources);
    let mut router = api::create_router(state);

    match Metrics::init(&cfg.analysis) {
        Ok(m) => router = router.merge(m.router()),
        Err(e) => warn!(error = ?e, "metrics disabled"),
    }

    Ok(router.into())
}
