//! Citation chaining prototype - web server entry point.
//!
//! Serves the landing, results and details pages plus a small read-only
//! JSON API over the built-in demo corpus.

use std::sync::Arc;

use citechain::{build_router, config::AppConfig, corpus, AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("citechain=info,tower_http=info")),
        )
        .with_target(true)
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;
    let addr = config.bind_addr();
    let session_ttl_hours = config.session_ttl_hours;

    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        papers = corpus::PAPERS.len(),
        session_ttl_hours,
        "Citation chaining prototype running at http://{}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
