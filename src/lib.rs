//! Citation chaining prototype - library surface for the server and tests.
//!
//! The application is organized into the following modules:
//!
//! - `models`: Paper records and grouping mode
//! - `corpus`: Static papers, citation edges, keyword concepts, result sets
//! - `grouping`: Keyword grouping and relevance ranking
//! - `navigation`: URL query parameters <-> navigation state
//! - `session`: Per-browser session context behind a cookie
//! - `templates`: HTML rendering for every page
//! - `handlers`: HTTP route handlers
//! - `config`, `error`: Environment configuration and error types

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod corpus;
pub mod error;
pub mod grouping;
pub mod handlers;
pub mod models;
pub mod navigation;
pub mod session;
pub mod templates;

use config::AppConfig;
use session::SessionStore;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let sessions = SessionStore::new(config.session_ttl());
        Self { config, sessions }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Pages
        .route("/", get(handlers::index))
        .route("/search", post(handlers::search))
        .route("/grouping", post(handlers::set_grouping))
        // JSON API
        .route("/api/papers/{id}", get(handlers::api_paper))
        .route("/api/papers/{id}/cites", get(handlers::api_cites))
        .route("/api/results", get(handlers::api_results))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Re-export commonly used types
pub use corpus::{
    canonicalize_keyword, cited_papers, find_paper, lookup_results, QueryMatch, ResultSet,
    SEED_TITLE,
};
pub use error::{ApiError, ConfigError};
pub use grouping::{group_papers, grouped_results, rank_groups};
pub use models::{GroupingMode, Paper};
pub use navigation::{
    append_to_chain, chain_to_str, goto_details, goto_landing, goto_results, parse_chain,
    start_new_chain, NavigationState, Page, SEED_SENTINEL,
};
pub use session::{SessionContext, SESSION_COOKIE};
