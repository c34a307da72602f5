//! HTTP route handlers.
//!
//! Page handlers decode the URL into a [`NavigationState`], load the caller's
//! session if it has one, render, and store the session context the render
//! produced. Form posts create or update the session and redirect to the next
//! navigation state.

use crate::corpus::{cited_papers, find_paper, lookup_results};
use crate::error::ApiError;
use crate::models::{GroupingMode, Paper};
use crate::navigation::{goto_results, parse_chain, start_new_chain, NavigationState};
use crate::session::session_cookie;
use crate::templates::render;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

#[cfg(test)]
#[path = "handlers_test.rs"]
mod handlers_test;

// ============================================================================
// Page Handler
// ============================================================================

pub async fn index(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Response {
    let nav = NavigationState::from_params(&params);
    let (token, session) = state.sessions.load(&jar);

    debug!(
        page = nav.page.as_str(),
        paper = nav.paper.as_deref(),
        steps = nav.chain().len(),
        "render"
    );
    let rendered = render(&nav, session);

    // Browsing alone never starts a session; only form posts do
    match token {
        Some(token) => {
            let token = state.sessions.store(Some(token), rendered.session);
            (jar.add(session_cookie(token)), Html(rendered.html)).into_response()
        }
        None => Html(rendered.html).into_response(),
    }
}

// ============================================================================
// Form Handlers
// ============================================================================

#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub q: String,
}

/// Store the query, reset the chain to the seed, and show results.
pub async fn search(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<SearchForm>,
) -> Response {
    let (token, mut session) = state.sessions.load(&jar);

    info!(query = %form.q, exact = lookup_results(&form.q).is_exact(), "search");
    session.query = form.q;
    session.viewed_papers = start_new_chain();
    let next = goto_results(&session.viewed_papers);
    let token = state.sessions.store(token, session);

    (jar.add(session_cookie(token)), Redirect::to(&next.href())).into_response()
}

#[derive(Deserialize)]
pub struct GroupingForm {
    pub mode: GroupingMode,
    #[serde(default)]
    pub chain: String,
}

/// Switch between exact and canonical keyword grouping, staying on the
/// results page with the same chain.
pub async fn set_grouping(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<GroupingForm>,
) -> Response {
    let (token, mut session) = state.sessions.load(&jar);

    debug!(mode = %form.mode, "grouping");
    session.grouping = form.mode;
    let token = state.sessions.store(token, session);

    let next = goto_results(&parse_chain(&form.chain));
    (jar.add(session_cookie(token)), Redirect::to(&next.href())).into_response()
}

// ============================================================================
// JSON API
// ============================================================================

pub async fn api_paper(Path(id): Path<String>) -> Result<Json<&'static Paper>, ApiError> {
    find_paper(&id)
        .map(Json)
        .ok_or(ApiError::PaperNotFound(id))
}

pub async fn api_cites(Path(id): Path<String>) -> Result<Json<Vec<&'static Paper>>, ApiError> {
    if find_paper(&id).is_none() {
        return Err(ApiError::PaperNotFound(id));
    }
    Ok(Json(cited_papers(&id)))
}

#[derive(Deserialize)]
pub struct ResultsQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct ResultsResponse {
    pub query_matched: bool,
    pub papers: Vec<&'static Paper>,
}

pub async fn api_results(Query(query): Query<ResultsQuery>) -> Json<ResultsResponse> {
    let found = lookup_results(&query.q);
    Json(ResultsResponse {
        query_matched: found.is_exact(),
        papers: found.result_set().papers(),
    })
}
