//! Per-browser session context.
//!
//! Each browser gets an opaque random token in the `citechain_session`
//! cookie. The token keys an in-memory [`SessionContext`] holding the last
//! query, the chain the sidebar last rendered, and the grouping mode. Nothing
//! is persisted; a restart forgets every session.

use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

use crate::models::GroupingMode;

/// Session cookie name
pub const SESSION_COOKIE: &str = "citechain_session";

const TOKEN_LEN: usize = 32;

// ============================================================================
// Session Context
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    pub query: String,
    pub viewed_papers: Vec<String>,
    pub grouping: GroupingMode,
}

#[derive(Debug, Clone)]
struct SessionEntry {
    context: SessionContext,
    last_seen: DateTime<Utc>,
}

// ============================================================================
// Session Store
// ============================================================================

#[derive(Clone)]
pub struct SessionStore {
    entries: Arc<Mutex<HashMap<String, SessionEntry>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, SessionEntry>> {
        // A panic mid-update leaves plain data behind, still usable.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Look up the live session named by the cookie. Nothing is created
    /// here; a browser without a session renders with the default context.
    pub fn load(&self, jar: &CookieJar) -> (Option<String>, SessionContext) {
        let now = Utc::now();
        let mut entries = self.lock();

        if let Some(token) = jar.get(SESSION_COOKIE).map(|c| c.value().to_string()) {
            if let Some(entry) = entries.get_mut(&token) {
                if now - entry.last_seen < self.ttl {
                    entry.last_seen = now;
                    return (Some(token), entry.context.clone());
                }
                debug!("session expired");
            }
        }

        (None, SessionContext::default())
    }

    /// Write back the context produced by a request. Without a token a new
    /// session is started, after dropping expired ones. Returns the token
    /// the cookie should carry.
    pub fn store(&self, token: Option<String>, context: SessionContext) -> String {
        let now = Utc::now();
        let mut entries = self.lock();

        let token = match token {
            Some(token) => token,
            None => {
                let purged = purge_expired(&mut entries, now, self.ttl);
                if purged > 0 {
                    debug!(purged, "purged expired sessions");
                }
                let token = generate_token();
                debug!(active = entries.len() + 1, "created session");
                token
            }
        };

        entries.insert(
            token.clone(),
            SessionEntry {
                context,
                last_seen: now,
            },
        );
        token
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn purge_expired(
    entries: &mut HashMap<String, SessionEntry>,
    now: DateTime<Utc>,
    ttl: Duration,
) -> usize {
    let before = entries.len();
    entries.retain(|_, entry| now - entry.last_seen < ttl);
    before - entries.len()
}

fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// Cookie carrying the session token back to the browser.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
