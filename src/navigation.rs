//! Navigation state and its URL encoding.
//!
//! The current view is fully described by three query parameters: `page`,
//! `paper` and `chain`. Handlers decode them into a [`NavigationState`] and
//! every link or redirect is built by encoding the next state, so nothing
//! else in the crate touches query strings.

use std::collections::HashMap;

/// First chain element of every fresh search.
pub const SEED_SENTINEL: &str = "seed_paper";

// ============================================================================
// Chain Helpers
// ============================================================================

pub fn parse_chain(chain_str: &str) -> Vec<String> {
    chain_str
        .split(',')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn chain_to_str(chain: &[String]) -> String {
    chain.join(",")
}

pub fn start_new_chain() -> Vec<String> {
    vec![SEED_SENTINEL.to_string()]
}

/// Append `paper_id` unless it is already the last step.
pub fn append_to_chain(chain: &[String], paper_id: &str) -> Vec<String> {
    let mut next = chain.to_vec();
    if next.last().map(String::as_str) != Some(paper_id) {
        next.push(paper_id.to_string());
    }
    next
}

// ============================================================================
// Navigation State
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Landing,
    Results,
    Details,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Results => "results",
            Page::Details => "details",
        }
    }

    fn parse(s: &str) -> Option<Page> {
        match s {
            "landing" => Some(Page::Landing),
            "results" => Some(Page::Results),
            "details" => Some(Page::Details),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub page: Page,
    pub paper: Option<String>,
    /// `None` when the URL carried no `chain` parameter at all.
    pub chain: Option<Vec<String>>,
}

impl NavigationState {
    /// Decode from flat query parameters. Unknown pages fall back to landing,
    /// and so does a details page without a paper id.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let page = params
            .get("page")
            .and_then(|p| Page::parse(p))
            .unwrap_or_default();
        let paper = params.get("paper").filter(|p| !p.is_empty()).cloned();
        let chain = params.get("chain").map(|c| parse_chain(c));

        let page = match (page, &paper) {
            (Page::Details, None) => Page::Landing,
            (page, _) => page,
        };

        Self { page, paper, chain }
    }

    /// Full replacement of the parameter set; absent fields are omitted.
    pub fn goto(page: Page, paper: Option<&str>, chain: Option<&[String]>) -> Self {
        Self {
            page,
            paper: paper.map(str::to_string),
            chain: chain.map(<[String]>::to_vec),
        }
    }

    /// The chain as seen by renderers: missing means empty.
    pub fn chain(&self) -> &[String] {
        self.chain.as_deref().unwrap_or(&[])
    }

    pub fn to_query_string(&self) -> String {
        let mut parts = vec![format!("page={}", self.page.as_str())];
        if let Some(ref paper) = self.paper {
            parts.push(format!("paper={}", urlencoding::encode(paper)));
        }
        if let Some(ref chain) = self.chain {
            parts.push(format!("chain={}", urlencoding::encode(&chain_to_str(chain))));
        }
        parts.join("&")
    }

    /// Relative link target for this state.
    pub fn href(&self) -> String {
        format!("/?{}", self.to_query_string())
    }
}

// ============================================================================
// Transitions
// ============================================================================

pub fn goto_landing() -> NavigationState {
    NavigationState::goto(Page::Landing, None, None)
}

pub fn goto_results(chain: &[String]) -> NavigationState {
    NavigationState::goto(Page::Results, None, Some(chain))
}

/// Details for `paper_id`, with the id appended to `chain` unless it is
/// already the last step.
pub fn goto_details(paper_id: &str, chain: &[String]) -> NavigationState {
    let next = append_to_chain(chain, paper_id);
    NavigationState::goto(Page::Details, Some(paper_id), Some(&next))
}
