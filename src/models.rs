//! Data models for the citation chaining demo.
//!
//! Papers are compiled into the binary and never mutated, so every field is
//! `'static`. The grouping mode is the only piece of view configuration that
//! lives outside the URL.

use serde::{Deserialize, Serialize};

// ============================================================================
// Papers
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paper {
    pub id: &'static str,
    pub title: &'static str,
    pub authors: &'static str,
    pub year: i32,
    pub venue: &'static str,
    /// Used as 0..=1 throughout the corpus, but not clamped.
    pub relevance: f64,
    pub keywords: &'static [&'static str],
    pub snippet: &'static str,
    #[serde(rename = "abstract")]
    pub abstract_text: &'static str,
}

impl Paper {
    /// Comma-joined keyword list as shown on cards and the details page.
    pub fn keyword_line(&self) -> String {
        self.keywords.join(", ")
    }
}

// ============================================================================
// Grouping
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingMode {
    /// One group per raw keyword string.
    #[default]
    Exact,
    /// Raw keywords are merged into concept labels first.
    Canonical,
}

impl GroupingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupingMode::Exact => "exact",
            GroupingMode::Canonical => "canonical",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            GroupingMode::Exact => GroupingMode::Canonical,
            GroupingMode::Canonical => GroupingMode::Exact,
        }
    }
}

impl std::fmt::Display for GroupingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_mode_defaults_to_exact() {
        assert_eq!(GroupingMode::default(), GroupingMode::Exact);
        assert_eq!(GroupingMode::Exact.toggled(), GroupingMode::Canonical);
        assert_eq!(GroupingMode::Canonical.toggled(), GroupingMode::Exact);
    }

    #[test]
    fn grouping_mode_deserializes_lowercase() {
        let mode: GroupingMode = serde_json::from_str("\"canonical\"").unwrap();
        assert_eq!(mode, GroupingMode::Canonical);
        assert_eq!(mode.to_string(), "canonical");
    }
}
