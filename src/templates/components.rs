//! Shared HTML components: escaping, the base page, paper cards and
//! message boxes.

use crate::models::Paper;
use crate::navigation::goto_details;

use super::styles::STYLE;

// ============================================================================
// Text Helpers
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Cut to `max` characters, adding `...` when something was dropped.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

// ============================================================================
// Messages
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
}

pub fn message(kind: MessageKind, text: &str) -> String {
    let class = match kind {
        MessageKind::Info => "info",
        MessageKind::Warning => "warning",
    };
    format!(
        r#"<div class="message {}">{}</div>"#,
        class,
        html_escape(text)
    )
}

// ============================================================================
// Paper Card
// ============================================================================

/// Clickable summary of a paper. Following it opens the paper's details with
/// the paper appended to `chain`.
pub fn paper_card(paper: &Paper, chain: &[String]) -> String {
    let href = goto_details(paper.id, chain).href();
    format!(
        r#"<a class="paper-card-link" href="{href}">
    <div class="paper-card">
        <div class="paper-title">{title}</div>
        <div class="paper-meta">{authors} • {venue} • {year} • Relevance: {relevance:.2}</div>
        <div class="paper-snippet">{snippet}</div>
        <div><b>Keywords:</b> {keywords}</div>
    </div>
</a>"#,
        href = html_escape(&href),
        title = html_escape(paper.title),
        authors = html_escape(paper.authors),
        venue = html_escape(paper.venue),
        year = paper.year,
        relevance = paper.relevance,
        snippet = html_escape(paper.snippet),
        keywords = html_escape(&paper.keyword_line()),
    )
}

// ============================================================================
// Base HTML Template
// ============================================================================

pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    <div class="container">
        {content}
    </div>
</body>
</html>"#,
        title = html_escape(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::find_paper;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<a href=\"x\">'&'</a>"), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("short", 50), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("Human–AI", 6), "Human–...");
        assert_eq!(truncate("exactly", 7), "exactly");
    }

    #[test]
    fn test_paper_card_links_to_details() {
        let paper = find_paper("lee_see_2004_trust").unwrap();
        let chain = vec!["seed_paper".to_string()];
        let html = paper_card(paper, &chain);
        assert!(html.contains("href=\"/?page=details&amp;paper=lee_see_2004_trust&amp;chain=seed_paper%2Clee_see_2004_trust\""));
        assert!(html.contains("J. Lee, K. See • Human Factors • 2004 • Relevance: 0.87"));
        assert!(html.contains("trust, calibration, automation"));
    }

    #[test]
    fn test_message_escapes() {
        let html = message(MessageKind::Warning, "<none>");
        assert!(html.contains("message warning"));
        assert!(html.contains("&lt;none&gt;"));
    }

    #[test]
    fn test_base_html_sets_title() {
        let html = base_html("Results • Citation Chaining Prototype", "<p>body</p>");
        assert!(html.contains("<title>Results • Citation Chaining Prototype</title>"));
        assert!(html.contains("<p>body</p>"));
    }
}
