//! Viewing history sidebar.
//!
//! Lists the navigation chain newest first. Each paper entry links back to
//! its details page with the chain cut at that step.

use crate::corpus::{find_paper, SEED_TITLE};
use crate::navigation::{goto_details, goto_results, start_new_chain, SEED_SENTINEL};

use super::components::{html_escape, truncate};

const TITLE_CHARS: usize = 50;
const AUTHOR_CHARS: usize = 25;

pub fn history_sidebar(chain: &[String]) -> String {
    let mut html = String::from(r#"<div class="history-sidebar"><h3>📚 Viewing History</h3>"#);

    if chain.is_empty() {
        html.push_str(
            r#"<p class="caption">No papers viewed yet. Click on papers to start tracking your research path.</p>"#,
        );
        html.push_str("</div>");
        return html;
    }

    html.push_str(&format!(
        r#"<p class="caption">{} step(s) in your citation chain</p>"#,
        chain.len()
    ));

    for (idx, paper_id) in chain.iter().enumerate().rev() {
        let step = idx + 1;

        if idx == 0 && paper_id == SEED_SENTINEL {
            html.push_str(&format!(
                r#"<div class="history-item seed">
    <div class="history-step">STEP {step} • SEED</div>
    <div class="history-item-title">🌱 {title}</div>
    <div class="history-item-meta">Starting point</div>
</div>"#,
                step = step,
                title = html_escape(&truncate(SEED_TITLE, TITLE_CHARS)),
            ));
            continue;
        }

        let Some(paper) = find_paper(paper_id) else {
            continue;
        };

        let href = goto_details(paper.id, &chain[..=idx]).href();
        html.push_str(&format!(
            r#"<a class="history-link" href="{href}">
    <div class="history-item">
        <div class="history-step">STEP {step}</div>
        <div class="history-item-title">{title}</div>
        <div class="history-item-meta">{authors} • {year}</div>
    </div>
</a>"#,
            href = html_escape(&href),
            step = step,
            title = html_escape(&truncate(paper.title, TITLE_CHARS)),
            authors = html_escape(&truncate(paper.authors, AUTHOR_CHARS)),
            year = paper.year,
        ));
    }

    html.push_str(&format!(
        r#"<a class="btn block" href="{}">Clear History</a>"#,
        html_escape(&goto_results(&start_new_chain()).href())
    ));
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_history() {
        let html = history_sidebar(&[]);
        assert!(html.contains("No papers viewed yet"));
        assert!(!html.contains("Clear History"));
    }

    #[test]
    fn test_most_recent_first() {
        let html = history_sidebar(&chain(&["seed_paper", "norman_1983", "johnson_laird_1983"]));
        assert!(html.contains("3 step(s) in your citation chain"));
        let step3 = html.find("STEP 3").unwrap();
        let step2 = html.find("STEP 2").unwrap();
        let seed = html.find("STEP 1 • SEED").unwrap();
        assert!(step3 < step2 && step2 < seed);
    }

    #[test]
    fn test_entries_truncate_chain_at_step() {
        let html = history_sidebar(&chain(&["seed_paper", "norman_1983", "johnson_laird_1983"]));
        assert!(html.contains("paper=norman_1983&amp;chain=seed_paper%2Cnorman_1983\""));
        assert!(html.contains(
            "paper=johnson_laird_1983&amp;chain=seed_paper%2Cnorman_1983%2Cjohnson_laird_1983\""
        ));
    }

    #[test]
    fn test_long_fields_truncated() {
        let html = history_sidebar(&chain(&["seed_paper", "parasuraman_2000"]));
        assert!(html.contains("A Model for Types and Levels of Human Interaction ..."));
        assert!(html.contains("R. Parasuraman, T. Sherid... • 2000"));
        assert!(html.contains("🌱 Beyond Accuracy: The Role of Mental Models in Huma..."));
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let html = history_sidebar(&chain(&["seed_paper", "ghost"]));
        assert!(html.contains("2 step(s)"));
        assert!(!html.contains("STEP 2"));
    }

    #[test]
    fn test_clear_history_resets_to_seed() {
        let html = history_sidebar(&chain(&["seed_paper", "norman_1983"]));
        assert!(html.contains("href=\"/?page=results&amp;chain=seed_paper\">Clear History"));
    }
}
