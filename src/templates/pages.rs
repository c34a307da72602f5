//! Landing, results and details pages.
//!
//! [`render`] is the only entry point: it takes the decoded URL state and a
//! copy of the session context, and hands back the page plus the context the
//! session should hold afterwards. It never fails.

use crate::corpus::{cited_papers, find_paper, lookup_results, SEED_TITLE};
use crate::grouping::{grouped_results, sort_by_relevance};
use crate::models::GroupingMode;
use crate::navigation::{goto_landing, goto_results, NavigationState, Page};
use crate::session::SessionContext;

use super::components::{base_html, html_escape, message, paper_card, MessageKind};
use super::sidebar::history_sidebar;

pub const APP_TITLE: &str = "Citation Chaining Prototype";
pub const NOT_FOUND_MESSAGE: &str = "Paper not found in the demo dataset.";
pub const NO_CITATIONS_MESSAGE: &str = "No cited papers in the demo graph for this paper.";

#[derive(Debug, Clone)]
pub struct Rendered {
    pub title: String,
    pub html: String,
    pub session: SessionContext,
}

pub fn page_title(nav: &NavigationState) -> String {
    match nav.page {
        Page::Landing => APP_TITLE.to_string(),
        Page::Results => format!("Results • {}", APP_TITLE),
        Page::Details => format!("Paper • {}", APP_TITLE),
    }
}

pub fn render(nav: &NavigationState, session: SessionContext) -> Rendered {
    let title = page_title(nav);
    let (body, session) = match (nav.page, nav.paper.as_deref()) {
        (Page::Results, _) => render_results(nav, session),
        (Page::Details, Some(paper_id)) => render_details(paper_id, nav, session),
        _ => render_landing(session),
    };
    let html = base_html(&title, &body);
    Rendered {
        title,
        html,
        session,
    }
}

// ============================================================================
// Landing
// ============================================================================

fn search_form(query: &str, placeholder: &str, class: &str) -> String {
    format!(
        r#"<form class="{class}" action="/search" method="post">
    <input type="text" name="q" value="{value}" placeholder="{placeholder}" aria-label="Seed paper or query">
    <button type="submit" class="btn primary block">Search</button>
</form>"#,
        class = class,
        value = html_escape(query),
        placeholder = html_escape(placeholder),
    )
}

fn render_landing(session: SessionContext) -> (String, SessionContext) {
    let body = format!(
        r#"<div class="landing-wrap">
    <h1 class="landing-title">{title}</h1>
    <p class="landing-subtitle">Paste a paper title, DOI, or citation to start.</p>
    {form}
</div>"#,
        title = APP_TITLE,
        form = search_form(&session.query, &format!("e.g., {}", SEED_TITLE), "landing-form"),
    );
    (body, session)
}

// ============================================================================
// Results
// ============================================================================

fn results_topbar(query: &str) -> String {
    format!(
        r#"<form class="topbar" action="/search" method="post">
    <div class="query-field">
        <label for="results-query">Seed paper / query</label>
        <input type="text" id="results-query" name="q" value="{value}" placeholder="Type a paper title, DOI, or citation…">
    </div>
    <button type="submit" class="btn primary">Search</button>
    <a class="btn" href="{back}">Back</a>
</form>"#,
        value = html_escape(query),
        back = html_escape(&goto_landing().href()),
    )
}

fn grouping_toggle(mode: GroupingMode, chain: &[String]) -> String {
    let checked = if mode == GroupingMode::Canonical { " checked" } else { "" };
    format!(
        r#"<form class="toggle" action="/grouping" method="post">
    <input type="hidden" name="mode" value="{next}">
    <input type="hidden" name="chain" value="{chain}">
    <input type="checkbox" id="grouping-toggle"{checked} onchange="this.form.submit()">
    <label for="grouping-toggle">AI mode (merge similar keywords)</label>
    <noscript><button type="submit" class="btn">Apply</button></noscript>
</form>
<p class="caption">Non-AI mode groups papers by exact keywords. AI mode merges related keywords into concepts.</p>"#,
        next = mode.toggled().as_str(),
        chain = html_escape(&chain.join(",")),
        checked = checked,
    )
}

fn render_results(nav: &NavigationState, mut session: SessionContext) -> (String, SessionContext) {
    let chain = nav.chain();
    let found = lookup_results(&session.query);
    let papers = found.result_set().papers();
    let groups = grouped_results(&papers, session.grouping);

    let shown_query = if session.query.trim().is_empty() {
        "your query"
    } else {
        session.query.as_str()
    };

    let mut main = grouping_toggle(session.grouping, chain);
    main.push_str(&format!(
        "<h3>Papers cited by: <em>{}</em></h3><p>Showing <b>{}</b> cited papers (hardcoded demo set).</p>",
        html_escape(shown_query),
        papers.len()
    ));

    for (label, members) in &groups {
        main.push_str(&format!(
            r#"<details class="group" open><summary>{}  •  {} paper(s)</summary>"#,
            html_escape(label),
            members.len()
        ));
        for paper in members {
            main.push_str(&paper_card(paper, chain));
        }
        main.push_str("</details>");
    }

    session.viewed_papers = chain.to_vec();

    let body = format!(
        r#"{topbar}<hr class="divider">
<div class="columns">
    <div class="main-col">{main}</div>
    <div class="history-col">{sidebar}</div>
</div>"#,
        topbar = results_topbar(&session.query),
        main = main,
        sidebar = history_sidebar(&session.viewed_papers),
    );
    (body, session)
}

// ============================================================================
// Details
// ============================================================================

fn render_details(
    paper_id: &str,
    nav: &NavigationState,
    mut session: SessionContext,
) -> (String, SessionContext) {
    let chain = nav.chain();
    let mut body = format!(
        r#"<div><a class="btn" href="{}">← Back</a></div>"#,
        html_escape(&goto_results(chain).href())
    );

    let Some(paper) = find_paper(paper_id) else {
        body.push_str(&message(MessageKind::Warning, NOT_FOUND_MESSAGE));
        return (body, session);
    };

    let mut main = format!(
        r#"<h1>{title}</h1>
<p class="caption">{authors} • {venue} • {year}</p>
<h3>Keywords</h3>
<p>{keywords}</p>
<h3>Abstract</h3>
<p>{abstract_text}</p>
<hr class="divider">
<h3>Papers this paper cites</h3>"#,
        title = html_escape(paper.title),
        authors = html_escape(paper.authors),
        venue = html_escape(paper.venue),
        year = paper.year,
        keywords = html_escape(&paper.keyword_line()),
        abstract_text = html_escape(paper.abstract_text),
    );

    let mut cited = cited_papers(paper.id);
    if cited.is_empty() {
        main.push_str(&message(MessageKind::Info, NO_CITATIONS_MESSAGE));
    } else {
        sort_by_relevance(&mut cited);
        for cited_paper in &cited {
            main.push_str(&paper_card(cited_paper, chain));
        }
    }

    session.viewed_papers = chain.to_vec();

    body.push_str(&format!(
        r#"<div class="columns">
    <div class="main-col">{main}</div>
    <div class="history-col">{sidebar}</div>
</div>"#,
        main = main,
        sidebar = history_sidebar(&session.viewed_papers),
    ));
    (body, session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CONCEPT_MENTAL_MODELS;
    use crate::navigation::{goto_details, start_new_chain};

    fn chain(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_landing_prefills_query() {
        let session = SessionContext {
            query: "my \"seed\"".to_string(),
            ..Default::default()
        };
        let out = render(&goto_landing(), session.clone());
        assert_eq!(out.title, APP_TITLE);
        assert!(out.html.contains("value=\"my &quot;seed&quot;\""));
        assert!(out.html.contains("action=\"/search\""));
        assert_eq!(out.session, session);
    }

    #[test]
    fn test_results_lists_default_set_for_unknown_query() {
        let session = SessionContext {
            query: "random unseen text".to_string(),
            ..Default::default()
        };
        let out = render(&goto_results(&start_new_chain()), session);
        assert_eq!(out.title, "Results • Citation Chaining Prototype");
        assert!(out.html.contains("Showing <b>8</b> cited papers"));
        assert!(out.html.contains("Papers cited by: <em>random unseen text</em>"));
        assert!(out.html.contains("mental models  •  2 paper(s)"));
        assert_eq!(out.session.viewed_papers, start_new_chain());
    }

    #[test]
    fn test_results_placeholder_query() {
        let out = render(&goto_results(&start_new_chain()), SessionContext::default());
        assert!(out.html.contains("Papers cited by: <em>your query</em>"));
    }

    #[test]
    fn test_results_canonical_mode() {
        let session = SessionContext {
            grouping: GroupingMode::Canonical,
            ..Default::default()
        };
        let out = render(&goto_results(&start_new_chain()), session);
        // Concept labels go through the escaper like any other text
        let label = html_escape(CONCEPT_MENTAL_MODELS);
        assert_ne!(label, CONCEPT_MENTAL_MODELS);
        assert!(out.html.contains(&format!("{}  •  ", label)));
        assert!(out.html.contains(" checked "));
        assert!(out.html.contains("name=\"mode\" value=\"exact\""));
    }

    #[test]
    fn test_details_unknown_paper_is_not_found() {
        let nav = goto_details("does_not_exist", &start_new_chain());
        let out = render(&nav, SessionContext::default());
        assert_eq!(out.title, "Paper • Citation Chaining Prototype");
        assert!(out.html.contains(NOT_FOUND_MESSAGE));
        // The stylesheet always names the class, so look for the element itself
        assert!(!out.html.contains(r#"<div class="history-sidebar">"#));
        assert!(!out.html.contains("Viewing History"));
    }

    #[test]
    fn test_details_lists_citations_by_relevance() {
        let nav = goto_details("lee_see_2004_trust", &start_new_chain());
        let out = render(&nav, SessionContext::default());
        assert!(out.html.contains("<h1>Appropriate Trust and Reliance in Human-AI Teams</h1>"));
        let parasuraman = out.html.find("A Model for Types and Levels").unwrap();
        let hoff = out.html.find("Trust in Automation: Integrating").unwrap();
        assert!(parasuraman < hoff);
        assert_eq!(out.session.viewed_papers, chain(&["seed_paper", "lee_see_2004_trust"]));
    }

    #[test]
    fn test_details_leaf_has_no_citations() {
        let nav = goto_details("model_cards_2019", &start_new_chain());
        let out = render(&nav, SessionContext::default());
        assert!(out.html.contains(NO_CITATIONS_MESSAGE));
    }

    #[test]
    fn test_details_cards_extend_chain() {
        let nav = goto_details("miller_2019_explanations", &start_new_chain());
        let out = render(&nav, SessionContext::default());
        assert!(out.html.contains(
            "paper=johnson_laird_1983&amp;chain=seed_paper%2Cmiller_2019_explanations%2Cjohnson_laird_1983"
        ));
        assert!(out.html.contains("href=\"/?page=results&amp;chain=seed_paper%2Cmiller_2019_explanations\">← Back"));
    }
}
