//! Keyword grouping for the results page.
//!
//! A paper lands in one group per keyword it carries. In canonical mode the
//! keyword is first mapped to its concept label, so a paper whose keywords
//! share a concept shows up in that group more than once.

use crate::corpus::canonicalize_keyword;
use crate::models::{GroupingMode, Paper};
use indexmap::IndexMap;

pub type Groups<'a> = IndexMap<String, Vec<&'a Paper>>;

/// Partition `papers` by keyword label, preserving first-seen label order and
/// input order inside each group.
pub fn group_papers<'a>(papers: &[&'a Paper], mode: GroupingMode) -> Groups<'a> {
    let mut groups: Groups<'a> = IndexMap::new();
    for paper in papers {
        for keyword in paper.keywords {
            let label = match mode {
                GroupingMode::Exact => *keyword,
                GroupingMode::Canonical => canonicalize_keyword(keyword),
            };
            groups.entry(label.to_string()).or_default().push(*paper);
        }
    }
    groups
}

/// Stable descending sort by relevance.
pub fn sort_by_relevance(papers: &mut [&Paper]) {
    papers.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
}

fn max_relevance(papers: &[&Paper]) -> f64 {
    papers
        .iter()
        .map(|p| p.relevance)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Order groups by their best member, then members by relevance. Ties keep
/// insertion order.
pub fn rank_groups<'a>(groups: Groups<'a>) -> Vec<(String, Vec<&'a Paper>)> {
    let mut ranked: Vec<(String, Vec<&'a Paper>)> = groups.into_iter().collect();
    ranked.sort_by(|(_, a), (_, b)| max_relevance(b).total_cmp(&max_relevance(a)));
    for (_, members) in ranked.iter_mut() {
        sort_by_relevance(members);
    }
    ranked
}

/// Sort, group and rank in one go, as the results page does.
pub fn grouped_results<'a>(
    papers: &[&'a Paper],
    mode: GroupingMode,
) -> Vec<(String, Vec<&'a Paper>)> {
    let mut sorted = papers.to_vec();
    sort_by_relevance(&mut sorted);
    rank_groups(group_papers(&sorted, mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{find_paper, ResultSet, CANONICAL_KEYWORDS, CONCEPT_MENTAL_MODELS, PAPERS};
    use std::collections::HashSet;

    fn seed_papers() -> Vec<&'static Paper> {
        ResultSet::DEFAULT.papers()
    }

    fn keyword_total(papers: &[&Paper]) -> usize {
        papers.iter().map(|p| p.keywords.len()).sum()
    }

    #[test]
    fn test_group_sizes_sum_to_keyword_count() {
        let all: Vec<&Paper> = PAPERS.iter().collect();
        for papers in [seed_papers(), all] {
            for mode in [GroupingMode::Exact, GroupingMode::Canonical] {
                let groups = group_papers(&papers, mode);
                let total: usize = groups.values().map(Vec::len).sum();
                assert_eq!(total, keyword_total(&papers), "mode {}", mode);
            }
        }
    }

    #[test]
    fn test_exact_labels_are_raw_keywords() {
        let papers = seed_papers();
        let groups = group_papers(&papers, GroupingMode::Exact);
        let labels: HashSet<&str> = groups.keys().map(String::as_str).collect();
        let raw: HashSet<&str> = papers.iter().flat_map(|p| p.keywords.iter().copied()).collect();
        assert_eq!(labels, raw);
    }

    #[test]
    fn test_canonical_labels_are_concepts_or_unmapped() {
        let papers = seed_papers();
        let groups = group_papers(&papers, GroupingMode::Canonical);
        let concepts: HashSet<&str> = CANONICAL_KEYWORDS.iter().map(|(_, c)| *c).collect();
        let unmapped: HashSet<&str> = papers
            .iter()
            .flat_map(|p| p.keywords.iter().copied())
            .filter(|k| !CANONICAL_KEYWORDS.iter().any(|(raw, _)| raw == k))
            .collect();
        for label in groups.keys() {
            assert!(
                concepts.contains(label.as_str()) || unmapped.contains(label.as_str()),
                "unexpected label {}",
                label
            );
        }
        assert!(groups.contains_key("machine learning"));
    }

    #[test]
    fn test_canonical_keeps_duplicate_membership() {
        let norman = find_paper("norman_1983").unwrap();
        let groups = group_papers(&[norman], GroupingMode::Canonical);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[CONCEPT_MENTAL_MODELS].len(), 3);
    }

    #[test]
    fn test_groups_ranked_by_best_member() {
        let ranked = grouped_results(&seed_papers(), GroupingMode::Exact);
        let best: Vec<f64> = ranked
            .iter()
            .map(|(_, ps)| ps.iter().map(|p| p.relevance).fold(f64::NEG_INFINITY, f64::max))
            .collect();
        assert!(best.windows(2).all(|w| w[0] >= w[1]));
        // norman (0.95) carries the top three labels, in keyword order
        let top: Vec<&str> = ranked.iter().take(3).map(|(l, _)| l.as_str()).collect();
        assert_eq!(top, vec!["mental models", "human understanding", "cognition"]);
    }

    #[test]
    fn test_negative_relevance_groups_still_ranked() {
        let paper = |id, relevance, keywords| Paper {
            id,
            title: id,
            authors: "",
            year: 2020,
            venue: "",
            relevance,
            keywords,
            snippet: "",
            abstract_text: "",
        };
        let a = paper("a", -0.5, &["x"]);
        let b = paper("b", -0.1, &["y"]);

        let ranked = rank_groups(group_papers(&[&a, &b], GroupingMode::Exact));
        let labels: Vec<&str> = ranked.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["y", "x"]);
    }

    #[test]
    fn test_members_ranked_by_relevance() {
        let ranked = grouped_results(&seed_papers(), GroupingMode::Canonical);
        for (_, members) in &ranked {
            assert!(members.windows(2).all(|w| w[0].relevance >= w[1].relevance));
        }
    }

    #[test]
    fn test_empty_input_has_no_groups() {
        assert!(grouped_results(&[], GroupingMode::Canonical).is_empty());
    }
}
