//! Page-grouped, section-nested search results.
//!
//! Assembles the flat hit stream into the structure the command palette
//! renders: one group per page, sections keyed by heading, text excerpts
//! truncated around the first match.

use std::collections::HashMap;

use serde::Serialize;
use vdocs_source::{HitKind, SearchHit};

use crate::relevance::{is_relevant, relevance_score};
use crate::truncate::{humanize_hash, truncate_with_context};
use crate::tuning::SearchTuning;

/// Placeholder heading for text hits whose URL carries no hash fragment.
const CONTENT_HEADING: &str = "Content";

/// One excerpt within a section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    /// Truncated excerpt.
    pub content: String,
    /// Deep link to the match.
    pub url: String,
}

/// Matches under one heading of a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchSection {
    /// Section heading text.
    pub heading: String,
    /// Excerpts, capped per tuning.
    pub matches: Vec<SearchMatch>,
}

/// All results for one page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultGroup {
    /// Page title, "Untitled" when no page hit supplied one.
    pub page_title: String,
    /// Page URL (hash fragment stripped).
    pub page_url: String,
    /// Page tags from the page hit's metadata.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Sections in first-seen order.
    pub sections: Vec<SearchSection>,
}

/// Group raw hits into ranked, page-grouped, section-nested results.
///
/// Deterministic: identical hits and query produce identical output (stable
/// sort by descending score, original hit order for ties).
#[must_use]
pub fn group_results(
    hits: &[SearchHit],
    query: &str,
    tuning: &SearchTuning,
) -> Vec<SearchResultGroup> {
    if query.trim().chars().count() < tuning.min_query_len {
        return Vec::new();
    }

    // Heading content keyed by URL hash fragment, for resolving text hits.
    let mut headings_by_hash: HashMap<&str, &str> = HashMap::new();
    for hit in hits {
        if hit.kind == HitKind::Heading {
            if let Some(hash) = hit.fragment() {
                headings_by_hash.insert(hash, &hit.content);
            }
        }
    }

    let mut relevant: Vec<&SearchHit> = hits
        .iter()
        .filter(|hit| is_relevant(&hit.content, query, tuning))
        .collect();
    relevant.sort_by_cached_key(|hit| std::cmp::Reverse(relevance_score(&hit.content, query, tuning)));
    relevant.truncate(tuning.max_results);

    let mut groups: Vec<SearchResultGroup> = Vec::new();

    for hit in relevant {
        let page_url = hit.page_url();
        let page_hit = hits
            .iter()
            .find(|h| h.kind == HitKind::Page && h.url == page_url);

        let group_idx = groups
            .iter()
            .position(|group| group.page_url == page_url)
            .unwrap_or_else(|| {
                let page_title = if hit.kind == HitKind::Page {
                    hit.content.clone()
                } else {
                    page_hit.map_or_else(|| "Untitled".to_owned(), |h| h.content.clone())
                };
                groups.push(SearchResultGroup {
                    page_title,
                    page_url: page_url.to_owned(),
                    tags: page_hit.map(|h| h.tags.clone()).unwrap_or_default(),
                    sections: Vec::new(),
                });
                groups.len() - 1
            });
        let group = &mut groups[group_idx];

        if hit.kind == HitKind::Page {
            continue;
        }

        let heading = if hit.kind == HitKind::Heading {
            hit.content.clone()
        } else {
            match hit.fragment().filter(|hash| !hash.is_empty()) {
                Some(hash) => headings_by_hash
                    .get(hash)
                    .map_or_else(|| humanize_hash(hash), |&h| h.to_owned()),
                None => CONTENT_HEADING.to_owned(),
            }
        };

        let section_idx = group
            .sections
            .iter()
            .position(|section| section.heading == heading)
            .unwrap_or_else(|| {
                group.sections.push(SearchSection {
                    heading,
                    matches: Vec::new(),
                });
                group.sections.len() - 1
            });

        if hit.kind == HitKind::Text {
            let truncated = truncate_with_context(&hit.content, query, tuning.context_len);
            let section = &mut group.sections[section_idx];
            if !section.matches.iter().any(|m| m.content == truncated) {
                section.matches.push(SearchMatch {
                    content: truncated,
                    url: hit.url.clone(),
                });
            }
        }
    }

    // Drop empty placeholder sections, cap matches per section.
    for group in &mut groups {
        group
            .sections
            .retain(|s| !s.matches.is_empty() || s.heading != CONTENT_HEADING);
        for section in &mut group.sections {
            section.matches.truncate(tuning.max_matches_per_section);
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn hit(kind: HitKind, url: &str, content: &str) -> SearchHit {
        SearchHit {
            kind,
            url: url.to_owned(),
            content: content.to_owned(),
            tags: Vec::new(),
        }
    }

    fn intro_hits() -> Vec<SearchHit> {
        vec![
            hit(HitKind::Page, "/docs/intro", "Intro"),
            hit(HitKind::Heading, "/docs/intro#setup", "Setup"),
            hit(
                HitKind::Text,
                "/docs/intro#setup",
                "Install the package before setup begins.",
            ),
        ]
    }

    #[test]
    fn test_empty_hits_yield_no_groups() {
        assert!(group_results(&[], "anything", &SearchTuning::default()).is_empty());
    }

    #[test]
    fn test_short_query_yields_no_groups() {
        let hits = intro_hits();

        assert!(group_results(&hits, "a", &SearchTuning::default()).is_empty());
        assert!(group_results(&hits, "  a  ", &SearchTuning::default()).is_empty());
    }

    #[test]
    fn test_groups_by_page_with_section_and_match() {
        let groups = group_results(&intro_hits(), "setup", &SearchTuning::default());

        assert_eq!(groups.len(), 1);
        let group = &groups[0];
        assert_eq!(group.page_url, "/docs/intro");
        assert_eq!(group.page_title, "Intro");
        assert_eq!(group.sections.len(), 1);
        assert_eq!(group.sections[0].heading, "Setup");
        assert_eq!(group.sections[0].matches.len(), 1);
        assert!(group.sections[0].matches[0].content.contains("setup"));
        assert_eq!(group.sections[0].matches[0].url, "/docs/intro#setup");
    }

    #[test]
    fn test_missing_page_hit_titles_untitled() {
        let hits = vec![hit(
            HitKind::Text,
            "/docs/lost#setup",
            "setup instructions here",
        )];

        let groups = group_results(&hits, "setup", &SearchTuning::default());

        assert_eq!(groups[0].page_title, "Untitled");
    }

    #[test]
    fn test_text_hit_without_heading_hit_humanizes_hash() {
        let hits = vec![hit(
            HitKind::Text,
            "/docs/guide#getting-started",
            "setup steps live here",
        )];

        let groups = group_results(&hits, "setup", &SearchTuning::default());

        assert_eq!(groups[0].sections[0].heading, "Getting Started");
    }

    #[test]
    fn test_text_hit_without_hash_uses_content_placeholder() {
        let hits = vec![hit(HitKind::Text, "/docs/guide", "setup steps live here")];

        let groups = group_results(&hits, "setup", &SearchTuning::default());

        assert_eq!(groups[0].sections[0].heading, "Content");
        assert_eq!(groups[0].sections[0].matches.len(), 1);
    }

    #[test]
    fn test_heading_only_section_is_kept() {
        let hits = vec![
            hit(HitKind::Page, "/docs/intro", "Intro"),
            hit(HitKind::Heading, "/docs/intro#setup", "Setup"),
        ];

        let groups = group_results(&hits, "setup", &SearchTuning::default());

        assert_eq!(groups[0].sections.len(), 1);
        assert!(groups[0].sections[0].matches.is_empty());
    }

    #[test]
    fn test_duplicate_excerpts_deduplicated() {
        let hits = vec![
            hit(HitKind::Text, "/docs/a#setup", "run setup now"),
            hit(HitKind::Text, "/docs/a#setup", "run setup now"),
        ];

        let groups = group_results(&hits, "setup", &SearchTuning::default());

        assert_eq!(groups[0].sections[0].matches.len(), 1);
    }

    #[test]
    fn test_matches_capped_per_section() {
        let hits: Vec<SearchHit> = (0..6)
            .map(|i| {
                hit(
                    HitKind::Text,
                    "/docs/a#setup",
                    &format!("setup step number {i}"),
                )
            })
            .collect();

        let groups = group_results(&hits, "setup", &SearchTuning::default());

        assert_eq!(groups[0].sections[0].matches.len(), 3);
    }

    #[test]
    fn test_results_capped_in_total() {
        let hits: Vec<SearchHit> = (0..40)
            .map(|i| hit(HitKind::Page, &format!("/docs/p{i}"), "setup guide"))
            .collect();

        let groups = group_results(&hits, "setup", &SearchTuning::default());

        assert_eq!(groups.len(), 30);
    }

    #[test]
    fn test_groups_ordered_by_score() {
        let hits = vec![
            hit(
                HitKind::Text,
                "/docs/weak#other",
                "something mentioning setup somewhere in a longer paragraph of text",
            ),
            hit(HitKind::Heading, "/docs/strong#setup", "Setup"),
        ];

        let groups = group_results(&hits, "setup", &SearchTuning::default());

        assert_eq!(groups[0].page_url, "/docs/strong");
        assert_eq!(groups[1].page_url, "/docs/weak");
    }

    #[test]
    fn test_tags_carried_from_page_hit() {
        let mut page = hit(HitKind::Page, "/docs/intro", "Intro setup guide");
        page.tags = vec!["guide".to_owned()];
        let hits = vec![page];

        let groups = group_results(&hits, "setup", &SearchTuning::default());

        assert_eq!(groups[0].tags, ["guide"]);
    }

    #[test]
    fn test_deterministic_output() {
        let hits = intro_hits();
        let tuning = SearchTuning::default();

        let first = group_results(&hits, "setup", &tuning);
        let second = group_results(&hits, "setup", &tuning);

        assert_eq!(first, second);
    }

    #[test]
    fn test_serialization_shape() {
        let groups = group_results(&intro_hits(), "setup", &SearchTuning::default());
        let json = serde_json::to_value(&groups).unwrap();

        assert_eq!(json[0]["pageTitle"], "Intro");
        assert_eq!(json[0]["pageUrl"], "/docs/intro");
        assert!(json[0].get("tags").is_none());
        assert_eq!(json[0]["sections"][0]["heading"], "Setup");
    }
}
