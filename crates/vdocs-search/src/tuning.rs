//! Relevance and scoring knobs.

use serde::Deserialize;

/// Tuning parameters for relevance filtering, scoring, and result shaping.
///
/// Defaults mirror the values the UI was tuned against; deployments can
/// override any of them through the `[search]` config section.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchTuning {
    /// Queries shorter than this (in characters, trimmed) return nothing.
    pub min_query_len: usize,
    /// Single-word queries at least this long skip the word-boundary
    /// requirement, tolerating partial-word typing.
    pub word_match_min_len: usize,
    /// Score for a substring match.
    pub substring_score: i32,
    /// Bonus for a word-boundary match.
    pub word_boundary_score: i32,
    /// Content shorter than this is heading-like and gets a bonus.
    pub short_content_len: usize,
    /// Bonus for heading-like content.
    pub short_content_score: i32,
    /// Content longer than this is unfocused and gets a penalty.
    pub long_content_len: usize,
    /// Penalty subtracted for unfocused content.
    pub long_content_penalty: i32,
    /// Cap on total surviving results.
    pub max_results: usize,
    /// Cap on matches retained per section.
    pub max_matches_per_section: usize,
    /// Characters of context kept on each side of a match in excerpts.
    pub context_len: usize,
}

impl Default for SearchTuning {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            word_match_min_len: 3,
            substring_score: 100,
            word_boundary_score: 50,
            short_content_len: 50,
            short_content_score: 25,
            long_content_len: 200,
            long_content_penalty: 10,
            max_results: 30,
            max_matches_per_section: 3,
            context_len: 40,
        }
    }
}
