//! Relevance filtering and scoring.
//!
//! The filter rejects noise (single-letter matches, partial matches of very
//! short queries); the score is an additive heuristic used only to order
//! results, never exposed to the UI.

use regex::Regex;

use crate::tuning::SearchTuning;

/// Whether `content` is a relevant result for `query`.
///
/// Queries below the minimum length match nothing. Single-word queries need
/// a word-boundary match unless the query reaches `word_match_min_len`
/// (tolerates partial-word typing). Multi-word queries need every
/// non-trivial word as a substring, in any position.
#[must_use]
pub fn is_relevant(content: &str, query: &str, tuning: &SearchTuning) -> bool {
    let normalized_query = query.trim().to_lowercase();
    let normalized_content = content.to_lowercase();

    if normalized_query.chars().count() < tuning.min_query_len {
        return false;
    }

    let words: Vec<&str> = normalized_query.split_whitespace().collect();

    if words.len() == 1 {
        let at_word_edge = word_edge_regex(&normalized_query)
            .is_some_and(|re| re.is_match(&normalized_content));
        return at_word_edge || normalized_query.chars().count() >= tuning.word_match_min_len;
    }

    words.iter().all(|word| {
        word.chars().count() < tuning.min_query_len || normalized_content.contains(word)
    })
}

/// Additive relevance score for descending sort.
#[must_use]
pub fn relevance_score(content: &str, query: &str, tuning: &SearchTuning) -> i32 {
    let normalized_query = query.trim().to_lowercase();
    let normalized_content = content.to_lowercase();
    let mut score = 0;

    if !normalized_query.is_empty() && normalized_content.contains(&normalized_query) {
        score += tuning.substring_score;
    }

    if whole_word_regex(&normalized_query).is_some_and(|re| re.is_match(content)) {
        score += tuning.word_boundary_score;
    }

    let len = content.chars().count();
    if len < tuning.short_content_len {
        score += tuning.short_content_score;
    }
    if len > tuning.long_content_len {
        score -= tuning.long_content_penalty;
    }

    score
}

/// Regex matching the query anchored at either word edge.
fn word_edge_regex(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    let escaped = regex::escape(query);
    Regex::new(&format!(r"(?i)\b{escaped}|{escaped}\b")).ok()
}

/// Regex matching the query as a whole word.
fn whole_word_regex(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    let escaped = regex::escape(query);
    Regex::new(&format!(r"(?i)\b{escaped}\b")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> SearchTuning {
        SearchTuning::default()
    }

    #[test]
    fn test_single_character_query_rejected() {
        assert!(!is_relevant("anything at all", "a", &tuning()));
        assert!(!is_relevant("anything at all", " a ", &tuning()));
    }

    #[test]
    fn test_two_character_query_needs_word_edge() {
        // "ui" starts a word here
        assert!(is_relevant("ui components", "ui", &tuning()));
        // "ch" only appears mid-word
        assert!(!is_relevant("searching", "ch", &tuning()));
    }

    #[test]
    fn test_three_character_query_tolerates_partial_match() {
        assert!(is_relevant("searching", "arc", &tuning()));
    }

    #[test]
    fn test_multi_word_query_is_conjunctive() {
        let content = "Install the package before setup begins";

        assert!(is_relevant(content, "install setup", &tuning()));
        assert!(!is_relevant(content, "install teardown", &tuning()));
    }

    #[test]
    fn test_multi_word_short_words_pass() {
        // "a" is below the word threshold and does not constrain the match
        assert!(is_relevant("install guide", "install a guide", &tuning()));
    }

    #[test]
    fn test_score_substring_and_word_boundary() {
        let t = tuning();

        // "setup" as a whole word: substring + boundary + short content
        assert_eq!(relevance_score("Setup", "setup", &t), 175);
        // partial word: substring + short content only
        assert_eq!(relevance_score("setups", "setup", &t), 125);
    }

    #[test]
    fn test_score_long_content_penalized() {
        let t = tuning();
        let long = format!("setup {}", "x".repeat(250));

        // substring + boundary - long penalty
        assert_eq!(relevance_score(&long, "setup", &t), 140);
    }

    #[test]
    fn test_score_no_match() {
        let t = tuning();

        // no substring, no boundary, short content bonus only
        assert_eq!(relevance_score("other words", "setup", &t), 25);
    }

    #[test]
    fn test_regex_metacharacters_escaped() {
        // two-character query with a metacharacter goes through the
        // word-edge regex; an unescaped "+" would be a parse error or match
        // repetition instead of the literal
        assert!(is_relevant("use c+ here", "c+", &tuning()));
        assert!(!is_relevant("ccc", "c+", &tuning()));
    }
}
