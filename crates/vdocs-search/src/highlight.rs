//! Match tokenization for UI highlighting.
//!
//! Splits a string into plain and query-matching runs so the UI can wrap
//! matches in `<mark>` elements. Matched runs keep their original casing.

use serde::Serialize;

use crate::casefold::find_folded;

/// Kind of a highlight run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightKind {
    /// Plain text.
    Text,
    /// A query match.
    Mark,
}

/// One run of a tokenized string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HighlightPart {
    /// Run kind.
    pub kind: HighlightKind,
    /// Run content, original casing preserved.
    pub content: String,
}

impl HighlightPart {
    fn text(content: String) -> Self {
        Self {
            kind: HighlightKind::Text,
            content,
        }
    }

    fn mark(content: String) -> Self {
        Self {
            kind: HighlightKind::Mark,
            content,
        }
    }
}

/// Tokenize `text` into alternating plain and match runs.
///
/// A blank query yields the whole text as one plain run.
#[must_use]
pub fn parse_highlight_parts(text: &str, query: &str) -> Vec<HighlightPart> {
    if query.trim().is_empty() {
        return vec![HighlightPart::text(text.to_owned())];
    }

    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![HighlightPart::text(String::new())];
    }

    let mut parts = Vec::new();
    let mut cursor = 0;
    while cursor < chars.len() {
        match find_folded(&chars[cursor..], query) {
            Some((start, end)) => {
                if start > 0 {
                    parts.push(HighlightPart::text(
                        chars[cursor..cursor + start].iter().collect(),
                    ));
                }
                parts.push(HighlightPart::mark(
                    chars[cursor + start..cursor + end].iter().collect(),
                ));
                cursor += end;
            }
            None => {
                parts.push(HighlightPart::text(chars[cursor..].iter().collect()));
                break;
            }
        }
    }

    parts
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_blank_query_single_text_part() {
        let parts = parse_highlight_parts("hello world", "  ");

        assert_eq!(parts, [HighlightPart::text("hello world".to_owned())]);
    }

    #[test]
    fn test_single_match() {
        let parts = parse_highlight_parts("run setup now", "setup");

        assert_eq!(
            parts,
            [
                HighlightPart::text("run ".to_owned()),
                HighlightPart::mark("setup".to_owned()),
                HighlightPart::text(" now".to_owned()),
            ]
        );
    }

    #[test]
    fn test_repeated_matches() {
        let parts = parse_highlight_parts("ab ab", "ab");

        assert_eq!(
            parts,
            [
                HighlightPart::mark("ab".to_owned()),
                HighlightPart::text(" ".to_owned()),
                HighlightPart::mark("ab".to_owned()),
            ]
        );
    }

    #[test]
    fn test_match_preserves_original_case() {
        let parts = parse_highlight_parts("Run SETUP now", "setup");

        assert_eq!(parts[1], HighlightPart::mark("SETUP".to_owned()));
    }

    #[test]
    fn test_no_match_single_text_part() {
        let parts = parse_highlight_parts("hello", "zzz");

        assert_eq!(parts, [HighlightPart::text("hello".to_owned())]);
    }

    #[test]
    fn test_adjacent_matches() {
        let parts = parse_highlight_parts("abab", "ab");

        assert_eq!(
            parts,
            [
                HighlightPart::mark("ab".to_owned()),
                HighlightPart::mark("ab".to_owned()),
            ]
        );
    }
}
