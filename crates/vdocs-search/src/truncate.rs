//! Excerpt truncation and hash humanization.

use crate::casefold::find_folded;

/// Truncate `text` to a window around the first case-insensitive occurrence
/// of `query`, keeping `context_len` characters on each side.
///
/// Ellipsis markers appear only at boundaries where characters were
/// actually removed. When the query does not occur, the leading
/// `2 * context_len` characters are returned unmarked.
#[must_use]
pub fn truncate_with_context(text: &str, query: &str, context_len: usize) -> String {
    let chars: Vec<char> = text.chars().collect();

    let Some((match_start, match_end)) = find_folded(&chars, query.trim()) else {
        return chars.iter().take(context_len * 2).collect();
    };

    let start = match_start.saturating_sub(context_len);
    let end = (match_end + context_len).min(chars.len());

    let mut result: String = chars[start..end].iter().collect();
    if start > 0 {
        result = format!("... {result}");
    }
    if end < chars.len() {
        result = format!("{result} ...");
    }
    result
}

/// Turn a URL hash fragment into a readable heading.
///
/// `getting-started` becomes `Getting Started`.
#[must_use]
pub fn humanize_hash(hash: &str) -> String {
    hash.split('-')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_truncate_both_sides() {
        let text = format!("{}setup{}", "a".repeat(10), "b".repeat(10));

        let result = truncate_with_context(&text, "setup", 3);

        assert_eq!(result, "... aaasetupbbb ...");
    }

    #[test]
    fn test_truncate_markers_only_where_removed() {
        let result = truncate_with_context("0123456789setupABCDEFGHIJ", "setup", 3);

        assert_eq!(result, "... 789setupABC ...");
    }

    #[test]
    fn test_truncate_match_at_start() {
        let result = truncate_with_context("setup comes first here", "setup", 5);

        assert_eq!(result, "setup come ...");
    }

    #[test]
    fn test_truncate_match_at_end() {
        let result = truncate_with_context("this ends with setup", "setup", 5);

        assert_eq!(result, "... with setup");
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        let result = truncate_with_context("run setup now", "setup", 40);

        assert_eq!(result, "run setup now");
    }

    #[test]
    fn test_truncate_no_match_takes_prefix() {
        let result = truncate_with_context("abcdefghij", "zzz", 3);

        assert_eq!(result, "abcdef");
    }

    #[test]
    fn test_truncate_case_insensitive() {
        let result = truncate_with_context("Run SETUP now", "setup", 40);

        assert_eq!(result, "Run SETUP now");
    }

    #[test]
    fn test_humanize_hash() {
        assert_eq!(humanize_hash("getting-started"), "Getting Started");
        assert_eq!(humanize_hash("api"), "Api");
        assert_eq!(humanize_hash(""), "");
    }
}
