//! Case-insensitive matching over char sequences.
//!
//! Content can be arbitrary UTF-8, so matching works on char indices, never
//! byte offsets.

/// Single-character case fold.
pub(crate) fn fold(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// First case-insensitive occurrence of `query` in `haystack`, as a
/// `[start, end)` char-index range.
pub(crate) fn find_folded(haystack: &[char], query: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = query.chars().map(fold).collect();
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }

    (0..=haystack.len() - needle.len())
        .find(|&start| {
            haystack[start..start + needle.len()]
                .iter()
                .zip(&needle)
                .all(|(&h, &n)| fold(h) == n)
        })
        .map(|start| (start, start + needle.len()))
}
