//! Search result grouping and ranking.
//!
//! Consumes the flat hit stream from the search index and a query string,
//! and produces ranked, deduplicated, page-grouped, section-nested results
//! for a command-palette UI:
//! - [`SearchTuning`] — the relevance/scoring knobs (all thresholds are
//!   configuration, not hard-coded behavior)
//! - [`is_relevant`] / [`relevance_score`] — filtering and ranking
//! - [`group_results`] — the grouping pipeline
//! - [`truncate_with_context`] — excerpt windows around the first match
//! - [`parse_highlight_parts`] — match tokenization for UI highlighting
//!
//! Everything is pure: identical hits and query always produce identical
//! output, and source hits are never mutated.

mod casefold;
mod group;
mod highlight;
mod relevance;
mod truncate;
mod tuning;

pub use group::{group_results, SearchMatch, SearchResultGroup, SearchSection};
pub use highlight::{parse_highlight_parts, HighlightKind, HighlightPart};
pub use relevance::{is_relevant, relevance_score};
pub use truncate::{humanize_hash, truncate_with_context};
pub use tuning::SearchTuning;
