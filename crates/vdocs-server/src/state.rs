//! Application state.
//!
//! Shared state for all request handlers.

use vdocs_search::SearchTuning;
use vdocs_source::SourceSet;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Loaded content sources, one per version.
    pub(crate) sources: SourceSet,
    /// Search tuning parameters.
    pub(crate) tuning: SearchTuning,
    /// Locale prefix applied to generated URLs, if any.
    pub(crate) default_locale: Option<String>,
    /// Enable verbose output.
    pub(crate) verbose: bool,
}

impl AppState {
    /// Locale for a request: the explicit query value, or the configured
    /// default.
    pub(crate) fn locale<'a>(&'a self, requested: Option<&'a str>) -> Option<&'a str> {
        requested.or(self.default_locale.as_deref())
    }
}
