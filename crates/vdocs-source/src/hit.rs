//! Raw search hits as delivered by the search index.

use serde::{Deserialize, Serialize};

/// Granularity of a search hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    /// The page itself (title-level hit).
    Page,
    /// A heading within a page; URL carries a `#fragment`.
    Heading,
    /// Body text within a page; URL carries the owning heading's `#fragment`.
    Text,
}

/// One raw hit from the search index.
///
/// Hits arrive as a flat stream per query; the grouping core assembles them
/// into page-grouped, section-nested results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Hit granularity.
    #[serde(rename = "type")]
    pub kind: HitKind,
    /// Target URL; heading and text hits carry a hash fragment.
    pub url: String,
    /// Matched content: page title, heading text, or body excerpt.
    pub content: String,
    /// Page tags, populated on `page` hits.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl SearchHit {
    /// URL of the page owning this hit (hash fragment stripped).
    #[must_use]
    pub fn page_url(&self) -> &str {
        match self.kind {
            HitKind::Page => &self.url,
            HitKind::Heading | HitKind::Text => {
                self.url.split('#').next().unwrap_or(&self.url)
            }
        }
    }

    /// Hash fragment of the URL, if any.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.url.split_once('#').map(|(_, hash)| hash)
    }
}
