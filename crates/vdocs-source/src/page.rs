//! Page frontmatter records and the lookup contract.

use serde::{Deserialize, Serialize};

/// Frontmatter metadata attached to a content page.
///
/// All fields are optional; a missing record or field means the page carries
/// no explicit metadata for that concern.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData {
    /// Page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Page description for search display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Explicit sidebar position among siblings (ascending).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    /// Sidebar group label; grouped items render under a shared heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Whether a folder's sidebar entry starts expanded.
    #[serde(default)]
    pub is_open: bool,

    /// Free-form tags, surfaced in search results.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Semantic version, meaningful on version-root index pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Lookup of page metadata by slug path.
///
/// The slug path is relative to the version root, segments joined with `/`
/// (empty string for the version root page itself).
pub trait PageStore {
    /// Get the metadata record for a slug path, if the page exists.
    fn page(&self, slug_path: &str) -> Option<&PageData>;
}

impl PageStore for std::collections::HashMap<String, PageData> {
    fn page(&self, slug_path: &str) -> Option<&PageData> {
        self.get(slug_path)
    }
}
