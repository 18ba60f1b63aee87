//! Versioned content sources.
//!
//! A [`Source`] holds one version's page tree, frontmatter records, and raw
//! search hits. A [`SourceSet`] is the registry over all loaded versions and
//! answers version-ordering queries for the version switcher.

use std::collections::HashMap;

use serde::Serialize;

use crate::natural::natural_cmp;
use crate::page::{PageData, PageStore};
use crate::tree::PageTreeNode;
use crate::SearchHit;

/// Version metadata for the version switcher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// Display name ("Latest Version" or "Version 2").
    pub name: String,
    /// Semantic version from the version root's frontmatter.
    pub semver: String,
    /// Whether this is the `latest` version slug.
    pub is_latest: bool,
}

/// One version's content: tree, page records, and search hits.
#[derive(Clone, Debug, Default)]
pub struct Source {
    version: String,
    tree: Vec<PageTreeNode>,
    pages: HashMap<String, PageData>,
    hits: Vec<SearchHit>,
}

impl Source {
    /// Create a source from its components.
    #[must_use]
    pub fn new(
        version: String,
        tree: Vec<PageTreeNode>,
        pages: HashMap<String, PageData>,
        hits: Vec<SearchHit>,
    ) -> Self {
        Self {
            version,
            tree,
            pages,
            hits,
        }
    }

    /// Version slug this source belongs to.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Root children of the page tree.
    #[must_use]
    pub fn tree(&self) -> &[PageTreeNode] {
        &self.tree
    }

    /// Raw search hit stream for this version.
    #[must_use]
    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }
}

impl PageStore for Source {
    fn page(&self, slug_path: &str) -> Option<&PageData> {
        self.pages.get(slug_path)
    }
}

/// Registry of content sources keyed by version slug.
#[derive(Clone, Debug, Default)]
pub struct SourceSet {
    sources: HashMap<String, Source>,
}

impl SourceSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a version's source.
    pub fn insert(&mut self, source: Source) {
        self.sources.insert(source.version().to_owned(), source);
    }

    /// Get the source for a version slug.
    #[must_use]
    pub fn get(&self, version: &str) -> Option<&Source> {
        self.sources.get(version)
    }

    /// Whether the set holds any sources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// All version slugs, `latest` first, remainder in reverse natural order
    /// (`v10` before `v9` before `v2`).
    #[must_use]
    pub fn versions(&self) -> Vec<String> {
        let mut versions: Vec<String> = self.sources.keys().cloned().collect();
        versions.sort_by(|a, b| {
            if a == "latest" {
                std::cmp::Ordering::Less
            } else if b == "latest" {
                std::cmp::Ordering::Greater
            } else {
                natural_cmp(b, a)
            }
        });
        versions
    }

    /// Whether a version slug exists.
    #[must_use]
    pub fn version_exists(&self, version: &str) -> bool {
        self.sources.contains_key(version)
    }

    /// The default version: `latest` when present, otherwise the first
    /// available, otherwise the literal `latest`.
    #[must_use]
    pub fn default_version(&self) -> String {
        if self.sources.contains_key("latest") {
            return "latest".to_owned();
        }
        self.versions()
            .into_iter()
            .next()
            .unwrap_or_else(|| "latest".to_owned())
    }

    /// Version metadata for a slug, from the version root's frontmatter.
    #[must_use]
    pub fn version_info(&self, version: &str) -> Option<VersionInfo> {
        let source = self.get(version)?;
        let semver = source
            .page("")
            .and_then(|data| data.version.clone())
            .unwrap_or_else(|| "0.0.0".to_owned());
        let is_latest = version == "latest";
        let name = if is_latest {
            "Latest Version".to_owned()
        } else {
            format!("Version {}", version.strip_prefix('v').unwrap_or(version))
        };

        Some(VersionInfo {
            name,
            semver,
            is_latest,
        })
    }

    /// Version metadata for every version, in display order.
    #[must_use]
    pub fn all_version_infos(&self) -> Vec<VersionInfo> {
        self.versions()
            .iter()
            .filter_map(|v| self.version_info(v))
            .collect()
    }
}
