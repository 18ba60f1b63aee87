//! Page tree data model.
//!
//! The tree mirrors the content directory layout: `page` nodes are leaf
//! documents, `folder` nodes group children and may carry an index page.
//! Nodes carry their slug path alongside the URL so consumers never have to
//! re-derive slugs by parsing URL strings.

use serde::{Deserialize, Serialize};

/// Reference to a folder's representative index page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderIndex {
    /// URL of the index page (e.g., `/docs/latest/components`).
    pub url: String,
}

/// One node of the hierarchical documentation structure.
///
/// A well-formed `Page` carries a `url`; a well-formed `Folder` carries
/// `children` and optionally an `index`. Nodes missing these fields are
/// tolerated by consumers (they contribute nothing to flattening or
/// breadcrumb traversal) rather than rejected at load time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageTreeNode {
    /// A leaf document.
    Page {
        /// Display label.
        name: String,
        /// Link target. Required for well-formed pages.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        /// Content-source file path; unique per node, used as sort tie-break.
        #[serde(default)]
        source_key: String,
        /// Slug path relative to the version root (empty for the root page).
        #[serde(default)]
        slugs: Vec<String>,
    },
    /// A grouping node with children and an optional index page.
    Folder {
        /// Display label.
        name: String,
        /// The folder's representative page, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<FolderIndex>,
        /// Ordered child nodes.
        #[serde(default)]
        children: Vec<PageTreeNode>,
        /// Content-source file path; unique per node, used as sort tie-break.
        #[serde(default)]
        source_key: String,
        /// Slug path relative to the version root (empty for the root folder).
        #[serde(default)]
        slugs: Vec<String>,
    },
}

impl PageTreeNode {
    /// Display label of the node.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Page { name, .. } | Self::Folder { name, .. } => name,
        }
    }

    /// Content-source key of the node.
    #[must_use]
    pub fn source_key(&self) -> &str {
        match self {
            Self::Page { source_key, .. } | Self::Folder { source_key, .. } => source_key,
        }
    }

    /// Slug path carried on the node.
    #[must_use]
    pub fn slugs(&self) -> &[String] {
        match self {
            Self::Page { slugs, .. } | Self::Folder { slugs, .. } => slugs,
        }
    }

    /// The URL this node links to: the page URL, or the folder's index URL.
    #[must_use]
    pub fn link_url(&self) -> Option<&str> {
        match self {
            Self::Page { url, .. } => url.as_deref(),
            Self::Folder { index, .. } => index.as_ref().map(|i| i.url.as_str()),
        }
    }

    /// Child nodes (empty for pages).
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Page { .. } => &[],
            Self::Folder { children, .. } => children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(name: &str, url: &str) -> PageTreeNode {
        PageTreeNode::Page {
            name: name.to_owned(),
            url: Some(url.to_owned()),
            source_key: String::new(),
            slugs: Vec::new(),
        }
    }

    #[test]
    fn test_page_link_url() {
        let node = page("Intro", "/docs/latest/intro");

        assert_eq!(node.link_url(), Some("/docs/latest/intro"));
    }

    #[test]
    fn test_folder_link_url_from_index() {
        let node = PageTreeNode::Folder {
            name: "Components".to_owned(),
            index: Some(FolderIndex {
                url: "/docs/latest/components".to_owned(),
            }),
            children: vec![page("Button", "/docs/latest/components/button")],
            source_key: String::new(),
            slugs: Vec::new(),
        };

        assert_eq!(node.link_url(), Some("/docs/latest/components"));
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn test_folder_without_index_has_no_link() {
        let node = PageTreeNode::Folder {
            name: "Misc".to_owned(),
            index: None,
            children: Vec::new(),
            source_key: String::new(),
            slugs: Vec::new(),
        };

        assert_eq!(node.link_url(), None);
    }

    #[test]
    fn test_deserialize_page_node() {
        let json = r#"{
            "type": "page",
            "name": "Intro",
            "url": "/docs/latest/intro",
            "source_key": "latest/intro.mdx",
            "slugs": ["intro"]
        }"#;

        let node: PageTreeNode = serde_json::from_str(json).unwrap();

        assert_eq!(node.name(), "Intro");
        assert_eq!(node.source_key(), "latest/intro.mdx");
        assert_eq!(node.slugs(), ["intro".to_owned()]);
    }

    #[test]
    fn test_deserialize_folder_defaults() {
        let json = r#"{"type": "folder", "name": "Guides"}"#;

        let node: PageTreeNode = serde_json::from_str(json).unwrap();

        assert_eq!(node.name(), "Guides");
        assert!(node.children().is_empty());
        assert_eq!(node.link_url(), None);
    }

    #[test]
    fn test_page_without_url_tolerated() {
        let json = r#"{"type": "page", "name": "Broken"}"#;

        let node: PageTreeNode = serde_json::from_str(json).unwrap();

        assert_eq!(node.link_url(), None);
    }
}
