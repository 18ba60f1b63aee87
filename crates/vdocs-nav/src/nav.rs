//! Sidebar navigation items.
//!
//! Projects the sorted page tree into a render-ready sibling list. Items
//! carrying a `group` frontmatter label are preceded by a synthetic label
//! entry the rendering layer turns into a group heading.

use serde::Serialize;
use vdocs_source::{PageStore, PageTreeNode};

use crate::slug::node_slug_path;

/// One render-ready navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Link target; folders are collapsible headings without a link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Child entries (empty for leaf pages).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavEntry>,
    /// Whether a collapsible item starts expanded.
    pub default_open: bool,
    /// Group label from frontmatter, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Stable identity (the node's source key), used for toggle persistence.
    pub id: String,
}

/// One entry of a sidebar sibling list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavEntry {
    /// Synthetic group heading preceding a group-labeled item.
    Label {
        /// Group heading text.
        label: String,
    },
    /// A navigation item.
    Item(NavItem),
}

/// Convert a (sorted) sibling list into navigation entries.
///
/// Frontmatter is resolved through the node's slug path: folders read
/// `is_open` and `group` from their index page, pages read `group`.
/// Children are converted recursively.
#[must_use]
pub fn convert_tree_to_nav(nodes: &[PageTreeNode], store: &dyn PageStore) -> Vec<NavEntry> {
    let mut entries = Vec::new();

    for node in nodes {
        let (default_open, group) = node_frontmatter(node, store);

        if let Some(label) = &group {
            entries.push(NavEntry::Label {
                label: label.clone(),
            });
        }

        let children = match node {
            PageTreeNode::Folder { children, .. } => convert_tree_to_nav(children, store),
            PageTreeNode::Page { .. } => Vec::new(),
        };

        let title = if node.name().is_empty() {
            "Untitled".to_owned()
        } else {
            node.name().to_owned()
        };
        let url = match node {
            PageTreeNode::Page { url, .. } => url.clone(),
            PageTreeNode::Folder { .. } => None,
        };

        entries.push(NavEntry::Item(NavItem {
            title,
            url,
            children,
            default_open,
            group,
            id: node.source_key().to_owned(),
        }));
    }

    entries
}

/// Resolve `is_open` and `group` for a node from the page store.
fn node_frontmatter(node: &PageTreeNode, store: &dyn PageStore) -> (bool, Option<String>) {
    match node {
        PageTreeNode::Folder {
            index: Some(_), ..
        } => {
            let Some(slug) = node_slug_path(node) else {
                return (false, None);
            };
            store
                .page(&slug)
                .map_or((false, None), |data| (data.is_open, data.group.clone()))
        }
        PageTreeNode::Page { url: Some(_), .. } => {
            let Some(slug) = node_slug_path(node) else {
                return (false, None);
            };
            (false, store.page(&slug).and_then(|d| d.group.clone()))
        }
        _ => (false, None),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use vdocs_source::{FolderIndex, PageData};

    use super::*;

    fn page(name: &str, slug: &str) -> PageTreeNode {
        PageTreeNode::Page {
            name: name.to_owned(),
            url: Some(format!("/docs/latest/{slug}")),
            source_key: format!("latest/{slug}.mdx"),
            slugs: slug.split('/').map(str::to_owned).collect(),
        }
    }

    fn item(entry: &NavEntry) -> &NavItem {
        match entry {
            NavEntry::Item(item) => item,
            NavEntry::Label { label } => panic!("expected item, got label {label}"),
        }
    }

    #[test]
    fn test_page_becomes_item_with_url() {
        let nodes = vec![page("Intro", "intro")];
        let store = HashMap::new();

        let entries = convert_tree_to_nav(&nodes, &store);

        assert_eq!(entries.len(), 1);
        let nav = item(&entries[0]);
        assert_eq!(nav.title, "Intro");
        assert_eq!(nav.url.as_deref(), Some("/docs/latest/intro"));
        assert!(!nav.default_open);
        assert_eq!(nav.id, "latest/intro.mdx");
    }

    #[test]
    fn test_empty_name_becomes_untitled() {
        let nodes = vec![PageTreeNode::Page {
            name: String::new(),
            url: Some("/docs/latest/x".to_owned()),
            source_key: String::new(),
            slugs: vec!["x".to_owned()],
        }];
        let store = HashMap::new();

        let entries = convert_tree_to_nav(&nodes, &store);

        assert_eq!(item(&entries[0]).title, "Untitled");
    }

    #[test]
    fn test_folder_reads_is_open_from_index_page() {
        let nodes = vec![PageTreeNode::Folder {
            name: "Components".to_owned(),
            index: Some(FolderIndex {
                url: "/docs/latest/components".to_owned(),
            }),
            children: vec![page("Button", "components/button")],
            source_key: "latest/components/index.mdx".to_owned(),
            slugs: vec!["components".to_owned()],
        }];
        let mut store = HashMap::new();
        store.insert(
            "components".to_owned(),
            PageData {
                is_open: true,
                ..Default::default()
            },
        );

        let entries = convert_tree_to_nav(&nodes, &store);

        let folder = item(&entries[0]);
        assert!(folder.default_open);
        assert_eq!(folder.url, None);
        assert_eq!(folder.children.len(), 1);
        assert_eq!(item(&folder.children[0]).title, "Button");
    }

    #[test]
    fn test_group_label_precedes_grouped_item() {
        let nodes = vec![page("Theming", "theming"), page("Tokens", "tokens")];
        let mut store = HashMap::new();
        for slug in ["theming", "tokens"] {
            store.insert(
                slug.to_owned(),
                PageData {
                    group: Some("Design".to_owned()),
                    ..Default::default()
                },
            );
        }

        let entries = convert_tree_to_nav(&nodes, &store);

        assert_eq!(entries.len(), 4);
        assert_eq!(
            entries[0],
            NavEntry::Label {
                label: "Design".to_owned()
            }
        );
        assert_eq!(item(&entries[1]).group.as_deref(), Some("Design"));
        assert_eq!(
            entries[2],
            NavEntry::Label {
                label: "Design".to_owned()
            }
        );
    }

    #[test]
    fn test_ungrouped_item_has_no_label() {
        let nodes = vec![page("Intro", "intro")];
        let store = HashMap::new();

        let entries = convert_tree_to_nav(&nodes, &store);

        assert_eq!(entries.len(), 1);
        assert!(matches!(entries[0], NavEntry::Item(_)));
    }

    #[test]
    fn test_serialization_shape() {
        let nodes = vec![page("Intro", "intro")];
        let store = HashMap::new();

        let entries = convert_tree_to_nav(&nodes, &store);
        let json = serde_json::to_value(&entries).unwrap();

        assert_eq!(json[0]["kind"], "item");
        assert_eq!(json[0]["title"], "Intro");
        assert_eq!(json[0]["defaultOpen"], false);
        assert!(json[0].get("group").is_none());
    }
}
