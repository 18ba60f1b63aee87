//! Linear reading order and prev/next pagination.

use serde::Serialize;
use vdocs_source::PageTreeNode;

/// One entry of the linear reading order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationLink {
    /// Display title.
    pub title: String,
    /// Link target (locale-prefixed when a locale is active).
    pub url: String,
}

/// Previous/next links around the current page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PaginationData {
    /// Preceding page, `None` at the start of the reading order.
    pub prev: Option<PaginationLink>,
    /// Following page, `None` at the end of the reading order.
    pub next: Option<PaginationLink>,
}

/// Flatten a (sorted) tree into the linear reading order.
///
/// Pre-order traversal: `page` nodes emit one link each, folders emit
/// nothing for themselves and recurse into children. Pages without a URL
/// contribute nothing.
#[must_use]
pub fn flatten_page_tree(nodes: &[PageTreeNode], locale: Option<&str>) -> Vec<PaginationLink> {
    let prefix = locale_prefix(locale);
    let mut result = Vec::new();
    flatten_into(nodes, &prefix, &mut result);
    result
}

fn flatten_into(nodes: &[PageTreeNode], prefix: &str, out: &mut Vec<PaginationLink>) {
    for node in nodes {
        match node {
            PageTreeNode::Page {
                name,
                url: Some(url),
                ..
            } => out.push(PaginationLink {
                title: if name.is_empty() {
                    "Untitled".to_owned()
                } else {
                    name.clone()
                },
                url: format!("{prefix}{url}"),
            }),
            PageTreeNode::Page { .. } => {}
            PageTreeNode::Folder { children, .. } => flatten_into(children, prefix, out),
        }
    }
}

/// Locate `current_url` in the reading order and return its neighbors.
///
/// An unknown URL (e.g. a folder index that was not flattened) yields
/// `{prev: None, next: None}`.
#[must_use]
pub fn pagination_data(
    flat: &[PaginationLink],
    current_url: &str,
    locale: Option<&str>,
) -> PaginationData {
    let localized = format!("{}{current_url}", locale_prefix(locale));

    let Some(pos) = flat.iter().position(|link| link.url == localized) else {
        return PaginationData::default();
    };

    PaginationData {
        prev: pos.checked_sub(1).map(|i| flat[i].clone()),
        next: flat.get(pos + 1).cloned(),
    }
}

fn locale_prefix(locale: Option<&str>) -> String {
    locale.map(|l| format!("/{l}")).unwrap_or_default()
}
