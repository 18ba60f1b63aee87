//! Breadcrumb resolution.
//!
//! Walks the page tree matching the current pathname against folder index
//! URLs; every ancestor folder on the path contributes one linked entry.
//! The current page itself is appended by [`breadcrumb_trail`] as a
//! non-linked terminal entry.

use serde::Serialize;
use vdocs_source::PageTreeNode;

/// One breadcrumb entry; the terminal (current-page) entry carries no URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbEntry {
    /// Display name.
    pub name: String,
    /// Link target, absent for the terminal entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Collect the ancestor folder entries for a pathname.
///
/// The pathname is cleaned of `locale_prefix` before matching; emitted URLs
/// carry the prefix. A `page` node exactly matching the pathname terminates
/// its branch without contributing an entry.
#[must_use]
pub fn find_breadcrumbs(
    nodes: &[PageTreeNode],
    pathname: &str,
    locale_prefix: &str,
) -> Vec<BreadcrumbEntry> {
    let clean = if locale_prefix.is_empty() {
        pathname
    } else {
        pathname.strip_prefix(locale_prefix).unwrap_or(pathname)
    };

    let mut results = Vec::new();
    for child in nodes {
        traverse(child, clean, locale_prefix, &mut results);
    }
    results
}

fn traverse(
    node: &PageTreeNode,
    clean: &str,
    prefix: &str,
    results: &mut Vec<BreadcrumbEntry>,
) -> bool {
    match node {
        PageTreeNode::Folder {
            name,
            index: Some(index),
            children,
            ..
        } => {
            let url = &index.url;
            if clean == url || clean.starts_with(&format!("{url}/")) {
                results.push(BreadcrumbEntry {
                    name: name.clone(),
                    url: Some(format!("{prefix}{url}")),
                });
                for child in children {
                    traverse(child, clean, prefix, results);
                }
                return true;
            }
        }
        PageTreeNode::Page { url: Some(url), .. } if clean == url => {
            // Current page: the caller appends its title separately.
            return true;
        }
        _ => {}
    }

    for child in node.children() {
        if traverse(child, clean, prefix, results) {
            return true;
        }
    }
    false
}

/// Assemble the full breadcrumb trail for the current page.
///
/// Home entry first, then the ancestor folders, then the page title as a
/// non-linked terminal entry — skipped when it repeats the last folder name.
#[must_use]
pub fn breadcrumb_trail(
    nodes: &[PageTreeNode],
    pathname: &str,
    page_title: Option<&str>,
    home_label: &str,
    locale: Option<&str>,
) -> Vec<BreadcrumbEntry> {
    let prefix = locale.map(|l| format!("/{l}")).unwrap_or_default();
    let home_url = if prefix.is_empty() {
        "/".to_owned()
    } else {
        prefix.clone()
    };

    let mut items = vec![BreadcrumbEntry {
        name: home_label.to_owned(),
        url: Some(home_url),
    }];

    let path_items = find_breadcrumbs(nodes, pathname, &prefix);
    let last_name = path_items.last().map(|entry| entry.name.clone());
    items.extend(path_items);

    if let Some(title) = page_title {
        if last_name.as_deref() != Some(title) {
            items.push(BreadcrumbEntry {
                name: title.to_owned(),
                url: None,
            });
        }
    }

    items
}
