//! Slug derivation from documentation URLs.
//!
//! URLs follow the `/docs/{version}/{slug…}` shape. Nodes built by the
//! content pipeline carry their slug path directly; URL parsing exists as a
//! fallback for trees that do not.

use vdocs_source::PageTreeNode;

/// Extract the version slug from a docs URL.
///
/// `/docs/latest/components` yields `latest`; URLs outside the `/docs/`
/// namespace yield the default `latest`.
#[must_use]
pub fn extract_version_from_url(url: &str) -> &str {
    url.strip_prefix("/docs/")
        .and_then(|rest| rest.split('/').next())
        .filter(|version| !version.is_empty())
        .unwrap_or("latest")
}

/// Slug path relative to the version root.
///
/// `/docs/latest/components/button` yields `components/button`; the version
/// root URL yields an empty slug path. Returns `None` for URLs outside the
/// `/docs/{version}` namespace.
#[must_use]
pub fn slug_path_from_url(url: &str) -> Option<String> {
    let rest = url.strip_prefix("/docs/")?;
    let mut parts = rest.splitn(2, '/');
    let version = parts.next()?;
    if version.is_empty() {
        return None;
    }
    Some(parts.next().unwrap_or("").trim_matches('/').to_owned())
}

/// Slug path for a tree node: carried slugs first, URL derivation second.
pub(crate) fn node_slug_path(node: &PageTreeNode) -> Option<String> {
    if !node.slugs().is_empty() {
        return Some(node.slugs().join("/"));
    }
    node.link_url()
        .map(|url| slug_path_from_url(url).unwrap_or_default())
}
