//! Deterministic page tree ordering.
//!
//! Sibling precedence:
//! 1. explicit numeric `order` frontmatter (ascending); a node with `order`
//!    always precedes one without
//! 2. index source files before non-index siblings
//! 3. natural comparison of source keys
//!
//! Source keys are unique per node, so the order is total and repeated
//! sorts are no-ops.

use std::cmp::Ordering;

use vdocs_source::{natural_cmp, PageStore, PageTreeNode};

use crate::slug::node_slug_path;

/// Produce a recursively sorted copy of the sibling list.
///
/// The input tree is read-only; the returned tree is owned by the caller.
#[must_use]
pub fn sort_page_tree(nodes: &[PageTreeNode], store: &dyn PageStore) -> Vec<PageTreeNode> {
    let mut sorted: Vec<PageTreeNode> = nodes
        .iter()
        .map(|node| match node {
            PageTreeNode::Folder {
                name,
                index,
                children,
                source_key,
                slugs,
            } => PageTreeNode::Folder {
                name: name.clone(),
                index: index.clone(),
                children: sort_page_tree(children, store),
                source_key: source_key.clone(),
                slugs: slugs.clone(),
            },
            page @ PageTreeNode::Page { .. } => page.clone(),
        })
        .collect();

    sorted.sort_by(|a, b| compare_siblings(a, b, store));
    sorted
}

/// Explicit `order` frontmatter for a node, if its page defines one.
fn explicit_order(node: &PageTreeNode, store: &dyn PageStore) -> Option<i64> {
    let slug = node_slug_path(node)?;
    store.page(&slug)?.order
}

/// Whether a source key names an index file (`index.md` / `index.mdx`).
fn is_index_key(key: &str) -> bool {
    key.contains("index.md")
}

fn compare_siblings(a: &PageTreeNode, b: &PageTreeNode, store: &dyn PageStore) -> Ordering {
    match (explicit_order(a, store), explicit_order(b, store)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| compare_keys(a, b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => {
            match (is_index_key(a.source_key()), is_index_key(b.source_key())) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => compare_keys(a, b),
            }
        }
    }
}

/// Natural key comparison with a byte-wise fall-through so case-differing
/// keys still order totally.
fn compare_keys(a: &PageTreeNode, b: &PageTreeNode) -> Ordering {
    natural_cmp(a.source_key(), b.source_key())
        .then_with(|| a.source_key().cmp(b.source_key()))
}
