//! Navigation derivation for the vdocs documentation browser.
//!
//! Pure transforms from the raw page tree to render-ready navigation
//! structures:
//! - [`sort_page_tree`] — deterministic sibling ordering
//! - [`convert_tree_to_nav`] — sidebar items with group labels and
//!   default-open state
//! - [`flatten_page_tree`] / [`pagination_data`] — linear reading order and
//!   prev/next links
//! - [`find_breadcrumbs`] / [`breadcrumb_trail`] — breadcrumb resolution
//!
//! Every transform takes an immutable snapshot of the tree and produces a
//! new derived structure; inputs are never mutated and no transform panics
//! on malformed nodes (they simply contribute nothing).

mod breadcrumbs;
mod nav;
mod pagination;
mod slug;
mod sort;

pub use breadcrumbs::{breadcrumb_trail, find_breadcrumbs, BreadcrumbEntry};
pub use nav::{convert_tree_to_nav, NavEntry, NavItem};
pub use pagination::{flatten_page_tree, pagination_data, PaginationData, PaginationLink};
pub use slug::{extract_version_from_url, slug_path_from_url};
pub use sort::sort_page_tree;
