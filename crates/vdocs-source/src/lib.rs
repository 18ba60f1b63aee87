//! Content source layer for the vdocs documentation browser.
//!
//! Supplies the raw data the navigation and search cores consume:
//! - [`PageTreeNode`] — the hierarchical page tree for one version
//! - [`PageData`] + [`PageStore`] — frontmatter metadata looked up by slug path
//! - [`SearchHit`] — the raw hit stream for one version
//! - [`Source`] / [`SourceSet`] — one version's content and the registry
//!   over all versions, loaded from pre-built JSON manifests
//!
//! The content pipeline that produces manifests is out of scope; this crate
//! only deserializes and indexes its output.

mod hit;
mod manifest;
mod natural;
mod page;
mod source;
mod tree;

pub use hit::{HitKind, SearchHit};
pub use manifest::{Manifest, SourceError};
pub use natural::natural_cmp;
pub use page::{PageData, PageStore};
pub use source::{Source, SourceSet, VersionInfo};
pub use tree::{FolderIndex, PageTreeNode};
