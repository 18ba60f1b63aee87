//! Manifest loading.
//!
//! A manifest is the pre-built JSON description of one version's content:
//! the page tree, frontmatter records keyed by slug path, and the raw search
//! hit stream. The content pipeline that emits manifests is external; this
//! module only reads its output from `<dir>/<version>.json` files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::page::PageData;
use crate::source::{Source, SourceSet};
use crate::tree::PageTreeNode;
use crate::SearchHit;

/// One version's manifest as stored on disk.
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    /// Page tree root children.
    #[serde(default)]
    pub tree: Vec<PageTreeNode>,
    /// Frontmatter records keyed by slug path ("" for the version root).
    #[serde(default)]
    pub pages: HashMap<String, PageData>,
    /// Raw search hits for this version.
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

/// Error loading sources from disk.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Source directory missing or unreadable.
    #[error("Cannot read source directory {}: {source}", .path.display())]
    ReadDir {
        /// Directory that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Manifest file unreadable.
    #[error("Cannot read manifest {}: {source}", .path.display())]
    ReadFile {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Manifest is not valid JSON for the expected schema.
    #[error("Invalid manifest {}: {source}", .path.display())]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl SourceSet {
    /// Load all version manifests from a directory.
    ///
    /// Each `<version>.json` file becomes one version, named after the file
    /// stem. Non-JSON entries are ignored. An empty directory yields an
    /// empty set.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read or any manifest
    /// fails to read or parse.
    pub fn load_dir(dir: &Path) -> Result<Self, SourceError> {
        let entries = std::fs::read_dir(dir).map_err(|source| SourceError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut set = Self::new();
        for entry in entries {
            let entry = entry.map_err(|source| SourceError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(version) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let content =
                std::fs::read_to_string(&path).map_err(|source| SourceError::ReadFile {
                    path: path.clone(),
                    source,
                })?;
            let manifest: Manifest =
                serde_json::from_str(&content).map_err(|source| SourceError::Parse {
                    path: path.clone(),
                    source,
                })?;

            tracing::debug!(version = %version, pages = manifest.pages.len(), "Loaded manifest");
            set.insert(Source::new(
                version.to_owned(),
                manifest.tree,
                manifest.pages,
                manifest.hits,
            ));
        }

        Ok(set)
    }
}
