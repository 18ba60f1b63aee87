//! Navigation API endpoint.
//!
//! Returns the sorted sidebar tree for one version.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use vdocs_nav::{convert_tree_to_nav, sort_page_tree, NavEntry};

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/{version}/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Sidebar entries (items and group labels).
    items: Vec<NavEntry>,
}

/// Handle GET /api/{version}/navigation.
pub(crate) async fn get_navigation(
    Path(version): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<NavigationResponse>, ServerError> {
    let source = state
        .sources
        .get(&version)
        .ok_or_else(|| ServerError::VersionNotFound(version.clone()))?;

    let sorted = sort_page_tree(source.tree(), source);
    let items = convert_tree_to_nav(&sorted, source);

    if state.verbose {
        tracing::debug!(version = %version, entries = items.len(), "Navigation derived");
    }

    Ok(Json(NavigationResponse { items }))
}
