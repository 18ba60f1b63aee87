//! Search API endpoint.
//!
//! Groups the raw hit stream for a version into page-grouped,
//! section-nested results for the command palette.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use vdocs_search::{group_results, SearchResultGroup};

use crate::error::ServerError;
use crate::state::AppState;

/// Query parameters for GET /api/{version}/search.
#[derive(Deserialize)]
pub(crate) struct SearchParams {
    /// Query string.
    q: String,
}

/// Response for GET /api/{version}/search.
#[derive(Serialize)]
pub(crate) struct SearchResponse {
    /// Grouped results, most relevant page first.
    groups: Vec<SearchResultGroup>,
}

/// Handle GET /api/{version}/search.
pub(crate) async fn get_search(
    Path(version): Path<String>,
    Query(params): Query<SearchParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<SearchResponse>, ServerError> {
    let source = state
        .sources
        .get(&version)
        .ok_or_else(|| ServerError::VersionNotFound(version.clone()))?;

    let groups = group_results(source.hits(), &params.q, &state.tuning);

    if state.verbose {
        tracing::debug!(version = %version, query = %params.q, groups = groups.len(), "Search grouped");
    }

    Ok(Json(SearchResponse { groups }))
}
