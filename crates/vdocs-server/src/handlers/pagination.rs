//! Pagination API endpoint.
//!
//! Returns prev/next links around the current page, following the sorted
//! reading order.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use vdocs_nav::{flatten_page_tree, pagination_data, sort_page_tree, PaginationData};

use crate::error::ServerError;
use crate::state::AppState;

/// Query parameters for GET /api/{version}/pagination.
#[derive(Deserialize)]
pub(crate) struct PaginationParams {
    /// Current page URL (unprefixed).
    url: String,
    /// Locale prefix override.
    locale: Option<String>,
}

/// Handle GET /api/{version}/pagination.
pub(crate) async fn get_pagination(
    Path(version): Path<String>,
    Query(params): Query<PaginationParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PaginationData>, ServerError> {
    let source = state
        .sources
        .get(&version)
        .ok_or_else(|| ServerError::VersionNotFound(version.clone()))?;
    let locale = state.locale(params.locale.as_deref());

    let sorted = sort_page_tree(source.tree(), source);
    let flat = flatten_page_tree(&sorted, locale);

    Ok(Json(pagination_data(&flat, &params.url, locale)))
}
