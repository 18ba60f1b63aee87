//! Breadcrumbs API endpoint.
//!
//! Returns the full breadcrumb trail for the current page.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use vdocs_nav::{breadcrumb_trail, BreadcrumbEntry};

use crate::error::ServerError;
use crate::state::AppState;

/// Display label of the home entry.
const HOME_LABEL: &str = "Home";

/// Query parameters for GET /api/{version}/breadcrumbs.
#[derive(Deserialize)]
pub(crate) struct BreadcrumbParams {
    /// Current pathname (locale-prefixed when a locale is active).
    path: String,
    /// Current page title, appended as the terminal entry.
    title: Option<String>,
    /// Locale prefix override.
    locale: Option<String>,
}

/// Response for GET /api/{version}/breadcrumbs.
#[derive(Serialize)]
pub(crate) struct BreadcrumbsResponse {
    /// Trail entries, home first.
    items: Vec<BreadcrumbEntry>,
}

/// Handle GET /api/{version}/breadcrumbs.
pub(crate) async fn get_breadcrumbs(
    Path(version): Path<String>,
    Query(params): Query<BreadcrumbParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<BreadcrumbsResponse>, ServerError> {
    let source = state
        .sources
        .get(&version)
        .ok_or_else(|| ServerError::VersionNotFound(version.clone()))?;
    let locale = state.locale(params.locale.as_deref());

    let items = breadcrumb_trail(
        source.tree(),
        &params.path,
        params.title.as_deref(),
        HOME_LABEL,
        locale,
    );

    Ok(Json(BreadcrumbsResponse { items }))
}
