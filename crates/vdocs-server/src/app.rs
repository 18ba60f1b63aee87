//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/versions", get(handlers::versions::get_versions))
        .route(
            "/api/{version}/navigation",
            get(handlers::navigation::get_navigation),
        )
        .route(
            "/api/{version}/pagination",
            get(handlers::pagination::get_pagination),
        )
        .route(
            "/api/{version}/breadcrumbs",
            get(handlers::breadcrumbs::get_breadcrumbs),
        )
        .route("/api/{version}/search", get(handlers::search::get_search));

    Router::new()
        .merge(api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
