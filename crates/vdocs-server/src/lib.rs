//! HTTP API server for the vdocs documentation browser.
//!
//! Serves the navigation and search cores as JSON endpoints over an
//! immutable snapshot of the loaded content sources:
//!
//! ```text
//! Browser ──HTTP──► axum server (vdocs-server)
//!                        │
//!                        ├─► /api/versions            version registry
//!                        ├─► /api/{version}/navigation  sorted sidebar tree
//!                        ├─► /api/{version}/pagination  prev/next links
//!                        ├─► /api/{version}/breadcrumbs breadcrumb trail
//!                        └─► /api/{version}/search      grouped results
//! ```
//!
//! Handlers are thin: parse parameters, call the pure core functions,
//! serialize. All content state lives in an `Arc<AppState>` snapshot taken
//! at startup.

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use state::AppState;
use vdocs_search::SearchTuning;
use vdocs_source::SourceSet;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory holding one JSON manifest per version.
    pub source_dir: PathBuf,
    /// Locale prefix applied to generated URLs, if any.
    pub default_locale: Option<String>,
    /// Search tuning parameters.
    pub tuning: SearchTuning,
    /// Enable verbose output.
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
            source_dir: PathBuf::from("content"),
            default_locale: None,
            tuning: SearchTuning::default(),
            verbose: false,
        }
    }
}

/// Server startup error.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// Content sources failed to load.
    #[error("{0}")]
    Source(#[from] vdocs_source::SourceError),
    /// Invalid bind address.
    #[error("Invalid bind address: {0}")]
    Address(#[from] std::net::AddrParseError),
    /// Network error binding or serving.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Run the server.
///
/// Loads all version manifests from `config.source_dir`, then serves the
/// API until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if sources fail to load or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), ServeError> {
    let sources = SourceSet::load_dir(&config.source_dir)?;
    if sources.is_empty() {
        tracing::warn!(dir = %config.source_dir.display(), "No version manifests found");
    }

    let state = Arc::new(AppState {
        sources,
        tuning: config.tuning.clone(),
        default_locale: config.default_locale.clone(),
        verbose: config.verbose,
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from a vdocs config.
#[must_use]
pub fn server_config_from_config(config: &vdocs_config::Config, verbose: bool) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.docs_resolved.source_dir.clone(),
        default_locale: config.docs_resolved.default_locale.clone(),
        tuning: config.search.clone(),
        verbose,
    }
}
