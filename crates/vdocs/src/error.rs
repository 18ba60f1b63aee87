//! CLI error types.

use vdocs_config::ConfigError;
use vdocs_server::ServeError;
use vdocs_source::SourceError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Source(#[from] SourceError),

    #[error("{0}")]
    Server(#[from] ServeError),
}
