//! `vdocs check` command implementation.
//!
//! Loads every manifest the way the server would and reports what was
//! found, without binding a socket.

use std::path::PathBuf;

use clap::Args;
use vdocs_config::{CliSettings, Config};
use vdocs_source::SourceSet;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover vdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Manifest source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or any manifest fails to
    /// load.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let dir = &config.docs_resolved.source_dir;
        let sources = SourceSet::load_dir(dir)?;

        if sources.is_empty() {
            output.info(&format!("No manifests found in {}", dir.display()));
            return Ok(());
        }

        for version in sources.versions() {
            if let Some(source) = sources.get(&version) {
                output.info(&format!(
                    "{version}: {} root nodes, {} hits",
                    source.tree().len(),
                    source.hits().len()
                ));
            }
        }
        output.success(&format!(
            "Loaded {} version(s), default: {}",
            sources.versions().len(),
            sources.default_version()
        ));

        Ok(())
    }
}
