//! Configuration management for vdocs.
//!
//! Parses `vdocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`]; only
//! non-`None` values override the loaded file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use vdocs_search::SearchTuning;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "vdocs.toml";

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override manifest source directory.
    pub source_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Search tuning overrides.
    pub search: SearchTuning,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

impl Config {
    /// Load configuration, applying CLI overrides.
    ///
    /// An explicit `path` must exist; without one the loader walks parent
    /// directories looking for `vdocs.toml`, falling back to defaults when
    /// none is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path is missing, or a found file
    /// cannot be read or parsed.
    pub fn load(path: Option<&Path>, cli: Option<&CliSettings>) -> Result<Self, ConfigError> {
        let discovered = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                Some(p.to_path_buf())
            }
            None => Self::discover(),
        };

        let mut config = match &discovered {
            Some(file) => {
                let content = std::fs::read_to_string(file).map_err(|source| {
                    ConfigError::Read {
                        path: file.clone(),
                        source,
                    }
                })?;
                let mut config: Self =
                    toml::from_str(&content).map_err(|source| ConfigError::Parse {
                        path: file.clone(),
                        source: Box::new(source),
                    })?;
                config.config_path = Some(file.clone());
                config
            }
            None => Self::default(),
        };

        if let Some(cli) = cli {
            config.apply_cli(cli);
        }
        config.resolve();

        Ok(config)
    }

    /// Walk parent directories from the working directory for `vdocs.toml`.
    fn discover() -> Option<PathBuf> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let candidate = dir.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    fn apply_cli(&mut self, cli: &CliSettings) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(source_dir) = &cli.source_dir {
            self.docs.source_dir = Some(source_dir.display().to_string());
        }
    }

    /// Resolve raw string paths relative to the config file's directory.
    fn resolve(&mut self) {
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        let source_dir = match &self.docs.source_dir {
            Some(dir) if Path::new(dir).is_absolute() => PathBuf::from(dir),
            Some(dir) => base.join(dir),
            None => base.join("content"),
        };

        self.docs_resolved = DocsConfig {
            source_dir,
            default_locale: self.docs.default_locale.clone(),
        };
    }

    fn default_with_base(base: &Path) -> Self {
        let mut config = Self {
            server: ServerConfig::default(),
            docs: DocsConfigRaw::default(),
            search: SearchTuning::default(),
            docs_resolved: DocsConfig::default(),
            config_path: None,
        };
        config.docs_resolved.source_dir = base.join("content");
        config
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    default_locale: Option<String>,
}

/// Resolved documentation configuration with usable paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Directory holding one JSON manifest per version.
    pub source_dir: PathBuf,
    /// Locale prefix applied to generated URLs, if any.
    pub default_locale: Option<String>,
}

/// Configuration loading error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Explicit config path does not exist.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Config file unreadable.
    #[error("Cannot read config {}: {source}", .path.display())]
    Read {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Config file is not valid TOML for the expected schema.
    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: Box<toml::de::Error>,
    },
}
