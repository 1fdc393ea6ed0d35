//! Settings: built-in defaults, then the TOML file, then CLI flags.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe::MarkLabels;
use tracing::{debug, info, instrument};

/// Settings file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Log settings for the interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// File that receives log output while the TUI owns the terminal.
    file: PathBuf,

    /// Filter directives used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from("tictactoe.log"),
            filter: "info".to_string(),
        }
    }
}

/// Resolved front-end settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Labels drawn for each mark.
    labels: MarkLabels,

    /// Logging.
    log: LogSettings,
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(labels = ?settings.labels, "Settings loaded");
        Ok(settings)
    }

    /// Resolves settings for a parsed command line.
    ///
    /// A missing file at [`DEFAULT_CONFIG_PATH`] falls back to defaults; a
    /// missing file named by `--config` is an error. CLI flags override
    /// whatever the file says.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let settings = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => {
                debug!("No settings file, using defaults");
                Self::default()
            }
        };
        settings.with_overrides(cli)
    }

    /// Applies CLI flags on top of these settings.
    #[instrument(skip(self, cli))]
    pub fn with_overrides(mut self, cli: &Cli) -> Result<Self, ConfigError> {
        if cli.x_label.is_some() || cli.o_label.is_some() {
            let x = cli
                .x_label
                .as_deref()
                .unwrap_or(self.labels.label(tictactoe::Mark::X));
            let o = cli
                .o_label
                .as_deref()
                .unwrap_or(self.labels.label(tictactoe::Mark::O));
            self.labels = MarkLabels::new(x, o)
                .map_err(|e| ConfigError::new(format!("Invalid mark labels: {}", e)))?;
        }
        if let Some(file) = &cli.log_file {
            self.log.file = file.clone();
        }
        Ok(self)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
