//! Application context for the Transpo CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use crate::cli::{Cli, OutputFormat};
use crate::config::{load_config, resolve_config_path, TranspoConfig};
use crate::errors::CliError;
use crate::ui::UiContext;

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<TranspoConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Path of the config file, whether or not it exists yet.
    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        resolve_config_path(self.cli.config.as_deref())
    }

    /// Get the configuration, loading it lazily if needed.
    ///
    /// A missing file yields defaults; a malformed one is a [`CliError::Config`].
    pub fn config(&self) -> anyhow::Result<&TranspoConfig> {
        self.config.get_or_try_init(|| {
            let path = self.config_path()?;
            load_config(&path).map_err(|err| {
                anyhow::Error::new(CliError::config(
                    err.to_string(),
                    "Hint: Fix the file or run `transpo config init --force` to reset it.",
                ))
            })
        })
    }

    /// Build the UI context for a command.
    pub fn ui_context(&self, json: bool, format: Option<OutputFormat>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }
}
