//! Command execution context

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::model::Config;

/// Common context for command execution
pub struct Context {
    pub config: Config,
    /// Explicit `--config` path, `None` for the default location
    pub config_file: Option<PathBuf>,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = crate::config::load_config(cli.config.as_deref())?;
        Ok(Self {
            config,
            config_file: cli.config.clone(),
        })
    }

    /// Path of the configuration file in use
    pub fn config_path(&self) -> PathBuf {
        self.config_file
            .clone()
            .unwrap_or_else(Config::config_path)
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}
