//! Command-line interface for tictac.

use crate::config::{ConfigError, TuiConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe in the terminal, with mouse support", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Keyboard only: do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,

    /// Highlight empty cells after X moves
    #[arg(long)]
    pub highlight_empty: bool,
}

impl Cli {
    /// Loads the config file (if any) and applies command-line overrides.
    #[instrument(skip(self))]
    pub fn resolve_config(&self) -> Result<TuiConfig, ConfigError> {
        let mut config = TuiConfig::load(self.config.as_deref())?;
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        if self.no_mouse {
            config = config.with_mouse(false);
        }
        if self.highlight_empty {
            config = config.with_highlight_empty(true);
        }
        Ok(config)
    }
}
