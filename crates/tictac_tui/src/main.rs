//! tictac - tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictac_tui::{Cli, logging};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    logging::init(&config)?;
    info!(?config, "Configuration resolved");

    tictac_tui::run(&config)
}
