//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ipscout` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Process exit on setup failure
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ipscout::initialization::init_logger_with;
use ipscout::{run, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run(config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("ipscout error: {:#}", e);
            process::exit(1);
        }
    }
}
