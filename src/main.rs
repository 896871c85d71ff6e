//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `page_insight` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Starting the HTTP server
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use page_insight::initialization::{init_client, init_logger_with};
use page_insight::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    let _ = dotenvy::dotenv();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let client = init_client(&config).context("Failed to initialize HTTP client")?;

    if let Err(e) = run_server(&config, client).await {
        eprintln!("page_insight error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
