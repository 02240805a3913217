//! Main entry point for the chat relay.
//!
//! Initializes logging, loads environment variables and configuration,
//! then serves the HTTP API until the process is stopped.

use chat_relay::cli::Cli;
use chat_relay::config::RelayConfig;
use chat_relay::utils;
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, warn};

/// Main entry point that initializes and runs the relay.
///
/// # Initialization steps:
/// 1. Load `.env` so CLI flags can fall back to its variables
/// 2. Parse CLI arguments
/// 3. Initialize logging system
/// 4. Build configuration and serve
#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();
    utils::init_logging(&cli.logging_level, cli.log_to_file);

    if let Err(e) = dotenv {
        warn!("Failed to load .env file: {}", e);
    }

    let config = match RelayConfig::from_env(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = chat_relay::run(config).await {
        error!("Server stopped with error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
