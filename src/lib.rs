//! HTTP relay that forwards chat requests to an upstream LLM completion
//! provider and wraps the outcome in a JSON envelope.

pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod llm;
pub mod relay;
pub mod utils;

use config::RelayConfig;
use llm::LlmClient;
use std::error::Error;
use tracing::info;

/// Builds the provider client from `config` and serves until the listener stops.
pub async fn run(config: RelayConfig) -> Result<(), Box<dyn Error + Send + Sync>> {
    let llm = LlmClient::new(&config)?;
    info!("Upstream provider: {} ({})", config.provider, config.base_url);
    api::server::launch_server(&config, llm).await
}
