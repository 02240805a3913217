use crate::api::handlers::AppState;
use crate::api::routes;
use crate::config::RelayConfig;
use crate::llm::LlmClient;
use std::error::Error;
use tracing::info;

/// Starts and runs the HTTP server using Axum web framework
///
/// # Arguments
/// * `config` - Relay configuration carrying the listen host and port
/// * `llm` - Upstream provider client shared by every request
///
/// # Returns
/// * `Result<(), Box<dyn Error + Send + Sync>>` - Returns when the server stops, or an error if binding fails
pub async fn launch_server(
    config: &RelayConfig,
    llm: LlmClient,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let app = routes::app(AppState::new(llm));

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Chat relay listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
