use crate::constants::HEALTH_MESSAGE;
use crate::errors::RelayError;
use crate::llm::LlmClient;
use crate::relay::{self, ChatRequest, ChatResponse};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// State shared by every handler
#[derive(Clone, Debug)]
pub struct AppState {
    /// Long-lived upstream provider handle
    pub llm: Arc<LlmClient>,
}

impl AppState {
    pub fn new(llm: LlmClient) -> Self {
        AppState { llm: Arc::new(llm) }
    }
}

/// Body of the liveness route
#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

/// Liveness check. Never touches the upstream provider.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: HEALTH_MESSAGE.to_string(),
    })
}

/// Relays a chat request to the upstream provider
///
/// # Arguments
/// * `state` - Shared application state holding the provider client
/// * `payload` - JSON payload containing the system text, history and optional conversation id
///
/// # Returns
/// * `Result<Json<ChatResponse>, RelayError>` - Success envelope, or an error rendered as 502/500
#[axum::debug_handler]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, RelayError> {
    let response = relay::handle_chat(&state.llm, payload).await?;
    Ok(Json(response))
}
