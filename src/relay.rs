//! Chat relay: translates an inbound chat request into one upstream
//! completion call and translates the result back.

use crate::constants::{UPSTREAM_MODEL, UPSTREAM_TEMPERATURE};
use crate::errors::RelayError;
use crate::llm::{ChatMessage, LlmClient, UpstreamRequest, UpstreamResponse};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Inbound chat request
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatRequest {
    /// Instruction/persona text
    pub system: String,
    /// Conversation history in chronological order
    pub messages: Vec<ChatMessage>,
    /// Provider conversation to continue
    #[serde(default)]
    pub conversation_id: Option<String>,
}

/// Success envelope returned by `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    /// Always `false` for this envelope
    pub error: bool,
    /// Generated text, exactly as reported by the provider
    pub content: String,
    /// Conversation identifier reported by the provider, `null` when absent
    pub conversation_id: Option<String>,
}

impl From<UpstreamResponse> for ChatResponse {
    fn from(resp: UpstreamResponse) -> Self {
        ChatResponse {
            error: false,
            content: resp.text,
            conversation_id: resp.conversation_id,
        }
    }
}

/// Builds the provider call for a chat request.
///
/// Message order is kept as-is. An empty conversation id is dropped.
pub fn build_upstream_request(request: ChatRequest) -> UpstreamRequest {
    UpstreamRequest {
        model: UPSTREAM_MODEL.to_string(),
        instructions: request.system,
        messages: request.messages,
        temperature: UPSTREAM_TEMPERATURE,
        conversation_id: request.conversation_id.filter(|id| !id.is_empty()),
    }
}

/// Relays one chat request to the upstream provider.
///
/// No validation happens here beyond what deserialization already enforced;
/// anything the provider rejects comes back as [`RelayError::Upstream`].
pub async fn handle_chat(
    client: &LlmClient,
    request: ChatRequest,
) -> Result<ChatResponse, RelayError> {
    let upstream = build_upstream_request(request);
    debug!(
        messages = upstream.messages.len(),
        continues_conversation = upstream.conversation_id.is_some(),
        "Relaying chat request"
    );

    match client.generate(&upstream).await {
        Ok(resp) => Ok(ChatResponse::from(resp)),
        Err(e) => {
            warn!("Upstream provider failed: {}", e);
            Err(e.into())
        }
    }
}
