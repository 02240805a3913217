use super::LlmProvider;
use crate::errors::ProviderError;
use crate::llm::{ChatMessage, UpstreamRequest, UpstreamResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Map, Value};
use std::fmt;
use tracing::debug;

/// Provider implementation for OpenAI's Responses API
#[derive(Clone)]
pub struct OpenAiProvider {
    /// OpenAI API key loaded from environment
    api_key: String,
    /// API base URL, without the trailing `/responses`
    base_url: String,
    /// Shared HTTP client, reused across requests
    client: Client,
}

impl OpenAiProvider {
    /// Creates a new OpenAI provider instance
    ///
    /// # Arguments
    /// * `api_key` - Bearer credential sent with every call
    /// * `base_url` - API base URL (e.g. "https://api.openai.com/v1")
    pub fn new(api_key: &str, base_url: &str) -> Self {
        OpenAiProvider {
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/responses", self.base_url)
    }
}

impl fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    /// Calls OpenAI's responses endpoint
    ///
    /// # Arguments
    /// * `request` - Instructions, ordered history and optional conversation to continue
    ///
    /// # Returns
    /// * `Result<UpstreamResponse, ProviderError>` - Generated text or a classified provider failure
    async fn generate(
        &self,
        request: &UpstreamRequest,
    ) -> Result<UpstreamResponse, ProviderError> {
        let request_body = build_request_body(request);

        let res = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await?;
            return Err(ProviderError::Api {
                status,
                message: extract_error_message(&text, status),
            });
        }

        let json_resp: Value = res
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;
        debug!("OpenAI response: {}", json_resp);
        parse_response_body(&json_resp)
    }
}

/// Content part type for a message of the given role.
fn content_type(role: &str) -> &'static str {
    if role == "assistant" {
        "output_text"
    } else {
        "input_text"
    }
}

fn input_item(message: &ChatMessage) -> Value {
    json!({
        "role": message.role,
        "content": [{ "type": content_type(&message.role), "text": message.content }]
    })
}

/// Builds the JSON body of a responses call.
///
/// `conversation` is only present when the request carries an identifier.
pub fn build_request_body(request: &UpstreamRequest) -> Value {
    let mut body = Map::new();
    body.insert("model".to_string(), json!(request.model));
    body.insert("instructions".to_string(), json!(request.instructions));
    body.insert(
        "input".to_string(),
        Value::Array(request.messages.iter().map(input_item).collect()),
    );
    body.insert("temperature".to_string(), json!(request.temperature));
    if let Some(id) = &request.conversation_id {
        body.insert("conversation".to_string(), json!(id));
    }
    Value::Object(body)
}

/// Extracts generated text and conversation id from a successful response body.
pub fn parse_response_body(body: &Value) -> Result<UpstreamResponse, ProviderError> {
    let text = match body.get("output_text").and_then(Value::as_str) {
        Some(text) => text.to_string(),
        None => {
            let output = body.get("output").and_then(Value::as_array).ok_or_else(|| {
                ProviderError::InvalidResponse("No output in OpenAI response".to_string())
            })?;
            let parts: Vec<&str> = output
                .iter()
                .filter_map(|item| item.get("content").and_then(Value::as_array))
                .flatten()
                .filter(|part| part["type"] == "output_text")
                .filter_map(|part| part["text"].as_str())
                .collect();
            if parts.is_empty() {
                return Err(ProviderError::InvalidResponse(
                    "No output text in OpenAI response".to_string(),
                ));
            }
            parts.concat()
        }
    };

    let conversation_id = match body.get("conversation") {
        Some(Value::String(id)) => Some(id.clone()),
        Some(Value::Object(conv)) => conv.get("id").and_then(Value::as_str).map(str::to_string),
        _ => None,
    };

    Ok(UpstreamResponse {
        text,
        conversation_id,
    })
}

/// Picks the provider's own error text out of a failure body.
///
/// Falls back to the raw body, then to the status reason when the body is empty.
pub fn extract_error_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(msg) = json["error"]["message"].as_str() {
            return msg.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!(
            "OpenAI API error: {}",
            status.canonical_reason().unwrap_or("unknown status")
        )
    } else {
        trimmed.to_string()
    }
}
