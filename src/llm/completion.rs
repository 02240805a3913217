use crate::llm::ChatMessage;

/// Provider-neutral shape of one completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamRequest {
    /// Model identifier
    pub model: String,
    /// Instruction/persona text
    pub instructions: String,
    /// Conversation history, oldest first
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: f64,
    /// Provider conversation to continue. `None` means the field is not sent.
    pub conversation_id: Option<String>,
}

/// Provider-neutral result of one completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    /// Generated text
    pub text: String,
    /// Conversation identifier reported by the provider, if any
    pub conversation_id: Option<String>,
}
