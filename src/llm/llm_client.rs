use crate::config::RelayConfig;
use crate::errors::{ConfigError, ProviderError};
use crate::llm::providers::LlmProvider;
use crate::llm::{UpstreamRequest, UpstreamResponse};
use tracing::debug;

/// Generic LLM client that delegates work to a concrete provider.
///
/// Built once at startup and shared by every request.
#[derive(Debug)]
pub struct LlmClient {
    provider: Box<dyn LlmProvider>,
}

impl LlmClient {
    /// Creates a new LLM client for the configured provider.
    ///
    /// # Arguments
    /// * `config` - Relay configuration carrying provider name, credential and base URL
    ///
    /// # Returns
    /// * `Result<LlmClient, ConfigError>` - New LLM client instance or error
    pub fn new(config: &RelayConfig) -> Result<Self, ConfigError> {
        let provider: Box<dyn LlmProvider> = match config.provider.as_str() {
            "openai" => Box::new(crate::llm::providers::openai::OpenAiProvider::new(
                &config.api_key,
                config.base_url.as_str(),
            )),
            other => return Err(ConfigError::UnknownProvider(other.to_string())),
        };

        Ok(LlmClient { provider })
    }

    /// Wraps an already constructed provider.
    pub fn with_provider(provider: Box<dyn LlmProvider>) -> Self {
        LlmClient { provider }
    }

    /// Sends one completion request to the provider.
    pub async fn generate(
        &self,
        request: &UpstreamRequest,
    ) -> Result<UpstreamResponse, ProviderError> {
        debug!(
            "Calling {} with {} message(s)",
            request.model,
            request.messages.len()
        );
        self.provider.generate(request).await
    }
}
