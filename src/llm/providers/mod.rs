use crate::errors::ProviderError;
use crate::llm::{UpstreamRequest, UpstreamResponse};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openai;

/// Text generation capability of an upstream completion service.
///
/// Implementations are shared by every in-flight request, so they must be
/// usable concurrently without external locking.
#[async_trait]
pub trait LlmProvider: Debug + Send + Sync {
    async fn generate(&self, request: &UpstreamRequest)
        -> Result<UpstreamResponse, ProviderError>;
}
