//! rig-core integration for chat completions.
//!
//! Uses rig-core's OpenAI completions client. Each call is a single
//! system + user exchange; transport and API errors surface unmodified as
//! [`ProviderError::ApiError`]. No retry, no streaming, no timeout.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers;

use super::{CompletionProvider, ProviderError};

/// OpenAI-backed completion provider.
#[derive(Debug)]
pub struct OpenAiProvider {
    model: String,
    api_key: String,
}

impl OpenAiProvider {
    /// Create a provider for the given model and API key.
    pub fn new(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    fn build_client(&self) -> Result<providers::openai::CompletionsClient, ProviderError> {
        providers::openai::CompletionsClient::builder()
            .api_key(&self.api_key)
            .build()
            .map_err(|e| ProviderError::ApiError(format!("failed to create OpenAI client: {e}")))
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, system_prompt: &str, body: &str) -> Result<String, ProviderError> {
        let client = self.build_client()?;
        let agent = client.agent(&self.model).preamble(system_prompt).build();

        agent
            .prompt(body)
            .await
            .map_err(|e| ProviderError::ApiError(format!("OpenAI API error: {e}")))
    }
}
