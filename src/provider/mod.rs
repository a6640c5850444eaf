//! CompletionProvider trait and LLM integration.
//!
//! An abstraction layer over rig-core so the command layer and tests are
//! decoupled from the specific LLM library.

pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the completion provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("LLM API error: {0}")]
    ApiError(String),

    #[error("provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for single-turn chat completion.
///
/// One request per call: a system message plus one user message. The
/// response text is returned as-is — no retry, no streaming.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, system_prompt: &str, body: &str) -> Result<String, ProviderError>;
}

/// Send a system prompt and diff body through the provider.
///
/// Whitespace-only diffs short-circuit to `Ok(None)` without issuing a
/// request.
pub async fn complete_for_diff(
    provider: &dyn CompletionProvider,
    system_prompt: &str,
    diff: &str,
) -> Result<Option<String>, ProviderError> {
    if crate::diff::is_blank(diff) {
        return Ok(None);
    }
    provider.complete(system_prompt, diff).await.map(Some)
}
