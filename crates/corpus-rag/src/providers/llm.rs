//! LLM provider trait for chat completion

use async_trait::async_trait;

use crate::error::Result;

/// Trait for the remote chat-completion backend
///
/// Implementations:
/// - `AzureOpenAiClient`: deployment-addressed chat completions over HTTP
/// - test stubs returning canned completions
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a single system-role prompt and return the raw completion text
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
