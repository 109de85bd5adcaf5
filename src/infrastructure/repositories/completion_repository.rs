use async_trait::async_trait;
use std::time::Duration;

/// Sampling and output controls for a single completion request.
#[derive(Debug, Clone)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_output_tokens: u32,
    /// Ask the provider to enforce a structured JSON-object output mode.
    pub json_output: bool,
}

/// Failure from the completion provider, already classified so callers only
/// deal with the taxonomy, never with provider SDK types.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CompletionError {
    #[error("provider rejected the credentials: {0}")]
    Unauthorized(String),
    #[error("provider throttled the request: {0}")]
    RateLimited(String),
    #[error("provider did not answer within {0:?}")]
    TimedOut(Duration),
    #[error("provider error: {0}")]
    Provider(String),
}

/// Repository for text-completion requests.
/// Abstracts the underlying model provider (OpenAI, Azure OpenAI, etc.)
///
/// Implementations are responsible for:
/// - Issuing exactly one provider attempt per call (no hidden retries)
/// - Enforcing a bounded timeout
/// - Classifying provider failures into [`CompletionError`]
#[async_trait]
pub trait CompletionRepository: Send + Sync {
    /// Request a completion for a system/user prompt pair.
    ///
    /// Returns the raw completion text; an empty string when the provider
    /// answered without content. Shape validation is the caller's concern.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &CompletionOptions,
    ) -> Result<String, CompletionError>;
}
