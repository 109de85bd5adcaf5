use super::completion_repository::{CompletionError, CompletionOptions, CompletionRepository};
use async_openai::{
    config::OpenAIConfig,
    error::{ApiError, OpenAIError},
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};
use async_trait::async_trait;
use std::time::Duration;

/// OpenAI chat-completions implementation of the completion repository.
pub struct OpenAiCompletionRepository {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl OpenAiCompletionRepository {
    pub fn new(api_key: &str, model: String, timeout: Duration) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        // The SDK retries throttled requests with exponential backoff by
        // default; a zero window keeps it at a single attempt so 429s reach
        // the caller instead of stalling the user request.
        let client = Client::build(reqwest::Client::new(), config, no_retry_backoff());

        Self {
            client,
            model,
            timeout,
        }
    }

    fn classify(&self, err: OpenAIError) -> CompletionError {
        match err {
            OpenAIError::ApiError(api) => classify_api_error(&api),
            OpenAIError::Reqwest(e) => {
                if e.is_timeout() {
                    CompletionError::TimedOut(self.timeout)
                } else {
                    CompletionError::Provider(format!("http error: {e}"))
                }
            }
            other => CompletionError::Provider(other.to_string()),
        }
    }
}

fn no_retry_backoff() -> backoff::ExponentialBackoff {
    backoff::ExponentialBackoff {
        max_elapsed_time: Some(Duration::ZERO),
        ..backoff::ExponentialBackoff::default()
    }
}

/// The SDK surfaces provider failures as an error body, not a status code;
/// the documented `code`/`type` pairs identify the cases the taxonomy
/// distinguishes.
fn classify_api_error(err: &ApiError) -> CompletionError {
    let code = err.code.as_deref().unwrap_or("");
    let kind = err.r#type.as_deref().unwrap_or("");

    if code == "invalid_api_key" || err.message.contains("API key") {
        return CompletionError::Unauthorized(err.message.clone());
    }
    if code == "rate_limit_exceeded"
        || code == "insufficient_quota"
        || kind == "insufficient_quota"
        || err.message.contains("Rate limit")
    {
        return CompletionError::RateLimited(err.message.clone());
    }

    CompletionError::Provider(err.message.clone())
}

#[async_trait]
impl CompletionRepository for OpenAiCompletionRepository {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &CompletionOptions,
    ) -> Result<String, CompletionError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %self.model,
            system_prompt_chars = system_prompt.chars().count(),
            user_prompt_chars = user_prompt.chars().count(),
            temperature = options.temperature,
            max_output_tokens = options.max_output_tokens,
            json_output = options.json_output,
            "Calling OpenAI chat completions API"
        );

        let mut builder = CreateChatCompletionRequestArgs::default();
        builder
            .model(&self.model)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system_prompt)
                    .build()
                    .map_err(|e| CompletionError::Provider(e.to_string()))?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_prompt)
                    .build()
                    .map_err(|e| CompletionError::Provider(e.to_string()))?
                    .into(),
            ])
            .temperature(options.temperature)
            .max_tokens(options.max_output_tokens);
        if options.json_output {
            builder.response_format(ResponseFormat::JsonObject);
        }
        let request = builder
            .build()
            .map_err(|e| CompletionError::Provider(e.to_string()))?;

        let response = match tokio::time::timeout(
            self.timeout,
            self.client.chat().create(request),
        )
        .await
        {
            Ok(result) => result.map_err(|e| {
                tracing::error!(
                    error = %e,
                    model = %self.model,
                    "OpenAI chat completions API call failed"
                );
                self.classify(e)
            })?,
            Err(_) => {
                tracing::error!(
                    model = %self.model,
                    timeout_secs = self.timeout.as_secs(),
                    "OpenAI chat completions API call timed out"
                );
                return Err(CompletionError::TimedOut(self.timeout));
            }
        };

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        tracing::info!(
            provider = "openai",
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            completion_chars = content.chars().count(),
            "Completion received"
        );

        Ok(content)
    }
}
