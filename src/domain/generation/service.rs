use crate::domain::generation::error::GenerationError;
use crate::domain::generation::model::{GenerateRequest, GenerateResponse, Reply};
use crate::domain::generation::prompt::{self, REPLY_LABELS};
use crate::infrastructure::repositories::{CompletionOptions, CompletionRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// Sampling temperature. Moderate so the three variants differ in phrasing
/// without drifting off the source email.
const TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 2000;

/// Upper bound on the received-email length, counted in characters rather
/// than bytes (the input is mostly Korean).
pub const MAX_EMAIL_CHARS: usize = 5000;

const MISSING_FIELDS_MSG: &str = "이메일 내용과 톤을 입력해주세요.";
const EMAIL_TOO_LONG_MSG: &str = "이메일 내용은 5000자 이내로 입력해주세요.";
const EMPTY_COMPLETION_MSG: &str = "AI 응답을 생성하지 못했습니다.";
const GENERATION_FAILED_MSG: &str = "답장 생성 중 오류가 발생했습니다. 다시 시도해주세요.";

#[async_trait]
pub trait GenerationServiceApi: Send + Sync {
    async fn generate(&self, request: GenerateRequest)
        -> Result<GenerateResponse, GenerationError>;
}

pub struct GenerationService {
    completion_repository: Arc<dyn CompletionRepository>,
}

impl GenerationService {
    pub fn new(completion_repository: Arc<dyn CompletionRepository>) -> Self {
        Self {
            completion_repository,
        }
    }

    /// Fail-fast validation; nothing reaches the provider until it passes.
    fn validate(request: &GenerateRequest) -> Result<(), GenerationError> {
        if request.email.trim().is_empty() || request.tone.trim().is_empty() {
            return Err(GenerationError::Invalid(MISSING_FIELDS_MSG.to_string()));
        }
        if request.email.chars().count() > MAX_EMAIL_CHARS {
            return Err(GenerationError::Invalid(EMAIL_TOO_LONG_MSG.to_string()));
        }
        Ok(())
    }

    fn parse_replies(completion: &str) -> Result<GenerateResponse, GenerationError> {
        let mut response: GenerateResponse = serde_json::from_str(completion).map_err(|e| {
            tracing::error!(error = %e, "Completion is not valid reply JSON");
            GenerationError::Failed(GENERATION_FAILED_MSG.to_string())
        })?;

        if response.replies.len() != REPLY_LABELS.len() {
            tracing::error!(
                reply_count = response.replies.len(),
                "Completion carried the wrong number of replies"
            );
            return Err(GenerationError::Failed(GENERATION_FAILED_MSG.to_string()));
        }
        if response
            .replies
            .iter()
            .any(|reply| reply.content.trim().is_empty())
        {
            tracing::error!("Completion carried a reply with empty content");
            return Err(GenerationError::Failed(GENERATION_FAILED_MSG.to_string()));
        }

        normalize_labels(&mut response.replies);
        Ok(response)
    }
}

#[async_trait]
impl GenerationServiceApi for GenerationService {
    async fn generate(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, GenerationError> {
        Self::validate(&request)?;

        let tone = request.tone.trim();
        let system_prompt = prompt::system_prompt(tone);
        let user_prompt = prompt::user_prompt(&request.email, tone, request.key_message());

        tracing::info!(
            tone = %tone,
            email_chars = request.email.chars().count(),
            has_key_message = request.key_message().is_some(),
            "Generating reply drafts"
        );

        let options = CompletionOptions {
            temperature: TEMPERATURE,
            max_output_tokens: MAX_OUTPUT_TOKENS,
            json_output: true,
        };

        let completion = self
            .completion_repository
            .complete(&system_prompt, &user_prompt, &options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Completion request failed");
                GenerationError::from(e)
            })?;

        if completion.trim().is_empty() {
            tracing::error!("Provider answered without content");
            return Err(GenerationError::Failed(EMPTY_COMPLETION_MSG.to_string()));
        }

        let response = Self::parse_replies(completion.trim())?;

        tracing::info!(reply_count = response.replies.len(), "Reply drafts ready");
        Ok(response)
    }
}

/// The model occasionally strays from the requested labels or their order.
/// A complete canonical set is reordered to 짧은/보통/상세; anything else is
/// relabeled by position, preserving the content order the model chose.
fn normalize_labels(replies: &mut [Reply]) {
    let canonical_set = REPLY_LABELS
        .iter()
        .all(|label| replies.iter().any(|reply| reply.label == *label));

    if canonical_set {
        replies.sort_by_key(|reply| {
            REPLY_LABELS
                .iter()
                .position(|label| *label == reply.label)
                .unwrap_or(usize::MAX)
        });
    } else {
        for (reply, label) in replies.iter_mut().zip(REPLY_LABELS) {
            reply.label = label.to_string();
        }
    }
}
