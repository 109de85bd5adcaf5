use crate::error::AppError;
use crate::infrastructure::repositories::CompletionError;

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("{0}")]
    Invalid(String),
    #[error("{0}")]
    ProviderUnauthorized(String),
    #[error("{0}")]
    ProviderThrottled(String),
    #[error("{0}")]
    Failed(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<CompletionError> for GenerationError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::Unauthorized(_) => {
                GenerationError::ProviderUnauthorized("API 키가 유효하지 않습니다.".to_string())
            }
            CompletionError::RateLimited(_) => GenerationError::ProviderThrottled(
                "API 요청 한도를 초과했습니다. 잠시 후 다시 시도해주세요.".to_string(),
            ),
            CompletionError::TimedOut(_) => GenerationError::Failed(
                "응답 생성 시간이 초과되었습니다. 다시 시도해주세요.".to_string(),
            ),
            CompletionError::Provider(_) => GenerationError::Failed(
                "답장 생성 중 오류가 발생했습니다. 다시 시도해주세요.".to_string(),
            ),
        }
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::Invalid(msg) => AppError::BadRequest(msg),
            GenerationError::ProviderUnauthorized(msg) => AppError::Unauthorized(msg),
            GenerationError::ProviderThrottled(msg) => AppError::RateLimited(msg),
            GenerationError::Failed(msg) => AppError::GenerationFailed(msg),
            GenerationError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
