use crate::domain::generation::{GenerateRequest, GenerateResponse};
use crate::error::ErrorResponse;
use async_trait::async_trait;

/// Failure surfaced to the presenter by a [`GenerateApi`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    /// The service answered with an error status; `message` carries its
    /// user-facing text (possibly empty when the body was not parseable).
    #[error("{message}")]
    Api { status: u16, message: String },
    /// The request never completed (DNS, refused connection, dropped socket).
    #[error("network error: {0}")]
    Network(String),
    /// A success status whose body did not carry a replies array.
    #[error("malformed response body")]
    MalformedResponse,
}

#[async_trait]
pub trait GenerateApi: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ClientError>;
}

/// Calls the reply-generation service over HTTP.
pub struct HttpGenerateApi {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpGenerateApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl GenerateApi for HttpGenerateApi {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ClientError> {
        let url = format!("{}/api/generate", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<GenerateResponse>()
            .await
            .map_err(|_| ClientError::MalformedResponse)
    }
}
