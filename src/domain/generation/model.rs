use serde::{Deserialize, Serialize};

/// Request for POST /api/generate
///
/// `email` and `tone` default to empty when the field is absent so that a
/// missing field reaches validation (and its Korean message) instead of
/// dying in deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub tone: String,
    #[serde(rename = "keyMessage", skip_serializing_if = "Option::is_none")]
    pub key_message: Option<String>,
}

impl GenerateRequest {
    /// Key message with empty/whitespace-only values treated as not provided,
    /// matching how the page omits the line entirely.
    pub fn key_message(&self) -> Option<&str> {
        self.key_message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// One generated reply draft. Exactly three are produced per request, labeled
/// 짧은/보통/상세 in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub label: String,
    pub content: String,
}

/// Success response for POST /api/generate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub replies: Vec<Reply>,
}
