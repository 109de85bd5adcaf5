use crate::client::api::{ClientError, GenerateApi};
use crate::client::clipboard::Clipboard;
use crate::client::state::ViewState;
use crate::client::usage::UsageTracker;
use crate::domain::generation::GenerateRequest;
use std::sync::Arc;

const EMPTY_EMAIL_MSG: &str = "받은 이메일 내용을 입력해주세요.";
const NETWORK_FAILURE_MSG: &str = "네트워크 오류가 발생했습니다. 다시 시도해주세요.";
const MALFORMED_RESPONSE_MSG: &str = "응답 형식이 올바르지 않습니다.";
const GENERIC_FAILURE_MSG: &str = "오류가 발생했습니다.";

fn quota_exhausted_msg(limit: u32) -> String {
    format!("오늘의 무료 사용 횟수({limit}회)를 모두 소진했습니다. 내일 다시 이용해주세요.")
}

/// Drives one user's reply-generation flow: quota gate, the API call, state
/// transitions, and copy-to-clipboard.
pub struct GenerateSession {
    api: Arc<dyn GenerateApi>,
    tracker: UsageTracker,
    state: ViewState,
    clipboard: Box<dyn Clipboard>,
}

impl GenerateSession {
    pub fn new(
        api: Arc<dyn GenerateApi>,
        tracker: UsageTracker,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        Self {
            api,
            tracker,
            state: ViewState::new(),
            clipboard,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn tracker(&self) -> &UsageTracker {
        &self.tracker
    }

    /// Submit one generation request.
    ///
    /// Local gates run first and never reach the service: an empty email and
    /// an exhausted daily quota both surface their message immediately. The
    /// usage count moves only on a confirmed success.
    pub async fn submit(&mut self, email: &str, tone: &str, key_message: Option<&str>) {
        // The render layer disables the submit control while loading; this
        // is the same gate for shells that do not.
        if self.state.is_loading() {
            return;
        }
        if email.trim().is_empty() {
            self.state.apply_failure(EMPTY_EMAIL_MSG.to_string());
            return;
        }
        if self.tracker.is_exhausted() {
            self.state
                .apply_failure(quota_exhausted_msg(self.tracker.limit()));
            return;
        }

        self.state.begin_submission();

        let request = GenerateRequest {
            email: email.to_string(),
            tone: tone.to_string(),
            key_message: key_message.map(str::to_string),
        };

        match self.api.generate(&request).await {
            Ok(response) => {
                self.state.apply_success(response.replies);
                let count = self.tracker.record_usage();
                tracing::debug!(usage_today = count, "Generation succeeded");
            }
            Err(ClientError::Api { status, message }) => {
                tracing::warn!(status, "Generation rejected by the service");
                let message = if message.trim().is_empty() {
                    GENERIC_FAILURE_MSG.to_string()
                } else {
                    message
                };
                self.state.apply_failure(message);
            }
            Err(ClientError::Network(detail)) => {
                tracing::warn!(error = %detail, "Generation request never completed");
                self.state.apply_failure(NETWORK_FAILURE_MSG.to_string());
            }
            Err(ClientError::MalformedResponse) => {
                tracing::warn!("Generation response had no replies array");
                self.state.apply_failure(MALFORMED_RESPONSE_MSG.to_string());
            }
        }
    }

    /// Copy one reply's content, returning whether the acknowledgement
    /// should show. Copy failures leave the rest of the state alone.
    pub fn copy_reply(&mut self, index: usize) -> bool {
        let content = match self.state.replies().get(index) {
            Some(reply) => reply.content.clone(),
            None => return false,
        };

        match self.clipboard.copy(&content) {
            Ok(()) => {
                self.state.mark_copied(index);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Copy to clipboard failed");
                false
            }
        }
    }
}
