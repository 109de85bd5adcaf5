use async_trait::async_trait;
use mailbot_backend::infrastructure::repositories::{
    CompletionError, CompletionOptions, CompletionRepository,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// One provider call as the service issued it.
#[derive(Debug, Clone)]
pub struct CapturedCall {
    pub system_prompt: String,
    pub user_prompt: String,
    pub options: CompletionOptions,
}

/// Scripted stand-in for the OpenAI repository.
///
/// Starts out answering with a canned valid completion; tests override the
/// outcome per scenario and assert on call counts and captured prompts.
pub struct StubCompletionRepository {
    outcome: Mutex<Result<String, CompletionError>>,
    calls: AtomicUsize,
    captured: Mutex<Vec<CapturedCall>>,
}

impl StubCompletionRepository {
    pub fn new() -> Self {
        Self {
            outcome: Mutex::new(Ok(valid_replies_json())),
            calls: AtomicUsize::new(0),
            captured: Mutex::new(Vec::new()),
        }
    }

    pub fn respond_with(&self, completion: &str) {
        *self.outcome.lock().unwrap() = Ok(completion.to_string());
    }

    pub fn fail_with(&self, error: CompletionError) {
        *self.outcome.lock().unwrap() = Err(error);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_call(&self) -> CapturedCall {
        self.captured
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no provider call was captured")
    }
}

#[async_trait]
impl CompletionRepository for StubCompletionRepository {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &CompletionOptions,
    ) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.captured.lock().unwrap().push(CapturedCall {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
            options: options.clone(),
        });
        self.outcome.lock().unwrap().clone()
    }
}

/// A completion with the three canonical replies, as the model returns it
/// when it behaves.
pub fn valid_replies_json() -> String {
    serde_json::json!({
        "replies": [
            {
                "label": "짧은",
                "content": "네, 부장님. 일정 확인했습니다. 해당 시간에 참석하겠습니다. 감사합니다."
            },
            {
                "label": "보통",
                "content": "안녕하세요, 부장님. 보내주신 회의 일정 잘 확인했습니다. 말씀하신 시간에 참석 가능하며, 관련 자료는 미리 준비해 가겠습니다. 감사합니다."
            },
            {
                "label": "상세",
                "content": "안녕하세요, 부장님. 보내주신 메일 잘 받았습니다. 회의 일정과 안건 모두 확인했으며, 말씀하신 시간에 참석하겠습니다. 논의에 필요한 자료는 사전에 정리하여 회의 전날까지 공유드리겠습니다. 추가로 준비할 사항이 있다면 말씀 부탁드립니다. 감사합니다."
            }
        ]
    })
    .to_string()
}
