// Drives the bundled headless client against a live server instance, the
// way the page drives the real service: quota gate, one POST per
// submission, usage counted only on success.

use crate::e2e::helpers;

use chrono::Utc;
use helpers::TestContext;
use mailbot_backend::client::{
    Clipboard, ClipboardError, GenerateSession, HttpGenerateApi, MemoryUsageStore, UsageStore,
    UsageTracker, DAILY_LIMIT, STORAGE_KEY,
};
use mailbot_backend::infrastructure::repositories::CompletionError;
use std::sync::Arc;
use test_context::test_context;

struct NoopClipboard;

impl Clipboard for NoopClipboard {
    fn copy(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}

fn session_against(base_url: &str) -> (GenerateSession, Arc<MemoryUsageStore>) {
    let store = Arc::new(MemoryUsageStore::new());
    let tracker = UsageTracker::new(store.clone());
    let api = Arc::new(HttpGenerateApi::new(base_url));
    (
        GenerateSession::new(api, tracker, Box::new(NoopClipboard)),
        store,
    )
}

fn seed_today(store: &MemoryUsageStore, count: u32) {
    let today = Utc::now().format("%Y-%m-%d").to_string();
    store.set(
        STORAGE_KEY,
        &serde_json::json!({"date": today, "count": count}).to_string(),
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_complete_the_page_flow_and_count_usage(ctx: &TestContext) {
    let (mut session, _) = session_against(&ctx.base_url);

    session
        .submit("김부장님 안녕하세요. 회의 일정 조율 부탁드립니다.", "정중", None)
        .await;

    assert_eq!(session.state().error(), None);
    assert_eq!(session.state().replies().len(), 3);
    assert_eq!(session.tracker().usage_today(), 1);

    session
        .submit("김부장님 안녕하세요. 자료 전달드립니다.", "친근", Some("검토 부탁드립니다"))
        .await;

    assert_eq!(session.tracker().usage_today(), 2);
    assert_eq!(ctx.completions.call_count(), 2);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_the_server_validation_message(ctx: &TestContext) {
    let (mut session, _) = session_against(&ctx.base_url);

    // Passes the client's own emptiness gate, fails server-side validation
    session.submit(&"가".repeat(5001), "정중", None).await;

    assert_eq!(
        session.state().error(),
        Some("이메일 내용은 5000자 이내로 입력해주세요.")
    );
    assert_eq!(session.tracker().usage_today(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_usage_when_the_provider_throttles(ctx: &TestContext) {
    ctx.completions.fail_with(CompletionError::RateLimited(
        "Rate limit reached".to_string(),
    ));
    let (mut session, _) = session_against(&ctx.base_url);

    session.submit("안녕하세요. 확인 부탁드립니다.", "정중", None).await;

    assert_eq!(
        session.state().error(),
        Some("API 요청 한도를 초과했습니다. 잠시 후 다시 시도해주세요.")
    );
    assert_eq!(session.tracker().usage_today(), 0);
    assert!(session.state().replies().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_block_the_sixth_attempt_without_contacting_the_service(ctx: &TestContext) {
    let (mut session, store) = session_against(&ctx.base_url);
    seed_today(&store, DAILY_LIMIT);

    session.submit("안녕하세요. 확인 부탁드립니다.", "정중", None).await;

    assert_eq!(
        session.state().error(),
        Some("오늘의 무료 사용 횟수(5회)를 모두 소진했습니다. 내일 다시 이용해주세요.")
    );
    assert_eq!(ctx.completions.call_count(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_network_failure_when_the_service_is_unreachable(_ctx: &TestContext) {
    // Grab a port nothing is listening on anymore
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = listener.local_addr().unwrap();
    drop(listener);

    let (mut session, _) = session_against(&format!("http://{}", dead_addr));

    session.submit("안녕하세요. 확인 부탁드립니다.", "정중", None).await;

    assert_eq!(
        session.state().error(),
        Some("네트워크 오류가 발생했습니다. 다시 시도해주세요.")
    );
    assert_eq!(session.tracker().usage_today(), 0);
}
