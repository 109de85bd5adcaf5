use crate::domain::generation::Reply;
use std::time::{Duration, Instant};

/// How long the per-reply "copied" acknowledgement stays visible.
pub const COPY_ACK_TTL: Duration = Duration::from_secs(2);

/// Presenter state for the reply-generation page, kept free of IO so every
/// transition is unit-testable. The shell renders from this and calls the
/// transition methods; [`super::GenerateSession`] drives them around the
/// actual API call.
#[derive(Debug)]
pub struct ViewState {
    loading: bool,
    replies: Vec<Reply>,
    error: Option<String>,
    copied: Option<(usize, Instant)>,
    copy_ack_ttl: Duration,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::with_copy_ack_ttl(COPY_ACK_TTL)
    }

    pub fn with_copy_ack_ttl(copy_ack_ttl: Duration) -> Self {
        Self {
            loading: false,
            replies: Vec::new(),
            error: None,
            copied: None,
            copy_ack_ttl,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn replies(&self) -> &[Reply] {
        &self.replies
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submission is allowed unless a request is in flight or the daily
    /// quota is gone. This is the page's only concurrency control.
    pub fn can_submit(&self, quota_exhausted: bool) -> bool {
        !self.loading && !quota_exhausted
    }

    pub fn begin_submission(&mut self) {
        self.loading = true;
        self.replies.clear();
        self.error = None;
    }

    pub fn apply_success(&mut self, replies: Vec<Reply>) {
        self.replies = replies;
        self.loading = false;
    }

    pub fn apply_failure(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    /// Record the transient "copied" acknowledgement for one reply.
    /// Copying never touches replies, error, or loading.
    pub fn mark_copied(&mut self, index: usize) {
        self.copied = Some((index, Instant::now()));
    }

    /// Index of the reply currently showing the acknowledgement, if it has
    /// not aged out yet.
    pub fn copied_index(&self) -> Option<usize> {
        let (index, since) = self.copied?;
        if since.elapsed() < self.copy_ack_ttl {
            Some(index)
        } else {
            None
        }
    }
}
