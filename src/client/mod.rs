//! Headless client for the reply-generation service: the daily quota
//! tracker, the presenter state machine, the HTTP call, and
//! copy-to-clipboard, with every side effect behind a trait so the whole
//! flow runs in unit tests. A rendering shell owns the widgets; this module
//! owns what they display.

pub mod api;
pub mod clipboard;
pub mod session;
pub mod state;
pub mod usage;

pub use api::{ClientError, GenerateApi, HttpGenerateApi};
pub use clipboard::{
    Clipboard, ClipboardError, FallbackClipboard, SelectionClipboard, SystemClipboard,
};
pub use session::GenerateSession;
pub use state::ViewState;
pub use usage::{
    FileUsageStore, MemoryUsageStore, UsageStore, UsageTracker, DAILY_LIMIT, STORAGE_KEY,
};
