use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Free generations per client per UTC day.
pub const DAILY_LIMIT: u32 = 5;

/// Storage key the usage record lives under.
pub const STORAGE_KEY: &str = "mailbot_usage";

/// Persisted usage record: `{"date":"YYYY-MM-DD","count":n}`.
/// A stored date other than today reads as zero, so reset is implicit.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UsageRecord {
    date: String,
    count: u32,
}

/// Key/value storage the tracker persists into. The shell decides where the
/// values live (browser local storage, a file next to the binary, memory).
pub trait UsageStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store, used as the test fake and for ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryUsageStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryUsageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UsageStore for MemoryUsageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}

/// Single-JSON-file store for native shells, the local-storage analogue.
/// Storage failures are swallowed the same way a full or blocked browser
/// storage is: the tracker just reads zero next time.
#[derive(Debug)]
pub struct FileUsageStore {
    path: PathBuf,
}

impl FileUsageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> HashMap<String, String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
}

impl UsageStore for FileUsageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = self.read_all();
        values.insert(key.to_string(), value.to_string());
        if let Ok(serialized) = serde_json::to_string(&values) {
            let _ = std::fs::write(&self.path, serialized);
        }
    }
}

/// Day-scoped usage counter over a [`UsageStore`].
///
/// The count belongs to a UTC calendar day. Reading an unset, unparsable, or
/// stale record yields zero; the first `record_usage` of a new day rewrites
/// the record for that day with count 1.
pub struct UsageTracker {
    store: Arc<dyn UsageStore>,
    limit: u32,
}

impl UsageTracker {
    pub fn new(store: Arc<dyn UsageStore>) -> Self {
        Self::with_limit(store, DAILY_LIMIT)
    }

    pub fn with_limit(store: Arc<dyn UsageStore>, limit: u32) -> Self {
        Self { store, limit }
    }

    fn today() -> String {
        Utc::now().format("%Y-%m-%d").to_string()
    }

    pub fn usage_today(&self) -> u32 {
        let Some(raw) = self.store.get(STORAGE_KEY) else {
            return 0;
        };
        let Ok(record) = serde_json::from_str::<UsageRecord>(&raw) else {
            return 0;
        };
        if record.date == Self::today() {
            record.count
        } else {
            0
        }
    }

    /// Increment and persist today's count, returning the new count.
    /// Callers invoke this only after a confirmed successful generation.
    pub fn record_usage(&self) -> u32 {
        let count = self.usage_today() + 1;
        let record = UsageRecord {
            date: Self::today(),
            count,
        };
        if let Ok(serialized) = serde_json::to_string(&record) {
            self.store.set(STORAGE_KEY, &serialized);
        }
        count
    }

    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.usage_today())
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}
