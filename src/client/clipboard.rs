#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("copy failed: {0}")]
    WriteFailed(String),
}

/// Writes reply text to wherever paste will find it.
pub trait Clipboard: Send {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The regular system clipboard. The OS handle is opened on first use so
/// constructing a session on a headless box does not fail until someone
/// actually copies.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = match self.inner.as_mut() {
            Some(clipboard) => clipboard,
            None => {
                let clipboard = arboard::Clipboard::new()
                    .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
                self.inner.insert(clipboard)
            }
        };
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// Selection-based copy path: the X11 primary selection. Only meaningful on
/// Linux; everywhere else it reports unavailable and the composite falls
/// through.
#[derive(Default)]
pub struct SelectionClipboard {
    #[cfg(target_os = "linux")]
    inner: Option<arboard::Clipboard>,
}

impl SelectionClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(target_os = "linux")]
impl Clipboard for SelectionClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        use arboard::{LinuxClipboardKind, SetExtLinux};

        let clipboard = match self.inner.as_mut() {
            Some(clipboard) => clipboard,
            None => {
                let clipboard = arboard::Clipboard::new()
                    .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
                self.inner.insert(clipboard)
            }
        };
        clipboard
            .set()
            .clipboard(LinuxClipboardKind::Primary)
            .text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

#[cfg(not(target_os = "linux"))]
impl Clipboard for SelectionClipboard {
    fn copy(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(
            "selection copy is only supported on linux".to_string(),
        ))
    }
}

/// Primary clipboard first, selection-based copy when the primary is
/// unavailable or refuses the write.
pub struct FallbackClipboard {
    primary: Box<dyn Clipboard>,
    fallback: Box<dyn Clipboard>,
}

impl FallbackClipboard {
    pub fn new(primary: Box<dyn Clipboard>, fallback: Box<dyn Clipboard>) -> Self {
        Self { primary, fallback }
    }

    /// The production pairing: system clipboard with selection fallback.
    pub fn system() -> Self {
        Self::new(
            Box::new(SystemClipboard::new()),
            Box::new(SelectionClipboard::new()),
        )
    }
}

impl Clipboard for FallbackClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        match self.primary.copy(text) {
            Ok(()) => Ok(()),
            Err(primary_err) => {
                tracing::debug!(
                    error = %primary_err,
                    "Primary clipboard failed, trying selection fallback"
                );
                self.fallback.copy(text)
            }
        }
    }
}
