//! System clipboard access.

use thiserror::Error;

/// Errors while writing to the clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),
}

/// A destination for rendered note content.
///
/// The core rendering pipeline hands its final string to a sink and does not
/// retry on failure; whatever the sink reports propagates to the caller.
pub trait ClipboardSink {
    /// Places the given text on the clipboard.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The real system clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Opens a handle to the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns `ClipboardError::Unavailable` when no clipboard exists in the
    /// current environment (e.g. a headless session).
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new().map_err(ClipboardError::Unavailable)?;
        Ok(Self { inner })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_string())
            .map_err(ClipboardError::Unavailable)
    }
}
