//! Copy-to-clipboard for code listings.
//!
//! Copying is best effort. The write result is inspected only to log a failure, and the
//! "copied" indicator next to the listing flips either way, so the user never sees a difference
//! between a copy that worked and one the platform refused.

use std::time::{Duration, Instant};

/// How long a listing shows its "copied" indicator.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

#[derive(Debug, thiserror::Error)]
/// Clipboard access failures.
pub enum ClipboardError {
    /// No clipboard could be opened (headless session, missing display server).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// The clipboard rejected the text.
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Destination for copied text.
pub trait ClipboardSink {
    /// Place `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard cannot be reached or refuses the text.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Default)]
/// The system clipboard, opened on first use and kept for the session.
///
/// Holding the handle matters on X11, where clipboard contents are served by the owning process
/// and vanish when the handle is dropped.
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    #[must_use]
    /// A clipboard that has not been opened yet.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.handle.is_none() {
            let opened = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.handle = Some(opened);
        }
        let Some(handle) = self.handle.as_mut() else {
            return Err(ClipboardError::Unavailable("no handle".to_string()));
        };
        handle
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Write `text` to the clipboard, logging and discarding any failure.
pub fn copy_to_clipboard(sink: &mut dyn ClipboardSink, text: &str) {
    match sink.write_text(text) {
        Ok(()) => tracing::debug!(bytes = text.len(), "copied to clipboard"),
        Err(err) => tracing::debug!(%err, "clipboard copy failed"),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// The transient "copied" indicator of one listing.
pub struct CopyFeedback {
    copied_at: Option<Instant>,
}

impl CopyFeedback {
    /// Start showing the indicator.
    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    #[must_use]
    /// Whether the indicator is showing at `now`.
    pub fn is_active(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPY_FEEDBACK)
    }
}

#[cfg(test)]
#[path = "tests/clipboard.rs"]
mod tests;
