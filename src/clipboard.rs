//! The clipboard collaborator.
//!
//! The controller only ever writes text; it never reads the clipboard back.

use crate::error::ClipboardError;

/// Something that accepts text for copying.
pub trait Clipboard {
    /// Places `text` on the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<C: Clipboard + ?Sized> Clipboard for &mut C {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

/// In-memory clipboard that records every write.
///
/// Useful for headless sessions and tests. It can be switched into a failing
/// mode to exercise the rejected-write path.
///
/// # Example
///
/// ```
/// use phone_formatter::clipboard::{Clipboard, MemoryClipboard};
///
/// let mut clipboard = MemoryClipboard::new();
/// clipboard.write_text("+15852826396").unwrap();
/// assert_eq!(clipboard.last(), Some("+15852826396"));
///
/// clipboard.set_failing(true);
/// assert!(clipboard.write_text("again").is_err());
/// assert_eq!(clipboard.writes().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    writes: Vec<String>,
    failing: bool,
}

impl MemoryClipboard {
    /// Creates an empty clipboard that accepts writes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipboard that rejects every write.
    pub fn failing() -> Self {
        Self {
            writes: Vec::new(),
            failing: true,
        }
    }

    /// Switches write rejection on or off.
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    /// The most recently written text.
    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }

    /// Every accepted write, oldest first.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.failing {
            return Err(ClipboardError::WriteFailed {
                reason: "clipboard is set to reject writes".to_string(),
            });
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

/// The operating system clipboard.
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    /// Opens the system clipboard.
    ///
    /// The handle should be kept for the whole session: on some platforms the
    /// copied text only stays available while it is alive.
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable {
            reason: e.to_string(),
        })?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed {
                reason: e.to_string(),
            })
    }
}
