//! Error types for the parser and clipboard collaborators.
//!
//! Neither error ever escapes the formatter or the controller: a rejected
//! parse becomes an empty [`FormatSet`](crate::FormatSet), and a failed
//! clipboard write simply leaves no feedback message behind. They exist so
//! collaborator implementations can say *why* something failed, which ends
//! up in debug logs.

use std::fmt;

/// The parser collaborator refused to produce a phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseRejection {
    /// The input was empty or whitespace only.
    Empty,

    /// The parser could not make sense of the input.
    Unparseable {
        /// The parser's own explanation.
        reason: String,
    },
}

impl fmt::Display for ParseRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "phone number is empty"),
            Self::Unparseable { reason } => {
                write!(f, "not a phone number: {}", reason)
            }
        }
    }
}

impl std::error::Error for ParseRejection {}

/// A clipboard write did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard could be opened (headless session, missing display, ...).
    Unavailable {
        /// Why the clipboard could not be opened.
        reason: String,
    },

    /// The clipboard was opened but rejected the text.
    WriteFailed {
        /// Why the write was rejected.
        reason: String,
    },
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => {
                write!(f, "failed to access clipboard: {}", reason)
            }
            Self::WriteFailed { reason } => {
                write!(f, "failed to copy to clipboard: {}", reason)
            }
        }
    }
}

impl std::error::Error for ClipboardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ParseRejection::Empty.to_string(), "phone number is empty");

        assert_eq!(
            ParseRejection::Unparseable {
                reason: "no digits".to_string()
            }
            .to_string(),
            "not a phone number: no digits"
        );

        assert_eq!(
            ClipboardError::Unavailable {
                reason: "no display".to_string()
            }
            .to_string(),
            "failed to access clipboard: no display"
        );

        assert_eq!(
            ClipboardError::WriteFailed {
                reason: "denied".to_string()
            }
            .to_string(),
            "failed to copy to clipboard: denied"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParseRejection>();
        assert_send_sync::<ClipboardError>();
    }
}
