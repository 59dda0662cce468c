//! The transient "copied" message and its single-slot timer.
//!
//! Only one message can be live. Showing a new one replaces both the text
//! and the deadline, so a timer armed by an earlier copy can never clear a
//! message shown by a later one.
//!
//! A duration too long to represent as an [`Instant`] leaves the message up
//! until it is replaced.

use std::time::{Duration, Instant};

/// How long a copy confirmation stays visible.
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(1000);

/// Text shown after a successful copy.
pub const COPY_CONFIRMED: &str = "Number has copied!";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Feedback {
    text: String,
    // None: never expires on its own.
    deadline: Option<Instant>,
}

/// Holds at most one transient message and its deadline.
#[derive(Debug, Clone, Default)]
pub struct FeedbackSlot {
    active: Option<Feedback>,
}

impl FeedbackSlot {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Shows `text` until `now + duration`, replacing any live message.
    pub fn show(&mut self, text: impl Into<String>, now: Instant, duration: Duration) {
        let replaced = self.active.is_some();
        self.active = Some(Feedback {
            text: text.into(),
            deadline: now.checked_add(duration),
        });
        tracing::debug!(replaced, ?duration, "feedback armed");
    }

    /// Clears the message if its deadline has been reached.
    ///
    /// Returns true if a message was cleared by this call.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.active {
            Some(Feedback {
                deadline: Some(deadline),
                ..
            }) if now >= *deadline => {
                self.active = None;
                tracing::debug!("feedback expired");
                true
            }
            _ => false,
        }
    }

    /// The live message, if any.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.active.as_ref().map(|feedback| feedback.text.as_str())
    }

    /// Deadline of the pending timer, if one is armed.
    ///
    /// `None` while a message is live means it has no deadline.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.active.as_ref().and_then(|feedback| feedback.deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_show_and_expire() {
        let start = Instant::now();
        let mut slot = FeedbackSlot::new();
        assert_eq!(slot.message(), None);

        slot.show(COPY_CONFIRMED, start, FEEDBACK_DURATION);
        assert_eq!(slot.message(), Some(COPY_CONFIRMED));
        assert_eq!(slot.deadline(), Some(start + FEEDBACK_DURATION));

        assert!(!slot.expire(start + 999 * MS));
        assert_eq!(slot.message(), Some(COPY_CONFIRMED));

        assert!(slot.expire(start + 1000 * MS));
        assert_eq!(slot.message(), None);
        assert_eq!(slot.deadline(), None);
    }

    #[test]
    fn test_replacement_restarts_timer() {
        let start = Instant::now();
        let mut slot = FeedbackSlot::new();

        slot.show("first", start, FEEDBACK_DURATION);
        slot.show("second", start + 600 * MS, FEEDBACK_DURATION);

        // The first deadline has passed, but it was superseded.
        assert!(!slot.expire(start + 1000 * MS));
        assert_eq!(slot.message(), Some("second"));

        assert!(slot.expire(start + 1600 * MS));
        assert_eq!(slot.message(), None);
    }

    #[test]
    fn test_expire_on_empty_slot() {
        let mut slot = FeedbackSlot::default();
        assert!(!slot.expire(Instant::now()));
    }

    #[test]
    fn test_unrepresentable_duration_never_expires() {
        let start = Instant::now();
        let mut slot = FeedbackSlot::new();

        slot.show(COPY_CONFIRMED, start, Duration::MAX);
        assert_eq!(slot.message(), Some(COPY_CONFIRMED));
        assert_eq!(slot.deadline(), None);
        assert!(!slot.expire(start + 3600 * 1000 * MS));
        assert_eq!(slot.message(), Some(COPY_CONFIRMED));

        // A later message with a normal duration takes over the slot.
        slot.show("second", start, FEEDBACK_DURATION);
        assert!(slot.expire(start + FEEDBACK_DURATION));
        assert_eq!(slot.message(), None);
    }

    #[test]
    fn test_expire_twice() {
        let start = Instant::now();
        let mut slot = FeedbackSlot::new();
        slot.show(COPY_CONFIRMED, start, FEEDBACK_DURATION);
        assert!(slot.expire(start + 2 * FEEDBACK_DURATION));
        assert!(!slot.expire(start + 3 * FEEDBACK_DURATION));
    }
}
