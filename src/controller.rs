//! The interaction state machine.
//!
//! A [`Controller`] owns everything an interactive session needs: the raw
//! input, the [`FormatSet`] derived from it, the selection cursor, and the
//! copy confirmation. Every event maps to one method; after calling it the
//! presentation layer re-renders from the accessors.
//!
//! # States
//!
//! - **Empty**: the input is not a valid number. Navigation and copying do
//!   nothing.
//! - **Populated**: four renderings are listed and one is selected.
//!
//! Only [`Controller::on_input_changed`] moves between the two. The format
//! set and the cursor are always replaced together, so they never disagree.
//!
//! # Copying
//!
//! Clipboard writes may complete later than the key press that asked for
//! them, so copying is split in two:
//!
//! 1. [`Controller::on_copy_requested`] resolves the text and hands back a
//!    [`CopyRequest`].
//! 2. [`Controller::on_copy_finished`] is called with the outcome of the
//!    write. Success shows the confirmation for one second; failure is
//!    silently dropped.
//!
//! [`Controller::copy`] does both steps against a synchronous
//! [`Clipboard`].
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use phone_formatter::clipboard::MemoryClipboard;
//! use phone_formatter::{Controller, CopySource, Direction};
//!
//! let mut controller = Controller::new();
//! let mut clipboard = MemoryClipboard::new();
//! let now = Instant::now();
//!
//! controller.on_input_changed("5852826396");
//! assert_eq!(controller.cursor(), Some(0));
//!
//! controller.on_navigate(Direction::Next);
//! controller.on_navigate(Direction::Next);
//! assert!(controller.copy(&mut clipboard, CopySource::Selected, now));
//! assert_eq!(clipboard.last(), Some("+15852826396"));
//! assert_eq!(controller.feedback(), Some("Number has copied!"));
//!
//! controller.tick(now + Duration::from_millis(1000));
//! assert_eq!(controller.feedback(), None);
//! ```

use std::time::{Duration, Instant};

use crate::clipboard::Clipboard;
use crate::error::ClipboardError;
use crate::feedback::{FeedbackSlot, COPY_CONFIRMED, FEEDBACK_DURATION};
use crate::format::{format_with, FormatSet};
use crate::input::{Command, KeyPress};
use crate::parser::{LibPhoneNumber, PhoneParser};
use crate::FormatVariant;

/// Direction of a selection move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the end of the list (down arrow).
    Next,
    /// Towards the start of the list (up arrow).
    Previous,
}

/// Which rendering a copy refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopySource {
    /// The currently selected rendering (keyboard shortcut).
    Selected,
    /// A specific row (pointer click). Also selects that row.
    Row(usize),
}

/// A clipboard write the controller wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    /// Text to place on the clipboard.
    pub text: String,
    /// The rendering being copied.
    pub variant: FormatVariant,
    /// Its row in the list.
    pub index: usize,
}

/// Coarse state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No renderings to show.
    Empty,
    /// Renderings are listed and `cursor` is selected.
    Populated {
        /// Selected row.
        cursor: usize,
    },
}

/// Tunables for a [`Controller`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// How long the copy confirmation stays visible.
    pub feedback_duration: Duration,
    /// The copy confirmation text.
    pub feedback_text: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            feedback_duration: FEEDBACK_DURATION,
            feedback_text: COPY_CONFIRMED.to_string(),
        }
    }
}

/// State of one interactive formatting session.
#[derive(Debug, Clone)]
pub struct Controller<P = LibPhoneNumber> {
    parser: P,
    config: ControllerConfig,
    input: String,
    formats: FormatSet,
    cursor: Option<usize>,
    feedback: FeedbackSlot,
}

impl Controller<LibPhoneNumber> {
    /// Creates a controller with empty input and the default parser.
    pub fn new() -> Self {
        Self::with_parser(LibPhoneNumber)
    }
}

impl Default for Controller<LibPhoneNumber> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PhoneParser> Controller<P> {
    /// Creates a controller with empty input and a custom parser.
    pub fn with_parser(parser: P) -> Self {
        Self::with_config(parser, ControllerConfig::default())
    }

    /// Creates a controller with a custom parser and configuration.
    pub fn with_config(parser: P, config: ControllerConfig) -> Self {
        Self {
            parser,
            config,
            input: String::new(),
            formats: FormatSet::empty(),
            cursor: None,
            feedback: FeedbackSlot::new(),
        }
    }

    /// The raw input as last typed.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Renderings of the current input.
    #[inline]
    pub fn formats(&self) -> &FormatSet {
        &self.formats
    }

    /// Selected row, `None` when there is nothing to select.
    #[inline]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The selected variant and its rendering.
    pub fn selected(&self) -> Option<(FormatVariant, &str)> {
        self.formats.entry_at(self.cursor?)
    }

    /// The copy confirmation, while it is visible.
    #[inline]
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.message()
    }

    /// When the visible copy confirmation will disappear.
    ///
    /// `None` if nothing is showing, or if the configured duration is too
    /// long to schedule, in which case the message stays until replaced.
    #[inline]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.feedback.deadline()
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Empty or populated, with the cursor.
    pub fn state(&self) -> ControllerState {
        match self.cursor {
            Some(cursor) if !self.formats.is_empty() => ControllerState::Populated { cursor },
            _ => ControllerState::Empty,
        }
    }

    /// Replaces the input and re-derives the renderings.
    ///
    /// A populated result always selects the first row, wherever the cursor
    /// was before. The copy confirmation is left alone.
    pub fn on_input_changed(&mut self, raw: impl Into<String>) {
        self.input = raw.into();
        let formats = format_with(&self.parser, &self.input);
        let cursor = if formats.is_empty() { None } else { Some(0) };

        self.formats = formats;
        self.cursor = cursor;

        tracing::debug!(populated = cursor.is_some(), "input changed");
    }

    /// Moves the selection one row, stopping at either end.
    pub fn on_navigate(&mut self, direction: Direction) {
        let Some(cursor) = self.cursor else {
            return;
        };
        let last = match self.formats.len().checked_sub(1) {
            Some(last) => last,
            None => return,
        };

        let moved = match direction {
            Direction::Next => (cursor + 1).min(last),
            Direction::Previous => cursor.saturating_sub(1),
        };

        if moved != cursor {
            tracing::debug!(from = cursor, to = moved, "selection moved");
        }
        self.cursor = Some(moved);
    }

    /// Resolves the text to copy.
    ///
    /// Returns `None` if there is nothing to copy. A [`CopySource::Row`]
    /// that exists becomes the selection even before the write happens.
    pub fn on_copy_requested(&mut self, source: CopySource) -> Option<CopyRequest> {
        let index = match source {
            CopySource::Selected => self.cursor?,
            CopySource::Row(index) => index,
        };
        let (variant, text) = self.formats.entry_at(index)?;
        let request = CopyRequest {
            text: text.to_string(),
            variant,
            index,
        };

        if let CopySource::Row(_) = source {
            self.cursor = Some(index);
        }

        tracing::debug!(%variant, index, "copy requested");
        Some(request)
    }

    /// Records the outcome of a clipboard write.
    ///
    /// Success shows the confirmation until `now` plus the configured
    /// duration, replacing any confirmation still on screen. Failure leaves
    /// the confirmation untouched.
    pub fn on_copy_finished(&mut self, result: Result<(), ClipboardError>, now: Instant) {
        match result {
            Ok(()) => {
                self.feedback
                    .show(self.config.feedback_text.clone(), now, self.config.feedback_duration);
            }
            Err(e) => {
                tracing::debug!(error = %e, "clipboard write failed");
            }
        }
    }

    /// Requests a copy and performs it against `clipboard` immediately.
    ///
    /// Returns true if the confirmation is now showing.
    pub fn copy<C: Clipboard + ?Sized>(
        &mut self,
        clipboard: &mut C,
        source: CopySource,
        now: Instant,
    ) -> bool {
        let Some(request) = self.on_copy_requested(source) else {
            return false;
        };
        let result = clipboard.write_text(&request.text);
        let succeeded = result.is_ok();
        self.on_copy_finished(result, now);
        succeeded
    }

    /// Runs a keyboard command.
    pub fn apply<C: Clipboard + ?Sized>(&mut self, command: Command, clipboard: &mut C, now: Instant) {
        match command {
            Command::Navigate(direction) => self.on_navigate(direction),
            Command::Copy(source) => {
                self.copy(clipboard, source, now);
            }
        }
    }

    /// Handles a key press.
    ///
    /// Returns false if the key is not one the controller reacts to, leaving
    /// it to the caller (for example to edit the input).
    pub fn handle_key<C: Clipboard + ?Sized>(
        &mut self,
        press: KeyPress,
        clipboard: &mut C,
        now: Instant,
    ) -> bool {
        match Command::from_key(press) {
            Some(command) => {
                self.apply(command, clipboard, now);
                true
            }
            None => false,
        }
    }

    /// Fires the confirmation timer if its deadline has been reached.
    ///
    /// Returns true if the confirmation was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.feedback.expire(now)
    }
}
