//! # phone_formatter
//!
//! US phone number reformatter: type a number, get it back in every common
//! notation, pick one with the keyboard or pointer and copy it.
//!
//! ## Features
//!
//! - Four renderings per number: international, national, E.164 and dotted
//! - Pure, deterministic formatter; invalid input is simply an empty result
//! - Keyboard/pointer selection state machine with clamped navigation
//! - Copy confirmation on a single-slot one-second timer
//! - Multiple interfaces: library, CLI (one-shot and interactive), REST API
//!
//! ## Quick Start
//!
//! ```rust
//! use phone_formatter::{format, FormatVariant};
//!
//! let formats = format("5852826396");
//! assert_eq!(formats.get(FormatVariant::E164), Some("+15852826396"));
//! assert_eq!(formats.get(FormatVariant::InternationalWithDots), Some("585.282.6396"));
//!
//! // Not a US number: nothing to show, no error.
//! assert!(format("abc").is_empty());
//! ```
//!
//! ## Interactive Sessions
//!
//! ```rust
//! use std::time::Instant;
//! use phone_formatter::clipboard::MemoryClipboard;
//! use phone_formatter::{Controller, CopySource, Direction};
//!
//! let mut controller = Controller::new();
//! let mut clipboard = MemoryClipboard::new();
//!
//! controller.on_input_changed("585-282-6396");
//! controller.on_navigate(Direction::Next);
//!
//! // Clicking row 3 selects it and copies it.
//! controller.copy(&mut clipboard, CopySource::Row(3), Instant::now());
//! assert_eq!(controller.cursor(), Some(3));
//! assert_eq!(clipboard.last(), Some("585.282.6396"));
//! ```
//!
//! ## Renderings
//!
//! | Key | Example |
//! |-----|---------|
//! | `international` | `+1 585-282-6396` |
//! | `national` | `(585) 282-6396` |
//! | `e164` | `+15852826396` |
//! | `internationalWithDots` | `585.282.6396` |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` for `FormatSet` |
//! | `clipboard` | System clipboard via `arboard` |
//! | `cli` | Command-line tool with interactive mode |
//! | `server` | REST API with Swagger UI |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod clipboard;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod format;
pub mod input;
pub mod parser;
pub mod variant;

// Re-export main types at crate root
pub use controller::{
    Controller, ControllerConfig, ControllerState, CopyRequest, CopySource, Direction,
};
pub use error::{ClipboardError, ParseRejection};
pub use format::{format, format_with, FormatSet};
pub use variant::FormatVariant;
