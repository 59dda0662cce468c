//! Fuzz target for the interaction controller.
//!
//! Drives a controller with arbitrary edits, key presses and clicks and
//! checks the cursor always points at an existing row.

#![no_main]

use std::time::{Duration, Instant};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use phone_formatter::clipboard::MemoryClipboard;
use phone_formatter::{Controller, CopySource, Direction};

#[derive(Debug, Arbitrary)]
enum Action {
    Type(String),
    Next,
    Previous,
    Copy,
    Click(u8),
    Wait(u16),
    BreakClipboard(bool),
}

fuzz_target!(|actions: Vec<Action>| {
    let mut controller = Controller::new();
    let mut clipboard = MemoryClipboard::new();
    let mut now = Instant::now();

    for action in actions {
        match action {
            Action::Type(text) => controller.on_input_changed(text),
            Action::Next => controller.on_navigate(Direction::Next),
            Action::Previous => controller.on_navigate(Direction::Previous),
            Action::Copy => {
                controller.copy(&mut clipboard, CopySource::Selected, now);
            }
            Action::Click(row) => {
                controller.copy(&mut clipboard, CopySource::Row(row as usize), now);
            }
            Action::Wait(ms) => {
                now += Duration::from_millis(u64::from(ms));
                controller.tick(now);
            }
            Action::BreakClipboard(failing) => clipboard.set_failing(failing),
        }

        match controller.cursor() {
            Some(cursor) => assert!(cursor < controller.formats().len()),
            None => assert!(controller.formats().is_empty()),
        }
        if let Some(deadline) = controller.next_deadline() {
            assert!(deadline <= now + Duration::from_millis(1000));
        }
    }
});
