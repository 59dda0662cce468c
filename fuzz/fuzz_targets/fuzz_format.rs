//! Fuzz target for phone number formatting.
//!
//! Tests that formatting never panics on arbitrary input and that every
//! result is either empty or complete.

#![no_main]

use libfuzzer_sys::fuzz_target;
use phone_formatter::format::{self, group_with_dots, strip_formatting};
use phone_formatter::FormatVariant;

fuzz_target!(|data: &str| {
    // These should never panic
    let formats = format::format(data);
    let _ = strip_formatting(data);
    let _ = group_with_dots(data);

    // All or nothing
    assert!(formats.len() == 0 || formats.len() == FormatVariant::COUNT);
    for (_, value) in formats.iter() {
        assert!(!value.is_empty(), "populated sets never hold empty renderings");
    }

    // Deterministic
    assert_eq!(formats, format::format(data), "formatting should be deterministic");

    // Grouping keeps the digits it was given
    if let Some(grouped) = group_with_dots(data) {
        assert_eq!(strip_formatting(&grouped), data);
    }
});
