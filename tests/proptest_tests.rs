//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use std::time::{Duration, Instant};

use phone_formatter::clipboard::MemoryClipboard;
use phone_formatter::format::{group_with_dots, strip_formatting};
use phone_formatter::parser::{LibPhoneNumber, PhoneParser, PhoneRenderings, Region};
use phone_formatter::{format, Controller, CopySource, Direction, FormatVariant};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a random digit string of a given length.
fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generates a ten-digit US-looking number: area code and exchange start with 2-9.
fn nanp_number() -> impl Strategy<Value = String> {
    (
        prop::char::range('2', '9'),
        digit_string(2),
        prop::char::range('2', '9'),
        digit_string(6),
    )
        .prop_map(|(a, area, e, rest)| format!("{}{}{}{}", a, area, e, rest))
}

/// Mixes punctuation commonly typed in phone numbers into a digit string.
fn with_punctuation(digits: String) -> impl Strategy<Value = String> {
    let len = digits.len();
    proptest::collection::vec(
        prop_oneof![Just(""), Just(" "), Just("-"), Just(".")],
        len,
    )
    .prop_map(move |seps| {
        let mut result = String::new();
        for (c, sep) in digits.chars().zip(seps) {
            result.push_str(sep);
            result.push(c);
        }
        result
    })
}

#[derive(Debug, Clone, Copy)]
enum Event {
    Next,
    Previous,
    CopySelected,
    Click(usize),
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::Next),
        Just(Event::Previous),
        Just(Event::CopySelected),
        (0usize..6).prop_map(Event::Click),
    ]
}

// =============================================================================
// FORMATTER PROPERTIES
// =============================================================================

proptest! {
    /// Property: formatting is deterministic.
    #[test]
    fn format_is_deterministic(input in "[0-9a-zA-Z ()+.#*-]{0,30}") {
        prop_assert_eq!(format(&input), format(&input));
    }

    /// Property: a set is either empty or holds all four variants, each non-empty.
    #[test]
    fn format_set_is_all_or_nothing(input in "[0-9 ()+.a-z-]{0,20}") {
        let formats = format(&input);
        if !formats.is_empty() {
            let variants: Vec<_> = formats.iter().map(|(v, _)| v).collect();
            prop_assert_eq!(variants, FormatVariant::ALL.to_vec());
            for value in formats.values() {
                prop_assert!(!value.is_empty());
            }
        } else {
            prop_assert_eq!(formats.len(), 0);
        }
    }

    /// Property: the set is non-empty exactly when the parser reports a valid number.
    #[test]
    fn format_follows_parser_validity(input in "[0-9 ()+-]{0,16}") {
        let valid = LibPhoneNumber
            .parse(&input, Region::Us)
            .map(|n| n.is_valid())
            .unwrap_or(false);
        prop_assert_eq!(!format(&input).is_empty(), valid);
    }

    /// Property: punctuation never changes the result for the same digits.
    #[test]
    fn punctuation_is_ignored(
        (digits, punctuated) in nanp_number().prop_flat_map(|d| (Just(d.clone()), with_punctuation(d)))
    ) {
        prop_assert_eq!(format(&punctuated), format(&digits));
    }

    /// Property: dotted rendering of a ten-digit national number is DDD.DDD.DDDD.
    #[test]
    fn dotted_rendering_regroups_national_digits(digits in nanp_number()) {
        let formats = format(&digits);
        if let Some(national) = formats.get(FormatVariant::National) {
            let national_digits = strip_formatting(national);
            if national_digits.len() == 10 {
                let dotted = formats.get(FormatVariant::InternationalWithDots).unwrap();
                prop_assert_eq!(dotted.len(), 12);
                prop_assert_eq!(&dotted[3..4], ".");
                prop_assert_eq!(&dotted[7..8], ".");
                prop_assert_eq!(strip_formatting(dotted), national_digits);
            }
        }
    }

    /// Property: grouping only accepts ten digits and never loses one.
    #[test]
    fn group_with_dots_preserves_digits(digits in digit_string(10)) {
        let grouped = group_with_dots(&digits).unwrap();
        prop_assert_eq!(strip_formatting(&grouped), digits);
        prop_assert_eq!(grouped.matches('.').count(), 2);
    }

    #[test]
    fn group_with_dots_rejects_other_lengths(len in (0usize..20).prop_filter("not ten", |l| *l != 10)) {
        let digits = "7".repeat(len);
        prop_assert_eq!(group_with_dots(&digits), None);
    }
}

// =============================================================================
// CONTROLLER PROPERTIES
// =============================================================================

proptest! {
    /// Property: any navigation sequence keeps the cursor within 0..=3.
    #[test]
    fn navigation_stays_in_bounds(moves in proptest::collection::vec(any::<bool>(), 0..40)) {
        let mut controller = Controller::new();
        controller.on_input_changed("5852826396");

        let mut expected: usize = 0;
        for next in moves {
            if next {
                controller.on_navigate(Direction::Next);
                expected = (expected + 1).min(3);
            } else {
                controller.on_navigate(Direction::Previous);
                expected = expected.saturating_sub(1);
            }
            prop_assert_eq!(controller.cursor(), Some(expected));
        }
    }

    /// Property: a non-empty edit always selects the first row.
    #[test]
    fn edit_resets_cursor(presses in 0usize..10) {
        let mut controller = Controller::new();
        controller.on_input_changed("5852826396");
        for _ in 0..presses {
            controller.on_navigate(Direction::Next);
        }
        controller.on_input_changed("650-253-0000");
        prop_assert_eq!(controller.cursor(), Some(0));
    }

    /// Property: random event streams keep the cursor valid and copy what is selected.
    #[test]
    fn events_keep_state_consistent(events in proptest::collection::vec(event_strategy(), 0..30)) {
        let mut controller = Controller::new();
        let mut clipboard = MemoryClipboard::new();
        let now = Instant::now();
        controller.on_input_changed("5852826396");

        for event in events {
            let before = controller.cursor();
            match event {
                Event::Next => controller.on_navigate(Direction::Next),
                Event::Previous => controller.on_navigate(Direction::Previous),
                Event::CopySelected => {
                    prop_assert!(controller.copy(&mut clipboard, CopySource::Selected, now));
                    prop_assert_eq!(clipboard.last(), controller.selected().map(|(_, v)| v));
                }
                Event::Click(row) => {
                    let copied = controller.copy(&mut clipboard, CopySource::Row(row), now);
                    if row < 4 {
                        prop_assert!(copied);
                        prop_assert_eq!(controller.cursor(), Some(row));
                    } else {
                        prop_assert!(!copied);
                        prop_assert_eq!(controller.cursor(), before);
                    }
                }
            }
            let cursor = controller.cursor().unwrap();
            prop_assert!(cursor <= 3);
        }
    }

    /// Property: the confirmation clears exactly one second after the latest copy.
    #[test]
    fn feedback_clears_after_latest_copy(offsets in proptest::collection::vec(0u64..3000, 1..8)) {
        let mut controller = Controller::new();
        let mut clipboard = MemoryClipboard::new();
        let start = Instant::now();
        controller.on_input_changed("5852826396");

        let mut latest = start;
        let mut elapsed = 0;
        for offset in offsets {
            elapsed += offset;
            let at = start + Duration::from_millis(elapsed);
            controller.tick(at);
            controller.copy(&mut clipboard, CopySource::Selected, at);
            latest = at;
        }

        let deadline = latest + Duration::from_millis(1000);
        prop_assert!(!controller.tick(deadline - Duration::from_millis(1)));
        prop_assert!(controller.feedback().is_some());
        prop_assert!(controller.tick(deadline));
        prop_assert!(controller.feedback().is_none());
    }
}
