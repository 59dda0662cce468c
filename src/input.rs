//! Keyboard events the controller understands.
//!
//! Event sources (a terminal, a GUI toolkit, a test) translate their native
//! events into [`KeyPress`] values. [`Command::from_key`] recognises exactly
//! three of them; every other key is left to the presentation layer.
//!
//! # Example
//!
//! ```
//! use phone_formatter::input::{Command, Key, KeyPress, Modifiers};
//! use phone_formatter::{CopySource, Direction};
//!
//! assert_eq!(
//!     Command::from_key(KeyPress::plain(Key::Down)),
//!     Some(Command::Navigate(Direction::Next))
//! );
//! assert_eq!(
//!     Command::from_key(KeyPress::new(Key::Char('c'), Modifiers::CTRL)),
//!     Some(Command::Copy(CopySource::Selected))
//! );
//! assert_eq!(Command::from_key(KeyPress::plain(Key::Char('c'))), None);
//! ```

use crate::controller::{CopySource, Direction};

/// A key, reduced to what the controller cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Down arrow.
    Down,
    /// Up arrow.
    Up,
    /// A printable character.
    Char(char),
    /// Anything else.
    Other,
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// Control.
    pub ctrl: bool,
    /// Command on macOS, the Windows key elsewhere.
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
    };

    /// Control only.
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        meta: false,
    };

    /// Meta only.
    pub const META: Modifiers = Modifiers {
        ctrl: false,
        meta: true,
    };
}

/// A key together with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key.
    pub key: Key,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

impl KeyPress {
    /// Creates a key press.
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a key press without modifiers.
    pub const fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}

/// What a key press asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move the selection.
    Navigate(Direction),
    /// Copy a rendering to the clipboard.
    Copy(CopySource),
}

impl Command {
    /// Maps a key press to a command.
    ///
    /// Down and up arrows navigate (modifiers ignored). `c` with Ctrl or
    /// Meta copies the selection. Everything else returns `None`.
    pub fn from_key(press: KeyPress) -> Option<Self> {
        match press.key {
            Key::Down => Some(Self::Navigate(Direction::Next)),
            Key::Up => Some(Self::Navigate(Direction::Previous)),
            Key::Char('c') | Key::Char('C') if press.modifiers.ctrl || press.modifiers.meta => {
                Some(Self::Copy(CopySource::Selected))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows() {
        assert_eq!(
            Command::from_key(KeyPress::plain(Key::Down)),
            Some(Command::Navigate(Direction::Next))
        );
        assert_eq!(
            Command::from_key(KeyPress::plain(Key::Up)),
            Some(Command::Navigate(Direction::Previous))
        );
    }

    #[test]
    fn test_copy_chord() {
        for modifiers in [Modifiers::CTRL, Modifiers::META] {
            assert_eq!(
                Command::from_key(KeyPress::new(Key::Char('c'), modifiers)),
                Some(Command::Copy(CopySource::Selected))
            );
        }
    }

    #[test]
    fn test_ignored_keys() {
        assert_eq!(Command::from_key(KeyPress::plain(Key::Char('c'))), None);
        assert_eq!(
            Command::from_key(KeyPress::new(Key::Char('v'), Modifiers::CTRL)),
            None
        );
        assert_eq!(Command::from_key(KeyPress::plain(Key::Char('5'))), None);
        assert_eq!(Command::from_key(KeyPress::plain(Key::Other)), None);
    }
}
