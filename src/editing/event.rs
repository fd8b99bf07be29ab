// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Input events as the editor sees them.
//!
//! The canvas widget translates windowing events into `InputEvent`s and
//! hands them to the controller one at a time, in arrival order.

use super::mouse::{Modifiers, MouseButton, MouseButtons};

/// Symbolic key code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// A printable character, as typed (case preserved)
    Character(char),
    Delete,
    Backspace,
    Escape,
    /// Anything the editor has no binding for
    Other,
}

impl Key {
    /// Lower-cased character, if this is a character key
    pub fn letter(&self) -> Option<char> {
        match self {
            Key::Character(c) => Some(c.to_ascii_lowercase()),
            _ => None,
        }
    }
}

/// One input event
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown {
        key: Key,
        modifiers: Modifiers,
    },
    MouseMove {
        x: f64,
        y: f64,
        dx: f64,
        dy: f64,
        buttons: MouseButtons,
    },
    MouseDown {
        x: f64,
        y: f64,
        button: MouseButton,
    },
    MouseUp {
        x: f64,
        y: f64,
        button: MouseButton,
        modifiers: Modifiers,
    },
}

/// Something the editor wants its host to do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRequest {
    Save,
    Load,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(Key::Character('P').letter(), Some('p'));
        assert_eq!(Key::Character('x').letter(), Some('x'));
        assert_eq!(Key::Delete.letter(), None);
    }
}
