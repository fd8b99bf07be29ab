// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Mouse buttons and keyboard modifiers, independent of the windowing
//! backend

/// Keyboard modifier state at the time of an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };

    /// Ctrl on Linux/Windows, Cmd on macOS
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A single mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Bitmask of held mouse buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseButtons(u8);

impl MouseButtons {
    pub const NONE: MouseButtons = MouseButtons(0);

    fn bit(button: MouseButton) -> u8 {
        match button {
            MouseButton::Left => 1,
            MouseButton::Right => 1 << 1,
            MouseButton::Middle => 1 << 2,
        }
    }

    pub fn with(mut self, button: MouseButton) -> Self {
        self.insert(button);
        self
    }

    pub fn insert(&mut self, button: MouseButton) {
        self.0 |= Self::bit(button);
    }

    pub fn remove(&mut self, button: MouseButton) {
        self.0 &= !Self::bit(button);
    }

    pub fn contains(&self, button: MouseButton) -> bool {
        self.0 & Self::bit(button) != 0
    }

    /// Primary (left) button held
    pub fn primary(&self) -> bool {
        self.contains(MouseButton::Left)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}
