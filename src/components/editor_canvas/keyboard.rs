// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Keyboard event handlers for SplineCanvas

use super::SplineCanvas;
use crate::editing::{InputEvent, Key, Modifiers};
use masonry::core::EventCtx;
use masonry::core::keyboard::{self as kb, KeyState, KeyboardEvent, NamedKey};

/// Translate a windowing key into the editor's key codes
pub(super) fn editor_key(key: &kb::Key) -> Key {
    match key {
        kb::Key::Character(c) => {
            let mut chars = c.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Key::Character(ch),
                _ => Key::Other,
            }
        }
        kb::Key::Named(NamedKey::Delete) => Key::Delete,
        kb::Key::Named(NamedKey::Backspace) => Key::Backspace,
        kb::Key::Named(NamedKey::Escape) => Key::Escape,
        _ => Key::Other,
    }
}

impl SplineCanvas {
    pub(super) fn handle_key_event(&mut self, ctx: &mut EventCtx<'_>, key_event: &KeyboardEvent) {
        // Only key presses drive the editor
        if key_event.state != KeyState::Down {
            return;
        }

        let key = editor_key(&key_event.key);
        let modifiers = Modifiers {
            shift: key_event.modifiers.shift(),
            ctrl: key_event.modifiers.ctrl(),
            alt: key_event.modifiers.alt(),
            meta: key_event.modifiers.meta(),
        };
        tracing::debug!("[SplineCanvas] key {:?} {:?}", key, modifiers);

        self.dispatch(ctx, InputEvent::KeyDown { key, modifiers });
        ctx.set_handled();
    }
}
