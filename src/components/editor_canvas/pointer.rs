// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event handlers for SplineCanvas

use super::SplineCanvas;
use crate::editing::{InputEvent, Modifiers, MouseButton};
use kurbo::Point;
use masonry::core::{EventCtx, PointerButton, PointerState};

/// Map a pointer button onto the editor's buttons. Extra buttons are
/// ignored.
pub(super) fn mouse_button(button: PointerButton) -> Option<MouseButton> {
    match button {
        PointerButton::Primary => Some(MouseButton::Left),
        PointerButton::Secondary => Some(MouseButton::Right),
        PointerButton::Auxiliary => Some(MouseButton::Middle),
        _ => None,
    }
}

fn modifiers(state: &PointerState) -> Modifiers {
    Modifiers {
        shift: state.modifiers.shift(),
        ctrl: state.modifiers.ctrl(),
        alt: state.modifiers.alt(),
        meta: state.modifiers.meta(),
    }
}

impl SplineCanvas {
    pub(super) fn handle_pointer_down(
        &mut self,
        ctx: &mut EventCtx<'_>,
        button: MouseButton,
        state: &PointerState,
    ) {
        if button == MouseButton::Left {
            ctx.capture_pointer();
        }

        let local_pos = ctx.local_position(state.position);
        self.last_position = Some(local_pos);
        self.buttons.insert(button);

        self.dispatch(
            ctx,
            InputEvent::MouseDown {
                x: local_pos.x,
                y: local_pos.y,
                button,
            },
        );
    }

    pub(super) fn handle_pointer_move(&mut self, ctx: &mut EventCtx<'_>, current: &PointerState) {
        let local_pos = ctx.local_position(current.position);
        let delta = local_pos - self.last_position.unwrap_or(local_pos);
        self.last_position = Some(local_pos);

        self.dispatch(
            ctx,
            InputEvent::MouseMove {
                x: local_pos.x,
                y: local_pos.y,
                dx: delta.x,
                dy: delta.y,
                buttons: self.buttons,
            },
        );
    }

    pub(super) fn handle_pointer_up(
        &mut self,
        ctx: &mut EventCtx<'_>,
        button: MouseButton,
        state: &PointerState,
    ) {
        let local_pos = ctx.local_position(state.position);
        self.last_position = Some(local_pos);
        self.buttons.remove(button);

        if button == MouseButton::Left {
            ctx.release_pointer();
        }

        self.dispatch(
            ctx,
            InputEvent::MouseUp {
                x: local_pos.x,
                y: local_pos.y,
                button,
                modifiers: modifiers(state),
            },
        );
    }

    /// The pointer went away mid-gesture: finish any drag where the
    /// pointer was last seen, without appending a point
    pub(super) fn handle_pointer_cancel(&mut self, ctx: &mut EventCtx<'_>) {
        if !self.buttons.primary() {
            return;
        }
        self.buttons.remove(MouseButton::Left);
        let pos = self.last_position.unwrap_or(Point::ZERO);
        tracing::debug!("Pointer cancelled at {:?}", pos);

        ctx.release_pointer();
        self.dispatch(
            ctx,
            InputEvent::MouseUp {
                x: pos.x,
                y: pos.y,
                button: MouseButton::Left,
                modifiers: Modifiers::NONE,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_is_left() {
        assert_eq!(mouse_button(PointerButton::Primary), Some(MouseButton::Left));
        assert_eq!(mouse_button(PointerButton::Secondary), Some(MouseButton::Right));
        assert_eq!(mouse_button(PointerButton::Auxiliary), Some(MouseButton::Middle));
    }
}
