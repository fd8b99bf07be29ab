// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Spline canvas widget - the drawing surface the editor lives on

mod keyboard;
mod paint;
mod pointer;
mod view;

pub use view::editor_view;

use crate::editing::{DisplayModes, HostRequest, InputEvent, MouseButtons, SplineEditor};
use crate::model::CursorShape;
use kurbo::Point;
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, PaintCtx, PointerButtonEvent,
    PointerEvent, PointerUpdate, PropertiesMut, PropertiesRef, QueryCtx, RegisterCtx, TextEvent,
    Update, UpdateCtx, Widget,
};
use masonry::kurbo::Size;
use masonry::vello::Scene;
use std::sync::Arc;
use winit::window::CursorIcon;

/// The canvas widget. Owns the live editor; the app state only sees
/// snapshots published through [`EditorUpdate`].
pub struct SplineCanvas {
    /// The editor (mutable copy for editing)
    pub editor: SplineEditor,

    /// Buttons currently held, tracked from down/up events
    pub(super) buttons: MouseButtons,

    /// Last pointer position, for move deltas
    pub(super) last_position: Option<Point>,

    /// What was last published, so unchanged state is not re-sent
    published_revision: u64,
    published_modes: DisplayModes,
}

impl SplineCanvas {
    pub fn new(editor: Arc<SplineEditor>) -> Self {
        let editor = (*editor).clone();
        Self {
            published_revision: editor.edit_revision(),
            published_modes: editor.modes(),
            editor,
            buttons: MouseButtons::NONE,
            last_position: None,
        }
    }

    /// Adopt an editor replaced by the app (e.g. after loading a scene)
    pub(super) fn replace_editor(&mut self, editor: &SplineEditor) {
        self.editor = editor.clone();
        self.published_revision = self.editor.edit_revision();
        self.published_modes = self.editor.modes();
        self.editor.request_repaint();
    }

    /// Run one event through the editor, then repaint and publish as
    /// needed
    pub(super) fn dispatch(&mut self, ctx: &mut EventCtx<'_>, event: InputEvent) {
        let request = self.editor.handle_event(&event);

        if self.editor.take_repaint() {
            ctx.request_render();
        }

        let changed = self.editor.edit_revision() != self.published_revision
            || self.editor.modes() != self.published_modes;
        if changed || request.is_some() {
            self.emit_update(ctx, request);
        }
    }

    fn emit_update(&mut self, ctx: &mut EventCtx<'_>, request: Option<HostRequest>) {
        self.published_revision = self.editor.edit_revision();
        self.published_modes = self.editor.modes();
        ctx.submit_action::<EditorUpdate>(EditorUpdate {
            editor: self.editor.clone(),
            request,
        });
    }
}

/// Action emitted by the canvas when the editor changed or needs
/// something from the app
#[derive(Debug, Clone)]
pub struct EditorUpdate {
    pub editor: SplineEditor,
    pub request: Option<HostRequest>,
}

impl Widget for SplineCanvas {
    type Action = EditorUpdate;

    fn accepts_focus(&self) -> bool {
        // Allow this widget to receive keyboard events
        true
    }

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {
        // Leaf widget - no children
    }

    fn update(
        &mut self,
        _ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &Update,
    ) {
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        // Use all available space
        bc.max()
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        let canvas_size = ctx.size();
        self.paint_background(scene, canvas_size);
        self.paint_editor(scene);
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        // Always request focus on any pointer event so keyboard shortcuts work
        ctx.request_focus();

        match event {
            PointerEvent::Down(PointerButtonEvent {
                button: Some(button),
                state,
                ..
            }) => {
                if let Some(button) = pointer::mouse_button(*button) {
                    self.handle_pointer_down(ctx, button, state);
                }
            }

            PointerEvent::Move(PointerUpdate { current, .. }) => {
                self.handle_pointer_move(ctx, current);
            }

            PointerEvent::Up(PointerButtonEvent {
                button: Some(button),
                state,
                ..
            }) => {
                if let Some(button) = pointer::mouse_button(*button) {
                    self.handle_pointer_up(ctx, button, state);
                }
            }

            PointerEvent::Cancel(_) => {
                self.handle_pointer_cancel(ctx);
            }

            _ => {}
        }
    }

    fn on_text_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &TextEvent,
    ) {
        if let TextEvent::Keyboard(key_event) = event {
            self.handle_key_event(ctx, key_event);
        }
    }

    fn get_cursor(&self, _ctx: &QueryCtx<'_>, _pos: Point) -> CursorIcon {
        match self.editor.cursor() {
            CursorShape::Arrow => CursorIcon::Default,
            CursorShape::Crosshair => CursorIcon::Crosshair,
        }
    }

    fn accessibility_role(&self) -> Role {
        Role::Canvas
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_label(format!("Spline editor: {} control points", self.editor.len()));
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}

