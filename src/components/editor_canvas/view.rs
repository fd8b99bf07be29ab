// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Xilem View wrapper for SplineCanvas

use super::{EditorUpdate, SplineCanvas};
use crate::editing::{HostRequest, SplineEditor};
use std::marker::PhantomData;
use std::sync::Arc;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// Create a canvas view for `editor`
///
/// The widget keeps its own copy of the editor. It takes a new one from
/// the app only when `generation` changes, so published snapshots
/// flowing back through the app never clobber an in-progress drag.
///
/// The callback receives each published editor and any request the
/// editor made of the app (save, load, quit).
pub fn editor_view<State, F>(
    editor: Arc<SplineEditor>,
    generation: u64,
    on_update: F,
) -> EditorView<State, F>
where
    F: Fn(&mut State, SplineEditor, Option<HostRequest>),
{
    EditorView {
        editor,
        generation,
        on_update,
        phantom: PhantomData,
    }
}

/// The Xilem View for SplineCanvas
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct EditorView<State, F> {
    editor: Arc<SplineEditor>,
    generation: u64,
    on_update: F,
    phantom: PhantomData<fn() -> State>,
}

impl<State, F> ViewMarker for EditorView<State, F> {}

impl<State: 'static, F: Fn(&mut State, SplineEditor, Option<HostRequest>) + 'static>
    View<State, (), ViewCtx> for EditorView<State, F>
{
    type Element = Pod<SplineCanvas>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let widget = SplineCanvas::new(self.editor.clone());
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        if self.generation != prev.generation {
            tracing::debug!(
                "[EditorView::rebuild] editor replaced (generation {} -> {})",
                prev.generation,
                self.generation
            );
            let mut widget = element.downcast::<SplineCanvas>();
            widget.widget.replace_editor(&self.editor);
            widget.ctx.request_render();
        }
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<()> {
        match message.take_message::<EditorUpdate>() {
            Some(update) => {
                (self.on_update)(app_state, update.editor, update.request);
                MessageResult::Action(())
            }
            None => MessageResult::Stale,
        }
    }
}
