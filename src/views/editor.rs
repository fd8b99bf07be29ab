// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor view - the spline canvas with a status bar underneath

use masonry::properties::types::AsUnit;
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, FlexExt, flex_col, flex_row, label};

use crate::components::editor_view;
use crate::data::AppState;
use crate::theme;

/// Canvas filling the window, status bar along the bottom
pub fn editor_tab(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    flex_col((
        editor_view(
            state.editor.clone(),
            state.editor_generation,
            |state: &mut AppState, editor, request| {
                state.update_editor(editor);
                if let Some(request) = request {
                    state.handle_request(request);
                }
            },
        )
        .flex(1.0),
        status_bar(state),
    ))
    .gap(0.px())
    .cross_axis_alignment(CrossAxisAlignment::Fill)
}

fn status_bar(state: &AppState) -> impl WidgetView<AppState> + use<> {
    // Errors take precedence over informational messages
    let (message, message_color) = match (&state.error_message, &state.status_message) {
        (Some(error), _) => (error.clone(), theme::status::ERROR_TEXT),
        (None, Some(status)) => (status.clone(), theme::status::SECONDARY_TEXT),
        (None, None) => (String::new(), theme::status::SECONDARY_TEXT),
    };

    flex_row((
        label(state.status_line())
            .text_size(theme::size::STATUS_TEXT_SIZE)
            .color(theme::status::TEXT)
            .flex(1.0),
        label(message)
            .text_size(theme::size::STATUS_TEXT_SIZE)
            .color(message_color),
    ))
    .gap(12.px())
    .padding(6.0)
    .background_color(theme::status::BACKGROUND)
}
