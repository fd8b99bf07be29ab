// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Central application state (`AppState`) that drives the Xilem reactive UI.
//!
//! `AppState` holds the published snapshot of the editor, the runtime
//! config, the current scene file and the status messages shown under the
//! canvas. The canvas widget owns the live editor and publishes it back
//! after edits; `AppState` only replaces the widget's editor outright when
//! a scene is loaded. File operations live in `file_io`.

mod file_io;

use crate::config::EditorConfig;
use crate::editing::{HostRequest, SplineEditor};
use std::path::PathBuf;
use std::sync::Arc;
use xilem::WindowId;

/// Main application state
pub struct AppState {
    /// Latest editor snapshot published by the canvas
    pub editor: Arc<SplineEditor>,

    /// Bumped whenever the app replaces the editor wholesale (scene load).
    /// The canvas only adopts `editor` when this changes.
    pub editor_generation: u64,

    /// Runtime configuration
    pub config: EditorConfig,

    /// File the scene was last loaded from or saved to
    pub scene_path: Option<PathBuf>,

    /// Informational message for the status bar
    pub status_message: Option<String>,

    /// Error message to display, if any
    pub error_message: Option<String>,

    /// When the scene was last saved (formatted time string for UI)
    pub last_saved: Option<String>,

    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,
}

impl AppState {
    pub fn new(config: EditorConfig) -> Self {
        let editor = SplineEditor::with_modes(config.display_modes());
        Self {
            editor: Arc::new(editor),
            editor_generation: 0,
            config,
            scene_path: None,
            status_message: None,
            error_message: None,
            last_saved: None,
            running: true,
            main_window_id: WindowId::next(),
        }
    }

    /// Store an editor snapshot published by the canvas
    pub fn update_editor(&mut self, editor: SplineEditor) {
        self.editor = Arc::new(editor);
    }

    /// Replace the canvas's editor with `editor`
    pub(crate) fn replace_editor(&mut self, editor: SplineEditor) {
        self.editor = Arc::new(editor);
        self.editor_generation += 1;
    }

    /// Act on a request the editor could not handle itself
    pub fn handle_request(&mut self, request: HostRequest) {
        match request {
            HostRequest::Save => self.save_scene_dialog(),
            HostRequest::Load => self.open_scene_dialog(),
            HostRequest::Quit => {
                tracing::info!("Quit requested");
                self.running = false;
            }
        }
    }

    /// One-line summary for the status bar
    pub fn status_line(&self) -> String {
        let editor = &self.editor;
        let modes = editor.modes();
        let mut line = format!(
            "{} point{}  |  points {}  |  guides {}",
            editor.len(),
            if editor.len() == 1 { "" } else { "s" },
            if modes.show_points { "on" } else { "off" },
            if modes.show_guides { "on" } else { "off" },
        );
        if let Some(path) = &self.scene_path {
            line.push_str(&format!("  |  {}", path.display()));
        }
        if let Some(saved) = &self.last_saved {
            line.push_str(&format!("  |  saved {}", saved));
        }
        line
    }
}

/// Implement the Xilem AppState trait
impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_uses_config_modes() {
        let config = EditorConfig {
            show_guides: true,
            ..EditorConfig::default()
        };
        let state = AppState::new(config);
        assert!(state.editor.modes().show_guides);
        assert!(state.running);
    }

    #[test]
    fn quit_request_stops_the_app() {
        let mut state = AppState::default();
        state.handle_request(HostRequest::Quit);
        assert!(!xilem::AppState::keep_running(&state));
    }

    #[test]
    fn update_does_not_bump_generation() {
        let mut state = AppState::default();
        let mut editor = SplineEditor::new();
        editor.append_point(1.0, 2.0);
        state.update_editor(editor.clone());
        assert_eq!(state.editor_generation, 0);
        assert_eq!(state.editor.len(), 1);

        state.replace_editor(editor);
        assert_eq!(state.editor_generation, 1);
    }

    #[test]
    fn status_line_counts_points() {
        let mut state = AppState::default();
        assert!(state.status_line().starts_with("0 points"));

        let mut editor = SplineEditor::new();
        editor.append_point(0.0, 0.0);
        state.update_editor(editor);
        assert!(state.status_line().starts_with("1 point "));
    }
}
