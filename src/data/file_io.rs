// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Scene file operations for AppState (open, load, save)

use super::AppState;
use crate::model::{SceneError, load_scene, save_scene};
use chrono::Local;
use std::path::{Path, PathBuf};

const SCENE_FILTER_NAME: &str = "Spline Scene";
const SCENE_EXTENSIONS: &[&str] = &["txt"];
const DEFAULT_SCENE_NAME: &str = "scene.txt";

impl AppState {
    /// Open a file dialog and load the chosen scene
    pub fn open_scene_dialog(&mut self) {
        self.error_message = None;

        let mut dialog = rfd::FileDialog::new()
            .set_title("Open Scene")
            .add_filter(SCENE_FILTER_NAME, SCENE_EXTENSIONS);
        if let Some(dir) = self.dialog_directory() {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.pick_file() {
            self.load_scene_from(path);
            self.show_error_dialog("Open Scene");
        }
    }

    /// Open a save dialog and write the scene to the chosen file
    pub fn save_scene_dialog(&mut self) {
        self.error_message = None;

        let file_name = self
            .scene_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_SCENE_NAME.to_string());

        let mut dialog = rfd::FileDialog::new()
            .set_title("Save Scene")
            .add_filter(SCENE_FILTER_NAME, SCENE_EXTENSIONS)
            .set_file_name(file_name);
        if let Some(dir) = self.dialog_directory() {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.save_file() {
            self.save_scene_to(path);
            self.show_error_dialog("Save Scene");
        }
    }

    /// Load a scene file, replacing every control point.
    ///
    /// The current display modes carry over to the loaded scene.
    pub fn load_scene_from(&mut self, path: PathBuf) {
        match self.try_load(&path) {
            Ok(skipped) => {
                self.status_message = Some(if skipped == 0 {
                    format!("Loaded {}", path.display())
                } else {
                    format!("Loaded {} ({} bad rows skipped)", path.display(), skipped)
                });
                self.error_message = None;
                self.last_saved = None;
                self.scene_path = Some(path);
            }
            Err(e) => {
                let error = format!("Failed to load scene: {}", e);
                tracing::error!("{}", error);
                self.error_message = Some(error);
            }
        }
    }

    /// Write the current control points to a scene file
    pub fn save_scene_to(&mut self, path: PathBuf) {
        match save_scene(&path, self.editor.positions()) {
            Ok(()) => {
                let time_str = Local::now().format("%H:%M:%S").to_string();
                tracing::info!("Saved {} points at {}", self.editor.len(), time_str);
                self.last_saved = Some(time_str);
                self.status_message = Some(format!("Saved {}", path.display()));
                self.error_message = None;
                self.scene_path = Some(path);
            }
            Err(e) => {
                let error = format!("Failed to save scene: {}", e);
                tracing::error!("{}", error);
                self.error_message = Some(error);
            }
        }
    }

    /// Pop up the current error, if any, in a native message box
    fn show_error_dialog(&self, title: &str) {
        if let Some(error) = &self.error_message {
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title(title)
                .set_description(error.as_str())
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
        }
    }

    fn try_load(&mut self, path: &Path) -> Result<usize, SceneError> {
        let scene = load_scene(path)?;
        // Reuse the current editor so ids keep counting up across loads
        let mut editor = (*self.editor).clone();
        editor.replace_points(scene.points);
        self.replace_editor(editor);
        Ok(scene.skipped_rows)
    }

    /// Directory of the current scene, else the configured scene directory
    fn dialog_directory(&self) -> Option<PathBuf> {
        self.scene_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .or_else(|| self.config.scene_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::editing::SplineEditor;
    use crate::model::{Hittable, PointId};
    use kurbo::Point;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("spline-editor-{}-{}", std::process::id(), name))
    }

    #[test]
    fn save_then_load_restores_points() {
        let path = temp_path("app-roundtrip.txt");
        let mut state = AppState::default();
        let mut editor = SplineEditor::new();
        editor.append_point(10.0, 20.0);
        editor.append_point(30.5, 40.0);
        state.update_editor(editor);

        state.save_scene_to(path.clone());
        assert!(state.error_message.is_none());
        assert!(state.last_saved.is_some());

        let mut loaded = AppState::default();
        loaded.load_scene_from(path.clone());
        assert!(loaded.error_message.is_none());
        assert_eq!(loaded.editor_generation, 1);
        let points: Vec<Point> = loaded.editor.positions().collect();
        assert_eq!(points, vec![Point::new(10.0, 20.0), Point::new(30.5, 40.0)]);
        assert_eq!(loaded.scene_path.as_deref(), Some(path.as_path()));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn failed_load_keeps_current_points() {
        let mut state = AppState::default();
        let mut editor = SplineEditor::new();
        editor.append_point(1.0, 1.0);
        state.update_editor(editor);

        state.load_scene_from(temp_path("app-missing.txt"));
        assert!(state.error_message.is_some());
        assert_eq!(state.editor.len(), 1);
        assert_eq!(state.editor_generation, 0);
    }

    #[test]
    fn load_keeps_display_modes() {
        let path = temp_path("app-modes.txt");
        std::fs::write(&path, "1\n5 5\n").unwrap();

        let config = EditorConfig {
            show_guides: true,
            ..EditorConfig::default()
        };
        let mut state = AppState::new(config);
        state.load_scene_from(path.clone());
        assert!(state.editor.modes().show_guides);
        assert_eq!(state.editor.len(), 1);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn dialog_starts_next_to_current_scene() {
        let mut state = AppState::default();
        assert_eq!(state.dialog_directory(), None);

        state.config.scene_dir = Some(PathBuf::from("scenes"));
        assert_eq!(state.dialog_directory(), Some(PathBuf::from("scenes")));

        state.scene_path = Some(PathBuf::from("/tmp/work/a.txt"));
        assert_eq!(state.dialog_directory(), Some(PathBuf::from("/tmp/work")));
    }

    #[test]
    fn load_never_reuses_point_ids() {
        let path = temp_path("app-fresh-ids.txt");
        std::fs::write(&path, "2\n1 1\n2 2\n").unwrap();

        let mut state = AppState::default();
        let mut editor = SplineEditor::new();
        editor.append_point(10.0, 10.0);
        editor.append_point(20.0, 20.0);
        state.update_editor(editor);
        let before: Vec<PointId> = state.editor.points().iter().map(|p| p.id()).collect();

        state.load_scene_from(path.clone());
        let after: Vec<PointId> = state.editor.points().iter().map(|p| p.id()).collect();
        assert_eq!(after.len(), 2);
        let newest_before = before.iter().copied().max().unwrap();
        assert!(after.iter().all(|id| *id > newest_before));

        let _ = std::fs::remove_file(&path);
    }
}
