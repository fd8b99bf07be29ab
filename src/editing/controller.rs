// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! The editor controller: owns the control-point list and turns input
//! events into edits.
//!
//! Every mutation sets a level-triggered repaint flag. The host drains it
//! with `take_repaint` once per dispatched event, so several edits in one
//! handler cost a single redraw. Structural edits also bump
//! `edit_revision`, which the host uses to decide when to publish the
//! scene.

use super::event::{HostRequest, InputEvent, Key};
use super::hit_test::{ActiveState, HitTracker};
use super::mouse::{Modifiers, MouseButton};
use crate::model::{ControlPoint, CursorShape, Hittable, PointId, PointIdAllocator};
use crate::spline::{MIN_POINTS, SplineCurve};
use kurbo::Point;

/// Display toggles; they only change what gets painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayModes {
    pub show_points: bool,
    pub show_guides: bool,
}

impl Default for DisplayModes {
    fn default() -> Self {
        Self {
            show_points: true,
            show_guides: false,
        }
    }
}

/// Interactive spline editor state
#[derive(Debug, Clone)]
pub struct SplineEditor {
    points: Vec<ControlPoint>,
    ids: PointIdAllocator,
    tracker: HitTracker,
    modes: DisplayModes,
    needs_repaint: bool,
    edit_revision: u64,
}

impl SplineEditor {
    pub fn new() -> Self {
        Self::with_modes(DisplayModes::default())
    }

    pub fn with_modes(modes: DisplayModes) -> Self {
        Self {
            points: Vec::new(),
            ids: PointIdAllocator::new(),
            tracker: HitTracker::new(),
            modes,
            needs_repaint: true,
            edit_revision: 0,
        }
    }

    // ===== Queries =====

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Control point centers in traversal order
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.points.iter().map(|p| p.center())
    }

    pub fn modes(&self) -> DisplayModes {
        self.modes
    }

    pub fn active(&self) -> Option<PointId> {
        self.tracker.active()
    }

    pub fn active_state(&self) -> ActiveState {
        self.tracker.state()
    }

    pub fn active_index(&self) -> Option<usize> {
        let id = self.active()?;
        self.index_of(id)
    }

    /// Cursor requested by the active point, arrow otherwise
    pub fn cursor(&self) -> CursorShape {
        self.active_index()
            .map(|i| self.points[i].cursor())
            .unwrap_or_default()
    }

    /// True when the list is long enough to draw a curve
    pub fn has_curve(&self) -> bool {
        self.points.len() >= MIN_POINTS
    }

    /// Sample the curve from the current list
    pub fn curve(&self) -> SplineCurve {
        let centers: Vec<Point> = self.positions().collect();
        SplineCurve::from_points(&centers)
    }

    pub fn edit_revision(&self) -> u64 {
        self.edit_revision
    }

    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Read and clear the repaint flag
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    pub fn request_repaint(&mut self) {
        self.needs_repaint = true;
    }

    // ===== Structural edits =====

    /// Append a new point at `(x, y)` and return its id
    pub fn append_point(&mut self, x: f64, y: f64) -> PointId {
        let point = self.make_point(Point::new(x, y));
        let id = point.id();
        self.points.push(point);
        tracing::debug!("Appended point {} at ({}, {})", id, x, y);
        self.mark_edited();
        id
    }

    /// Insert a point halfway between the active point and its
    /// predecessor. No-op without an active point, or when the active
    /// point is first in the list.
    pub fn insert_between_active(&mut self) -> Option<PointId> {
        let index = match self.active_index() {
            Some(i) if i > 0 => i,
            _ => {
                tracing::trace!("Insert ignored: no active point with a predecessor");
                return None;
            }
        };

        let midpoint = ControlPoint::midpoint(&self.points[index - 1], &self.points[index]);
        self.tracker.clear(&mut self.points);
        let point = self.make_point(midpoint);
        let id = point.id();
        self.points.insert(index, point);
        tracing::debug!("Inserted point {} at index {}", id, index);
        self.mark_edited();
        Some(id)
    }

    /// Remove the active point. No-op without one.
    pub fn remove_active(&mut self) -> Option<ControlPoint> {
        let Some(index) = self.active_index() else {
            tracing::trace!("Delete ignored: no active point");
            return None;
        };

        // Drop the active reference before the point goes away
        self.tracker.clear(&mut self.points);
        let removed = self.points.remove(index);
        tracing::debug!("Removed point {}", removed.id());
        self.mark_edited();
        Some(removed)
    }

    /// Remove the most recently appended point
    pub fn pop_last(&mut self) -> Option<ControlPoint> {
        let last = self.points.last()?.id();
        if self.active() == Some(last) {
            self.tracker.clear(&mut self.points);
        }
        let removed = self.points.pop();
        self.mark_edited();
        removed
    }

    /// Remove every point
    pub fn clear(&mut self) {
        self.tracker.clear(&mut self.points);
        self.points.clear();
        tracing::debug!("Cleared all points");
        self.mark_edited();
    }

    /// Replace the whole list, e.g. after loading a scene. Ids keep
    /// counting up from where they were.
    pub fn replace_points<I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = Point>,
    {
        self.tracker.clear(&mut self.points);
        self.points.clear();
        for p in positions {
            let point = self.make_point(p);
            self.points.push(point);
        }
        self.mark_edited();
    }

    // ===== Display toggles =====

    pub fn toggle_control_point_visibility(&mut self) {
        self.modes.show_points = !self.modes.show_points;
        let visible = self.modes.show_points;
        for point in &mut self.points {
            point.visible = visible;
        }
        self.needs_repaint = true;
    }

    pub fn toggle_guide_lines(&mut self) {
        self.modes.show_guides = !self.modes.show_guides;
        self.needs_repaint = true;
    }

    // ===== Event dispatch =====

    /// Dispatch one input event to completion. Returns a request for the
    /// host when the event asks for something outside the editor.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<HostRequest> {
        match event {
            InputEvent::Quit => return Some(HostRequest::Quit),
            InputEvent::KeyDown { key, modifiers } => return self.key_down(key, *modifiers),
            InputEvent::MouseMove { x, y, buttons, .. } => {
                let pos = Point::new(*x, *y);
                if self
                    .tracker
                    .pointer_moved(&mut self.points, pos, buttons.primary())
                {
                    self.needs_repaint = true;
                }
            }
            InputEvent::MouseDown { x, y, button } => {
                if *button == MouseButton::Left
                    && self
                        .tracker
                        .pointer_pressed(&mut self.points, Point::new(*x, *y))
                {
                    self.needs_repaint = true;
                }
            }
            InputEvent::MouseUp {
                x,
                y,
                button,
                modifiers,
            } => {
                if *button != MouseButton::Left {
                    return None;
                }
                let was_dragging = self.tracker.is_dragging();
                if self
                    .tracker
                    .pointer_released(&mut self.points, Point::new(*x, *y))
                {
                    self.needs_repaint = true;
                }
                if was_dragging {
                    // A finished drag is an edit worth publishing
                    self.edit_revision += 1;
                }
                if modifiers.shift {
                    self.append_point(*x, *y);
                }
            }
        }
        None
    }

    fn key_down(&mut self, key: &Key, modifiers: Modifiers) -> Option<HostRequest> {
        if modifiers.command() {
            return match key.letter() {
                Some('s') => Some(HostRequest::Save),
                Some('o') => Some(HostRequest::Load),
                Some('q') => Some(HostRequest::Quit),
                _ => None,
            };
        }

        match key {
            Key::Escape => return Some(HostRequest::Quit),
            Key::Delete | Key::Backspace => {
                self.remove_active();
            }
            _ => match key.letter() {
                Some('p') => self.toggle_control_point_visibility(),
                Some('l') => self.toggle_guide_lines(),
                Some('e') => self.clear(),
                Some('x') => {
                    self.remove_active();
                }
                Some('a') => {
                    self.insert_between_active();
                }
                Some('z') => {
                    self.pop_last();
                }
                _ => {}
            },
        }
        // Every key press repaints, bound or not
        self.needs_repaint = true;
        None
    }

    // ===== Helpers =====

    fn make_point(&mut self, center: Point) -> ControlPoint {
        let mut point = ControlPoint::new(self.ids.next_id(), center);
        point.visible = self.modes.show_points;
        point
    }

    fn index_of(&self, id: PointId) -> Option<usize> {
        self.points.iter().position(|p| p.id() == id)
    }

    fn mark_edited(&mut self) {
        self.edit_revision += 1;
        self.needs_repaint = true;
    }
}

impl Default for SplineEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::MouseButtons;
    use crate::editing::hit_test::hit_test;

    fn editor_with(points: &[(f64, f64)]) -> SplineEditor {
        let mut editor = SplineEditor::new();
        for &(x, y) in points {
            editor.append_point(x, y);
        }
        editor
    }

    fn hover(editor: &mut SplineEditor, x: f64, y: f64) {
        editor.handle_event(&InputEvent::MouseMove {
            x,
            y,
            dx: 0.0,
            dy: 0.0,
            buttons: MouseButtons::NONE,
        });
    }

    fn key(editor: &mut SplineEditor, c: char) -> Option<HostRequest> {
        editor.handle_event(&InputEvent::KeyDown {
            key: Key::Character(c),
            modifiers: Modifiers::NONE,
        })
    }

    fn centers(editor: &SplineEditor) -> Vec<Point> {
        editor.positions().collect()
    }

    #[test]
    fn shift_release_appends_point() {
        let mut editor = SplineEditor::new();
        editor.handle_event(&InputEvent::MouseUp {
            x: 15.0,
            y: 25.0,
            button: MouseButton::Left,
            modifiers: Modifiers::SHIFT,
        });
        assert_eq!(centers(&editor), vec![Point::new(15.0, 25.0)]);

        // without shift nothing is added
        editor.handle_event(&InputEvent::MouseUp {
            x: 100.0,
            y: 100.0,
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        });
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut editor = editor_with(&[(10.0, 10.0), (20.0, 20.0)]);
        let last = editor.points()[1].id();
        editor.pop_last();
        let fresh = editor.append_point(30.0, 30.0);
        assert!(fresh > last);

        editor.clear();
        let after_clear = editor.append_point(0.0, 0.0);
        assert!(after_clear > fresh);
    }

    #[test]
    fn insert_between_active_adds_midpoint_before_it() {
        let mut editor = editor_with(&[(0.0, 0.0), (100.0, 40.0), (200.0, 0.0)]);
        let a = editor.points()[0].id();
        let b = editor.points()[1].id();
        let c = editor.points()[2].id();

        hover(&mut editor, 100.0, 40.0);
        assert_eq!(editor.active(), Some(b));

        let m = editor.insert_between_active().unwrap();
        let ids: Vec<PointId> = editor.points().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![a, m, b, c]);
        assert_eq!(editor.points()[1].center(), Point::new(50.0, 20.0));
        assert_eq!(editor.len(), 4);
        assert_eq!(editor.active(), None);
        assert!(editor.points().iter().all(|p| !p.is_hovered()));
    }

    #[test]
    fn insert_is_noop_on_first_point_or_without_active() {
        let mut editor = editor_with(&[(0.0, 0.0), (100.0, 0.0)]);
        assert_eq!(editor.insert_between_active(), None);

        hover(&mut editor, 0.0, 0.0);
        assert_eq!(editor.insert_between_active(), None);
        assert_eq!(editor.len(), 2);
    }

    #[test]
    fn delete_then_rehit_misses() {
        let mut editor = editor_with(&[(10.0, 10.0), (50.0, 50.0)]);
        hover(&mut editor, 50.0, 50.0);
        let removed = editor.remove_active().unwrap();
        assert_eq!(removed.center(), Point::new(50.0, 50.0));
        assert_eq!(editor.active(), None);
        assert_eq!(hit_test(editor.points(), Point::new(50.0, 50.0)), None);

        // nothing active any more, so deleting again does nothing
        assert!(editor.remove_active().is_none());
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn delete_reveals_point_underneath() {
        let mut editor = editor_with(&[(10.0, 10.0), (12.0, 10.0)]);
        let below = editor.points()[0].id();
        hover(&mut editor, 11.0, 10.0);
        editor.remove_active();
        assert_eq!(hit_test(editor.points(), Point::new(11.0, 10.0)), Some(below));
    }

    #[test]
    fn curve_appears_at_four_points_and_pop_reverts() {
        let mut editor = editor_with(&[(10.0, 10.0), (20.0, 10.0), (30.0, 20.0)]);
        assert!(!editor.has_curve());
        assert!(editor.curve().is_empty());

        editor.append_point(40.0, 10.0);
        assert!(editor.has_curve());
        assert_eq!(editor.curve().window_count(), 1);

        let popped = editor.pop_last().unwrap();
        assert_eq!(popped.center(), Point::new(40.0, 10.0));
        assert_eq!(editor.len(), 3);
        assert!(editor.curve().is_empty());
    }

    #[test]
    fn pop_on_empty_is_noop() {
        let mut editor = SplineEditor::new();
        editor.take_repaint();
        assert!(editor.pop_last().is_none());
        assert!(!editor.needs_repaint());
    }

    #[test]
    fn toggles_do_not_touch_the_list() {
        let mut editor = editor_with(&[(0.0, 0.0), (1.0, 1.0)]);
        let before = centers(&editor);

        key(&mut editor, 'p');
        assert!(!editor.modes().show_points);
        assert!(editor.points().iter().all(|p| !p.visible));

        key(&mut editor, 'L');
        assert!(editor.modes().show_guides);

        // new points follow the current visibility
        editor.append_point(5.0, 5.0);
        assert!(!editor.points()[2].visible);

        key(&mut editor, 'P');
        assert!(editor.points().iter().all(|p| p.visible));
        assert_eq!(&centers(&editor)[..2], &before[..]);
    }

    #[test]
    fn keys_drive_edits() {
        let mut editor = editor_with(&[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0)]);

        hover(&mut editor, 100.0, 0.0);
        key(&mut editor, 'a');
        assert_eq!(editor.len(), 4);

        hover(&mut editor, 200.0, 0.0);
        key(&mut editor, 'x');
        assert_eq!(editor.len(), 3);

        key(&mut editor, 'z');
        assert_eq!(editor.len(), 2);

        key(&mut editor, 'e');
        assert!(editor.is_empty());
    }

    #[test]
    fn command_keys_become_host_requests() {
        let mut editor = SplineEditor::new();
        let ctrl = |c| InputEvent::KeyDown {
            key: Key::Character(c),
            modifiers: Modifiers::CTRL,
        };
        assert_eq!(editor.handle_event(&ctrl('s')), Some(HostRequest::Save));
        assert_eq!(editor.handle_event(&ctrl('O')), Some(HostRequest::Load));
        assert_eq!(editor.handle_event(&InputEvent::Quit), Some(HostRequest::Quit));
        // ctrl+e is not a clear
        editor.append_point(1.0, 1.0);
        assert_eq!(editor.handle_event(&ctrl('e')), None);
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn drag_moves_point_and_publishes_on_release() {
        let mut editor = editor_with(&[(50.0, 50.0)]);
        hover(&mut editor, 50.0, 50.0);
        editor.handle_event(&InputEvent::MouseDown {
            x: 50.0,
            y: 50.0,
            button: MouseButton::Left,
        });
        editor.handle_event(&InputEvent::MouseMove {
            x: 80.0,
            y: 20.0,
            dx: 30.0,
            dy: -30.0,
            buttons: MouseButtons::NONE.with(MouseButton::Left),
        });
        assert!(matches!(editor.active_state(), ActiveState::Dragging(_)));
        assert_eq!(editor.points()[0].center(), Point::new(80.0, 20.0));

        let revision = editor.edit_revision();
        editor.handle_event(&InputEvent::MouseUp {
            x: 80.0,
            y: 20.0,
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        });
        assert!(matches!(editor.active_state(), ActiveState::Hovering(_)));
        assert_eq!(editor.edit_revision(), revision + 1);
    }

    #[test]
    fn repaint_flag_coalesces() {
        let mut editor = SplineEditor::new();
        editor.append_point(0.0, 0.0);
        editor.append_point(1.0, 1.0);
        editor.toggle_guide_lines();
        assert!(editor.take_repaint());
        assert!(!editor.take_repaint());
    }

    #[test]
    fn replace_points_keeps_ids_fresh() {
        let mut editor = editor_with(&[(0.0, 0.0)]);
        let old = editor.points()[0].id();
        editor.replace_points([Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        assert_eq!(editor.len(), 2);
        assert!(editor.points().iter().all(|p| p.id() > old));
    }

    #[test]
    fn cursor_follows_hover() {
        let mut editor = editor_with(&[(10.0, 10.0)]);
        assert_eq!(editor.cursor(), CursorShape::Arrow);
        hover(&mut editor, 10.0, 10.0);
        assert_eq!(editor.cursor(), CursorShape::Crosshair);
        hover(&mut editor, 90.0, 90.0);
        assert_eq!(editor.cursor(), CursorShape::Arrow);
    }
}
