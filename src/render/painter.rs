// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Painting a whole editor frame onto a `RenderSurface`

use super::surface::RenderSurface;
use crate::editing::SplineEditor;
use crate::model::Paintable;
use crate::theme;

/// Paint guide lines, the curve, then the control points on top
pub fn paint_editor(editor: &SplineEditor, surface: &mut dyn RenderSurface) {
    if editor.modes().show_guides {
        draw_guide_lines(editor, surface);
    }

    if editor.has_curve() {
        draw_curve(editor, surface);
    }

    for point in editor.points() {
        point.paint(surface);
    }
}

/// Straight segments between consecutive control points
fn draw_guide_lines(editor: &SplineEditor, surface: &mut dyn RenderSurface) {
    let centers: Vec<_> = editor.positions().collect();
    if centers.len() < 2 {
        return;
    }
    surface.set_color(theme::spline::GUIDE_LINE);
    for pair in centers.windows(2) {
        surface.draw_line(pair[0], pair[1]);
    }
}

fn draw_curve(editor: &SplineEditor, surface: &mut dyn RenderSurface) {
    let curve = editor.curve();
    surface.set_color(theme::spline::CURVE);
    for (from, to) in curve.segments() {
        surface.draw_line(from, to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};

    fn frame(editor: &SplineEditor) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        paint_editor(editor, &mut surface);
        surface
    }

    fn curve_lines(surface: &RecordingSurface) -> usize {
        surface.lines_in(theme::spline::CURVE).count()
    }

    #[test]
    fn curve_and_guides_use_different_colors() {
        assert_ne!(theme::spline::CURVE, theme::spline::GUIDE_LINE);
    }

    #[test]
    fn no_curve_until_fourth_point() {
        let mut editor = SplineEditor::new();
        for &(x, y) in &[(10.0, 10.0), (20.0, 10.0), (30.0, 20.0)] {
            editor.append_point(x, y);
        }
        assert_eq!(curve_lines(&frame(&editor)), 0);

        editor.append_point(40.0, 10.0);
        assert_eq!(curve_lines(&frame(&editor)), 20);

        editor.pop_last();
        assert_eq!(curve_lines(&frame(&editor)), 0);
    }

    #[test]
    fn guide_lines_follow_toggle() {
        let mut editor = SplineEditor::new();
        editor.append_point(0.0, 0.0);
        editor.append_point(10.0, 0.0);
        editor.append_point(10.0, 10.0);
        assert_eq!(frame(&editor).lines_in(theme::spline::GUIDE_LINE).count(), 0);

        editor.toggle_guide_lines();
        assert_eq!(frame(&editor).lines_in(theme::spline::GUIDE_LINE).count(), 2);
    }

    #[test]
    fn hidden_points_are_not_drawn() {
        let mut editor = SplineEditor::new();
        editor.append_point(0.0, 0.0);
        let filled = |s: &RecordingSurface| {
            s.commands()
                .iter()
                .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
                .count()
        };
        assert_eq!(filled(&frame(&editor)), 2);

        editor.toggle_control_point_visibility();
        assert_eq!(filled(&frame(&editor)), 0);
    }
}
