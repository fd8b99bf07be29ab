// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Paint helper methods for SplineCanvas

use super::SplineCanvas;
use crate::render::{SceneSurface, paint_editor};
use crate::theme;
use masonry::kurbo::Size;
use masonry::util::fill_color;
use masonry::vello::Scene;

impl SplineCanvas {
    pub(super) fn paint_background(&self, scene: &mut Scene, canvas_size: Size) {
        let bg_rect = canvas_size.to_rect();
        fill_color(scene, &bg_rect, theme::canvas::BACKGROUND.to_color());
    }

    pub(super) fn paint_editor(&mut self, scene: &mut Scene) {
        let mut surface = SceneSurface::new(scene);
        paint_editor(&self.editor, &mut surface);
        self.editor.take_repaint();
    }
}
