// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! `RenderSurface` backed by a Vello scene

use super::surface::{RenderSurface, Rgba};
use crate::theme;
use kurbo::{Affine, Line, Point, Rect, Stroke};
use masonry::vello::Scene;
use masonry::vello::peniko::{self, Brush};

/// Draws into the canvas widget's scene for the current frame
pub struct SceneSurface<'a> {
    scene: &'a mut Scene,
    brush: Brush,
    stroke: Stroke,
}

impl<'a> SceneSurface<'a> {
    pub fn new(scene: &'a mut Scene) -> Self {
        Self {
            scene,
            brush: Brush::Solid(theme::canvas::FOREGROUND.to_color()),
            stroke: Stroke::new(theme::size::LINE_WIDTH),
        }
    }
}

impl RenderSurface for SceneSurface<'_> {
    fn set_color(&mut self, color: Rgba) {
        self.brush = Brush::Solid(color.to_color());
    }

    fn draw_point(&mut self, at: Point) {
        let pixel = Rect::new(at.x, at.y, at.x + 1.0, at.y + 1.0);
        self.fill_rect(pixel);
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.scene.stroke(
            &self.stroke,
            Affine::IDENTITY,
            &self.brush,
            None,
            &Line::new(from, to),
        );
    }

    fn draw_rect(&mut self, rect: Rect) {
        self.scene
            .stroke(&self.stroke, Affine::IDENTITY, &self.brush, None, &rect);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.scene.fill(
            peniko::Fill::NonZero,
            Affine::IDENTITY,
            &self.brush,
            None,
            &rect,
        );
    }
}
