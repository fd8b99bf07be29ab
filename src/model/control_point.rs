// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Control points and the capabilities the editor needs from them.
//!
//! A control point is a logical center plus a fixed-size square hit box.
//! The geometry lives in `HitBox`, a plain value type; painting is a
//! separate capability. The tracker only talks to points through the
//! `Hittable` and `Draggable` traits.

use super::PointId;
use crate::render::RenderSurface;
use crate::settings;
use crate::theme;
use kurbo::{Point, Rect, Vec2};

/// Cursor shape a point asks for while the pointer is over it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Arrow,
    Crosshair,
}

/// Anything the tracker can hit-test
pub trait Hittable {
    fn id(&self) -> PointId;

    /// Logical center
    fn center(&self) -> Point;

    /// True iff `(x, y)` lies inside the hit box, boundary included
    fn hit(&self, x: f64, y: f64) -> bool;

    /// Top-left corner of the hit box
    fn origin(&self) -> Point;

    /// Mark or unmark this entity as the active object
    fn set_hovered(&mut self, hovered: bool);
}

/// Anything the tracker can drag
pub trait Draggable {
    /// Relocate so the logical center sits at `(center_x, center_y)`
    fn move_to(&mut self, center_x: f64, center_y: f64);
}

/// Anything that can paint itself onto a surface
pub trait Paintable {
    fn paint(&self, surface: &mut dyn RenderSurface);
}

/// Axis-aligned square centered on a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    center: Point,
    half_width: f64,
}

impl HitBox {
    pub fn new(center: Point, half_width: f64) -> Self {
        Self { center, half_width }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center_size(
            self.center,
            (2.0 * self.half_width, 2.0 * self.half_width),
        )
    }

    /// Inclusive on all four edges, unlike `Rect::contains`
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let r = self.rect();
        x >= r.x0 && x <= r.x1 && y >= r.y0 && y <= r.y1
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }
}

/// A user-placed anchor for the spline
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoint {
    id: PointId,
    hit_box: HitBox,
    /// Invisible points are not painted but still hit-test and still
    /// shape the curve
    pub visible: bool,
    hovered: bool,
    cursor: CursorShape,
}

impl ControlPoint {
    pub fn new(id: PointId, center: Point) -> Self {
        Self {
            id,
            hit_box: HitBox::new(center, settings::point::HIT_HALF_WIDTH),
            visible: true,
            hovered: false,
            cursor: CursorShape::Arrow,
        }
    }

    pub fn hit_box(&self) -> &HitBox {
        &self.hit_box
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    /// Midpoint between two points' centers
    pub fn midpoint(a: &ControlPoint, b: &ControlPoint) -> Point {
        a.center().midpoint(b.center())
    }

    /// Offset from the hit box's top-left corner to `pointer`
    pub fn grab_offset(&self, pointer: Point) -> Vec2 {
        pointer - self.origin()
    }
}

impl Hittable for ControlPoint {
    fn id(&self) -> PointId {
        self.id
    }

    fn center(&self) -> Point {
        self.hit_box.center()
    }

    fn hit(&self, x: f64, y: f64) -> bool {
        self.hit_box.contains(x, y)
    }

    fn origin(&self) -> Point {
        self.hit_box.rect().origin()
    }

    fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        self.cursor = if hovered {
            CursorShape::Crosshair
        } else {
            CursorShape::Arrow
        };
    }
}

impl Draggable for ControlPoint {
    fn move_to(&mut self, center_x: f64, center_y: f64) {
        self.hit_box.set_center(Point::new(center_x, center_y));
    }
}

impl Paintable for ControlPoint {
    fn paint(&self, surface: &mut dyn RenderSurface) {
        if !self.visible {
            return;
        }

        let center = self.center();
        surface.set_color(theme::point::BODY);
        surface.fill_rect(self.hit_box.rect());

        let marker = settings::point::MARKER_HALF_WIDTH;
        surface.set_color(theme::point::MARKER);
        surface.fill_rect(Rect::from_center_size(center, (2.0 * marker, 2.0 * marker)));

        if self.hovered {
            let ring = settings::point::RING_SCALE * self.hit_box.half_width();
            surface.set_color(theme::point::RING);
            surface.draw_rect(Rect::from_center_size(center, (2.0 * ring, 2.0 * ring)));
        }
    }
}
