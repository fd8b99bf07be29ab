// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! The primitive drawing contract the editor paints through.
//!
//! Everything the editor draws goes through `RenderSurface`: a current
//! color plus points, lines, rectangle outlines and filled rectangles in
//! surface pixel coordinates. The canvas widget backs it with a Vello
//! scene; `RecordingSurface` keeps a list of commands instead, which is
//! what tests inspect.
//!
//! The trait and `Rgba` are the full contract a backend implements, not
//! just what the built-in painter uses today: `draw_point` and
//! `Rgba::clamped` are part of it so that callers can paint single pixels
//! and build colors from unchecked integer input without knowing the
//! backend.

use kurbo::{Point, Rect};
use masonry::vello::peniko::Color;

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from arbitrary integer channels, clamping each one
    /// to `0..=255`.
    pub fn clamped(r: i32, g: i32, b: i32, a: i32) -> Self {
        let clamp = |v: i32| v.clamp(0, 255) as u8;
        Self {
            r: clamp(r),
            g: clamp(g),
            b: clamp(b),
            a: clamp(a),
        }
    }

    pub const fn to_color(self) -> Color {
        Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

/// Primitive drawing operations, in surface pixel coordinates.
///
/// Implementations keep a current color that every draw call uses.
/// Callers set the color before each draw; nobody restores it.
pub trait RenderSurface {
    fn set_color(&mut self, color: Rgba);
    fn draw_point(&mut self, at: Point);
    fn draw_line(&mut self, from: Point, to: Point);
    fn draw_rect(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Point { at: Point, color: Rgba },
    Line { from: Point, to: Point, color: Rgba },
    Rect { rect: Rect, color: Rgba },
    FillRect { rect: Rect, color: Rgba },
}

impl DrawCommand {
    pub fn color(&self) -> Rgba {
        match self {
            DrawCommand::Point { color, .. }
            | DrawCommand::Line { color, .. }
            | DrawCommand::Rect { color, .. }
            | DrawCommand::FillRect { color, .. } => *color,
        }
    }
}

/// A surface that records every call instead of rasterizing it
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    color: Rgba,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            color: Rgba::rgb(0, 0, 0),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Lines drawn in the given color
    pub fn lines_in(&self, color: Rgba) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.commands.iter().filter_map(move |cmd| match cmd {
            DrawCommand::Line { from, to, color: c } if *c == color => Some((*from, *to)),
            _ => None,
        })
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for RecordingSurface {
    fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn draw_point(&mut self, at: Point) {
        self.commands.push(DrawCommand::Point {
            at,
            color: self.color,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color: self.color,
        });
    }

    fn draw_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Rect {
            rect,
            color: self.color,
        });
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: self.color,
        });
    }
}
