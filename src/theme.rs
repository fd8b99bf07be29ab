// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! Canvas colors are `Rgba` values because they go through the
//! `RenderSurface` color state. UI chrome uses peniko `Color` directly.

use crate::render::Rgba;
use masonry::vello::peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors for UI, a dark to light gradient by default
// ============================================================================
const BASE_B: Color = Color::from_rgb8(0x20, 0x20, 0x20);
const BASE_G: Color = Color::from_rgb8(0x70, 0x70, 0x70);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);

// ============================================================================
// CANVAS
// ============================================================================
const CANVAS_BACKGROUND: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
const CANVAS_FOREGROUND: Rgba = Rgba::rgb(0x00, 0x00, 0x00);

// ============================================================================
// CURVE AND GUIDE LINES
// ============================================================================
// The curve and the control polygon must be told apart at a glance
const CURVE: Rgba = Rgba::rgb(0x8b, 0x00, 0x00); // Dark red
const GUIDE_LINE: Rgba = Rgba::rgb(0x4c, 0x4c, 0xff); // Light blue

// ============================================================================
// CONTROL POINTS
// ============================================================================
const POINT_BODY: Rgba = Rgba::rgb(0x00, 0x00, 0x8b); // Dark blue
const POINT_MARKER: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
const POINT_RING: Rgba = POINT_BODY;

// ============================================================================
// STATUS BAR
// ============================================================================
const STATUS_TEXT: Color = BASE_I;
const STATUS_ERROR_TEXT: Color = Color::from_rgb8(0xff, 0x66, 0x66);
const STATUS_BACKGROUND: Color = BASE_B;
const STATUS_SECONDARY_TEXT: Color = BASE_G;

// ============================================================================
// SIZES
// ============================================================================
const LINE_WIDTH: f64 = 1.0;
const STATUS_TEXT_SIZE: f32 = 13.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Colors for the drawing canvas
pub mod canvas {
    use super::Rgba;
    pub const BACKGROUND: Rgba = super::CANVAS_BACKGROUND;
    pub const FOREGROUND: Rgba = super::CANVAS_FOREGROUND;
}

/// Colors for the spline and its control polygon
pub mod spline {
    use super::Rgba;
    pub const CURVE: Rgba = super::CURVE;
    pub const GUIDE_LINE: Rgba = super::GUIDE_LINE;
}

/// Colors for control points
pub mod point {
    use super::Rgba;
    pub const BODY: Rgba = super::POINT_BODY;
    pub const MARKER: Rgba = super::POINT_MARKER;
    pub const RING: Rgba = super::POINT_RING;
}

/// Colors for the status bar below the canvas
pub mod status {
    use super::Color;
    pub const TEXT: Color = super::STATUS_TEXT;
    pub const SECONDARY_TEXT: Color = super::STATUS_SECONDARY_TEXT;
    pub const ERROR_TEXT: Color = super::STATUS_ERROR_TEXT;
    pub const BACKGROUND: Color = super::STATUS_BACKGROUND;
}

/// Stroke widths and text sizes
pub mod size {
    pub const LINE_WIDTH: f64 = super::LINE_WIDTH;
    pub const STATUS_TEXT_SIZE: f32 = super::STATUS_TEXT_SIZE;
}
