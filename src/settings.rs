// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, sizes) belongs in `theme.rs`. Values a
//! user may want to change at runtime live in `config.rs`.

// ============================================================================
// CONTROL POINT SETTINGS
// ============================================================================
/// Half the side length of a control point's square hit box (pixels)
const POINT_HIT_HALF_WIDTH: f64 = 4.0;

/// Half the side length of the inner marker drawn on visible points
const POINT_MARKER_HALF_WIDTH: f64 = 1.0;

/// Hover ring size as a multiple of the hit-box half width
const POINT_RING_SCALE: f64 = 3.0;

// ============================================================================
// SPLINE SETTINGS
// ============================================================================
/// Line segments per four-point window (parameter step 1/20 = 0.05)
const SPLINE_SAMPLES_PER_WINDOW: usize = 20;

// ============================================================================
// WINDOW SETTINGS
// ============================================================================
const WINDOW_TITLE: &str = "Splines";
const WINDOW_WIDTH: f64 = 640.0;
const WINDOW_HEIGHT: f64 = 480.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Control point geometry
pub mod point {
    /// Hit-box half width (pixels)
    pub const HIT_HALF_WIDTH: f64 = super::POINT_HIT_HALF_WIDTH;

    /// Inner marker half width (pixels)
    pub const MARKER_HALF_WIDTH: f64 = super::POINT_MARKER_HALF_WIDTH;

    /// Hover ring scale relative to the hit box
    pub const RING_SCALE: f64 = super::POINT_RING_SCALE;
}

/// Spline sampling
pub mod spline {
    pub const SAMPLES_PER_WINDOW: usize = super::SPLINE_SAMPLES_PER_WINDOW;
}

/// Main window defaults
pub mod window {
    pub const TITLE: &str = super::WINDOW_TITLE;
    pub const WIDTH: f64 = super::WINDOW_WIDTH;
    pub const HEIGHT: f64 = super::WINDOW_HEIGHT;
}
