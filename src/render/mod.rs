// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawing: the primitive surface contract and the frame painter

pub mod painter;
pub mod scene_surface;
pub mod surface;

pub use painter::paint_editor;
pub use scene_surface::SceneSurface;
pub use surface::{DrawCommand, RecordingSurface, RenderSurface, Rgba};
