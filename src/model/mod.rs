// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Core data model: control points, their ids, and scene files

pub mod control_point;
pub mod entity_id;
pub mod scene_file;

pub use control_point::{ControlPoint, CursorShape, Draggable, HitBox, Hittable, Paintable};
pub use entity_id::{PointId, PointIdAllocator};
pub use scene_file::{LoadedScene, SceneError, load_scene, save_scene};
