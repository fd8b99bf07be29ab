// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod controller;
pub mod event;
pub mod mouse;

pub use controller::{DisplayModes, SplineEditor};
pub use event::{HostRequest, InputEvent, Key};
pub use hit_test::{ActiveState, HitTracker, hit_test};
pub use mouse::{Modifiers, MouseButton, MouseButtons};
