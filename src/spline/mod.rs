// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Uniform cubic B-spline evaluation

pub mod basis;
pub mod curve;

pub use basis::{BASIS_MATRIX, evaluate_segment};
pub use curve::{MIN_POINTS, SplineCurve};
