// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components for the spline editor

pub mod editor_canvas;

pub use editor_canvas::editor_view;
