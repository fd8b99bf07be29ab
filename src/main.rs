// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Spline Editor: an interactive B-spline editor built with Xilem

use anyhow::Context;
use xilem::EventLoop;

fn main() -> anyhow::Result<()> {
    spline_editor::run(EventLoop::with_user_event()).context("event loop failed")
}
