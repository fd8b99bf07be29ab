// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Spline Editor: an interactive uniform cubic B-spline editor built with
//! Xilem
//!
//! Shift-click adds control points, dragging moves them, and the curve
//! is redrawn whenever at least four points exist. The editing core
//! (`model`, `spline`, `editing`, `render`) has no UI dependency and can
//! be driven directly with [`editing::InputEvent`]s.

use std::path::PathBuf;

use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use xilem::{EventLoopBuilder, WindowView, Xilem, window};

mod components;
pub mod config;
mod data;
pub mod editing;
pub mod model;
pub mod render;
mod settings;
pub mod spline;
mod theme;
mod views;

use config::EditorConfig;
use data::AppState;
use views::editor_tab;

/// Entry point for the Spline Editor application
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    // Filter out noisy wgpu/naga shader compilation logs
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spline_editor=info".parse().unwrap())
                .add_directive("wgpu=warn".parse().unwrap())
                .add_directive("naga=warn".parse().unwrap())
                .add_directive("wgpu_core=warn".parse().unwrap())
                .add_directive("wgpu_hal=warn".parse().unwrap()),
        )
        .init();

    let config = EditorConfig::load();
    let mut initial_state = AppState::new(config);

    // Check for command-line argument (scene path)
    handle_command_line_args(&mut initial_state);

    let app = Xilem::new(initial_state, app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// Load the scene file named on the command line, if any
fn handle_command_line_args(initial_state: &mut AppState) {
    let Some(arg) = std::env::args_os().nth(1) else {
        return;
    };
    let scene_path = PathBuf::from(arg);

    if scene_path.exists() {
        tracing::info!("Loading scene from: {}", scene_path.display());
        initial_state.load_scene_from(scene_path);
    } else {
        tracing::error!("Path does not exist: {}", scene_path.display());
        tracing::error!("Usage: spline-editor [path/to/scene.txt]");
    }
}

/// Build the single-window UI
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let content = editor_tab(state);

    let window_size = LogicalSize::new(state.config.window_width, state.config.window_height);
    let window_view = window(state.main_window_id, settings::window::TITLE, content);
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}
