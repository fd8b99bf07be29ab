// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration read from a TOML file.
//!
//! The file is optional. It is looked up at the path named by
//! `SPLINE_EDITOR_CONFIG`, falling back to `spline-editor.toml` in the
//! working directory. Any field may be left out:
//!
//! ```toml
//! show_points = true
//! show_guides = false
//! window_width = 640.0
//! window_height = 480.0
//! scene_dir = "scenes"
//! ```

use crate::editing::DisplayModes;
use crate::settings;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "SPLINE_EDITOR_CONFIG";

/// Config file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "spline-editor.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// User-adjustable editor settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Draw control points at startup
    pub show_points: bool,
    /// Draw guide lines between control points at startup
    pub show_guides: bool,
    pub window_width: f64,
    pub window_height: f64,
    /// Directory the save/open dialogs start in
    pub scene_dir: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let modes = DisplayModes::default();
        Self {
            show_points: modes.show_points,
            show_guides: modes.show_guides,
            window_width: settings::window::WIDTH,
            window_height: settings::window::HEIGHT,
            scene_dir: None,
        }
    }
}

impl EditorConfig {
    pub fn display_modes(&self) -> DisplayModes {
        DisplayModes {
            show_points: self.show_points,
            show_guides: self.show_guides,
        }
    }

    /// Parse a config from TOML text
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load the config from the usual places, logging and falling back to
    /// defaults on any error
    pub fn load() -> Self {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::debug!("Using config {:?}", config);
                config
            }
            Err(e) => {
                tracing::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }
}
