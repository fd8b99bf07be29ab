// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Plain-text scene files.
//!
//! The format is a point count on the first line followed by one line per
//! control point with whitespace-separated `x y` fields:
//!
//! ```text
//! 3
//! 10 10
//! 20 10
//! 30 20
//! ```
//!
//! Rows may carry extra numeric fields (color channels written by other
//! tools); they are accepted and ignored. Each row is loaded all-or-nothing:
//! a malformed row is skipped and counted, it never aborts the load.

use kurbo::Point;
use std::fmt::Write as _;
use std::fs::File;
use std::io::Read as _;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading or writing a scene file
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("could not open scene file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read scene file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write scene file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of parsing a scene file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedScene {
    pub points: Vec<Point>,
    /// Rows that could not be parsed and were dropped
    pub skipped_rows: usize,
}

/// Parse scene text. Never fails; bad rows are skipped.
pub fn parse_scene(text: &str) -> LoadedScene {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty()).peekable();

    // A leading single integer is the row count. Without one, every line
    // is read as a row.
    let expected = match lines.peek().map(|l| l.parse::<usize>()) {
        Some(Ok(count)) => {
            lines.next();
            Some(count)
        }
        _ => {
            tracing::warn!("Scene file has no point count, reading all rows");
            None
        }
    };

    let mut scene = LoadedScene::default();
    for line in lines {
        if expected.is_some_and(|n| scene.points.len() + scene.skipped_rows >= n) {
            break;
        }
        match parse_row(line) {
            Some(point) => scene.points.push(point),
            None => {
                tracing::warn!("Skipping malformed scene row: {:?}", line);
                scene.skipped_rows += 1;
            }
        }
    }

    if let Some(n) = expected
        && scene.points.len() + scene.skipped_rows < n
    {
        tracing::warn!(
            "Scene file declares {} points but only {} rows were present",
            n,
            scene.points.len() + scene.skipped_rows
        );
    }

    scene
}

fn parse_row(line: &str) -> Option<Point> {
    let fields: Vec<f64> = line
        .split_whitespace()
        .map(str::parse::<f64>)
        .collect::<Result<_, _>>()
        .ok()?;

    match fields.as_slice() {
        [x, y, ..] if x.is_finite() && y.is_finite() => Some(Point::new(*x, *y)),
        _ => None,
    }
}

/// Render points in scene file format
pub fn format_scene<I>(points: I) -> String
where
    I: ExactSizeIterator<Item = Point>,
{
    let mut out = String::new();
    let _ = writeln!(out, "{}", points.len());
    for p in points {
        let _ = writeln!(out, "{} {}", p.x, p.y);
    }
    out
}

/// Read and parse a scene file
pub fn load_scene(path: &Path) -> Result<LoadedScene, SceneError> {
    let mut file = File::open(path).map_err(|source| SceneError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|source| SceneError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let scene = parse_scene(&text);
    tracing::info!(
        "Loaded {} points from {} ({} rows skipped)",
        scene.points.len(),
        path.display(),
        scene.skipped_rows
    );
    Ok(scene)
}

/// Write points to a scene file, replacing any existing file
pub fn save_scene<I>(path: &Path, points: I) -> Result<(), SceneError>
where
    I: ExactSizeIterator<Item = Point>,
{
    let count = points.len();
    std::fs::write(path, format_scene(points)).map_err(|source| SceneError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Saved {} points to {}", count, path.display());
    Ok(())
}
