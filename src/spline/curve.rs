// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Sampling the whole control polygon into a drawable polyline

use super::basis::evaluate_segment;
use crate::settings;
use kurbo::{BezPath, Point};

/// Minimum number of control points needed for any curve
pub const MIN_POINTS: usize = 4;

/// A sampled curve: one polyline per four-point window.
///
/// Window `w` is evaluated from control points `w..w + 4`, which is the
/// `[i-1, i, i+1, i+2]` window for `i = w + 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplineCurve {
    windows: Vec<Vec<Point>>,
}

impl SplineCurve {
    /// Sample every window of `points`. Fewer than four points give an
    /// empty curve.
    pub fn from_points(points: &[Point]) -> Self {
        Self::with_samples(points, settings::spline::SAMPLES_PER_WINDOW)
    }

    /// Sample with `samples` segments per window (`samples + 1` points,
    /// both ends included)
    pub fn with_samples(points: &[Point], samples: usize) -> Self {
        let samples = samples.max(1);
        let windows = points
            .windows(MIN_POINTS)
            .map(|w| {
                (0..=samples)
                    .map(|k| {
                        // k / samples rather than repeated += step, so t = 1
                        // is hit exactly
                        let t = k as f64 / samples as f64;
                        evaluate_segment(w[0], w[1], w[2], w[3], t)
                    })
                    .collect()
            })
            .collect();
        Self { windows }
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Samples for window `w`
    pub fn window(&self, w: usize) -> Option<&[Point]> {
        self.windows.get(w).map(Vec::as_slice)
    }

    /// All samples in traversal order. Adjacent windows share their joint,
    /// so the joint appears twice.
    pub fn samples(&self) -> impl Iterator<Item = Point> + '_ {
        self.windows.iter().flatten().copied()
    }

    /// Samples along the whole curve with each shared joint kept once
    pub fn path_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.windows
            .iter()
            .enumerate()
            .flat_map(|(w, window)| window.iter().skip(usize::from(w > 0)))
            .copied()
    }

    /// Line segments to draw, chaining across window boundaries. Each
    /// window contributes exactly its own segments.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let mut prev: Option<Point> = None;
        self.path_points().filter_map(move |p| {
            let seg = prev.map(|q| (q, p));
            prev = Some(p);
            seg
        })
    }

    /// The curve as a single open path
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut samples = self.path_points();
        if let Some(first) = samples.next() {
            path.move_to(first);
            for p in samples {
                path.line_to(p);
            }
        }
        path
    }
}
