// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Uniform cubic B-spline evaluation through the basis matrix

use kurbo::Point;

/// Coefficients of the uniform cubic B-spline blending functions.
///
/// Row `r` multiplies the `r`-th entry of the power basis
/// `[t³, t², t, 1]`; column `c` yields the weight of control point `c`.
pub const BASIS_MATRIX: [[f64; 4]; 4] = [
    [-1.0, 3.0, -3.0, 1.0],
    [3.0, -6.0, 3.0, 0.0],
    [-3.0, 0.0, 3.0, 0.0],
    [1.0, 4.0, 1.0, 0.0],
];

/// Blending weights for the four control points at parameter `t`.
///
/// The weights always sum to 6; the caller scales by `1/6`.
pub fn blend_weights(t: f64) -> [f64; 4] {
    let power = [t * t * t, t * t, t, 1.0];
    let mut weights = [0.0; 4];
    for (col, w) in weights.iter_mut().enumerate() {
        *w = power
            .iter()
            .zip(BASIS_MATRIX.iter())
            .map(|(p, row)| p * row[col])
            .sum();
    }
    weights
}

/// Evaluate one coordinate of the spline for ordinates `p1..p4`
pub fn evaluate_scalar(t: f64, p: [f64; 4]) -> f64 {
    let w = blend_weights(t);
    (w[0] * p[0] + w[1] * p[1] + w[2] * p[2] + w[3] * p[3]) / 6.0
}

/// Evaluate the curve point for one four-point window.
///
/// Pure; `t` is not clamped. Callers stay within `[0, 1]`.
pub fn evaluate_segment(p1: Point, p2: Point, p3: Point, p4: Point, t: f64) -> Point {
    Point::new(
        evaluate_scalar(t, [p1.x, p2.x, p3.x, p4.x]),
        evaluate_scalar(t, [p1.y, p2.y, p3.y, p4.y]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn weights_at_endpoints() {
        assert_eq!(blend_weights(0.0), [1.0, 4.0, 1.0, 0.0]);
        assert_eq!(blend_weights(1.0), [0.0, 1.0, 4.0, 1.0]);
    }

    #[test]
    fn weights_sum_to_six() {
        for k in 0..=20 {
            let t = k as f64 / 20.0;
            let sum: f64 = blend_weights(t).iter().sum();
            assert!((sum - 6.0).abs() < EPS, "t={t} sum={sum}");
        }
    }

    #[test]
    fn start_is_weighted_average_of_first_three() {
        let p = [
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(100.0, 50.0),
            Point::new(150.0, 0.0),
        ];
        let start = evaluate_segment(p[0], p[1], p[2], p[3], 0.0);
        assert!(close(start, Point::new(50.0, 50.0 / 6.0)));

        let end = evaluate_segment(p[0], p[1], p[2], p[3], 1.0);
        assert!(close(end, Point::new(100.0, 200.0 / 6.0)));
    }

    #[test]
    fn collinear_evenly_spaced_points_give_a_line() {
        let p: Vec<Point> = (0..4).map(|i| Point::new(i as f64 * 10.0, 5.0)).collect();
        let mid = evaluate_segment(p[0], p[1], p[2], p[3], 0.5);
        assert!(close(mid, Point::new(15.0, 5.0)));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let p1 = Point::new(0.1, 7.3);
        let p2 = Point::new(50.7, -0.2);
        let p3 = Point::new(100.0, 50.3);
        let p4 = Point::new(149.9, 0.01);
        for &t in &[0.0, 0.05, 0.33, 0.9, 1.0, 1.7, -0.4] {
            let a = evaluate_segment(p1, p2, p3, p4, t);
            let b = evaluate_segment(p1, p2, p3, p4, t);
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }

    #[test]
    fn parameter_outside_unit_interval_is_not_clamped() {
        let p: Vec<Point> = (0..4).map(|i| Point::new(i as f64 * 10.0, 0.0)).collect();
        let before = evaluate_segment(p[0], p[1], p[2], p[3], -1.0);
        let after = evaluate_segment(p[0], p[1], p[2], p[3], 2.0);
        assert!(close(before, Point::new(0.0, 0.0)));
        assert!(close(after, Point::new(30.0, 0.0)));
    }
}
