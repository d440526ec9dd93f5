// Copyright 2025 the Continuous Corners Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary-value solvers for curvature-continuous Bézier segments.
//!
//! Half corners are solved once in a unit frame: corner radius 1, the
//! straight edge along the positive x axis, the corner's circle centred at
//! `(0, 1)`. The result is scaled and mapped onto each concrete corner.

use core::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

use crate::common::solve_itp;
use crate::{ContourError, CubicBez, G2Config, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Number of samples used to bracket the handle-length roots.
const ROOT_SCAN_STEPS: usize = 64;

/// Solve the unit-frame Bézier of one half corner.
///
/// The curve starts at `(-extended_fraction, 0)` heading along the x axis
/// with zero curvature, and ends on the unit circle where the corner's arc
/// begins, matching the arc's tangent and meeting it with curvature
/// `bezier_curvature_scale`.
///
/// When both curvature scales are exactly 1 a closed form is used; the
/// general solution agrees with it there.
pub fn base_corner_bezier(config: &G2Config) -> Result<CubicBez, ContourError> {
    if config.bezier_curvature_scale == 1.0 && config.arc_curvature_scale == 1.0 {
        let frame = UnitCorner::new(config.arc_fraction);
        let half_tan = frame.sin / (1.0 + frame.cos);
        Ok(CubicBez::new(
            Point::new(-config.extended_fraction, 0.0),
            Point::new((1.0 - 1.5 / (1.0 + frame.cos)) * half_tan, 0.0),
            Point::new(half_tan, 0.0),
            frame.bezier_end(),
        ))
    } else {
        general_corner_bezier(config)
    }
}

/// The general G2 solution, valid for any curvature scales.
fn general_corner_bezier(config: &G2Config) -> Result<CubicBez, ContourError> {
    let frame = UnitCorner::new(config.arc_fraction);
    let end = frame.bezier_end();
    let tangent = if config.arc_fraction > 0.0 && config.arc_curvature_scale > 0.0 {
        arc_start_tangent(end, frame.arc_end(), config.arc_curvature_scale.recip())
    } else {
        Vec2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2)
    };
    if tangent.y == 0.0 {
        return Err(ContourError::DegenerateDirection);
    }

    // Start tangent (1, 0) with zero curvature, end tangent `tangent` with
    // curvature `bezier_curvature_scale`. Both handles lie on the x axis.
    let ef = config.extended_fraction;
    let b1 = 1.5 * config.bezier_curvature_scale;
    let a2 = tangent.y;
    let dx = end.x + ef;
    let dy = end.y;
    let a3 = -dy;
    let b3 = dy * tangent.x - dx * tangent.y;
    let lambda0 = -b3 / a2 - b1 * a3 * a3 / (a2 * a2 * a2);
    let cubic = CubicBez::new(
        Point::new(-ef, 0.0),
        Point::new(-ef + lambda0, 0.0),
        Point::new(end.x - dy * (tangent.x / tangent.y), 0.0),
        end,
    );
    if !cubic.is_finite() {
        return Err(ContourError::DegenerateDirection);
    }
    Ok(cubic)
}

/// The unit-frame angles shared by both halves of a corner.
struct UnitCorner {
    bezier_angle: f64,
    arc_angle: f64,
    sin: f64,
    cos: f64,
}

impl UnitCorner {
    fn new(arc_fraction: f64) -> UnitCorner {
        let arc_angle = FRAC_PI_2 * arc_fraction;
        let bezier_angle = (FRAC_PI_2 - arc_angle) * 0.5;
        let (sin, cos) = bezier_angle.sin_cos();
        UnitCorner {
            bezier_angle,
            arc_angle,
            sin,
            cos,
        }
    }

    fn bezier_end(&self) -> Point {
        Point::new(self.sin, 1.0 - self.cos)
    }

    fn arc_end(&self) -> Point {
        let (sin, cos) = (self.bezier_angle + self.arc_angle).sin_cos();
        Point::new(sin, 1.0 - cos)
    }
}

/// The unit tangent at `from` of the circular arc of radius `radius` running
/// from `from` to `to`.
///
/// A positive radius places the centre to the right of the chord direction
/// (on screen, y down), giving a clockwise arc. The result is NaN when the
/// chord is longer than the diameter.
pub fn arc_start_tangent(from: Point, to: Point, radius: f64) -> Vec2 {
    let mid = from.midpoint(to);
    let dir = to - from;
    let len = dir.hypot();
    let height = (radius * radius - (len * 0.5) * (len * 0.5)).sqrt();
    let norm = dir.turn_90() / len;
    let center = mid + norm * height.copysign(radius);
    Vec2::new(-(from.y - center.y) / radius, (from.x - center.x) / radius)
}

/// A cubic Bézier boundary-value problem with curvature conditions.
///
/// Given both end points, the direction of travel at each (as angles from
/// the positive x axis) and the signed curvature at each, find handle
/// lengths so that the cubic meets all six conditions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct G2Hermite {
    /// The start point.
    pub start: Point,
    /// The end point.
    pub end: Point,
    /// Direction of travel at the start, in radians.
    pub start_angle: f64,
    /// Direction of travel at the end, in radians.
    pub end_angle: f64,
    /// Signed curvature at the start.
    pub start_curvature: f64,
    /// Signed curvature at the end.
    pub end_curvature: f64,
}

impl G2Hermite {
    /// Solve for the cubic.
    ///
    /// With zero start curvature the handle lengths have a closed form.
    /// Otherwise the pair of quadratic conditions is reduced to one equation
    /// in the start handle length, whose positive roots are bracketed on a
    /// grid and refined; of several admissible solutions, the one closest
    /// to the circular-arc handle length is chosen.
    ///
    /// Returns [`ContourError::DegenerateDirection`] when the end tangents
    /// are parallel or no admissible solution exists.
    pub fn solve(&self) -> Result<CubicBez, ContourError> {
        let t0 = Vec2::from_angle(self.start_angle);
        let t1 = Vec2::from_angle(self.end_angle);
        let d = self.end - self.start;
        let c = t0.cross(t1);
        if c == 0.0 {
            return Err(ContourError::DegenerateDirection);
        }
        // k0·a² = ⅔(x0 − b·c), k1·b² = ⅔(x1 − a·c)
        let x0 = t0.cross(d);
        let x1 = d.cross(t1);
        let k0 = self.start_curvature;
        let k1 = self.end_curvature;

        let (a, b) = if k0 == 0.0 {
            let b = x0 / c;
            ((x1 - 1.5 * k1 * b * b) / c, b)
        } else {
            self.solve_handles(d.hypot(), c, x0, x1)?
        };

        let cubic = CubicBez::new(self.start, self.start + a * t0, self.end - b * t1, self.end);
        if !cubic.is_finite() {
            return Err(ContourError::DegenerateDirection);
        }
        Ok(cubic)
    }

    fn solve_handles(&self, len: f64, c: f64, x0: f64, x1: f64) -> Result<(f64, f64), ContourError> {
        let k0 = self.start_curvature;
        let k1 = self.end_curvature;
        let sweep = self.end_angle - self.start_angle;
        let seed = if sweep.abs() < 1e-9 {
            len / 3.0
        } else {
            (2.0 / 3.0) * len * (0.25 * sweep).tan() / (0.5 * sweep).sin()
        };

        let handle_b = |a: f64| (x0 - 1.5 * k0 * a * a) / c;
        let residual = |a: f64| {
            let b = handle_b(a);
            k1 * b * b - (2.0 / 3.0) * (x1 - a * c)
        };

        // Past this bound the end handle turns negative.
        let a_max = if k0 * x0 * c > 0.0 {
            (x0 / (1.5 * k0)).sqrt()
        } else {
            4.0 * len
        };

        let mut best: Option<(f64, f64, f64)> = None;
        let mut a_prev = 0.0;
        let mut y_prev = residual(a_prev);
        for i in 1..=ROOT_SCAN_STEPS {
            let a_next = a_max * (i as f64 / ROOT_SCAN_STEPS as f64);
            let y_next = residual(a_next);
            if (y_prev > 0.0) != (y_next > 0.0) {
                let sign = if y_prev > 0.0 { -1.0 } else { 1.0 };
                let a = solve_itp(
                    |a| sign * residual(a),
                    a_prev,
                    a_next,
                    1e-13,
                    1,
                    0.2 / (a_next - a_prev),
                    sign * y_prev,
                    sign * y_next,
                );
                let b = handle_b(a);
                if a > 0.0 && b > 0.0 {
                    let dist = (a - seed) * (a - seed) + (b - seed) * (b - seed);
                    if best.map_or(true, |(best_dist, _, _)| dist < best_dist) {
                        best = Some((dist, a, b));
                    }
                }
            }
            a_prev = a_next;
            y_prev = y_next;
        }
        best.map(|(_, a, b)| (a, b))
            .ok_or(ContourError::DegenerateDirection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParamCurve, ParamCurveCurvature, ParamCurveTangent};
    use core::f64::consts::FRAC_PI_4;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn fast_path_matches_general_solution() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let config = G2Config::new(
                rng.random_range(0.0..2.0),
                rng.random_range(0.0..0.95),
                1.0,
                1.0,
            );
            let fast = base_corner_bezier(&config).unwrap();
            let general = general_corner_bezier(&config).unwrap();
            for (p, q) in [
                (fast.p0, general.p0),
                (fast.p1, general.p1),
                (fast.p2, general.p2),
                (fast.p3, general.p3),
            ] {
                assert!(p.distance(q) < 1e-9, "{config:?}: {p:?} != {q:?}");
            }
        }
    }

    #[test]
    fn corner_meets_its_arc() {
        for config in [
            G2Config::ROUNDED_RECTANGLE,
            G2Config::CAPSULE,
            G2Config::new(0.5, 0.45, 1.10, 1.10),
            G2Config::new(0.3, 0.6, 1.2, 1.05),
        ] {
            let cubic = base_corner_bezier(&config).unwrap();
            assert_eq!(cubic.p0, Point::new(-config.extended_fraction, 0.0));
            // Zero curvature and horizontal travel at the edge.
            assert!(cubic.curvature(0.0).abs() < 1e-12);
            assert!((cubic.unit_tangent(0.0) - Vec2::new(1.0, 0.0)).hypot() < 1e-12);
            // End on the unit circle around (0, 1).
            let end = cubic.end();
            assert!((end.distance(Point::new(0.0, 1.0)) - 1.0).abs() < 1e-12);
            // End curvature follows the Bézier scale.
            assert!((cubic.curvature(1.0) - config.bezier_curvature_scale).abs() < 1e-9);
            // The end tangent is the tangent of the arc starting there.
            let frame = UnitCorner::new(config.arc_fraction);
            let expected = arc_start_tangent(
                frame.bezier_end(),
                frame.arc_end(),
                config.arc_curvature_scale.recip(),
            );
            assert!((cubic.unit_tangent(1.0) - expected).hypot() < 1e-9);
        }
    }

    #[test]
    fn no_arc_ends_on_the_diagonal() {
        let config = G2Config::new(0.6, 0.0, 1.2, 1.0);
        let cubic = base_corner_bezier(&config).unwrap();
        let diagonal = Vec2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2);
        assert!((cubic.unit_tangent(1.0) - diagonal).hypot() < 1e-12);
        assert!((cubic.end() - Point::new(FRAC_PI_4.sin(), 1.0 - FRAC_PI_4.cos())).hypot() < 1e-12);
    }

    #[test]
    fn arc_tangent_of_quarter_circle() {
        // Unit circle around (0, 1): from the bottom to the right side.
        let t = arc_start_tangent(Point::new(0.0, 0.0), Point::new(1.0, 1.0), 1.0);
        assert!((t - Vec2::new(1.0, 0.0)).hypot() < 1e-12);
        let t = arc_start_tangent(Point::new(0.0, 0.0), Point::new(1.0, 1.0), -1.0);
        assert!((t - Vec2::new(0.0, 1.0)).hypot() < 1e-12);
    }

    #[test]
    fn hermite_with_zero_start_curvature() {
        let end = Point::new(FRAC_PI_4.sin(), 1.0 - FRAC_PI_4.cos());
        for ef in [0.0, 0.3, 1.0] {
            let cubic = G2Hermite {
                start: Point::new(-ef, 0.0),
                end,
                start_angle: 0.0,
                end_angle: FRAC_PI_4,
                start_curvature: 0.0,
                end_curvature: 1.0,
            }
            .solve()
            .unwrap();
            assert!(cubic.curvature(0.0).abs() < 1e-9);
            assert!((cubic.curvature(1.0) - 1.0).abs() < 1e-9);
            assert!((cubic.unit_tangent(1.0) - Vec2::from_angle(FRAC_PI_4)).hypot() < 1e-12);
        }
    }

    #[test]
    fn hermite_with_curvature_at_both_ends() {
        let end = Point::new(FRAC_PI_4.sin(), 1.0 - FRAC_PI_4.cos());
        let start = Point::new(0.282, 0.054);
        let start_angle = 0.24;
        let cubic = G2Hermite {
            start,
            end,
            start_angle,
            end_angle: FRAC_PI_4,
            start_curvature: 1.02,
            end_curvature: 1.08,
        }
        .solve()
        .unwrap();
        assert_eq!(cubic.start(), start);
        assert_eq!(cubic.end(), end);
        assert!((cubic.curvature(0.0) - 1.02).abs() < 1e-9);
        assert!((cubic.curvature(1.0) - 1.08).abs() < 1e-9);
        assert!((cubic.unit_tangent(0.0) - Vec2::from_angle(start_angle)).hypot() < 1e-12);
    }

    #[test]
    fn hermite_parallel_tangents_fail() {
        let result = G2Hermite {
            start: Point::ZERO,
            end: Point::new(1.0, 0.0),
            start_angle: 0.0,
            end_angle: 0.0,
            start_curvature: 0.0,
            end_curvature: 0.0,
        }
        .solve();
        assert_eq!(result, Err(ContourError::DegenerateDirection));
    }
}
