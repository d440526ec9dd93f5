// Copyright 2025 the Continuous Corners Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular arcs.

use core::f64::consts::{FRAC_PI_2, PI};
use core::ops::Range;

use arrayvec::ArrayVec;

use crate::{
    ParamCurve, ParamCurveArea, ParamCurveExtrema, ParamCurveTangent, PathEl, Point, Vec2,
    MAX_EXTREMA,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A single circular arc segment.
///
/// Angles are measured from the positive x axis towards the positive y
/// axis, so in a y-down coordinate system a positive `sweep_angle` travels
/// clockwise on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc {
    /// The arc's centre point.
    pub center: Point,
    /// The arc's radius, never negative.
    pub radius: f64,
    /// The start angle in radians.
    pub start_angle: f64,
    /// The angle between the start and end of the arc.
    pub sweep_angle: f64,
}

impl Arc {
    /// Create a new arc.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64, start_angle: f64, sweep_angle: f64) -> Arc {
        Arc {
            center: center.into(),
            radius,
            start_angle,
            sweep_angle,
        }
    }

    /// The arc of known radius joining two points.
    ///
    /// A positive `radius` sweeps clockwise on screen (increasing angle),
    /// a negative one counter-clockwise. The arc is the shorter of the two
    /// candidates on the chosen side. When the chord is longer than the
    /// diameter, the result is the half circle on the chord.
    pub fn from_endpoints(from: Point, to: Point, radius: f64) -> Arc {
        let mid = from.midpoint(to);
        let dir = to - from;
        let len = dir.hypot();
        let abs_radius = radius.abs().max(0.5 * len);
        let height = (abs_radius * abs_radius - 0.25 * len * len).max(0.0).sqrt();
        let norm = dir.turn_90() / len;
        let center = mid + norm * height.copysign(radius);
        let start_angle = (from - center).atan2();
        let end_angle = (to - center).atan2();
        let sweep_angle = if radius > 0.0 {
            if end_angle >= start_angle {
                end_angle - start_angle
            } else {
                end_angle + 2.0 * PI - start_angle
            }
        } else if radius < 0.0 {
            if end_angle <= start_angle {
                end_angle - start_angle
            } else {
                end_angle - 2.0 * PI - start_angle
            }
        } else {
            0.0
        };
        Arc {
            center,
            radius: abs_radius,
            start_angle,
            sweep_angle,
        }
    }

    /// The point on the arc's circle at the given angle.
    #[inline]
    pub fn point_at_angle(&self, angle: f64) -> Point {
        self.center + self.radius * Vec2::from_angle(angle)
    }

    /// The signed curvature, `±1/radius` following the sweep direction.
    #[inline]
    pub fn curvature(&self) -> f64 {
        self.radius.recip().copysign(self.sweep_angle)
    }

    /// Create an iterator generating Bezier path elements.
    ///
    /// The generated elements can be appended to an existing bezier path.
    pub fn append_iter(&self, tolerance: f64) -> ArcAppendIter {
        let scaled_err = self.radius / tolerance;
        // Number of subdivisions per circle based on error tolerance.
        // Note: this may slightly underestimate the error for quadrants.
        let n_err = (1.1163 * scaled_err).powf(1.0 / 6.0).max(3.999_999);
        let n = (n_err * self.sweep_angle.abs() * (1.0 / (2.0 * PI))).ceil();
        let angle_step = self.sweep_angle / n;
        let n = n as usize;
        let arm_len = (4.0 / 3.0) * (0.25 * angle_step).abs().tan() * angle_step.signum();
        let angle0 = self.start_angle;
        let p0 = self.point_at_angle(angle0);

        ArcAppendIter {
            idx: 0,
            center: self.center,
            radius: self.radius,
            n,
            arm_len,
            angle_step,
            p0,
            angle0,
        }
    }

    /// Is this arc finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.start_angle.is_finite()
            && self.sweep_angle.is_finite()
    }
}

/// An iterator emitting the cubic Bézier approximation of an [`Arc`].
#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct ArcAppendIter {
    idx: usize,

    center: Point,
    radius: f64,
    n: usize,
    arm_len: f64,
    angle_step: f64,

    p0: Point,
    angle0: f64,
}

impl Iterator for ArcAppendIter {
    type Item = PathEl;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.n {
            return None;
        }

        let angle1 = self.angle0 + self.angle_step;
        let p0 = self.p0;
        let p1 = p0 + self.arm_len * self.radius * Vec2::from_angle(self.angle0 + FRAC_PI_2);
        let p3 = self.center + self.radius * Vec2::from_angle(angle1);
        let p2 = p3 - self.arm_len * self.radius * Vec2::from_angle(angle1 + FRAC_PI_2);

        self.angle0 = angle1;
        self.p0 = p3;
        self.idx += 1;

        Some(PathEl::CurveTo(p1, p2, p3))
    }
}

impl ParamCurve for Arc {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.point_at_angle(self.start_angle + self.sweep_angle * t)
    }

    #[inline]
    fn subsegment(&self, range: Range<f64>) -> Arc {
        Arc {
            center: self.center,
            radius: self.radius,
            start_angle: self.start_angle + self.sweep_angle * range.start,
            sweep_angle: self.sweep_angle * (range.end - range.start),
        }
    }
}

impl ParamCurveArea for Arc {
    fn signed_area(&self) -> f64 {
        let a0 = self.start_angle;
        let a1 = self.start_angle + self.sweep_angle;
        let r = self.radius;
        let Point { x: cx, y: cy } = self.center;
        0.5 * (r * r * self.sweep_angle + r * cx * (a1.sin() - a0.sin())
            - r * cy * (a1.cos() - a0.cos()))
    }
}

impl ParamCurveTangent for Arc {
    #[inline]
    fn unit_tangent(&self, t: f64) -> Vec2 {
        let angle = self.start_angle + self.sweep_angle * t;
        Vec2::from_angle(angle).turn_90() * 1.0_f64.copysign(self.sweep_angle)
    }
}

impl ParamCurveExtrema for Arc {
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        let mut result = ArrayVec::new();
        if self.sweep_angle == 0.0 {
            return result;
        }
        let end_angle = self.start_angle + self.sweep_angle;
        let lo = self.start_angle.min(end_angle);
        let hi = self.start_angle.max(end_angle);
        let mut k = (lo / FRAC_PI_2).ceil();
        while k * FRAC_PI_2 < hi {
            let angle = k * FRAC_PI_2;
            if angle > lo && result.try_push((angle - self.start_angle) / self.sweep_angle).is_err()
            {
                break;
            }
            k += 1.0;
        }
        result.sort_by(|a, b| a.total_cmp(b));
        result
    }
}
