// Copyright 2025 the Continuous Corners Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of circle shape.

use core::f64::consts::PI;
use core::ops::{Add, Range, Sub};

use arrayvec::ArrayVec;

use crate::{
    Arc, ParamCurve, ParamCurveArea, ParamCurveExtrema, ParamCurveTangent, Point, Vec2, MAX_EXTREMA,
};

/// A circle, traversed once starting at its rightmost point.
///
/// As a curve, increasing `t` moves towards the positive y axis first, which
/// is clockwise on screen in a y-down coordinate system.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// The full turn as an [`Arc`].
    #[inline]
    pub fn to_arc(&self) -> Arc {
        Arc::new(self.center, self.radius, 0.0, 2.0 * PI)
    }

    /// Is this circle [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }

    /// Is this circle [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan() || self.radius.is_nan()
    }
}

impl Add<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn add(self, v: Vec2) -> Circle {
        Circle {
            center: self.center + v,
            radius: self.radius,
        }
    }
}

impl Sub<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn sub(self, v: Vec2) -> Circle {
        Circle {
            center: self.center - v,
            radius: self.radius,
        }
    }
}

impl ParamCurve for Circle {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.center + self.radius * Vec2::from_angle(2.0 * PI * t)
    }

    /// A partial circle is no longer a circle; this returns the full circle
    /// for the whole range and a zero radius circle at the range start
    /// otherwise. Use [`Circle::to_arc`] for partial traversal.
    fn subsegment(&self, range: Range<f64>) -> Circle {
        if range.end - range.start >= 1.0 {
            *self
        } else {
            Circle::new(self.eval(range.start), 0.0)
        }
    }
}

impl ParamCurveArea for Circle {
    #[inline]
    fn signed_area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl ParamCurveTangent for Circle {
    #[inline]
    fn unit_tangent(&self, t: f64) -> Vec2 {
        Vec2::from_angle(2.0 * PI * t).turn_90()
    }
}

impl ParamCurveExtrema for Circle {
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        let mut result = ArrayVec::new();
        result.push(0.25);
        result.push(0.5);
        result.push(0.75);
        result
    }
}
