// Copyright 2025 the Continuous Corners Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use core::ops::{Add, Range};

use arrayvec::ArrayVec;

use crate::common::solve_quadratic;
use crate::{
    ParamCurve, ParamCurveArea, ParamCurveCurvature, ParamCurveDeriv, ParamCurveExtrema,
    ParamCurveTangent, Point, QuadBez, Vec2, MAX_EXTREMA,
};

/// A single cubic Bézier segment.
///
/// `p0` and `p3` are the anchors the curve passes through; `p1` and `p2`
/// are handles that shape it but in general do not lie on it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct CubicBez {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// The `[0, t]` piece of the curve, computed with de Casteljau.
    pub fn split_first(&self, t: f64) -> CubicBez {
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let p23 = self.p2.lerp(self.p3, t);
        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);
        CubicBez::new(self.p0, p01, p012, p012.lerp(p123, t))
    }

    /// The derivative at `t = 1`.
    #[inline]
    pub fn deriv_at_end(&self) -> Vec2 {
        3.0 * (self.p3 - self.p2)
    }

    /// Scale all four control points about the origin.
    ///
    /// A curve solved in a unit corner frame is applied to a concrete
    /// corner by scaling it with the corner radius.
    #[must_use]
    #[inline]
    pub fn scale(&self, factor: f64) -> CubicBez {
        CubicBez::new(
            self.p0.scale(factor),
            self.p1.scale(factor),
            self.p2.scale(factor),
            self.p3.scale(factor),
        )
    }

    /// Apply a point mapping to every control point.
    ///
    /// Only affine mappings preserve the curve's shape.
    #[must_use]
    #[inline]
    pub fn map(&self, mut f: impl FnMut(Point) -> Point) -> CubicBez {
        CubicBez::new(f(self.p0), f(self.p1), f(self.p2), f(self.p3))
    }

    /// Returns a cubic Bézier segment that traverses the same curve in the
    /// opposite direction.
    #[must_use]
    #[inline]
    pub fn reverse(&self) -> CubicBez {
        CubicBez::new(self.p3, self.p2, self.p1, self.p0)
    }

    /// Does the whole curve collapse onto a single point?
    #[inline]
    pub fn is_point(&self) -> bool {
        self.p0 == self.p1 && self.p1 == self.p2 && self.p2 == self.p3
    }

    /// Is this cubic Bezier curve finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }

    /// Is this cubic Bezier curve NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.p0.is_nan() || self.p1.is_nan() || self.p2.is_nan() || self.p3.is_nan()
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = self.p0.to_vec2() * (mt * mt * mt)
            + (self.p1.to_vec2() * (mt * mt * 3.0)
                + (self.p2.to_vec2() * (mt * 3.0) + self.p3.to_vec2() * t) * t)
                * t;
        v.to_point()
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }

    fn subsegment(&self, range: Range<f64>) -> CubicBez {
        let (t0, t1) = (range.start, range.end);
        let p0 = self.eval(t0);
        let p3 = self.eval(t1);
        let d = self.deriv();
        let scale = (t1 - t0) * (1.0 / 3.0);
        let p1 = p0 + scale * d.eval(t0).to_vec2();
        let p2 = p3 - scale * d.eval(t1).to_vec2();
        CubicBez { p0, p1, p2, p3 }
    }

    /// Subdivide into halves, using de Casteljau.
    #[inline]
    fn subdivide(&self) -> (CubicBez, CubicBez) {
        let pm = self.eval(0.5);
        (
            CubicBez::new(
                self.p0,
                self.p0.midpoint(self.p1),
                ((self.p0.to_vec2() + self.p1.to_vec2() * 2.0 + self.p2.to_vec2()) * 0.25)
                    .to_point(),
                pm,
            ),
            CubicBez::new(
                pm,
                ((self.p1.to_vec2() + self.p2.to_vec2() * 2.0 + self.p3.to_vec2()) * 0.25)
                    .to_point(),
                self.p2.midpoint(self.p3),
                self.p3,
            ),
        )
    }
}

impl ParamCurveDeriv for CubicBez {
    type DerivResult = QuadBez;

    #[inline]
    fn deriv(&self) -> QuadBez {
        QuadBez::new(
            (3.0 * (self.p1 - self.p0)).to_point(),
            (3.0 * (self.p2 - self.p1)).to_point(),
            (3.0 * (self.p3 - self.p2)).to_point(),
        )
    }
}

impl ParamCurveArea for CubicBez {
    #[inline]
    fn signed_area(&self) -> f64 {
        (self.p0.x * (6.0 * self.p1.y + 3.0 * self.p2.y + self.p3.y)
            + 3.0
                * (self.p1.x * (-2.0 * self.p0.y + self.p2.y + self.p3.y)
                    - self.p2.x * (self.p0.y + self.p1.y - 2.0 * self.p3.y))
            - self.p3.x * (self.p0.y + 3.0 * self.p1.y + 6.0 * self.p2.y))
            * (1.0 / 20.0)
    }
}

impl ParamCurveCurvature for CubicBez {}

impl ParamCurveTangent for CubicBez {
    #[inline]
    fn unit_tangent(&self, t: f64) -> Vec2 {
        self.deriv().eval(t).to_vec2().normalize()
    }
}

impl ParamCurveExtrema for CubicBez {
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        fn one_coord(result: &mut ArrayVec<f64, MAX_EXTREMA>, d0: f64, d1: f64, d2: f64) {
            let a = d0 - 2.0 * d1 + d2;
            let b = 2.0 * (d1 - d0);
            let c = d0;
            let roots = solve_quadratic(c, b, a);
            for &t in &roots {
                if t > 0.0 && t < 1.0 {
                    result.push(t);
                }
            }
        }
        let mut result = ArrayVec::new();
        let d0 = self.p1 - self.p0;
        let d1 = self.p2 - self.p1;
        let d2 = self.p3 - self.p2;
        one_coord(&mut result, d0.x, d1.x, d2.x);
        one_coord(&mut result, d0.y, d1.y, d2.y);
        result.sort_by(|a, b| a.total_cmp(b));
        result
    }
}

impl Add<Vec2> for CubicBez {
    type Output = CubicBez;

    #[inline]
    fn add(self, v: Vec2) -> CubicBez {
        CubicBez::new(self.p0 + v, self.p1 + v, self.p2 + v, self.p3 + v)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        CubicBez, ParamCurve, ParamCurveArea, ParamCurveCurvature, ParamCurveDeriv,
        ParamCurveExtrema, ParamCurveTangent, Point, Vec2,
    };

    #[test]
    fn cubicbez_deriv() {
        // y = x^2
        let c = CubicBez::new(
            (0.0, 0.0),
            (1.0 / 3.0, 0.0),
            (2.0 / 3.0, 1.0 / 3.0),
            (1.0, 1.0),
        );
        let deriv = c.deriv();

        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let delta = 1e-6;
            let p = c.eval(t);
            let p1 = c.eval(t + delta);
            let d_approx = (p1 - p) * delta.recip();
            let d = deriv.eval(t).to_vec2();
            assert!((d - d_approx).hypot() < delta * 2.0);
        }
        assert!((c.deriv_at_end() - deriv.eval(1.0).to_vec2()).hypot() < 1e-12);
    }

    #[test]
    fn cubicbez_signed_area_linear() {
        // y = 1 - x
        let c = CubicBez::new(
            (1.0, 0.0),
            (2.0 / 3.0, 1.0 / 3.0),
            (1.0 / 3.0, 2.0 / 3.0),
            (0.0, 1.0),
        );
        let epsilon = 1e-12;
        assert!((c.signed_area() - 0.5).abs() < epsilon);
        assert!(((c + Vec2::new(0.0, 1.0)).signed_area() - 1.0).abs() < epsilon);
        assert!(((c + Vec2::new(1.0, 0.0)).signed_area() - 1.0).abs() < epsilon);
    }

    #[test]
    fn cubicbez_signed_area() {
        // y = 1 - x^3
        let c = CubicBez::new((1.0, 0.0), (2.0 / 3.0, 1.0), (1.0 / 3.0, 1.0), (0.0, 1.0));
        let epsilon = 1e-12;
        assert!((c.signed_area() - 0.75).abs() < epsilon);
        assert!(((c + Vec2::new(0.0, 1.0)).signed_area() - 1.25).abs() < epsilon);
        assert!(((c + Vec2::new(1.0, 0.0)).signed_area() - 1.25).abs() < epsilon);
    }

    #[test]
    fn cubicbez_extrema() {
        // y = x^2
        let q = CubicBez::new((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0));
        let extrema = q.extrema();
        assert_eq!(extrema.len(), 1);
        assert!((extrema[0] - 0.5).abs() < 1e-6);

        let q = CubicBez::new((0.4, 0.5), (0.0, 1.0), (1.0, 0.0), (0.5, 0.4));
        let extrema = q.extrema();
        assert_eq!(extrema.len(), 4);

        let bbox = CubicBez::new((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)).bounding_box();
        assert!((bbox.y1 - 0.75).abs() < 1e-12);
        assert_eq!((bbox.x0, bbox.y0, bbox.x1), (0.0, 0.0, 1.0));
    }

    #[test]
    fn cubicbez_split_first_matches_subsegment() {
        let c = CubicBez::new((-0.5, 0.0), (0.1, 0.0), (0.4, 0.0), (0.7, 0.3));
        let a = c.split_first(0.6);
        let b = c.subsegment(0.0..0.6);
        for (p, q) in [(a.p0, b.p0), (a.p1, b.p1), (a.p2, b.p2), (a.p3, b.p3)] {
            assert!(p.distance(q) < 1e-12, "{p:?} != {q:?}");
        }
    }

    #[test]
    fn cubicbez_curvature_of_quarter_circle() {
        // Standard four-point quarter circle of radius 2, clockwise on screen.
        let k = 4.0 / 3.0 * (core::f64::consts::PI / 8.0).tan();
        let r = 2.0;
        let c = CubicBez::new((r, 0.0), (r, k * r), (k * r, r), (0.0, r));
        for i in 0..=8 {
            let t = i as f64 / 8.0;
            assert!((c.curvature(t) - 1.0 / r).abs() < 0.01);
        }
        let rev = c.reverse();
        assert!((rev.curvature(0.5) + 1.0 / r).abs() < 0.01);
        assert!((c.unit_tangent(0.0) - Vec2::new(0.0, 1.0)).hypot() < 1e-12);
    }

    #[test]
    fn cubicbez_degenerate_curvature_is_zero() {
        let p = Point::new(3.0, 4.0);
        let c = CubicBez::new(p, p, p, p);
        assert!(c.is_point());
        assert_eq!(c.curvature(0.5), 0.0);
        assert!(c.unit_tangent(0.5).is_nan());
    }

    #[test]
    fn cubicbez_scale_and_map() {
        let c = CubicBez::new((1.0, 0.0), (1.0, 0.5), (0.5, 1.0), (0.0, 1.0));
        let s = c.scale(10.0);
        assert_eq!(s.p1, Point::new(10.0, 5.0));
        let m = c.map(|p| Point::new(-p.y, p.x));
        assert_eq!(m.p3, Point::new(-1.0, 0.0));
    }
}
