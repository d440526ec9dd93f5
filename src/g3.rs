// Copyright 2025 the Continuous Corners Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Empirical higher-order (G3) corners.
//!
//! Each half corner turns through 45° and is made of two chained G2
//! Béziers. The split point's direction and curvature are nudged by
//! hand-tuned constants so that curvature ramps up smoothly instead of
//! jumping. The constants are fitted, not derived; this continuity is kept
//! for compatibility and [`G2Continuity`](crate::G2Continuity) should be
//! preferred.

use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use smallvec::{smallvec, SmallVec};

use crate::cache;
use crate::common::lerp;
use crate::corner::{Corner, Edges, HalfFrame};
use crate::{
    Contour, ContourBuilder, ContourError, CubicBez, G2Hermite, Point, RoundedRectRadii, Size,
    Vec2,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Where the raw curve is split, as a parameter.
const SPLIT_T: f64 = 0.6;
/// Curvature at the split point, relative to the corner's `1/radius`.
const MID_CURVATURE: f64 = 1.02;
/// Curvature at the 45° end of the half corner.
const END_CURVATURE: f64 = 1.08;

/// Corners whose curvature also changes continuously, approximately.
///
/// Deprecated in favour of [`G2Continuity`](crate::G2Continuity), which is
/// derived from exact continuity conditions and is configurable.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct G3Continuity {
    /// How far, as a multiple of the radius, each half corner reaches into
    /// the straight edge. Non-negative.
    pub extended_fraction: f64,
}

impl G3Continuity {
    /// Create a new G3 continuity.
    #[inline]
    pub const fn new(extended_fraction: f64) -> G3Continuity {
        G3Continuity { extended_fraction }
    }

    /// Interpolate the extension towards `other`.
    #[inline]
    #[must_use]
    pub fn lerp(&self, other: &G3Continuity, t: f64) -> G3Continuity {
        G3Continuity::new(lerp(self.extended_fraction, other.extended_fraction, t))
    }

    /// The extension available to a half corner on a side with the given
    /// half extent.
    fn extension(&self, half_extent: f64, radius: f64) -> f64 {
        ((half_extent - radius) / radius)
            .min(self.extended_fraction)
            .max(0.0)
    }

    /// The general contour, without the capsule and circle shortcuts.
    pub(crate) fn standard_contour(
        &self,
        size: Size,
        radii: &RoundedRectRadii,
    ) -> Result<Contour, ContourError> {
        let mut builder = ContourBuilder::new();
        for (i, corner) in Corner::CLOCKWISE.into_iter().enumerate() {
            let r = corner.radius(radii);
            let [first, second] = corner.halves(size, r);
            let halves = if r > 0.0 {
                let [e0, e1] = corner.half_extents(size);
                Some([
                    cache::g3_half_corner(self.extension(e0, r))?,
                    cache::g3_half_corner(self.extension(e1, r))?,
                ])
            } else {
                None
            };
            let entry = match &halves {
                Some([half, _]) => first.place(half.start(), r),
                None => first.edge_point(r, 0.0),
            };
            if i == 0 {
                builder.move_to(entry)?;
            } else {
                builder.line_to(entry);
            }
            if let Some([a, b]) = &halves {
                a.emit(&first, r, &mut builder);
                b.emit(&second, r, &mut builder);
            }
        }
        builder.close();
        Ok(builder.build())
    }

    /// The capsule limit of `size`.
    ///
    /// The short sides are 90° circular arcs, each replacing the two half
    /// corners that would otherwise meet there.
    pub(crate) fn capsule_contour(&self, size: Size) -> Result<Contour, ContourError> {
        let r = size.max_corner_radius();
        let Size { width, height } = size;
        let mut builder = ContourBuilder::new();
        if width > height {
            let half = cache::g3_half_corner(self.extension(width * 0.5, r))?;
            let cy = height * 0.5;
            let [_, tlh] = Corner::TopLeft.halves(size, r);
            let [trh, _] = Corner::TopRight.halves(size, r);
            let [_, brh] = Corner::BottomRight.halves(size, r);
            let [blh, _] = Corner::BottomLeft.halves(size, r);

            let left = Point::new(r, cy);
            let start = 3.0 * FRAC_PI_4;
            builder.move_to(left + Vec2::from_angle(start) * r)?;
            builder.arc_to(left, r, start, FRAC_PI_2);
            half.emit(&tlh, r, &mut builder);
            builder.line_to(trh.place(half.start(), r));
            half.emit(&trh, r, &mut builder);
            builder.arc_to(Point::new(width - r, cy), r, -FRAC_PI_4, FRAC_PI_2);
            half.emit(&brh, r, &mut builder);
            builder.line_to(blh.place(half.start(), r));
            half.emit(&blh, r, &mut builder);
        } else {
            let half = cache::g3_half_corner(self.extension(height * 0.5, r))?;
            let cx = width * 0.5;
            let [tlv, _] = Corner::TopLeft.halves(size, r);
            let [_, trv] = Corner::TopRight.halves(size, r);
            let [brv, _] = Corner::BottomRight.halves(size, r);
            let [_, blv] = Corner::BottomLeft.halves(size, r);

            builder.move_to(tlv.place(half.start(), r))?;
            half.emit(&tlv, r, &mut builder);
            builder.arc_to(Point::new(cx, r), r, -3.0 * FRAC_PI_4, FRAC_PI_2);
            half.emit(&trv, r, &mut builder);
            builder.line_to(brv.place(half.start(), r));
            half.emit(&brv, r, &mut builder);
            builder.arc_to(Point::new(cx, height - r), r, FRAC_PI_4, FRAC_PI_2);
            half.emit(&blv, r, &mut builder);
        }
        Edges::SkipEmpty.close(&mut builder);
        Ok(builder.build())
    }
}

impl Default for G3Continuity {
    fn default() -> Self {
        G3Continuity::new(1.0)
    }
}

/// The unit-frame curves of one G3 half corner, from the straight edge to
/// the 45° point of the corner circle.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct G3HalfCorner {
    segments: SmallVec<[CubicBez; 2]>,
}

impl G3HalfCorner {
    /// Solve the half corner reaching `extended_fraction` into the edge.
    pub(crate) fn solve(extended_fraction: f64) -> Result<G3HalfCorner, ContourError> {
        let ef = extended_fraction;
        let end = Point::new(FRAC_PI_4.sin(), 1.0 - FRAC_PI_4.cos());
        if ef == 0.0 {
            let single = G2Hermite {
                start: Point::ORIGIN,
                end,
                start_angle: 0.0,
                end_angle: FRAC_PI_4,
                start_curvature: 0.0,
                end_curvature: 1.0,
            }
            .solve()?;
            return Ok(G3HalfCorner {
                segments: smallvec![single],
            });
        }

        let raw = G2Hermite {
            start: Point::new(-ef, 0.0),
            end,
            start_angle: 0.0,
            end_angle: FRAC_PI_4,
            start_curvature: 0.0,
            end_curvature: 1.0,
        }
        .solve()?;
        let first = raw.split_first(SPLIT_T);
        let multiplier = 1.04 - 0.125 * (ef - 1.0).max(0.0) - 0.045 * (0.5 - ef).max(0.0);
        let mid_angle = first.deriv_at_end().atan2() * multiplier;
        let mid = first.p3 + Vec2::new(0.0, -0.009 * ef);

        let head = G2Hermite {
            start: raw.p0,
            end: mid,
            start_angle: 0.0,
            end_angle: mid_angle,
            start_curvature: 0.0,
            end_curvature: MID_CURVATURE,
        }
        .solve()?;
        let tail = G2Hermite {
            start: mid,
            end: raw.p3,
            start_angle: mid_angle,
            end_angle: FRAC_PI_4,
            start_curvature: MID_CURVATURE,
            end_curvature: END_CURVATURE,
        }
        .solve()?;
        Ok(G3HalfCorner {
            segments: smallvec![head, tail],
        })
    }

    /// The point on the straight edge where the half corner begins.
    pub(crate) fn start(&self) -> Point {
        self.segments.first().map_or(Point::ORIGIN, |s| s.p0)
    }

    pub(crate) fn segments(&self) -> &[CubicBez] {
        &self.segments
    }

    /// Append the half corner placed by `frame`, in the frame's direction
    /// of travel.
    fn emit(&self, frame: &HalfFrame, radius: f64, builder: &mut ContourBuilder) {
        let mut push = |unit: &CubicBez| {
            let curve = frame.map(unit, radius);
            builder.cubic_to(curve.p1, curve.p2, curve.p3);
        };
        if frame.is_reversed() {
            self.segments().iter().rev().for_each(&mut push);
        } else {
            self.segments().iter().for_each(&mut push);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParamCurve, ParamCurveCurvature, ParamCurveTangent, PathSegment, Rect};

    #[test]
    fn curvature_ramps_through_the_split() {
        let half = G3HalfCorner::solve(1.0).unwrap();
        let [head, tail] = half.segments() else {
            panic!("expected two segments");
        };
        assert_eq!(head.start(), Point::new(-1.0, 0.0));
        assert!(head.end().is_near(tail.start(), 1e-15));
        assert!(head.curvature(0.0).abs() < 1e-9);
        assert!((head.curvature(1.0) - MID_CURVATURE).abs() < 1e-6);
        assert!((tail.curvature(0.0) - MID_CURVATURE).abs() < 1e-6);
        assert!((tail.curvature(1.0) - END_CURVATURE).abs() < 1e-6);
        let joint = head.unit_tangent(1.0) - tail.unit_tangent(0.0);
        assert!(joint.hypot() < 1e-9);
        let end = tail.unit_tangent(1.0);
        assert!((end.atan2() - FRAC_PI_4).abs() < 1e-9);
        assert!(tail.end().is_near(Point::new(FRAC_PI_4.sin(), 1.0 - FRAC_PI_4.cos()), 1e-15));
    }

    #[test]
    fn zero_extension_is_one_segment() {
        let half = G3HalfCorner::solve(0.0).unwrap();
        assert_eq!(half.segments().len(), 1);
        assert_eq!(half.start(), Point::ORIGIN);
        let curve = half.segments()[0];
        assert!((curve.curvature(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn every_extension_solves() {
        for i in 0..=150 {
            let ef = f64::from(i) * 0.01;
            let half = G3HalfCorner::solve(ef).unwrap();
            assert!(half.segments().iter().all(CubicBez::is_finite), "{ef}");
        }
    }

    #[test]
    fn rounded_rectangle() {
        let size = Size::new(200.0, 100.0);
        let contour = G3Continuity::default()
            .standard_contour(size, &RoundedRectRadii::from_single_radius(30.0))
            .unwrap();
        // Two Béziers per half corner and one edge per side.
        assert_eq!(contour.len(), 20);
        assert!(contour.is_closed(1e-9));
        assert!(contour.is_contiguous(1e-9));
        assert!(contour.signed_area() > 0.0);
        assert!(contour.iter().all(|s| !matches!(s, PathSegment::Arc(_))));
        let start = contour.start().unwrap();
        assert!(start.is_near(Point::new(0.0, 50.0), 1e-12));

        let square = G3Continuity::default()
            .standard_contour(size, &RoundedRectRadii::from_single_radius(0.0))
            .unwrap();
        assert_eq!(square.len(), 4);
    }

    #[test]
    fn capsules() {
        let g3 = G3Continuity::default();
        for size in [Size::new(200.0, 100.0), Size::new(60.0, 150.0)] {
            let contour = g3.capsule_contour(size).unwrap();
            assert_eq!(contour.len(), 12, "{size:?}");
            assert!(contour.is_closed(1e-9));
            assert!(contour.is_contiguous(1e-9));
            assert!(contour.signed_area() > 0.0);
            let bbox = contour.bounding_box();
            let expected = Rect::from_origin_size(Point::ORIGIN, size);
            assert!((bbox.x0 - expected.x0).abs() < 1e-9);
            assert!((bbox.y0 - expected.y0).abs() < 1e-9);
            assert!((bbox.x1 - expected.x1).abs() < 1e-9);
            assert!((bbox.y1 - expected.y1).abs() < 1e-9);
        }
    }

    #[test]
    fn lerp_endpoints() {
        let a = G3Continuity::new(0.2);
        let b = G3Continuity::default();
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert!((a.lerp(&b, 0.5).extended_fraction - 0.6).abs() < 1e-15);
    }
}
