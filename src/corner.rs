// Copyright 2025 the Continuous Corners Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corner frames shared by the contour generators.
//!
//! Every generator walks the four corners clockwise, starting at the top
//! left, and starts the contour on the left edge just below the top-left
//! corner. Each corner is split into two halves, one on each of its edges.
//! A half is described by a [`HalfFrame`] that maps the unit corner frame
//! (radius 1, edge along +x, circle centred at `(0, 1)`) onto the
//! rectangle.

use core::f64::consts::{FRAC_PI_2, PI};

use crate::{ContourBuilder, CubicBez, Point, RoundedRectRadii, Size, Vec2};

/// One of the four corners of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// The corners in contour order.
    pub(crate) const CLOCKWISE: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    pub(crate) fn radius(self, radii: &RoundedRectRadii) -> f64 {
        match self {
            Corner::TopLeft => radii.top_left,
            Corner::TopRight => radii.top_right,
            Corner::BottomRight => radii.bottom_right,
            Corner::BottomLeft => radii.bottom_left,
        }
    }

    /// The centre of the corner's circle.
    pub(crate) fn center(self, size: Size, radius: f64) -> Point {
        let Size { width, height } = size;
        match self {
            Corner::TopLeft => Point::new(radius, radius),
            Corner::TopRight => Point::new(width - radius, radius),
            Corner::BottomRight => Point::new(width - radius, height - radius),
            Corner::BottomLeft => Point::new(radius, height - radius),
        }
    }

    /// The angle, on the corner's circle, where the corner's quarter turn
    /// begins. The turn runs through increasing angles.
    pub(crate) fn start_angle(self) -> f64 {
        match self {
            Corner::TopLeft => PI,
            Corner::TopRight => -FRAC_PI_2,
            Corner::BottomRight => 0.0,
            Corner::BottomLeft => FRAC_PI_2,
        }
    }

    /// The point where the quarter turn of a plain circular corner begins.
    pub(crate) fn turn_start(self, size: Size, radius: f64) -> Point {
        let Size { width, height } = size;
        match self {
            Corner::TopLeft => Point::new(0.0, radius),
            Corner::TopRight => Point::new(width - radius, 0.0),
            Corner::BottomRight => Point::new(width, height - radius),
            Corner::BottomLeft => Point::new(radius, height),
        }
    }

    /// The point where the quarter turn of a plain circular corner ends.
    pub(crate) fn turn_end(self, size: Size, radius: f64) -> Point {
        let Size { width, height } = size;
        match self {
            Corner::TopLeft => Point::new(radius, 0.0),
            Corner::TopRight => Point::new(width, radius),
            Corner::BottomRight => Point::new(width - radius, height),
            Corner::BottomLeft => Point::new(0.0, height - radius),
        }
    }

    /// Half of the side each half corner lies on, in traversal order.
    pub(crate) fn half_extents(self, size: Size) -> [f64; 2] {
        let cx = size.width * 0.5;
        let cy = size.height * 0.5;
        match self {
            Corner::TopLeft | Corner::BottomRight => [cy, cx],
            Corner::TopRight | Corner::BottomLeft => [cx, cy],
        }
    }

    /// The frames of the two half corners, in traversal order.
    ///
    /// The first half is traversed along its unit-frame curve, the second
    /// against it.
    pub(crate) fn halves(self, size: Size, radius: f64) -> [HalfFrame; 2] {
        let Size { width, height } = size;
        let r = radius;
        let (first, second) = match self {
            Corner::TopLeft => (
                HalfFrame::new((0.0, r), (0.0, -1.0), (1.0, 0.0)),
                HalfFrame::new((r, 0.0), (-1.0, 0.0), (0.0, 1.0)),
            ),
            Corner::TopRight => (
                HalfFrame::new((width - r, 0.0), (1.0, 0.0), (0.0, 1.0)),
                HalfFrame::new((width, r), (0.0, -1.0), (-1.0, 0.0)),
            ),
            Corner::BottomRight => (
                HalfFrame::new((width, height - r), (0.0, 1.0), (-1.0, 0.0)),
                HalfFrame::new((width - r, height), (1.0, 0.0), (0.0, -1.0)),
            ),
            Corner::BottomLeft => (
                HalfFrame::new((r, height), (-1.0, 0.0), (0.0, -1.0)),
                HalfFrame::new((0.0, height - r), (0.0, 1.0), (1.0, 0.0)),
            ),
        };
        [first, second.reversed()]
    }
}

/// The placement of one half corner.
///
/// A unit-frame point `p` lands at `origin + radius * (p.x * u + p.y * v)`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HalfFrame {
    origin: Point,
    u: Vec2,
    v: Vec2,
    reversed: bool,
}

impl HalfFrame {
    fn new(origin: (f64, f64), u: (f64, f64), v: (f64, f64)) -> HalfFrame {
        HalfFrame {
            origin: origin.into(),
            u: u.into(),
            v: v.into(),
            reversed: false,
        }
    }

    fn reversed(self) -> HalfFrame {
        HalfFrame {
            reversed: true,
            ..self
        }
    }

    /// Is the half traversed against its unit-frame curve?
    pub(crate) fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// The point on the straight edge where a half of the given extension
    /// meets it.
    pub(crate) fn edge_point(&self, radius: f64, extended_fraction: f64) -> Point {
        self.place(Point::new(-extended_fraction, 0.0), radius)
    }

    /// Map a unit-frame point.
    pub(crate) fn place(&self, p: Point, radius: f64) -> Point {
        self.origin + (self.u * p.x + self.v * p.y) * radius
    }

    /// Map a unit-frame curve, reversing it if the half is traversed
    /// against it.
    pub(crate) fn map(&self, curve: &CubicBez, radius: f64) -> CubicBez {
        let placed = curve.map(|p| self.place(p, radius));
        if self.reversed {
            placed.reverse()
        } else {
            placed
        }
    }
}

/// How far a half corner is from the capsule limit on its axis.
///
/// `0` is at or past the capsule limit, `1` has room for the full
/// configuration. A zero radius has all the room it needs; a zero
/// extension makes the ratio a step.
pub(crate) fn non_capsule_ratio(half_extent: f64, radius: f64, extended_fraction: f64) -> f64 {
    if radius == 0.0 {
        return 1.0;
    }
    let room = half_extent / radius - 1.0;
    if extended_fraction == 0.0 {
        return if room > 0.0 { 1.0 } else { 0.0 };
    }
    (room / extended_fraction).max(0.0).min(1.0)
}

/// Edges shorter than this are empty for [`Edges::SkipEmpty`].
///
/// Arc end points carry rounding error from the angle, so exact equality
/// would keep slivers.
const EMPTY_EDGE: f64 = 1e-9;

/// Whether straight edges of zero length are kept.
///
/// The general generators keep them so that the segment count of a
/// rounded rectangle does not depend on its radii. The capsule builders
/// drop them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Edges {
    Keep,
    SkipEmpty,
}

impl Edges {
    pub(crate) fn line_to(self, builder: &mut ContourBuilder, p: Point) {
        if self == Edges::Keep || !builder.current_point().is_near(p, EMPTY_EDGE) {
            builder.line_to(p);
        }
    }

    pub(crate) fn close(self, builder: &mut ContourBuilder) {
        let start = builder.start_point();
        self.line_to(builder, start);
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::FRAC_1_SQRT_2;

    use super::*;

    const SIZE: Size = Size::new(200.0, 100.0);

    #[test]
    fn frames_meet_the_corner_circle() {
        // The unit-frame point at angle 45° on the corner circle.
        let diagonal = Point::new(FRAC_1_SQRT_2, 1.0 - FRAC_1_SQRT_2);
        for corner in Corner::CLOCKWISE {
            let r = 30.0;
            let center = corner.center(SIZE, r);
            let [first, second] = corner.halves(SIZE, r);
            let a = first.place(diagonal, r);
            let b = second.place(diagonal, r);
            assert!(a.is_near(b, 1e-12), "{corner:?}: {a:?} {b:?}");
            assert!((a.distance(center) - r).abs() < 1e-12);
            assert!(!first.is_reversed());
            assert!(second.is_reversed());
        }
    }

    #[test]
    fn halves_follow_the_turn() {
        for corner in Corner::CLOCKWISE {
            let r = 20.0;
            let [first, second] = corner.halves(SIZE, r);
            assert!(first.edge_point(r, 0.0).is_near(corner.turn_start(SIZE, r), 1e-12));
            assert!(second.edge_point(r, 0.0).is_near(corner.turn_end(SIZE, r), 1e-12));
        }
    }

    #[test]
    fn turn_points_lie_on_the_circle() {
        for corner in Corner::CLOCKWISE {
            let r = 25.0;
            let center = corner.center(SIZE, r);
            let start = center + Vec2::from_angle(corner.start_angle()) * r;
            let end = center + Vec2::from_angle(corner.start_angle() + FRAC_PI_2) * r;
            assert!(start.is_near(corner.turn_start(SIZE, r), 1e-12));
            assert!(end.is_near(corner.turn_end(SIZE, r), 1e-12));
        }
    }

    #[test]
    fn extensions_run_along_the_edges() {
        let r = 20.0;
        let [tlv, tlh] = Corner::TopLeft.halves(SIZE, r);
        assert_eq!(tlv.edge_point(r, 0.5), Point::new(0.0, 30.0));
        assert_eq!(tlh.edge_point(r, 0.5), Point::new(30.0, 0.0));
        let [brv, brh] = Corner::BottomRight.halves(SIZE, r);
        assert_eq!(brv.edge_point(r, 0.5), Point::new(200.0, 70.0));
        assert_eq!(brh.edge_point(r, 0.5), Point::new(170.0, 100.0));
    }

    #[test]
    fn ratio_limits() {
        assert_eq!(non_capsule_ratio(50.0, 0.0, 0.5), 1.0);
        assert_eq!(non_capsule_ratio(50.0, 50.0, 0.5), 0.0);
        assert_eq!(non_capsule_ratio(50.0, 40.0, 0.5), 0.5);
        assert_eq!(non_capsule_ratio(50.0, 10.0, 0.5), 1.0);
        assert_eq!(non_capsule_ratio(50.0, 40.0, 0.0), 1.0);
        assert_eq!(non_capsule_ratio(50.0, 50.0, 0.0), 0.0);
    }

    #[test]
    fn skipped_edges() {
        let mut builder = ContourBuilder::new();
        builder.move_to((0.0, 0.0)).unwrap();
        Edges::SkipEmpty.line_to(&mut builder, Point::new(0.0, 0.0));
        Edges::SkipEmpty.line_to(&mut builder, Point::new(1.0, 0.0));
        Edges::Keep.line_to(&mut builder, Point::new(1.0, 0.0));
        Edges::SkipEmpty.close(&mut builder);
        Edges::SkipEmpty.close(&mut builder);
        assert_eq!(builder.build().len(), 3);
    }
}
