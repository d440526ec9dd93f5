// Copyright 2025 the Continuous Corners Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The segments a contour is made of.

use crate::{
    Arc, Circle, CubicBez, Line, ParamCurve, ParamCurveArea, ParamCurveCurvature,
    ParamCurveExtrema, ParamCurveTangent, Point, Rect, Vec2,
};

/// A single drawable piece of a [`Contour`](crate::Contour).
///
/// This is a closed set: every variant supports evaluation of position,
/// unit tangent and signed curvature at a parameter `t` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathSegment {
    /// A straight line.
    Line(Line),
    /// A circular arc.
    Arc(Arc),
    /// A full circle, starting and ending at its rightmost point.
    Circle(Circle),
    /// A cubic Bézier segment.
    Cubic(CubicBez),
}

impl PathSegment {
    /// The start point of the segment.
    #[inline]
    pub fn start(&self) -> Point {
        match self {
            PathSegment::Line(line) => line.start(),
            PathSegment::Arc(arc) => arc.start(),
            PathSegment::Circle(circle) => circle.start(),
            PathSegment::Cubic(cubic) => cubic.start(),
        }
    }

    /// The end point of the segment.
    #[inline]
    pub fn end(&self) -> Point {
        match self {
            PathSegment::Line(line) => line.end(),
            PathSegment::Arc(arc) => arc.end(),
            PathSegment::Circle(circle) => circle.end(),
            PathSegment::Cubic(cubic) => cubic.end(),
        }
    }

    /// The position at parameter `t`.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        match self {
            PathSegment::Line(line) => line.eval(t),
            PathSegment::Arc(arc) => arc.eval(t),
            PathSegment::Circle(circle) => circle.eval(t),
            PathSegment::Cubic(cubic) => cubic.eval(t),
        }
    }

    /// The unit tangent at parameter `t`.
    ///
    /// This is NaN where the segment has no direction, as for a zero-length
    /// line.
    #[inline]
    pub fn unit_tangent(&self, t: f64) -> Vec2 {
        match self {
            PathSegment::Line(line) => line.unit_tangent(t),
            PathSegment::Arc(arc) => arc.unit_tangent(t),
            PathSegment::Circle(circle) => circle.unit_tangent(t),
            PathSegment::Cubic(cubic) => cubic.unit_tangent(t),
        }
    }

    /// The signed curvature at parameter `t`.
    ///
    /// Positive values turn clockwise on screen. Lines have zero curvature
    /// and circular segments `±1/radius`.
    #[inline]
    pub fn curvature(&self, t: f64) -> f64 {
        match self {
            PathSegment::Line(line) => line.curvature(t),
            PathSegment::Arc(arc) => arc.curvature(),
            PathSegment::Circle(circle) => circle.radius.recip(),
            PathSegment::Cubic(cubic) => cubic.curvature(t),
        }
    }

    /// The signed area contribution of the segment.
    ///
    /// Summed over a closed contour this is the enclosed area, positive for
    /// clockwise traversal on screen.
    pub fn signed_area(&self) -> f64 {
        match self {
            PathSegment::Line(line) => line.signed_area(),
            PathSegment::Arc(arc) => arc.signed_area(),
            PathSegment::Circle(circle) => circle.signed_area(),
            PathSegment::Cubic(cubic) => cubic.signed_area(),
        }
    }

    /// The smallest rectangle enclosing the segment.
    pub fn bounding_box(&self) -> Rect {
        match self {
            PathSegment::Line(line) => line.bounding_box(),
            PathSegment::Arc(arc) => arc.bounding_box(),
            PathSegment::Circle(circle) => circle.bounding_box(),
            PathSegment::Cubic(cubic) => cubic.bounding_box(),
        }
    }

    /// The segment moved by `offset`.
    #[must_use]
    pub fn translate(&self, offset: Vec2) -> PathSegment {
        match *self {
            PathSegment::Line(line) => PathSegment::Line(line + offset),
            PathSegment::Arc(arc) => PathSegment::Arc(Arc {
                center: arc.center + offset,
                ..arc
            }),
            PathSegment::Circle(circle) => PathSegment::Circle(circle + offset),
            PathSegment::Cubic(cubic) => PathSegment::Cubic(cubic + offset),
        }
    }

    /// Is this segment finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        match self {
            PathSegment::Line(line) => line.is_finite(),
            PathSegment::Arc(arc) => arc.is_finite(),
            PathSegment::Circle(circle) => circle.is_finite(),
            PathSegment::Cubic(cubic) => cubic.is_finite(),
        }
    }
}

impl From<Line> for PathSegment {
    fn from(line: Line) -> Self {
        PathSegment::Line(line)
    }
}

impl From<Arc> for PathSegment {
    fn from(arc: Arc) -> Self {
        PathSegment::Arc(arc)
    }
}

impl From<Circle> for PathSegment {
    fn from(circle: Circle) -> Self {
        PathSegment::Circle(circle)
    }
}

impl From<CubicBez> for PathSegment {
    fn from(cubic: CubicBez) -> Self {
        PathSegment::Cubic(cubic)
    }
}
