// Copyright 2025 the Continuous Corners Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contours: ordered, contiguous sequences of path segments.

use alloc::vec::Vec;
use core::slice;

use crate::{
    Arc, ArcAppendIter, BezPath, Circle, ContourError, CubicBez, Line, PathEl, PathSegment, Point,
    Rect, Vec2,
};

/// A single contour made of [`PathSegment`]s.
///
/// Each segment starts where the previous one ends. Contours produced by
/// [`Continuity`](crate::Continuity) are closed and run clockwise on screen
/// (y pointing down), so their [`signed_area`](Contour::signed_area) is
/// positive.
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contour(Vec<PathSegment>);

/// Accumulates segments for one [`Contour`], tracking the current point.
///
/// A builder is created, fed, and consumed by [`build`](ContourBuilder::build)
/// within a single generation call.
#[derive(Clone, Default, Debug)]
pub struct ContourBuilder {
    start: Point,
    current: Point,
    started: bool,
    segments: Vec<PathSegment>,
}

impl ContourBuilder {
    /// Create an empty builder whose current point is the origin.
    pub fn new() -> ContourBuilder {
        ContourBuilder::default()
    }

    /// Set the start point of the contour.
    ///
    /// This may be called at most once, before any other segment is added.
    pub fn move_to(&mut self, p: impl Into<Point>) -> Result<(), ContourError> {
        if self.started {
            return Err(ContourError::AlreadyStarted);
        }
        self.started = true;
        self.start = p.into();
        self.current = self.start;
        Ok(())
    }

    /// Add a straight line from the current point.
    pub fn line_to(&mut self, p: impl Into<Point>) {
        self.push(Line::new(self.current, p).into());
    }

    /// Add a circular arc given by its centre and angles.
    ///
    /// The arc is not required to begin at the current point; the current
    /// point becomes the arc's end.
    pub fn arc_to(
        &mut self,
        center: impl Into<Point>,
        radius: f64,
        start_angle: f64,
        sweep_angle: f64,
    ) {
        self.push(Arc::new(center, radius, start_angle, sweep_angle).into());
    }

    /// Add a circular arc of the given radius from the current point to `p`.
    ///
    /// A positive radius sweeps clockwise on screen, a negative one
    /// counter-clockwise. See [`Arc::from_endpoints`].
    pub fn arc_to_point(&mut self, p: impl Into<Point>, radius: f64) {
        self.push(Arc::from_endpoints(self.current, p.into(), radius).into());
    }

    /// Add a cubic Bézier from the current point.
    pub fn cubic_to(&mut self, p1: impl Into<Point>, p2: impl Into<Point>, p3: impl Into<Point>) {
        self.push(CubicBez::new(self.current, p1.into(), p2.into(), p3.into()).into());
    }

    /// Add a line back to the start point.
    ///
    /// The line is added even when it has zero length.
    pub fn close(&mut self) {
        self.line_to(self.start);
    }

    /// The end of the last added segment.
    pub fn current_point(&self) -> Point {
        self.current
    }

    /// The point given to [`move_to`](ContourBuilder::move_to).
    pub fn start_point(&self) -> Point {
        self.start
    }

    /// Finish building.
    pub fn build(self) -> Contour {
        Contour(self.segments)
    }

    fn push(&mut self, segment: PathSegment) {
        self.current = segment.end();
        self.segments.push(segment);
    }
}

impl Contour {
    /// A contour from a vector of segments.
    pub fn from_segments(segments: Vec<PathSegment>) -> Contour {
        Contour(segments)
    }

    /// A contour made of a single full circle.
    pub fn circle(center: impl Into<Point>, radius: f64) -> Contour {
        Contour(alloc::vec![Circle::new(center, radius).into()])
    }

    /// The segments of this contour.
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Consume the contour, returning its segments.
    pub fn into_segments(self) -> Vec<PathSegment> {
        self.0
    }

    /// The number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the contour has no segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the segments.
    pub fn iter(&self) -> slice::Iter<'_, PathSegment> {
        self.0.iter()
    }

    /// The start point of the first segment.
    pub fn start(&self) -> Option<Point> {
        self.0.first().map(PathSegment::start)
    }

    /// The end point of the last segment.
    pub fn end(&self) -> Option<Point> {
        self.0.last().map(PathSegment::end)
    }

    /// Whether the contour ends where it starts.
    pub fn is_closed(&self, tolerance: f64) -> bool {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => start.is_near(end, tolerance),
            _ => false,
        }
    }

    /// Whether every segment starts where the previous one ends.
    pub fn is_contiguous(&self, tolerance: f64) -> bool {
        self.0
            .windows(2)
            .all(|pair| pair[0].end().is_near(pair[1].start(), tolerance))
    }

    /// The signed area enclosed by the contour.
    ///
    /// Positive for clockwise traversal on screen. Only meaningful for a
    /// closed contour.
    pub fn signed_area(&self) -> f64 {
        self.0.iter().map(PathSegment::signed_area).sum()
    }

    /// The smallest rectangle enclosing every segment.
    ///
    /// An empty contour has [`Rect::ZERO`] as its bounding box.
    pub fn bounding_box(&self) -> Rect {
        let mut iter = self.0.iter().map(PathSegment::bounding_box);
        let Some(first) = iter.next() else {
            return Rect::ZERO;
        };
        iter.fold(first, |acc, bbox| acc.union(bbox))
    }

    /// The contour moved by `offset`.
    #[must_use]
    pub fn translate(&self, offset: Vec2) -> Contour {
        Contour(self.0.iter().map(|seg| seg.translate(offset)).collect())
    }

    /// Drawing commands for this contour.
    ///
    /// Lines and cubics map to one element each; arcs and circles are
    /// approximated by cubic Béziers within `tolerance`. The sequence starts
    /// with a `MoveTo` and ends with a `ClosePath`.
    pub fn path_elements(&self, tolerance: f64) -> ContourPathIter<'_> {
        ContourPathIter {
            segments: self.0.iter(),
            tolerance,
            state: IterState::Start,
            arc: None,
        }
    }

    /// Convert to a Bézier path.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        self.path_elements(tolerance).collect()
    }

    /// Is every segment finite?
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(PathSegment::is_finite)
    }
}

impl<'a> IntoIterator for &'a Contour {
    type Item = &'a PathSegment;
    type IntoIter = slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<PathSegment> for Contour {
    fn from_iter<T: IntoIterator<Item = PathSegment>>(iter: T) -> Self {
        Contour(iter.into_iter().collect())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum IterState {
    Start,
    Body,
    Done,
}

/// The iterator returned by [`Contour::path_elements`].
#[derive(Clone, Debug)]
pub struct ContourPathIter<'a> {
    segments: slice::Iter<'a, PathSegment>,
    tolerance: f64,
    state: IterState,
    arc: Option<ArcAppendIter>,
}

impl Iterator for ContourPathIter<'_> {
    type Item = PathEl;

    fn next(&mut self) -> Option<PathEl> {
        loop {
            match self.state {
                IterState::Done => return None,
                IterState::Start => {
                    let first = self.segments.as_slice().first()?;
                    self.state = IterState::Body;
                    return Some(PathEl::MoveTo(first.start()));
                }
                IterState::Body => {}
            }
            if let Some(arc) = &mut self.arc {
                if let Some(el) = arc.next() {
                    return Some(el);
                }
                self.arc = None;
            }
            match self.segments.next() {
                Some(PathSegment::Line(line)) => return Some(PathEl::LineTo(line.p1)),
                Some(PathSegment::Cubic(c)) => return Some(PathEl::CurveTo(c.p1, c.p2, c.p3)),
                Some(PathSegment::Arc(arc)) => self.arc = Some(arc.append_iter(self.tolerance)),
                Some(PathSegment::Circle(circle)) => {
                    self.arc = Some(circle.to_arc().append_iter(self.tolerance));
                }
                None => {
                    self.state = IterState::Done;
                    return Some(PathEl::ClosePath);
                }
            }
        }
    }
}
