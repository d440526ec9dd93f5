// Copyright 2025 the Continuous Corners Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle with continuously rounded corners.

use crate::{BezPath, Continuity, Contour, ContourError, Point, Rect, RoundedRectRadii, Size};

/// A rectangle with rounded corners and a choice of corner continuity.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinuousRoundedRect {
    /// Coordinates of the rectangle.
    pub rect: Rect,
    /// Radius of each corner.
    pub radii: RoundedRectRadii,
    /// How the corners join the edges.
    pub continuity: Continuity,
}

impl ContinuousRoundedRect {
    /// A new rounded rectangle from its rectangle, radii and continuity.
    #[inline]
    pub fn new(
        rect: Rect,
        radii: impl Into<RoundedRectRadii>,
        continuity: Continuity,
    ) -> ContinuousRoundedRect {
        ContinuousRoundedRect {
            rect,
            radii: radii.into(),
            continuity,
        }
    }

    /// A new rounded rectangle from origin and size.
    #[inline]
    pub fn from_origin_size(
        origin: impl Into<Point>,
        size: impl Into<Size>,
        radii: impl Into<RoundedRectRadii>,
        continuity: Continuity,
    ) -> ContinuousRoundedRect {
        ContinuousRoundedRect::new(Rect::from_origin_size(origin, size), radii, continuity)
    }

    /// The fully rounded rectangle: a capsule, or a circle when square.
    #[inline]
    pub fn capsule(rect: Rect, continuity: Continuity) -> ContinuousRoundedRect {
        let radius = rect.abs().size().max_corner_radius();
        ContinuousRoundedRect::new(rect, radius, continuity)
    }

    /// The width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// The height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// The rounded rectangle inside this one, `padding` away on every side.
    ///
    /// Each radius shrinks by the same amount, so that the corners of the
    /// two shapes stay concentric. A negative padding grows the shape.
    #[must_use]
    pub fn concentric(&self, padding: f64) -> ContinuousRoundedRect {
        ContinuousRoundedRect {
            rect: self.rect.inset(padding),
            radii: self.radii.shrink(padding),
            continuity: self.continuity,
        }
    }

    /// The outline, in the coordinates of `rect`.
    ///
    /// The rectangle is normalized and radii are clamped to fit before the
    /// outline is generated.
    pub fn contour(&self) -> Result<Contour, ContourError> {
        let rect = self.rect.abs();
        let size = rect.size();
        let radii = self.radii.clamped(size);
        let contour = self.continuity.contour(size, &radii)?;
        Ok(contour.translate(rect.origin().to_vec2()))
    }

    /// The outline as a Bézier path, with arcs approximated within
    /// `tolerance`.
    pub fn to_bez_path(&self, tolerance: f64) -> Result<BezPath, ContourError> {
        Ok(self.contour()?.to_bez_path(tolerance))
    }

    /// Is this rounded rectangle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.rect.is_finite() && self.radii.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{G3Continuity, PathEl, PathSegment};

    #[test]
    fn placed_at_origin() {
        let shape = ContinuousRoundedRect::from_origin_size(
            (30.0, -20.0),
            (200.0, 100.0),
            40.0,
            Continuity::default(),
        );
        let contour = shape.contour().unwrap();
        let at_zero = Continuity::default()
            .contour(Size::new(200.0, 100.0), &RoundedRectRadii::from_single_radius(40.0))
            .unwrap();
        assert_eq!(contour.len(), at_zero.len());
        assert!(contour.start().unwrap().is_near(Point::new(30.0, 30.0), 1e-12));
        let bbox = contour.bounding_box();
        assert!((bbox.x0 - 30.0).abs() < 1e-9);
        assert!((bbox.y0 + 20.0).abs() < 1e-9);
        assert!((bbox.x1 - 230.0).abs() < 1e-9);
        assert!((bbox.y1 - 80.0).abs() < 1e-9);
        assert!((contour.signed_area() - at_zero.signed_area()).abs() < 1e-6);
    }

    #[test]
    fn oversized_radii_are_clamped() {
        let rect = Rect::new(0.0, 0.0, 120.0, 60.0);
        let oversized = ContinuousRoundedRect::new(rect, 500.0, Continuity::G1);
        let capsule = ContinuousRoundedRect::capsule(rect, Continuity::G1);
        assert_eq!(oversized.contour().unwrap(), capsule.contour().unwrap());

        let negative = ContinuousRoundedRect::new(rect, -5.0, Continuity::G1);
        assert_eq!(negative.contour().unwrap().len(), 4);
    }

    #[test]
    fn flipped_rect_is_normalized() {
        let shape = ContinuousRoundedRect::new(
            Rect::new(100.0, 50.0, 0.0, 0.0),
            20.0,
            Continuity::G3(G3Continuity::default()),
        );
        let contour = shape.contour().unwrap();
        assert!(contour.signed_area() > 0.0);
        // The extension fills the remaining quarter radius of the short side.
        assert!(contour.start().unwrap().is_near(Point::new(0.0, 25.0), 1e-9));
    }

    #[test]
    fn square_capsule_is_a_circle() {
        let shape = ContinuousRoundedRect::capsule(
            Rect::new(10.0, 10.0, 50.0, 50.0),
            Continuity::default(),
        );
        let contour = shape.contour().unwrap();
        let [PathSegment::Circle(circle)] = contour.segments() else {
            panic!("expected a single circle");
        };
        assert_eq!(circle.center, Point::new(30.0, 30.0));
        assert_eq!(circle.radius, 20.0);
    }

    #[test]
    fn concentric_insets() {
        let outer = ContinuousRoundedRect::new(
            Rect::new(0.0, 0.0, 100.0, 80.0),
            RoundedRectRadii::new(24.0, 8.0, 0.0, 30.0),
            Continuity::default(),
        );
        let inner = outer.concentric(10.0);
        assert_eq!(inner.rect, Rect::new(10.0, 10.0, 90.0, 70.0));
        assert_eq!(inner.radii, RoundedRectRadii::new(14.0, 0.0, 0.0, 20.0));
        assert_eq!(inner.continuity, outer.continuity);
        assert_eq!(outer.concentric(0.0), outer);
    }

    #[test]
    fn bez_path_is_closed() {
        let shape = ContinuousRoundedRect::from_origin_size(
            (0.0, 0.0),
            (80.0, 40.0),
            12.0,
            Continuity::default(),
        );
        let path = shape.to_bez_path(0.1).unwrap();
        let elements = path.elements();
        assert!(matches!(elements.first(), Some(PathEl::MoveTo(_))));
        assert!(matches!(elements.last(), Some(PathEl::ClosePath)));
        assert!(elements.iter().any(|el| matches!(el, PathEl::CurveTo(..))));
    }
}
