// Copyright 2025 the Continuous Corners Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tangent-continuous (G1) corners: plain quarter circles.

use core::f64::consts::FRAC_PI_2;

use crate::corner::{Corner, Edges};
use crate::{Contour, ContourBuilder, ContourError, RoundedRectRadii, Size};

/// The classic rounded rectangle.
pub(crate) fn standard_contour(
    size: Size,
    radii: &RoundedRectRadii,
) -> Result<Contour, ContourError> {
    quarter_circles(size, radii, Edges::Keep)
}

/// The capsule limit: two semicircles joined by the long edges.
pub(crate) fn capsule_contour(size: Size) -> Result<Contour, ContourError> {
    let radii = RoundedRectRadii::from_single_radius(size.max_corner_radius());
    quarter_circles(size, &radii, Edges::SkipEmpty)
}

fn quarter_circles(
    size: Size,
    radii: &RoundedRectRadii,
    edges: Edges,
) -> Result<Contour, ContourError> {
    let mut builder = ContourBuilder::new();
    for (i, corner) in Corner::CLOCKWISE.into_iter().enumerate() {
        let r = corner.radius(radii);
        let entry = corner.turn_start(size, r);
        if i == 0 {
            builder.move_to(entry)?;
        } else {
            edges.line_to(&mut builder, entry);
        }
        if r > 0.0 {
            builder.arc_to(corner.center(size, r), r, corner.start_angle(), FRAC_PI_2);
        }
    }
    edges.close(&mut builder);
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use core::f64::consts::PI;

    use super::*;
    use crate::{PathSegment, Point};

    #[test]
    fn quarter_arcs() {
        let size = Size::new(120.0, 80.0);
        let contour = standard_contour(size, &RoundedRectRadii::from_single_radius(10.0)).unwrap();
        assert_eq!(contour.len(), 8);
        assert!(contour.is_closed(1e-9));
        assert!(contour.is_contiguous(1e-9));
        let area = 120.0 * 80.0 - (4.0 - PI) * 100.0;
        assert!((contour.signed_area() - area).abs() < 1e-9);
        for segment in contour.iter() {
            if let PathSegment::Arc(arc) = segment {
                assert!((arc.sweep_angle - FRAC_PI_2).abs() < 1e-15);
                // Tangent continuous with the neighbouring edges.
                let t0 = segment.unit_tangent(0.0);
                let t1 = segment.unit_tangent(1.0);
                assert!(t0.x.abs() < 1e-12 || t0.y.abs() < 1e-12);
                assert!(t1.x.abs() < 1e-12 || t1.y.abs() < 1e-12);
            }
        }
        assert_eq!(contour.start(), Some(Point::new(0.0, 10.0)));
        let last = contour.segments().last().unwrap();
        assert!(matches!(last, PathSegment::Line(_)));
        assert!(last.start().is_near(Point::new(0.0, 70.0), 1e-12));
    }

    #[test]
    fn semicircle_ends() {
        let contour = capsule_contour(Size::new(100.0, 40.0)).unwrap();
        // Four quarter arcs and the two long edges.
        assert_eq!(contour.len(), 6);
        assert!(contour.is_closed(1e-9));
        let area = 60.0 * 40.0 + PI * 400.0;
        assert!((contour.signed_area() - area).abs() < 1e-9);
    }
}
