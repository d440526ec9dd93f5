// Copyright 2025 the Continuous Corners Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positionally continuous (G0) corners: straight diagonal cuts.

use crate::corner::{Corner, Edges};
use crate::{Contour, ContourBuilder, ContourError, RoundedRectRadii, Size};

/// A polygon that cuts each corner from `radius` along one edge to
/// `radius` along the other.
pub(crate) fn standard_contour(
    size: Size,
    radii: &RoundedRectRadii,
) -> Result<Contour, ContourError> {
    cut_corners(size, radii, Edges::Keep)
}

/// The capsule limit, a hexagon. Also used for the circle limit, where it
/// becomes the inscribed diamond.
pub(crate) fn capsule_contour(size: Size) -> Result<Contour, ContourError> {
    let radii = RoundedRectRadii::from_single_radius(size.max_corner_radius());
    cut_corners(size, &radii, Edges::SkipEmpty)
}

fn cut_corners(
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
            builder.line_to(corner.turn_end(size, r));
        }
    }
    edges.close(&mut builder);
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathSegment;

    #[test]
    fn diagonal_cuts() {
        let contour = standard_contour(
            Size::new(100.0, 60.0),
            &RoundedRectRadii::new(10.0, 0.0, 20.0, 5.0),
        )
        .unwrap();
        // Three cuts, four edges.
        assert_eq!(contour.len(), 7);
        assert!(contour.iter().all(|s| matches!(s, PathSegment::Line(_))));
        assert!(contour.is_closed(1e-9));
        assert!(contour.is_contiguous(1e-9));
        let area = 100.0 * 60.0 - (10.0 * 10.0 + 20.0 * 20.0 + 5.0 * 5.0) * 0.5;
        assert!((contour.signed_area() - area).abs() < 1e-9);
    }

    #[test]
    fn diamond() {
        let contour = capsule_contour(Size::new(40.0, 40.0)).unwrap();
        assert_eq!(contour.len(), 4);
        assert!((contour.signed_area() - 800.0).abs() < 1e-9);
    }
}
