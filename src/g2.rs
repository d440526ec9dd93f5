// Copyright 2025 the Continuous Corners Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curvature-continuous (G2) corners.
//!
//! Each corner is a Bézier half on each edge with a shared circular arc in
//! between. As a corner's radius approaches half of a side, the half on
//! that side runs out of straight edge to extend into, and the corner's
//! parameters blend from the main configuration to the capsule one. Two
//! ratios drive the blend: each half's own [`non_capsule_ratio`] shapes
//! that half, and the smaller of the two shapes the shared arc so that
//! both halves always meet it.

use core::f64::consts::FRAC_PI_2;

use crate::cache;
use crate::common::lerp;
use crate::corner::{non_capsule_ratio, Corner, Edges, HalfFrame};
use crate::{
    Contour, ContourBuilder, ContourError, CubicBez, G2Config, G2Continuity, Point,
    RoundedRectRadii, Size, Vec2,
};

/// A corner with its parameters resolved for one rectangle.
struct BlendedCorner {
    corner: Corner,
    radius: f64,
    arc_fraction: f64,
    arc_curvature_scale: f64,
    frames: [HalfFrame; 2],
    /// Unit-frame curves of the two halves, absent for a zero radius.
    curves: Option<[CubicBez; 2]>,
}

impl BlendedCorner {
    /// The point where the corner leaves the preceding edge.
    fn entry(&self) -> Point {
        let extension = match &self.curves {
            Some([first, _]) => -first.p0.x,
            None => 0.0,
        };
        self.frames[0].edge_point(self.radius, extension)
    }

    fn emit(&self, size: Size, builder: &mut ContourBuilder) {
        let Some([first, second]) = &self.curves else {
            return;
        };
        let r = self.radius;
        emit_half(builder, &self.frames[0], first, r);

        let sweep = FRAC_PI_2 * self.arc_fraction;
        if sweep != 0.0 {
            let start = self.corner.start_angle() + FRAC_PI_2 * (1.0 - self.arc_fraction) * 0.5;
            let center = self.corner.center(size, r);
            let end = center + Vec2::from_angle(start + sweep) * r;
            if self.arc_curvature_scale == 0.0 {
                builder.line_to(end);
            } else if self.arc_curvature_scale == 1.0 {
                builder.arc_to(center, r, start, sweep);
            } else {
                // Not a curvature-scaled ellipse: a single arc of the scaled
                // radius through the unscaled end point.
                builder.arc_to_point(end, r / self.arc_curvature_scale);
            }
        }

        emit_half(builder, &self.frames[1], second, r);
    }
}

fn emit_half(builder: &mut ContourBuilder, frame: &HalfFrame, unit: &CubicBez, radius: f64) {
    if unit.is_point() {
        return;
    }
    let curve = frame.map(unit, radius);
    builder.cubic_to(curve.p1, curve.p2, curve.p3);
}

impl G2Continuity {
    /// The general contour, without the capsule and circle shortcuts.
    pub(crate) fn standard_contour(
        &self,
        size: Size,
        radii: &RoundedRectRadii,
    ) -> Result<Contour, ContourError> {
        self.blended_contour(size, radii, Edges::Keep)
    }

    /// The capsule limit of `size`: every radius at half the shorter side.
    pub(crate) fn capsule_contour(&self, size: Size) -> Result<Contour, ContourError> {
        let radii = RoundedRectRadii::from_single_radius(size.max_corner_radius());
        self.blended_contour(size, &radii, Edges::SkipEmpty)
    }

    fn blended_contour(
        &self,
        size: Size,
        radii: &RoundedRectRadii,
        edges: Edges,
    ) -> Result<Contour, ContourError> {
        let mut builder = ContourBuilder::new();
        for (i, corner) in Corner::CLOCKWISE.into_iter().enumerate() {
            let blended = self.blend(size, corner, corner.radius(radii))?;
            if i == 0 {
                builder.move_to(blended.entry())?;
            } else {
                edges.line_to(&mut builder, blended.entry());
            }
            blended.emit(size, &mut builder);
        }
        edges.close(&mut builder);
        Ok(builder.build())
    }

    fn blend(&self, size: Size, corner: Corner, radius: f64) -> Result<BlendedCorner, ContourError> {
        let main = &self.config;
        let capsule = &self.capsule_config;
        let extents = corner.half_extents(size);
        let ratios = extents.map(|extent| non_capsule_ratio(extent, radius, main.extended_fraction));
        let corner_ratio = ratios[0].min(ratios[1]);

        let arc_fraction = lerp(capsule.arc_fraction, main.arc_fraction, corner_ratio);
        let arc_curvature_scale = lerp(
            capsule.arc_curvature_scale,
            main.arc_curvature_scale,
            corner_ratio,
        );

        let curves = if radius > 0.0 {
            let solve = |half: usize| {
                // Never past the middle of the side, whatever the capsule
                // extension.
                let extended_fraction = lerp(
                    capsule.extended_fraction,
                    main.extended_fraction,
                    ratios[half],
                )
                .min(extents[half] / radius - 1.0)
                .max(0.0);
                let bezier_curvature_scale = lerp(
                    capsule.bezier_curvature_scale,
                    main.bezier_curvature_scale,
                    ratios[half],
                );
                cache::base_corner(&G2Config::new(
                    extended_fraction,
                    arc_fraction,
                    bezier_curvature_scale,
                    arc_curvature_scale,
                ))
            };
            Some([solve(0)?, solve(1)?])
        } else {
            None
        };

        Ok(BlendedCorner {
            corner,
            radius,
            arc_fraction,
            arc_curvature_scale,
            frames: corner.halves(size, radius),
            curves,
        })
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::{PathSegment, Rect};

    fn rotate_quarter(p: Point, center: Point) -> Point {
        Point::new(center.x - (p.y - center.y), center.y + (p.x - center.x))
    }

    #[test]
    fn wide_rectangle_has_sixteen_segments() {
        let contour = G2Continuity::default()
            .standard_contour(Size::new(200.0, 100.0), &RoundedRectRadii::from_single_radius(40.0))
            .unwrap();
        assert_eq!(contour.len(), 16);
        assert!(contour.is_closed(1e-9));
        assert!(contour.is_contiguous(1e-9));
        assert!(contour.signed_area() > 0.0);
        let bbox = contour.bounding_box();
        let expected = Rect::new(0.0, 0.0, 200.0, 100.0);
        assert!((bbox.x0 - expected.x0).abs() < 1e-9);
        assert!((bbox.y0 - expected.y0).abs() < 1e-9);
        assert!((bbox.x1 - expected.x1).abs() < 1e-9);
        assert!((bbox.y1 - expected.y1).abs() < 1e-9);
        // The vertical halves use up the whole left and right edges.
        assert_eq!(contour.start(), Some(Point::new(0.0, 50.0)));
        let kinds = contour
            .iter()
            .take(4)
            .map(|s| match s {
                PathSegment::Line(_) => 'l',
                PathSegment::Arc(_) => 'a',
                PathSegment::Circle(_) => 'o',
                PathSegment::Cubic(_) => 'c',
            })
            .collect::<alloc::string::String>();
        assert_eq!(kinds, "cacl");
    }

    #[test]
    fn junctions_match_tangent_and_curvature() {
        let continuity = G2Continuity::default();
        let r = 20.0;
        let contour = continuity
            .standard_contour(Size::new(200.0, 100.0), &RoundedRectRadii::from_single_radius(r))
            .unwrap();
        let segments = contour.segments();
        let scale = continuity.config.arc_curvature_scale;
        let mut arcs = 0;
        for (i, segment) in segments.iter().enumerate() {
            let PathSegment::Arc(arc) = segment else {
                continue;
            };
            arcs += 1;
            assert!((arc.curvature() - scale / r).abs() < 1e-9);
            let before = &segments[i - 1];
            let after = &segments[i + 1];
            let t_in = before.unit_tangent(1.0) - segment.unit_tangent(0.0);
            let t_out = segment.unit_tangent(1.0) - after.unit_tangent(0.0);
            assert!(t_in.hypot() < 1e-6, "{t_in:?}");
            assert!(t_out.hypot() < 1e-6, "{t_out:?}");
            assert!((before.curvature(1.0) - segment.curvature(0.0)).abs() < 1e-6);
            assert!((segment.curvature(1.0) - after.curvature(0.0)).abs() < 1e-6);
            // Straight edges join with zero curvature.
            assert!(before.curvature(0.0).abs() < 1e-9);
            assert!(after.curvature(1.0).abs() < 1e-9);
        }
        assert_eq!(arcs, 4);
    }

    #[test]
    fn corners_are_quarter_turns_of_each_other() {
        let contour = G2Continuity::default()
            .standard_contour(Size::new(100.0, 100.0), &RoundedRectRadii::from_single_radius(30.0))
            .unwrap();
        let center = Point::new(50.0, 50.0);
        let segments = contour.segments();
        assert_eq!(segments.len(), 16);
        for corner in 0..3 {
            for k in 0..4 {
                let a = &segments[corner * 4 + k];
                let b = &segments[corner * 4 + 4 + k];
                for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
                    let p = rotate_quarter(a.eval(t), center);
                    assert!(p.is_near(b.eval(t), 1e-9), "{corner} {k} {t}");
                }
            }
        }
    }

    #[test]
    fn zero_radius_corners_are_square() {
        let size = Size::new(30.0, 20.0);
        let contour = G2Continuity::default()
            .standard_contour(size, &RoundedRectRadii::from_single_radius(0.0))
            .unwrap();
        assert_eq!(contour.len(), 4);
        assert!((contour.signed_area() - 600.0).abs() < 1e-12);
        assert_eq!(contour.start(), Some(Point::ZERO));

        let mixed = G2Continuity::default()
            .standard_contour(size, &RoundedRectRadii::new(0.0, 5.0, 0.0, 5.0))
            .unwrap();
        assert_eq!(mixed.len(), 10);
        assert!(mixed.is_closed(1e-9));
        assert!(mixed.is_contiguous(1e-9));
    }

    #[test]
    fn converges_to_capsule() {
        let continuity = G2Continuity::default();
        let size = Size::new(200.0, 100.0);
        let capsule = continuity.capsule_contour(size).unwrap();
        assert!(capsule.is_closed(1e-9));
        assert!(capsule.is_contiguous(1e-9));
        // The end halves have no room left, so the short edges vanish.
        assert_eq!(capsule.len(), 14);
        for gap in [1e-3, 1e-6, 1e-9] {
            let near = continuity
                .standard_contour(size, &RoundedRectRadii::from_single_radius(50.0 - gap))
                .unwrap();
            let near = near
                .iter()
                .filter(|s| !matches!(s, PathSegment::Line(l) if l.p0.distance(l.p1) < gap * 10.0))
                .collect::<alloc::vec::Vec<_>>();
            assert_eq!(near.len(), capsule.len());
            let mut distance = 0.0_f64;
            for (a, b) in near.iter().zip(capsule.iter()) {
                for t in [0.0, 0.3, 0.7, 1.0] {
                    distance = distance.max(a.eval(t).distance(b.eval(t)));
                }
            }
            assert!(distance < gap * 100.0, "{gap}: {distance}");
        }
    }

    #[test]
    fn infinite_arc_radius_draws_a_line() {
        let config = G2Config::new(0.5, 0.45, 1.0, 0.0);
        let contour = G2Continuity::new(config, config)
            .standard_contour(Size::new(200.0, 100.0), &RoundedRectRadii::from_single_radius(20.0))
            .unwrap();
        assert_eq!(contour.len(), 16);
        assert!(contour.is_closed(1e-9));
        assert!(contour.is_contiguous(1e-9));
        assert!(contour.iter().all(|s| !matches!(s, PathSegment::Arc(_))));
    }

    #[test]
    fn unit_scales_draw_true_arcs() {
        let plain = G2Config::new(1.0, 0.25, 1.0, 1.0);
        let contour = G2Continuity::new(plain, plain)
            .standard_contour(Size::new(200.0, 200.0), &RoundedRectRadii::from_single_radius(20.0))
            .unwrap();
        let PathSegment::Arc(arc) = contour.segments()[1] else {
            panic!("expected an arc");
        };
        assert_eq!(arc.center, Point::new(20.0, 20.0));
        assert_eq!(arc.radius, 20.0);
        assert!((arc.sweep_angle - FRAC_PI_2 * plain.arc_fraction).abs() < 1e-15);
    }

    #[test]
    fn quarter_circle_config_has_no_halves() {
        let g1 = G2Continuity::new(G2Config::G1_EQUIVALENT, G2Config::G1_EQUIVALENT);
        let contour = g1
            .standard_contour(Size::new(120.0, 80.0), &RoundedRectRadii::from_single_radius(10.0))
            .unwrap();
        assert_eq!(contour.len(), 8);
        let expected = crate::g1::standard_contour(
            Size::new(120.0, 80.0),
            &RoundedRectRadii::from_single_radius(10.0),
        )
        .unwrap();
        assert!((contour.signed_area() - expected.signed_area()).abs() < 1e-9);
    }

    #[test]
    fn each_half_extends_by_its_own_ratio() {
        let g2 = G2Continuity::new(G2Config::ROUNDED_RECTANGLE, G2Config::CAPSULE);
        let size = Size::new(200.0, 100.0);
        let contour = g2
            .standard_contour(size, &RoundedRectRadii::from_single_radius(45.0))
            .unwrap();
        assert_eq!(contour.len(), 16);
        assert!(contour.is_closed(1e-9));
        assert!(contour.is_contiguous(1e-9));

        // The vertical half is near the capsule limit and only reaches the
        // middle of the short side.
        assert!(contour.start().unwrap().is_near(Point::new(0.0, 50.0), 1e-9));
        // The horizontal half has room for the full main extension.
        let PathSegment::Line(top) = contour.segments()[3] else {
            panic!("expected the top edge");
        };
        assert!(top.p0.is_near(Point::new(90.0, 0.0), 1e-9), "{:?}", top.p0);
        assert!(top.p1.is_near(Point::new(110.0, 0.0), 1e-9), "{:?}", top.p1);
    }
}
