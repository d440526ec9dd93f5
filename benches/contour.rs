#![feature(test)]
extern crate test;
use test::Bencher;

use continuous_corners::{Continuity, G2Config, G2Hermite, G3Continuity, RoundedRectRadii, Size};

static SIZE: Size = Size::new(320.0, 180.0);
static RADII: RoundedRectRadii = RoundedRectRadii::new(48.0, 32.0, 60.0, 12.0);

#[bench]
fn bench_g1_contour(b: &mut Bencher) {
    b.iter(|| test::black_box(Continuity::G1.contour(SIZE, &RADII)));
}

#[bench]
fn bench_g2_contour(b: &mut Bencher) {
    let continuity = Continuity::default();
    b.iter(|| test::black_box(continuity.contour(SIZE, &RADII)));
}

#[bench]
fn bench_g3_contour(b: &mut Bencher) {
    let continuity = Continuity::G3(G3Continuity::default());
    b.iter(|| test::black_box(continuity.contour(SIZE, &RADII)));
}

#[bench]
fn bench_g2_capsule(b: &mut Bencher) {
    let continuity = Continuity::default();
    b.iter(|| test::black_box(continuity.capsule_contour(SIZE)));
}

// Uncached, so this measures the solver itself.
#[bench]
fn bench_base_corner_solve(b: &mut Bencher) {
    let config = test::black_box(G2Config::ROUNDED_RECTANGLE);
    b.iter(|| test::black_box(continuous_corners::base_corner_bezier(&config)));
}

#[bench]
fn bench_hermite_solve(b: &mut Bencher) {
    let hermite = G2Hermite {
        start: (-0.5, 0.0).into(),
        end: (0.3, 0.05).into(),
        start_angle: 0.0,
        end_angle: 0.35,
        start_curvature: 0.0,
        end_curvature: 1.1,
    };
    b.iter(|| test::black_box(test::black_box(hermite).solve()));
}
