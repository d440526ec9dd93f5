// Copyright 2025 the Continuous Corners Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The family of corner continuities.

use crate::{
    g0, g1, Contour, ContourError, G2Config, G2Continuity, G3Continuity, RoundedRectRadii, Size,
};

/// How smoothly the corners of a rounded rectangle join its edges.
///
/// Every variant turns a size and four corner radii into a closed,
/// clockwise [`Contour`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Continuity {
    /// Positional continuity only: each corner is a straight diagonal cut.
    G0,
    /// Tangent continuity: each corner is a quarter circle.
    G1,
    /// Curvature continuity, configurable. The recommended choice.
    G2(G2Continuity),
    /// An empirical approximation of continuously changing curvature.
    ///
    /// Deprecated: prefer [`Continuity::G2`].
    G3(G3Continuity),
}

impl Default for Continuity {
    fn default() -> Self {
        Continuity::G2(G2Continuity::default())
    }
}

impl Continuity {
    /// The outline of a `size` rectangle with the given corner radii.
    ///
    /// Radii are expected in `[0, min(width, height) / 2]`; see
    /// [`RoundedRectRadii::clamped`]. When every radius is exactly half the
    /// shorter side the dedicated capsule or circle outline is produced.
    /// The comparison is exact, so that a radius a hair below the limit
    /// still takes the general path and resizing never flips between the
    /// two.
    ///
    /// The contour starts on the left edge and runs clockwise (y down).
    pub fn contour(
        &self,
        size: Size,
        radii: &RoundedRectRadii,
    ) -> Result<Contour, ContourError> {
        let limit = size.max_corner_radius();
        if limit > 0.0 && radii.as_array().iter().all(|&r| r == limit) {
            return self.capsule_contour(size);
        }
        self.standard_contour(size, radii)
    }

    /// The outline from the general corner algorithm, without the capsule
    /// and circle shortcuts.
    pub fn standard_contour(
        &self,
        size: Size,
        radii: &RoundedRectRadii,
    ) -> Result<Contour, ContourError> {
        match self {
            Continuity::G0 => g0::standard_contour(size, radii),
            Continuity::G1 => g1::standard_contour(size, radii),
            Continuity::G2(g2) => g2.standard_contour(size, radii),
            Continuity::G3(g3) => g3.standard_contour(size, radii),
        }
    }

    /// The outline of a `size` rectangle whose every corner radius is half
    /// the shorter side.
    ///
    /// A square gives the [circle](Continuity::circle_contour).
    pub fn capsule_contour(&self, size: Size) -> Result<Contour, ContourError> {
        if size.width == size.height {
            return self.circle_contour(size.width);
        }
        log::debug!("capsule outline for {size:?}");
        match self {
            Continuity::G0 => g0::capsule_contour(size),
            Continuity::G1 => g1::capsule_contour(size),
            Continuity::G2(g2) => g2.capsule_contour(size),
            Continuity::G3(g3) => g3.capsule_contour(size),
        }
    }

    /// The outline of a circle with the given diameter, touching the axes.
    ///
    /// G0 gives the inscribed diamond; every other continuity a true
    /// circle starting at its rightmost point.
    pub fn circle_contour(&self, diameter: f64) -> Result<Contour, ContourError> {
        log::debug!("circle outline for diameter {diameter}");
        let radius = diameter * 0.5;
        match self {
            Continuity::G0 => g0::capsule_contour(Size::new(diameter, diameter)),
            _ => Ok(Contour::circle((radius, radius), radius)),
        }
    }

    /// Interpolate towards `other`, for animating between continuities.
    ///
    /// `t == 0` gives `self` and `t == 1` gives `other`. Between variants,
    /// the lower-order one is first expressed in the higher-order one's
    /// terms: G1 is G2 with [`G2Config::G1_EQUIVALENT`] or G3 with no
    /// extension, and G2 becomes G3 by its main extension. G0 has no
    /// equivalent and switches over at `t = 0.5`.
    ///
    /// Swapping the operands mirrors the parameter:
    /// `a.lerp(b, t)` equals `b.lerp(a, 1 - t)`.
    #[must_use]
    pub fn lerp(&self, other: &Continuity, t: f64) -> Continuity {
        if t == 0.0 {
            return *self;
        }
        if t == 1.0 {
            return *other;
        }
        match (self, other) {
            (Continuity::G0, Continuity::G0) | (Continuity::G1, Continuity::G1) => *self,
            (Continuity::G0, _) => {
                if t < 0.5 {
                    *self
                } else {
                    *other
                }
            }
            (Continuity::G2(a), Continuity::G2(b)) => Continuity::G2(a.lerp(b, t)),
            (Continuity::G3(a), Continuity::G3(b)) => Continuity::G3(a.lerp(b, t)),
            (Continuity::G1, Continuity::G2(b)) => {
                let g1 = G2Continuity::new(G2Config::G1_EQUIVALENT, G2Config::G1_EQUIVALENT);
                Continuity::G2(g1.lerp(b, t))
            }
            (Continuity::G1, Continuity::G3(b)) => {
                Continuity::G3(G3Continuity::new(0.0).lerp(b, t))
            }
            (Continuity::G2(a), Continuity::G3(b)) => {
                Continuity::G3(G3Continuity::new(a.config.extended_fraction).lerp(b, t))
            }
            (_, Continuity::G0)
            | (Continuity::G2(_), Continuity::G1)
            | (Continuity::G3(_), Continuity::G1 | Continuity::G2(_)) => {
                other.lerp(self, 1.0 - t)
            }
        }
    }
}

impl From<G2Continuity> for Continuity {
    fn from(g2: G2Continuity) -> Self {
        Continuity::G2(g2)
    }
}

impl From<G3Continuity> for Continuity {
    fn from(g3: G3Continuity) -> Self {
        Continuity::G3(g3)
    }
}
