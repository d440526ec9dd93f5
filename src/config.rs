// Copyright 2025 the Continuous Corners Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parameters of the curvature-continuous corner.

use crate::common::lerp;

/// The shape parameters of a curvature-continuous (G2) corner.
///
/// A corner turns through a quarter circle. The middle `arc_fraction` of
/// that turn is a true circular arc; the rest, on either side, is a cubic
/// Bézier that starts `extended_fraction × radius` back along the straight
/// edge with zero curvature and meets the arc with matching tangent and
/// curvature.
///
/// Equality is structural, which is what the solved-curve cache relies on.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct G2Config {
    /// How far, as a multiple of the radius, the corner curve reaches into
    /// the straight edge. Non-negative.
    pub extended_fraction: f64,
    /// The share of the 90° turn taken by the circular arc, in `[0, 1]`.
    pub arc_fraction: f64,
    /// Multiplier on the nominal curvature `1/radius` at the end of the
    /// Bézier. Non-negative.
    pub bezier_curvature_scale: f64,
    /// Multiplier on the nominal curvature of the arc.
    ///
    /// Zero is a sentinel for an infinitely large arc, which is drawn as a
    /// straight line.
    pub arc_curvature_scale: f64,
}

impl G2Config {
    /// A pronounced squircle-like corner for ordinary rounded rectangles.
    pub const ROUNDED_RECTANGLE: G2Config = G2Config::new(1.0, 0.25, 1.06, 1.06);

    /// A corner tuned for the capsule limit.
    pub const CAPSULE: G2Config = G2Config::new(0.75, 0.20, 1.0, 1.0);

    /// Parameters under which the corner is a plain quarter circle, the
    /// tangent-continuous (G1) shape.
    pub const G1_EQUIVALENT: G2Config = G2Config::new(0.0, 1.0, 1.0, 1.0);

    /// Create a new corner configuration.
    #[inline]
    pub const fn new(
        extended_fraction: f64,
        arc_fraction: f64,
        bezier_curvature_scale: f64,
        arc_curvature_scale: f64,
    ) -> G2Config {
        G2Config {
            extended_fraction,
            arc_fraction,
            bezier_curvature_scale,
            arc_curvature_scale,
        }
    }

    /// Linearly interpolate every field towards `other`.
    #[inline]
    #[must_use]
    pub fn lerp(&self, other: &G2Config, t: f64) -> G2Config {
        G2Config {
            extended_fraction: lerp(self.extended_fraction, other.extended_fraction, t),
            arc_fraction: lerp(self.arc_fraction, other.arc_fraction, t),
            bezier_curvature_scale: lerp(
                self.bezier_curvature_scale,
                other.bezier_curvature_scale,
                t,
            ),
            arc_curvature_scale: lerp(self.arc_curvature_scale, other.arc_curvature_scale, t),
        }
    }

    /// Is every field finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.extended_fraction.is_finite()
            && self.arc_fraction.is_finite()
            && self.bezier_curvature_scale.is_finite()
            && self.arc_curvature_scale.is_finite()
    }
}

/// Curvature-continuous corners, with separate tuning at the capsule limit.
///
/// Corners far from the capsule limit use `config`. As a corner's radius
/// approaches half of the rectangle's side, its parameters blend towards
/// `capsule_config`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct G2Continuity {
    /// Parameters for corners with room to spare.
    pub config: G2Config,
    /// Parameters at the capsule limit.
    pub capsule_config: G2Config,
}

impl G2Continuity {
    /// Create a new G2 continuity from its two configurations.
    #[inline]
    pub const fn new(config: G2Config, capsule_config: G2Config) -> G2Continuity {
        G2Continuity {
            config,
            capsule_config,
        }
    }

    /// Interpolate both configurations towards `other`.
    #[inline]
    #[must_use]
    pub fn lerp(&self, other: &G2Continuity, t: f64) -> G2Continuity {
        G2Continuity {
            config: self.config.lerp(&other.config, t),
            capsule_config: self.capsule_config.lerp(&other.capsule_config, t),
        }
    }
}

impl Default for G2Continuity {
    fn default() -> Self {
        G2Continuity {
            config: G2Config::new(0.5, 0.45, 1.10, 1.10),
            capsule_config: G2Config::new(0.5, 0.45, 1.0, 1.0),
        }
    }
}
