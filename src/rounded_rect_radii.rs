// Copyright 2025 the Continuous Corners Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A description of the radii for each corner of a rounded rectangle.

use crate::Size;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Radii for each corner of a rounded rectangle.
///
/// Contour generation expects each radius to lie in
/// `[0, min(width, height) / 2]`; see [`RoundedRectRadii::clamped`].
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundedRectRadii {
    /// The radius of the top-left corner.
    pub top_left: f64,
    /// The radius of the top-right corner.
    pub top_right: f64,
    /// The radius of the bottom-right corner.
    pub bottom_right: f64,
    /// The radius of the bottom-left corner.
    pub bottom_left: f64,
}

impl RoundedRectRadii {
    /// Create a new `RoundedRectRadii`. This function takes radius values for
    /// the four corners. The argument order is "top_left, top_right,
    /// bottom_right, bottom_left", or clockwise starting from top_left.
    pub const fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        RoundedRectRadii {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Create a new `RoundedRectRadii` from a single radius. The `radius`
    /// argument will be set as the radius for all four corners.
    pub const fn from_single_radius(radius: f64) -> Self {
        RoundedRectRadii {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// The radii clamped into `[0, min(width, height) / 2]`.
    ///
    /// NaN radii become zero.
    #[must_use]
    pub fn clamped(&self, size: Size) -> Self {
        let max = size.max_corner_radius().max(0.0);
        let clamp = |r: f64| if r > 0.0 { r.min(max) } else { 0.0 };
        RoundedRectRadii {
            top_left: clamp(self.top_left),
            top_right: clamp(self.top_right),
            bottom_right: clamp(self.bottom_right),
            bottom_left: clamp(self.bottom_left),
        }
    }

    /// Every radius reduced by `amount`, floored at zero.
    #[must_use]
    pub fn shrink(&self, amount: f64) -> Self {
        let shrink = |r: f64| (r - amount).max(0.0);
        RoundedRectRadii {
            top_left: shrink(self.top_left),
            top_right: shrink(self.top_right),
            bottom_right: shrink(self.bottom_right),
            bottom_left: shrink(self.bottom_left),
        }
    }

    /// The radii in clockwise order starting from the top left.
    #[inline]
    pub const fn as_array(&self) -> [f64; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// If all radii are equal, returns the value of the radii. Otherwise,
    /// returns `None`.
    pub fn as_single_radius(&self) -> Option<f64> {
        let epsilon = 1e-9;

        if (self.top_left - self.top_right).abs() < epsilon
            && (self.top_right - self.bottom_right).abs() < epsilon
            && (self.bottom_right - self.bottom_left).abs() < epsilon
        {
            Some(self.top_left)
        } else {
            None
        }
    }

    /// Is every radius finite?
    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|r| r.is_finite())
    }
}

impl From<f64> for RoundedRectRadii {
    fn from(radius: f64) -> Self {
        RoundedRectRadii::from_single_radius(radius)
    }
}

impl From<(f64, f64, f64, f64)> for RoundedRectRadii {
    fn from(radii: (f64, f64, f64, f64)) -> Self {
        RoundedRectRadii::new(radii.0, radii.1, radii.2, radii.3)
    }
}
