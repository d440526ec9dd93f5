// Copyright 2025 the Continuous Corners Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while building a contour.

use core::fmt;

/// An error which can be returned when generating a contour.
///
/// Both variants indicate a broken caller contract rather than a transient
/// condition; retrying with the same input fails the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContourError {
    /// `move_to` was called on a builder that had already started.
    AlreadyStarted,
    /// A tangent solve met a vertical or zero-length direction, or produced
    /// non-finite control points.
    DegenerateDirection,
}

impl fmt::Display for ContourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContourError::AlreadyStarted => {
                write!(f, "move_to can only be called once at the beginning of a contour")
            }
            ContourError::DegenerateDirection => {
                write!(f, "corner curve solve hit a degenerate direction")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ContourError {}

#[cfg(test)]
mod tests {
    use super::ContourError;
    use alloc::string::ToString;

    #[test]
    fn display_messages() {
        assert_eq!(
            ContourError::AlreadyStarted.to_string(),
            "move_to can only be called once at the beginning of a contour"
        );
        assert!(ContourError::DegenerateDirection
            .to_string()
            .contains("degenerate"));
    }
}
