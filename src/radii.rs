// Copyright 2025 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A description of the radii for each corner of a squircle.

/// Radii for each corner of a squircle.
///
/// Each radius is a non-negative length in the same units as the
/// rectangle size; a radius of zero degenerates to a sharp corner.
/// Radii larger than the space available are clamped during path
/// generation, never rejected.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CornerRadii {
    /// The radius of the top-left corner.
    pub top_left: f64,
    /// The radius of the top-right corner.
    pub top_right: f64,
    /// The radius of the bottom-right corner.
    pub bottom_right: f64,
    /// The radius of the bottom-left corner.
    pub bottom_left: f64,
}

impl CornerRadii {
    /// All four radii zero; a plain rectangle.
    pub const ZERO: CornerRadii = CornerRadii::from_single_radius(0.);

    /// Create a new `CornerRadii`. This function takes radius values for
    /// the four corners. The argument order is "top_left, top_right,
    /// bottom_right, bottom_left", or clockwise starting from top_left.
    pub const fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        CornerRadii {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Create a new `CornerRadii` from a single radius. The `radius`
    /// argument will be set as the radius for all four corners.
    pub const fn from_single_radius(radius: f64) -> Self {
        CornerRadii {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// True if all four corners have the same radius.
    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_right == self.bottom_right
            && self.bottom_right == self.bottom_left
    }
}

impl From<f64> for CornerRadii {
    fn from(radius: f64) -> Self {
        CornerRadii::from_single_radius(radius)
    }
}

impl From<(f64, f64, f64, f64)> for CornerRadii {
    fn from(radii: (f64, f64, f64, f64)) -> Self {
        CornerRadii::new(radii.0, radii.1, radii.2, radii.3)
    }
}
