// Copyright 2025 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline inflation for strokes drawn outside the fill.
//!
//! A stroke centered on the fill contour would eat into the filled
//! interior. Instead the rectangle and radii are grown by the outline
//! thickness (plus a small seam allowance) and the stroke is drawn along
//! the inflated contour, translated back so it hugs the fill.

use crate::{Size, Squircle, SquirclePath, Vec2};

/// Seam allowance added to the outline thickness so the stroke and the
/// fill overlap slightly instead of leaving an anti-aliasing gap.
pub const OUTLINE_EPSILON: f64 = 0.1;

/// Outline widths for a stroke drawn outside the squircle fill.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outline {
    /// The same width on all four sides.
    Uniform(f64),
    /// Independent per-side widths. The stroke keeps the widest side's
    /// thickness and the inflated rectangle is shifted and shrunk so
    /// each side exposes only its requested width.
    PerSide {
        /// Width along the top edge.
        top: f64,
        /// Width along the right edge.
        right: f64,
        /// Width along the bottom edge.
        bottom: f64,
        /// Width along the left edge.
        left: f64,
    },
}

impl Outline {
    /// A uniform outline.
    pub const fn uniform(width: f64) -> Self {
        Outline::Uniform(width)
    }

    /// Per-side outline widths, with unspecified sides treated as zero.
    pub fn per_side(
        top: Option<f64>,
        right: Option<f64>,
        bottom: Option<f64>,
        left: Option<f64>,
    ) -> Self {
        Outline::PerSide {
            top: top.unwrap_or(0.0),
            right: right.unwrap_or(0.0),
            bottom: bottom.unwrap_or(0.0),
            left: left.unwrap_or(0.0),
        }
    }

    /// The widest side of the outline.
    pub fn max_width(&self) -> f64 {
        match *self {
            Outline::Uniform(width) => width,
            Outline::PerSide {
                top,
                right,
                bottom,
                left,
            } => top.max(right).max(bottom).max(left),
        }
    }

    /// The stroke width to draw the inflated contour with.
    ///
    /// Half of the stroke falls inside the clip region of the fill, so
    /// the pen is twice the widest side.
    pub fn line_width(&self) -> f64 {
        2.0 * self.max_width()
    }

    /// Inflate a squircle so a stroke along the result encloses the fill.
    ///
    /// All four corner radii grow by the widest side plus
    /// [`OUTLINE_EPSILON`], and the rectangle grows so the stroke lands
    /// outside the fill on every side; per-side outlines shift the
    /// result so thinner sides expose less of the stroke.
    pub fn inflate(&self, squircle: &Squircle) -> InflatedSquircle {
        let grow = self.max_width() + OUTLINE_EPSILON;
        match *self {
            Outline::Uniform(_) => InflatedSquircle {
                squircle: squircle.inflated(grow, 2.0 * grow, 2.0 * grow),
                offset: Vec2::splat(-grow),
            },
            Outline::PerSide {
                top,
                right,
                bottom,
                left,
            } => InflatedSquircle {
                squircle: squircle.inflated(grow, 2.0 * grow - left - right, 2.0 * grow - top - bottom),
                offset: Vec2::new(-grow + left, -grow + top),
            },
        }
    }
}

/// An outline-inflated squircle together with the translation that
/// aligns its contour to the fill it surrounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InflatedSquircle {
    /// The grown squircle to stroke.
    pub squircle: Squircle,
    /// Translation from the fill's coordinate space to the inflated
    /// contour's.
    pub offset: Vec2,
}

impl InflatedSquircle {
    /// Generate the stroke contour, already translated into the fill's
    /// coordinate space.
    pub fn to_path(&self) -> SquirclePath {
        self.squircle.to_path().translate(self.offset)
    }

    /// Render the stroke contour as an SVG path data string.
    pub fn to_svg(&self) -> String {
        self.to_path().to_svg()
    }
}

impl Squircle {
    /// Grow every corner radius by `radius_delta` and the rectangle by
    /// the given per-axis deltas, keeping all other parameters.
    fn inflated(&self, radius_delta: f64, width_delta: f64, height_delta: f64) -> Squircle {
        let grow_radius = |radius: Option<f64>| radius.map(|r| r + radius_delta);
        Squircle {
            size: Size::new(
                self.size.width + width_delta,
                self.size.height + height_delta,
            ),
            corner_radius: self.corner_radius + radius_delta,
            top_left_radius: grow_radius(self.top_left_radius),
            top_right_radius: grow_radius(self.top_right_radius),
            bottom_right_radius: grow_radius(self.bottom_right_radius),
            bottom_left_radius: grow_radius(self.bottom_left_radius),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathEl;

    #[test]
    fn uniform_outline_grows_every_side() {
        let fill = Squircle::new((100.0, 100.0), 10.0, 0.6);
        let inflated = Outline::uniform(2.0).inflate(&fill);
        assert!((inflated.squircle.corner_radius - 12.1).abs() < 1e-12);
        assert!((inflated.squircle.size.width - 104.2).abs() < 1e-12);
        assert!((inflated.squircle.size.height - 104.2).abs() < 1e-12);
        assert!((inflated.offset.x + 2.1).abs() < 1e-12);
        assert!((inflated.offset.y + 2.1).abs() < 1e-12);
    }

    #[test]
    fn per_side_outline_is_asymmetric() {
        let fill = Squircle::new((100.0, 100.0), 10.0, 0.6);
        let outline = Outline::per_side(Some(4.0), None, None, None);
        assert_eq!(outline.max_width(), 4.0);

        let inflated = outline.inflate(&fill);
        assert!((inflated.squircle.corner_radius - 14.1).abs() < 1e-12);
        // Left and right keep the full growth, top and bottom give back
        // the requested 4.
        assert!((inflated.squircle.size.width - 108.2).abs() < 1e-12);
        assert!((inflated.squircle.size.height - 104.2).abs() < 1e-12);
        assert!((inflated.offset.x + 4.1).abs() < 1e-12);
        assert!((inflated.offset.y + 0.1).abs() < 1e-12);
    }

    #[test]
    fn per_side_resolution_treats_missing_sides_as_zero() {
        let outline = Outline::per_side(None, Some(3.0), None, Some(1.0));
        assert_eq!(
            outline,
            Outline::PerSide {
                top: 0.0,
                right: 3.0,
                bottom: 0.0,
                left: 1.0,
            }
        );
        assert_eq!(outline.line_width(), 6.0);
    }

    #[test]
    fn inflated_path_is_translated_onto_the_fill() {
        let fill = Squircle::new((100.0, 100.0), 10.0, 0.0);
        let inflated = Outline::uniform(2.0).inflate(&fill);

        let raw = inflated.squircle.to_path();
        let translated = inflated.to_path();
        match (raw.elements()[0], translated.elements()[0]) {
            (PathEl::MoveTo(a), PathEl::MoveTo(b)) => {
                assert_eq!(b, a + inflated.offset);
            }
            ref other => panic!("expected moves, got {other:?}"),
        }
        // The inflated contour starts above the fill's start. At zero
        // smoothing the extra width and the extra corner extent cancel
        // exactly, so the start x coincides with the fill's.
        let fill_start = match fill.to_path().elements()[0] {
            PathEl::MoveTo(p) => p,
            ref other => panic!("expected move, got {other:?}"),
        };
        match translated.elements()[0] {
            PathEl::MoveTo(p) => assert!(p.x <= fill_start.x && p.y < fill_start.y),
            ref other => panic!("expected move, got {other:?}"),
        }

        // Per-corner overrides inflate too.
        let fill = fill.with_top_left_radius(5.0);
        let inflated = Outline::uniform(2.0).inflate(&fill);
        assert_eq!(inflated.squircle.top_left_radius, Some(5.0 + 2.1));
        assert!((inflated.squircle.size.width - 104.2).abs() < 1e-12);
    }

    #[test]
    fn smoothed_outline_start_lies_strictly_outside_the_fill() {
        let fill = Squircle::new((100.0, 100.0), 10.0, 0.6);
        let inflated = Outline::uniform(2.0).inflate(&fill);

        let start = |path: &SquirclePath| match path.elements()[0] {
            PathEl::MoveTo(p) => p,
            ref other => panic!("expected move, got {other:?}"),
        };
        let fill_start = start(&fill.to_path());
        let stroke_start = start(&inflated.to_path());
        // The corner extent scales with the radius, so a smoothed
        // corner starts strictly left of the fill's, and the
        // translation pulls the whole contour above it.
        assert!(stroke_start.x < fill_start.x);
        assert!(stroke_start.y < fill_start.y);
    }
}
