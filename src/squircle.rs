// Copyright 2025 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The squircle shape and its path generation.

use arrayvec::ArrayVec;

use crate::budget::{self, Corner};
use crate::{CornerParams, CornerRadii, PathEl, Point, Size, SquirclePath, Vec2};

/// A rounded rectangle whose corners blend a circular arc with cubic
/// Bezier shoulders.
///
/// Path generation is a pure function of the fields: no state is kept
/// between calls and identical inputs always produce identical output.
/// Numeric inputs are not validated; degenerate values (negative sizes,
/// smoothing outside `[0, 1]`) degrade to degenerate paths rather than
/// errors, while radii too large for the rectangle are clamped by
/// design.
///
/// # Examples
///
/// ```
/// use squircle::Squircle;
///
/// let shape = Squircle::new((200.0, 100.0), 24.0, 0.6);
/// let svg = shape.to_svg();
/// assert!(svg.starts_with("M ") && svg.ends_with('Z'));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Squircle {
    /// Size of the rectangle.
    pub size: Size,
    /// Shared corner radius, used for corners without an override.
    pub corner_radius: f64,
    /// Override radius for the top-left corner.
    pub top_left_radius: Option<f64>,
    /// Override radius for the top-right corner.
    pub top_right_radius: Option<f64>,
    /// Override radius for the bottom-right corner.
    pub bottom_right_radius: Option<f64>,
    /// Override radius for the bottom-left corner.
    pub bottom_left_radius: Option<f64>,
    /// Corner smoothing factor in `[0, 1]`; 0 is a conventional rounded
    /// rectangle, 1 a maximally elongated superellipse-like shoulder.
    pub smoothing: f64,
    /// Keep the requested smoothing when a corner is budget-constrained,
    /// redistributing the shoulder control distances instead of reducing
    /// the smoothing factor.
    pub preserve_smoothing: bool,
}

impl Squircle {
    /// Create a new squircle with a uniform corner radius.
    pub fn new(size: impl Into<Size>, corner_radius: f64, smoothing: f64) -> Self {
        Squircle {
            size: size.into(),
            corner_radius,
            top_left_radius: None,
            top_right_radius: None,
            bottom_right_radius: None,
            bottom_left_radius: None,
            smoothing,
            preserve_smoothing: false,
        }
    }

    /// Builder method for setting all four corner radii at once.
    pub fn with_radii(mut self, radii: impl Into<CornerRadii>) -> Self {
        let radii = radii.into();
        self.top_left_radius = Some(radii.top_left);
        self.top_right_radius = Some(radii.top_right);
        self.bottom_right_radius = Some(radii.bottom_right);
        self.bottom_left_radius = Some(radii.bottom_left);
        self
    }

    /// Builder method for overriding the top-left corner radius.
    pub fn with_top_left_radius(mut self, radius: f64) -> Self {
        self.top_left_radius = Some(radius);
        self
    }

    /// Builder method for overriding the top-right corner radius.
    pub fn with_top_right_radius(mut self, radius: f64) -> Self {
        self.top_right_radius = Some(radius);
        self
    }

    /// Builder method for overriding the bottom-right corner radius.
    pub fn with_bottom_right_radius(mut self, radius: f64) -> Self {
        self.bottom_right_radius = Some(radius);
        self
    }

    /// Builder method for overriding the bottom-left corner radius.
    pub fn with_bottom_left_radius(mut self, radius: f64) -> Self {
        self.bottom_left_radius = Some(radius);
        self
    }

    /// Builder method for setting the preserve-smoothing policy.
    pub fn with_preserve_smoothing(mut self, preserve: bool) -> Self {
        self.preserve_smoothing = preserve;
        self
    }

    /// The four corner radii after resolving overrides against the
    /// shared radius.
    pub fn radii(&self) -> CornerRadii {
        CornerRadii {
            top_left: self.top_left_radius.unwrap_or(self.corner_radius),
            top_right: self.top_right_radius.unwrap_or(self.corner_radius),
            bottom_right: self.bottom_right_radius.unwrap_or(self.corner_radius),
            bottom_left: self.bottom_left_radius.unwrap_or(self.corner_radius),
        }
    }

    /// Generate the closed squircle contour.
    ///
    /// When all four resolved radii are equal, a single corner is
    /// parameterized against the uniform budget of half the shorter side
    /// and reused for all four corners. Otherwise each corner gets its
    /// own budget and clamped radius before parameterization.
    pub fn to_path(&self) -> SquirclePath {
        let radii = self.radii();
        if radii.is_uniform() {
            let budget = self.size.min_side() / 2.0;
            let params = CornerParams::derive(
                radii.top_left.min(budget),
                self.smoothing,
                budget,
                self.preserve_smoothing,
            );
            assemble(self.size, [&params, &params, &params, &params])
        } else {
            let budgets = budget::allocate(radii, self.size);
            let params = Corner::ALL.map(|corner| {
                CornerParams::derive(
                    budgets.radius(corner),
                    self.smoothing,
                    budgets.budget(corner),
                    self.preserve_smoothing,
                )
            });
            assemble(self.size, [&params[0], &params[1], &params[2], &params[3]])
        }
    }

    /// Render the squircle contour directly as an SVG path data string.
    pub fn to_svg(&self) -> String {
        self.to_path().to_svg()
    }
}

/// Emit the closed contour, clockwise from the end of the top edge.
///
/// `corners` is indexed in [`Corner`] enumeration order: top-left,
/// top-right, bottom-right, bottom-left.
fn assemble(size: Size, corners: [&CornerParams; 4]) -> SquirclePath {
    let [top_left, top_right, bottom_right, bottom_left] = corners;
    let mut path = SquirclePath::new();
    path.push(PathEl::MoveTo(Point::new(size.width - top_right.p, 0.0)));
    path.extend(corner_elements(Corner::TopRight, top_right));
    path.push(PathEl::LineTo(Point::new(
        size.width,
        size.height - bottom_right.p,
    )));
    path.extend(corner_elements(Corner::BottomRight, bottom_right));
    path.push(PathEl::LineTo(Point::new(bottom_left.p, size.height)));
    path.extend(corner_elements(Corner::BottomLeft, bottom_left));
    path.push(PathEl::LineTo(Point::new(0.0, top_left.p)));
    path.extend(corner_elements(Corner::TopLeft, top_left));
    path.push(PathEl::ClosePath);
    path
}

/// The elements for one corner: two cubic shoulders flanking an arc, or
/// a single (usually zero-length) line for a sharp corner.
fn corner_elements(corner: Corner, params: &CornerParams) -> ArrayVec<PathEl, 3> {
    let CornerParams {
        a,
        b,
        c,
        d,
        p,
        arc_section_length: arc,
        radius,
    } = *params;

    let mut els = ArrayVec::new();
    if radius > 0.0 {
        match corner {
            Corner::TopRight => {
                els.push(PathEl::RelCurveTo(
                    Vec2::new(a, 0.0),
                    Vec2::new(a + b, 0.0),
                    Vec2::new(a + b + c, d),
                ));
                els.push(PathEl::RelArcTo(radius, Vec2::new(arc, arc)));
                els.push(PathEl::RelCurveTo(
                    Vec2::new(d, c),
                    Vec2::new(d, b + c),
                    Vec2::new(d, a + b + c),
                ));
            }
            Corner::BottomRight => {
                els.push(PathEl::RelCurveTo(
                    Vec2::new(0.0, a),
                    Vec2::new(0.0, a + b),
                    Vec2::new(-d, a + b + c),
                ));
                els.push(PathEl::RelArcTo(radius, Vec2::new(-arc, arc)));
                els.push(PathEl::RelCurveTo(
                    Vec2::new(-c, d),
                    Vec2::new(-(b + c), d),
                    Vec2::new(-(a + b + c), d),
                ));
            }
            Corner::BottomLeft => {
                els.push(PathEl::RelCurveTo(
                    Vec2::new(-a, 0.0),
                    Vec2::new(-(a + b), 0.0),
                    Vec2::new(-(a + b + c), -d),
                ));
                els.push(PathEl::RelArcTo(radius, Vec2::new(-arc, -arc)));
                els.push(PathEl::RelCurveTo(
                    Vec2::new(-d, -c),
                    Vec2::new(-d, -(b + c)),
                    Vec2::new(-d, -(a + b + c)),
                ));
            }
            Corner::TopLeft => {
                els.push(PathEl::RelCurveTo(
                    Vec2::new(0.0, -a),
                    Vec2::new(0.0, -(a + b)),
                    Vec2::new(d, -(a + b + c)),
                ));
                els.push(PathEl::RelArcTo(radius, Vec2::new(arc, -arc)));
                els.push(PathEl::RelCurveTo(
                    Vec2::new(c, -d),
                    Vec2::new(b + c, -d),
                    Vec2::new(a + b + c, -d),
                ));
            }
        }
    } else {
        let line = match corner {
            Corner::TopRight => Vec2::new(p, 0.0),
            Corner::BottomRight => Vec2::new(0.0, p),
            Corner::BottomLeft => Vec2::new(-p, 0.0),
            Corner::TopLeft => Vec2::new(0.0, -p),
        };
        els.push(PathEl::RelLineTo(line));
    }
    els
}
