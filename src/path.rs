// Copyright 2025 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The squircle contour as a sequence of drawing elements.

use std::fmt;
use std::fmt::Write;

use smallvec::SmallVec;

use crate::{Point, Vec2};

/// A full squircle is one move, four corners of up to three elements
/// each, four edge lines and a close.
const PATH_CAPACITY: usize = 18;

/// A single path drawing element.
///
/// Corner geometry is expressed relative to the current point, matching
/// the output format; only the starting move and the edge lines are
/// absolute.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Move directly to the point without drawing.
    MoveTo(Point),
    /// Draw a line from the current location to the point.
    LineTo(Point),
    /// Draw a line to the point offset from the current location.
    RelLineTo(Vec2),
    /// Draw a cubic bezier with control points and end point offset from
    /// the current location.
    RelCurveTo(Vec2, Vec2, Vec2),
    /// Draw a clockwise circular arc of the given radius to the point
    /// offset from the current location.
    RelArcTo(f64, Vec2),
    /// Close off the path.
    ClosePath,
}

/// A closed squircle contour.
///
/// The contour is a plain sequence of [`PathEl`] values; [`to_svg`]
/// renders it as an SVG path data string consumable by any
/// path-accepting drawing surface (fill, stroke or clip).
///
/// [`to_svg`]: SquirclePath::to_svg
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquirclePath {
    elements: SmallVec<[PathEl; PATH_CAPACITY]>,
}

impl SquirclePath {
    /// Create a new, empty path.
    pub fn new() -> SquirclePath {
        SquirclePath::default()
    }

    /// Push an element onto the path.
    pub fn push(&mut self, el: PathEl) {
        self.elements.push(el);
    }

    /// The elements of the path.
    pub fn elements(&self) -> &[PathEl] {
        &self.elements
    }

    /// Returns a new path translated by `offset`.
    ///
    /// Only the absolute elements move; relative curve and arc elements
    /// are unaffected by translation.
    #[must_use]
    pub fn translate(&self, offset: Vec2) -> SquirclePath {
        let elements = self
            .elements
            .iter()
            .map(|el| match *el {
                PathEl::MoveTo(p) => PathEl::MoveTo(p + offset),
                PathEl::LineTo(p) => PathEl::LineTo(p + offset),
                el => el,
            })
            .collect();
        SquirclePath { elements }
    }

    /// Render the path as an SVG path data string.
    ///
    /// Every numeric literal is written with fixed four-decimal
    /// precision, so identical geometry always renders to an identical
    /// string regardless of floating-point noise in the inputs.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl Extend<PathEl> for SquirclePath {
    fn extend<I: IntoIterator<Item = PathEl>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl FromIterator<PathEl> for SquirclePath {
    fn from_iter<I: IntoIterator<Item = PathEl>>(iter: I) -> Self {
        SquirclePath {
            elements: iter.into_iter().collect(),
        }
    }
}

/// A coordinate formatted with fixed four-decimal precision.
///
/// Adding zero first folds negative zero, so degenerate corners render
/// as `0.0000` rather than `-0.0000`.
struct Coord(f64);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0 + 0.0)
    }
}

impl fmt::Display for SquirclePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for el in &self.elements {
            f.write_str(sep)?;
            sep = " ";
            match *el {
                PathEl::MoveTo(p) => write!(f, "M {} {}", Coord(p.x), Coord(p.y))?,
                PathEl::LineTo(p) => write!(f, "L {} {}", Coord(p.x), Coord(p.y))?,
                PathEl::RelLineTo(v) => write!(f, "l {} {}", Coord(v.x), Coord(v.y))?,
                PathEl::RelCurveTo(v1, v2, v3) => write!(
                    f,
                    "c {} {} {} {} {} {}",
                    Coord(v1.x),
                    Coord(v1.y),
                    Coord(v2.x),
                    Coord(v2.y),
                    Coord(v3.x),
                    Coord(v3.y)
                )?,
                PathEl::RelArcTo(radius, v) => write!(
                    f,
                    "a {} {} 0 0 1 {} {}",
                    Coord(radius),
                    Coord(radius),
                    Coord(v.x),
                    Coord(v.y)
                )?,
                PathEl::ClosePath => f.write_char('Z')?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_rendering_is_fixed_precision() {
        let mut path = SquirclePath::new();
        path.push(PathEl::MoveTo(Point::new(90.0, 0.0)));
        path.push(PathEl::RelArcTo(10.0, Vec2::new(10.0, 10.0)));
        path.push(PathEl::RelLineTo(Vec2::new(-0.0, 0.125)));
        path.push(PathEl::ClosePath);
        assert_eq!(
            path.to_svg(),
            "M 90.0000 0.0000 a 10.0000 10.0000 0 0 1 10.0000 10.0000 l 0.0000 0.1250 Z"
        );
    }

    #[test]
    fn negative_zero_is_folded() {
        let mut path = SquirclePath::new();
        path.push(PathEl::RelCurveTo(
            Vec2::new(-0.0, 0.0),
            Vec2::new(0.0, -0.0),
            Vec2::new(-0.0, -0.0),
        ));
        assert_eq!(path.to_svg(), "c 0.0000 0.0000 0.0000 0.0000 0.0000 0.0000");
    }

    #[test]
    fn translate_moves_only_absolute_elements() {
        let mut path = SquirclePath::new();
        path.push(PathEl::MoveTo(Point::new(1.0, 2.0)));
        path.push(PathEl::RelCurveTo(Vec2::ZERO, Vec2::ZERO, Vec2::new(3.0, 4.0)));
        path.push(PathEl::LineTo(Point::new(5.0, 6.0)));
        path.push(PathEl::ClosePath);

        let moved = path.translate(Vec2::new(10.0, -10.0));
        assert_eq!(moved.elements()[0], PathEl::MoveTo(Point::new(11.0, -8.0)));
        assert_eq!(moved.elements()[1], path.elements()[1]);
        assert_eq!(moved.elements()[2], PathEl::LineTo(Point::new(15.0, -4.0)));
        assert_eq!(moved.elements()[3], PathEl::ClosePath);
    }
}
