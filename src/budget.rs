// Copyright 2025 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Allocation of corner space along shared rectangle edges.
//!
//! Two corners sharing an edge compete for its length. Each corner is
//! assigned a "budget", the most it may extend along the edge without
//! overlapping its neighbor, and its radius is clamped to that budget.

use std::cmp::Ordering;

use crate::{CornerRadii, Size};

/// One corner of the rectangle, in clockwise enumeration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Corner {
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

/// One side of the rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    fn length(self, size: Size) -> f64 {
        match self {
            Side::Top | Side::Bottom => size.width,
            Side::Left | Side::Right => size.height,
        }
    }
}

impl Corner {
    /// All corners, clockwise from top-left. This enumeration order is
    /// also the deterministic tie-break for equal radii during
    /// allocation.
    pub(crate) const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// The two neighbors of a corner and the side each is reached over.
    const fn adjacent(self) -> [(Corner, Side); 2] {
        match self {
            Corner::TopLeft => [
                (Corner::TopRight, Side::Top),
                (Corner::BottomLeft, Side::Left),
            ],
            Corner::TopRight => [
                (Corner::TopLeft, Side::Top),
                (Corner::BottomRight, Side::Right),
            ],
            Corner::BottomRight => [
                (Corner::BottomLeft, Side::Bottom),
                (Corner::TopRight, Side::Right),
            ],
            Corner::BottomLeft => [
                (Corner::BottomRight, Side::Bottom),
                (Corner::TopLeft, Side::Left),
            ],
        }
    }
}

/// The result of budget allocation: a per-corner budget and the radii
/// clamped to fit it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Budgets {
    budgets: [f64; 4],
    clamped: [f64; 4],
}

impl Budgets {
    pub(crate) fn budget(&self, corner: Corner) -> f64 {
        self.budgets[corner as usize]
    }

    pub(crate) fn radius(&self, corner: Corner) -> f64 {
        self.clamped[corner as usize]
    }
}

/// Assign each corner a budget along its two adjacent edges.
///
/// Corners are processed in descending order of requested radius, so
/// large corners claim their proportional share of an edge first and
/// smaller neighbors receive the remainder. Equal radii are processed
/// in clockwise enumeration order (the sort is stable).
pub(crate) fn allocate(radii: CornerRadii, size: Size) -> Budgets {
    let requested = [
        radii.top_left,
        radii.top_right,
        radii.bottom_right,
        radii.bottom_left,
    ];

    let mut order = Corner::ALL;
    order.sort_by(|x, y| {
        requested[*y as usize]
            .partial_cmp(&requested[*x as usize])
            .unwrap_or(Ordering::Equal)
    });

    let mut budgets = [None; 4];
    let mut clamped = requested;
    for corner in order {
        let radius = requested[corner as usize];
        let mut budget = f64::INFINITY;
        for (neighbor, side) in corner.adjacent() {
            let neighbor_radius = requested[neighbor as usize];
            let side_length = side.length(size);
            let share = if radius == 0.0 && neighbor_radius == 0.0 {
                0.0
            } else if let Some(neighbor_budget) = budgets[neighbor as usize] {
                // The neighbor claimed its share of this edge already;
                // exactly the remainder is left for this corner.
                side_length - neighbor_budget
            } else {
                side_length * radius / (radius + neighbor_radius)
            };
            // A corner must fit on both edges it touches.
            budget = budget.min(share);
        }
        budgets[corner as usize] = Some(budget);
        clamped[corner as usize] = radius.min(budget);
    }

    Budgets {
        // The loop above assigns every corner.
        budgets: budgets.map(|b| b.unwrap_or(0.0)),
        clamped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn proportional_split_with_remainder() {
        let radii = CornerRadii::new(30.0, 70.0, 0.0, 0.0);
        let budgets = allocate(radii, Size::new(100.0, 100.0));
        assert_eq!(budgets.budget(Corner::TopRight), 70.0);
        assert_eq!(budgets.budget(Corner::TopLeft), 30.0);
        assert_eq!(budgets.radius(Corner::TopRight), 70.0);
        assert_eq!(budgets.radius(Corner::TopLeft), 30.0);
    }

    #[test]
    fn sharp_corners_claim_nothing() {
        let budgets = allocate(CornerRadii::ZERO, Size::new(100.0, 50.0));
        for corner in Corner::ALL {
            assert_eq!(budgets.budget(corner), 0.0);
            assert_eq!(budgets.radius(corner), 0.0);
        }
    }

    #[test]
    fn equal_radii_tie_break_is_deterministic() {
        let radii = CornerRadii::from_single_radius(40.0);
        let budgets = allocate(radii, Size::new(100.0, 200.0));
        // Processed clockwise from top-left: the first corner on each
        // edge takes half, the later one the remainder, which here is
        // also half.
        for corner in Corner::ALL {
            assert_eq!(budgets.budget(corner), 50.0);
            assert_eq!(budgets.radius(corner), 40.0);
        }
    }

    #[test]
    fn oversized_radii_are_clamped_to_the_shared_edge() {
        // Requested radii sum to far more than twice the short side.
        let radii = CornerRadii::new(300.0, 300.0, 300.0, 300.0);
        let budgets = allocate(radii, Size::new(100.0, 80.0));
        let top = budgets.budget(Corner::TopLeft) + budgets.budget(Corner::TopRight);
        let right = budgets.budget(Corner::TopRight) + budgets.budget(Corner::BottomRight);
        assert!(top <= 100.0 + 1e-9);
        assert!(right <= 80.0 + 1e-9);
        for corner in Corner::ALL {
            assert!(budgets.radius(corner) <= budgets.budget(corner));
        }
    }

    #[test]
    fn random_inputs_never_overlap() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let radii = CornerRadii::new(
                rng.random_range(0.0..300.0),
                rng.random_range(0.0..300.0),
                rng.random_range(0.0..300.0),
                rng.random_range(0.0..300.0),
            );
            let size = Size::new(rng.random_range(1.0..400.0), rng.random_range(1.0..400.0));
            let budgets = allocate(radii, size);

            let pairs = [
                (Corner::TopLeft, Corner::TopRight, size.width),
                (Corner::TopRight, Corner::BottomRight, size.height),
                (Corner::BottomRight, Corner::BottomLeft, size.width),
                (Corner::BottomLeft, Corner::TopLeft, size.height),
            ];
            for (a, b, side_length) in pairs {
                assert!(budgets.budget(a) + budgets.budget(b) <= side_length + 1e-9);
            }
            for corner in Corner::ALL {
                assert!(budgets.budget(corner) >= 0.0);
                assert!(budgets.radius(corner) <= budgets.budget(corner));
            }
        }
    }
}
