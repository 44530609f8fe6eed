// Copyright 2025 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-corner Bezier and arc construction distances.

/// Construction distances for one squircle corner.
///
/// A corner is drawn as two cubic Bezier "shoulders" flanking a circular
/// arc. The distances here are measured along (or perpendicular to) the
/// adjacent rectangle edges, in the same units as the corner radius:
///
/// * `a`, `b` position the first shoulder's control points along the edge;
/// * `c`, `d` position the control points where the shoulder meets the arc;
/// * `arc_section_length` is the chord of the arc portion;
/// * `p` is the total extent the corner occupies along each adjacent edge.
///
/// All fields are fully determined by [`CornerParams::derive`]; the
/// record is exposed so callers can inspect the geometry without parsing
/// the rendered path.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CornerParams {
    /// Distance from the shoulder start to its first control point.
    pub a: f64,
    /// Distance from the first to the second control point.
    pub b: f64,
    /// Distance from the second control point to the arc join, along the edge.
    pub c: f64,
    /// Offset of the arc join perpendicular to the edge.
    pub d: f64,
    /// Total extent consumed along each adjacent edge.
    pub p: f64,
    /// Chord length of the circular arc portion.
    pub arc_section_length: f64,
    /// The (possibly clamped) corner radius the construction uses.
    pub radius: f64,
}

impl CornerParams {
    /// Derive the construction distances for one corner.
    ///
    /// `radius` is the corner radius after any neighbor clamping,
    /// `smoothing` is the corner smoothing factor in `[0, 1]` (0 is a
    /// plain circular arc, 1 a maximally elongated shoulder), and
    /// `budget` is the most the corner may extend along each adjacent
    /// edge without colliding with its neighbor.
    ///
    /// When `preserve_smoothing` is false and the corner is
    /// budget-constrained, the smoothing factor itself is reduced until
    /// the corner fits. When it is true, the requested smoothing is kept
    /// and the shoulder control distances are redistributed instead.
    ///
    /// A zero radius yields an all-zero record; the corner degenerates
    /// to a point.
    pub fn derive(radius: f64, smoothing: f64, budget: f64, preserve_smoothing: bool) -> Self {
        let mut smoothing = smoothing;
        let mut p = (1.0 + smoothing) * radius;

        if !preserve_smoothing {
            // For a zero radius this is infinite (or NaN when the budget
            // is also zero); `f64::min` ignores the NaN operand, so the
            // degenerate corner still falls through to an all-zero record.
            let max_smoothing = budget / radius - 1.0;
            smoothing = smoothing.min(max_smoothing);
            p = p.min(budget);
        }

        // The arc sweep shrinks from a quarter circle at zero smoothing
        // toward nothing as the smoothing factor approaches one.
        let arc_measure = 90.0 * (1.0 - smoothing);
        let arc_section_length = (arc_measure / 2.0).to_radians().sin() * radius * 2f64.sqrt();

        let angle_alpha = (90.0 - arc_measure) / 2.0;
        let p3_to_p4_distance = radius * (angle_alpha / 2.0).to_radians().tan();

        let angle_beta = 45.0 * smoothing;
        let c = p3_to_p4_distance * angle_beta.to_radians().cos();
        let d = c * angle_beta.to_radians().tan();

        let mut b = (p - arc_section_length - c - d) / 3.0;
        let mut a = 2.0 * b;

        if preserve_smoothing && p > budget {
            // Fit the straight segment into what the budget leaves after
            // the arc and the inner control distances.
            let p1_to_p3_max_distance = budget - d - arc_section_length - c;
            let min_a = p1_to_p3_max_distance / 6.0;
            let max_b = p1_to_p3_max_distance - min_a;
            b = b.min(max_b);
            a = p1_to_p3_max_distance - b;
            p = p.min(budget);
        }

        CornerParams {
            a,
            b,
            c,
            d,
            p,
            arc_section_length,
            radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_smoothing_is_a_plain_quarter_circle() {
        let params = CornerParams::derive(10.0, 0.0, 50.0, false);
        assert!(params.a.abs() < 1e-12);
        assert!(params.b.abs() < 1e-12);
        assert!(params.c.abs() < 1e-12);
        assert!(params.d.abs() < 1e-12);
        assert!((params.arc_section_length - 10.0).abs() < 1e-9);
        assert_eq!(params.p, 10.0);
    }

    #[test]
    fn zero_radius_degenerates_to_a_point() {
        for preserve in [false, true] {
            let params = CornerParams::derive(0.0, 0.8, 50.0, preserve);
            assert_eq!(params.p, 0.0);
            assert_eq!(params.arc_section_length, 0.0);
            assert_eq!(params.a, 0.0);
            assert_eq!(params.b, 0.0);
            assert_eq!(params.c, 0.0);
            assert_eq!(params.d, 0.0);
        }
    }

    #[test]
    fn zero_radius_with_zero_budget_stays_finite() {
        let params = CornerParams::derive(0.0, 0.6, 0.0, false);
        assert_eq!(params.p, 0.0);
        assert_eq!(params.arc_section_length, 0.0);
    }

    #[test]
    fn a_is_twice_b_when_unconstrained() {
        let params = CornerParams::derive(10.0, 0.6, 50.0, false);
        assert!((params.a - 2.0 * params.b).abs() < 1e-12);
        assert_eq!(params.p, 16.0);
    }

    #[test]
    fn smoothing_shrinks_to_fit_the_budget() {
        // Requested extent is 60 against a budget of 45, so the
        // smoothing factor is cut from 1.0 down to 0.5.
        let params = CornerParams::derive(30.0, 1.0, 45.0, false);
        assert_eq!(params.p, 45.0);
        // arc_measure = 45° at the clamped smoothing.
        let expected_arc = (22.5f64).to_radians().sin() * 30.0 * 2f64.sqrt();
        assert!((params.arc_section_length - expected_arc).abs() < 1e-9);
        assert!((params.a - 2.0 * params.b).abs() < 1e-12);
    }

    #[test]
    fn preserve_smoothing_fits_exactly_within_the_budget() {
        let budget = 45.0;
        let params = CornerParams::derive(30.0, 1.0, budget, true);
        // The total extent lands exactly on the budget, not below it.
        assert_eq!(params.p, budget);
        // The straight segment absorbs whatever the arc and the inner
        // control distances leave over.
        let total = params.a + params.b + params.c + params.d + params.arc_section_length;
        assert!((total - budget).abs() < 1e-9);
    }

    #[test]
    fn preserve_smoothing_is_inert_when_the_budget_is_ample() {
        let constrained = CornerParams::derive(10.0, 0.6, 50.0, true);
        let unconstrained = CornerParams::derive(10.0, 0.6, 50.0, false);
        assert_eq!(constrained, unconstrained);
    }
}
