//! Property-based tests for strip construction and measurement.
//!
//! These use proptest to generate random valid parameters and verify the
//! invariants that must hold for every strip.
//!
//! Run with: cargo test -p mobius-geom --test proptest_strip

use mobius_geom::MobiusStrip;
use proptest::prelude::*;

/// Radii away from zero so the surface stays well-conditioned.
fn arb_radius() -> impl Strategy<Value = f64> {
    0.5..10.0f64
}

/// Non-negative widths, including the degenerate zero.
fn arb_width() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.01..2.0f64]
}

/// Resolutions from the degenerate minimum up to a cheap-to-test size.
fn arb_resolution() -> impl Strategy<Value = usize> {
    2..64usize
}

proptest! {
    #[test]
    fn prop_valid_parameters_construct(
        r in arb_radius(),
        w in arb_width(),
        n in arb_resolution(),
    ) {
        let strip = MobiusStrip::new(r, w, n).unwrap();
        prop_assert_eq!(strip.resolution(), n);
    }

    #[test]
    fn prop_mesh_is_full_and_finite(
        r in arb_radius(),
        w in arb_width(),
        n in arb_resolution(),
    ) {
        let mesh = MobiusStrip::new(r, w, n).unwrap().generate_mesh();
        prop_assert_eq!(mesh.point_count(), n * n);
        for p in mesh.iter() {
            prop_assert!(p.x.is_finite());
            prop_assert!(p.y.is_finite());
            prop_assert!(p.z.is_finite());
        }
    }

    #[test]
    fn prop_area_is_finite_and_non_negative(
        r in arb_radius(),
        w in arb_width(),
        n in arb_resolution(),
    ) {
        let area = MobiusStrip::new(r, w, n).unwrap().surface_area();
        prop_assert!(area.is_finite());
        prop_assert!(area >= 0.0);
    }

    #[test]
    fn prop_edge_length_is_finite_and_non_negative(
        r in arb_radius(),
        w in arb_width(),
        n in arb_resolution(),
    ) {
        let edge = MobiusStrip::new(r, w, n).unwrap().edge_length();
        prop_assert!(edge.is_finite());
        prop_assert!(edge >= 0.0);
    }

    #[test]
    fn prop_estimators_are_reproducible(
        r in arb_radius(),
        w in arb_width(),
        n in arb_resolution(),
    ) {
        let strip = MobiusStrip::new(r, w, n).unwrap();
        prop_assert_eq!(strip.surface_area(), strip.surface_area());
        prop_assert_eq!(strip.edge_length(), strip.edge_length());
        prop_assert_eq!(strip.generate_mesh(), strip.generate_mesh());
    }

    #[test]
    fn prop_opposite_rims_stay_width_apart(
        r in arb_radius(),
        w in 0.01..2.0f64,
        n in arb_resolution(),
    ) {
        // The offset between v = -w/2 and v = +w/2 at fixed u is
        // w·(cos(u/2)·cos u, cos(u/2)·sin u, sin(u/2)), a vector of norm w.
        let mesh = MobiusStrip::new(r, w, n).unwrap().generate_mesh();
        let last = mesh.cols() - 1;
        for i in 0..mesh.rows() {
            let gap = (mesh.point(i, last) - mesh.point(i, 0)).norm();
            prop_assert!((gap - w).abs() < 1e-9 * w.max(1.0));
        }
    }

    #[test]
    fn prop_invalid_resolution_is_rejected(
        r in arb_radius(),
        w in arb_width(),
        n in 0..2usize,
    ) {
        prop_assert!(MobiusStrip::new(r, w, n).is_err());
    }
}
