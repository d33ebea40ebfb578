//! Property-based checks over the solver's documented guarantees.

use pn_graph::{ElementKind, NetworkBuilder};
use pn_solver::solve;
use proptest::prelude::*;

fn branched(c1: f64, c2: f64, d_trunk: f64, d_branch: f64) -> pn_graph::Network {
    let mut b = NetworkBuilder::new();
    b.add_fitting(ElementKind::Discharge, 0.0, 0.0);
    b.pipe_to(ElementKind::Tee, 10.0, 0.0, d_trunk, 10.0);
    let o1 = b.pipe_to(ElementKind::Outlet, 18.0, 0.0, d_trunk, 8.0);
    b.set_capacity(o1, c1);
    let o2 = b.pipe_to(ElementKind::Outlet, 18.0, 6.0, d_branch, 6.0);
    b.set_capacity(o2, c2);
    b.build()
}

proptest! {
    #[test]
    fn trunk_flow_is_sum_of_demands(
        c1 in 0.1_f64..40.0,
        c2 in 0.1_f64..40.0,
    ) {
        let paths = solve(&branched(c1, c2, 100.0, 80.0));
        prop_assert_eq!(paths.len(), 2);
        for rows in &paths {
            let trunk = rows.iter().find(|r| r.item == "pipe").unwrap();
            prop_assert!((trunk.capacity_lps - (c1 + c2)).abs() < 1e-9);
        }
    }

    #[test]
    fn all_derived_fields_stay_finite(
        c1 in 0.0_f64..40.0,
        c2 in 0.0_f64..40.0,
        d_trunk in prop_oneof![Just(0.0_f64), 20.0_f64..200.0],
        d_branch in prop_oneof![Just(0.0_f64), 20.0_f64..200.0],
    ) {
        let paths = solve(&branched(c1, c2, d_trunk, d_branch));
        for row in paths.iter().flatten() {
            prop_assert!(row.velocity_mps.is_finite());
            prop_assert!(row.reynolds.is_finite());
            prop_assert!(row.friction.is_finite());
            prop_assert!(row.area_ratio.is_finite());
            prop_assert!(row.k_reducer.is_finite());
            prop_assert!(row.k_tee.is_finite());
            prop_assert!(row.k_total.is_finite());
            prop_assert!(row.head_loss_m.is_finite());
            prop_assert!(row.pressure_m.is_finite());
        }
    }

    #[test]
    fn solving_is_deterministic(
        c1 in 0.1_f64..40.0,
        c2 in 0.1_f64..40.0,
    ) {
        let net = branched(c1, c2, 100.0, 80.0);
        let a = solve(&net);
        let b = solve(&net);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn zero_diameter_zeroes_the_velocity_chain(c in 0.0_f64..40.0) {
        let mut b = NetworkBuilder::new();
        b.add_fitting(ElementKind::Discharge, 0.0, 0.0);
        let o = b.pipe_to(ElementKind::Outlet, 10.0, 0.0, 0.0, 10.0);
        b.set_capacity(o, c);
        let paths = solve(&b.build());
        for row in paths.iter().flatten() {
            prop_assert_eq!(row.velocity_mps, 0.0);
            prop_assert_eq!(row.reynolds, 0.0);
            prop_assert_eq!(row.friction, 0.0);
            prop_assert_eq!(row.k_tee, 0.0);
        }
    }
}
