mod common;

use common::*;
use gn_network::Method;
use gn_solver::{SolveSettings, solve_level};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn every_node_balances_under_random_loads(
        a in 0.0f64..50.0,
        b in 0.0f64..50.0,
        c in 0.0f64..50.0,
        nonlinear in any::<bool>(),
    ) {
        let graph = bp_graph(1e4, 0.05);
        let boundary = bp_boundary([a, b, c]);
        let settings = SolveSettings {
            method: if nonlinear { Method::NonLinear } else { Method::Linear },
            ..SolveSettings::default()
        };
        let solution = solve_level(&graph, bp_fluid(), &boundary, &settings).unwrap();

        prop_assert!(mass_imbalance(&graph, &solution.pipe_flows, &solution.node_flows) < 1e-10);
        let supplied: f64 = solution.injections().iter().filter(|m| **m > 0.0).sum();
        prop_assert!((supplied - kw_to_kgps(a + b + c)).abs() < 1e-10);
        prop_assert!((solution.pressures[0] - 1.022e5).abs() < 1e-3);
        prop_assert!((solution.pressures[5] - 1.022e5).abs() < 1e-3);
    }
}
