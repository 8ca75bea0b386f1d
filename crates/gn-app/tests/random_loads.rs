mod common;

use common::simple_network;
use gn_app::{RunOptions, run_network};
use gn_network::Method;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn feeder_supplies_every_load(loads in prop::array::uniform3(0.0f64..50.0)) {
        let mut net = simple_network();
        for (load, kw) in net.loads.iter_mut().zip(loads) {
            load.p_kw = kw;
        }
        let outcome = run_network(&net, &RunOptions {
            method: Some(Method::NonLinear),
            ..RunOptions::default()
        });
        prop_assert!(outcome.is_ok(), "{:?}", outcome.err());
        let res = outcome.unwrap().results;

        let total: f64 = loads.iter().sum::<f64>() * 1e3 / net.settings.lhv_j_per_kg;
        let feeder = res.feeder("FEEDER").unwrap().m_dot_kg_s;
        prop_assert!((feeder - total).abs() <= 1e-9, "feeder {} vs loads {}", feeder, total);
        prop_assert_eq!(res.bus("BUS0").unwrap().p_pa, 102_200.0);
    }
}
