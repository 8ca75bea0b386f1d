#![allow(dead_code)]

use gn_core::units::{k, pa};
use gn_fluids::{FluidModel, FluidProperties, NaturalGas};
use gn_graph::{LevelGraph, LevelGraphBuilder};
use gn_network::{BusRole, PressureLevel};
use gn_solver::LevelBoundary;

pub const LHV: f64 = 38.1e6;
pub const P_REF_BP: f64 = 103_825.0;

pub fn bp_fluid() -> FluidProperties {
    NaturalGas::default()
        .properties(k(283.15), pa(P_REF_BP))
        .unwrap()
}

pub fn kw_to_kgps(p_kw: f64) -> f64 {
    p_kw * 1e3 / LHV
}

/// Six-bus, eight-pipe low-pressure level fed at BUS0 and BUS3.
pub fn bp_graph(length_m: f64, diameter_m: f64) -> LevelGraph {
    let roles = [
        ("BUS0", BusRole::Source),
        ("BUS4", BusRole::Sink),
        ("BUS5", BusRole::Sink),
        ("BUS1", BusRole::Passive),
        ("BUS2", BusRole::Sink),
        ("BUS3", BusRole::Source),
    ];
    let mut builder = LevelGraphBuilder::new(PressureLevel::Bp);
    let ids: Vec<_> = roles
        .iter()
        .enumerate()
        .map(|(i, (name, role))| builder.add_node(*name, *role, i))
        .collect();
    let slot = |bus: u32| match bus {
        0 => ids[0],
        4 => ids[1],
        5 => ids[2],
        1 => ids[3],
        2 => ids[4],
        _ => ids[5],
    };
    let pipes = [(0, 4), (0, 5), (4, 5), (1, 2), (1, 3), (1, 4), (2, 3), (2, 4)];
    for (j, (u, v)) in pipes.into_iter().enumerate() {
        builder.add_edge(
            format!("PIPE{u}-{v}"),
            slot(u),
            slot(v),
            length_m,
            diameter_m,
            "steel",
            j,
        );
    }
    builder.build().unwrap()
}

pub fn bp_boundary(loads_kw: [f64; 3]) -> LevelBoundary {
    LevelBoundary::new()
        .with_demand("BUS2", kw_to_kgps(loads_kw[0]))
        .with_demand("BUS4", kw_to_kgps(loads_kw[1]))
        .with_demand("BUS5", kw_to_kgps(loads_kw[2]))
        .with_pressure("BUS0", 1.022e5)
        .with_pressure("BUS3", 1.022e5)
}

pub fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() <= tol, "entry {i}: {a} vs {e} (tol {tol})");
    }
}

/// Max |incidence·pipe_flows - node_flows| over all nodes.
pub fn mass_imbalance(graph: &LevelGraph, pipe_flows: &[f64], node_flows: &[f64]) -> f64 {
    graph
        .nodes()
        .iter()
        .map(|node| {
            let inflow: f64 = graph
                .incident_edges(node.id)
                .map(|(edge, sign)| sign * pipe_flows[edge.id.slot()])
                .sum();
            (inflow - node_flows[node.id.slot()]).abs()
        })
        .fold(0.0, f64::max)
}
