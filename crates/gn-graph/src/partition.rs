//! Network to per-level graphs.

use std::collections::HashMap;

use gn_core::NodeId;
use gn_network::{Network, PressureLevel};

use crate::builder::LevelGraphBuilder;
use crate::error::{GraphError, GraphResult};
use crate::graph::LevelGraph;

/// Induced subgraph of one level: its buses in bus table order and its
/// in-service pipes in pipe table order. Stations never appear.
pub fn graph_for_level(network: &Network, level: PressureLevel) -> GraphResult<LevelGraph> {
    let mut builder = LevelGraphBuilder::new(level);
    let mut ids: HashMap<&str, NodeId> = HashMap::new();

    for (bus_index, bus) in network.buses.iter().enumerate() {
        if bus.level == level {
            let id = builder.add_node(bus.name.clone(), bus.role, bus_index);
            ids.insert(bus.name.as_str(), id);
        }
    }

    for (pipe_index, pipe) in network.pipes.iter().enumerate() {
        if !pipe.in_service {
            continue;
        }
        let tail = ids.get(pipe.from_bus.as_str()).copied();
        let head = ids.get(pipe.to_bus.as_str()).copied();
        match (tail, head) {
            (Some(tail), Some(head)) => {
                builder.add_edge(
                    pipe.name.clone(),
                    tail,
                    head,
                    pipe.length_m,
                    pipe.diameter_m,
                    pipe.material.clone(),
                    pipe_index,
                );
            }
            (None, None) => {}
            (Some(_), None) => {
                return Err(GraphError::UnknownBus {
                    level,
                    pipe: pipe.name.clone(),
                    bus: pipe.to_bus.clone(),
                });
            }
            (None, Some(_)) => {
                return Err(GraphError::UnknownBus {
                    level,
                    pipe: pipe.name.clone(),
                    bus: pipe.from_bus.clone(),
                });
            }
        }
    }

    builder.build()
}

/// One graph per level present in the bus table, ascending by nominal pressure.
pub fn graphs_by_level(network: &Network) -> GraphResult<Vec<LevelGraph>> {
    network
        .levels_present()
        .into_iter()
        .map(|level| graph_for_level(network, level))
        .collect()
}
