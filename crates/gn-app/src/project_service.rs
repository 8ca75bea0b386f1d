//! Network loading, saving, validation, and introspection.

use std::path::Path;

use gn_graph::graphs_by_level;
use gn_network::{BusRole, Network, NetworkError, PressureLevel};

use crate::error::{AppError, AppResult};

/// Summary of one pressure level for listing.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSummary {
    pub level: PressureLevel,
    /// Nominal gauge pressure (Pa).
    pub nominal_pa: f64,
    pub bus_count: usize,
    pub pipe_count: usize,
    pub sources: usize,
    pub sinks: usize,
    pub passive: usize,
}

/// Load a network from a YAML or JSON file.
pub fn load_network(path: &Path) -> AppResult<Network> {
    gn_network::load_network(path).map_err(|err| match err {
        NetworkError::Io(source) => AppError::NetworkFileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })
}

/// Save a network; `.json` files are written as JSON, everything else as YAML.
pub fn save_network(path: &Path, network: &Network) -> AppResult<()> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        gn_network::save_json(path, network)?;
    } else {
        gn_network::save_yaml(path, network)?;
    }
    Ok(())
}

/// Validate tables and check that every level component is supplied.
pub fn validate_network(network: &Network) -> AppResult<()> {
    gn_network::validate_network(network)?;
    for graph in graphs_by_level(network)? {
        graph.check_supplied()?;
    }
    Ok(())
}

/// One summary per level present, lowest pressure first.
pub fn level_summaries(network: &Network) -> AppResult<Vec<LevelSummary>> {
    let graphs = graphs_by_level(network)?;
    Ok(graphs
        .iter()
        .map(|graph| LevelSummary {
            level: graph.level(),
            nominal_pa: network.settings.levels.nominal(graph.level()),
            bus_count: graph.node_count(),
            pipe_count: graph.edge_count(),
            sources: graph.count_role(BusRole::Source),
            sinks: graph.count_role(BusRole::Sink),
            passive: graph.count_role(BusRole::Passive),
        })
        .collect())
}
