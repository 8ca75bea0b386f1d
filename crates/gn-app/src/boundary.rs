//! Boundary data for one level, including the station handoff between levels.

use std::collections::BTreeMap;

use gn_graph::LevelGraph;
use gn_network::{Load, Network, PressureLevel};
use gn_solver::{LevelBoundary, LevelSolution, SolverError};

/// Mass flow (kg/s) drawn by a load: `p_kW · scaling · 1000 / LHV`.
pub fn load_mass_flow(load: &Load, lhv_j_per_kg: f64) -> f64 {
    load.p_kw * load.scaling * 1e3 / lhv_j_per_kg
}

/// Station flows solved so far, keyed by station name (kg/s delivered to the low side).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationFlows {
    flows: BTreeMap<String, f64>,
}

impl StationFlows {
    pub fn get(&self, station: &str) -> Option<f64> {
        self.flows.get(station).copied()
    }

    /// Records every station whose low bus belongs to the solved level.
    ///
    /// The recorded flow is everything the low bus supplies, including a
    /// load or a further station served at that bus.
    pub fn record(&mut self, network: &Network, graph: &LevelGraph, solution: &LevelSolution) {
        let supplied = solution.supplied();
        for station in &network.stations {
            if let Some(node) = graph.node_by_name(&station.bus_low) {
                self.flows
                    .insert(station.name.clone(), supplied[node.id.slot()]);
            }
        }
    }
}

/// Demands and operating pressures for the buses of `level`.
///
/// A station feeding from this level contributes its low-side flow as a
/// demand at its high bus; that flow must already be in `stations`, i.e.
/// the lower level must have been solved first.
pub fn level_boundary(
    network: &Network,
    level: PressureLevel,
    stations: &StationFlows,
) -> Result<LevelBoundary, SolverError> {
    let on_level = |bus: &str| network.bus(bus).is_some_and(|b| b.level == level);
    let mut boundary = LevelBoundary::new();

    for load in network.loads.iter().filter(|l| on_level(&l.bus)) {
        boundary.add_demand(
            load.bus.clone(),
            load_mass_flow(load, network.settings.lhv_j_per_kg),
        );
    }

    for station in &network.stations {
        if on_level(&station.bus_high) {
            let flow = stations
                .get(&station.name)
                .ok_or_else(|| SolverError::MissingBoundary {
                    level,
                    what: format!(
                        "station {} has not been solved on its low side ({})",
                        station.name, station.bus_low
                    ),
                })?;
            boundary.add_demand(station.bus_high.clone(), flow);
        }
        if on_level(&station.bus_low) {
            boundary.set_pressure(station.bus_low.clone(), station.p_pa);
        }
    }

    for feeder in network.feeders.iter().filter(|f| on_level(&f.bus)) {
        boundary.set_pressure(feeder.bus.clone(), feeder.p_pa);
    }

    Ok(boundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_level() -> Network {
        let mut net = Network::new("two-level");
        net.create_bus("MP0", PressureLevel::Mp, None).unwrap();
        net.create_bus("MP1", PressureLevel::Mp, None).unwrap();
        net.create_bus("BP0", PressureLevel::Bp, None).unwrap();
        net.create_bus("BP1", PressureLevel::Bp, None).unwrap();
        net.create_pipe("PMP", "MP1", "MP0", 100.0, 0.05, "steel").unwrap();
        net.create_pipe("PBP", "BP0", "BP1", 100.0, 0.05, "steel").unwrap();
        net.create_station("ST", "MP0", "BP0", 50.0, 1.022e5).unwrap();
        net.create_feeder("F", "MP1", 50.0, 0.9e5).unwrap();
        net.create_load("L1", "BP1", 10.0, 0.0, 1.0).unwrap();
        net.create_load("L2", "BP1", 5.0, 0.0, 2.0).unwrap();
        net
    }

    #[test]
    fn load_conversion_uses_scaling_and_lhv() {
        let net = two_level();
        let m = load_mass_flow(&net.loads[1], 38.1e6);
        assert!((m - 10.0e3 / 38.1e6).abs() < 1e-18);
    }

    #[test]
    fn loads_on_one_bus_are_summed() {
        let net = two_level();
        let boundary = level_boundary(&net, PressureLevel::Bp, &StationFlows::default()).unwrap();
        let expected = 20.0e3 / 38.1e6;
        assert!((boundary.sink_demands["BP1"] - expected).abs() < 1e-15);
        assert_eq!(boundary.source_pressures["BP0"], 1.022e5);
        assert_eq!(boundary.sink_demands.len(), 1);
    }

    #[test]
    fn high_level_before_low_level_is_missing_boundary() {
        let net = two_level();
        let err = level_boundary(&net, PressureLevel::Mp, &StationFlows::default()).unwrap_err();
        assert!(matches!(
            err,
            SolverError::MissingBoundary {
                level: PressureLevel::Mp,
                ..
            }
        ));
        assert!(err.to_string().contains("ST"));
    }

    #[test]
    fn station_flow_becomes_high_side_demand() {
        let net = two_level();
        let mut stations = StationFlows::default();
        stations.flows.insert("ST".into(), 4.2e-4);
        let boundary = level_boundary(&net, PressureLevel::Mp, &stations).unwrap();
        assert_eq!(boundary.sink_demands["MP0"], 4.2e-4);
        assert_eq!(boundary.source_pressures["MP1"], 0.9e5);
    }
}
