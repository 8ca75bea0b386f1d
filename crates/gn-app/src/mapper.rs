//! Maps level solutions to result tables.

use gn_core::round_to;
use gn_core::units::constants::PA_PER_BAR;
use gn_graph::LevelGraph;
use gn_network::Network;
use gn_results::{BusResult, PipeResult, ResultTables, SupplyResult};
use gn_solver::LevelSolution;

use crate::error::{AppError, AppResult};

/// Collects result rows level by level, keeping network table order.
///
/// Each table has one slot per network row; a level fills the slots of its
/// own buses, pipes, feeders and stations. Out-of-service pipes are filled
/// up front with zero rows.
#[derive(Debug)]
pub struct ResultMapper<'a> {
    network: &'a Network,
    bus: Vec<Option<BusResult>>,
    pipe: Vec<Option<PipeResult>>,
    feeder: Vec<Option<SupplyResult>>,
    station: Vec<Option<SupplyResult>>,
}

impl<'a> ResultMapper<'a> {
    pub fn new(network: &'a Network) -> Self {
        let pipe = network
            .pipes
            .iter()
            .map(|p| (!p.in_service).then(|| PipeResult::idle(&p.name)))
            .collect();
        Self {
            network,
            bus: vec![None; network.buses.len()],
            pipe,
            feeder: vec![None; network.feeders.len()],
            station: vec![None; network.stations.len()],
        }
    }

    /// Writes the rows belonging to one solved level.
    pub fn record_level(&mut self, graph: &LevelGraph, solution: &LevelSolution) {
        let network = self.network;
        let settings = &network.settings;
        let lhv_kw = settings.lhv_j_per_kg / 1e3;
        let rho = solution.fluid.density.value;

        for node in graph.nodes() {
            let p = solution.pressures[node.id.slot()];
            self.bus[node.bus_index] = Some(BusResult {
                name: node.name.clone(),
                p_pa: round_to(p, 0),
                p_bar: round_to(p / PA_PER_BAR, 2),
            });
        }

        for edge in graph.edges() {
            let m_dot = solution.pipe_flows[edge.id.slot()];
            let v = m_dot / rho / edge.area_m2();
            self.pipe[edge.pipe_index] = Some(PipeResult {
                name: edge.name.clone(),
                m_dot_kg_s: m_dot,
                v_m_s: round_to(v, 2),
                p_kw: round_to(m_dot * lhv_kw, 1),
                loading_pct: round_to((100.0 * v / settings.v_max_m_per_s).abs(), 1),
            });
        }

        // Supply includes demand served at the SOURCE bus itself.
        let supplied = solution.supplied();
        let supply = |name: &str, bus: &str, p_lim_kw: f64| {
            graph.node_by_name(bus).map(|node| {
                let m_dot = supplied[node.id.slot()];
                let p_kw = m_dot * lhv_kw;
                SupplyResult {
                    name: name.to_string(),
                    m_dot_kg_s: m_dot,
                    p_kw,
                    loading_pct: round_to((p_kw / p_lim_kw).abs() * 100.0, 1),
                }
            })
        };

        for (i, feeder) in network.feeders.iter().enumerate() {
            if let Some(row) = supply(&feeder.name, &feeder.bus, feeder.p_lim_kw) {
                self.feeder[i] = Some(row);
            }
        }
        for (i, station) in network.stations.iter().enumerate() {
            if let Some(row) = supply(&station.name, &station.bus_low, station.p_lim_kw) {
                self.station[i] = Some(row);
            }
        }
    }

    /// Assembles the tables; every row must have been filled by some level.
    pub fn finish(self) -> AppResult<ResultTables> {
        let network = self.network;
        Ok(ResultTables {
            bus: collect_rows(self.bus, "bus", |i| &network.buses[i].name)?,
            pipe: collect_rows(self.pipe, "pipe", |i| &network.pipes[i].name)?,
            feeder: collect_rows(self.feeder, "feeder", |i| &network.feeders[i].name)?,
            station: collect_rows(self.station, "station", |i| &network.stations[i].name)?,
        })
    }
}

fn collect_rows<'n, T>(
    rows: Vec<Option<T>>,
    table: &str,
    name_of: impl Fn(usize) -> &'n String,
) -> AppResult<Vec<T>> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            row.ok_or_else(|| {
                AppError::Results(format!("no result for {table} {}", name_of(i)))
            })
        })
        .collect()
}
