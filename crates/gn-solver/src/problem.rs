//! Problem definition for one pressure level.

use std::collections::BTreeMap;

use gn_fluids::{FluidProperties, roughness};
use gn_graph::LevelGraph;
use gn_network::{BusRole, PressureLevel};
use tracing::warn;

use crate::error::{SolverError, SolverResult};

/// Boundary data handed to one level solve, keyed by bus name.
///
/// Demands are mass flows (kg/s) withdrawn at a bus; pressures are
/// absolute operating pressures (Pa) fixed at SOURCE buses. A demand at a
/// SOURCE bus is served by that bus's own supply and never enters the pipes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelBoundary {
    pub sink_demands: BTreeMap<String, f64>,
    pub source_pressures: BTreeMap<String, f64>,
}

impl LevelBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds to the demand already recorded at the bus.
    pub fn add_demand(&mut self, bus: impl Into<String>, m_dot: f64) {
        *self.sink_demands.entry(bus.into()).or_insert(0.0) += m_dot;
    }

    pub fn set_pressure(&mut self, bus: impl Into<String>, p_pa: f64) {
        self.source_pressures.insert(bus.into(), p_pa);
    }

    pub fn with_demand(mut self, bus: impl Into<String>, m_dot: f64) -> Self {
        self.add_demand(bus, m_dot);
        self
    }

    pub fn with_pressure(mut self, bus: impl Into<String>, p_pa: f64) -> Self {
        self.set_pressure(bus, p_pa);
        self
    }
}

/// A level graph with its fluid state and boundary data resolved per node.
#[derive(Debug, Clone)]
pub struct LevelProblem<'a> {
    pub graph: &'a LevelGraph,
    pub fluid: FluidProperties,
    /// Absolute roughness per edge (m).
    pub roughness: Vec<f64>,
    /// Demand per node (kg/s); zero for non-SINK nodes.
    pub demands: Vec<f64>,
    /// Demand served directly at SOURCE nodes (kg/s); zero elsewhere.
    pub local_demands: Vec<f64>,
    /// Operating pressure per node (Pa); `None` for non-SOURCE nodes.
    pub pressures: Vec<Option<f64>>,
    /// Mass flow scale of the nonlinear unknowns (kg/s).
    pub m_dot_ref: f64,
}

impl<'a> LevelProblem<'a> {
    pub fn new(
        graph: &'a LevelGraph,
        fluid: FluidProperties,
        boundary: &LevelBoundary,
        m_dot_ref: f64,
    ) -> SolverResult<Self> {
        let level = graph.level();
        if !(m_dot_ref > 0.0) {
            return Err(SolverError::Numeric {
                what: format!("reference mass flow must be positive, got {m_dot_ref}"),
            });
        }

        graph
            .check_supplied()
            .map_err(|e| SolverError::Structural {
                level,
                what: e.to_string(),
            })?;

        let mut demands = vec![0.0; graph.node_count()];
        let mut local_demands = vec![0.0; graph.node_count()];
        let mut pressures = vec![None; graph.node_count()];
        for node in graph.nodes() {
            let slot = node.id.slot();
            match node.role {
                BusRole::Sink => {
                    let demand = boundary.sink_demands.get(&node.name).copied().ok_or_else(|| {
                        missing(level, format!("no demand available for SINK bus {}", node.name))
                    })?;
                    demands[slot] = finite(level, &node.name, "demand", demand)?;
                }
                BusRole::Source => {
                    let p = boundary.source_pressures.get(&node.name).copied().ok_or_else(|| {
                        missing(
                            level,
                            format!("no operating pressure for SOURCE bus {}", node.name),
                        )
                    })?;
                    pressures[slot] = Some(finite(level, &node.name, "pressure", p)?);
                    if let Some(&demand) = boundary.sink_demands.get(&node.name) {
                        local_demands[slot] = finite(level, &node.name, "demand", demand)?;
                    }
                }
                BusRole::Passive => {}
            }
        }

        for name in boundary.sink_demands.keys() {
            if graph.node_by_name(name).is_none_or(|n| n.role == BusRole::Passive) {
                warn!(%level, bus = %name, "ignoring demand on a bus that is neither SINK nor SOURCE of this level");
            }
        }

        let roughness = graph
            .edges()
            .iter()
            .map(|e| roughness(&e.material).map(|r| r.value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            graph,
            fluid,
            roughness,
            demands,
            local_demands,
            pressures,
            m_dot_ref,
        })
    }

    pub fn level(&self) -> PressureLevel {
        self.graph.level()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Length of the unknown vector, `2N + E`.
    pub fn dimension(&self) -> usize {
        2 * self.node_count() + self.edge_count()
    }

    pub fn rho(&self) -> f64 {
        self.fluid.density.value
    }

    pub fn mu(&self) -> f64 {
        self.fluid.viscosity.value
    }

    pub fn p_ref(&self) -> f64 {
        self.fluid.reference_pressure.value
    }

    pub fn role_mask(&self, role: BusRole) -> Vec<bool> {
        self.graph.nodes().iter().map(|n| n.role == role).collect()
    }
}

fn missing(level: PressureLevel, what: String) -> SolverError {
    SolverError::MissingBoundary { level, what }
}

fn finite(level: PressureLevel, bus: &str, what: &str, value: f64) -> SolverResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolverError::MissingBoundary {
            level,
            what: format!("non-finite {what} {value} at bus {bus}"),
        })
    }
}
