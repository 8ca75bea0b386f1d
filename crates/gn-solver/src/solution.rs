//! Solved state of one level.

use gn_fluids::FluidProperties;
use gn_network::PressureLevel;
use nalgebra::DVector;

use crate::problem::LevelProblem;

/// Physical solution of a level, sliced into its three blocks.
///
/// `node_flows[i]` is the mass node `i` withdraws from its pipes: positive
/// at consuming sinks, negative at supplying sources.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSolution {
    pub level: PressureLevel,
    /// Pa
    pub pressures: Vec<f64>,
    /// kg/s, positive from tail to head
    pub pipe_flows: Vec<f64>,
    /// kg/s
    pub node_flows: Vec<f64>,
    /// Demand served at SOURCE nodes without entering the pipes (kg/s).
    pub local_demands: Vec<f64>,
    pub fluid: FluidProperties,
    /// Newton iterations; zero for the direct linear solve.
    pub iterations: usize,
}

impl LevelSolution {
    pub(crate) fn from_vector(problem: &LevelProblem<'_>, x: &DVector<f64>, iterations: usize) -> Self {
        let n = problem.node_count();
        let e = problem.edge_count();
        Self {
            level: problem.level(),
            pressures: x.rows(0, n).iter().copied().collect(),
            pipe_flows: x.rows(n, e).iter().copied().collect(),
            node_flows: x.rows(n + e, n).iter().copied().collect(),
            local_demands: problem.local_demands.clone(),
            fluid: problem.fluid,
            iterations,
        }
    }

    /// Full unknown vector `[P, ṁ_pipe, ṁ_node]`.
    pub fn to_vector(&self) -> DVector<f64> {
        DVector::from_iterator(
            self.pressures.len() + self.pipe_flows.len() + self.node_flows.len(),
            self.pressures
                .iter()
                .chain(&self.pipe_flows)
                .chain(&self.node_flows)
                .copied(),
        )
    }

    /// External injection per node (`-node_flow`): a SINK shows `-demand`,
    /// a SOURCE shows what it pushes into the pipes.
    pub fn injections(&self) -> Vec<f64> {
        self.node_flows.iter().map(|m| -m).collect()
    }

    /// Total mass each node supplies: its injection into the pipes plus the
    /// demand it serves locally. Equals `injections()` except at SOURCE
    /// buses that also carry a load or a station's high side.
    pub fn supplied(&self) -> Vec<f64> {
        self.node_flows
            .iter()
            .zip(&self.local_demands)
            .map(|(m, local)| local - m)
            .collect()
    }
}
