//! Level solve entry point.

use gn_fluids::FluidProperties;
use gn_graph::LevelGraph;
use gn_network::Method;
use tracing::info;

use crate::error::SolverResult;
use crate::linear::solve_linear;
use crate::newton::NewtonConfig;
use crate::nonlinear::solve_nonlinear;
use crate::problem::{LevelBoundary, LevelProblem};
use crate::solution::LevelSolution;

#[derive(Debug, Clone)]
pub struct SolveSettings {
    pub method: Method,
    /// kg/s
    pub m_dot_ref: f64,
    pub newton: NewtonConfig,
}

impl Default for SolveSettings {
    fn default() -> Self {
        Self {
            method: Method::NonLinear,
            m_dot_ref: 1e-3,
            newton: NewtonConfig::default(),
        }
    }
}

/// Solves one level: always linear, then Newton from it for [`Method::NonLinear`].
pub fn solve_level(
    graph: &LevelGraph,
    fluid: FluidProperties,
    boundary: &LevelBoundary,
    settings: &SolveSettings,
) -> SolverResult<LevelSolution> {
    let problem = LevelProblem::new(graph, fluid, boundary, settings.m_dot_ref)?;
    let linear = solve_linear(&problem)?;
    let solution = match settings.method {
        Method::Linear => linear,
        Method::NonLinear => solve_nonlinear(&problem, &linear, &settings.newton)?,
    };
    info!(
        level = %graph.level(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        method = %settings.method,
        iterations = solution.iterations,
        "level solved"
    );
    Ok(solution)
}
