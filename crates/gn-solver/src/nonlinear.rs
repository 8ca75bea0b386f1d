//! Turbulent-friction residual system in nondimensional form.
//!
//! Scaled unknowns are `z = [P/P_ref, ṁ_pipe/ṁ_ref, ṁ_node/ṁ_ref]`.
//! Residual blocks, top to bottom: mass balance (N), pressure drop (E),
//! demand (PASSIVE and SINK nodes in node order), source pressure.

use gn_fluids::pressure_drop;
use gn_network::BusRole;
use nalgebra::{DMatrix, DVector};
use tracing::debug;

use crate::error::{SolverError, SolverResult};
use crate::incidence::incidence_matrix;
use crate::jacobian::finite_difference_jacobian;
use crate::newton::{NewtonConfig, newton_solve};
use crate::problem::LevelProblem;
use crate::solution::LevelSolution;

pub struct NonlinearSystem<'p, 'g> {
    problem: &'p LevelProblem<'g>,
    incidence: DMatrix<f64>,
}

impl<'p, 'g> NonlinearSystem<'p, 'g> {
    pub fn new(problem: &'p LevelProblem<'g>) -> Self {
        Self {
            problem,
            incidence: incidence_matrix(problem.graph),
        }
    }

    fn blocks(&self) -> (usize, usize) {
        (self.problem.node_count(), self.problem.edge_count())
    }

    /// Physical `[P, ṁ_pipe, ṁ_node]` to scaled unknowns.
    pub fn to_scaled(&self, x: &DVector<f64>) -> DVector<f64> {
        let (n, _) = self.blocks();
        let (p_ref, m_ref) = (self.problem.p_ref(), self.problem.m_dot_ref);
        DVector::from_iterator(
            x.len(),
            x.iter()
                .enumerate()
                .map(|(i, v)| if i < n { v / p_ref } else { v / m_ref }),
        )
    }

    pub fn to_physical(&self, z: &DVector<f64>) -> DVector<f64> {
        let (n, _) = self.blocks();
        let (p_ref, m_ref) = (self.problem.p_ref(), self.problem.m_dot_ref);
        DVector::from_iterator(
            z.len(),
            z.iter()
                .enumerate()
                .map(|(i, v)| if i < n { v * p_ref } else { v * m_ref }),
        )
    }

    pub fn residual(&self, z: &DVector<f64>) -> SolverResult<DVector<f64>> {
        let problem = self.problem;
        let (n, e) = self.blocks();
        let (p_ref, m_ref) = (problem.p_ref(), problem.m_dot_ref);
        let (rho, mu) = (problem.rho(), problem.mu());

        let p = z.rows(0, n);
        let m_pipe = z.rows(n, e);
        let m_node = z.rows(n + e, n);

        let mut out = Vec::with_capacity(z.len());

        let balance = &self.incidence * m_pipe - m_node;
        out.extend(balance.iter().copied());

        for edge in problem.graph.edges() {
            let j = edge.id.slot();
            let dp = pressure_drop(
                m_pipe[j] * m_ref,
                edge.length_m,
                edge.diameter_m,
                problem.roughness[j],
                rho,
                mu,
            )?;
            out.push(p[edge.head.slot()] - p[edge.tail.slot()] + dp / p_ref);
        }

        for node in problem.graph.nodes() {
            let i = node.id.slot();
            match node.role {
                BusRole::Passive => out.push(m_node[i]),
                BusRole::Sink => out.push(m_node[i] - problem.demands[i] / m_ref),
                BusRole::Source => {}
            }
        }

        for (i, fixed) in problem.pressures.iter().enumerate() {
            if let Some(p_op) = fixed {
                out.push(p[i] - p_op / p_ref);
            }
        }

        Ok(DVector::from_vec(out))
    }
}

/// Newton solve of the level, warm-started from `warm_start` (usually the
/// linear solution of the same level).
pub fn solve_nonlinear(
    problem: &LevelProblem<'_>,
    warm_start: &LevelSolution,
    config: &NewtonConfig,
) -> SolverResult<LevelSolution> {
    let level = problem.level();
    let system = NonlinearSystem::new(problem);
    let z0 = system.to_scaled(&warm_start.to_vector());

    let residual = |z: &DVector<f64>| system.residual(z);
    let jacobian = |z: &DVector<f64>| finite_difference_jacobian(z, residual, config.jacobian_epsilon);

    let result = newton_solve(z0, residual, jacobian, config).map_err(|e| match e {
        SolverError::Numeric { what } => SolverError::ConvergenceFailed { level, what },
        other => other,
    })?;

    if !result.converged {
        return Err(SolverError::ConvergenceFailed {
            level,
            what: format!(
                "no convergence after {} iterations (residual norm {:e})",
                result.iterations, result.residual_norm
            ),
        });
    }
    debug!(
        %level,
        iterations = result.iterations,
        residual = result.residual_norm,
        "newton converged"
    );

    Ok(LevelSolution::from_vector(
        problem,
        &system.to_physical(&result.x),
        result.iterations,
    ))
}
