//! Laminar linear system: assembly and direct solve.
//!
//! Row blocks of `A·x = B`, top to bottom:
//! 1. pipe resistance (E rows): `P_head - P_tail + k·ṁ_pipe = 0`
//! 2. nodal mass balance (N rows): `incidence·ṁ_pipe - ṁ_node = 0`
//! 3. demand: PASSIVE rows `ṁ_node = 0`, then SINK rows `ṁ_node = demand`
//! 4. pressure: SOURCE rows `P = P_operating`

use gn_core::{Tolerances, nearly_equal};
use gn_fluids::linear_resistance;
use gn_network::BusRole;
use nalgebra::{DMatrix, DVector, RowDVector};
use tracing::debug;

use crate::error::{SolverError, SolverResult};
use crate::incidence::incidence_matrix;
use crate::problem::LevelProblem;
use crate::solution::LevelSolution;

#[derive(Debug, Clone)]
pub struct LinearSystem {
    pub a: DMatrix<f64>,
    pub b: DVector<f64>,
}

/// One unit row of width `width` per `true` entry of `mask`, with the 1 at
/// column `offset + i`.
pub fn selection_rows(mask: &[bool], width: usize, offset: usize) -> Vec<RowDVector<f64>> {
    mask.iter()
        .enumerate()
        .filter(|(_, selected)| **selected)
        .map(|(i, _)| {
            let mut row = RowDVector::zeros(width);
            row[offset + i] = 1.0;
            row
        })
        .collect()
}

/// Stacks rows into a matrix; an empty list gives a `0×width` block.
pub fn stack_rows(rows: &[RowDVector<f64>], width: usize) -> DMatrix<f64> {
    let mut block = DMatrix::zeros(rows.len(), width);
    for (i, row) in rows.iter().enumerate() {
        block.set_row(i, row);
    }
    block
}

fn place(a: &mut DMatrix<f64>, row: usize, block: &DMatrix<f64>) -> usize {
    if block.nrows() > 0 {
        a.view_mut((row, 0), block.shape()).copy_from(block);
    }
    row + block.nrows()
}

pub fn assemble_linear(problem: &LevelProblem<'_>) -> LinearSystem {
    let n = problem.node_count();
    let e = problem.edge_count();
    let dim = problem.dimension();
    let inc = incidence_matrix(problem.graph);
    let (rho, mu) = (problem.rho(), problem.mu());

    let mut pipes = DMatrix::zeros(e, dim);
    pipes.view_mut((0, 0), (e, n)).copy_from(&inc.transpose());
    for edge in problem.graph.edges() {
        let j = edge.id.slot();
        pipes[(j, n + j)] = linear_resistance(edge.length_m, edge.diameter_m, rho, mu);
    }

    let mut balance = DMatrix::zeros(n, dim);
    balance.view_mut((0, n), (n, e)).copy_from(&inc);
    for i in 0..n {
        balance[(i, n + e + i)] = -1.0;
    }

    let passive_mask = problem.role_mask(BusRole::Passive);
    let sink_mask = problem.role_mask(BusRole::Sink);
    let source_mask = problem.role_mask(BusRole::Source);
    let passive = stack_rows(&selection_rows(&passive_mask, dim, n + e), dim);
    let sinks = stack_rows(&selection_rows(&sink_mask, dim, n + e), dim);
    let sources = stack_rows(&selection_rows(&source_mask, dim, 0), dim);

    let mut a = DMatrix::zeros(dim, dim);
    let mut row = place(&mut a, 0, &pipes);
    row = place(&mut a, row, &balance);
    row = place(&mut a, row, &passive);
    let sink_start = row;
    row = place(&mut a, row, &sinks);
    let source_start = row;
    place(&mut a, row, &sources);

    let mut b = DVector::zeros(dim);
    let sink_values = problem
        .demands
        .iter()
        .zip(&sink_mask)
        .filter(|(_, selected)| **selected)
        .map(|(d, _)| *d);
    for (k, demand) in sink_values.enumerate() {
        b[sink_start + k] = demand;
    }
    let source_values = problem.pressures.iter().filter_map(|p| *p);
    for (k, p) in source_values.enumerate() {
        b[source_start + k] = p;
    }

    LinearSystem { a, b }
}

/// Dense LU solve with an element-wise residual check.
pub fn solve_linear(problem: &LevelProblem<'_>) -> SolverResult<LevelSolution> {
    let level = problem.level();
    let system = assemble_linear(problem);
    if system.a.nrows() != system.a.ncols() || system.a.nrows() != system.b.len() {
        return Err(SolverError::Structural {
            level,
            what: format!(
                "linear system is {}x{} with {} right-hand sides",
                system.a.nrows(),
                system.a.ncols(),
                system.b.len()
            ),
        });
    }

    let x = system
        .a
        .clone()
        .lu()
        .solve(&system.b)
        .ok_or_else(|| SolverError::Structural {
            level,
            what: "singular linear system".to_string(),
        })?;

    if let Some(i) = x.iter().position(|v| !v.is_finite()) {
        return Err(SolverError::Structural {
            level,
            what: format!("non-finite entry {} in linear solution", i),
        });
    }

    let ax = &system.a * &x;
    let bad_row = ax
        .iter()
        .zip(system.b.iter())
        .position(|(lhs, rhs)| !nearly_equal(*lhs, *rhs, Tolerances::RESIDUAL_CHECK));
    if let Some(row) = bad_row {
        return Err(SolverError::Structural {
            level,
            what: format!(
                "residual check failed at row {}: A·x = {} but B = {}",
                row, ax[row], system.b[row]
            ),
        });
    }
    debug!(%level, residual = (ax - &system.b).norm(), "linear solve");

    Ok(LevelSolution::from_vector(problem, &x, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_rows_pick_masked_slots() {
        let rows = selection_rows(&[false, true, false, true], 10, 4);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][5], 1.0);
        assert_eq!(rows[1][7], 1.0);
        assert_eq!(rows[0].sum(), 1.0);
    }

    #[test]
    fn empty_selection_stacks_to_zero_rows() {
        let rows = selection_rows(&[false, false], 6, 0);
        assert!(rows.is_empty());
        let block = stack_rows(&rows, 6);
        assert_eq!(block.shape(), (0, 6));

        let mut a = DMatrix::<f64>::zeros(2, 6);
        assert_eq!(place(&mut a, 2, &block), 2);
    }
}
