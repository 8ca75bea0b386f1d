//! Steady-state solver for one pressure level of a gas network.
//!
//! Unknowns are ordered `[P_1..P_N, ṁ_pipe_1..ṁ_pipe_E, ṁ_node_1..ṁ_node_N]`.
//! The linear path assembles a square laminar system and solves it directly;
//! the nonlinear path root-finds turbulent-friction residuals with Newton,
//! warm-started from the linear solution.

pub mod error;
pub mod incidence;
pub mod jacobian;
pub mod linear;
pub mod newton;
pub mod nonlinear;
pub mod problem;
pub mod solution;
pub mod solve;

pub use error::{SolverError, SolverResult};
pub use linear::{LinearSystem, assemble_linear, selection_rows, solve_linear, stack_rows};
pub use newton::{NewtonConfig, NewtonResult};
pub use nonlinear::{NonlinearSystem, solve_nonlinear};
pub use problem::{LevelBoundary, LevelProblem};
pub use solution::LevelSolution;
pub use solve::{SolveSettings, solve_level};
