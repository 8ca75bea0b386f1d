//! Error types for the gn-app service layer.

use std::path::PathBuf;

use gn_solver::SolverError;

/// Application error type shared by every front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to read network file: {path}")]
    NetworkFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Network validation failed: {0}")]
    Validation(String),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Fluid error: {0}")]
    Fluid(String),

    /// Kept typed so callers can tell a convergence failure from a structural one.
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Run not found: {0}")]
    RunNotFound(String),
}

/// Result type for gn-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// True when rerunning with the linear method may succeed.
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, AppError::Solver(SolverError::ConvergenceFailed { .. }))
    }
}

impl From<gn_network::NetworkError> for AppError {
    fn from(err: gn_network::NetworkError) -> Self {
        match err {
            gn_network::NetworkError::Validation(v) => AppError::Validation(v.to_string()),
            other => AppError::Network(other.to_string()),
        }
    }
}

impl From<gn_network::ValidationError> for AppError {
    fn from(err: gn_network::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<gn_graph::GraphError> for AppError {
    fn from(err: gn_graph::GraphError) -> Self {
        AppError::Graph(err.to_string())
    }
}

impl From<gn_fluids::FluidError> for AppError {
    fn from(err: gn_fluids::FluidError) -> Self {
        AppError::Fluid(err.to_string())
    }
}

impl From<gn_results::ResultsError> for AppError {
    fn from(err: gn_results::ResultsError) -> Self {
        match err {
            gn_results::ResultsError::RunNotFound { run_id } => AppError::RunNotFound(run_id),
            other => AppError::Results(other.to_string()),
        }
    }
}
