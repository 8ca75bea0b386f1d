//! Error types for level solving.

use gn_core::GnError;
use gn_fluids::FluidError;
use gn_network::PressureLevel;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    /// Singular system, unsupplied island or failed residual check.
    #[error("Structural error on level {level}: {what}")]
    Structural { level: PressureLevel, what: String },

    /// Newton gave up; the linear method is still available to the caller.
    #[error("Convergence failed on level {level}: {what}")]
    ConvergenceFailed { level: PressureLevel, what: String },

    /// A SINK without demand or a SOURCE without operating pressure.
    #[error("Missing boundary data on level {level}: {what}")]
    MissingBoundary { level: PressureLevel, what: String },

    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),

    #[error("Numeric error: {what}")]
    Numeric { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for GnError {
    fn from(e: SolverError) -> Self {
        GnError::Invariant {
            what: e.to_string(),
        }
    }
}
