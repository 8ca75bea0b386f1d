//! Fluid property errors.

use gn_core::GnError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative density, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Pipe material missing from the roughness table.
    #[error("Unknown pipe material '{material}'")]
    UnknownMaterial { material: String },
}

impl From<FluidError> for GnError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::InvalidArg { what } => GnError::InvalidArg { what },
            other => GnError::Invariant {
                what: other.to_string(),
            },
        }
    }
}
