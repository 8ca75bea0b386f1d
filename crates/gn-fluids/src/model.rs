//! Fluid property model trait and validation helpers.

use crate::error::{FluidError, FluidResult};
use gn_core::units::{Density, DynVisc, Pressure, Temperature};

/// Properties of the gas on one pressure level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FluidProperties {
    pub density: Density,
    pub viscosity: DynVisc,
    /// Pressure the properties were evaluated at; used to scale the level's pressures.
    pub reference_pressure: Pressure,
}

/// Trait for fluid property models.
///
/// A level is isothermal and its properties are frozen at the level's
/// reference pressure, so a model only answers (T, P) queries.
pub trait FluidModel: Send + Sync {
    fn name(&self) -> &str;

    fn density(&self, t: Temperature, p: Pressure) -> FluidResult<Density>;

    fn viscosity(&self, t: Temperature, p: Pressure) -> FluidResult<DynVisc>;

    /// Density, viscosity and reference pressure in one call.
    fn properties(&self, t: Temperature, p: Pressure) -> FluidResult<FluidProperties> {
        validation::validate_temperature(t)?;
        validation::validate_pressure(p)?;
        let density = self.density(t, p)?;
        validation::validate_density(density)?;
        let viscosity = self.viscosity(t, p)?;
        validation::validate_viscosity(viscosity)?;
        Ok(FluidProperties {
            density,
            viscosity,
            reference_pressure: p,
        })
    }
}

pub mod validation {
    use super::*;

    pub fn validate_temperature(t: Temperature) -> FluidResult<()> {
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        Ok(())
    }

    pub fn validate_pressure(p: Pressure) -> FluidResult<()> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    pub fn validate_density(rho: Density) -> FluidResult<()> {
        if !rho.value.is_finite() || rho.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "density must be positive and finite",
            });
        }
        Ok(())
    }

    pub fn validate_viscosity(mu: DynVisc) -> FluidResult<()> {
        if !mu.value.is_finite() || mu.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "viscosity must be positive and finite",
            });
        }
        Ok(())
    }
}
