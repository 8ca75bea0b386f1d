//! Ideal-gas natural gas model.

use gn_core::units::constants::R_UNIVERSAL;
use gn_core::units::{Density, DynVisc, Pressure, Temperature, kg_per_m3, pa_s};

use crate::error::FluidResult;
use crate::model::{FluidModel, validation};

/// Natural gas treated as an ideal gas with Sutherland viscosity.
///
/// Defaults describe methane, which dominates distribution gas.
#[derive(Clone, Debug, PartialEq)]
pub struct NaturalGas {
    /// kg/mol
    pub molar_mass: f64,
    /// Viscosity at `t_ref_k`, Pa·s.
    pub mu_ref: f64,
    pub t_ref_k: f64,
    /// Sutherland constant, K.
    pub sutherland_k: f64,
}

impl Default for NaturalGas {
    fn default() -> Self {
        Self {
            molar_mass: 0.016_043,
            mu_ref: 1.03e-5,
            t_ref_k: 273.15,
            sutherland_k: 198.0,
        }
    }
}

impl FluidModel for NaturalGas {
    fn name(&self) -> &str {
        "natural-gas (ideal)"
    }

    fn density(&self, t: Temperature, p: Pressure) -> FluidResult<Density> {
        validation::validate_temperature(t)?;
        validation::validate_pressure(p)?;
        Ok(kg_per_m3(p.value * self.molar_mass / (R_UNIVERSAL * t.value)))
    }

    fn viscosity(&self, t: Temperature, _p: Pressure) -> FluidResult<DynVisc> {
        validation::validate_temperature(t)?;
        let t = t.value;
        let ratio = t / self.t_ref_k;
        let mu = self.mu_ref * ratio * ratio.sqrt() * (self.t_ref_k + self.sutherland_k)
            / (t + self.sutherland_k);
        Ok(pa_s(mu))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gn_core::units::{k, pa};

    #[test]
    fn density_at_ground_temperature() {
        let gas = NaturalGas::default();
        let rho = gas.density(k(283.15), pa(1.022e5)).unwrap();
        assert!((rho.value - 0.696_443_241_6).abs() < 1e-9);
    }

    #[test]
    fn viscosity_at_reference_temperature_is_reference() {
        let gas = NaturalGas::default();
        let mu = gas.viscosity(k(273.15), pa(1e5)).unwrap();
        assert!((mu.value - 1.03e-5).abs() < 1e-15);
        let warm = gas.viscosity(k(283.15), pa(1e5)).unwrap();
        assert!((warm.value - 1.064_483_59e-5).abs() < 1e-13);
    }

    #[test]
    fn properties_report_reference_pressure() {
        let gas = NaturalGas::default();
        let props = gas.properties(k(283.15), pa(201_325.0)).unwrap();
        assert_eq!(props.reference_pressure.value, 201_325.0);
    }

    #[test]
    fn non_physical_inputs_rejected() {
        let gas = NaturalGas::default();
        assert!(gas.properties(k(-1.0), pa(1e5)).is_err());
        assert!(gas.properties(k(283.15), pa(0.0)).is_err());
        assert!(gas.properties(k(f64::NAN), pa(1e5)).is_err());
    }
}
