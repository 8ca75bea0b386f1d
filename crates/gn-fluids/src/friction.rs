//! Pipe friction: Reynolds number, Darcy friction factor, pressure drop.

use std::f64::consts::PI;

use gn_core::ensure_finite;

use crate::error::{FluidError, FluidResult};

/// Below this Reynolds number the pressure drop uses the closed laminar
/// form, which stays finite and linear at zero flow.
pub const LAMINAR_FLOOR_RE: f64 = 1.0;

pub fn reynolds(rho: f64, velocity: f64, diameter: f64, mu: f64) -> f64 {
    rho * velocity.abs() * diameter / mu
}

/// Darcy friction factor (Churchill, 1977).
///
/// One expression covers laminar, transitional and turbulent flow and is
/// smooth in `re`, which keeps Newton Jacobians well behaved.
pub fn darcy_friction_factor(re: f64, relative_roughness: f64) -> FluidResult<f64> {
    if !(re > 0.0) || !re.is_finite() {
        return Err(FluidError::InvalidArg {
            what: "Reynolds number must be positive and finite",
        });
    }
    if !(relative_roughness >= 0.0) {
        return Err(FluidError::InvalidArg {
            what: "relative roughness must be non-negative",
        });
    }
    let a = (2.457 * (1.0 / ((7.0 / re).powf(0.9) + 0.27 * relative_roughness)).ln()).powi(16);
    let b = (37_530.0 / re).powi(16);
    let f = 8.0 * ((8.0 / re).powi(12) + (a + b).powf(-1.5)).powf(1.0 / 12.0);
    ensure_finite(f, "friction factor").map_err(|_| FluidError::NonPhysical {
        what: "friction factor",
    })
}

/// Signed pressure drop (Pa) along a pipe carrying `m_dot` kg/s from tail to head.
///
/// `Δp = f·L/D·ρ·v·|v|/2`, or `32·μ·L·v/D²` below [`LAMINAR_FLOOR_RE`].
pub fn pressure_drop(
    m_dot: f64,
    length: f64,
    diameter: f64,
    roughness: f64,
    rho: f64,
    mu: f64,
) -> FluidResult<f64> {
    if !(diameter > 0.0) || !(length > 0.0) {
        return Err(FluidError::InvalidArg {
            what: "pipe length and diameter must be positive",
        });
    }
    if !m_dot.is_finite() {
        return Err(FluidError::NonPhysical { what: "mass flow" });
    }
    let area = PI * diameter * diameter / 4.0;
    let v = m_dot / (rho * area);
    let re = reynolds(rho, v, diameter, mu);
    if re < LAMINAR_FLOOR_RE {
        return Ok(32.0 * mu * length * v / (diameter * diameter));
    }
    let f = darcy_friction_factor(re, roughness / diameter)?;
    Ok(f * length / diameter * rho * v * v.abs() / 2.0)
}

/// Resistance coefficient `k` of the linear model, `Δp = k·ṁ`.
///
/// `k = 128·L·D·μ / (D⁴·π·ρ)`
pub fn linear_resistance(length: f64, diameter: f64, rho: f64, mu: f64) -> f64 {
    128.0 * length * diameter * mu / (diameter.powi(4) * PI * rho)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn friction_factor_positive_and_finite(
            re in 1.0f64..1e8,
            rel in 0.0f64..0.05,
        ) {
            let f = darcy_friction_factor(re, rel).unwrap();
            prop_assert!(f.is_finite() && f > 0.0);
        }

        #[test]
        fn rougher_pipe_never_has_less_friction(
            re in 4000.0f64..1e7,
            rel in 0.0f64..0.04,
        ) {
            let smooth = darcy_friction_factor(re, rel).unwrap();
            let rough = darcy_friction_factor(re, rel + 0.005).unwrap();
            prop_assert!(rough >= smooth);
        }
    }
}
