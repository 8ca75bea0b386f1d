//! SI quantities used on the fluid API, with plain-`f64` constructors.
//!
//! Solver internals work on `.value`, which uom keeps in base SI units.

use uom::si::f64::{
    DynamicViscosity, Length as UomLength, MassDensity, Pressure as UomPressure,
    ThermodynamicTemperature,
};

pub type Density = MassDensity;
pub type DynVisc = DynamicViscosity;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Temperature = ThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    Pressure::new::<uom::si::pressure::pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    Temperature::new::<uom::si::thermodynamic_temperature::kelvin>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    Length::new::<uom::si::length::meter>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    Density::new::<uom::si::mass_density::kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    DynVisc::new::<uom::si::dynamic_viscosity::pascal_second>(v)
}

pub mod constants {
    /// J/(mol·K)
    pub const R_UNIVERSAL: f64 = 8.314_462_618;

    pub const PA_PER_BAR: f64 = 1.0e5;
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::pressure::bar;

    #[test]
    fn values_are_base_si() {
        assert_eq!(pa(101_325.0).value, 101_325.0);
        assert_eq!(k(283.15).value, 283.15);
        assert_eq!(m(0.05).value, 0.05);
        assert_eq!(kg_per_m3(0.7).value, 0.7);
        assert_eq!(pa_s(1.1e-5).value, 1.1e-5);
    }

    #[test]
    fn bar_conversion_matches_constant() {
        let p = pa(2.0 * constants::PA_PER_BAR);
        assert!((p.get::<bar>() - 2.0).abs() < 1e-12);
    }
}
