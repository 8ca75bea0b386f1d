//! gn-fluids: gas properties and pipe friction for gasnet.
//!
//! Provides:
//! - `FluidModel` trait returning density, viscosity and the reference
//!   pressure of a level
//! - `NaturalGas`: ideal-gas density with Sutherland viscosity
//! - Pipe material roughness table
//! - Reynolds number, Darcy friction factor and pressure drop helpers
//!
//! # Example
//!
//! ```
//! use gn_core::units::{k, pa};
//! use gn_fluids::{FluidModel, NaturalGas};
//!
//! let gas = NaturalGas::default();
//! let props = gas.properties(k(283.15), pa(103_825.0)).unwrap();
//! assert!(props.density.value > 0.7 && props.density.value < 0.72);
//! ```

pub mod error;
pub mod friction;
pub mod model;
pub mod natural_gas;
pub mod roughness;

pub use error::{FluidError, FluidResult};
pub use friction::{
    LAMINAR_FLOOR_RE, darcy_friction_factor, linear_resistance, pressure_drop, reynolds,
};
pub use model::{FluidModel, FluidProperties};
pub use natural_gas::NaturalGas;
pub use roughness::{Material, materials, roughness};
