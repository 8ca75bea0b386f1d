//! gn-core: shared foundation of the gasnet crates.
//!
//! - `units`: uom SI aliases, constructors and constants
//! - `numeric`: tolerances and rounding helpers
//! - `ids`: positional node and edge ids of a level graph
//! - `error`: the base error type

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

pub use error::{GnError, GnResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
