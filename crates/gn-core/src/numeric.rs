use crate::GnError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute and relative tolerance pair.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    /// Element-wise check used after a direct linear solve.
    pub const RESIDUAL_CHECK: Tolerances = Tolerances {
        abs: 1e-8,
        rel: 1e-5,
    };
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, GnError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GnError::NonFinite { what, value: v })
    }
}

/// Round half away from zero to a fixed number of decimals.
pub fn round_to(v: Real, decimals: i32) -> Real {
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}
