use crate::PnError;

/// Floating point type used throughout the engine
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
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

/// Division that short-circuits to 0 instead of producing NaN/inf.
///
/// Every diameter-dependent formula in the evaluator must go through this (or
/// an equivalent guard): a partially drawn diagram routinely has zero
/// diameters, and the engine promises zeros, never NaN, for those.
pub fn div_or_zero(num: Real, den: Real) -> Real {
    if den == 0.0 { 0.0 } else { num / den }
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PnError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PnError::NonFinite { what, value: v })
    }
}
