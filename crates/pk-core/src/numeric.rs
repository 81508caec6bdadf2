//! Float comparison and finiteness helpers shared by the reaction crates.

use crate::PkError;

/// Scalar used for densities (m^-3), temperatures (V) and rates.
pub type Real = f64;

/// Absolute and relative comparison bounds.
///
/// The default relative bound is what the reaction tests need when comparing
/// closed-form rates around 1e17..1e20 m^-3 s^-1.
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

/// `|a - b|` within `tol.abs`, or within `tol.rel` of the larger magnitude.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

/// Pass `v` through unless it is NaN or infinite.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PkError> {
    if !v.is_finite() {
        return Err(PkError::NonFinite { what, value: v });
    }
    Ok(v)
}

/// Sum a slice in index order.
///
/// Callers that need reproducible totals (e.g. neutral density over the
/// catalog) go through here so the summation order never depends on the
/// iterator adapter in use.
pub fn ordered_sum(values: impl IntoIterator<Item = Real>) -> Real {
    let mut total = 0.0;
    for v in values {
        total += v;
    }
    total
}
