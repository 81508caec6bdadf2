//! RightHandSide trait consumed by external integrators.

use crate::error::ModelResult;
use nalgebra::DVector;

/// State derivative `dx/dt = f(x)` of a discharge model.
///
/// The state holds `nb` densities followed by the electron, monatomic and
/// diatomic temperatures. The returned vector has the same length; its
/// last three entries are energy-pool rates (J m^-3 s^-1), which the
/// integrator converts to temperature rates with its own heat-capacity
/// model.
pub trait RightHandSide {
    /// Expected state length (`nb + 3`).
    fn state_len(&self) -> usize;

    /// Compute the derivative. Must not mutate any shared data.
    fn rhs(&self, state: &[f64]) -> ModelResult<DVector<f64>>;
}
