//! Rate coefficients supplied by the host model.

/// State-dependent rate coefficient `K(state)`.
///
/// The state has the usual layout (`nb` densities, then the electron,
/// monatomic and diatomic temperatures). Any `Fn(&[f64]) -> f64` closure that
/// is `Send + Sync` qualifies.
pub trait RateCoefficient: Send + Sync {
    fn rate(&self, state: &[f64]) -> f64;
}

impl<F> RateCoefficient for F
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    #[inline]
    fn rate(&self, state: &[f64]) -> f64 {
        self(state)
    }
}

/// Rate coefficient that ignores the state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantRate(pub f64);

impl RateCoefficient for ConstantRate {
    #[inline]
    fn rate(&self, _state: &[f64]) -> f64 {
        self.0
    }
}
