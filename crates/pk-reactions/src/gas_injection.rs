//! Continuous gas feed into the chamber.

use crate::chamber::Chamber;
use crate::common::{ReactionCore, label};
use crate::error::{ReactionError, ReactionResult};
use crate::traits::{Diagnostic, Reaction};
use nalgebra::{DVector, Vector3};
use pk_core::PhysicalConstants;
use pk_core::units::Potential;
use pk_species::Species;
use std::sync::Arc;
use uom::si::electric_potential::volt;

/// Diagnostics key for the injected thermal power.
pub const ENERGY_DIAGNOSTIC_KEY: &str = "dy_energy_gas_injection";

/// Particles fed into the chamber at a fixed rate and temperature.
///
/// Products are the species with a nonzero injection rate; there are no
/// reactives. The density contribution is `injection_rates / V` for the whole
/// catalog, so species without injection get exactly zero.
pub struct GasInjection {
    name: String,
    core: ReactionCore,
    /// Particles per second, in catalog order
    injection_rates: Vec<f64>,
    /// Injection temperature (V)
    t_injection: f64,
}

impl GasInjection {
    /// `injection_rates` must have one entry per species, in catalog order.
    pub fn new(
        species: Arc<Species>,
        injection_rates: Vec<f64>,
        t_injection: Potential,
        chamber: Arc<dyn Chamber>,
    ) -> ReactionResult<Self> {
        if injection_rates.len() != species.nb() {
            return Err(ReactionError::InjectionLength {
                expected: species.nb(),
                got: injection_rates.len(),
            });
        }
        if injection_rates.iter().any(|r| !r.is_finite()) {
            return Err(ReactionError::InvalidArg {
                what: "injection rates must be finite",
            });
        }
        let t_injection = t_injection.get::<volt>();
        if !t_injection.is_finite() {
            return Err(ReactionError::InvalidArg {
                what: "injection temperature must be finite",
            });
        }

        let injected: Vec<&str> = species
            .iter()
            .zip(&injection_rates)
            .filter(|(_, rate)| **rate != 0.0)
            .map(|(s, _)| s.name())
            .collect();
        let empty: [&str; 0] = [];
        let core = ReactionCore::new(species.clone(), &empty, &injected, chamber)?;

        Ok(Self {
            name: label("gas injection", core.reactives(), core.products()),
            core,
            injection_rates,
            t_injection,
        })
    }

    pub fn with_constants(mut self, constants: PhysicalConstants) -> Self {
        self.core.set_constants(constants);
        self
    }

    pub fn injection_rates(&self) -> &[f64] {
        &self.injection_rates
    }

    /// Injection temperature in volts.
    pub fn t_injection(&self) -> f64 {
        self.t_injection
    }
}

impl Reaction for GasInjection {
    fn name(&self) -> &str {
        &self.name
    }

    fn core(&self) -> &ReactionCore {
        &self.core
    }

    fn density_change_rate(&self, state: &[f64]) -> ReactionResult<DVector<f64>> {
        self.core.check_state(state)?;
        let volume = self.core.volume_m3();
        Ok(DVector::from_iterator(
            self.injection_rates.len(),
            self.injection_rates.iter().map(|rate| rate / volume),
        ))
    }

    fn energy_change_rate(&self, state: &[f64]) -> ReactionResult<Vector3<f64>> {
        self.core.check_state(state)?;
        let e = self.core.constants().elementary_charge;
        let volume = self.core.volume_m3();

        let mut rate = Vector3::zeros();
        for sp in self.core.products() {
            rate[sp.pool().slot()] +=
                1.5 * self.injection_rates[sp.index()] * e * self.t_injection / volume;
        }
        Ok(rate)
    }

    fn diagnostics(&self, state: &[f64]) -> ReactionResult<Vec<Diagnostic>> {
        let energy = self.energy_change_rate(state)?;
        Ok(vec![Diagnostic::new(
            ENERGY_DIAGNOSTIC_KEY,
            energy.iter().copied().collect(),
        )])
    }
}
