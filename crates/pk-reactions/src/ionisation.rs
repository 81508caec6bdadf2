//! Electron-impact ionisation `e + A -> e + e + A+`.

use crate::chamber::Chamber;
use crate::common::{ReactionCore, label, require_heavy};
use crate::error::ReactionResult;
use crate::rate::RateCoefficient;
use crate::traits::Reaction;
use nalgebra::{DVector, Vector3};
use pk_core::PhysicalConstants;
use pk_species::{EnergyPool, Species};
use std::sync::Arc;

/// Ionisation of a heavy species by electron impact.
///
/// Reaction speed is `K(state) * n_e * n_A`. Each event adds one electron,
/// consumes one `A` and produces one `A+`, and costs the electron population
/// `threshold_energy`. Redistribution of energy to the heavy products is not
/// modelled here.
pub struct Ionisation {
    name: String,
    core: ReactionCore,
    rate_constant: Arc<dyn RateCoefficient>,
    /// Ionisation energy per event (J)
    pub threshold_energy: f64,
}

impl Ionisation {
    /// Build `e + before -> e + e + after`. The electron is prepended to both
    /// reactives and products; neither molecule may be the electron.
    pub fn new(
        species: Arc<Species>,
        molecule_before: &str,
        molecule_after: &str,
        rate_constant: impl RateCoefficient + 'static,
        threshold_energy: f64,
        chamber: Arc<dyn Chamber>,
    ) -> ReactionResult<Self> {
        let electron = species.electron().name().to_string();
        let core = ReactionCore::new(
            species,
            &[electron.as_str(), molecule_before],
            &[electron.as_str(), molecule_after],
            chamber,
        )?;
        require_heavy(&core.reactives()[1])?;
        require_heavy(&core.products()[1])?;
        Ok(Self {
            name: label("ionisation", core.reactives(), core.products()),
            core,
            rate_constant: Arc::new(rate_constant),
            threshold_energy,
        })
    }

    pub fn with_constants(mut self, constants: PhysicalConstants) -> Self {
        self.core.set_constants(constants);
        self
    }

    /// `K(state) * n_e * n_before` (m^-3 s^-1).
    pub fn reaction_speed(&self, state: &[f64]) -> f64 {
        self.rate_constant.rate(state) * self.core.reactive_densities_product(state)
    }
}

impl Reaction for Ionisation {
    fn name(&self) -> &str {
        &self.name
    }

    fn core(&self) -> &ReactionCore {
        &self.core
    }

    fn density_change_rate(&self, state: &[f64]) -> ReactionResult<DVector<f64>> {
        self.core.check_state(state)?;
        let speed = self.reaction_speed(state);

        let mut rate = self.core.zero_densities();
        rate[self.core.reactives_indices()[0]] += speed;
        rate[self.core.reactives_indices()[1]] -= speed;
        rate[self.core.products_indices()[1]] += speed;
        Ok(rate)
    }

    fn energy_change_rate(&self, state: &[f64]) -> ReactionResult<Vector3<f64>> {
        self.core.check_state(state)?;
        let mut rate = Vector3::zeros();
        rate[EnergyPool::Electron.slot()] = -self.threshold_energy * self.reaction_speed(state);
        Ok(rate)
    }
}
