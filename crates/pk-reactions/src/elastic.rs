//! Elastic electron collisions with a heavy species.

use crate::chamber::Chamber;
use crate::common::{ReactionCore, check_finite, label, require_heavy};
use crate::error::ReactionResult;
use crate::rate::RateCoefficient;
use crate::traits::Reaction;
use nalgebra::{DVector, Vector3};
use pk_core::PhysicalConstants;
use pk_species::{EnergyPool, Species};
use std::sync::Arc;
use uom::si::angular_velocity::radian_per_second;

/// Energy exchange between electrons and a colliding species through elastic
/// (momentum-transfer) collisions. Densities are unchanged.
///
/// The electron pool loses exactly what the colliding species' pool gains:
///
/// `dE = 3 (m_e / M) e (T_e - T_s) K(state) n_e n_s`
pub struct ElasticCollisionWithElectron {
    name: String,
    core: ReactionCore,
    rate_constant: Arc<dyn RateCoefficient>,
    /// Stored for parity with the other electron processes; elastic
    /// exchange has no threshold.
    pub energy_threshold: f64,
}

impl ElasticCollisionWithElectron {
    /// `colliding_specie` is both reactive and product, after the electron.
    pub fn new(
        species: Arc<Species>,
        colliding_specie: &str,
        rate_constant: impl RateCoefficient + 'static,
        energy_threshold: f64,
        chamber: Arc<dyn Chamber>,
    ) -> ReactionResult<Self> {
        let electron = species.electron().name().to_string();
        let names = [electron.as_str(), colliding_specie];
        let core = ReactionCore::new(species, &names, &names, chamber)?;
        require_heavy(&core.reactives()[1])?;

        Ok(Self {
            name: label("elastic", core.reactives(), core.products()),
            core,
            rate_constant: Arc::new(rate_constant),
            energy_threshold,
        })
    }

    pub fn with_constants(mut self, constants: PhysicalConstants) -> Self {
        self.core.set_constants(constants);
        self
    }

    /// Energy transferred from electrons to the colliding species
    /// (J m^-3 s^-1). Negative when the species is hotter than the electrons.
    pub fn energy_transfer(&self, state: &[f64]) -> f64 {
        let constants = self.core.constants();
        let colliding = &self.core.reactives()[1];
        let species = self.core.species();

        let speed = self.rate_constant.rate(state) * self.core.reactive_densities_product(state);
        let mass_ratio = constants.electron_mass / colliding.mass_kg();
        let delta_temp =
            species.electron_temperature(state) - species.temperature_of(colliding, state);

        3.0 * mass_ratio * constants.elementary_charge * delta_temp * speed
    }

    /// Relative dielectric permittivity contributed by this collision
    /// process at the chamber drive frequency:
    ///
    /// `eps = 1 - w_pe^2 / (w (w - nu))`, `w_pe^2 = n_e e^2 / (m_e eps0)`,
    /// `nu = n_e K(state)`.
    ///
    /// Read-only diagnostic, not part of the right-hand side. Returns
    /// `ReactionError::NonFinite` when the denominator vanishes.
    pub fn relative_permittivity(&self, state: &[f64]) -> ReactionResult<f64> {
        self.core.check_state(state)?;
        let constants = self.core.constants();
        let n_e = state[0];
        let e = constants.elementary_charge;

        let omega_pe_sq = n_e * e * e / (constants.electron_mass * constants.vacuum_permittivity);
        let nu_m = n_e * self.rate_constant.rate(state);
        let omega = self.core.chamber().omega().get::<radian_per_second>();

        check_finite(
            1.0 - omega_pe_sq / (omega * (omega - nu_m)),
            "relative permittivity",
        )
    }
}

impl Reaction for ElasticCollisionWithElectron {
    fn name(&self) -> &str {
        &self.name
    }

    fn core(&self) -> &ReactionCore {
        &self.core
    }

    fn density_change_rate(&self, state: &[f64]) -> ReactionResult<DVector<f64>> {
        self.core.check_state(state)?;
        Ok(self.core.zero_densities())
    }

    fn energy_change_rate(&self, state: &[f64]) -> ReactionResult<Vector3<f64>> {
        self.core.check_state(state)?;
        let transfer = self.energy_transfer(state);

        let mut rate = Vector3::zeros();
        rate[EnergyPool::Electron.slot()] = -transfer;
        rate[self.core.reactives()[1].pool().slot()] = transfer;
        Ok(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReactionError;
    use crate::rate::ConstantRate;
    use crate::test_support::{MockChamber, chamber, iodine, iodine_state};
    use pk_core::constants::{ELECTRON_MASS, ELEMENTARY_CHARGE, VACUUM_PERMITTIVITY};
    use pk_core::numeric::{Tolerances, nearly_equal};

    fn elastic(colliding: &str) -> ElasticCollisionWithElectron {
        ElasticCollisionWithElectron::new(iodine(), colliding, ConstantRate(1.0e-13), 0.0, chamber())
            .unwrap()
    }

    #[test]
    fn densities_untouched() {
        let rate = elastic("I2").density_change_rate(&iodine_state()).unwrap();
        assert_eq!(rate, DVector::zeros(5));
    }

    #[test]
    fn diatomic_pool_gains_what_electrons_lose() {
        let reaction = elastic("I2");
        let state = iodine_state();
        let i2 = reaction.species().resolve("I2").unwrap();

        let speed = 1.0e-13 * (state[0] * state[1]);
        let expected =
            3.0 * (ELECTRON_MASS / i2.mass_kg()) * ELEMENTARY_CHARGE * (3.5 - 0.04) * speed;

        let rate = reaction.energy_change_rate(&state).unwrap();
        assert!(nearly_equal(rate[2], expected, Tolerances::default()));
        assert_eq!(rate[0], -rate[2]);
        assert_eq!(rate[1], 0.0);
    }

    #[test]
    fn monatomic_slot_for_atoms() {
        let rate = elastic("I").energy_change_rate(&iodine_state()).unwrap();
        assert!(rate[1] > 0.0);
        assert_eq!(rate[2], 0.0);
        assert_eq!(rate[0] + rate[1], 0.0);
    }

    #[test]
    fn hot_neutrals_heat_electrons() {
        let mut state = iodine_state();
        state[6] = 5.0; // T_mono above Te
        let rate = elastic("I").energy_change_rate(&state).unwrap();
        assert!(rate[0] > 0.0);
    }

    #[test]
    fn negative_density_and_cold_electrons() {
        let reaction = elastic("I2");
        let state = [-1.0e15, 2.0e19, 5.0e18, 6.0e16, 4.0e16, 0.0, 0.035, 0.04];
        let energy = reaction.energy_change_rate(&state).unwrap();
        assert!(energy.iter().all(|v| v.is_finite()));
        // n_e < 0 and Te < T_diat: the sign flips twice, electrons still lose
        assert!(energy[0] < 0.0);
        assert_eq!(energy[0] + energy[2], 0.0);
        assert!(reaction.relative_permittivity(&state).unwrap().is_finite());
    }

    #[test]
    fn electron_cannot_collide_with_itself() {
        let err = ElasticCollisionWithElectron::new(iodine(), "e", ConstantRate(1.0), 0.0, chamber())
            .err()
            .unwrap();
        assert!(matches!(err, ReactionError::InvalidArg { .. }));
    }

    #[test]
    fn permittivity_matches_closed_form() {
        let reaction = elastic("I2");
        let state = iodine_state();
        let omega = MockChamber::default().omega;
        let wpe2 = state[0] * ELEMENTARY_CHARGE * ELEMENTARY_CHARGE
            / (ELECTRON_MASS * VACUUM_PERMITTIVITY);
        let nu = state[0] * 1.0e-13;
        let expected = 1.0 - wpe2 / (omega * (omega - nu));

        let eps = reaction.relative_permittivity(&state).unwrap();
        assert!(nearly_equal(eps, expected, Tolerances::default()));
    }

    #[test]
    fn permittivity_singular_when_nu_equals_omega() {
        let omega = MockChamber::default().omega;
        let reaction =
            ElasticCollisionWithElectron::new(iodine(), "I2", ConstantRate(omega), 0.0, chamber())
                .unwrap();
        // n_e = 1 gives nu == omega exactly
        let mut state = iodine_state();
        state[0] = 1.0;

        let err = reaction.relative_permittivity(&state).unwrap_err();
        assert!(matches!(err, ReactionError::NonFinite { .. }));
    }

    #[test]
    fn permittivity_singular_without_drive() {
        let reaction = ElasticCollisionWithElectron::new(
            iodine(),
            "I2",
            ConstantRate(0.0),
            0.0,
            Arc::new(MockChamber {
                omega: 0.0,
                ..MockChamber::default()
            }),
        )
        .unwrap();
        let err = reaction.relative_permittivity(&iodine_state()).unwrap_err();
        assert!(matches!(err, ReactionError::NonFinite { .. }));
    }

    #[test]
    fn custom_constants_flow_through() {
        let normalised = PhysicalConstants {
            electron_mass: 1.0,
            elementary_charge: 1.0,
            ..PhysicalConstants::default()
        };
        let reaction = elastic("I").with_constants(normalised);
        let state = iodine_state();
        let i = reaction.species().resolve("I").unwrap().mass_kg();
        let expected = 3.0 * (1.0 / i) * 1.0 * (3.5 - 0.035) * (1.0e-13 * (state[0] * state[2]));
        assert!(nearly_equal(
            reaction.energy_transfer(&state),
            expected,
            Tolerances::default()
        ));
    }
}
