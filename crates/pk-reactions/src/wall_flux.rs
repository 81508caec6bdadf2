//! Particle and energy losses to the chamber walls and through the grids.

use crate::chamber::Chamber;
use crate::common::{ReactionCore, label, require_heavy};
use crate::error::ReactionResult;
use crate::rate::RateCoefficient;
use crate::traits::Reaction;
use nalgebra::{DVector, Vector3};
use pk_core::PhysicalConstants;
use pk_species::{EnergyPool, Specie, Species};
use std::sync::Arc;

/// Mean kinetic energy carried by each lost electron, in units of `e * T_e`.
pub const ELECTRON_LOSS_ENERGY_FACTOR: f64 = 7.0;

/// Losses of ions and neutrals to a surface (walls or grids), plus the
/// electron loss that keeps the surface ambipolar.
///
/// Every ion is lost at `gamma_ion * S_eff_ion / V`; the electron loss equals
/// the summed ion flux `gamma_e` times `S_eff_total / V`. Neutrals leave at
/// their thermal flux through `S_eff_neutrals`.
///
/// Energy: electrons lose `7 e T_e` per lost electron; each neutral pool
/// loses `thermal_capacity * e * T` per lost neutral. The thermal energy
/// carried away by ions is not included.
pub struct FluxToWallsAndThroughGrids {
    name: String,
    core: ReactionCore,
    /// Kept with the reaction; losses are driven by the chamber fluxes only.
    rate_constant: Arc<dyn RateCoefficient>,
    pub energy_threshold: f64,
    /// Heavy species partitioned once at construction.
    ions: Vec<Specie>,
    neutrals: Vec<Specie>,
}

/// Shared pieces of the density and energy computations.
struct SurfaceFluxes {
    /// Total neutral density (m^-3)
    n_g: f64,
    /// Summed ion flux, equal to the compensating electron flux
    gamma_e: f64,
}

impl FluxToWallsAndThroughGrids {
    /// Reactives and products are `[electron, colliding_specie]`.
    pub fn new(
        species: Arc<Species>,
        colliding_specie: &str,
        rate_constant: impl RateCoefficient + 'static,
        energy_threshold: f64,
        chamber: Arc<dyn Chamber>,
    ) -> ReactionResult<Self> {
        let electron = species.electron().name().to_string();
        let names = [electron.as_str(), colliding_specie];
        let core = ReactionCore::new(species.clone(), &names, &names, chamber)?;
        require_heavy(&core.reactives()[1])?;

        let (neutrals, ions): (Vec<Specie>, Vec<Specie>) =
            species.heavy().iter().cloned().partition(Specie::is_neutral);

        tracing::debug!(
            ions = ions.len(),
            neutrals = neutrals.len(),
            "wall flux partition"
        );

        Ok(Self {
            name: label("wall flux", core.reactives(), core.products()),
            core,
            rate_constant: Arc::new(rate_constant),
            energy_threshold,
            ions,
            neutrals,
        })
    }

    pub fn with_constants(mut self, constants: PhysicalConstants) -> Self {
        self.core.set_constants(constants);
        self
    }

    pub fn rate_constant(&self) -> &dyn RateCoefficient {
        self.rate_constant.as_ref()
    }

    fn gamma_ion(&self, ion: &Specie, state: &[f64]) -> f64 {
        let t_e = self.core.species().electron_temperature(state);
        self.core
            .chamber()
            .gamma_ion(state[ion.index()], t_e, ion.mass())
    }

    fn gamma_neutral(&self, neutral: &Specie, state: &[f64]) -> f64 {
        let t_n = self.core.species().temperature_of(neutral, state);
        self.core
            .chamber()
            .gamma_neutral(state[neutral.index()], t_n, neutral.mass())
    }

    fn surface_fluxes(&self, state: &[f64]) -> SurfaceFluxes {
        let n_g = self.core.species().neutral_density(state);
        let mut gamma_e = 0.0;
        for ion in &self.ions {
            gamma_e += self.gamma_ion(ion, state);
        }
        SurfaceFluxes { n_g, gamma_e }
    }

    /// Summed ion flux to the surface (m^-2 s^-1); the electron flux that
    /// balances it.
    pub fn electron_flux(&self, state: &[f64]) -> ReactionResult<f64> {
        self.core.check_state(state)?;
        Ok(self.surface_fluxes(state).gamma_e)
    }
}

impl Reaction for FluxToWallsAndThroughGrids {
    fn name(&self) -> &str {
        &self.name
    }

    fn core(&self) -> &ReactionCore {
        &self.core
    }

    fn density_change_rate(&self, state: &[f64]) -> ReactionResult<DVector<f64>> {
        use uom::si::area::square_meter;
        self.core.check_state(state)?;
        let chamber = self.core.chamber();
        let volume = self.core.volume_m3();
        let fluxes = self.surface_fluxes(state);

        let mut rate = self.core.zero_densities();

        let s_ion = chamber
            .s_eff_total_ion_neutralization(fluxes.n_g)
            .get::<square_meter>();
        for ion in &self.ions {
            rate[ion.index()] = -self.gamma_ion(ion, state) * s_ion / volume;
        }

        let s_neutral = chamber.s_eff_neutrals().get::<square_meter>();
        for neutral in &self.neutrals {
            rate[neutral.index()] = -self.gamma_neutral(neutral, state) * s_neutral / volume;
        }

        let s_total = chamber.s_eff_total(fluxes.n_g).get::<square_meter>();
        rate[self.core.species().electron().index()] = -fluxes.gamma_e * s_total / volume;

        Ok(rate)
    }

    fn energy_change_rate(&self, state: &[f64]) -> ReactionResult<Vector3<f64>> {
        use uom::si::area::square_meter;
        self.core.check_state(state)?;
        let chamber = self.core.chamber();
        let species = self.core.species();
        let e = self.core.constants().elementary_charge;
        let volume = self.core.volume_m3();
        let fluxes = self.surface_fluxes(state);

        let mut rate = Vector3::zeros();

        let e_kin = ELECTRON_LOSS_ENERGY_FACTOR * e * species.electron_temperature(state);
        let s_total = chamber.s_eff_total(fluxes.n_g).get::<square_meter>();
        rate[EnergyPool::Electron.slot()] = -e_kin * fluxes.gamma_e * s_total / volume;

        // Ion thermal energy carried to the surface is not included.
        let s_neutral = chamber.s_eff_neutrals().get::<square_meter>();
        for neutral in &self.neutrals {
            let t_n = species.temperature_of(neutral, state);
            let e_neutral = neutral.thermal_capacity() * e * t_n;
            rate[neutral.pool().slot()] -=
                e_neutral * self.gamma_neutral(neutral, state) * s_neutral / volume;
        }

        Ok(rate)
    }
}
