//! Fixtures for unit tests: a closed-form chamber and a small catalog.

use crate::chamber::Chamber;
use pk_core::constants::ELEMENTARY_CHARGE;
use pk_core::units::{AngularVelocity, Area, Mass, Volume, amu, m2, m3, rad_per_s};
use pk_species::{SpecieDef, Species};
use std::f64::consts::PI;
use std::sync::Arc;

/// Bohm ion flux, thermal neutral flux, areas mildly dependent on `n_g`.
#[derive(Debug, Clone)]
pub struct MockChamber {
    pub volume_m3: f64,
    pub omega: f64,
}

impl Default for MockChamber {
    fn default() -> Self {
        Self {
            volume_m3: 1.0e-3,
            omega: 2.0 * PI * 13.56e6,
        }
    }
}

impl Chamber for MockChamber {
    fn gamma_ion(&self, n_ion: f64, t_electron: f64, mass: Mass) -> f64 {
        0.6 * n_ion * (ELEMENTARY_CHARGE * t_electron / mass.value).sqrt()
    }

    fn gamma_neutral(&self, n_neutral: f64, t_neutral: f64, mass: Mass) -> f64 {
        0.25 * n_neutral * (8.0 * ELEMENTARY_CHARGE * t_neutral / (PI * mass.value)).sqrt()
    }

    fn s_eff_total(&self, n_g: f64) -> Area {
        m2(0.02 + 1.0e-22 * n_g)
    }

    fn s_eff_total_ion_neutralization(&self, n_g: f64) -> Area {
        m2(0.05 + 2.0e-22 * n_g)
    }

    fn s_eff_neutrals(&self) -> Area {
        m2(0.01)
    }

    fn volume(&self) -> Volume {
        m3(self.volume_m3)
    }

    fn omega(&self) -> AngularVelocity {
        rad_per_s(self.omega)
    }
}

pub fn chamber() -> Arc<dyn Chamber> {
    Arc::new(MockChamber::default())
}

/// e, I2, I, I+, I2+ (iodine thruster catalog).
pub fn iodine() -> Arc<Species> {
    Arc::new(
        Species::from_defs(vec![
            SpecieDef::electron(),
            SpecieDef::new("I2", amu(253.809), 0, 2, 2.5),
            SpecieDef::new("I", amu(126.904), 0, 1, 1.5),
            SpecieDef::new("I+", amu(126.904), 1, 1, 1.5),
            SpecieDef::new("I2+", amu(253.809), 1, 2, 2.5),
        ])
        .expect("valid catalog"),
    )
}

/// Typical ICP state for the iodine catalog.
pub fn iodine_state() -> Vec<f64> {
    vec![1.0e17, 2.0e19, 5.0e18, 6.0e16, 4.0e16, 3.5, 0.035, 0.04]
}
