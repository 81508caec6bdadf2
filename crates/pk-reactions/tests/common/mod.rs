//! Shared fixtures for pk-reactions integration tests.

#![allow(dead_code)]

use pk_core::constants::ELEMENTARY_CHARGE;
use pk_core::units::{AngularVelocity, Area, Mass, Volume, amu, m2, m3, rad_per_s};
use pk_reactions::Chamber;
use pk_species::{SpecieDef, Species};
use std::f64::consts::PI;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Cylindrical ICP chamber with grids: Bohm ion flux, thermal neutral flux.
pub struct GriddedChamber {
    pub radius: f64,
    pub length: f64,
    pub grid_transparency_ions: f64,
    pub grid_transparency_neutrals: f64,
    pub calls: AtomicUsize,
}

impl Default for GriddedChamber {
    fn default() -> Self {
        Self {
            radius: 0.06,
            length: 0.1,
            grid_transparency_ions: 0.7,
            grid_transparency_neutrals: 0.3,
            calls: AtomicUsize::new(0),
        }
    }
}

impl GriddedChamber {
    fn wall_area(&self) -> f64 {
        2.0 * PI * self.radius * self.radius + 2.0 * PI * self.radius * self.length
    }

    fn grid_area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn count(&self) {
        self.calls.fetch_add(1, Ordering::Relaxed);
    }
}

impl Chamber for GriddedChamber {
    fn gamma_ion(&self, n_ion: f64, t_electron: f64, mass: Mass) -> f64 {
        self.count();
        0.5 * n_ion * (ELEMENTARY_CHARGE * t_electron / mass.value).sqrt()
    }

    fn gamma_neutral(&self, n_neutral: f64, t_neutral: f64, mass: Mass) -> f64 {
        self.count();
        0.25 * n_neutral * (8.0 * ELEMENTARY_CHARGE * t_neutral / (PI * mass.value)).sqrt()
    }

    fn s_eff_total(&self, n_g: f64) -> Area {
        self.count();
        let collisional = 1.0 / (1.0 + n_g * 1.0e-20);
        m2(self.wall_area() * collisional + self.grid_area() * self.grid_transparency_ions)
    }

    fn s_eff_total_ion_neutralization(&self, n_g: f64) -> Area {
        self.count();
        let collisional = 1.0 / (1.0 + n_g * 1.0e-20);
        m2(self.wall_area() * collisional + self.grid_area())
    }

    fn s_eff_neutrals(&self) -> Area {
        self.count();
        m2(self.grid_area() * self.grid_transparency_neutrals)
    }

    fn volume(&self) -> Volume {
        m3(PI * self.radius * self.radius * self.length)
    }

    fn omega(&self) -> AngularVelocity {
        rad_per_s(2.0 * PI * 13.56e6)
    }
}

/// e, Xe, Xe+, Xe2+ (doubly charged), N2.
pub fn xenon_catalog() -> Arc<Species> {
    Arc::new(
        Species::from_defs(vec![
            SpecieDef::electron(),
            SpecieDef::new("Xe", amu(131.293), 0, 1, 1.5),
            SpecieDef::new("Xe+", amu(131.293), 1, 1, 1.5),
            SpecieDef::new("Xe2+", amu(131.293), 2, 1, 1.5),
            SpecieDef::new("N2", amu(28.014), 0, 2, 2.5),
        ])
        .unwrap(),
    )
}

pub fn xenon_state() -> Vec<f64> {
    vec![1.2e17, 3.0e19, 1.0e17, 1.0e16, 2.0e18, 4.0, 0.04, 0.03]
}
