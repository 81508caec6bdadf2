//! Physical constants used by the reaction kernels.
//!
//! Reactions hold a copy of [`PhysicalConstants`] instead of reading globals,
//! so a model can be run with alternative values (normalised units, older
//! CODATA sets) without touching shared state.

use serde::{Deserialize, Serialize};

/// Electron mass (kg), CODATA 2018.
pub const ELECTRON_MASS: f64 = 9.109_383_701_5e-31;
/// Elementary charge (C), exact.
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;
/// Boltzmann constant (J/K), exact.
pub const BOLTZMANN: f64 = 1.380_649e-23;
/// Vacuum permittivity (F/m), CODATA 2018.
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;
/// Vacuum permeability (H/m), CODATA 2018.
pub const VACUUM_PERMEABILITY: f64 = 1.256_637_062_12e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// kg
    pub electron_mass: f64,
    /// C
    pub elementary_charge: f64,
    /// J/K
    pub boltzmann: f64,
    /// F/m
    pub vacuum_permittivity: f64,
    /// H/m
    pub vacuum_permeability: f64,
}

impl PhysicalConstants {
    pub const CODATA_2018: Self = Self {
        electron_mass: ELECTRON_MASS,
        elementary_charge: ELEMENTARY_CHARGE,
        boltzmann: BOLTZMANN,
        vacuum_permittivity: VACUUM_PERMITTIVITY,
        vacuum_permeability: VACUUM_PERMEABILITY,
    };
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::CODATA_2018
    }
}
