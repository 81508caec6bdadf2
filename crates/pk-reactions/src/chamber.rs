//! Chamber geometry and wall-physics collaborator.

use pk_core::units::{AngularVelocity, Area, Mass, Volume};

/// Geometry and boundary physics of the discharge chamber.
///
/// Implementations are supplied by the host model (they depend on the
/// chamber shape, grid transparency, sheath model, ...). Reactions only call
/// them; they must be deterministic and free of side effects so reactions
/// stay pure.
///
/// Fluxes are particle fluxes per unit area (m^-2 s^-1). Temperatures are in
/// volts.
pub trait Chamber: Send + Sync {
    /// Ion flux to the surface for an ion of density `n_ion` and mass `mass`,
    /// driven by the electron temperature.
    fn gamma_ion(&self, n_ion: f64, t_electron: f64, mass: Mass) -> f64;

    /// Thermal flux of a neutral of density `n_neutral` at temperature
    /// `t_neutral`.
    fn gamma_neutral(&self, n_neutral: f64, t_neutral: f64, mass: Mass) -> f64;

    /// Effective area through which electrons are lost, given the total
    /// neutral density.
    fn s_eff_total(&self, n_g: f64) -> Area;

    /// Effective area on which ions are lost (neutralised), given the total
    /// neutral density.
    fn s_eff_total_ion_neutralization(&self, n_g: f64) -> Area;

    /// Effective area through which neutrals leave the chamber.
    fn s_eff_neutrals(&self) -> Area;

    /// Chamber volume.
    fn volume(&self) -> Volume;

    /// Drive angular frequency of the RF source.
    fn omega(&self) -> AngularVelocity;
}
