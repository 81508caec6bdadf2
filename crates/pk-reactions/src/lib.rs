//! pk-reactions: source terms of a low-temperature plasma discharge.
//!
//! Each process (ionisation, elastic electron collisions, gas injection,
//! losses to walls and grids) implements the [`Reaction`] trait and returns
//! its own contribution to the time derivative of the species densities and
//! of the three energy pools. Contributions are additive: an aggregator sums
//! them to build the right-hand side an ODE integrator advances.
//!
//! All reactions are deterministic functions of the state vector and of
//! their construction-time parameters. They borrow the shared [`Species`]
//! catalog and [`Chamber`] through `Arc` and never mutate them, so they can
//! be evaluated in any order or in parallel.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use pk_core::units::amu;
//! use pk_reactions::{Chamber, ConstantRate, Ionisation, Reaction};
//! use pk_species::{SpecieDef, Species};
//!
//! fn run(chamber: Arc<dyn Chamber>) {
//!     let species = Arc::new(
//!         Species::from_defs(vec![
//!             SpecieDef::electron(),
//!             SpecieDef::new("Xe", amu(131.293), 0, 1, 1.5),
//!             SpecieDef::new("Xe+", amu(131.293), 1, 1, 1.5),
//!         ])
//!         .unwrap(),
//!     );
//!
//!     let ionisation = Ionisation::new(
//!         species.clone(),
//!         "Xe",
//!         "Xe+",
//!         ConstantRate(1e-14),
//!         12.13 * 1.602e-19,
//!         chamber,
//!     )
//!     .unwrap();
//!
//!     let state = [1e17, 1e19, 1e17, 3.0, 0.03, 0.03];
//!     let dn = ionisation.density_change_rate(&state).unwrap();
//!     println!("dn_e/dt = {}", dn[0]);
//! }
//! ```

pub mod chamber;
pub mod common;
pub mod elastic;
pub mod error;
pub mod gas_injection;
pub mod ionisation;
pub mod rate;
pub mod traits;
pub mod wall_flux;

// Re-exports
pub use chamber::Chamber;
pub use common::ReactionCore;
pub use elastic::ElasticCollisionWithElectron;
pub use error::{ReactionError, ReactionResult};
pub use gas_injection::GasInjection;
pub use ionisation::Ionisation;
pub use rate::{ConstantRate, RateCoefficient};
pub use traits::{Diagnostic, Reaction};
pub use wall_flux::FluxToWallsAndThroughGrids;

pub use pk_species::Species;

#[cfg(test)]
pub(crate) mod test_support;
