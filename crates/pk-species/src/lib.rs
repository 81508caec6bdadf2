//! pk-species: species catalog and state-vector layout for plasmakin.
//!
//! Provides:
//! - `Specie`: immutable description of one species (mass, charge, atom count,
//!   thermal capacity, position in the state vector)
//! - `SpecieDef`: serde-friendly input used to build a catalog
//! - `Species`: the ordered catalog; the electron always sits at index 0
//! - `EnergyPool`: the three temperature/energy slots (electron, monatomic,
//!   diatomic) shared by every reaction
//!
//! # State layout
//!
//! A state vector has `nb + 3` entries: the `nb` number densities in catalog
//! order, followed by the electron, monatomic and diatomic temperatures (in
//! volts). A heavy species reads its temperature at `nb + nb_atoms`.
//!
//! # Example
//!
//! ```
//! use pk_core::units::amu;
//! use pk_species::{Species, SpecieDef};
//!
//! let species = Species::from_defs(vec![
//!     SpecieDef::electron(),
//!     SpecieDef::new("Xe", amu(131.293), 0, 1, 1.5),
//!     SpecieDef::new("Xe+", amu(131.293), 1, 1, 1.5),
//! ])
//! .unwrap();
//!
//! assert_eq!(species.nb(), 3);
//! assert_eq!(species.index_of("Xe+").unwrap(), 2);
//! assert_eq!(species.state_len(), 6);
//! ```

pub mod error;
pub mod layout;
pub mod species;

// Re-exports for ergonomics
pub use error::{SpeciesError, SpeciesResult};
pub use layout::EnergyPool;
pub use species::{Specie, SpecieDef, Species};
