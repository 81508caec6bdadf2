//! The three energy pools and their slots in state and energy vectors.

use crate::error::{SpeciesError, SpeciesResult};

/// Energy/temperature pool. The discriminant is the slot in a 3-entry energy
/// vector, and the offset past the density block in a state vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnergyPool {
    Electron = 0,
    Monatomic = 1,
    Diatomic = 2,
}

impl EnergyPool {
    pub const ALL: [EnergyPool; 3] = [
        EnergyPool::Electron,
        EnergyPool::Monatomic,
        EnergyPool::Diatomic,
    ];

    /// Pool for a heavy species with `nb_atoms` atoms.
    pub fn from_nb_atoms(nb_atoms: usize) -> SpeciesResult<Self> {
        match nb_atoms {
            1 => Ok(EnergyPool::Monatomic),
            2 => Ok(EnergyPool::Diatomic),
            _ => Err(SpeciesError::InvalidSpecie {
                name: format!("nb_atoms={nb_atoms}"),
                what: "nb_atoms must be 1 or 2",
            }),
        }
    }

    /// Slot in a 3-entry energy vector.
    #[inline]
    pub fn slot(self) -> usize {
        self as usize
    }
}
