//! Summed reaction contributions.

use nalgebra::{DVector, Vector3};

/// Density rates (length `nb`) and the three energy-pool rates.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceTerms {
    pub density: DVector<f64>,
    pub energy: Vector3<f64>,
}

impl SourceTerms {
    pub fn zeros(nb: usize) -> Self {
        Self {
            density: DVector::zeros(nb),
            energy: Vector3::zeros(),
        }
    }

    /// Add one reaction's contribution.
    pub fn accumulate(&mut self, density: &DVector<f64>, energy: &Vector3<f64>) {
        self.density += density;
        self.energy += energy;
    }

    /// Densities followed by energy-pool rates, length `nb + 3`.
    pub fn to_state_derivative(&self) -> DVector<f64> {
        DVector::from_iterator(
            self.density.len() + 3,
            self.density.iter().chain(self.energy.iter()).copied(),
        )
    }
}
