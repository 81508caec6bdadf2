//! Core trait shared by every reaction.

use crate::common::ReactionCore;
use crate::error::ReactionResult;
use nalgebra::{DVector, Vector3};
use pk_species::{Specie, Species};
use std::sync::Arc;

/// Named side output of a reaction (e.g. the energy it injects), recorded by
/// the aggregator on request. Never feeds back into the rates.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub key: String,
    pub values: Vec<f64>,
}

impl Diagnostic {
    pub fn new(key: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }
}

/// A physical or chemical process contributing additively to the state
/// derivative.
///
/// Reactions are deterministic functions of the state and their
/// construction-time parameters, suitable for parallel evaluation. Entries
/// for species or pools the process does not touch are exactly zero.
pub trait Reaction: Send + Sync {
    /// Label for debugging and diagnostics keys.
    fn name(&self) -> &str;

    /// Resolved catalog, reactives, products and chamber.
    fn core(&self) -> &ReactionCore;

    fn species(&self) -> &Arc<Species> {
        self.core().species()
    }

    fn reactives(&self) -> &[Specie] {
        self.core().reactives()
    }

    fn products(&self) -> &[Specie] {
        self.core().products()
    }

    /// Rate of change of every species density (m^-3 s^-1), length `nb`.
    fn density_change_rate(&self, state: &[f64]) -> ReactionResult<DVector<f64>>;

    /// Rate of change of the electron, monatomic and diatomic energy pools
    /// (J m^-3 s^-1).
    fn energy_change_rate(&self, state: &[f64]) -> ReactionResult<Vector3<f64>>;

    /// Optional side outputs. Default: none.
    fn diagnostics(&self, _state: &[f64]) -> ReactionResult<Vec<Diagnostic>> {
        Ok(Vec::new())
    }
}
