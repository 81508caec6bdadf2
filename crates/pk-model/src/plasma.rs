//! PlasmaModel: a species catalog plus the reactions acting on it.

use crate::diagnostics::Diagnostics;
use crate::error::{ModelError, ModelResult};
use crate::model::RightHandSide;
use crate::source_terms::SourceTerms;
use nalgebra::{DVector, Vector3};
use pk_reactions::Reaction;
use pk_species::Species;
use rayon::prelude::*;
use std::sync::Arc;

/// Sum of the contributions of every active reaction.
pub struct PlasmaModel {
    species: Arc<Species>,
    reactions: Vec<Box<dyn Reaction>>,
}

impl PlasmaModel {
    pub fn new(species: Arc<Species>) -> Self {
        Self {
            species,
            reactions: Vec::new(),
        }
    }

    /// Assemble a model, checking every reaction against the catalog.
    pub fn from_reactions(
        species: Arc<Species>,
        reactions: Vec<Box<dyn Reaction>>,
    ) -> ModelResult<Self> {
        let mut model = Self::new(species);
        for reaction in reactions {
            model.add_reaction(reaction)?;
        }
        Ok(model)
    }

    /// Builder-style `add_reaction`.
    pub fn with_reaction(mut self, reaction: impl Reaction + 'static) -> ModelResult<Self> {
        self.add_reaction(Box::new(reaction))?;
        Ok(self)
    }

    /// Append a reaction. Fails if it was built on another catalog: the
    /// reaction's catalog must be this `Arc` or equal entry by entry
    /// (names, masses, charges, atom counts, thermal capacities).
    pub fn add_reaction(&mut self, reaction: Box<dyn Reaction>) -> ModelResult<()> {
        let same_catalog = Arc::ptr_eq(reaction.species(), &self.species)
            || **reaction.species() == *self.species;
        if !same_catalog {
            return Err(ModelError::SpeciesMismatch {
                reaction: reaction.name().to_string(),
            });
        }

        tracing::debug!(
            reaction = reaction.name(),
            index = self.reactions.len(),
            "added reaction"
        );
        self.reactions.push(reaction);
        Ok(())
    }

    pub fn species(&self) -> &Arc<Species> {
        &self.species
    }

    pub fn reactions(&self) -> &[Box<dyn Reaction>] {
        &self.reactions
    }

    fn contribution(
        reaction: &dyn Reaction,
        state: &[f64],
    ) -> ModelResult<(DVector<f64>, Vector3<f64>)> {
        let density = reaction
            .density_change_rate(state)
            .map_err(|e| ModelError::reaction(reaction.name(), e))?;
        let energy = reaction
            .energy_change_rate(state)
            .map_err(|e| ModelError::reaction(reaction.name(), e))?;
        Ok((density, energy))
    }

    /// Sum all reactions in list order on the calling thread.
    pub fn evaluate(&self, state: &[f64]) -> ModelResult<SourceTerms> {
        self.species.check_state(state)?;
        tracing::trace!(reactions = self.reactions.len(), "evaluating source terms");

        let mut terms = SourceTerms::zeros(self.species.nb());
        for reaction in &self.reactions {
            let (density, energy) = Self::contribution(reaction.as_ref(), state)?;
            terms.accumulate(&density, &energy);
        }
        Ok(terms)
    }

    /// Evaluate reactions on the rayon pool, then sum in list order.
    ///
    /// Bitwise equal to [`PlasmaModel::evaluate`].
    pub fn evaluate_parallel(&self, state: &[f64]) -> ModelResult<SourceTerms> {
        self.species.check_state(state)?;
        tracing::trace!(
            reactions = self.reactions.len(),
            "evaluating source terms in parallel"
        );

        let contributions = self
            .reactions
            .par_iter()
            .map(|reaction| Self::contribution(reaction.as_ref(), state))
            .collect::<ModelResult<Vec<_>>>()?;

        let mut terms = SourceTerms::zeros(self.species.nb());
        for (density, energy) in &contributions {
            terms.accumulate(density, energy);
        }
        Ok(terms)
    }

    /// Evaluate and collect every reaction's diagnostics.
    pub fn evaluate_with_diagnostics(
        &self,
        state: &[f64],
    ) -> ModelResult<(SourceTerms, Diagnostics)> {
        let terms = self.evaluate(state)?;

        let mut diagnostics = Diagnostics::default();
        for reaction in &self.reactions {
            let produced = reaction
                .diagnostics(state)
                .map_err(|e| ModelError::reaction(reaction.name(), e))?;
            for diagnostic in produced {
                diagnostics.push(reaction.name(), diagnostic);
            }
        }
        Ok((terms, diagnostics))
    }
}

impl RightHandSide for PlasmaModel {
    fn state_len(&self) -> usize {
        self.species.state_len()
    }

    fn rhs(&self, state: &[f64]) -> ModelResult<DVector<f64>> {
        Ok(self.evaluate(state)?.to_state_derivative())
    }
}
