//! Error types for model assembly and evaluation.

use pk_reactions::ReactionError;
use pk_species::SpeciesError;
use thiserror::Error;

/// Errors encountered while assembling or evaluating a model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Reaction {reaction} failed: {source}")]
    Reaction {
        reaction: String,
        #[source]
        source: ReactionError,
    },

    #[error("Species error: {0}")]
    Species(#[from] SpeciesError),

    #[error("Reaction {reaction} was built on a different species catalog")]
    SpeciesMismatch { reaction: String },
}

pub type ModelResult<T> = Result<T, ModelError>;

impl ModelError {
    pub(crate) fn reaction(name: &str, source: ReactionError) -> Self {
        ModelError::Reaction {
            reaction: name.to_string(),
            source,
        }
    }
}

impl From<ModelError> for pk_core::PkError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Reaction { source, .. } => source.into(),
            ModelError::Species(inner) => inner.into(),
            ModelError::SpeciesMismatch { .. } => pk_core::PkError::Catalog {
                what: "reaction built on a different species catalog",
            },
        }
    }
}
