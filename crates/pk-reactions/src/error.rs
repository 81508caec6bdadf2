//! Error types for reaction construction and evaluation.

use pk_core::error::PkError;
use pk_species::SpeciesError;
use thiserror::Error;

/// Errors that can occur while building or evaluating a reaction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReactionError {
    #[error("Species error: {0}")]
    Species(#[from] SpeciesError),

    #[error("Injection rates length mismatch: expected {expected}, got {got}")]
    InjectionLength { expected: usize, got: usize },

    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type ReactionResult<T> = Result<T, ReactionError>;

impl From<PkError> for ReactionError {
    fn from(e: PkError) -> Self {
        match e {
            PkError::NonFinite { what, value } => ReactionError::NonFinite { what, value },
            PkError::InvalidArg { what } => ReactionError::InvalidArg { what },
            PkError::LengthMismatch { what, .. } | PkError::Catalog { what } => {
                ReactionError::InvalidArg { what }
            }
        }
    }
}

impl From<ReactionError> for PkError {
    fn from(e: ReactionError) -> Self {
        match e {
            ReactionError::Species(inner) => inner.into(),
            ReactionError::InjectionLength { expected, got } => PkError::LengthMismatch {
                what: "injection rates",
                expected,
                got,
            },
            ReactionError::NonFinite { what, value } => PkError::NonFinite { what, value },
            ReactionError::InvalidArg { what } => PkError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ReactionError::InjectionLength {
            expected: 3,
            got: 2,
        };
        assert!(err.to_string().contains("expected 3"));

        let err: ReactionError = SpeciesError::UnknownSpecie { name: "Ar+".into() }.into();
        assert!(err.to_string().contains("Ar+"));
    }

    #[test]
    fn error_conversion() {
        let err = ReactionError::NonFinite {
            what: "relative permittivity",
            value: f64::INFINITY,
        };
        let pk: PkError = err.into();
        assert!(matches!(pk, PkError::NonFinite { .. }));

        let back: ReactionError = PkError::InvalidArg { what: "x" }.into();
        assert_eq!(back, ReactionError::InvalidArg { what: "x" });
    }
}
