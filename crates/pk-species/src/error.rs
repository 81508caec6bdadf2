//! Species catalog errors.

use pk_core::PkError;
use thiserror::Error;

/// Result type for catalog operations.
pub type SpeciesResult<T> = Result<T, SpeciesError>;

/// Errors raised while building or querying a species catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpeciesError {
    /// Catalog has no entries.
    #[error("Species catalog is empty")]
    Empty,

    /// First entry is not an electron (charge -1).
    #[error("First species must be the electron, found {name}")]
    ElectronNotFirst { name: String },

    /// Two entries share a name.
    #[error("Duplicate species name: {name}")]
    DuplicateName { name: String },

    /// Name lookup failed.
    #[error("Unknown species: {name}")]
    UnknownSpecie { name: String },

    /// Entry carries a non-physical or unsupported parameter.
    #[error("Invalid species {name}: {what}")]
    InvalidSpecie { name: String, what: &'static str },

    /// State vector does not match the catalog layout.
    #[error("State length mismatch: expected {expected}, got {got}")]
    StateLength { expected: usize, got: usize },
}

impl From<SpeciesError> for PkError {
    fn from(err: SpeciesError) -> Self {
        match err {
            SpeciesError::StateLength { expected, got } => PkError::LengthMismatch {
                what: "state vector",
                expected,
                got,
            },
            SpeciesError::UnknownSpecie { .. } => PkError::InvalidArg {
                what: "unknown species",
            },
            _ => PkError::Catalog {
                what: "invalid species catalog",
            },
        }
    }
}
