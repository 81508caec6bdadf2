use thiserror::Error;

pub type PkResult<T> = Result<T, PkError>;

/// Crate-neutral error every layer converts into, for hosts that drive the
/// model without matching on per-crate variants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PkError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// A state or per-species vector has the wrong length.
    #[error("Length mismatch for {what}: expected {expected}, got {got}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// Species catalog is malformed, or a reaction refers to another catalog.
    #[error("Species catalog error: {what}")]
    Catalog { what: &'static str },
}
