//! Right-hand side assembly for plasmakin discharge models.
//!
//! Provides:
//! - `PlasmaModel`: a species catalog plus the active reactions
//! - `SourceTerms`: summed density and energy-pool rates
//! - `Diagnostics`: optional side outputs recorded per reaction
//! - `RightHandSide`: the seam an external ODE integrator consumes
//!
//! Reactions are summed in list order, whether they were evaluated on the
//! calling thread or on the rayon pool, so both paths give bitwise-identical
//! results.

pub mod diagnostics;
pub mod error;
pub mod model;
pub mod plasma;
pub mod source_terms;

// Re-exports for public API
pub use diagnostics::{DiagnosticRecord, Diagnostics};
pub use error::{ModelError, ModelResult};
pub use model::RightHandSide;
pub use plasma::PlasmaModel;
pub use source_terms::SourceTerms;
