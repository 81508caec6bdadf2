//! pk-core: stable foundation for plasmakin.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - constants (physical constants passed explicitly to reactions)
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use constants::PhysicalConstants;
pub use error::{PkError, PkResult};
pub use numeric::*;
pub use units::*;
