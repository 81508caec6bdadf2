//! Construction-time bookkeeping shared by all reactions.

use crate::chamber::Chamber;
use crate::error::{ReactionError, ReactionResult};
use nalgebra::DVector;
use pk_core::PhysicalConstants;
use pk_core::numeric::ensure_finite;
use pk_species::{Specie, Species};
use std::fmt;
use std::sync::Arc;

/// Reactives, products and their state-vector indices, resolved once from
/// names when a reaction is built.
///
/// By convention `reactives[0]` is the electron whenever electrons take
/// part. Nothing here changes after construction.
#[derive(Clone)]
pub struct ReactionCore {
    species: Arc<Species>,
    reactives: Vec<Specie>,
    products: Vec<Specie>,
    reactives_indices: Vec<usize>,
    products_indices: Vec<usize>,
    chamber: Arc<dyn Chamber>,
    constants: PhysicalConstants,
}

impl ReactionCore {
    /// Resolve reactive and product names against the catalog.
    ///
    /// Fails with `ReactionError::Species` if a name is not in `species`.
    pub fn new<R: AsRef<str>, P: AsRef<str>>(
        species: Arc<Species>,
        reactives: &[R],
        products: &[P],
        chamber: Arc<dyn Chamber>,
    ) -> ReactionResult<Self> {
        let reactives = species.resolve_all(reactives)?;
        let products = species.resolve_all(products)?;
        let reactives_indices: Vec<usize> = reactives.iter().map(Specie::index).collect();
        let products_indices: Vec<usize> = products.iter().map(Specie::index).collect();

        tracing::debug!(
            ?reactives_indices,
            ?products_indices,
            "resolved reaction species"
        );

        Ok(Self {
            species,
            reactives,
            products,
            reactives_indices,
            products_indices,
            chamber,
            constants: PhysicalConstants::default(),
        })
    }

    pub(crate) fn set_constants(&mut self, constants: PhysicalConstants) {
        self.constants = constants;
    }

    pub fn species(&self) -> &Arc<Species> {
        &self.species
    }

    pub fn reactives(&self) -> &[Specie] {
        &self.reactives
    }

    pub fn products(&self) -> &[Specie] {
        &self.products
    }

    pub fn reactives_indices(&self) -> &[usize] {
        &self.reactives_indices
    }

    pub fn products_indices(&self) -> &[usize] {
        &self.products_indices
    }

    pub fn chamber(&self) -> &dyn Chamber {
        self.chamber.as_ref()
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Reject states that do not match the catalog layout.
    pub fn check_state(&self, state: &[f64]) -> ReactionResult<()> {
        self.species.check_state(state)?;
        Ok(())
    }

    /// Product of the reactive densities, `n_e * n_A * ...`.
    pub fn reactive_densities_product(&self, state: &[f64]) -> f64 {
        self.reactives_indices.iter().map(|&i| state[i]).product()
    }

    /// Zeroed density-rate vector of length `nb`.
    pub fn zero_densities(&self) -> DVector<f64> {
        DVector::zeros(self.species.nb())
    }

    /// Chamber volume in m^3.
    #[inline]
    pub fn volume_m3(&self) -> f64 {
        use uom::si::volume::cubic_meter;
        self.chamber.volume().get::<cubic_meter>()
    }
}

impl fmt::Debug for ReactionCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactionCore")
            .field("reactives_indices", &self.reactives_indices)
            .field("products_indices", &self.products_indices)
            .field("constants", &self.constants)
            .finish_non_exhaustive()
    }
}

/// Ensure a value is finite, returning ReactionError if not.
pub fn check_finite(value: f64, what: &'static str) -> ReactionResult<f64> {
    Ok(ensure_finite(value, what)?)
}

/// Reaction label such as `"e + Xe -> e + Xe+"`.
pub fn label(kind: &str, reactives: &[Specie], products: &[Specie]) -> String {
    let join = |list: &[Specie]| {
        list.iter()
            .map(Specie::name)
            .collect::<Vec<_>>()
            .join(" + ")
    };
    format!("{kind}: {} -> {}", join(reactives), join(products))
}

/// Error for a species that must be heavy but is the electron.
pub(crate) fn require_heavy(specie: &Specie) -> ReactionResult<()> {
    if specie.is_electron() {
        return Err(ReactionError::InvalidArg {
            what: "heavy species must not be the electron",
        });
    }
    Ok(())
}
