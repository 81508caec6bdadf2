//! Species definitions and the ordered catalog.

use crate::error::{SpeciesError, SpeciesResult};
use crate::layout::EnergyPool;
use pk_core::constants::ELECTRON_MASS;
use pk_core::units::{Mass, kg};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uom::si::mass::kilogram;

/// Catalog input for one species.
///
/// This is what a host application deserializes; [`Species::from_defs`]
/// validates it and assigns the state-vector index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecieDef {
    pub name: String,
    pub mass_kg: f64,
    /// Elementary charges, 0 for neutrals.
    pub charge: i32,
    /// 1 = monatomic, 2 = diatomic. Ignored for the electron.
    #[serde(default = "default_nb_atoms")]
    pub nb_atoms: usize,
    /// Mean energy carried per particle, in units of `e * T`.
    pub thermal_capacity: f64,
}

fn default_nb_atoms() -> usize {
    1
}

impl SpecieDef {
    pub fn new(
        name: impl Into<String>,
        mass: Mass,
        charge: i32,
        nb_atoms: usize,
        thermal_capacity: f64,
    ) -> Self {
        Self {
            name: name.into(),
            mass_kg: mass.get::<kilogram>(),
            charge,
            nb_atoms,
            thermal_capacity,
        }
    }

    /// The electron entry every catalog starts with.
    pub fn electron() -> Self {
        Self::new("e", kg(ELECTRON_MASS), -1, 0, 1.5)
    }
}

/// One species of the catalog. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Specie {
    name: String,
    mass: Mass,
    charge: i32,
    nb_atoms: usize,
    thermal_capacity: f64,
    index: usize,
    pool: EnergyPool,
}

impl Specie {
    fn from_def(def: SpecieDef, index: usize) -> SpeciesResult<Self> {
        if !def.mass_kg.is_finite() || def.mass_kg <= 0.0 {
            return Err(SpeciesError::InvalidSpecie {
                name: def.name,
                what: "mass must be positive and finite",
            });
        }
        if !def.thermal_capacity.is_finite() {
            return Err(SpeciesError::InvalidSpecie {
                name: def.name,
                what: "thermal capacity must be finite",
            });
        }

        let pool = if index == 0 {
            EnergyPool::Electron
        } else {
            EnergyPool::from_nb_atoms(def.nb_atoms).map_err(|_| SpeciesError::InvalidSpecie {
                name: def.name.clone(),
                what: "nb_atoms must be 1 or 2",
            })?
        };

        Ok(Self {
            name: def.name,
            mass: kg(def.mass_kg),
            charge: def.charge,
            nb_atoms: def.nb_atoms,
            thermal_capacity: def.thermal_capacity,
            index,
            pool,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> Mass {
        self.mass
    }

    /// Mass in kg.
    #[inline]
    pub fn mass_kg(&self) -> f64 {
        self.mass.get::<kilogram>()
    }

    pub fn charge(&self) -> i32 {
        self.charge
    }

    pub fn nb_atoms(&self) -> usize {
        self.nb_atoms
    }

    pub fn thermal_capacity(&self) -> f64 {
        self.thermal_capacity
    }

    /// Position in the density block of the state vector.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Energy pool this species' temperature and energy live in.
    #[inline]
    pub fn pool(&self) -> EnergyPool {
        self.pool
    }

    pub fn is_electron(&self) -> bool {
        self.index == 0
    }

    pub fn is_neutral(&self) -> bool {
        self.charge == 0
    }
}

/// Ordered species catalog. `species[0]` is always the electron.
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    species: Vec<Specie>,
    names: Vec<String>,
}

impl Species {
    /// Build the catalog, assigning indices by position.
    ///
    /// Fails if the list is empty, does not start with a charge -1 entry,
    /// repeats a name, or carries a non-physical parameter.
    pub fn from_defs(defs: Vec<SpecieDef>) -> SpeciesResult<Self> {
        let Some(first) = defs.first() else {
            return Err(SpeciesError::Empty);
        };
        if first.charge != -1 {
            return Err(SpeciesError::ElectronNotFirst {
                name: first.name.clone(),
            });
        }

        let mut seen = HashSet::with_capacity(defs.len());
        for def in &defs {
            if !seen.insert(def.name.as_str()) {
                return Err(SpeciesError::DuplicateName {
                    name: def.name.clone(),
                });
            }
        }

        let species = defs
            .into_iter()
            .enumerate()
            .map(|(i, def)| Specie::from_def(def, i))
            .collect::<SpeciesResult<Vec<_>>>()?;
        let names = species.iter().map(|s| s.name.clone()).collect();

        tracing::debug!(nb = species.len(), ?names, "built species catalog");

        Ok(Self { species, names })
    }

    /// Number of species (length of the density block).
    #[inline]
    pub fn nb(&self) -> usize {
        self.species.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &Specie> + '_ {
        self.species.iter()
    }

    pub fn as_slice(&self) -> &[Specie] {
        &self.species
    }

    pub fn get(&self, index: usize) -> Option<&Specie> {
        self.species.get(index)
    }

    pub fn electron(&self) -> &Specie {
        &self.species[0]
    }

    /// Heavy species (everything after the electron).
    pub fn heavy(&self) -> &[Specie] {
        &self.species[1..]
    }

    pub fn resolve(&self, name: &str) -> SpeciesResult<&Specie> {
        self.species
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| SpeciesError::UnknownSpecie {
                name: name.to_string(),
            })
    }

    pub fn index_of(&self, name: &str) -> SpeciesResult<usize> {
        self.resolve(name).map(Specie::index)
    }

    /// Resolve a list of names to owned entries, preserving order.
    pub fn resolve_all<S: AsRef<str>>(&self, names: &[S]) -> SpeciesResult<Vec<Specie>> {
        names
            .iter()
            .map(|n| self.resolve(n.as_ref()).cloned())
            .collect()
    }

    /// Expected state-vector length: densities plus three temperatures.
    #[inline]
    pub fn state_len(&self) -> usize {
        self.nb() + EnergyPool::ALL.len()
    }

    /// State-vector slot holding the temperature of `pool`.
    #[inline]
    pub fn temperature_index(&self, pool: EnergyPool) -> usize {
        self.nb() + pool.slot()
    }

    pub fn check_state(&self, state: &[f64]) -> SpeciesResult<()> {
        if state.len() != self.state_len() {
            return Err(SpeciesError::StateLength {
                expected: self.state_len(),
                got: state.len(),
            });
        }
        Ok(())
    }

    /// Electron temperature (V). The state must already be checked.
    #[inline]
    pub fn electron_temperature(&self, state: &[f64]) -> f64 {
        state[self.temperature_index(EnergyPool::Electron)]
    }

    /// Temperature (V) of the pool `specie` belongs to. The state must
    /// already be checked.
    #[inline]
    pub fn temperature_of(&self, specie: &Specie, state: &[f64]) -> f64 {
        state[self.temperature_index(specie.pool())]
    }

    /// Total density of charge-0 species.
    pub fn neutral_density(&self, state: &[f64]) -> f64 {
        pk_core::ordered_sum(
            self.species
                .iter()
                .filter(|s| s.is_neutral())
                .map(|s| state[s.index]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pk_core::units::amu;

    fn xenon_oxygen() -> Species {
        Species::from_defs(vec![
            SpecieDef::electron(),
            SpecieDef::new("Xe", amu(131.293), 0, 1, 1.5),
            SpecieDef::new("Xe+", amu(131.293), 1, 1, 1.5),
            SpecieDef::new("O2", amu(31.999), 0, 2, 2.5),
        ])
        .unwrap()
    }

    #[test]
    fn indices_follow_order() {
        let species = xenon_oxygen();
        assert_eq!(species.nb(), 4);
        assert_eq!(species.names(), &["e", "Xe", "Xe+", "O2"]);
        for (i, s) in species.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
        assert!(species.electron().is_electron());
        assert_eq!(species.heavy().len(), 3);
    }

    #[test]
    fn temperature_slots() {
        let species = xenon_oxygen();
        let state = [1.0, 2.0, 3.0, 4.0, 10.0, 0.03, 0.04];
        assert_eq!(species.electron_temperature(&state), 10.0);
        let xe = species.resolve("Xe").unwrap();
        let o2 = species.resolve("O2").unwrap();
        assert_eq!(species.temperature_of(xe, &state), 0.03);
        assert_eq!(species.temperature_of(o2, &state), 0.04);
    }

    #[test]
    fn neutral_density_skips_charged() {
        let species = xenon_oxygen();
        let state = [1.0, 2.0, 3.0, 4.0, 10.0, 0.03, 0.04];
        assert_eq!(species.neutral_density(&state), 6.0);
    }

    #[test]
    fn unknown_name_fails() {
        let species = xenon_oxygen();
        let err = species.resolve_all(&["e", "Kr"]).unwrap_err();
        assert_eq!(err, SpeciesError::UnknownSpecie { name: "Kr".into() });
    }

    #[test]
    fn electron_must_lead() {
        let err = Species::from_defs(vec![
            SpecieDef::new("Xe", amu(131.293), 0, 1, 1.5),
            SpecieDef::electron(),
        ])
        .unwrap_err();
        assert!(matches!(err, SpeciesError::ElectronNotFirst { .. }));
        assert_eq!(Species::from_defs(vec![]).unwrap_err(), SpeciesError::Empty);
    }

    #[test]
    fn rejects_duplicates_and_bad_entries() {
        let dup = Species::from_defs(vec![
            SpecieDef::electron(),
            SpecieDef::new("Xe", amu(131.293), 0, 1, 1.5),
            SpecieDef::new("Xe", amu(131.293), 0, 1, 1.5),
        ]);
        assert!(matches!(dup, Err(SpeciesError::DuplicateName { .. })));

        let heavy_triatomic = Species::from_defs(vec![
            SpecieDef::electron(),
            SpecieDef::new("CO2", amu(44.01), 0, 3, 3.5),
        ]);
        assert!(matches!(
            heavy_triatomic,
            Err(SpeciesError::InvalidSpecie { .. })
        ));

        let massless = Species::from_defs(vec![
            SpecieDef::electron(),
            SpecieDef::new("X", kg(0.0), 0, 1, 1.5),
        ]);
        assert!(matches!(massless, Err(SpeciesError::InvalidSpecie { .. })));
    }

    #[test]
    fn check_state_length() {
        let species = xenon_oxygen();
        assert!(species.check_state(&[0.0; 7]).is_ok());
        assert_eq!(
            species.check_state(&[0.0; 4]).unwrap_err(),
            SpeciesError::StateLength {
                expected: 7,
                got: 4
            }
        );
    }

    #[test]
    fn catalog_from_yaml() {
        let yaml = r#"
- name: e
  mass_kg: 9.1093837015e-31
  charge: -1
  nb_atoms: 0
  thermal_capacity: 1.5
- name: I2
  mass_kg: 4.2147e-25
  charge: 0
  nb_atoms: 2
  thermal_capacity: 2.5
- name: I
  mass_kg: 2.1073e-25
  charge: 0
  thermal_capacity: 1.5
"#;
        let defs: Vec<SpecieDef> = serde_yaml::from_str(yaml).unwrap();
        let species = Species::from_defs(defs).unwrap();
        assert_eq!(species.index_of("I").unwrap(), 2);
        assert_eq!(species.resolve("I").unwrap().nb_atoms(), 1);
        assert_eq!(species.resolve("I2").unwrap().pool(), EnergyPool::Diatomic);
    }
}
