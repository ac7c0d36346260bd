//! # Species registry
//!
//! Fixed ordered list of the species of the humid air model. Index 0 is the third body `M`
//! (total gas density), indices 1..=53 are the tracked species. The order is the column order
//! of the run file and must never change between runs.
//!
//! Background gases (`M`, `N2`, `O2`, `H2O`) are held at a fixed density by default, all other
//! species are advanced by the integrator.
use crate::Kinetics::molmass::{SpeciesComposition, parse_species};
use nalgebra::DVector;

/// number of tracked species (the third body is not counted)
pub const NO_SPECIES: usize = 53;
/// default density floor, m^-3
pub const MINIMUM_DENSITY: f64 = 1.0e-3;

pub const M: usize = 0;
pub const N_ION: usize = 1;
pub const N2_ION: usize = 2;
pub const N3_ION: usize = 3;
pub const N4_ION: usize = 4;
pub const O_ION: usize = 5;
pub const O2_ION: usize = 6;
pub const O4_ION: usize = 7;
pub const NO_ION: usize = 8;
pub const N2O_ION: usize = 9;
pub const NO2_ION: usize = 10;
pub const H_ION: usize = 11;
pub const H2_ION: usize = 12;
pub const H3_ION: usize = 13;
pub const OH_ION: usize = 14;
pub const H2O_ION: usize = 15;
pub const H3O_ION: usize = 16;
pub const E: usize = 17;
pub const O_NEG: usize = 18;
pub const O2_NEG: usize = 19;
pub const O3_NEG: usize = 20;
pub const O4_NEG: usize = 21;
pub const NO_NEG: usize = 22;
pub const N2O_NEG: usize = 23;
pub const NO2_NEG: usize = 24;
pub const NO3_NEG: usize = 25;
pub const H_NEG: usize = 26;
pub const OH_NEG: usize = 27;
pub const N_2D: usize = 28;
pub const N2_A: usize = 29;
pub const N2_B: usize = 30;
pub const O_1D: usize = 31;
pub const H: usize = 32;
pub const N: usize = 33;
pub const O: usize = 34;
pub const O2_A: usize = 35;
pub const O3: usize = 36;
pub const NO: usize = 37;
pub const N2O: usize = 38;
pub const NO2: usize = 39;
pub const NO3: usize = 40;
pub const N2O3: usize = 41;
pub const N2O4: usize = 42;
pub const N2O5: usize = 43;
pub const H2: usize = 44;
pub const OH: usize = 45;
pub const HO2: usize = 46;
pub const H2O2: usize = 47;
pub const HNO: usize = 48;
pub const HNO2: usize = 49;
pub const HNO3: usize = 50;
pub const N2: usize = 51;
pub const O2: usize = 52;
pub const H2O: usize = 53;

/// formulas in registry order
pub const SPECIES_FORMULAS: [&str; NO_SPECIES + 1] = [
    "M",
    "N+",
    "N2+",
    "N3+",
    "N4+",
    "O+",
    "O2+",
    "O4+",
    "NO+",
    "N2O+",
    "NO2+",
    "H+",
    "H2+",
    "H3+",
    "OH+",
    "H2O+",
    "H3O+",
    "e",
    "O-",
    "O2-",
    "O3-",
    "O4-",
    "NO-",
    "N2O-",
    "NO2-",
    "NO3-",
    "H-",
    "OH-",
    "N(2_D)",
    "N2(A_3_Sigma)",
    "N2(B_3_Pi)",
    "O(1_D)",
    "H",
    "N",
    "O",
    "O2(a_1_Delta)",
    "O3",
    "NO",
    "N2O",
    "NO2",
    "NO3",
    "N2O3",
    "N2O4",
    "N2O5",
    "H2",
    "OH",
    "HO2",
    "H2O2",
    "HNO",
    "HNO2",
    "HNO3",
    "N2",
    "O2",
    "H2O",
];

/// default initial densities of a cold start, m^-3 (atmospheric air, 50% of the H2O content used by the model)
pub const DEFAULT_DENSITIES: [(usize, f64); 5] = [
    (M, 2.40e25),
    (E, 1.00e3),
    (N2, 1.92e25),
    (O2, 4.80e24),
    (H2O, 1.20e24),
];

/// cold start density of species `idx`, zero for species not listed in [`DEFAULT_DENSITIES`]
pub fn default_density(idx: usize) -> f64 {
    DEFAULT_DENSITIES
        .iter()
        .find(|(i, _)| *i == idx)
        .map(|(_, density)| *density)
        .unwrap_or(0.0)
}

/// one tracked species
#[derive(Debug, Clone)]
pub struct Species {
    pub formula: String,
    pub density: f64,
    pub floor: f64,
    /// fixed species are not advanced by the integrator
    pub fixed: bool,
    pub composition: SpeciesComposition,
}

impl Species {
    pub fn new(formula: &str, floor: f64) -> Self {
        Self {
            formula: formula.to_string(),
            density: 0.0,
            floor,
            fixed: false,
            composition: parse_species(formula),
        }
    }
    /// set density clamped to the species floor
    pub fn set_density(&mut self, density: f64) {
        self.density = if density.is_finite() {
            density.max(self.floor)
        } else {
            self.floor
        };
    }
    pub fn contains_hydrogen(&self) -> bool {
        self.composition.count("H") > 0
    }
}

/// ordered collection of species
#[derive(Debug, Clone)]
pub struct SpeciesRegistry {
    species: Vec<Species>,
}

impl SpeciesRegistry {
    /// registry of the humid air model with default densities, background gases fixed
    pub fn air(floor: f64) -> Self {
        let species = SPECIES_FORMULAS
            .iter()
            .map(|f| Species::new(f, floor))
            .collect();
        let mut registry = Self { species };
        registry.set_default_densities();
        for idx in [M, N2, O2, H2O] {
            registry.species[idx].fixed = true;
        }
        registry
    }
    /// registry built from a custom list of formulas, all species evolve
    pub fn from_formulas(formulas: &[&str], floor: f64) -> Self {
        Self {
            species: formulas.iter().map(|f| Species::new(f, floor)).collect(),
        }
    }
    /// every density back to the floor, then the cold start values
    pub fn set_default_densities(&mut self) {
        for s in self.species.iter_mut() {
            s.set_density(0.0);
        }
        if self.species.len() == NO_SPECIES + 1 {
            for (idx, density) in DEFAULT_DENSITIES {
                self.species[idx].set_density(density);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
    pub fn get(&self, idx: usize) -> &Species {
        &self.species[idx]
    }
    pub fn iter(&self) -> impl Iterator<Item = &Species> {
        self.species.iter()
    }
    pub fn index_of(&self, formula: &str) -> Option<usize> {
        self.species.iter().position(|s| s.formula == formula)
    }
    pub fn formulas(&self) -> Vec<&str> {
        self.species.iter().map(|s| s.formula.as_str()).collect()
    }
    pub fn set_fixed(&mut self, idx: usize, fixed: bool) {
        self.species[idx].fixed = fixed;
    }
    pub fn set_density(&mut self, idx: usize, density: f64) {
        self.species[idx].set_density(density);
    }
    pub fn set_floor(&mut self, floor: f64) {
        for s in self.species.iter_mut() {
            s.floor = floor;
            s.density = s.density.max(floor);
        }
    }

    /// snapshot of all densities in registry order
    pub fn densities(&self) -> DVector<f64> {
        DVector::from_iterator(self.species.len(), self.species.iter().map(|s| s.density))
    }
    pub fn floors(&self) -> DVector<f64> {
        DVector::from_iterator(self.species.len(), self.species.iter().map(|s| s.floor))
    }
    /// overwrite densities from a vector in registry order (values clamped to the floor)
    pub fn load_densities(&mut self, densities: &DVector<f64>) {
        assert_eq!(
            densities.len(),
            self.species.len(),
            "density vector does not match the registry"
        );
        for (s, d) in self.species.iter_mut().zip(densities.iter()) {
            s.set_density(*d);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air_registry_layout() {
        let registry = SpeciesRegistry::air(MINIMUM_DENSITY);
        assert_eq!(registry.len(), NO_SPECIES + 1);
        assert_eq!(registry.get(E).formula, "e");
        assert_eq!(registry.get(N2).formula, "N2");
        assert_eq!(registry.get(H2O).formula, "H2O");
        assert_eq!(registry.index_of("O(1_D)"), Some(O_1D));
        assert_eq!(registry.index_of("HNO3"), Some(HNO3));
        assert!(registry.get(M).fixed);
        assert!(registry.get(O2).fixed);
        assert!(!registry.get(O3).fixed);
    }

    #[test]
    fn test_default_densities() {
        let registry = SpeciesRegistry::air(MINIMUM_DENSITY);
        assert_eq!(registry.get(M).density, 2.40e25);
        assert_eq!(registry.get(E).density, 1.0e3);
        assert_eq!(registry.get(O3).density, MINIMUM_DENSITY);
    }

    #[test]
    fn test_set_density_clamps_to_floor() {
        let mut registry = SpeciesRegistry::air(10.0);
        registry.set_density(O3, -5.0);
        assert_eq!(registry.get(O3).density, 10.0);
        registry.set_density(O3, f64::NAN);
        assert_eq!(registry.get(O3).density, 10.0);
        registry.set_density(O3, 1e12);
        assert_eq!(registry.get(O3).density, 1e12);
    }

    #[test]
    fn test_hydrogen_species() {
        let registry = SpeciesRegistry::air(MINIMUM_DENSITY);
        let hydrogen: Vec<usize> = (0..registry.len())
            .filter(|&i| registry.get(i).contains_hydrogen())
            .collect();
        assert_eq!(
            hydrogen,
            vec![11, 12, 13, 14, 15, 16, 26, 27, 32, 44, 45, 46, 47, 48, 49, 50, 53]
        );
    }
}
