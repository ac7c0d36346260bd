//! Module to calculate the atomic composition and charge of a plasma species formula
//!
//! Plasma species names carry more than a chemical formula: an excited-state label in brackets
//! (`N2(A_3_Sigma)`, `O(1_D)`), a charge sign (`N2+`, `NO3-`) or a special name (`e` for the electron,
//! `M` for an arbitrary third body). The parser strips the state label, reads the charge from the trailing
//! signs and counts the elements of what is left.
//!
//! # Examples
//! ```
//! use airGM::Kinetics::molmass::parse_species;
//! let composition = parse_species("N2O+");
//! assert_eq!(composition.atoms.get("N"), Some(&2));
//! assert_eq!(composition.charge, 1);
//! ```
use nalgebra::DMatrix;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

/// atomic composition and charge of one species
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpeciesComposition {
    pub atoms: HashMap<String, usize>,
    /// charge in units of the elementary charge
    pub charge: i32,
    /// true for the third-body pseudo-species `M`
    pub third_body: bool,
}

impl SpeciesComposition {
    pub fn count(&self, element: &str) -> usize {
        self.atoms.get(element).copied().unwrap_or(0)
    }
}

fn element_regex() -> &'static Regex {
    static ELEMENT_RE: OnceLock<Regex> = OnceLock::new();
    ELEMENT_RE.get_or_init(|| Regex::new(r"([A-Z][a-z]?)(\d*)").expect("valid element regex"))
}

// excited states are written as a bracketed label after the formula: N2(A_3_Sigma), O2(a_1_Delta)
fn filter_state_label(formula: &str) -> &str {
    match formula.find('(') {
        Some(pos) => &formula[..pos],
        None => formula,
    }
}

/// parse species name into atomic composition and charge
pub fn parse_species(name: &str) -> SpeciesComposition {
    let name = name.trim();
    match name {
        "M" => {
            return SpeciesComposition {
                third_body: true,
                ..Default::default()
            };
        }
        "e" | "e-" => {
            return SpeciesComposition {
                charge: -1,
                ..Default::default()
            };
        }
        _ => {}
    }
    let formula = filter_state_label(name);
    let positive = formula.chars().rev().take_while(|c| *c == '+').count() as i32;
    let negative = formula.chars().rev().take_while(|c| *c == '-').count() as i32;
    let formula = formula.trim_end_matches(['+', '-']);

    let mut atoms = HashMap::new();
    for caps in element_regex().captures_iter(formula) {
        let element = caps[1].to_string();
        let count: usize = if caps[2].is_empty() {
            1
        } else {
            caps[2].parse().unwrap_or(1)
        };
        *atoms.entry(element).or_insert(0) += count;
    }
    SpeciesComposition {
        atoms,
        charge: positive - negative,
        third_body: false,
    }
}

/// matrix of elements: rows are species, columns are elements (sorted), entries are atom counts
pub fn create_elem_composition_matrix(names: &[&str]) -> (DMatrix<f64>, Vec<String>) {
    let compositions: Vec<SpeciesComposition> = names.iter().map(|n| parse_species(n)).collect();
    let elements: Vec<String> = compositions
        .iter()
        .flat_map(|c| c.atoms.keys().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect();
    let mut matrix = DMatrix::zeros(names.len(), elements.len());
    for (i, composition) in compositions.iter().enumerate() {
        for (j, element) in elements.iter().enumerate() {
            matrix[(i, j)] = composition.count(element) as f64;
        }
    }
    (matrix, elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_species() {
        let c = parse_species("H2O");
        assert_eq!(c.atoms, HashMap::from([("H".to_string(), 2), ("O".to_string(), 1)]));
        assert_eq!(c.charge, 0);

        let c = parse_species("HNO3");
        assert_eq!(c.count("H"), 1);
        assert_eq!(c.count("N"), 1);
        assert_eq!(c.count("O"), 3);

        let c = parse_species("N2O5");
        assert_eq!(c.count("N"), 2);
        assert_eq!(c.count("O"), 5);
    }

    #[test]
    fn test_ions_and_excited_states() {
        let c = parse_species("H3O+");
        assert_eq!(c.count("H"), 3);
        assert_eq!(c.charge, 1);

        let c = parse_species("NO3-");
        assert_eq!(c.count("O"), 3);
        assert_eq!(c.charge, -1);

        let c = parse_species("N2(A_3_Sigma)");
        assert_eq!(c.atoms, HashMap::from([("N".to_string(), 2)]));
        assert_eq!(c.charge, 0);

        let c = parse_species("O2(a_1_Delta)");
        assert_eq!(c.atoms, HashMap::from([("O".to_string(), 2)]));
    }

    #[test]
    fn test_special_names() {
        let e = parse_species("e");
        assert!(e.atoms.is_empty());
        assert_eq!(e.charge, -1);
        let m = parse_species("M");
        assert!(m.third_body);
        assert!(m.atoms.is_empty());
    }

    #[test]
    fn test_element_matrix() {
        let (matrix, elements) = create_elem_composition_matrix(&["H2O", "N2", "O3", "HNO2"]);
        assert_eq!(elements, vec!["H".to_string(), "N".to_string(), "O".to_string()]);
        assert_eq!(matrix.nrows(), 4);
        assert_eq!(matrix.ncols(), 3);
        assert_eq!(matrix[(3, 0)], 1.0);
        assert_eq!(matrix[(3, 2)], 2.0);
    }
}
