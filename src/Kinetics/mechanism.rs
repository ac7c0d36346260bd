//! # Reaction definition table
//!
//! A [`Mechanism`] is an immutable indexed collection of [`Reaction`]s over a species registry of known
//! size. Each reaction has up to [`MAX_PARTICIPANTS`] reactants and products (species indices, repeats
//! allowed: `e + e + N2+ -> N2 + e`) and a [`RateLaw`].
//!
//! When the table is built every index is checked against the registry size and the per-species
//! balance equations are assembled: for every species the list of reactions that produce it (sources)
//! and consume it (losses), each with the net stoichiometric multiplier. A species that appears on
//! both sides of a reaction is entered only with its net multiplicity, and not at all when the
//! multiplicities are equal (energy-loss channels such as `e + N2 -> e + N2`).
//!
//! # Examples
//! ```
//! use airGM::Kinetics::kinetics::RateLaw;
//! use airGM::Kinetics::mechanism::{Mechanism, Reaction};
//! // A -> B, B + B -> C
//! let reactions = vec![
//!     Reaction::new(1, &[0], &[1], RateLaw::constant(1.0)),
//!     Reaction::new(2, &[1, 1], &[2], RateLaw::constant(1e-3)),
//! ];
//! let mechanism = Mechanism::custom(reactions, 3).unwrap();
//! assert_eq!(mechanism.number_of_reactants(1), 2);
//! assert_eq!(mechanism.balance(1).losses[0].multiplier, 2.0);
//! ```
use crate::Kinetics::errors::KineticsError;
use crate::Kinetics::kinetics::RateLaw;

pub const MAX_PARTICIPANTS: usize = 4;

/// fixed capacity list of species indices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Participants {
    slots: [usize; MAX_PARTICIPANTS],
    len: usize,
}

impl Participants {
    pub const fn new(list: &[usize]) -> Self {
        assert!(
            list.len() <= MAX_PARTICIPANTS,
            "a reaction has at most 4 reactants and 4 products"
        );
        let mut slots = [0; MAX_PARTICIPANTS];
        let mut i = 0;
        while i < list.len() {
            slots[i] = list[i];
            i += 1;
        }
        Self {
            slots,
            len: list.len(),
        }
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn get(&self, k: usize) -> usize {
        assert!(k < self.len, "participant {} out of {}", k, self.len);
        self.slots[k]
    }
    pub fn as_slice(&self) -> &[usize] {
        &self.slots[..self.len]
    }
    /// how many times species `idx` occurs in the list
    pub fn multiplicity(&self, idx: usize) -> usize {
        self.as_slice().iter().filter(|&&s| s == idx).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reaction {
    /// literature number (table-driven channels keep their BOLSIG+ numbering)
    pub number: u32,
    pub reactants: Participants,
    pub products: Participants,
    pub law: RateLaw,
}

impl Reaction {
    pub const fn new(number: u32, reactants: &[usize], products: &[usize], law: RateLaw) -> Self {
        Self {
            number,
            reactants: Participants::new(reactants),
            products: Participants::new(products),
            law,
        }
    }
}

/// one term of a balance equation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceTerm {
    pub reaction: usize,
    pub multiplier: f64,
}

/// sources and losses of one species
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceEquation {
    pub sources: Vec<BalanceTerm>,
    pub losses: Vec<BalanceTerm>,
}

impl BalanceEquation {
    /// net production rate from a vector of reaction rates
    pub fn net_rate(&self, rates: &[f64]) -> f64 {
        let source: f64 = self
            .sources
            .iter()
            .map(|t| t.multiplier * rates[t.reaction])
            .sum();
        let loss: f64 = self
            .losses
            .iter()
            .map(|t| t.multiplier * rates[t.reaction])
            .sum();
        source - loss
    }
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty() && self.losses.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Mechanism {
    reactions: Vec<Reaction>,
    n_species: usize,
    balance: Vec<BalanceEquation>,
}

impl Mechanism {
    /// validated mechanism from caller data; `n_species` is the size of the registry it runs on
    pub fn custom(reactions: Vec<Reaction>, n_species: usize) -> Result<Self, KineticsError> {
        for (j, reaction) in reactions.iter().enumerate() {
            if reaction.reactants.is_empty() {
                return Err(KineticsError::InvalidMechanism(format!(
                    "reaction {} (R{}) has no reactants",
                    j, reaction.number
                )));
            }
            let out_of_range = reaction
                .reactants
                .as_slice()
                .iter()
                .chain(reaction.products.as_slice())
                .find(|&&s| s >= n_species);
            if let Some(s) = out_of_range {
                return Err(KineticsError::InvalidMechanism(format!(
                    "reaction {} (R{}) references species {} but the registry has {} species",
                    j, reaction.number, s, n_species
                )));
            }
        }
        let balance = Self::balance_equations(&reactions, n_species);
        Ok(Self {
            reactions,
            n_species,
            balance,
        })
    }

    fn balance_equations(reactions: &[Reaction], n_species: usize) -> Vec<BalanceEquation> {
        let mut balance = vec![BalanceEquation::default(); n_species];
        for (j, reaction) in reactions.iter().enumerate() {
            let mut seen: Vec<usize> = Vec::with_capacity(2 * MAX_PARTICIPANTS);
            for &s in reaction
                .reactants
                .as_slice()
                .iter()
                .chain(reaction.products.as_slice())
            {
                if seen.contains(&s) {
                    continue;
                }
                seen.push(s);
                let net = reaction.products.multiplicity(s) as i64
                    - reaction.reactants.multiplicity(s) as i64;
                if net > 0 {
                    balance[s].sources.push(BalanceTerm {
                        reaction: j,
                        multiplier: net as f64,
                    });
                } else if net < 0 {
                    balance[s].losses.push(BalanceTerm {
                        reaction: j,
                        multiplier: (-net) as f64,
                    });
                }
            }
        }
        balance
    }

    pub fn len(&self) -> usize {
        self.reactions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }
    pub fn n_species(&self) -> usize {
        self.n_species
    }
    pub fn reaction(&self, j: usize) -> &Reaction {
        &self.reactions[j]
    }
    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }
    pub fn number_of_reactants(&self, j: usize) -> usize {
        self.reactions[j].reactants.len()
    }
    pub fn number_of_products(&self, j: usize) -> usize {
        self.reactions[j].products.len()
    }
    pub fn reactant(&self, j: usize, k: usize) -> usize {
        self.reactions[j].reactants.get(k)
    }
    pub fn product(&self, j: usize, k: usize) -> usize {
        self.reactions[j].products.get(k)
    }
    pub fn balance(&self, species: usize) -> &BalanceEquation {
        &self.balance[species]
    }
    /// number of reactions whose coefficient comes from the rate table
    pub fn table_reactions(&self) -> usize {
        self.reactions.iter().filter(|r| r.law.is_table()).count()
    }
    /// position of the reaction with the given literature number
    pub fn find_by_number(&self, number: u32) -> Option<usize> {
        self.reactions.iter().position(|r| r.number == number)
    }
}
