//! Rate coefficients and mass-action rates of every reaction of a mechanism.
//!
//! Analytic laws are evaluated in closed form. Table-driven laws are interpolated in the BOLSIG+ table at
//! the electron temperature (converted to eV) and are switched off once the simulation time passes the
//! table validity cutoff. The coefficient vector is cached and reused while gas temperature, electron
//! temperature and the cutoff state stay the same, which is the whole afterglow.
use crate::Kinetics::errors::KineticsError;
use crate::Kinetics::kinetics::{EV_TO_KELVIN, RateLaw};
use crate::Kinetics::mechanism::Mechanism;
use crate::Kinetics::rate_table::{ColumnLookup, RateTable};
use log::{debug, warn};
use nalgebra::DVector;

/// default validity time of the electron impact table, s
pub const DEFAULT_TABLE_CUTOFF: f64 = 1.0e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
struct CacheKey {
    tgas: f64,
    te: f64,
    table_active: bool,
}

#[derive(Debug, Clone)]
pub struct RateEvaluator<'a> {
    mechanism: &'a Mechanism,
    table: Option<&'a RateTable>,
    /// column of every table-driven reaction, `None` for analytic ones
    columns: Vec<Option<ColumnLookup>>,
    pub cutoff: f64,
    cache_key: Option<CacheKey>,
    coefficients: Vec<f64>,
}

impl<'a> RateEvaluator<'a> {
    /// evaluator backed by a rate table; fails if the mechanism needs one and none is given
    pub fn new(
        mechanism: &'a Mechanism,
        table: Option<&'a RateTable>,
        cutoff: f64,
    ) -> Result<Self, KineticsError> {
        let n_table = mechanism.table_reactions();
        let Some(table) = table else {
            if n_table > 0 {
                return Err(KineticsError::MissingRateTable(n_table));
            }
            return Ok(Self::build(mechanism, None, cutoff));
        };
        Ok(Self::build(mechanism, Some(table), cutoff))
    }

    /// evaluator with every table-driven reaction explicitly flagged absent (zero coefficient)
    pub fn without_table(mechanism: &'a Mechanism, cutoff: f64) -> Self {
        let n_table = mechanism.table_reactions();
        if n_table > 0 {
            warn!(
                "no rate table: {} electron impact reactions will have zero rate",
                n_table
            );
        }
        Self::build(mechanism, None, cutoff)
    }

    fn build(mechanism: &'a Mechanism, table: Option<&'a RateTable>, cutoff: f64) -> Self {
        let columns: Vec<Option<ColumnLookup>> = mechanism
            .reactions()
            .iter()
            .map(|r| match r.law {
                RateLaw::Table { number } => Some(match table {
                    Some(table) => table.lookup(number),
                    None => ColumnLookup::Absent,
                }),
                RateLaw::Analytic(_) => None,
            })
            .collect();
        if table.is_some() {
            let absent: Vec<u32> = mechanism
                .reactions()
                .iter()
                .zip(columns.iter())
                .filter(|(_, c)| **c == Some(ColumnLookup::Absent))
                .map(|(r, _)| r.number)
                .collect();
            if !absent.is_empty() {
                warn!("rate table has no column for reactions {:?}, their rate is zero", absent);
            }
        }
        Self {
            mechanism,
            table,
            columns,
            cutoff,
            cache_key: None,
            coefficients: vec![0.0; mechanism.len()],
        }
    }

    pub fn mechanism(&self) -> &'a Mechanism {
        self.mechanism
    }

    pub fn column(&self, j: usize) -> Option<ColumnLookup> {
        self.columns[j]
    }

    pub fn table_active(&self, t: f64) -> bool {
        t <= self.cutoff
    }

    /// rate coefficient of reaction `j` (temperatures in K, time in s)
    pub fn coefficient(&self, j: usize, tgas: f64, te: f64, t: f64) -> f64 {
        match self.mechanism.reaction(j).law {
            RateLaw::Analytic(law) => law.K_const(tgas, te),
            RateLaw::Table { .. } => {
                if !self.table_active(t) {
                    return 0.0;
                }
                match (self.columns[j], self.table) {
                    (Some(ColumnLookup::Column(c)), Some(table)) => {
                        table.interpolate(c, te / EV_TO_KELVIN)
                    }
                    _ => 0.0,
                }
            }
        }
    }

    /// mass-action product of the reactant densities; a density at or below its floor counts as zero
    pub fn reactant_product(
        &self,
        j: usize,
        densities: &DVector<f64>,
        floors: &DVector<f64>,
    ) -> f64 {
        let mut product = 1.0;
        for &s in self.mechanism.reaction(j).reactants.as_slice() {
            if densities[s] <= floors[s] {
                return 0.0;
            }
            product *= densities[s];
        }
        product
    }

    /// (rate coefficient, reaction rate) of reaction `j`
    pub fn compute_rate(
        &self,
        j: usize,
        tgas: f64,
        te: f64,
        t: f64,
        densities: &DVector<f64>,
        floors: &DVector<f64>,
    ) -> (f64, f64) {
        let k = self.coefficient(j, tgas, te, t);
        if k == 0.0 {
            return (0.0, 0.0);
        }
        let product = self.reactant_product(j, densities, floors);
        if product == 0.0 {
            return (k, 0.0);
        }
        (k, k * product)
    }

    /// coefficients of all reactions, recomputed only when the conditions change
    pub fn coefficients(&mut self, tgas: f64, te: f64, t: f64) -> &[f64] {
        let key = CacheKey {
            tgas,
            te,
            table_active: self.table_active(t),
        };
        if self.cache_key != Some(key) {
            for j in 0..self.mechanism.len() {
                self.coefficients[j] = self.coefficient(j, tgas, te, t);
            }
            if self.cache_key.map(|k| k.table_active) == Some(true) && !key.table_active {
                debug!("t = {:e} s past the rate table cutoff, electron impact channels off", t);
            }
            self.cache_key = Some(key);
        }
        &self.coefficients
    }

    /// fill `rates` with the rate of every reaction
    pub fn compute_all(
        &mut self,
        tgas: f64,
        te: f64,
        t: f64,
        densities: &DVector<f64>,
        floors: &DVector<f64>,
        rates: &mut [f64],
    ) {
        assert_eq!(rates.len(), self.mechanism.len(), "one rate slot per reaction");
        self.coefficients(tgas, te, t);
        for j in 0..self.mechanism.len() {
            let k = self.coefficients[j];
            let product = if k == 0.0 {
                0.0
            } else {
                self.reactant_product(j, densities, floors)
            };
            rates[j] = if product == 0.0 { 0.0 } else { k * product };
        }
    }
}
