//! # BOLSIG+ rate table
//!
//! Electron impact rate coefficients tabulated against electron temperature, as written by the
//! BOLSIG+ post-processing script:
//!
//! ```text
//! mean_energy_eV,Te_eV,R625,R626,R627,...,R653_C18,...,R653,...
//! 0.100005,0.066670,1.234000E-14,...
//! ```
//!
//! `Te_eV` is the interpolation axis; it must be finite and strictly increasing. A column labelled
//! `R<number>` holds the coefficients (m^3/s) of the reaction with that number. A label with a suffix
//! (`R653_C18`) marks an ambiguous assignment: it is used only when no exact `R653` column exists.
//! Reactions without a column are reported as [`ColumnLookup::Absent`] and get a zero coefficient.
//!
//! The table is immutable after loading. [`RateTable::load_shared`] loads it once per process and hands
//! out a `&'static` reference that any number of integrators can share.
use crate::Kinetics::errors::KineticsError;
use csv::ReaderBuilder;
use log::{info, warn};
use regex::Regex;
use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

/// name of the interpolation axis column
pub const TE_COLUMN: &str = "Te_eV";

static SHARED_TABLE: OnceLock<RateTable> = OnceLock::new();
static LOAD_GUARD: Mutex<()> = Mutex::new(());

/// where the coefficients of a table-driven reaction live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLookup {
    Column(usize),
    Absent,
}

#[derive(Debug, Clone)]
pub struct RateTable {
    /// file the table was read from (empty for tables built in memory)
    pub path: PathBuf,
    te_ev: Vec<f64>,
    labels: Vec<String>,
    /// one vector of samples per rate column, aligned with `te_ev`
    columns: Vec<Vec<f64>>,
    by_number: HashMap<u32, usize>,
}

fn label_regex() -> &'static Regex {
    static LABEL_RE: OnceLock<Regex> = OnceLock::new();
    LABEL_RE.get_or_init(|| Regex::new(r"^R(\d+)(?:_(\w+))?$").expect("valid label regex"))
}

fn interpolate(x: f64, x1: f64, x2: f64, y1: f64, y2: f64) -> f64 {
    y1 + (x - x1) * (y2 - y1) / (x2 - x1)
}

impl RateTable {
    /// read and validate a table from a CSV file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KineticsError> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|e| KineticsError::rate_table(path, e.to_string()))?;
        let mut reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);
        let headers = reader
            .headers()
            .map_err(|e| KineticsError::rate_table(path, e.to_string()))?
            .clone();
        let te_idx = headers
            .iter()
            .position(|h| h == TE_COLUMN)
            .ok_or_else(|| KineticsError::rate_table(path, format!("no {} column", TE_COLUMN)))?;
        let rate_idx: Vec<(usize, String)> = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| label_regex().is_match(h))
            .map(|(i, h)| (i, h.to_string()))
            .collect();
        if rate_idx.is_empty() {
            return Err(KineticsError::rate_table(path, "no R<number> rate columns"));
        }

        let mut te_ev = Vec::new();
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); rate_idx.len()];
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| KineticsError::rate_table(path, e.to_string()))?;
            // header is line 1
            let line = row + 2;
            let field = |i: usize| -> Result<f64, KineticsError> {
                let raw = record.get(i).ok_or_else(|| {
                    KineticsError::rate_table(path, format!("line {}: missing column {}", line, i))
                })?;
                raw.parse::<f64>().map_err(|_| {
                    KineticsError::rate_table(
                        path,
                        format!("line {}: cannot parse {:?} as a number", line, raw),
                    )
                })
            };
            te_ev.push(field(te_idx)?);
            for (c, (i, _)) in rate_idx.iter().enumerate() {
                columns[c].push(field(*i)?);
            }
        }
        let labels = rate_idx.into_iter().map(|(_, h)| h).collect();
        let mut table = Self::from_columns(te_ev, labels, columns)
            .map_err(|e| match e {
                KineticsError::InvalidConfiguration(reason) => KineticsError::rate_table(path, reason),
                other => other,
            })?;
        table.path = path.to_path_buf();
        info!(
            "rate table {:?} loaded: {} samples, {} columns, Te {:.4}..{:.4} eV",
            path,
            table.len(),
            table.labels.len(),
            table.te_ev[0],
            table.te_ev[table.len() - 1]
        );
        Ok(table)
    }

    /// build a table from memory; every column must have one sample per `te_ev` entry
    pub fn from_columns(
        te_ev: Vec<f64>,
        labels: Vec<String>,
        columns: Vec<Vec<f64>>,
    ) -> Result<Self, KineticsError> {
        let invalid = |reason: String| Err(KineticsError::InvalidConfiguration(reason));
        if te_ev.is_empty() {
            return invalid("rate table has no samples".to_string());
        }
        if labels.len() != columns.len() {
            return invalid(format!(
                "{} labels for {} rate columns",
                labels.len(),
                columns.len()
            ));
        }
        if te_ev.iter().any(|t| !t.is_finite()) {
            return invalid(format!("{} axis contains non-finite values", TE_COLUMN));
        }
        if let Some(w) = te_ev.windows(2).position(|w| w[1] <= w[0]) {
            return invalid(format!(
                "{} is not strictly increasing at sample {} ({} after {})",
                TE_COLUMN,
                w + 1,
                te_ev[w + 1],
                te_ev[w]
            ));
        }
        for (label, column) in labels.iter().zip(columns.iter()) {
            if column.len() != te_ev.len() {
                return invalid(format!(
                    "column {} has {} samples, expected {}",
                    label,
                    column.len(),
                    te_ev.len()
                ));
            }
            if column.iter().any(|k| !k.is_finite() || *k < 0.0) {
                return invalid(format!("column {} has negative or non-finite values", label));
            }
        }

        let mut exact: HashMap<u32, usize> = HashMap::new();
        let mut suffixed: HashMap<u32, usize> = HashMap::new();
        for (c, label) in labels.iter().enumerate() {
            let Some(caps) = label_regex().captures(label) else {
                return invalid(format!("bad rate column label {:?}", label));
            };
            let Ok(number) = caps[1].parse::<u32>() else {
                return invalid(format!("bad reaction number in {:?}", label));
            };
            let slot = if caps.get(2).is_some() {
                &mut suffixed
            } else {
                &mut exact
            };
            if slot.insert(number, c).is_some() {
                return invalid(format!("duplicate rate column for R{}", number));
            }
        }
        let mut by_number = exact;
        for (number, c) in suffixed {
            if by_number.contains_key(&number) {
                warn!(
                    "rate column {} ignored: an exact R{} column exists",
                    labels[c], number
                );
            } else {
                warn!(
                    "ambiguous rate column {} used for R{}",
                    labels[c], number
                );
                by_number.insert(number, c);
            }
        }

        Ok(Self {
            path: PathBuf::new(),
            te_ev,
            labels,
            columns,
            by_number,
        })
    }

    /// load the process-wide table once; later calls return the table already loaded
    pub fn load_shared(path: impl AsRef<Path>) -> Result<&'static RateTable, KineticsError> {
        let path = path.as_ref();
        if let Some(table) = SHARED_TABLE.get() {
            Self::warn_if_other_path(table, path);
            return Ok(table);
        }
        let _guard = LOAD_GUARD.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(table) = SHARED_TABLE.get() {
            Self::warn_if_other_path(table, path);
            return Ok(table);
        }
        let table = Self::load(path)?;
        Ok(SHARED_TABLE.get_or_init(|| table))
    }

    /// the process-wide table, if it has been loaded
    pub fn shared() -> Option<&'static RateTable> {
        SHARED_TABLE.get()
    }

    fn warn_if_other_path(table: &RateTable, path: &Path) {
        if table.path != path {
            warn!(
                "rate table already loaded from {:?}, ignoring {:?}",
                table.path, path
            );
        }
    }

    pub fn len(&self) -> usize {
        self.te_ev.len()
    }
    pub fn is_empty(&self) -> bool {
        self.te_ev.is_empty()
    }
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
    /// (lowest, highest) electron temperature sample, eV
    pub fn te_range(&self) -> (f64, f64) {
        (self.te_ev[0], self.te_ev[self.te_ev.len() - 1])
    }

    pub fn lookup(&self, number: u32) -> ColumnLookup {
        match self.by_number.get(&number) {
            Some(&c) => ColumnLookup::Column(c),
            None => ColumnLookup::Absent,
        }
    }

    /// linear interpolation of column `column` at `te_ev` (eV), clamped to the table range
    pub fn interpolate(&self, column: usize, te_ev: f64) -> f64 {
        let x = &self.te_ev;
        let y = &self.columns[column];
        let last = x.len() - 1;
        if te_ev <= x[0] {
            return y[0];
        }
        if te_ev >= x[last] {
            return y[last];
        }
        // x[i-1] <= te_ev < x[i]
        let i = x.partition_point(|&t| t <= te_ev);
        if x[i - 1] == te_ev {
            return y[i - 1];
        }
        interpolate(te_ev, x[i - 1], x[i], y[i - 1], y[i])
    }

    /// coefficient of reaction `number` at `te_ev`, zero when the table has no column for it
    pub fn coefficient(&self, number: u32, te_ev: f64) -> f64 {
        match self.lookup(number) {
            ColumnLookup::Column(c) => self.interpolate(c, te_ev),
            ColumnLookup::Absent => 0.0,
        }
    }
}
