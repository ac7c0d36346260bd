//! # Run file
//!
//! CSV file with one row per saved step:
//!
//! ```text
//! Time(s),M,N+,N2+,...,H2O,StepNo,dt(s)
//! 0e0,2.4e25,1e-3,...,1.2e24,0,5e-11
//! ```
//!
//! Numbers are written in the shortest scientific notation that reads back to the same `f64`, so a
//! resumed run continues from exactly the saved state. The file is only ever appended to. On resume
//! the header must match the species registry column for column and only the last row is used.
use crate::Kinetics::errors::KineticsError;
use crate::Kinetics::species::SpeciesRegistry;
use crate::ReactorsIVP::PlasmaReactorIVP::{Checkpoint, StepRecorder};
use csv::{ReaderBuilder, Writer, WriterBuilder};
use log::{info, warn};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

pub const TIME_COLUMN: &str = "Time(s)";
pub const STEP_COLUMN: &str = "StepNo";
pub const DT_COLUMN: &str = "dt(s)";

/// reference timestep of the decimated schedule, s
const DECIMATION_DT: f64 = 50e-12;
/// (upper time bound, save every n-th step at the reference timestep)
const DECADES: [(f64, f64); 13] = [
    (1e-9, 1.0),
    (1e-8, 10.0),
    (1e-7, 1e2),
    (1e-6, 1e3),
    (1e-5, 1e4),
    (1e-4, 1e5),
    (1e-3, 1e6),
    (1e-2, 1e7),
    (1e-1, 1e8),
    (1e0, 1e9),
    (1e1, 1e10),
    (1e2, 1e11),
    (1e3, 1e12),
];

/// which accepted steps are written to the run file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveSchedule {
    #[default]
    EveryStep,
    /// every n-th step, n growing by a decade per decade of simulated time and scaled by dt
    Decimated,
}

impl SaveSchedule {
    /// save every `interval` steps at time `t` with timestep `dt`
    pub fn interval(&self, t: f64, dt: f64) -> u64 {
        match self {
            SaveSchedule::EveryStep => 1,
            SaveSchedule::Decimated => {
                let steps = DECADES
                    .iter()
                    .find(|(bound, _)| t <= *bound)
                    .map(|(_, steps)| *steps)
                    .unwrap_or(1.0);
                // truncation as in integer division, tolerant to the rounding of dt / DECIMATION_DT
                let interval = (steps / (dt / DECIMATION_DT) * (1.0 + 1e-12)).floor();
                if interval < 1.0 { 1 } else { interval as u64 }
            }
        }
    }

    pub fn should_save(&self, step: usize, t: f64, dt: f64, last_saved_t: f64) -> bool {
        t > last_saved_t && (step as u64) % self.interval(t, dt) == 0
    }
}

/// column names of the run file for a registry
pub fn header(registry: &SpeciesRegistry) -> Vec<String> {
    let mut header = Vec::with_capacity(registry.len() + 3);
    header.push(TIME_COLUMN.to_string());
    header.extend(registry.iter().map(|s| s.formula.clone()));
    header.push(STEP_COLUMN.to_string());
    header.push(DT_COLUMN.to_string());
    header
}

fn check_header(path: &Path, found: &csv::StringRecord, expected: &[String]) -> Result<(), KineticsError> {
    if found.len() != expected.len() {
        return Err(KineticsError::resume_file(
            path,
            format!(
                "header has {} columns, expected {}",
                found.len(),
                expected.len()
            ),
        ));
    }
    for (i, (f, e)) in found.iter().zip(expected.iter()).enumerate() {
        if f != e {
            return Err(KineticsError::resume_file(
                path,
                format!("column {} is {:?}, expected {:?}", i, f, e),
            ));
        }
    }
    Ok(())
}

/// last saved state of a run file; `None` when the file does not exist or holds no rows yet
pub fn read_last_checkpoint(
    path: impl AsRef<Path>,
    registry: &SpeciesRegistry,
) -> Result<Option<Checkpoint>, KineticsError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().has_headers(false).from_reader(file);
    let mut records = reader.records();
    let Some(first) = records.next() else {
        return Ok(None);
    };
    let expected = header(registry);
    check_header(path, &first?, &expected)?;
    let mut last = None;
    for record in records {
        last = Some(record?);
    }
    let Some(row) = last else {
        return Ok(None);
    };
    if row.len() != expected.len() {
        return Err(KineticsError::resume_file(
            path,
            format!("last row has {} fields, expected {}", row.len(), expected.len()),
        ));
    }
    let number = |i: usize| -> Result<f64, KineticsError> {
        let raw = row.get(i).unwrap_or("").trim();
        raw.parse::<f64>().map_err(|_| {
            KineticsError::resume_file(path, format!("cannot parse {:?} in column {}", raw, expected[i]))
        })
    };
    let n = registry.len();
    let t = number(0)?;
    let densities = (1..=n).map(|i| number(i)).collect::<Result<Vec<f64>, _>>()?;
    let step_raw = row.get(n + 1).unwrap_or("").trim();
    let step = step_raw.parse::<usize>().map_err(|_| {
        KineticsError::resume_file(path, format!("cannot parse step number {:?}", step_raw))
    })?;
    let dt = number(n + 2)?;
    if !t.is_finite() || densities.iter().any(|d| !d.is_finite()) {
        return Err(KineticsError::resume_file(path, "last row holds non-finite values"));
    }
    info!("{:?}: resuming from t = {:e} s, step {}", path, t, step);
    Ok(Some(Checkpoint {
        t,
        step,
        dt,
        densities: DVector::from_vec(densities),
    }))
}

/// append-only writer of the run file
pub struct RunWriter {
    path: PathBuf,
    writer: Writer<File>,
    schedule: SaveSchedule,
    last_saved_t: f64,
    last_saved_step: Option<usize>,
    n_species: usize,
    pub rows_written: usize,
}

impl RunWriter {
    /// open `path` for appending; a new or empty file gets the header, an existing one must match it
    pub fn open(
        path: impl AsRef<Path>,
        registry: &SpeciesRegistry,
        schedule: SaveSchedule,
    ) -> Result<Self, KineticsError> {
        let path = path.as_ref().to_path_buf();
        let expected = header(registry);
        let has_content = path.exists() && std::fs::metadata(&path)?.len() > 0;
        let mut last_saved_t = -1.0;
        let mut last_saved_step = None;
        if has_content {
            let mut reader = ReaderBuilder::new()
                .has_headers(false)
                .from_path(&path)?;
            if let Some(first) = reader.records().next() {
                check_header(&path, &first?, &expected)?;
            }
            if let Some(checkpoint) = read_last_checkpoint(&path, registry)? {
                last_saved_t = checkpoint.t;
                last_saved_step = Some(checkpoint.step);
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if !has_content {
            writer.write_record(&expected)?;
            writer.flush()?;
        } else {
            warn!("appending to existing run file {:?}", path);
        }
        Ok(Self {
            path,
            writer,
            schedule,
            last_saved_t,
            last_saved_step,
            n_species: registry.len(),
            rows_written: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_row(&mut self, checkpoint: &Checkpoint) -> Result<(), KineticsError> {
        if checkpoint.densities.len() != self.n_species {
            return Err(KineticsError::InvalidConfiguration(format!(
                "checkpoint has {} densities, run file has {} species columns",
                checkpoint.densities.len(),
                self.n_species
            )));
        }
        let mut row = Vec::with_capacity(self.n_species + 3);
        row.push(format!("{:e}", checkpoint.t));
        row.extend(checkpoint.densities.iter().map(|d| format!("{:e}", d)));
        row.push(checkpoint.step.to_string());
        row.push(format!("{:e}", checkpoint.dt));
        self.writer.write_record(&row)?;
        self.last_saved_t = checkpoint.t;
        self.last_saved_step = Some(checkpoint.step);
        self.rows_written += 1;
        Ok(())
    }
}

impl StepRecorder for RunWriter {
    fn record(&mut self, checkpoint: &Checkpoint) -> Result<(), KineticsError> {
        if self
            .schedule
            .should_save(checkpoint.step, checkpoint.t, checkpoint.dt, self.last_saved_t)
        {
            self.write_row(checkpoint)?;
        }
        Ok(())
    }

    /// the final state is always saved so that the run can be resumed from it
    fn finish(&mut self, checkpoint: &Checkpoint) -> Result<(), KineticsError> {
        if self.last_saved_step != Some(checkpoint.step) {
            self.write_row(checkpoint)?;
        }
        self.writer.flush()?;
        info!("{} rows written to {:?}", self.rows_written, self.path);
        Ok(())
    }
}
