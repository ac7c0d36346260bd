//! # Settings Module
//!
//! ## Purpose
//! Run configuration of the air plasma kinetics model. Every field has a default, so an empty JSON
//! object `{}` is a valid configuration; the command line overrides individual fields.
//!
//! ## Usage Pattern
//! ```rust
//! use airGM::settings::RunConfig;
//!
//! let mut config = RunConfig::default();
//! config.te_peak_ev = 3.0;
//! config.relative_humidity = Some(50.0);
//! config.validate().unwrap();
//! let conditions = config.conditions();
//! assert!(conditions.te_peak > 3.0e4);
//! ```
//!
//! ## Defaults
//! | Field | Default | Units |
//! |-------|---------|-------|
//! | total_time | 1e-6 | s |
//! | te_peak_ev | 1.0 | eV |
//! | tgas | 298 | K |
//! | dt_initial | 5e-11 | s |
//! | metric_min / metric_max | 0.05 / 0.5 | - |
//! | plasma_time | 1e-9 | s |
//! | floor | 1e-3 | m^-3 |
//! | table_cutoff | 1e-4 | s |
use crate::Kinetics::errors::KineticsError;
use crate::Kinetics::rate_evaluator::DEFAULT_TABLE_CUTOFF;
use crate::Kinetics::species::{H2O, MINIMUM_DENSITY, default_density};
use crate::ReactorsIVP::PlasmaReactorIVP::{METRIC_DENSITY_THRESHOLD, StepControl};
use crate::ReactorsIVP::plasma_conditions::{PlasmaConditions, water_density_from_rh};
use crate::Utils::run_store::SaveSchedule;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything a run needs besides the built-in reaction set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// simulated time, s
    pub total_time: f64,
    /// peak electron temperature of the pulse, eV
    pub te_peak_ev: f64,
    /// gas temperature, K
    pub tgas: f64,
    /// water vapour density, m^-3; ignored when `relative_humidity` is set
    pub h2o_density: Option<f64>,
    /// relative humidity, percent
    pub relative_humidity: Option<f64>,
    /// constant timestep, s; disables the adaptive policy
    pub fixed_dt: Option<f64>,
    pub dt_initial: f64,
    pub metric_min: f64,
    pub metric_max: f64,
    pub grow_factor: f64,
    pub shrink_factor: f64,
    pub dt_min: f64,
    pub dt_max: f64,
    /// duration of the plasma pulse, s
    pub plasma_time: f64,
    pub pulse_resolution: f64,
    /// density floor of every species, m^-3
    pub floor: f64,
    pub metric_threshold: f64,
    /// table driven reactions are switched off after this time, s
    pub table_cutoff: f64,
    pub rate_table: PathBuf,
    pub output: PathBuf,
    pub save_schedule: SaveSchedule,
}

impl Default for RunConfig {
    fn default() -> Self {
        let control = StepControl::default();
        Self {
            total_time: 1.0e-6,
            te_peak_ev: 1.0,
            tgas: 298.0,
            h2o_density: None,
            relative_humidity: None,
            fixed_dt: None,
            dt_initial: control.dt_initial,
            metric_min: control.metric_min,
            metric_max: control.metric_max,
            grow_factor: control.grow_factor,
            shrink_factor: control.shrink_factor,
            dt_min: control.dt_min,
            dt_max: control.dt_max,
            plasma_time: 1.0e-9,
            pulse_resolution: control.pulse_resolution,
            floor: MINIMUM_DENSITY,
            metric_threshold: METRIC_DENSITY_THRESHOLD,
            table_cutoff: DEFAULT_TABLE_CUTOFF,
            rate_table: PathBuf::from("bolsig_rates.csv"),
            output: PathBuf::from("output.csv"),
            save_schedule: SaveSchedule::EveryStep,
        }
    }
}

impl RunConfig {
    /// Loads a configuration from a JSON file; missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, KineticsError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: RunConfig = serde_json::from_str(&content)?;
        info!("configuration loaded from {:?}", path.as_ref());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), KineticsError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Rejects configurations the integrator cannot run with.
    pub fn validate(&self) -> Result<(), KineticsError> {
        let positive = [
            ("total_time", self.total_time),
            ("tgas", self.tgas),
            ("plasma_time", self.plasma_time),
            ("floor", self.floor),
            ("table_cutoff", self.table_cutoff),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(KineticsError::InvalidConfiguration(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        if !(self.te_peak_ev.is_finite() && self.te_peak_ev >= 0.0) {
            return Err(KineticsError::InvalidConfiguration(format!(
                "peak electron temperature must be non-negative, got {} eV",
                self.te_peak_ev
            )));
        }
        if let Some(n) = self.h2o_density {
            if !(n.is_finite() && n >= 0.0) {
                return Err(KineticsError::InvalidConfiguration(format!(
                    "water vapour density must be non-negative, got {}",
                    n
                )));
            }
        }
        if let Some(rh) = self.relative_humidity {
            if !(rh.is_finite() && (0.0..=100.0).contains(&rh)) {
                return Err(KineticsError::InvalidConfiguration(format!(
                    "relative humidity must lie in [0, 100] %, got {}",
                    rh
                )));
            }
        }
        self.step_control().check()
    }

    pub fn step_control(&self) -> StepControl {
        StepControl {
            dt_initial: self.dt_initial,
            fixed_dt: self.fixed_dt,
            metric_min: self.metric_min,
            metric_max: self.metric_max,
            grow_factor: self.grow_factor,
            shrink_factor: self.shrink_factor,
            dt_min: self.dt_min,
            dt_max: self.dt_max,
            metric_threshold: self.metric_threshold,
            pulse_resolution: self.pulse_resolution,
        }
    }

    pub fn conditions(&self) -> PlasmaConditions {
        PlasmaConditions::new(self.tgas, self.te_peak_ev, self.plasma_time)
    }

    /// water vapour density, m^-3: from the relative humidity if given, else the explicit density,
    /// else the built-in default
    pub fn water_density(&self) -> f64 {
        match (self.relative_humidity, self.h2o_density) {
            (Some(rh), _) => water_density_from_rh(rh, self.tgas),
            (None, Some(n)) => n,
            (None, None) => default_density(H2O),
        }
    }
}
