//! # Plasma Reactor IVP Module
//!
//! Zero-dimensional (well mixed) plasma chemistry reactor. The species densities obey
//!
//! dn_i/dt = Σ_sources ν_ij R_j - Σ_losses ν_ij R_j,   R_j = k_j(Tgas, Te, t) ∏ n_reactants
//!
//! and are advanced with explicit Euler steps of adaptive size.
//!
//! ## Main Structures
//!
//! - **`PlasmaReactor`**: integrator state (time, timestep, densities, step count) and the stepping loop
//! - **`StepControl`**: adaptive step size policy and its bounds
//! - **`Checkpoint`**: everything needed to resume a run (time, step, timestep, densities)
//! - **`StepRecorder`**: sink for accepted steps (the CSV run store, or a vector in tests)
//! - **`DegeneracyStats`**: floor clamping and runaway growth counters
//!
//! ## One step
//! 1. electron temperature from the pulse profile, rate of every reaction
//! 2. net rate of every evolving species from its balance equation
//! 3. `n += net * dt`, clamped to the species floor
//! 4. metric = max |Δn|/n_old over species above the metric threshold
//! 5. next dt: shrink above `metric_max`, grow below `metric_min`, bounded by `dt_min`/`dt_max`
//!    and, while the pulse is on, by `plasma_time / pulse_resolution`
//!
//! Background species (fixed flag) are never advanced. Without water vapour the hydrogen bearing
//! species are skipped.
use crate::Kinetics::errors::KineticsError;
use crate::Kinetics::mechanism::Mechanism;
use crate::Kinetics::molmass::create_elem_composition_matrix;
use crate::Kinetics::rate_evaluator::RateEvaluator;
use crate::Kinetics::rate_table::RateTable;
use crate::Kinetics::species::SpeciesRegistry;
use crate::ReactorsIVP::plasma_conditions::PlasmaConditions;
use log::{debug, info, warn};
use nalgebra::DVector;

/// species below this density do not take part in the step size metric or the runaway check, m^-3
pub const METRIC_DENSITY_THRESHOLD: f64 = 1.0e5;

/// adaptive step size policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepControl {
    pub dt_initial: f64,
    /// constant timestep; disables the adaptive policy
    pub fixed_dt: Option<f64>,
    pub metric_min: f64,
    pub metric_max: f64,
    pub grow_factor: f64,
    pub shrink_factor: f64,
    pub dt_min: f64,
    pub dt_max: f64,
    /// density (m^-3) at or below which a species is ignored by the metric
    pub metric_threshold: f64,
    /// minimal number of steps per pulse duration while the pulse is on
    pub pulse_resolution: f64,
}

impl Default for StepControl {
    fn default() -> Self {
        Self {
            dt_initial: 5.0e-11,
            fixed_dt: None,
            metric_min: 0.05,
            metric_max: 0.5,
            grow_factor: 2.0,
            shrink_factor: 0.5,
            dt_min: 1.0e-15,
            dt_max: 1.0e-6,
            metric_threshold: METRIC_DENSITY_THRESHOLD,
            pulse_resolution: 20.0,
        }
    }
}

impl StepControl {
    pub fn check(&self) -> Result<(), KineticsError> {
        let positive = [
            ("dt_initial", self.dt_initial),
            ("metric_min", self.metric_min),
            ("metric_max", self.metric_max),
            ("grow_factor", self.grow_factor),
            ("shrink_factor", self.shrink_factor),
            ("dt_min", self.dt_min),
            ("dt_max", self.dt_max),
            ("pulse_resolution", self.pulse_resolution),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(KineticsError::InvalidConfiguration(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        if let Some(dt) = self.fixed_dt {
            if !(dt.is_finite() && dt > 0.0) {
                return Err(KineticsError::InvalidConfiguration(format!(
                    "fixed dt must be positive and finite, got {}",
                    dt
                )));
            }
        }
        if self.metric_min >= self.metric_max {
            return Err(KineticsError::InvalidConfiguration(format!(
                "metric_min {} must be smaller than metric_max {}",
                self.metric_min, self.metric_max
            )));
        }
        if self.dt_min > self.dt_max {
            return Err(KineticsError::InvalidConfiguration(format!(
                "dt_min {} is larger than dt_max {}",
                self.dt_min, self.dt_max
            )));
        }
        if self.grow_factor < 1.0 || self.shrink_factor >= 1.0 {
            return Err(KineticsError::InvalidConfiguration(
                "grow_factor must be >= 1 and shrink_factor < 1".to_string(),
            ));
        }
        if !(self.metric_threshold.is_finite() && self.metric_threshold >= 0.0) {
            return Err(KineticsError::InvalidConfiguration(format!(
                "metric threshold must be non-negative, got {}",
                self.metric_threshold
            )));
        }
        Ok(())
    }
}

/// state of a run at the end of an accepted step
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    pub t: f64,
    pub step: usize,
    /// timestep that the next step will use
    pub dt: f64,
    pub densities: DVector<f64>,
}

/// receives every accepted step
pub trait StepRecorder {
    fn record(&mut self, checkpoint: &Checkpoint) -> Result<(), KineticsError>;
    /// called once with the final state
    fn finish(&mut self, _checkpoint: &Checkpoint) -> Result<(), KineticsError> {
        Ok(())
    }
}

impl StepRecorder for Vec<Checkpoint> {
    fn record(&mut self, checkpoint: &Checkpoint) -> Result<(), KineticsError> {
        self.push(checkpoint.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorState {
    Stepping,
    Done,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DegeneracyStats {
    /// Euler updates that went below the floor and were clamped
    pub floor_clamps: usize,
    /// updates where a species above the metric threshold more than doubled
    pub runaway_growth: usize,
    /// steps whose metric stayed above metric_max (accepted anyway)
    pub large_metric_steps: usize,
}

/// outcome of one accepted step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    pub t: f64,
    pub step: usize,
    pub dt_used: f64,
    pub next_dt: f64,
    pub metric: f64,
    pub te: f64,
}

#[derive(Debug, Clone)]
pub struct PlasmaReactor<'a> {
    pub registry: SpeciesRegistry,
    evaluator: RateEvaluator<'a>,
    pub conditions: PlasmaConditions,
    pub control: StepControl,
    pub total_time: f64,
    pub t: f64,
    pub dt: f64,
    pub step: usize,
    pub last_metric: f64,
    pub state: IntegratorState,
    pub stats: DegeneracyStats,
    densities: DVector<f64>,
    floors: DVector<f64>,
    rates: Vec<f64>,
    /// species advanced by the integrator
    evolving: Vec<bool>,
    runaway_reported: Vec<bool>,
}

impl<'a> PlasmaReactor<'a> {
    /// cold start from the densities currently held by the registry
    pub fn new(
        registry: SpeciesRegistry,
        mechanism: &'a Mechanism,
        table: Option<&'a RateTable>,
        table_cutoff: f64,
        conditions: PlasmaConditions,
        control: StepControl,
        total_time: f64,
    ) -> Result<Self, KineticsError> {
        let evaluator = RateEvaluator::new(mechanism, table, table_cutoff)?;
        Self::with_evaluator(registry, evaluator, conditions, control, total_time)
    }

    pub fn with_evaluator(
        registry: SpeciesRegistry,
        evaluator: RateEvaluator<'a>,
        conditions: PlasmaConditions,
        control: StepControl,
        total_time: f64,
    ) -> Result<Self, KineticsError> {
        control.check()?;
        if !(total_time.is_finite() && total_time > 0.0) {
            return Err(KineticsError::InvalidConfiguration(format!(
                "total time must be positive, got {}",
                total_time
            )));
        }
        if !(conditions.tgas.is_finite() && conditions.tgas > 0.0) {
            return Err(KineticsError::InvalidConfiguration(format!(
                "gas temperature must be positive, got {}",
                conditions.tgas
            )));
        }
        if !(conditions.plasma_time.is_finite() && conditions.plasma_time > 0.0) {
            return Err(KineticsError::InvalidConfiguration(format!(
                "plasma time must be positive, got {}",
                conditions.plasma_time
            )));
        }
        if evaluator.mechanism().n_species() != registry.len() {
            return Err(KineticsError::InvalidMechanism(format!(
                "mechanism is built for {} species, registry has {}",
                evaluator.mechanism().n_species(),
                registry.len()
            )));
        }
        let n = registry.len();
        let n_reactions = evaluator.mechanism().len();
        let densities = registry.densities();
        let floors = registry.floors();
        let mut reactor = Self {
            registry,
            evaluator,
            conditions,
            control,
            total_time,
            t: 0.0,
            dt: 0.0,
            step: 0,
            last_metric: 0.0,
            state: IntegratorState::Stepping,
            stats: DegeneracyStats::default(),
            densities,
            floors,
            rates: vec![0.0; n_reactions],
            evolving: vec![false; n],
            runaway_reported: vec![false; n],
        };
        reactor.dt = reactor.bounded_dt(control.fixed_dt.unwrap_or(control.dt_initial), 0.0);
        reactor.update_evolving();
        reactor.update_state();
        Ok(reactor)
    }

    /// continue from a saved state; the densities are clamped to the floors
    pub fn resume(&mut self, checkpoint: &Checkpoint) -> Result<(), KineticsError> {
        if checkpoint.densities.len() != self.registry.len() {
            return Err(KineticsError::InvalidConfiguration(format!(
                "checkpoint has {} densities, registry has {} species",
                checkpoint.densities.len(),
                self.registry.len()
            )));
        }
        if !(checkpoint.t.is_finite() && checkpoint.t >= 0.0) {
            return Err(KineticsError::InvalidConfiguration(format!(
                "checkpoint time {} is not valid",
                checkpoint.t
            )));
        }
        self.registry.load_densities(&checkpoint.densities);
        self.densities = self.registry.densities();
        self.t = checkpoint.t;
        self.step = checkpoint.step;
        self.dt = match self.control.fixed_dt {
            Some(dt) => dt,
            None if checkpoint.dt.is_finite() && checkpoint.dt > 0.0 => {
                self.bounded_dt(checkpoint.dt, checkpoint.t)
            }
            None => self.bounded_dt(self.control.dt_initial, checkpoint.t),
        };
        self.update_evolving();
        self.update_state();
        info!(
            "resumed at t = {:e} s, step {}, dt = {:e} s",
            self.t, self.step, self.dt
        );
        Ok(())
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            t: self.t,
            step: self.step,
            dt: self.dt,
            densities: self.densities.clone(),
        }
    }

    pub fn densities(&self) -> &DVector<f64> {
        &self.densities
    }

    pub fn density(&self, idx: usize) -> f64 {
        self.densities[idx]
    }

    /// reaction rates of the last step, m^-3 s^-1
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    pub fn evaluator(&self) -> &RateEvaluator<'a> {
        &self.evaluator
    }

    pub fn is_evolving(&self, idx: usize) -> bool {
        self.evolving[idx]
    }

    fn update_state(&mut self) {
        self.state = if self.t >= self.total_time {
            IntegratorState::Done
        } else {
            IntegratorState::Stepping
        };
    }

    fn update_evolving(&mut self) {
        let dry = match self.registry.index_of("H2O") {
            Some(idx) => self.densities[idx] <= self.floors[idx],
            None => false,
        };
        if dry {
            info!("no water vapour: hydrogen bearing species are not advanced");
        }
        for i in 0..self.registry.len() {
            let species = self.registry.get(i);
            self.evolving[i] = !species.fixed && !(dry && species.contains_hydrogen());
        }
    }

    fn bounded_dt(&self, dt: f64, t: f64) -> f64 {
        if let Some(fixed) = self.control.fixed_dt {
            return fixed;
        }
        let mut dt = dt.clamp(self.control.dt_min, self.control.dt_max);
        if self.conditions.pulse_on(t) {
            dt = dt.min(self.conditions.plasma_time / self.control.pulse_resolution);
        }
        dt
    }

    /// next timestep from the metric of the last step
    pub fn next_dt(&self, dt: f64, metric: f64, t: f64) -> f64 {
        if self.control.fixed_dt.is_some() {
            return dt;
        }
        let proposed = if metric > self.control.metric_max {
            dt * self.control.shrink_factor
        } else if metric < self.control.metric_min {
            dt * self.control.grow_factor
        } else {
            dt
        };
        self.bounded_dt(proposed, t)
    }

    /// advance by one step; does nothing once the run is done
    pub fn step(&mut self) -> Option<StepReport> {
        if self.state == IntegratorState::Done {
            return None;
        }
        let dt = self.dt;
        let te = self.conditions.electron_temperature(self.t);
        self.evaluator.compute_all(
            self.conditions.tgas,
            te,
            self.t,
            &self.densities,
            &self.floors,
            &mut self.rates,
        );

        let mechanism = self.evaluator.mechanism();
        let threshold = self.control.metric_threshold.max(0.0);
        let mut updated = self.densities.clone();
        let mut metric: f64 = 0.0;
        for i in 0..updated.len() {
            if !self.evolving[i] {
                continue;
            }
            let balance = mechanism.balance(i);
            if balance.is_empty() {
                continue;
            }
            let net = balance.net_rate(&self.rates);
            if net == 0.0 {
                continue;
            }
            let old = self.densities[i];
            let floor = self.floors[i];
            let mut new = old + net * dt;
            if !(new >= floor) {
                self.stats.floor_clamps += 1;
                debug!(
                    "{} clamped to floor at t = {:e} s (Euler value {:e})",
                    self.registry.get(i).formula,
                    self.t,
                    new
                );
                new = floor;
            }
            if old > threshold.max(floor) {
                if new > 2.0 * old {
                    self.stats.runaway_growth += 1;
                    if !self.runaway_reported[i] {
                        self.runaway_reported[i] = true;
                        warn!(
                            "species [{}] more than doubled in one step at t = {:e} s (dt = {:e} s)",
                            self.registry.get(i).formula,
                            self.t,
                            dt
                        );
                    }
                }
                metric = metric.max((new - old).abs() / old);
            }
            updated[i] = new;
        }
        if metric > self.control.metric_max {
            self.stats.large_metric_steps += 1;
        }

        self.densities = updated;
        self.t += dt;
        self.step += 1;
        self.last_metric = metric;
        self.dt = self.next_dt(dt, metric, self.t);
        self.update_state();
        Some(StepReport {
            t: self.t,
            step: self.step,
            dt_used: dt,
            next_dt: self.dt,
            metric,
            te,
        })
    }

    /// step until the total time is reached, handing every accepted step to `recorder`
    pub fn run(&mut self, recorder: &mut dyn StepRecorder) -> Result<(), KineticsError> {
        info!(
            "run from t = {:e} s to {:e} s, dt = {:e} s, {} reactions, {} species",
            self.t,
            self.total_time,
            self.dt,
            self.evaluator.mechanism().len(),
            self.registry.len()
        );
        let mut pulse_reported = !self.conditions.pulse_on(self.t);
        while let Some(report) = self.step() {
            debug!(
                "step {} t = {:e} s dt = {:e} s metric = {:.4} Te = {:.1} K",
                report.step, report.t, report.dt_used, report.metric, report.te
            );
            if !pulse_reported && !self.conditions.pulse_on(self.t) {
                pulse_reported = true;
                info!("plasma pulse over at t = {:e} s, afterglow", self.t);
            }
            recorder.record(&self.checkpoint())?;
        }
        recorder.finish(&self.checkpoint())?;
        self.sync_registry();
        info!(
            "run finished at t = {:e} s after {} steps; {} floor clamps, {} runaway updates, {} steps above metric_max",
            self.t,
            self.step,
            self.stats.floor_clamps,
            self.stats.runaway_growth,
            self.stats.large_metric_steps
        );
        Ok(())
    }

    /// copy the integrator densities back into the registry
    pub fn sync_registry(&mut self) {
        self.registry.load_densities(&self.densities);
    }

    /// total number of atoms of each element per m^3 (elements sorted by symbol)
    pub fn atom_inventory(&self) -> (Vec<String>, DVector<f64>) {
        let formulas = self.registry.formulas();
        let (matrix, elements) = create_elem_composition_matrix(&formulas);
        let densities = DVector::from_iterator(
            self.densities.len(),
            self.densities
                .iter()
                .zip(self.floors.iter())
                .map(|(n, floor)| if n <= floor { 0.0 } else { *n }),
        );
        (elements, matrix.transpose() * densities)
    }
}
