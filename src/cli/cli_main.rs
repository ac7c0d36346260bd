//! Command line front end: builds the configuration from a JSON file and flags, loads the rate
//! table, resumes or cold starts the run and writes every saved step to the run file.
use crate::Kinetics::errors::KineticsError;
use crate::Kinetics::mechanism::Mechanism;
use crate::Kinetics::rate_table::RateTable;
use crate::Kinetics::species::{E, H2O, SpeciesRegistry};
use crate::ReactorsIVP::PlasmaReactorIVP::{PlasmaReactor, StepRecorder};
use crate::Utils::run_store::{RunWriter, read_last_checkpoint};
use crate::settings::RunConfig;
use clap::Parser;
use log::info;
use nalgebra::DVector;
use std::path::PathBuf;

/// Zero-dimensional kinetics of humid air under a pulsed electric discharge
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "airGM", version, long_about = None)]
pub struct Cli {
    /// peak electron temperature, eV
    #[arg(long)]
    pub te: Option<f64>,
    /// water vapour density, m^-3
    #[arg(long, conflicts_with = "rh")]
    pub h2o: Option<f64>,
    /// relative humidity, %
    #[arg(long)]
    pub rh: Option<f64>,
    /// simulated time, s
    #[arg(long)]
    pub total_time: Option<f64>,
    /// plasma pulse duration, s
    #[arg(long)]
    pub plasma_time: Option<f64>,
    /// fixed timestep, s (disables adaptive stepping)
    #[arg(long)]
    pub dt: Option<f64>,
    #[arg(long)]
    pub metric_min: Option<f64>,
    #[arg(long)]
    pub metric_max: Option<f64>,
    /// gas temperature, K
    #[arg(long)]
    pub tgas: Option<f64>,
    /// JSON configuration file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// BOLSIG+ rate coefficient table (CSV)
    #[arg(long)]
    pub rate_table: Option<PathBuf>,
    /// run file; an existing file is resumed from its last row
    #[arg(long)]
    pub output: Option<PathBuf>,
    #[arg(long)]
    pub print_species: bool,
    #[arg(long)]
    pub print_reactions: bool,
}

impl Cli {
    /// configuration file (or defaults) with the flags applied on top
    pub fn run_config(&self) -> Result<RunConfig, KineticsError> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_file(path)?,
            None => RunConfig::default(),
        };
        if let Some(te) = self.te {
            config.te_peak_ev = te;
        }
        if let Some(h2o) = self.h2o {
            config.h2o_density = Some(h2o);
            config.relative_humidity = None;
        }
        if let Some(rh) = self.rh {
            config.relative_humidity = Some(rh);
        }
        if let Some(total_time) = self.total_time {
            config.total_time = total_time;
        }
        if let Some(plasma_time) = self.plasma_time {
            config.plasma_time = plasma_time;
        }
        if let Some(dt) = self.dt {
            config.fixed_dt = Some(dt);
        }
        if let Some(metric_min) = self.metric_min {
            config.metric_min = metric_min;
        }
        if let Some(metric_max) = self.metric_max {
            config.metric_max = metric_max;
        }
        if let Some(tgas) = self.tgas {
            config.tgas = tgas;
        }
        if let Some(path) = &self.rate_table {
            config.rate_table = path.clone();
        }
        if let Some(path) = &self.output {
            config.output = path.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PrintOptions {
    pub species: bool,
    pub reactions: bool,
}

/// state reached by a run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub t: f64,
    pub step: usize,
    pub resumed: bool,
    pub rows_written: usize,
    pub densities: DVector<f64>,
}

/// species registry of a cold start for `config`
pub fn initial_registry(config: &RunConfig) -> SpeciesRegistry {
    let mut registry = SpeciesRegistry::air(config.floor);
    registry.set_density(H2O, config.water_density());
    info!(
        "initial densities: [H2O] = {:e} m^-3, [e] = {:e} m^-3",
        registry.get(H2O).density,
        registry.get(E).density
    );
    registry
}

/// runs the built-in air mechanism with `table`, resuming from `config.output` if it holds a saved state
pub fn run_air_model(
    config: &RunConfig,
    table: &RateTable,
    print: PrintOptions,
) -> Result<RunOutcome, KineticsError> {
    let mechanism = Mechanism::air()?;
    let registry = initial_registry(config);
    let checkpoint = read_last_checkpoint(&config.output, &registry)?;
    let mut reactor = PlasmaReactor::new(
        registry,
        &mechanism,
        Some(table),
        config.table_cutoff,
        config.conditions(),
        config.step_control(),
        config.total_time,
    )?;
    let mut writer = RunWriter::open(&config.output, &reactor.registry, config.save_schedule)?;
    let resumed = match &checkpoint {
        Some(checkpoint) => {
            reactor.resume(checkpoint)?;
            true
        }
        None => {
            writer.record(&reactor.checkpoint())?;
            false
        }
    };
    if print.species {
        reactor.pretty_print_species();
    }
    if print.reactions {
        reactor.pretty_print_reactions();
    }
    reactor.run(&mut writer)?;
    reactor.pretty_print_summary();
    if print.species {
        reactor.pretty_print_species();
    }
    Ok(RunOutcome {
        t: reactor.t,
        step: reactor.step,
        resumed,
        rows_written: writer.rows_written,
        densities: reactor.densities().clone(),
    })
}

pub fn cli_main(cli: &Cli) -> Result<RunOutcome, KineticsError> {
    let config = cli.run_config()?;
    let table = RateTable::load_shared(&config.rate_table)?;
    let print = PrintOptions {
        species: cli.print_species,
        reactions: cli.print_reactions,
    };
    run_air_model(&config, table, print)
}
