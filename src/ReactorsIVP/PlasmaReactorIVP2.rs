//! # Pretty Printing Module for the Plasma Reactor
//!
//! Formatted listings of the species registry, the reaction list with current rates and a run summary.
//! All output is formatted using prettytable.
use super::PlasmaReactorIVP::PlasmaReactor;
use crate::Kinetics::mechanism::{MAX_PARTICIPANTS, Mechanism};
use crate::Kinetics::species::SpeciesRegistry;
use prettytable::{Cell, Row, Table, row};

/// index, formula, density, floor and fixed flag of every species
pub fn species_table(registry: &SpeciesRegistry) -> Table {
    let mut table = Table::new();
    table.add_row(row!["No.", "Species", "Density (m^-3)", "Floor (m^-3)", "Fixed"]);
    for (i, species) in registry.iter().enumerate() {
        table.add_row(Row::new(vec![
            Cell::new(&i.to_string()),
            Cell::new(&species.formula),
            Cell::new(&format!("{:.6e}", species.density)),
            Cell::new(&format!("{:.1e}", species.floor)),
            Cell::new(if species.fixed { "yes" } else { "" }),
        ]));
    }
    table
}

/// one row per reaction: number, coefficient, reactants ---> products, rate law
pub fn reaction_table(
    mechanism: &Mechanism,
    registry: &SpeciesRegistry,
    coefficients: Option<&[f64]>,
) -> Table {
    let mut table = Table::new();
    table.add_row(row![
        "No.", "Rate coeff.", "r1", "r2", "r3", "r4", "--->", "p1", "p2", "p3", "p4", "Law"
    ]);
    for (j, reaction) in mechanism.reactions().iter().enumerate() {
        let mut cells = vec![Cell::new(&reaction.number.to_string())];
        cells.push(Cell::new(&match coefficients {
            Some(k) => format!("{:.4e}", k[j]),
            None => String::new(),
        }));
        for (side, list) in [&reaction.reactants, &reaction.products].iter().enumerate() {
            for k in 0..MAX_PARTICIPANTS {
                let name = if k < list.len() {
                    registry.get(list.get(k)).formula.as_str()
                } else {
                    ""
                };
                cells.push(Cell::new(name));
            }
            if side == 0 {
                cells.push(Cell::new("--->"));
            }
        }
        cells.push(Cell::new(&reaction.law.describe()));
        table.add_row(Row::new(cells));
    }
    table
}

impl<'a> PlasmaReactor<'a> {
    /// Displays the species registry with the integrator densities.
    pub fn pretty_print_species(&self) {
        println!("____________________SPECIES_________________________");
        let mut registry = self.registry.clone();
        registry.load_densities(self.densities());
        species_table(&registry).printstd();
    }

    /// Displays the reaction list with the coefficients at the current time.
    pub fn pretty_print_reactions(&self) {
        println!("____________________REACTION LIST_________________________");
        let evaluator = self.evaluator();
        let te = self.conditions.electron_temperature(self.t);
        let coefficients: Vec<f64> = (0..evaluator.mechanism().len())
            .map(|j| evaluator.coefficient(j, self.conditions.tgas, te, self.t))
            .collect();
        reaction_table(evaluator.mechanism(), &self.registry, Some(&coefficients)).printstd();
    }

    /// Displays time, step, timestep and degeneracy counters.
    pub fn pretty_print_summary(&self) {
        println!("\n=== RUN SUMMARY ===");
        let mut table = Table::new();
        table.add_row(row!["Parameter", "Value", "Units"]);
        table.add_row(row!["Time", format!("{:.6e}", self.t), "s"]);
        table.add_row(row!["Total time", format!("{:.6e}", self.total_time), "s"]);
        table.add_row(row!["Steps", self.step, "-"]);
        table.add_row(row!["Next dt", format!("{:.3e}", self.dt), "s"]);
        table.add_row(row!["Last metric", format!("{:.4}", self.last_metric), "-"]);
        table.add_row(row!["Gas temperature", format!("{:.2}", self.conditions.tgas), "K"]);
        table.add_row(row![
            "Peak electron temperature",
            format!("{:.1}", self.conditions.te_peak),
            "K"
        ]);
        table.add_row(row!["Floor clamps", self.stats.floor_clamps, "-"]);
        table.add_row(row!["Runaway updates", self.stats.runaway_growth, "-"]);
        table.add_row(row!["Steps above metric_max", self.stats.large_metric_steps, "-"]);
        table.printstd();
    }
}
