/// error type of the kinetics engine, the run store and the configuration
pub mod errors;
/// Parsing of species formulas into element counts and charge, and the element
/// composition matrix of a list of species.
///
/// # Examples
/// ```
/// use airGM::Kinetics::molmass::parse_species;
/// let c = parse_species("H3O+");
/// assert_eq!(c.count("H"), 3);
/// assert_eq!(c.charge, 1);
/// let c = parse_species("O2(a_1_Delta_g)");
/// assert_eq!(c.count("O"), 2);
/// ```
pub mod molmass;
/// The ordered list of tracked species of the humid air model (53 species plus the third body M),
/// their densities and density floors.
pub mod species;
/// Rate laws: constant, gas temperature Arrhenius, electron temperature Arrhenius, two-temperature
/// forms and the BOLSIG+ table driven channels.
///
/// # Examples
/// ```
/// use airGM::Kinetics::kinetics::{AnalyticLaw, GasArrheniusStruct};
/// let law = AnalyticLaw::GasArrhenius(GasArrheniusStruct::new(1.0e-17, -0.5, 0.0));
/// let k = law.K_const(300.0, 300.0);
/// assert!((k - 1.0e-17).abs() < 1e-30);
/// ```
pub mod kinetics;
/// Reaction network: reactions with up to 4 reactants and 4 products, per-species balance
/// equations with net stoichiometric multipliers.
pub mod mechanism;
/// built-in reaction set of humid air
pub mod air_mechanism;
/// BOLSIG+ rate coefficient table: loading, column mapping by reaction number, clamped linear
/// interpolation in electron temperature, the process-wide shared instance.
pub mod rate_table;
/// rate coefficient and rate of every reaction at given temperatures, time and densities
pub mod rate_evaluator;
