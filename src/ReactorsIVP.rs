/// # Plasma Reactor IVP
/// Zero-dimensional plasma chemistry reactor advanced by explicit Euler steps with an adaptive
/// timestep. See the module documentation for the step algorithm.
#[allow(non_snake_case)]
pub mod PlasmaReactorIVP;
/// pretty printing of species, reactions and the run summary
#[allow(non_snake_case)]
pub mod PlasmaReactorIVP2;
/// electron temperature pulse, gas temperature and water vapour content
pub mod plasma_conditions;
#[cfg(test)]
mod plasma_reactor_tests;
