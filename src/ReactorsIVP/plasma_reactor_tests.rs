/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Kinetics::errors::KineticsError;
    use crate::Kinetics::kinetics::RateLaw;
    use crate::Kinetics::mechanism::{Mechanism, Reaction};
    use crate::Kinetics::rate_evaluator::{DEFAULT_TABLE_CUTOFF, RateEvaluator};
    use crate::Kinetics::rate_table::RateTable;
    use crate::Kinetics::species::{
        E, H, H2O, H2O2, M, MINIMUM_DENSITY, N2, NO, O, O2, O3, OH, SpeciesRegistry,
    };
    use crate::ReactorsIVP::PlasmaReactorIVP::{
        Checkpoint, IntegratorState, METRIC_DENSITY_THRESHOLD, PlasmaReactor, StepControl, StepReport,
    };
    use crate::ReactorsIVP::plasma_conditions::PlasmaConditions;
    use crate::Utils::run_store::{RunWriter, SaveSchedule, read_last_checkpoint};
    use approx::assert_relative_eq;
    use tempfile::tempdir;

    // species of the nitrogen test network
    const EL: usize = 0;
    const NN: usize = 1;
    const N_ATOM: usize = 2;
    const NN_ION: usize = 3;

    fn conditions() -> PlasmaConditions {
        PlasmaConditions::new(300.0, 1.0, 1.0e-9)
    }

    fn registry_with(formulas: &[&str], densities: &[f64]) -> SpeciesRegistry {
        let mut registry = SpeciesRegistry::from_formulas(formulas, MINIMUM_DENSITY);
        for (i, n) in densities.iter().enumerate() {
            registry.set_density(i, *n);
        }
        registry
    }

    fn nitrogen_registry() -> SpeciesRegistry {
        registry_with(&["e", "N2", "N", "N2+"], &[1.0e14, 1.0e20, 0.0, 0.0])
    }

    // closed network: every reaction conserves nitrogen atoms and charge
    fn nitrogen_mechanism() -> Mechanism {
        Mechanism::custom(
            vec![
                Reaction::new(1, &[EL, NN], &[EL, N_ATOM, N_ATOM], RateLaw::constant(1.0e-16)),
                Reaction::new(2, &[N_ATOM, N_ATOM, NN], &[NN, NN], RateLaw::constant(1.0e-44)),
                Reaction::new(3, &[EL, NN], &[EL, EL, NN_ION], RateLaw::constant(1.0e-17)),
                Reaction::new(4, &[EL, NN_ION], &[N_ATOM, N_ATOM], RateLaw::constant(1.0e-13)),
            ],
            4,
        )
        .unwrap()
    }

    fn fixed(dt: f64) -> StepControl {
        StepControl {
            fixed_dt: Some(dt),
            ..StepControl::default()
        }
    }

    fn nitrogen_atoms(reactor: &PlasmaReactor) -> f64 {
        let (elements, inventory) = reactor.atom_inventory();
        let idx = elements.iter().position(|e| e == "N").unwrap();
        inventory[idx]
    }

    #[test]
    fn test_closed_network_conserves_nitrogen() {
        let mechanism = nitrogen_mechanism();
        let mut reactor = PlasmaReactor::new(
            nitrogen_registry(),
            &mechanism,
            None,
            DEFAULT_TABLE_CUTOFF,
            conditions(),
            StepControl::default(),
            1.0e-7,
        )
        .unwrap();
        let before = nitrogen_atoms(&reactor);
        assert_relative_eq!(before, 2.0e20, max_relative = 1e-12);
        let mut steps: Vec<Checkpoint> = Vec::new();
        reactor.run(&mut steps).unwrap();
        assert_eq!(steps.len(), reactor.step);
        assert!(reactor.density(N_ATOM) > 1.0e10);
        assert!(reactor.density(NN_ION) > MINIMUM_DENSITY);
        assert_relative_eq!(nitrogen_atoms(&reactor), before, max_relative = 1e-10);
    }

    #[test]
    fn test_densities_never_fall_below_floor() {
        // A + B -> C fast enough for the Euler update to overshoot below zero
        let mechanism = Mechanism::custom(
            vec![Reaction::new(1, &[0, 1], &[2], RateLaw::constant(1.0e-6))],
            3,
        )
        .unwrap();
        let registry = registry_with(&["A", "B", "C"], &[1.0e12, 1.0e12, 0.0]);
        let mut reactor = PlasmaReactor::new(
            registry,
            &mechanism,
            None,
            DEFAULT_TABLE_CUTOFF,
            conditions(),
            fixed(1.0e-5),
            5.0e-5,
        )
        .unwrap();
        while reactor.step().is_some() {
            for (n, floor) in reactor.densities().iter().zip(reactor.registry.floors().iter()) {
                assert!(n >= floor);
            }
        }
        assert!(reactor.stats.floor_clamps > 0);
        assert_eq!(reactor.density(0), MINIMUM_DENSITY);
        assert_eq!(reactor.density(1), MINIMUM_DENSITY);
    }

    #[test]
    fn test_adaptive_step_response() {
        // A -> B, first order; one step removes more A than there is
        let fast = Mechanism::custom(
            vec![Reaction::new(1, &[0], &[1], RateLaw::constant(2.0e9))],
            2,
        )
        .unwrap();
        let registry = registry_with(&["A", "B"], &[1.0e12, 1.0e12]);
        let mut reactor = PlasmaReactor::new(
            registry.clone(),
            &fast,
            None,
            DEFAULT_TABLE_CUTOFF,
            conditions(),
            StepControl::default(),
            1.0,
        )
        .unwrap();
        // after the pulse
        reactor
            .resume(&Checkpoint {
                t: 1.0e-6,
                step: 0,
                dt: 1.0e-9,
                densities: registry.densities(),
            })
            .unwrap();
        let report = reactor.step().unwrap();
        assert_eq!(report.dt_used, 1.0e-9);
        assert!(report.metric > 0.5);
        assert_eq!(report.next_dt, 0.5e-9);
        assert_eq!(reactor.stats.large_metric_steps, 1);
        assert_eq!(reactor.stats.runaway_growth, 1);

        let slow = Mechanism::custom(
            vec![Reaction::new(1, &[0], &[1], RateLaw::constant(1.0))],
            2,
        )
        .unwrap();
        let mut reactor = PlasmaReactor::new(
            registry.clone(),
            &slow,
            None,
            DEFAULT_TABLE_CUTOFF,
            conditions(),
            StepControl::default(),
            1.0,
        )
        .unwrap();
        reactor
            .resume(&Checkpoint {
                t: 1.0e-6,
                step: 0,
                dt: 1.0e-9,
                densities: registry.densities(),
            })
            .unwrap();
        let report = reactor.step().unwrap();
        assert!(report.metric < 0.05);
        assert_eq!(report.next_dt, 2.0e-9);

        // in between the bounds nothing changes
        assert_eq!(reactor.next_dt(1.0e-9, 0.1, 1.0e-6), 1.0e-9);
        // absolute bounds
        assert_eq!(reactor.next_dt(0.8e-6, 0.0, 1.0e-6), 1.0e-6);
        assert_eq!(reactor.next_dt(1.0e-15, 1.0, 1.0e-6), 1.0e-15);
        // the pulse has to be resolved
        assert_relative_eq!(reactor.next_dt(1.0e-9, 0.0, 0.0), 5.0e-11, max_relative = 1e-12);
    }

    // one step after the pulse of B -> B + X with X starting at `x0`
    fn step_with_growing_species(x0: f64) -> (StepReport, f64) {
        let mechanism = Mechanism::custom(
            vec![Reaction::new(1, &[1], &[1, 0], RateLaw::constant(1.0e3))],
            2,
        )
        .unwrap();
        let registry = registry_with(&["X", "B"], &[x0, 1.0e12]);
        let mut reactor = PlasmaReactor::new(
            registry.clone(),
            &mechanism,
            None,
            DEFAULT_TABLE_CUTOFF,
            conditions(),
            StepControl::default(),
            1.0,
        )
        .unwrap();
        reactor
            .resume(&Checkpoint {
                t: 1.0e-6,
                step: 0,
                dt: 1.0e-9,
                densities: registry.densities(),
            })
            .unwrap();
        let report = reactor.step().unwrap();
        (report, reactor.density(0))
    }

    #[test]
    fn test_species_from_floor_do_not_drive_the_step() {
        // X jumps from the floor to 1e6 m^-3 in one step
        let (report, x) = step_with_growing_species(0.0);
        assert_relative_eq!(x, MINIMUM_DENSITY + 1.0e6, max_relative = 1e-12);
        assert_eq!(report.metric, 0.0);
        assert_eq!(report.dt_used, 1.0e-9);
        assert_eq!(report.next_dt, 2.0e-9);
    }

    #[test]
    fn test_species_below_metric_threshold_do_not_drive_the_step() {
        let below = 0.9 * METRIC_DENSITY_THRESHOLD;
        let (report, x) = step_with_growing_species(below);
        // more than ten-fold growth in one step
        assert!(x > 10.0 * below);
        assert_eq!(report.metric, 0.0);
        assert_eq!(report.next_dt, 2.0e-9);

        // the same growth above the threshold shrinks the step
        let above = 2.0 * METRIC_DENSITY_THRESHOLD;
        let (report, _) = step_with_growing_species(above);
        assert_relative_eq!(report.metric, 1.0e6 / above, max_relative = 1e-12);
        assert_eq!(report.next_dt, 0.5e-9);
    }

    #[test]
    fn test_fixed_dt_is_constant() {
        let mechanism = nitrogen_mechanism();
        let mut reactor = PlasmaReactor::new(
            nitrogen_registry(),
            &mechanism,
            None,
            DEFAULT_TABLE_CUTOFF,
            conditions(),
            fixed(3.0e-12),
            1.0e-10,
        )
        .unwrap();
        assert_eq!(reactor.next_dt(3.0e-12, 10.0, 0.0), 3.0e-12);
        while let Some(report) = reactor.step() {
            assert_eq!(report.dt_used, 3.0e-12);
            assert_eq!(report.next_dt, 3.0e-12);
        }
    }

    #[test]
    fn test_resume_reproduces_uninterrupted_run() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");
        let owned = nitrogen_mechanism();
        let mechanism = &owned;
        // power of two keeps the accumulated time exact
        let dt = f64::powi(2.0, -36);
        let make = move |total: f64| {
            PlasmaReactor::new(
                nitrogen_registry(),
                mechanism,
                None,
                DEFAULT_TABLE_CUTOFF,
                conditions(),
                fixed(dt),
                total,
            )
            .unwrap()
        };

        let mut straight = make(55.0 * dt);
        straight.run(&mut Vec::new()).unwrap();
        assert_eq!(straight.step, 55);

        let mut first = make(30.0 * dt);
        let mut writer = RunWriter::open(&path, &first.registry, SaveSchedule::EveryStep).unwrap();
        first.run(&mut writer).unwrap();
        drop(writer);
        let checkpoint = read_last_checkpoint(&path, &first.registry).unwrap().unwrap();
        assert_eq!(checkpoint.step, 30);

        let mut resumed = make(55.0 * dt);
        resumed.resume(&checkpoint).unwrap();
        resumed.run(&mut Vec::new()).unwrap();
        assert_eq!(resumed.step, 55);
        assert_eq!(resumed.t, straight.t);
        for (a, b) in resumed.densities().iter().zip(straight.densities().iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_adaptive_resume_keeps_timestep() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");
        let owned = nitrogen_mechanism();
        let mechanism = &owned;
        let make = move |total: f64| {
            PlasmaReactor::new(
                nitrogen_registry(),
                mechanism,
                None,
                DEFAULT_TABLE_CUTOFF,
                conditions(),
                StepControl::default(),
                total,
            )
            .unwrap()
        };
        let mut straight = make(2.0e-8);
        straight.run(&mut Vec::new()).unwrap();

        let mut first = make(1.2e-8);
        let mut writer = RunWriter::open(&path, &first.registry, SaveSchedule::EveryStep).unwrap();
        first.run(&mut writer).unwrap();
        drop(writer);
        let checkpoint = read_last_checkpoint(&path, &first.registry).unwrap().unwrap();
        assert_eq!(checkpoint.dt, first.dt);

        let mut resumed = make(2.0e-8);
        resumed.resume(&checkpoint).unwrap();
        assert_eq!(resumed.dt, first.dt);
        resumed.run(&mut Vec::new()).unwrap();
        assert_eq!(resumed.step, straight.step);
        assert_eq!(resumed.t, straight.t);
        assert_eq!(resumed.densities(), straight.densities());
    }

    #[test]
    fn test_table_reactions_stop_after_cutoff() {
        let mechanism = Mechanism::custom(
            vec![Reaction::new(640, &[EL, NN], &[EL, N_ATOM, N_ATOM], RateLaw::table(640))],
            4,
        )
        .unwrap();
        let table = RateTable::from_columns(
            vec![0.1, 10.0],
            vec!["R640".to_string()],
            vec![vec![1.0e-16, 1.0e-16]],
        )
        .unwrap();
        let cutoff = 1.0e-9;
        let mut reactor = PlasmaReactor::new(
            nitrogen_registry(),
            &mechanism,
            Some(&table),
            cutoff,
            conditions(),
            fixed(f64::powi(2.0, -33)),
            3.0e-9,
        )
        .unwrap();
        let mut after_cutoff = 0;
        loop {
            let t_before = reactor.t;
            if reactor.step().is_none() {
                break;
            }
            if t_before > cutoff {
                after_cutoff += 1;
                assert_eq!(reactor.rates()[0], 0.0);
            } else {
                assert!(reactor.rates()[0] > 0.0);
            }
        }
        assert!(after_cutoff > 0);
    }

    #[test]
    fn test_negligible_rates_leave_air_unchanged() {
        // electrons on the floor: no reaction of the built-in set has a non-zero rate
        let mechanism = Mechanism::air().unwrap();
        let mut registry = SpeciesRegistry::air(MINIMUM_DENSITY);
        registry.set_density(E, 0.0);
        let initial = registry.densities();
        let evaluator = RateEvaluator::without_table(&mechanism, DEFAULT_TABLE_CUTOFF);
        let mut reactor = PlasmaReactor::with_evaluator(
            registry,
            evaluator,
            conditions(),
            StepControl::default(),
            1.0e-5,
        )
        .unwrap();
        reactor.run(&mut Vec::new()).unwrap();
        assert_eq!(reactor.state, IntegratorState::Done);
        assert!(reactor.t >= 1.0e-5);
        assert_eq!(reactor.densities(), &initial);
        assert_eq!(reactor.registry.densities(), initial);
        assert_eq!(reactor.stats.floor_clamps, 0);
        assert!(reactor.rates().iter().all(|r| *r == 0.0));
    }

    #[test]
    fn test_cold_electrons_leave_air_unchanged() {
        // electron impact channels closed below 0.1 eV
        let table = RateTable::from_columns(
            vec![0.1, 1.0, 10.0],
            vec!["R641".to_string(), "R651".to_string(), "R653".to_string(), "R663".to_string()],
            vec![
                vec![0.0, 1.0e-17, 1.0e-15],
                vec![0.0, 1.0e-16, 1.0e-15],
                vec![0.0, 1.0e-17, 1.0e-15],
                vec![0.0, 1.0e-17, 1.0e-15],
            ],
        )
        .unwrap();
        let mechanism = Mechanism::air().unwrap();
        let registry = SpeciesRegistry::air(MINIMUM_DENSITY);
        let initial = registry.densities();
        assert!(initial[E] > MINIMUM_DENSITY);
        let mut reactor = PlasmaReactor::new(
            registry,
            &mechanism,
            Some(&table),
            DEFAULT_TABLE_CUTOFF,
            PlasmaConditions::new(298.0, 0.0, 1.0e-9),
            StepControl::default(),
            1.0e-5,
        )
        .unwrap();
        let mut steps: Vec<Checkpoint> = Vec::new();
        reactor.run(&mut steps).unwrap();
        assert_eq!(reactor.state, IntegratorState::Done);
        assert!(reactor.t >= 1.0e-5);
        for step in steps.iter() {
            assert!(step.densities.iter().all(|n| n.is_finite()));
        }
        // background gases are untouched
        for idx in [M, N2, O2, H2O] {
            assert_eq!(reactor.density(idx), initial[idx]);
        }
        // trace species stay at trace level next to the gas density
        let tolerance = 1.0e-6 * initial[M];
        for (i, (n, n0)) in reactor.densities().iter().zip(initial.iter()).enumerate() {
            assert!(*n >= MINIMUM_DENSITY);
            assert!(
                (n - n0).abs() <= tolerance,
                "{} changed from {:e} to {:e}",
                reactor.registry.get(i).formula,
                n0,
                n
            );
        }
    }

    #[test]
    fn test_dry_air_skips_hydrogen_species() {
        let mechanism = Mechanism::air().unwrap();
        let mut registry = SpeciesRegistry::air(MINIMUM_DENSITY);
        registry.set_density(H2O, 0.0);
        let evaluator = RateEvaluator::without_table(&mechanism, DEFAULT_TABLE_CUTOFF);
        let reactor = PlasmaReactor::with_evaluator(
            registry,
            evaluator,
            conditions(),
            StepControl::default(),
            1.0e-6,
        )
        .unwrap();
        for idx in [H, OH, H2O2] {
            assert!(!reactor.is_evolving(idx));
        }
        for idx in [O, O3, NO, E] {
            assert!(reactor.is_evolving(idx));
        }
        // background gases are never advanced
        assert!(!reactor.is_evolving(N2));
        assert!(!reactor.is_evolving(H2O));

        let evaluator = RateEvaluator::without_table(&mechanism, DEFAULT_TABLE_CUTOFF);
        let humid = PlasmaReactor::with_evaluator(
            SpeciesRegistry::air(MINIMUM_DENSITY),
            evaluator,
            conditions(),
            StepControl::default(),
            1.0e-6,
        )
        .unwrap();
        assert!(humid.is_evolving(OH));
    }

    #[test]
    fn test_fixed_species_and_done_state() {
        let mechanism = nitrogen_mechanism();
        let mut registry = nitrogen_registry();
        registry.set_fixed(NN, true);
        let mut reactor = PlasmaReactor::new(
            registry,
            &mechanism,
            None,
            DEFAULT_TABLE_CUTOFF,
            conditions(),
            StepControl::default(),
            1.0e-8,
        )
        .unwrap();
        reactor.run(&mut Vec::new()).unwrap();
        assert_eq!(reactor.density(NN), 1.0e20);
        assert!(reactor.density(N_ATOM) > MINIMUM_DENSITY);
        assert_eq!(reactor.state, IntegratorState::Done);
        let step = reactor.step;
        assert!(reactor.step().is_none());
        assert_eq!(reactor.step, step);
    }

    #[test]
    fn test_invalid_reactor_setup() {
        let mechanism = nitrogen_mechanism();
        let err = PlasmaReactor::new(
            SpeciesRegistry::air(MINIMUM_DENSITY),
            &mechanism,
            None,
            DEFAULT_TABLE_CUTOFF,
            conditions(),
            StepControl::default(),
            1.0e-6,
        )
        .unwrap_err();
        assert!(matches!(err, KineticsError::InvalidMechanism(_)));

        let err = PlasmaReactor::new(
            nitrogen_registry(),
            &mechanism,
            None,
            DEFAULT_TABLE_CUTOFF,
            conditions(),
            StepControl::default(),
            0.0,
        )
        .unwrap_err();
        assert!(matches!(err, KineticsError::InvalidConfiguration(_)));

        let air = Mechanism::air().unwrap();
        let err = PlasmaReactor::new(
            SpeciesRegistry::air(MINIMUM_DENSITY),
            &air,
            None,
            DEFAULT_TABLE_CUTOFF,
            conditions(),
            StepControl::default(),
            1.0e-6,
        )
        .unwrap_err();
        assert!(matches!(err, KineticsError::MissingRateTable(_)));
    }
}
