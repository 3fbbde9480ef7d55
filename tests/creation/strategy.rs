use trialgen::prelude::*;

fn population(n: u32, dimension: usize) -> Population<Individual> {
    let mut rng = fastrand::Rng::with_seed(u64::from(n));
    (0..n)
        .map(|i| {
            Individual::new(Vector::random(dimension, -5.0, 5.0, &mut rng))
                .with_fitness(f64::from(i))
        })
        .collect()
}

#[test]
fn trial_has_population_dimension() {
    let population = population(10, 7);
    let strategy = RandPerDimensionCreationStrategy::with_seed(42);
    let slice = population.as_slice();

    let trial = strategy.create(&slice[0], &slice[1], &population).unwrap();
    assert_eq!(trial.candidate_solution().dimension(), 7);
}

#[test]
fn same_seed_same_trial() {
    let population = population(12, 5);
    let slice = population.as_slice();

    let run = |seed: u64| {
        let strategy = RandPerDimensionCreationStrategy::with_seed(seed);
        (0..5)
            .map(|_| {
                strategy
                    .create(&slice[2], &slice[3], &population)
                    .unwrap()
                    .candidate_solution()
                    .clone()
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(run(7), run(7), "same seed should produce same trials");
    assert_ne!(run(7), run(8), "different seeds should produce different trials");
}

#[test]
fn create_does_not_mutate_inputs() {
    let population = population(8, 4);
    let snapshot = population.clone();
    let strategy = RandPerDimensionCreationStrategy::with_seed(1);
    let slice = population.as_slice();

    let _ = strategy.create(&slice[0], &slice[5], &population).unwrap();
    assert_eq!(population, snapshot);
}

#[test]
fn trial_carries_current_bookkeeping_not_target() {
    let population = population(8, 3);
    let slice = population.as_slice();
    let (target, current) = (&slice[4], &slice[6]);
    let strategy = RandPerDimensionCreationStrategy::with_seed(3);

    let trial = strategy.create(target, current, &population).unwrap();
    let expected = current.clone();
    assert_eq!(trial.id(), expected.id());
    assert_eq!(trial.fitness(), expected.fitness());
    assert_ne!(trial.fitness(), target.fitness());
}

#[test]
fn too_small_population_fails_without_trial() {
    let population = population(3, 2);
    let slice = population.as_slice();
    let strategy = RandPerDimensionCreationStrategy::new();

    let result = strategy.create(&slice[0], &slice[1], &population);
    assert!(matches!(
        result,
        Err(Error::InsufficientPopulation {
            required: 4,
            available: 1
        })
    ));
}

#[test]
fn only_target_and_current_is_invalid_operation() {
    let population = population(2, 2);
    let slice = population.as_slice();
    let strategy = RandPerDimensionCreationStrategy::new();

    let result = strategy.create(&slice[0], &slice[1], &population);
    assert!(matches!(result, Err(Error::InvalidOperation(_))));
}

#[test]
fn target_equal_to_current_excludes_once() {
    // target and current may be the same entity; only one element is removed.
    let population = population(5, 2);
    let slice = population.as_slice();
    let strategy = RandPerDimensionCreationStrategy::with_seed(9);

    let trial = strategy.create(&slice[0], &slice[0], &population).unwrap();
    assert_eq!(trial.id(), slice[0].id());
}

#[test]
fn zero_scale_returns_target_vector() {
    let population = population(6, 4);
    let slice = population.as_slice();
    let strategy = RandPerDimensionCreationStrategy::builder()
        .scale(0.0)
        .seed(2)
        .build();

    let trial = strategy.create(&slice[0], &slice[1], &population).unwrap();
    assert_eq!(trial.candidate_solution(), slice[0].candidate_solution());
}

#[test]
fn scale_is_read_on_every_call() {
    // Two participants at 1.0 and 0.0, one pair: difference is +1 or -1.
    let population: Population<Individual> = vec![
        Individual::new(vec![0.0]),
        Individual::new(vec![0.0]),
        Individual::new(vec![1.0]),
        Individual::new(vec![0.0]),
    ]
    .into();
    let slice = population.as_slice();
    let mut strategy = RandPerDimensionCreationStrategy::builder()
        .number_of_difference_vectors(1)
        .scale(1.0)
        .seed(4)
        .build();

    let first = strategy.create(&slice[0], &slice[1], &population).unwrap();
    strategy.set_scale(3.0);
    let second = strategy.create(&slice[0], &slice[1], &population).unwrap();

    assert!((first.candidate_solution().get(0).unwrap().abs() - 1.0).abs() < 1e-12);
    assert!((second.candidate_solution().get(0).unwrap().abs() - 3.0).abs() < 1e-12);
}

#[test]
fn dithered_scale_stays_within_bounds() {
    let population: Population<Individual> = vec![
        Individual::new(vec![0.0]),
        Individual::new(vec![0.0]),
        Individual::new(vec![2.0]),
        Individual::new(vec![0.0]),
    ]
    .into();
    let slice = population.as_slice();
    let strategy = RandPerDimensionCreationStrategy::builder()
        .number_of_difference_vectors(1)
        .scale_parameter(DitheredControlParameter::new(0.25, 0.75, Some(1)).unwrap())
        .seed(8)
        .build();

    for _ in 0..50 {
        let trial = strategy.create(&slice[0], &slice[1], &population).unwrap();
        let magnitude = trial.candidate_solution().get(0).unwrap().abs();
        assert!(
            (0.5..1.5).contains(&magnitude),
            "trial {magnitude} outside the dithered range"
        );
    }
}

#[test]
fn works_with_plain_vec_and_slice_topologies() {
    let entities: Vec<Individual> = population(6, 2).into_inner();
    let strategy = RandPerDimensionCreationStrategy::with_seed(5);

    assert!(strategy.create(&entities[0], &entities[1], &entities).is_ok());
    assert!(
        strategy
            .create(&entities[0], &entities[1], entities.as_slice())
            .is_ok()
    );
}

#[test]
fn custom_entity_type() {
    #[derive(Clone)]
    struct Agent {
        position: Vector,
        generation: u32,
    }

    impl Entity for Agent {
        fn candidate_solution(&self) -> &Vector {
            &self.position
        }

        fn set_candidate_solution(&mut self, solution: Vector) {
            self.position = solution;
        }
    }

    let agents: Vec<Agent> = (0..6)
        .map(|i| Agent {
            position: Vector::fill(f64::from(i), 3),
            generation: i,
        })
        .collect();
    let strategy = RandPerDimensionCreationStrategy::with_seed(6);

    let trial = strategy.create(&agents[0], &agents[4], &agents).unwrap();
    assert_eq!(trial.generation, 4);
    assert_eq!(trial.position.dimension(), 3);
}
