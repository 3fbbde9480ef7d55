use std::thread;

use trialgen::prelude::*;

#[test]
fn shared_strategy_creates_from_many_threads() {
    let mut rng = fastrand::Rng::with_seed(0);
    let population: Population<Individual> = (0..20)
        .map(|_| Individual::new(Vector::random(6, -1.0, 1.0, &mut rng)))
        .collect();
    let strategy = RandPerDimensionCreationStrategy::with_seed(42);
    let slice = population.as_slice();

    let trials: Vec<Individual> = thread::scope(|s| {
        let handles: Vec<_> = (0..slice.len())
            .map(|i| {
                let strategy = &strategy;
                let population = &population;
                s.spawn(move || {
                    let current = &slice[(i + 1) % slice.len()];
                    strategy.create(&slice[i], current, population)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect()
    });

    assert_eq!(trials.len(), 20);
    assert!(trials.iter().all(|t| t.candidate_solution().dimension() == 6));
}

#[test]
fn cloned_strategies_replay_identically() {
    let population: Population<Individual> = (0..10)
        .map(|i| Individual::new(vec![f64::from(i), f64::from(i * i)]))
        .collect();
    let slice = population.as_slice();
    let original = RandPerDimensionCreationStrategy::with_seed(17);
    let copy = original.clone();

    let a = original.create(&slice[0], &slice[1], &population).unwrap();
    let b = copy.create(&slice[0], &slice[1], &population).unwrap();
    assert_eq!(a.candidate_solution(), b.candidate_solution());
}
