use proptest::prelude::*;
use trialgen::prelude::*;

proptest! {
    #[test]
    fn select_all_after_exclude_is_set_difference(
        values in prop::collection::vec(-100i32..100, 0..40),
        mask in prop::collection::vec(any::<bool>(), 40),
    ) {
        let snapshot = values.clone();
        let excluded: Vec<&i32> = values
            .iter()
            .zip(&mask)
            .filter_map(|(v, &skip)| skip.then_some(v))
            .collect();

        let selected = Selection::copy_of(&values)
            .exclude(excluded.iter().copied())
            .select(Samples::all())
            .unwrap();

        let expected: Vec<&i32> = values
            .iter()
            .zip(&mask)
            .filter_map(|(v, &skip)| (!skip).then_some(v))
            .collect();
        prop_assert_eq!(selected.len(), expected.len());
        for (got, want) in selected.iter().zip(&expected) {
            prop_assert!(core::ptr::eq(*got, *want));
        }
        prop_assert_eq!(values, snapshot);
    }

    #[test]
    fn repeated_select_all_is_idempotent(values in prop::collection::vec(any::<i64>(), 0..30)) {
        let first = Selection::copy_of(&values).select(Samples::all()).unwrap();
        let second = Selection::copy_of(&values).select(Samples::all()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn first_n_is_prefix_of_arranged_snapshot(
        values in prop::collection::vec(any::<u16>(), 1..30),
        seed in any::<u64>(),
        n in 0usize..30,
    ) {
        let all = Selection::copy_of(&values)
            .order_by(RandomArrangement::with_seed(seed))
            .select(Samples::all())
            .unwrap();
        let first = Selection::copy_of(&values)
            .order_by(RandomArrangement::with_seed(seed))
            .select(Samples::first(n));

        if n <= values.len() {
            prop_assert_eq!(first.unwrap(), all[..n].to_vec());
        } else {
            let is_out_of_range = matches!(first, Err(Error::OutOfRange { .. }));
            prop_assert!(is_out_of_range);
        }
    }
}

#[test]
fn exclude_accepts_elements_from_another_borrow() {
    let population = vec![String::from("a"), String::from("b"), String::from("c")];
    let target = &population[0];
    let current = &population[2];

    let rest = Selection::copy_of(&population)
        .exclude([target, current])
        .select(Samples::all())
        .unwrap();
    assert_eq!(rest, vec![&population[1]]);
}

#[test]
fn last_n_follows_arrangement() {
    let population = vec![1, 2, 3, 4, 5];
    let tail = Selection::copy_of(&population)
        .order_by(ReverseArrangement)
        .select(Samples::last(2))
        .unwrap();
    assert_eq!(tail, vec![&2, &1]);
}

#[test]
fn works_over_population_topology() {
    let population: Population<Individual> =
        (0..4).map(|i| Individual::new(vec![f64::from(i)])).collect();
    let slice = population.as_slice();

    let chosen = Selection::copy_of(population.entities())
        .exclude([&slice[1]])
        .order_by(SortedArrangement::new(|a: &&Individual, b: &&Individual| {
            b.candidate_solution()
                .as_slice()
                .partial_cmp(a.candidate_solution().as_slice())
                .unwrap_or(core::cmp::Ordering::Equal)
        }))
        .select_one()
        .unwrap();
    assert_eq!(chosen.id(), slice[3].id());
}
