use proptest::prelude::*;
use trialgen::prelude::*;

fn sorted<T: Ord>(mut v: Vec<T>) -> Vec<T> {
    v.sort();
    v
}

proptest! {
    #[test]
    fn random_arrangement_is_a_permutation(
        values in prop::collection::vec(any::<i32>(), 0..64),
        seed in any::<u64>(),
    ) {
        let arranged = RandomArrangement::with_seed(seed).arrange(values.clone());
        prop_assert_eq!(arranged.len(), values.len());
        prop_assert_eq!(sorted(arranged), sorted(values));
    }

    #[test]
    fn random_arrangement_is_reproducible(
        values in prop::collection::vec(any::<i32>(), 0..64),
        seed in any::<u64>(),
    ) {
        let a = RandomArrangement::with_seed(seed).arrange(values.clone());
        let b = RandomArrangement::with_seed(seed).arrange(values);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn reverse_twice_is_identity(values in prop::collection::vec(any::<u8>(), 0..64)) {
        let twice = ReverseArrangement.arrange(ReverseArrangement.arrange(values.clone()));
        prop_assert_eq!(twice, values);
    }
}

#[test]
fn random_arrangement_covers_all_orderings_of_three() {
    let mut arrangement = RandomArrangement::with_seed(2024);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..600 {
        seen.insert(arrangement.arrange(vec![1, 2, 3]));
    }
    assert_eq!(seen.len(), 6, "every permutation of three should appear");
}

#[test]
fn selection_order_by_random_does_not_touch_source() {
    let population = vec![3, 1, 4, 1, 5, 9, 2, 6];
    let snapshot = population.clone();
    let shuffled = Selection::copy_of(&population)
        .order_by(RandomArrangement::with_seed(1))
        .select(Samples::all())
        .unwrap();
    assert_eq!(shuffled.len(), population.len());
    assert_eq!(population, snapshot);
}
