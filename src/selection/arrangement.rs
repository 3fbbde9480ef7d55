//! Reordering policies applied before sampling.
//!
//! An [`Arrangement`] takes ownership of the selection's snapshot and
//! returns a permutation of it: same length, same elements. Because the
//! snapshot is already a copy, arranging never touches the source
//! population.

use core::cmp::Ordering;

use crate::rng_util;

/// A permutation policy.
pub trait Arrangement<T> {
    /// Returns a permutation of `elements`.
    fn arrange(&mut self, elements: Vec<T>) -> Vec<T>;
}

/// Keeps the snapshot order. This is the default when no arrangement is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalArrangement;

impl<T> Arrangement<T> for NaturalArrangement {
    fn arrange(&mut self, elements: Vec<T>) -> Vec<T> {
        elements
    }
}

/// Reverses the snapshot order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseArrangement;

impl<T> Arrangement<T> for ReverseArrangement {
    fn arrange(&mut self, mut elements: Vec<T>) -> Vec<T> {
        elements.reverse();
        elements
    }
}

/// Uniformly random permutation (Fisher-Yates) driven by an owned RNG.
///
/// Two arrangements built from identically seeded RNGs produce identical
/// permutations of equal-length inputs.
///
/// # Examples
///
/// ```
/// use trialgen::selection::{Arrangement, RandomArrangement};
///
/// let mut a = RandomArrangement::with_seed(7);
/// let mut b = RandomArrangement::with_seed(7);
/// assert_eq!(a.arrange(vec![1, 2, 3, 4]), b.arrange(vec![1, 2, 3, 4]));
/// ```
#[derive(Clone, Debug)]
pub struct RandomArrangement {
    rng: fastrand::Rng,
}

impl RandomArrangement {
    /// Creates an arrangement drawing from `rng`.
    #[must_use]
    pub fn new(rng: fastrand::Rng) -> Self {
        Self { rng }
    }

    /// Creates an arrangement with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(fastrand::Rng::with_seed(seed))
    }

    /// Creates an arrangement seeded from a draw of `rng`.
    ///
    /// `rng` advances by one draw; the arrangement then owns an independent
    /// stream.
    #[must_use]
    pub fn forked_from(rng: &mut fastrand::Rng) -> Self {
        Self::new(rng_util::fork(rng))
    }
}

impl Default for RandomArrangement {
    fn default() -> Self {
        Self::new(rng_util::rng_from_seed(None))
    }
}

impl<T> Arrangement<T> for RandomArrangement {
    fn arrange(&mut self, mut elements: Vec<T>) -> Vec<T> {
        self.rng.shuffle(&mut elements);
        elements
    }
}

/// Stable sort by a comparator.
///
/// # Examples
///
/// ```
/// use trialgen::selection::{Arrangement, SortedArrangement};
///
/// let mut descending = SortedArrangement::new(|a: &i32, b: &i32| b.cmp(a));
/// assert_eq!(descending.arrange(vec![2, 9, 4]), vec![9, 4, 2]);
/// ```
#[derive(Clone, Debug)]
pub struct SortedArrangement<F> {
    compare: F,
}

impl<F> SortedArrangement<F> {
    /// Creates an arrangement ordering elements by `compare`.
    #[must_use]
    pub fn new(compare: F) -> Self {
        Self { compare }
    }
}

impl<T, F> Arrangement<T> for SortedArrangement<F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    fn arrange(&mut self, mut elements: Vec<T>) -> Vec<T> {
        elements.sort_by(&mut self.compare);
        elements
    }
}
