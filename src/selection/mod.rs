//! Fluent, non-mutating selection over a population.
//!
//! A [`Selection`] is a single-use query built from a snapshot of borrowed
//! elements. Whatever order the builder methods are called in, they take
//! effect in a fixed order when the query runs:
//!
//! 1. [`Selection::copy_of`] takes the snapshot.
//! 2. [`Selection::exclude`] removes elements by reference identity.
//! 3. [`Selection::order_by`] permutes what remains.
//! 4. [`Selection::select`] draws per [`Samples`].
//!
//! The snapshot holds shared references, so the source population cannot
//! change while a selection over it is alive, and no step can mutate it.
//!
//! # Examples
//!
//! ```
//! use trialgen::selection::{RandomArrangement, Samples, Selection};
//!
//! let population = vec![10, 20, 30, 40, 50];
//! let target = &population[1];
//!
//! let picked = Selection::copy_of(&population)
//!     .exclude([target])
//!     .order_by(RandomArrangement::with_seed(42))
//!     .select(Samples::first(3))
//!     .unwrap();
//!
//! assert_eq!(picked.len(), 3);
//! assert!(picked.iter().all(|&&v| v != 20));
//! ```

mod arrangement;
mod samples;

pub use arrangement::{
    Arrangement, NaturalArrangement, RandomArrangement, ReverseArrangement, SortedArrangement,
};
pub use samples::Samples;

use crate::error::{Error, Result};

/// A pending selection over a snapshot of `&'a T`.
///
/// The arrangement type `A` is threaded through the builder, so
/// [`order_by`](Self::order_by) changes the type of the query rather than
/// boxing the policy.
#[derive(Debug)]
#[must_use = "a selection does nothing until `select` or `select_one` is called"]
pub struct Selection<'a, T, A = NaturalArrangement> {
    elements: Vec<&'a T>,
    arrangement: A,
}

impl<'a, T> Selection<'a, T> {
    /// Takes a snapshot of `population`.
    pub fn copy_of<I>(population: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
    {
        Self {
            elements: population.into_iter().collect(),
            arrangement: NaturalArrangement,
        }
    }
}

impl<'a, T, A> Selection<'a, T, A> {
    /// Removes every snapshot element that is one of `elements` (compared by
    /// address). Elements not in the snapshot are ignored.
    pub fn exclude<'b, I>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = &'b T>,
        T: 'b,
    {
        let excluded: Vec<&'b T> = elements.into_iter().collect();
        if !excluded.is_empty() {
            self.elements
                .retain(|e| !excluded.iter().any(|x| core::ptr::eq(*e, *x)));
        }
        self
    }

    /// Sets the arrangement applied after exclusion, replacing any earlier one.
    pub fn order_by<B>(self, arrangement: B) -> Selection<'a, T, B>
    where
        B: Arrangement<&'a T>,
    {
        Selection {
            elements: self.elements,
            arrangement,
        }
    }

    /// Returns the number of elements left after exclusion.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no elements are left after exclusion.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<'a, T, A> Selection<'a, T, A>
where
    A: Arrangement<&'a T>,
{
    /// Runs the query and returns the drawn elements in arranged order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `samples` asks for more elements than
    /// remain after exclusion.
    pub fn select(self, samples: Samples) -> Result<Vec<&'a T>> {
        let Self {
            elements,
            mut arrangement,
        } = self;
        samples.sample(arrangement.arrange(elements))
    }

    /// Runs the query and returns its first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] if nothing remains after exclusion.
    pub fn select_one(self) -> Result<&'a T> {
        let Self {
            elements,
            mut arrangement,
        } = self;
        arrangement
            .arrange(elements)
            .into_iter()
            .next()
            .ok_or(Error::InvalidOperation("cannot select from an empty selection"))
    }
}
