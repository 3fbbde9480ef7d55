//! Population containers.
//!
//! A [`Topology`] is any collection of entities with a stable iteration
//! order for the lifetime of a borrow. The selection pipeline and creation
//! strategies only ever borrow it immutably, so a population can only change
//! between generations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A collection of entities that can be iterated in a stable order.
pub trait Topology<E> {
    /// Returns an iterator over the contained entities.
    fn entities<'a>(&'a self) -> impl Iterator<Item = &'a E>
    where
        E: 'a;

    /// Returns the number of contained entities.
    fn len(&self) -> usize;

    /// Returns `true` if the topology contains no entities.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E> Topology<E> for [E] {
    fn entities<'a>(&'a self) -> impl Iterator<Item = &'a E>
    where
        E: 'a,
    {
        <[E]>::iter(self)
    }

    fn len(&self) -> usize {
        <[E]>::len(self)
    }
}

impl<E> Topology<E> for Vec<E> {
    fn entities<'a>(&'a self) -> impl Iterator<Item = &'a E>
    where
        E: 'a,
    {
        self.as_slice().iter()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// An ordered, owned population of entities.
///
/// # Examples
///
/// ```
/// use trialgen::{Individual, Population};
///
/// let mut population = Population::new();
/// population.push(Individual::new(vec![0.0, 1.0]));
/// population.push(Individual::new(vec![2.0, 3.0]));
///
/// assert_eq!(population.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Population<E> {
    entities: Vec<E>,
}

impl<E> Population<E> {
    /// Creates an empty population.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Appends an entity.
    pub fn push(&mut self, entity: E) {
        self.entities.push(entity);
    }

    /// Returns an iterator over the entities in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.entities.iter()
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the population is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns the entity at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&E> {
        self.entities.get(index)
    }

    /// Replaces the entity at `index`, returning the previous one.
    ///
    /// Returns `None` and leaves the population unchanged if `index` is out
    /// of bounds.
    pub fn replace(&mut self, index: usize, entity: E) -> Option<E> {
        self.entities
            .get_mut(index)
            .map(|slot| core::mem::replace(slot, entity))
    }

    /// Returns the entities as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.entities
    }

    /// Consumes the population and returns its entities.
    #[must_use]
    pub fn into_inner(self) -> Vec<E> {
        self.entities
    }
}

impl<E> Default for Population<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> From<Vec<E>> for Population<E> {
    fn from(entities: Vec<E>) -> Self {
        Self { entities }
    }
}

impl<E> FromIterator<E> for Population<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}

impl<E> Topology<E> for Population<E> {
    fn entities<'a>(&'a self) -> impl Iterator<Item = &'a E>
    where
        E: 'a,
    {
        self.entities.iter()
    }

    fn len(&self) -> usize {
        self.entities.len()
    }
}

impl<'a, E> IntoIterator for &'a Population<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
