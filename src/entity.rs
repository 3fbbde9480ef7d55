//! The candidate-solution capability and a concrete individual.
//!
//! Creation strategies only need to read an entity's [`Vector`], clone the
//! entity, and install a new vector in the clone. Anything else an entity
//! carries (fitness, identifiers, bookkeeping) travels with the clone
//! untouched.

use core::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::vector::Vector;

static NEXT_ENTITY_ID: AtomicU64 = AtomicU64::new(0);

/// A unique identifier for an entity.
///
/// Each [`Individual`] is assigned a unique `EntityId` at creation time.
/// Cloning an individual copies its `EntityId`, so a trial built from a clone
/// of `current` can be traced back to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityId(u64);

impl EntityId {
    /// Creates a new unique `EntityId`.
    #[must_use]
    pub fn new() -> Self {
        Self(NEXT_ENTITY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "entity_{}", self.0)
    }
}

/// An entity that owns a candidate solution.
///
/// `Clone` is the cloning capability: it must produce a deep, independent
/// copy, so that changing the clone's candidate solution never affects the
/// original.
///
/// # Implementing a custom entity
///
/// ```
/// use trialgen::{Entity, Vector};
///
/// #[derive(Clone)]
/// struct Particle {
///     position: Vector,
///     velocity: Vector,
/// }
///
/// impl Entity for Particle {
///     fn candidate_solution(&self) -> &Vector {
///         &self.position
///     }
///
///     fn set_candidate_solution(&mut self, solution: Vector) {
///         self.position = solution;
///     }
/// }
/// ```
pub trait Entity: Clone {
    /// Returns the vector this entity represents in the search space.
    fn candidate_solution(&self) -> &Vector;

    /// Replaces the candidate solution.
    fn set_candidate_solution(&mut self, solution: Vector);

    /// Returns a clone of this entity carrying `solution` instead.
    #[must_use]
    fn with_candidate_solution(&self, solution: Vector) -> Self {
        let mut clone = self.clone();
        clone.set_candidate_solution(solution);
        clone
    }
}

/// A candidate solution plus its fitness bookkeeping.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Individual {
    id: EntityId,
    candidate_solution: Vector,
    fitness: Option<f64>,
}

impl Individual {
    /// Creates an unevaluated individual.
    #[must_use]
    pub fn new(candidate_solution: impl Into<Vector>) -> Self {
        Self {
            id: EntityId::new(),
            candidate_solution: candidate_solution.into(),
            fitness: None,
        }
    }

    /// Sets the fitness.
    #[must_use]
    pub fn with_fitness(mut self, fitness: f64) -> Self {
        self.fitness = Some(fitness);
        self
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the fitness, if the individual has been evaluated.
    #[must_use]
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Records a fitness value.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }
}

impl Entity for Individual {
    fn candidate_solution(&self) -> &Vector {
        &self.candidate_solution
    }

    fn set_candidate_solution(&mut self, solution: Vector) {
        self.candidate_solution = solution;
    }
}
