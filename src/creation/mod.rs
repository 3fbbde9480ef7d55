//! Creation strategies: synthesize a trial entity from a population.

pub mod rand_per_dimension;

pub use rand_per_dimension::{
    RandPerDimensionCreationStrategy, RandPerDimensionCreationStrategyBuilder,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::Result;
use crate::topology::Topology;

/// Trait for differential-evolution style trial creation.
///
/// A strategy reads the candidate solutions of `target`, `current` and the
/// rest of `population` and returns a new entity. It must not mutate any of
/// its inputs. The trait requires `Send + Sync` so a strategy can be shared
/// by an evolutionary loop that creates trials concurrently.
///
/// # Implementing a custom strategy
///
/// ```
/// use trialgen::creation::CreationStrategy;
/// use trialgen::{Entity, Result, Topology};
///
/// /// Returns `current` moved halfway towards `target`.
/// struct Midpoint;
///
/// impl CreationStrategy for Midpoint {
///     fn create<E, P>(&self, target: &E, current: &E, _population: &P) -> Result<E>
///     where
///         E: Entity,
///         P: Topology<E> + ?Sized,
///     {
///         let delta = target.candidate_solution().minus(current.candidate_solution())?;
///         let trial = current.candidate_solution().plus(&delta.multiply(0.5))?;
///         Ok(current.with_candidate_solution(trial))
///     }
/// }
/// ```
pub trait CreationStrategy: Send + Sync {
    /// Creates a trial entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the population cannot supply what the strategy
    /// needs or the candidate solutions have inconsistent dimensions.
    fn create<E, P>(&self, target: &E, current: &E, population: &P) -> Result<E>
    where
        E: Entity,
        P: Topology<E> + ?Sized;
}

/// Plain-value configuration for [`RandPerDimensionCreationStrategy`].
///
/// With the `serde` feature this can be read from a configuration file;
/// missing fields take their defaults.
///
/// # Examples
///
/// ```
/// use trialgen::creation::{CreationConfig, RandPerDimensionCreationStrategy};
///
/// let config = CreationConfig {
///     scale: 0.7,
///     seed: Some(42),
///     ..CreationConfig::default()
/// };
/// let strategy = RandPerDimensionCreationStrategy::from_config(&config);
/// assert!((strategy.scale_parameter().parameter() - 0.7).abs() < f64::EPSILON);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CreationConfig {
    /// Scale factor applied to the difference vector. Default: 0.5.
    pub scale: f64,
    /// Number of participant pairs drawn per dimension. Default: 2.
    pub number_of_difference_vectors: usize,
    /// RNG seed. Default: random.
    pub seed: Option<u64>,
}

impl Default for CreationConfig {
    fn default() -> Self {
        Self {
            scale: 0.5,
            number_of_difference_vectors: 2,
            seed: None,
        }
    }
}
