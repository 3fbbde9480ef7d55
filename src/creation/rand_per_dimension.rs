//! DE creation strategy with per-dimension random participants.
//!
//! Classic DE/rand/n draws its difference-vector participants once and
//! reuses the same pairs for every dimension. This strategy instead draws a
//! fresh random arrangement of the participants **for each dimension**, so
//! the pairs contributing to dimension `d` are independent of those for any
//! other dimension.
//!
//! # Algorithm
//!
//! Given `target`, `current` and the population:
//! 1. `participants` = population minus `target` and `current`.
//! 2. For each dimension `d`, shuffle the participants with an RNG forked
//!    for that dimension, take the first `2 * n` (where `n` is the number of
//!    difference vectors) and accumulate `first[d] - second[d]` over the
//!    consecutive pairs.
//! 3. `trial = target + F * difference`, with the scale factor `F` read once
//!    per call.
//! 4. The trial entity is a clone of `current` carrying the trial vector, so
//!    `current`'s bookkeeping survives and `target`'s does not.
//!
//! # Configuration
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `scale` (F) | 0.5 | Multiplier applied to the difference vector |
//! | `number_of_difference_vectors` | 2 | Participant pairs drawn per dimension |
//! | `seed` | random | RNG seed for reproducibility |
//!
//! # Examples
//!
//! ```
//! use trialgen::creation::{CreationStrategy, RandPerDimensionCreationStrategy};
//! use trialgen::{Entity, Individual, Population};
//!
//! let population: Population<Individual> = (0..6)
//!     .map(|i| Individual::new(vec![f64::from(i), -f64::from(i)]))
//!     .collect();
//!
//! let strategy = RandPerDimensionCreationStrategy::builder()
//!     .scale(0.8)
//!     .number_of_difference_vectors(2)
//!     .seed(42)
//!     .build();
//!
//! let target = &population.as_slice()[0];
//! let current = &population.as_slice()[1];
//! let trial = strategy.create(target, current, &population).unwrap();
//!
//! assert_eq!(trial.id(), current.id());
//! assert_eq!(trial.candidate_solution().dimension(), 2);
//! ```

use parking_lot::Mutex;

use super::{CreationConfig, CreationStrategy};
use crate::control::{ConstantControlParameter, ControlParameter};
use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::rng_util;
use crate::selection::{RandomArrangement, Samples, Selection};
use crate::topology::Topology;
use crate::vector::Vector;

/// Differential-evolution creation strategy that re-draws its participant
/// pairs independently for every dimension.
///
/// The RNG sits behind a `Mutex`, so a shared strategy serializes its draws
/// and a seeded strategy used from one thread is reproducible.
///
/// # Examples
///
/// ```
/// use trialgen::creation::RandPerDimensionCreationStrategy;
///
/// // Defaults: scale 0.5, two difference vectors, random seed
/// let strategy = RandPerDimensionCreationStrategy::new();
///
/// // With seed for reproducibility
/// let strategy = RandPerDimensionCreationStrategy::with_seed(42);
/// ```
#[derive(Debug)]
pub struct RandPerDimensionCreationStrategy {
    scale: Box<dyn ControlParameter>,
    number_of_difference_vectors: Box<dyn ControlParameter>,
    rng: Mutex<fastrand::Rng>,
}

impl RandPerDimensionCreationStrategy {
    /// Creates a strategy with default settings and a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a strategy with default settings and a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::builder().seed(seed).build()
    }

    /// Creates a builder for configuring a strategy.
    #[must_use]
    pub fn builder() -> RandPerDimensionCreationStrategyBuilder {
        RandPerDimensionCreationStrategyBuilder::new()
    }

    /// Creates a strategy from plain configuration values.
    #[must_use]
    pub fn from_config(config: &CreationConfig) -> Self {
        let builder = Self::builder()
            .scale(config.scale)
            .number_of_difference_vectors(config.number_of_difference_vectors);
        match config.seed {
            Some(seed) => builder.seed(seed).build(),
            None => builder.build(),
        }
    }

    /// Returns the scale factor parameter.
    #[must_use]
    pub fn scale_parameter(&self) -> &dyn ControlParameter {
        self.scale.as_ref()
    }

    /// Replaces the scale factor parameter.
    pub fn set_scale_parameter(&mut self, scale: impl ControlParameter + 'static) {
        self.scale = Box::new(scale);
    }

    /// Sets the value of the current scale factor parameter.
    pub fn set_scale(&mut self, value: f64) {
        self.scale.set_parameter(value);
    }

    /// Returns the parameter holding the number of difference vectors.
    #[must_use]
    pub fn number_of_difference_vectors(&self) -> &dyn ControlParameter {
        self.number_of_difference_vectors.as_ref()
    }

    /// Replaces the parameter holding the number of difference vectors.
    pub fn set_number_of_difference_vectors(
        &mut self,
        number_of_difference_vectors: impl ControlParameter + 'static,
    ) {
        self.number_of_difference_vectors = Box::new(number_of_difference_vectors);
    }

    /// Number of participants drawn per dimension: two per difference vector.
    ///
    /// The parameter value is truncated toward zero and NaN counts as zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] if the parameter is negative.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn participants_per_dimension(&self) -> Result<usize> {
        let pairs = self.number_of_difference_vectors.parameter();
        if pairs < 0.0 {
            return Err(Error::InvalidOperation(
                "number of difference vectors must not be negative",
            ));
        }
        Ok((pairs as usize).saturating_mul(2))
    }

    /// Builds the resultant of the per-dimension difference vectors.
    ///
    /// `participants` must not contain the same entity twice; duplicates
    /// shrink the pool of distinct pairs a dimension can draw from.
    ///
    /// When an odd number of participants is drawn for a dimension, the last
    /// one has no partner and contributes nothing to that dimension. With
    /// `2 * n` draws this cannot happen, but the pairing walk drops a
    /// trailing element rather than failing.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidOperation`] if `participants` is empty or the number
    ///   of difference vectors is negative.
    /// - [`Error::InsufficientPopulation`] if fewer than
    ///   `2 * number_of_difference_vectors` participants are given.
    /// - [`Error::OutOfRange`] if a participant's candidate solution is
    ///   shorter than the first participant's.
    pub fn determine_distance_vector<E: Entity>(&self, participants: &[&E]) -> Result<Vector> {
        let first = participants.first().ok_or(Error::InvalidOperation(
            "cannot build a difference vector without participants",
        ))?;
        let dimension = first.candidate_solution().dimension();
        let mut difference = Vector::zeros(dimension);

        let required = self.participants_per_dimension()?;
        if participants.len() < required {
            return Err(Error::InsufficientPopulation {
                required,
                available: participants.len(),
            });
        }

        let mut rng = self.rng.lock();
        for d in 0..dimension {
            let drawn = Selection::copy_of(participants.iter().copied())
                .order_by(RandomArrangement::forked_from(&mut rng))
                .select(Samples::first(required))?;

            let mut accumulated = 0.0;
            for pair in drawn.chunks_exact(2) {
                let first = pair[0].candidate_solution().get(d)?;
                let second = pair[1].candidate_solution().get(d)?;
                accumulated += first - second;
            }
            difference.set(d, accumulated)?;
        }

        Ok(difference)
    }
}

impl Default for RandPerDimensionCreationStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RandPerDimensionCreationStrategy {
    fn clone(&self) -> Self {
        Self {
            scale: self.scale.clone(),
            number_of_difference_vectors: self.number_of_difference_vectors.clone(),
            rng: Mutex::new(self.rng.lock().clone()),
        }
    }
}

impl From<CreationConfig> for RandPerDimensionCreationStrategy {
    fn from(config: CreationConfig) -> Self {
        Self::from_config(&config)
    }
}

impl CreationStrategy for RandPerDimensionCreationStrategy {
    fn create<E, P>(&self, target: &E, current: &E, population: &P) -> Result<E>
    where
        E: Entity,
        P: Topology<E> + ?Sized,
    {
        let participants = Selection::copy_of(population.entities())
            .exclude([target, current])
            .select(Samples::all())?;

        let difference = match self.determine_distance_vector(&participants) {
            Ok(difference) => difference,
            Err(err) => {
                trace_debug!(participants = participants.len(), %err, "difference vector failed");
                return Err(err);
            }
        };

        let scaled = difference.multiply_with(|| self.scale.parameter());
        let trial = target.candidate_solution().plus(&scaled)?;

        trace_debug!(
            participants = participants.len(),
            dimension = trial.dimension(),
            "trial created"
        );

        Ok(current.with_candidate_solution(trial))
    }
}

/// Builder for configuring a [`RandPerDimensionCreationStrategy`].
///
/// All options have defaults:
/// - `scale`: constant 0.5
/// - `number_of_difference_vectors`: constant 2
/// - `seed`: random
///
/// # Examples
///
/// ```
/// use trialgen::control::DitheredControlParameter;
/// use trialgen::creation::RandPerDimensionCreationStrategyBuilder;
///
/// let strategy = RandPerDimensionCreationStrategyBuilder::new()
///     .scale_parameter(DitheredControlParameter::new(0.5, 1.0, Some(1)).unwrap())
///     .number_of_difference_vectors(1)
///     .seed(42)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct RandPerDimensionCreationStrategyBuilder {
    scale: Box<dyn ControlParameter>,
    number_of_difference_vectors: Box<dyn ControlParameter>,
    seed: Option<u64>,
}

impl Default for RandPerDimensionCreationStrategyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RandPerDimensionCreationStrategyBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scale: Box::new(ConstantControlParameter::of(0.5)),
            number_of_difference_vectors: Box::new(ConstantControlParameter::of(2.0)),
            seed: None,
        }
    }

    /// Sets a constant scale factor (F).
    ///
    /// Default: 0.5.
    #[must_use]
    pub fn scale(self, scale: f64) -> Self {
        self.scale_parameter(ConstantControlParameter::of(scale))
    }

    /// Sets the scale factor parameter. It is read once per `create` call.
    #[must_use]
    pub fn scale_parameter(mut self, scale: impl ControlParameter + 'static) -> Self {
        self.scale = Box::new(scale);
        self
    }

    /// Sets the number of difference vectors (participant pairs per dimension).
    ///
    /// Default: 2.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn number_of_difference_vectors(mut self, n: usize) -> Self {
        self.number_of_difference_vectors = Box::new(ConstantControlParameter::of(n as f64));
        self
    }

    /// Sets the random seed for reproducibility.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configured strategy.
    #[must_use]
    pub fn build(self) -> RandPerDimensionCreationStrategy {
        RandPerDimensionCreationStrategy {
            scale: self.scale,
            number_of_difference_vectors: self.number_of_difference_vectors,
            rng: Mutex::new(rng_util::rng_from_seed(self.seed)),
        }
    }
}
