#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Population selection and differential-evolution trial generation.
//!
//! This crate is a building block for population-based optimizers. It
//! provides a non-mutating selection pipeline over a population of
//! candidate solutions, and a creation strategy that uses it to synthesize
//! trial vectors whose difference-vector participants are re-drawn for every
//! dimension.
//!
//! # Getting Started
//!
//! ```
//! use trialgen::prelude::*;
//!
//! let population: Population<Individual> = (0..8)
//!     .map(|i| Individual::new(vec![f64::from(i); 3]))
//!     .collect();
//!
//! let strategy = RandPerDimensionCreationStrategy::with_seed(42);
//! let target = &population.as_slice()[0];
//! let current = &population.as_slice()[1];
//!
//! let trial = strategy.create(target, current, &population).unwrap();
//! assert_eq!(trial.candidate_solution().dimension(), 3);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Vector`] | Fixed-dimension real vector with checked arithmetic. |
//! | [`Entity`] | Anything that owns a candidate solution and can be cloned. |
//! | [`Topology`] / [`Population`] | The collection of entities under consideration. |
//! | [`Selection`](selection::Selection) | Copy, exclude, arrange and sample a population. |
//! | [`ControlParameter`](control::ControlParameter) | A scalar setting read fresh on every use. |
//! | [`RandPerDimensionCreationStrategy`](creation::RandPerDimensionCreationStrategy) | DE trial creation with per-dimension participants. |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on vectors, individuals, populations, samples and [`CreationConfig`](creation::CreationConfig) | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) when trials are created | off |

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod control;
pub mod creation;
mod entity;
mod error;
mod rng_util;
pub mod selection;
mod topology;
mod vector;

pub use entity::{Entity, EntityId, Individual};
pub use error::{Error, Result};
pub use topology::{Population, Topology};
pub use vector::Vector;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use trialgen::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::{
        ConstantControlParameter, ControlParameter, DitheredControlParameter,
    };
    pub use crate::creation::{
        CreationConfig, CreationStrategy, RandPerDimensionCreationStrategy,
        RandPerDimensionCreationStrategyBuilder,
    };
    pub use crate::entity::{Entity, EntityId, Individual};
    pub use crate::error::{Error, Result};
    pub use crate::selection::{
        Arrangement, NaturalArrangement, RandomArrangement, ReverseArrangement, Samples,
        Selection, SortedArrangement,
    };
    pub use crate::topology::{Population, Topology};
    pub use crate::vector::Vector;
}
