//! Fixed-dimension real vectors with checked arithmetic.
//!
//! A [`Vector`] is the candidate solution carried by every
//! [`Entity`](crate::entity::Entity). Its dimension is fixed when it is
//! created; binary operations between vectors of unequal dimension fail with
//! [`Error::DimensionMismatch`] instead of truncating, and indexed access
//! past the end fails with [`Error::OutOfRange`].
//!
//! # Examples
//!
//! ```
//! use trialgen::Vector;
//!
//! let target = Vector::from(vec![1.0, 2.0]);
//! let diff = Vector::from(vec![4.0, -2.0]);
//!
//! let trial = target.plus(&diff.multiply(0.5)).unwrap();
//! assert_eq!(trial.as_slice(), &[3.0, 1.0]);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rng_util;

/// An ordered sequence of `f64` values with a fixed dimension.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    /// Creates a vector of `dimension` components, all set to `value`.
    #[must_use]
    pub fn fill(value: f64, dimension: usize) -> Self {
        Self {
            components: vec![value; dimension],
        }
    }

    /// Creates a zero vector of the given dimension.
    #[must_use]
    pub fn zeros(dimension: usize) -> Self {
        Self::fill(0.0, dimension)
    }

    /// Creates a vector with components drawn uniformly from `[low, high)`.
    #[must_use]
    pub fn random(dimension: usize, low: f64, high: f64, rng: &mut fastrand::Rng) -> Self {
        (0..dimension)
            .map(|_| rng_util::f64_range(rng, low, high))
            .collect()
    }

    /// Returns the number of components.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if the vector has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= self.dimension()`.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.components
            .get(index)
            .copied()
            .ok_or(Error::OutOfRange {
                requested: index,
                available: self.components.len(),
            })
    }

    /// Overwrites the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= self.dimension()`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let available = self.components.len();
        let slot = self.components.get_mut(index).ok_or(Error::OutOfRange {
            requested: index,
            available,
        })?;
        *slot = value;
        Ok(())
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    /// Returns an iterator over the components.
    pub fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.components.iter()
    }

    /// Elementwise sum `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn plus(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn minus(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Elementwise (Hadamard) product.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn hadamard(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a * b)
    }

    /// Multiplies every component by `factor`.
    #[must_use]
    pub fn multiply(&self, factor: f64) -> Self {
        self.components.iter().map(|v| v * factor).collect()
    }

    /// Multiplies every component by a factor obtained from `supplier`.
    ///
    /// The supplier is invoked exactly once, when this method is called, so
    /// an adaptive parameter is read at its current value.
    #[must_use]
    pub fn multiply_with<F>(&self, supplier: F) -> Self
    where
        F: FnOnce() -> f64,
    {
        self.multiply(supplier())
    }

    fn zip_with(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Result<Self> {
        if self.dimension() != other.dimension() {
            return Err(Error::DimensionMismatch {
                expected: self.dimension(),
                got: other.dimension(),
            });
        }
        Ok(self
            .components
            .iter()
            .zip(&other.components)
            .map(|(&a, &b)| op(a, b))
            .collect())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Self { components }
    }
}

impl From<&[f64]> for Vector {
    fn from(components: &[f64]) -> Self {
        Self {
            components: components.to_vec(),
        }
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = core::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
