//! Control parameters: scalar boxes read fresh on every use.
//!
//! A creation strategy holds its configuration as boxed
//! [`ControlParameter`]s and reads them at the moment they are needed, so a
//! parameter whose value changes between calls (see
//! [`DitheredControlParameter`]) takes effect on the next `create`.

use core::fmt::Debug;

use parking_lot::Mutex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rng_util;

/// A mutable scalar parameter.
///
/// The trait requires `Send + Sync` so that strategies holding parameters
/// can be shared across threads.
///
/// # Implementing a custom parameter
///
/// ```
/// use trialgen::control::ControlParameter;
///
/// #[derive(Clone, Debug)]
/// struct Halving {
///     value: f64,
/// }
///
/// impl ControlParameter for Halving {
///     fn parameter(&self) -> f64 {
///         self.value / 2.0
///     }
///
///     fn set_parameter(&mut self, value: f64) {
///         self.value = value;
///     }
///
///     fn clone_box(&self) -> Box<dyn ControlParameter> {
///         Box::new(self.clone())
///     }
/// }
/// ```
pub trait ControlParameter: Debug + Send + Sync {
    /// Returns the current value.
    fn parameter(&self) -> f64;

    /// Sets the value.
    fn set_parameter(&mut self, value: f64);

    /// Returns an independent boxed copy of this parameter.
    fn clone_box(&self) -> Box<dyn ControlParameter>;
}

impl Clone for Box<dyn ControlParameter> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A parameter that returns the value it was last set to.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstantControlParameter {
    value: f64,
}

impl ConstantControlParameter {
    /// Creates a parameter holding `value`.
    #[must_use]
    pub fn of(value: f64) -> Self {
        Self { value }
    }
}

impl ControlParameter for ConstantControlParameter {
    fn parameter(&self) -> f64 {
        self.value
    }

    fn set_parameter(&mut self, value: f64) {
        self.value = value;
    }

    fn clone_box(&self) -> Box<dyn ControlParameter> {
        Box::new(*self)
    }
}

/// A parameter that draws a fresh value uniformly from `[low, high)` on
/// every read.
///
/// Used as a dithered scale factor, it gives each trial a different step
/// size. Setting the parameter recentres the range on the new value and
/// keeps its width.
///
/// # Examples
///
/// ```
/// use trialgen::control::{ControlParameter, DitheredControlParameter};
///
/// let scale = DitheredControlParameter::new(0.5, 1.0, Some(42)).unwrap();
/// let v = scale.parameter();
/// assert!((0.5..1.0).contains(&v));
/// ```
#[derive(Debug)]
pub struct DitheredControlParameter {
    low: f64,
    high: f64,
    rng: Mutex<fastrand::Rng>,
}

impl DitheredControlParameter {
    /// Creates a dithered parameter over `[low, high)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if `low >= high` or either bound is
    /// not finite.
    pub fn new(low: f64, high: f64, seed: Option<u64>) -> Result<Self> {
        if !(low.is_finite() && high.is_finite()) || low >= high {
            return Err(Error::InvalidBounds { low, high });
        }
        Ok(Self {
            low,
            high,
            rng: Mutex::new(rng_util::rng_from_seed(seed)),
        })
    }

    /// Returns the `(low, high)` range values are drawn from.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.low, self.high)
    }
}

impl Clone for DitheredControlParameter {
    fn clone(&self) -> Self {
        Self {
            low: self.low,
            high: self.high,
            rng: Mutex::new(self.rng.lock().clone()),
        }
    }
}

impl ControlParameter for DitheredControlParameter {
    fn parameter(&self) -> f64 {
        let mut rng = self.rng.lock();
        rng_util::f64_range(&mut rng, self.low, self.high)
    }

    /// Recentres the range on `value`. Non-finite values are ignored.
    fn set_parameter(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        let half_width = (self.high - self.low) / 2.0;
        self.low = value - half_width;
        self.high = value + half_width;
    }

    fn clone_box(&self) -> Box<dyn ControlParameter> {
        Box::new(self.clone())
    }
}
