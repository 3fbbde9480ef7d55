#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How many elements a selection draws.
///
/// Counts are validated when the selection runs, not when the descriptor is
/// built: asking for more elements than remain is an
/// [`Error::OutOfRange`], never a silent truncation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Samples {
    /// Every remaining element.
    #[default]
    All,
    /// The first `n` elements after exclusion and arrangement.
    First(usize),
    /// The last `n` elements after exclusion and arrangement.
    Last(usize),
}

impl Samples {
    /// Draw every remaining element.
    #[must_use]
    pub fn all() -> Self {
        Self::All
    }

    /// Draw the first `n` elements.
    #[must_use]
    pub fn first(n: usize) -> Self {
        Self::First(n)
    }

    /// Draw the last `n` elements.
    #[must_use]
    pub fn last(n: usize) -> Self {
        Self::Last(n)
    }

    /// Apply this descriptor to an already excluded and arranged sequence.
    pub(crate) fn sample<T>(self, mut elements: Vec<T>) -> Result<Vec<T>> {
        let available = elements.len();
        match self {
            Self::All => Ok(elements),
            Self::First(n) | Self::Last(n) if n > available => Err(Error::OutOfRange {
                requested: n,
                available,
            }),
            Self::First(n) => {
                elements.truncate(n);
                Ok(elements)
            }
            Self::Last(n) => Ok(elements.split_off(available - n)),
        }
    }
}
