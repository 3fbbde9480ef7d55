#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when an operation needs elements that are not there, e.g.
    /// selecting a single element from an empty selection or building a
    /// difference vector without participants.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// Returned when fewer participants remain after exclusion than the
    /// pairing step consumes.
    #[error(
        "insufficient population: {required} participants required but only {available} available"
    )]
    InsufficientPopulation {
        /// The number of participants the pairing step draws per dimension.
        required: usize,
        /// The number of participants left after exclusion.
        available: usize,
    },

    /// Returned when vector arithmetic is applied to operands of unequal dimension.
    #[error("dimension mismatch: expected {expected} dimensions but got {got}")]
    DimensionMismatch {
        /// The dimension of the left-hand operand.
        expected: usize,
        /// The dimension of the right-hand operand.
        got: usize,
    },

    /// Returned when a sample count or index exceeds the available elements.
    #[error("out of range: requested {requested} but only {available} available")]
    OutOfRange {
        /// The requested count or index.
        requested: usize,
        /// The number of available elements.
        available: usize,
    },

    /// Returned when the lower bound is greater than the upper bound.
    #[error("invalid bounds: low ({low}) must be less than or equal to high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
