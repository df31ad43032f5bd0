//! Errors produced while building or evaluating formulas.

use thiserror::Error;

/// The error type for formula construction and robustness evaluation.
///
/// This enum is marked as `non_exhaustive` so it is best practice to match against the variants
/// you are expecting, and use `_` for all the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A temporal window combined with the evaluation time referenced a sample outside the signal.
    #[error("Index {index} is out of range for signal of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A temporal window whose start is after its end, or which has a negative bound.
    #[error("Invalid window [{start},{end}]")]
    InvalidWindow { start: i64, end: i64 },

    /// A sample does not have the dimension a measurement (or signal) requires.
    #[error("Sample dimension mismatch: expected {expected}, found {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl Error {
    /// Create an error for reading `index` from a signal of length `len`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stl_rho::Error;
    ///
    /// let err = Error::out_of_range(4, 4);
    /// assert_eq!(err.to_string(), "Index 4 is out of range for signal of length 4");
    /// ```
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an error for a sample of dimension `actual` where `expected` components are needed.
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}
