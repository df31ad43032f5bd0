//! Finite, discrete-time trajectories of numeric samples.
//!
//! A [`Signal`] is an ordered sequence of samples indexed by the integer time steps `0..T-1`.
//! Every sample is a vector of `f64` values and all samples of a signal share the same dimension.
//! Formulas only ever read from a signal, so it can be built once and evaluated by any number of
//! formulas.
//!
//! # Examples
//!
//! Signals of known size can be created from arrays:
//!
//! ```rust
//! use stl_rho::Signal;
//!
//! let signal = Signal::from([[0.0, 1.0], [2.0, 3.0], [4.0, 5.0]]);
//!
//! assert_eq!(signal.len(), 3);
//! assert_eq!(signal.dimension(), Some(2));
//! ```
//!
//! Signals built from rows of unknown length are checked for a consistent dimension:
//!
//! ```rust
//! use stl_rho::{Error, Signal};
//!
//! let ragged = Signal::from_rows(vec![vec![0.0, 1.0], vec![2.0]]);
//! assert_eq!(ragged, Err(Error::DimensionMismatch { expected: 2, actual: 1 }));
//! ```
//!
//! Samples can be accessed either checked or unchecked using [`Signal::sample`] or [`Index`]:
//!
//! ```rust
//! use stl_rho::Signal;
//!
//! let signal = Signal::scalar([0.0, 2.0, 4.0, 5.0]);
//!
//! let _ = signal.sample(2);   // Ok([4.0])
//! let _ = signal.sample(4);   // Err(IndexOutOfRange)
//!
//! let _ = &signal[2];         // [4.0]
//! // let _ = &signal[4];      // Panic
//! ```

use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A finite sequence of equally sized sample vectors.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>"))]
pub struct Signal {
    samples: Vec<Vec<f64>>,
}

impl Signal {
    /// Create an empty signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a signal from rows of samples.
    ///
    /// Fails with [`Error::DimensionMismatch`] if any row has a different length than the first.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = R>,
        R: Into<Vec<f64>>,
    {
        let mut signal = Self::new();

        for row in rows {
            signal.push(row)?;
        }

        Ok(signal)
    }

    /// Create a one-dimensional signal from a sequence of values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stl_rho::Signal;
    ///
    /// let signal = Signal::scalar([0.0, 2.0, 4.0, 5.0]);
    /// assert_eq!(signal[1], [2.0]);
    /// ```
    pub fn scalar<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let samples = values.into_iter().map(|value| vec![value]).collect();
        Self { samples }
    }

    /// Append a sample to the end of the signal.
    pub fn push<R>(&mut self, sample: R) -> Result<(), Error>
    where
        R: Into<Vec<f64>>,
    {
        let sample = sample.into();

        if let Some(expected) = self.dimension() {
            if sample.len() != expected {
                return Err(Error::dimension_mismatch(expected, sample.len()));
            }
        }

        self.samples.push(sample);
        Ok(())
    }

    /// Number of samples in the signal.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the signal has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Dimension shared by every sample, or [`None`] for an empty signal.
    pub fn dimension(&self) -> Option<usize> {
        self.samples.first().map(Vec::len)
    }

    /// Return the sample at time `t` if it exists.
    pub fn at_time(&self, t: usize) -> Option<&[f64]> {
        self.samples.get(t).map(Vec::as_slice)
    }

    /// Return the sample at time `t`, failing with [`Error::IndexOutOfRange`] past the end.
    pub fn sample(&self, t: usize) -> Result<&[f64], Error> {
        self.at_time(t).ok_or_else(|| Error::out_of_range(t, self.len()))
    }

    /// Check that the closed interval `[start, end]` lies within the signal.
    pub fn check_span(&self, start: usize, end: usize) -> Result<(), Error> {
        debug_assert!(start <= end);

        if end >= self.len() {
            Err(Error::out_of_range(end, self.len()))
        } else {
            Ok(())
        }
    }

    /// Iterate over `(time, sample)` pairs in time order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            samples: self.samples.iter().enumerate(),
        }
    }
}

/// Iterator over the timed samples of a [`Signal`].
///
/// This iterator can be constructed by calling [`Signal::iter`] or by iterating over `&Signal`.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    samples: std::iter::Enumerate<std::slice::Iter<'a, Vec<f64>>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a [f64]);

    fn next(&mut self) -> Option<Self::Item> {
        self.samples.next().map(|(t, sample)| (t, sample.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.samples.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.samples.next_back().map(|(t, sample)| (t, sample.as_slice()))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a Signal {
    type Item = (usize, &'a [f64]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for Signal {
    type Output = [f64];

    /// Returns the sample at the given time.
    ///
    /// # Panics
    ///
    /// Panics if the time is past the end of the signal.
    fn index(&self, index: usize) -> &Self::Output {
        &self.samples[index]
    }
}

impl<const D: usize, const N: usize> From<[[f64; D]; N]> for Signal {
    fn from(rows: [[f64; D]; N]) -> Self {
        let samples = rows.into_iter().map(Vec::from).collect();
        Self { samples }
    }
}

impl TryFrom<Vec<Vec<f64>>> for Signal {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Signal> for Vec<Vec<f64>> {
    fn from(signal: Signal) -> Self {
        signal.samples
    }
}
