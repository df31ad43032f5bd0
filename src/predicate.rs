//! Atomic requirements expressed as the inequality `μ(x) ≥ c`.
//!
//! In this library a [`Predicate`] is used to represent some constraint on a single sample of a
//! signal. As an example, consider a requirement on a mobile robot such as "the robot should stay
//! to the right of the wall at `x = 3`". We would use a `Predicate` to represent the `x ≥ 3` part
//! of the requirement.
//!
//! The measurement `μ` maps a sample vector to a scalar, while `c` is a constant threshold. The
//! [robustness] of the inequality at time `t` is `μ(s[t]) - c`, which is positive when the
//! inequality holds and negative when it is violated.
//!
//! [robustness]: https://link.springer.com/chapter/10.1007/11940197_12
//!
//! # Examples
//!
//! Any closure over a sample can be used as a measurement:
//!
//! ```rust
//! use stl_rho::{Predicate, Signal};
//!
//! let p = Predicate::new(|sample: &[f64]| sample[0], 3.0);
//! let signal = Signal::scalar([0.0, 2.0, 4.0, 5.0]);
//!
//! assert_eq!(p.robustness(&signal, 2), Ok(1.0));
//! assert_eq!(p.robustness(&signal, 0), Ok(-3.0));
//! ```
//!
//! The built-in measurements check the dimension of every sample they read:
//!
//! ```rust
//! use stl_rho::{Error, Predicate};
//!
//! let above = Predicate::component(1, 2.0);             // x[1] >= 2
//! let below = Predicate::upper_bound(0, 5.0);           // x[0] <= 5
//! let plane = Predicate::linear([1.0, -1.0], 0.0);      // x[0] - x[1] >= 0
//!
//! assert_eq!(above.evaluate_sample(&[0.0, 3.5]), Ok(1.5));
//! assert_eq!(below.evaluate_sample(&[4.0, 0.0]), Ok(1.0));
//! assert_eq!(plane.evaluate_sample(&[1.0]), Err(Error::DimensionMismatch { expected: 2, actual: 1 }));
//! ```

use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use crate::error::Error;
use crate::signal::Signal;

type Measurement = dyn Fn(&[f64]) -> Result<f64, Error> + Send + Sync;

/// System requirement expressed as the inequality `μ(x) ≥ c`.
///
/// See the [`predicate`](crate::predicate) module for more information on the semantics of this
/// data type.
#[derive(Clone)]
pub struct Predicate {
    name: Option<String>,
    measurement: Arc<Measurement>,
    threshold: f64,
}

impl Predicate {
    /// Create a predicate from an infallible measurement function.
    ///
    /// The measurement is free to index into the sample, but doing so past the end of a sample
    /// will panic. Use [`Predicate::try_new`] to report a [`Error::DimensionMismatch`] instead.
    pub fn new<F>(measurement: F, threshold: f64) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        Self::try_new(move |sample| Ok(measurement(sample)), threshold)
    }

    /// Create a predicate from a fallible measurement function.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stl_rho::{Error, Predicate};
    ///
    /// let speed = Predicate::try_new(
    ///     |sample: &[f64]| match sample {
    ///         [vx, vy] => Ok(f64::hypot(*vx, *vy)),
    ///         _ => Err(Error::DimensionMismatch { expected: 2, actual: sample.len() }),
    ///     },
    ///     1.0,
    /// );
    ///
    /// assert_eq!(speed.evaluate_sample(&[3.0, 4.0]), Ok(4.0));
    /// ```
    pub fn try_new<F>(measurement: F, threshold: f64) -> Self
    where
        F: Fn(&[f64]) -> Result<f64, Error> + Send + Sync + 'static,
    {
        Self {
            name: None,
            measurement: Arc::new(measurement),
            threshold,
        }
    }

    /// Predicate requiring the component `index` of each sample to be at least `threshold`.
    pub fn component(index: usize, threshold: f64) -> Self {
        let predicate = Self::try_new(move |sample| component_of(sample, index), threshold);
        predicate.named(format!("x[{}]", index))
    }

    /// Predicate requiring the component `index` of each sample to be at most `bound`.
    ///
    /// This is expressed as `-x[index] ≥ -bound`, so the robustness is `bound - x[index]`.
    pub fn upper_bound(index: usize, bound: f64) -> Self {
        let predicate = Self::try_new(move |sample| component_of(sample, index).map(|value| -value), -bound);
        predicate.named(format!("-x[{}]", index))
    }

    /// Predicate requiring the dot product of the coefficients and each sample to be at least
    /// `threshold`.
    ///
    /// Samples must have exactly as many components as there are coefficients.
    pub fn linear<C>(coefficients: C, threshold: f64) -> Self
    where
        C: Into<Vec<f64>>,
    {
        let coefficients: Vec<f64> = coefficients.into();
        let name = coefficients
            .iter()
            .enumerate()
            .map(|(index, coeff)| format!("{} * x[{}]", coeff, index))
            .collect::<Vec<_>>()
            .join(" + ");

        let measurement = move |sample: &[f64]| {
            if sample.len() != coefficients.len() {
                return Err(Error::dimension_mismatch(coefficients.len(), sample.len()));
            }

            Ok(coefficients.iter().zip(sample).map(|(a, x)| a * x).sum())
        };

        Self::try_new(measurement, threshold).named(name)
    }

    /// Attach a human readable name to the measurement, used when displaying formulas.
    pub fn named<S>(mut self, name: S) -> Self
    where
        S: Into<String>,
    {
        self.name = Some(name.into());
        self
    }

    /// Name of the measurement, if one was attached.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The constant `c` the measurement is compared against.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Evaluate a single sample into a robustness value `μ(sample) - c`.
    pub fn evaluate_sample(&self, sample: &[f64]) -> Result<f64, Error> {
        let value = (self.measurement)(sample)?;
        Ok(value - self.threshold)
    }

    /// Evaluate the sample of `signal` at time `t`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if `t` is past the end of the signal.
    pub fn robustness(&self, signal: &Signal, t: usize) -> Result<f64, Error> {
        signal.sample(t).and_then(|sample| self.evaluate_sample(sample))
    }
}

fn component_of(sample: &[f64], index: usize) -> Result<f64, Error> {
    sample
        .get(index)
        .copied()
        .ok_or_else(|| Error::dimension_mismatch(index + 1, sample.len()))
}

impl Debug for Predicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl Display for Predicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = self.name.as_deref().unwrap_or("μ(x)");
        write!(f, "{} >= {}", name, self.threshold)
    }
}
