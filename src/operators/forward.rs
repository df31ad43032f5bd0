use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::first_order::{conjunction, disjunction};
use crate::error::Error;
use crate::signal::Signal;

/// Closed interval of time offsets `[start, end]` quantified over by a temporal operator.
///
/// The offsets are relative to the time a formula is evaluated at, so evaluating a formula bounded
/// by `[1, 3]` at time `t = 2` considers the times `3, 4, 5`. A window always satisfies
/// `start <= end`.
///
/// # Examples
///
/// ```rust
/// use stl_rho::{Error, Window};
///
/// let w1 = Window::new(0, 3)?;
/// let w2 = Window::try_from(0..=3_usize)?;
/// assert_eq!(w1, w2);
///
/// assert!(Window::new(4, 2).is_err());
/// assert!(Window::try_from((-1_i64, 2_i64)).is_err());
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(usize, usize)", into = "(usize, usize)"))]
pub struct Window {
    start: usize,
    end: usize,
}

impl Window {
    /// Create a window, failing with [`Error::InvalidWindow`] if `start > end`.
    pub fn new(start: usize, end: usize) -> Result<Self, Error> {
        if start > end {
            return Err(Error::InvalidWindow {
                start: to_signed(start),
                end: to_signed(end),
            });
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of time steps covered by the window.
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }

    /// Returns true if `other` covers at least every offset covered by this window.
    pub fn is_within(&self, other: &Window) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Shift the window to absolute time `t`, checking that every shifted time lies in the signal.
    pub(crate) fn shift(&self, signal: &Signal, t: usize) -> Result<(usize, usize), Error> {
        let overflow = || Error::out_of_range(usize::MAX, signal.len());
        let start = t.checked_add(self.start).ok_or_else(overflow)?;
        let end = t.checked_add(self.end).ok_or_else(overflow)?;

        signal.check_span(start, end)?;
        Ok((start, end))
    }
}

fn to_signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl Display for Window {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.start, self.end)
    }
}

impl TryFrom<(usize, usize)> for Window {
    type Error = Error;

    fn try_from((start, end): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl TryFrom<RangeInclusive<usize>> for Window {
    type Error = Error;

    fn try_from(range: RangeInclusive<usize>) -> Result<Self, Self::Error> {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl TryFrom<(i64, i64)> for Window {
    type Error = Error;

    fn try_from((start, end): (i64, i64)) -> Result<Self, Self::Error> {
        let invalid = || Error::InvalidWindow { start, end };
        let start = usize::try_from(start).map_err(|_| invalid())?;
        let end = usize::try_from(end).map_err(|_| invalid())?;

        Self::new(start, end)
    }
}

impl From<Window> for (usize, usize) {
    fn from(window: Window) -> Self {
        (window.start, window.end)
    }
}

/// Robustness of `G[a,b] φ` at time `t`: the minimum of `φ` over `[t + a, t + b]`.
///
/// `eval` computes the robustness of the subformula at an absolute time. The whole shifted window
/// must lie within the signal, otherwise [`Error::IndexOutOfRange`] is returned before the
/// subformula is evaluated. Since a window is never empty, the infinite starting value of the fold
/// is only returned when every subformula value is infinite. A NaN value anywhere in the window
/// makes the result NaN.
///
/// | time | subformula | G[0,2] |
/// | ---- | ---------- | ------ |
/// | 0    |        4.0 |    2.0 |
/// | 1    |        2.0 |    1.0 |
/// | 2    |        3.0 |    1.0 |
/// | 3    |        1.0 |  error |
/// | 4    |        3.0 |  error |
pub fn always<F>(signal: &Signal, t: usize, window: &Window, mut eval: F) -> Result<f64, Error>
where
    F: FnMut(usize) -> Result<f64, Error>,
{
    let (start, end) = window.shift(signal, t)?;

    (start..=end).try_fold(f64::INFINITY, |rho, k| eval(k).map(|rho_k| conjunction(rho, rho_k)))
}

/// Robustness of `F[a,b] φ` at time `t`: the maximum of `φ` over `[t + a, t + b]`.
///
/// | time | subformula | F[0,2] |
/// | ---- | ---------- | ------ |
/// | 0    |        4.0 |    4.0 |
/// | 1    |        2.0 |    5.0 |
/// | 2    |        1.0 |    5.0 |
/// | 3    |        5.0 |  error |
/// | 4    |        3.0 |  error |
pub fn eventually<F>(signal: &Signal, t: usize, window: &Window, mut eval: F) -> Result<f64, Error>
where
    F: FnMut(usize) -> Result<f64, Error>,
{
    let (start, end) = window.shift(signal, t)?;

    (start..=end).try_fold(f64::NEG_INFINITY, |rho, k| eval(k).map(|rho_k| disjunction(rho, rho_k)))
}

/// Robustness of `φ1 U[a,b] φ2` at time `t`.
///
/// For every switch time `t'` in `[t + a, t + b]` the left subformula is sampled at `t'` and the
/// right subformula must have held over the whole stretch `[t, t']`:
///
/// ```text
/// max_{t' ∈ [t+a, t+b]} min(φ1(t'), min_{t'' ∈ [t, t']} φ2(t''))
/// ```
///
/// The inner minimum is kept as a running value while `t'` advances, since `[t, t']` only grows
/// by one time step per iteration.
pub fn until<L, R>(signal: &Signal, t: usize, window: &Window, mut left: L, mut right: R) -> Result<f64, Error>
where
    L: FnMut(usize) -> Result<f64, Error>,
    R: FnMut(usize) -> Result<f64, Error>,
{
    let (start, end) = window.shift(signal, t)?;
    let mut right_min = f64::INFINITY;

    for k in t..start {
        right_min = conjunction(right_min, right(k)?);
    }

    let mut rho = f64::NEG_INFINITY;

    for switch in start..=end {
        right_min = conjunction(right_min, right(switch)?);
        rho = disjunction(rho, conjunction(left(switch)?, right_min));
    }

    Ok(rho)
}
