//! Scoring several candidate signals against one formula.
//!
//! Search-based testing evaluates many candidate trajectories against the same requirement and
//! looks for the ones closest to (or furthest from) a violation. The functions in this module
//! evaluate a formula over a collection of signals at a common time.
//!
//! # Examples
//!
//! ```rust
//! use stl_rho::batch::rank;
//! use stl_rho::{Formula, Predicate, Signal};
//!
//! let phi = Formula::from(Predicate::component(0, 1.0)).eventually(0, 1)?;
//! let candidates = [
//!     Signal::scalar([0.0, 0.5]),
//!     Signal::scalar([3.0, 0.0]),
//!     Signal::scalar([1.0, 2.0]),
//! ];
//!
//! assert_eq!(rank(&phi, &candidates, 0)?, vec![(1, 2.0), (2, 1.0), (0, -0.5)]);
//! # Ok::<(), stl_rho::Error>(())
//! ```

use std::cmp::Reverse;

use ordered_float::OrderedFloat;

use crate::error::Error;
use crate::formula::Formula;
use crate::signal::Signal;

/// Evaluate `formula` at time `t` for every signal, returning one result per signal in order.
pub fn score_all<'a, I>(formula: &Formula, signals: I, t: usize) -> Vec<Result<f64, Error>>
where
    I: IntoIterator<Item = &'a Signal>,
{
    signals
        .into_iter()
        .map(|signal| formula.robustness(signal, t))
        .collect()
}

/// Evaluate `formula` at time `t` for every signal and sort the candidates from most to least
/// robust.
///
/// Each entry is the position of the candidate in `signals` paired with its robustness.
/// Candidates with equal robustness keep their relative order, and candidates with a NaN
/// robustness are placed last. Fails with the error of the first candidate that cannot be
/// evaluated.
pub fn rank<'a, I>(formula: &Formula, signals: I, t: usize) -> Result<Vec<(usize, f64)>, Error>
where
    I: IntoIterator<Item = &'a Signal>,
{
    let mut ranking = signals
        .into_iter()
        .enumerate()
        .map(|(index, signal)| formula.robustness(signal, t).map(|rho| (index, rho)))
        .collect::<Result<Vec<_>, _>>()?;

    ranking.sort_by_key(|&(_, rho)| (rho.is_nan(), Reverse(OrderedFloat(rho))));

    tracing::debug!(
        candidates = ranking.len(),
        horizon = formula.horizon(),
        best = ?ranking.first(),
        "ranked candidate signals"
    );

    Ok(ranking)
}

#[cfg(test)]
mod tests {
    use super::{rank, score_all};
    use crate::error::Error;
    use crate::formula::Formula;
    use crate::predicate::Predicate;
    use crate::signal::Signal;

    fn candidates() -> Vec<Signal> {
        vec![
            Signal::scalar([1.0, 2.0, 3.0]),
            Signal::scalar([4.0, 0.0, 1.0]),
            Signal::scalar([2.0, 2.0]),
            Signal::scalar([0.0, 3.0, 3.0]),
        ]
    }

    #[test]
    fn scores() -> Result<(), Error> {
        let phi = Formula::from(Predicate::component(0, 1.0)).always(0, 2)?;
        let scores = score_all(&phi, &candidates(), 0);

        assert_eq!(scores, vec![Ok(0.0), Ok(-1.0), Err(Error::out_of_range(2, 2)), Ok(-1.0)]);
        Ok(())
    }

    #[test]
    fn ranking() -> Result<(), Error> {
        let phi = Formula::from(Predicate::component(0, 1.0)).eventually(0, 1)?;
        let ranking = rank(&phi, &candidates(), 0)?;

        // Ties keep the order of the candidates.
        assert_eq!(ranking, vec![(1, 3.0), (3, 2.0), (0, 1.0), (2, 1.0)]);

        Ok(())
    }

    #[test]
    fn ranking_errors() -> Result<(), Error> {
        let phi = Formula::from(Predicate::component(0, 1.0)).always(0, 2)?;

        assert_eq!(rank(&phi, &candidates(), 0), Err(Error::out_of_range(2, 2)));
        assert_eq!(rank(&phi, &candidates()[..2], 0)?, vec![(0, 0.0), (1, -1.0)]);
        assert_eq!(rank(&phi, &Vec::<Signal>::new(), 0)?, Vec::<(usize, f64)>::new());

        Ok(())
    }

    #[test]
    fn undefined_candidates_last() -> Result<(), Error> {
        let phi = Formula::from(Predicate::component(0, 0.0)).eventually(0, 1)?;
        let candidates = [
            Signal::scalar([f64::NAN, 1.0]),
            Signal::scalar([5.0, 0.0]),
            Signal::scalar([-2.0, -1.0]),
        ];

        let ranking = rank(&phi, &candidates, 0)?;
        let order = ranking.iter().map(|(index, _)| *index).collect::<Vec<_>>();

        assert_eq!(order, vec![1, 2, 0]);
        assert_eq!(ranking[0].1, 5.0);
        assert_eq!(ranking[1].1, -1.0);
        assert!(ranking[2].1.is_nan());

        Ok(())
    }
}
