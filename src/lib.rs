//! Quantitative evaluation of [Signal Temporal Logic] formulas over discrete-time signals.
//!
//! Signal Temporal Logic (STL) is used to state requirements on how a system should behave over
//! time. Requirements can be as simple as _The robot should never enter the obstacle_ or as
//! involved as _The robot should stay out of the obstacle for the next 20 steps and reach the
//! goal at some point during that time_. Instead of only answering whether a recorded
//! [`Signal`] satisfies a [`Formula`], this crate computes its [robustness]: a real number whose
//! sign tells if the requirement holds and whose magnitude tells how far the signal is from
//! changing that verdict. Robustness values are suitable as objectives for search-based testing
//! and for ranking candidate trajectories.
//!
//! [Signal Temporal Logic]: https://en.wikipedia.org/wiki/Signal_temporal_logic
//! [robustness]: https://link.springer.com/chapter/10.1007/11940197_12
//!
//! # Examples
//!
//! A formula is built from [`Predicate`]s, which measure a single sample, combined with the
//! first-order and temporal [`operators`]:
//!
//! ```rust
//! use stl_rho::region::in_rectangle;
//!
//! let hit_obstacle = in_rectangle(3.0, 5.0, 4.0, 6.0);
//! let at_goal = in_rectangle(7.0, 8.0, 8.0, 9.0);
//!
//! let avoid = hit_obstacle.negate().always(0, 20)?;
//! let reach = at_goal.eventually(0, 20)?;
//! let specification = avoid.and(&reach);
//! # Ok::<(), stl_rho::Error>(())
//! ```
//!
//! A signal is a sequence of equally sized samples, one per time step. Evaluating a formula at
//! time `t` yields the robustness of the signal at that time:
//!
//! ```rust
//! use stl_rho::{Formula, Predicate, Signal};
//!
//! let phi = Formula::from(Predicate::component(0, 1.0)).always(0, 2)?;
//! let signal = Signal::scalar([4.0, 2.0, 3.0, 1.0]);
//!
//! assert_eq!(phi.robustness(&signal, 0)?, 1.0);
//! assert_eq!(phi.robustness(&signal, 1)?, 0.0);
//! assert!(phi.robustness(&signal, 2).is_err());
//! # Ok::<(), stl_rho::Error>(())
//! ```
//!
//! Temporal windows never reach past the end of a signal. An evaluation that would read a sample
//! outside the signal fails with [`Error::IndexOutOfRange`].

#![deny(clippy::all)]

use std::borrow::Borrow;

pub mod batch;
pub mod error;
pub mod evaluation;
pub mod formula;
pub mod operators;
pub mod predicate;
pub mod region;
pub mod signal;

pub use crate::error::Error;
pub use crate::evaluation::EvaluationMode;
pub use crate::formula::{Formula, Node};
pub use crate::operators::Window;
pub use crate::predicate::Predicate;
pub use crate::signal::Signal;

/// Evaluate the robustness of a signal at its first time step.
///
/// # Example
///
/// ```rust
/// use stl_rho::{evaluate, Formula, Predicate, Signal};
///
/// let phi = Formula::from(Predicate::upper_bound(0, 2.0)).eventually(0, 1)?;
/// let signal = Signal::scalar([3.0, 1.5]);
///
/// assert_eq!(evaluate(&signal, &phi)?, 0.5);
/// assert_eq!(evaluate(Signal::new(), &phi), Err(stl_rho::Error::out_of_range(1, 0)));
/// # Ok::<(), stl_rho::Error>(())
/// ```
pub fn evaluate<S, F>(signal: S, formula: F) -> Result<f64, Error>
where
    S: Borrow<Signal>,
    F: Borrow<Formula>,
{
    formula.borrow().robustness(signal.borrow(), 0)
}
