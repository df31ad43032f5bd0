//! Combination rules used to evaluate composite formulas.
//!
//! In temporal logic formulas, much like arithmetic formulas, operators modify the robustness
//! values of their operands to produce a new robustness value. None of the operators read samples
//! from a signal directly; they delegate that to their operands and combine the results. As a
//! result, a formula cannot consist of only operators but must bottom out in a
//! [`Predicate`](crate::predicate::Predicate).
//!
//! # First Order Operators
//!
//! Since temporal logics extend first-order logics, temporal logic formulas inherit the
//! first-order operators negation, conjunction and disjunction. Each of these operators is
//! time-invariant, meaning that it only depends on the robustness of its operands at the current
//! time.
//!
//! # Temporal Operators
//!
//! Temporal operators depend on times other than the current one. Every temporal operator in this
//! crate is bounded by a [`Window`] of offsets relative to the evaluation time. For an operator
//! bounded in the interval `[1, 3]` and evaluated at time `T2`, the considered times are:
//!
//! ```text
//! T0 T1 T2 T3 T4 T5 T6
//! M0 M1 M2 M3 M4 M5 M6
//!          |-----|
//! ```
//!
//! The window must fit entirely inside the signal. A window that would reach past the last sample
//! is reported as [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange), it is never silently
//! truncated.
//!
//! [`forward::always`] requires its subformula to hold at every time in the window, and [`forward::eventually`]
//! requires its subformula to hold at some time in the window. [`forward::until`] is a binary operator
//! that looks for a switch time in the window where its left subformula holds, while its right
//! subformula holds from the evaluation time up to and including the switch time.
//!
//! # Examples
//!
//! Operators are applied through the combinators of [`Formula`](crate::Formula):
//!
//! ```rust
//! use stl_rho::{Formula, Predicate, Signal};
//!
//! let near = Formula::from(Predicate::upper_bound(0, 1.0));
//! let far = near.negate();
//! let phi = far.always(0, 2)?.and(&near.eventually(3, 4)?);
//!
//! let signal = Signal::scalar([3.0, 2.5, 2.0, 1.5, 0.5]);
//! let rho = phi.robustness(&signal, 0)?;
//!
//! assert_eq!(rho, 0.5);
//! # Ok::<(), stl_rho::Error>(())
//! ```

pub mod first_order;
pub mod forward;

pub use forward::Window;
