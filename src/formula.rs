//! Immutable, shareable STL formula trees.
//!
//! A [`Formula`] is a cheap handle to an immutable [`Node`]. Combinators never modify their
//! operands, they wrap handles to them in a new node, so a single sub-formula can be reused as the
//! operand of any number of parents. Since operands must exist before they can be wrapped, a
//! formula tree can never contain a cycle.
//!
//! # Examples
//!
//! ```rust
//! use stl_rho::{Formula, Predicate, Signal};
//!
//! let reach = Formula::from(Predicate::component(0, 3.0));     // x >= 3
//! let stay = Formula::from(Predicate::upper_bound(0, 5.0));    // x <= 5
//!
//! // `stay` is an operand of both sub-formulas without being copied.
//! let phi = reach.until(&stay, 0, 3)? & stay.always(0, 4)?;
//!
//! let signal = Signal::scalar([0.0, 1.0, 2.0, 3.5, 4.0]);
//! assert_eq!(phi.robustness(&signal, 0)?, 0.5);
//! # Ok::<(), stl_rho::Error>(())
//! ```

use std::fmt::{Display, Formatter};
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

use nonempty::NonEmpty;

use crate::error::Error;
use crate::evaluation::{EvaluationMode, Evaluator};
use crate::operators::Window;
use crate::predicate::Predicate;
use crate::signal::Signal;

/// The kinds of node a formula tree is made of.
///
/// Each variant carries only its own parameters and handles to its operands.
#[derive(Debug)]
#[non_exhaustive]
pub enum Node {
    Predicate(Predicate),
    Not(Formula),
    And(Formula, Formula),
    Or(Formula, Formula),
    Always(Formula, Window),
    Eventually(Formula, Window),
    Until(Formula, Formula, Window),
}

/// Shared handle to an immutable formula node.
///
/// Cloning a `Formula` clones the handle, not the tree. Formulas are `Send` and `Sync`, so one
/// formula can be evaluated from several threads at once.
#[derive(Debug, Clone)]
pub struct Formula(Arc<Node>);

impl Formula {
    fn wrap(node: Node) -> Self {
        Self(Arc::new(node))
    }

    /// Create a leaf formula from a measurement function and a threshold.
    ///
    /// Equivalent to `Formula::from(Predicate::new(measurement, threshold))`.
    pub fn predicate<F>(measurement: F, threshold: f64) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        Self::from(Predicate::new(measurement, threshold))
    }

    /// The node this handle refers to.
    pub fn node(&self) -> &Node {
        &self.0
    }

    /// Returns true if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Formula) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn id(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }

    /// Formula holding when this formula does not, with robustness `-ρ(φ)`.
    pub fn negate(&self) -> Self {
        Self::wrap(Node::Not(self.clone()))
    }

    /// Formula requiring both formulas to hold, with robustness `min(ρ(φ1), ρ(φ2))`.
    pub fn and(&self, other: &Formula) -> Self {
        Self::wrap(Node::And(self.clone(), other.clone()))
    }

    /// Formula requiring either formula to hold, with robustness `max(ρ(φ1), ρ(φ2))`.
    pub fn or(&self, other: &Formula) -> Self {
        Self::wrap(Node::Or(self.clone(), other.clone()))
    }

    /// Formula requiring this formula to hold at every time in `[t + start, t + end]`.
    ///
    /// Fails with [`Error::InvalidWindow`] if `start > end`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stl_rho::{Error, Formula};
    ///
    /// let p = Formula::predicate(|x| x[0], 0.0);
    ///
    /// assert!(p.always(0, 5).is_ok());
    /// assert_eq!(p.always(5, 0).unwrap_err(), Error::InvalidWindow { start: 5, end: 0 });
    /// ```
    pub fn always(&self, start: usize, end: usize) -> Result<Self, Error> {
        Window::new(start, end).map(|window| self.always_in(window))
    }

    /// Formula requiring this formula to hold at some time in `[t + start, t + end]`.
    ///
    /// Fails with [`Error::InvalidWindow`] if `start > end`.
    pub fn eventually(&self, start: usize, end: usize) -> Result<Self, Error> {
        Window::new(start, end).map(|window| self.eventually_in(window))
    }

    /// Formula requiring this formula to hold at a switch time in `[t + start, t + end]`, while
    /// `other` holds over the whole stretch from `t` up to and including the switch time.
    ///
    /// Fails with [`Error::InvalidWindow`] if `start > end`.
    pub fn until(&self, other: &Formula, start: usize, end: usize) -> Result<Self, Error> {
        Window::new(start, end).map(|window| self.until_in(other, window))
    }

    /// Like [`Formula::always`] with an already validated window.
    pub fn always_in(&self, window: Window) -> Self {
        Self::wrap(Node::Always(self.clone(), window))
    }

    /// Like [`Formula::eventually`] with an already validated window.
    pub fn eventually_in(&self, window: Window) -> Self {
        Self::wrap(Node::Eventually(self.clone(), window))
    }

    /// Like [`Formula::until`] with an already validated window.
    pub fn until_in(&self, other: &Formula, window: Window) -> Self {
        Self::wrap(Node::Until(self.clone(), other.clone(), window))
    }

    /// Conjunction of every formula, folded left to right into nested binary nodes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nonempty::nonempty;
    /// use stl_rho::{Formula, Predicate, Signal};
    ///
    /// let phi = Formula::all(nonempty![
    ///     Predicate::component(0, 1.0).into(),
    ///     Predicate::component(0, 2.0).into(),
    ///     Predicate::component(0, 3.0).into()
    /// ]);
    ///
    /// let signal = Signal::scalar([5.0]);
    /// assert_eq!(phi.robustness(&signal, 0), Ok(2.0));
    /// ```
    pub fn all(formulas: NonEmpty<Formula>) -> Self {
        let NonEmpty { head, tail } = formulas;
        tail.iter().fold(head, |conjunction, formula| conjunction.and(formula))
    }

    /// Disjunction of every formula, folded left to right into nested binary nodes.
    pub fn any(formulas: NonEmpty<Formula>) -> Self {
        let NonEmpty { head, tail } = formulas;
        tail.iter().fold(head, |disjunction, formula| disjunction.or(formula))
    }

    /// The furthest offset from the evaluation time that this formula reads.
    ///
    /// Evaluating at time `t` only touches samples in `[t, t + horizon]`, so it can succeed only
    /// when `t + horizon` is a valid index of the signal.
    pub fn horizon(&self) -> usize {
        match self.node() {
            Node::Predicate(_) => 0,
            Node::Not(subformula) => subformula.horizon(),
            Node::And(left, right) | Node::Or(left, right) => usize::max(left.horizon(), right.horizon()),
            Node::Always(subformula, window) | Node::Eventually(subformula, window) => {
                window.end().saturating_add(subformula.horizon())
            }
            Node::Until(left, right, window) => {
                let operands = usize::max(left.horizon(), right.horizon());
                window.end().saturating_add(operands)
            }
        }
    }

    /// Compute the robustness of `signal` at time `t`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stl_rho::{Formula, Signal};
    ///
    /// let phi = Formula::predicate(|x| x[0], 3.0);
    /// let signal = Signal::scalar([0.0, 2.0, 4.0, 5.0]);
    ///
    /// assert_eq!(phi.robustness(&signal, 2), Ok(1.0));
    /// assert_eq!(phi.robustness(&signal, 0), Ok(-3.0));
    /// ```
    pub fn robustness(&self, signal: &Signal, t: usize) -> Result<f64, Error> {
        self.robustness_with(signal, t, EvaluationMode::Direct)
    }

    /// Compute the robustness of `signal` at time `t` using the given evaluation mode.
    ///
    /// Every mode produces the same value. [`EvaluationMode::Memoized`] avoids recomputing the
    /// robustness of a node at a time already visited during this call, which pays off for nested
    /// temporal operators with overlapping windows.
    pub fn robustness_with(&self, signal: &Signal, t: usize, mode: EvaluationMode) -> Result<f64, Error> {
        tracing::trace!(formula = %self, t, signal_len = signal.len(), ?mode, "evaluating robustness");

        match mode {
            EvaluationMode::Direct => Evaluator::direct(signal).robustness(self, t),
            EvaluationMode::Memoized => Evaluator::memoized(signal).robustness(self, t),
        }
    }

    /// Compute the robustness at every time `t` for which `t + horizon` lies within the signal.
    ///
    /// The result is empty if the signal is shorter than the horizon of the formula. A single
    /// memo table is shared across all the evaluated times.
    pub fn robustness_trace(&self, signal: &Signal) -> Result<Vec<f64>, Error> {
        let horizon = self.horizon();
        let count = signal.len().saturating_sub(horizon);

        tracing::debug!(formula = %self, horizon, signal_len = signal.len(), count, "evaluating robustness trace");

        let evaluator = Evaluator::memoized(signal);
        (0..count).map(|t| evaluator.robustness(self, t)).collect()
    }
}

impl From<Predicate> for Formula {
    fn from(predicate: Predicate) -> Self {
        Self::wrap(Node::Predicate(predicate))
    }
}

impl Not for Formula {
    type Output = Formula;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl Not for &Formula {
    type Output = Formula;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl BitAnd for Formula {
    type Output = Formula;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(&rhs)
    }
}

impl BitAnd for &Formula {
    type Output = Formula;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for Formula {
    type Output = Formula;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(&rhs)
    }
}

impl BitOr for &Formula {
    type Output = Formula;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.node() {
            Node::Predicate(predicate) => write!(f, "({})", predicate),
            Node::Not(subformula) => write!(f, "¬{}", subformula),
            Node::And(left, right) => write!(f, "({} ∧ {})", left, right),
            Node::Or(left, right) => write!(f, "({} ∨ {})", left, right),
            Node::Always(subformula, window) => write!(f, "G{} {}", window, subformula),
            Node::Eventually(subformula, window) => write!(f, "F{} {}", window, subformula),
            Node::Until(left, right, window) => write!(f, "({} U{} {})", left, window, right),
        }
    }
}

#[cfg(test)]
mod tests {
    use nonempty::nonempty;

    use super::{Formula, Node};
    use crate::error::Error;
    use crate::predicate::Predicate;
    use crate::signal::Signal;

    fn x_at_least(threshold: f64) -> Formula {
        Predicate::component(0, threshold).into()
    }

    #[test]
    fn shared_operands() -> Result<(), Error> {
        let p = x_at_least(1.0);
        let phi = p.always(0, 1)?.and(&p.eventually(0, 2)?);

        match phi.node() {
            Node::And(left, right) => match (left.node(), right.node()) {
                (Node::Always(a, _), Node::Eventually(b, _)) => {
                    assert!(a.ptr_eq(&p));
                    assert!(b.ptr_eq(&p));
                }
                _ => panic!("unexpected operands {}", phi),
            },
            _ => panic!("unexpected node {}", phi),
        }

        Ok(())
    }

    #[test]
    fn invalid_windows() {
        let p = x_at_least(0.0);

        assert_eq!(p.always(3, 1).unwrap_err(), Error::InvalidWindow { start: 3, end: 1 });
        assert_eq!(p.eventually(2, 0).unwrap_err(), Error::InvalidWindow { start: 2, end: 0 });
        assert_eq!(p.until(&p, 1, 0).unwrap_err(), Error::InvalidWindow { start: 1, end: 0 });
    }

    #[test]
    fn horizon() -> Result<(), Error> {
        let p = x_at_least(0.0);
        let q = p.eventually(1, 3)?;

        assert_eq!(p.horizon(), 0);
        assert_eq!(q.horizon(), 3);
        assert_eq!(q.always(0, 2)?.horizon(), 5);
        assert_eq!(p.until(&q, 0, 4)?.horizon(), 7);
        assert_eq!((!q.clone() | p.clone()).horizon(), 3);

        Ok(())
    }

    #[test]
    fn n_ary_folds() -> Result<(), Error> {
        let signal = Signal::scalar([2.0]);
        let formulas = nonempty![x_at_least(0.0), x_at_least(3.0), x_at_least(1.0)];

        assert_eq!(Formula::all(formulas.clone()).robustness(&signal, 0)?, -1.0);
        assert_eq!(Formula::any(formulas).robustness(&signal, 0)?, 2.0);
        assert_eq!(Formula::all(nonempty![x_at_least(1.5)]).robustness(&signal, 0)?, 0.5);

        Ok(())
    }

    #[test]
    fn robustness_trace() -> Result<(), Error> {
        let signal = Signal::scalar([4.0, 2.0, 3.0, 1.0, 3.0]);
        let phi = x_at_least(0.0).always(0, 2)?;

        assert_eq!(phi.robustness_trace(&signal)?, vec![2.0, 1.0, 1.0]);
        assert_eq!(phi.always(0, 10)?.robustness_trace(&signal)?, Vec::<f64>::new());

        Ok(())
    }

    #[test]
    fn display() -> Result<(), Error> {
        let p = x_at_least(1.0);
        let q = Formula::predicate(|x| x[1], 2.0);
        let phi = p.until(&q.negate(), 0, 3)?.or(&p.always(1, 2)?);

        assert_eq!(phi.to_string(), "(((x[0] >= 1) U[0,3] ¬(μ(x) >= 2)) ∨ G[1,2] (x[0] >= 1))");
        Ok(())
    }
}
