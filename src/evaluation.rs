//! Recursive robustness evaluation over formula trees.
//!
//! The evaluator performs a single structural case split on the [`Node`] of a formula, delegating
//! the combination of child values to the rules in [`operators`](crate::operators). An optional
//! memo table records the robustness of every `(node, time)` pair visited during one evaluation.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Error;
use crate::formula::{Formula, Node};
use crate::operators::{first_order, forward};
use crate::signal::Signal;

/// Strategy used to evaluate a formula.
///
/// Both modes compute identical values; they only differ in how much work is repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EvaluationMode {
    /// Evaluate every node at every requested time, without caching.
    #[default]
    Direct,

    /// Cache the robustness of each node at each time for the duration of one evaluation.
    Memoized,
}

pub(crate) trait Cache {
    fn lookup(&self, key: (usize, usize)) -> Option<f64>;
    fn store(&self, key: (usize, usize), rho: f64);
}

pub(crate) struct NoCache;

impl Cache for NoCache {
    fn lookup(&self, _: (usize, usize)) -> Option<f64> {
        None
    }

    fn store(&self, _: (usize, usize), _: f64) {}
}

/// Robustness values keyed by node identity and absolute time.
///
/// Node identities are only stable while the formula is borrowed, so a memo never outlives the
/// evaluation it was created for.
#[derive(Default)]
pub(crate) struct Memo(RefCell<HashMap<(usize, usize), f64>>);

impl Cache for Memo {
    fn lookup(&self, key: (usize, usize)) -> Option<f64> {
        self.0.borrow().get(&key).copied()
    }

    fn store(&self, key: (usize, usize), rho: f64) {
        self.0.borrow_mut().insert(key, rho);
    }
}

pub(crate) struct Evaluator<'s, C> {
    signal: &'s Signal,
    cache: C,
}

impl<'s> Evaluator<'s, NoCache> {
    pub(crate) fn direct(signal: &'s Signal) -> Self {
        Self { signal, cache: NoCache }
    }
}

impl<'s> Evaluator<'s, Memo> {
    pub(crate) fn memoized(signal: &'s Signal) -> Self {
        Self {
            signal,
            cache: Memo::default(),
        }
    }
}

impl<'s, C> Evaluator<'s, C>
where
    C: Cache,
{
    pub(crate) fn robustness(&self, formula: &Formula, t: usize) -> Result<f64, Error> {
        let key = (formula.id(), t);

        if let Some(rho) = self.cache.lookup(key) {
            return Ok(rho);
        }

        let rho = self.evaluate(formula.node(), t)?;
        self.cache.store(key, rho);

        Ok(rho)
    }

    fn evaluate(&self, node: &Node, t: usize) -> Result<f64, Error> {
        let signal = self.signal;

        match node {
            Node::Predicate(predicate) => predicate.robustness(signal, t),
            Node::Not(subformula) => self.robustness(subformula, t).map(first_order::negation),
            Node::And(left, right) => {
                let left = self.robustness(left, t)?;
                let right = self.robustness(right, t)?;
                Ok(first_order::conjunction(left, right))
            }
            Node::Or(left, right) => {
                let left = self.robustness(left, t)?;
                let right = self.robustness(right, t)?;
                Ok(first_order::disjunction(left, right))
            }
            Node::Always(subformula, window) => {
                forward::always(signal, t, window, |k| self.robustness(subformula, k))
            }
            Node::Eventually(subformula, window) => {
                forward::eventually(signal, t, window, |k| self.robustness(subformula, k))
            }
            Node::Until(left, right, window) => forward::until(
                signal,
                t,
                window,
                |k| self.robustness(left, k),
                |k| self.robustness(right, k),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cache, EvaluationMode, Evaluator, Memo};
    use crate::error::Error;
    use crate::formula::Formula;
    use crate::predicate::Predicate;
    use crate::signal::Signal;

    #[test]
    fn default_mode() {
        assert_eq!(EvaluationMode::default(), EvaluationMode::Direct);
    }

    #[test]
    fn memo_entries() {
        let memo = Memo::default();

        assert_eq!(memo.lookup((1, 2)), None);
        memo.store((1, 2), 0.5);
        assert_eq!(memo.lookup((1, 2)), Some(0.5));
        assert_eq!(memo.lookup((2, 1)), None);
    }

    #[test]
    fn modes_agree() -> Result<(), Error> {
        let signal = Signal::scalar([1.0, 3.0, -2.0, 4.0, 0.5, 2.0, -1.0, 3.5, 1.0, 0.0]);
        let p = Formula::from(Predicate::component(0, 0.0));
        let q = Formula::from(Predicate::upper_bound(0, 3.0));
        let phi = p.eventually(0, 2)?.always(0, 3)?.or(&q.until(&p.negate(), 1, 3)?);

        for t in 0..signal.len() - phi.horizon() {
            let direct = Evaluator::direct(&signal).robustness(&phi, t)?;
            let memoized = Evaluator::memoized(&signal).robustness(&phi, t)?;

            assert_eq!(direct, memoized);
            assert_eq!(phi.robustness_with(&signal, t, EvaluationMode::Memoized)?, direct);
        }

        Ok(())
    }

    #[test]
    fn memoized_errors() -> Result<(), Error> {
        let signal = Signal::scalar([1.0, 2.0, 3.0]);
        let phi = Formula::from(Predicate::component(0, 0.0)).always(0, 3)?;

        assert_eq!(
            phi.robustness_with(&signal, 0, EvaluationMode::Memoized),
            Err(Error::out_of_range(3, 3))
        );

        Ok(())
    }
}
