//! Time-invariant combination rules for negation, conjunction and disjunction.
//!
//! Each function combines the robustness values of its operand(s) at a single time. They are
//! used by the formula evaluator after it has evaluated the children of a node, and by the
//! temporal folds in [`forward`](super::forward).
//!
//! A NaN operand always makes the result NaN, unlike `f64::min` and `f64::max` which return the
//! other operand.

/// Robustness of `¬φ` given the robustness of `φ`.
///
/// | time | subformula | not  |
/// | ---- | ---------- | ---- |
/// | 0    |        1.0 | -1.0 |
/// | 1    |        3.0 | -3.0 |
/// | 2    |       -2.0 |  2.0 |
pub fn negation(rho: f64) -> f64 {
    -rho
}

/// Robustness of `φ1 ∧ φ2`, the minimum of the two operands.
///
/// Given two values where negative values represent failure, the conjunction should only be
/// positive if both of its operands are positive, mirroring the first-order logic behavior.
///
/// | time | left | right | and  |
/// | ---- | ---- | ----- | ---- |
/// | 0    |  1.0 |   2.0 |  1.0 |
/// | 1    | -1.0 |   5.0 | -1.0 |
/// | 2    | -3.0 |  -1.0 | -3.0 |
/// | 3    |  NaN |   1.0 |  NaN |
pub fn conjunction(left: f64, right: f64) -> f64 {
    if left.is_nan() || right.is_nan() {
        f64::NAN
    } else {
        f64::min(left, right)
    }
}

/// Robustness of `φ1 ∨ φ2`, the maximum of the two operands.
///
/// | time | left | right | or   |
/// | ---- | ---- | ----- | ---- |
/// | 0    |  1.0 |   2.0 |  2.0 |
/// | 1    | -1.0 |   5.0 |  5.0 |
/// | 2    | -3.0 |  -1.0 | -1.0 |
/// | 3    |  NaN |   1.0 |  NaN |
pub fn disjunction(left: f64, right: f64) -> f64 {
    if left.is_nan() || right.is_nan() {
        f64::NAN
    } else {
        f64::max(left, right)
    }
}
