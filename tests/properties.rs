use proptest::prelude::*;
use stl_rho::{EvaluationMode, Formula, Predicate, Signal, Window};

const SIGNAL_LEN: usize = 40;

/// arb_predicate generates lower and upper bounds on either component of a 2-D sample.
fn arb_predicate() -> impl Strategy<Value = Formula> {
    (0..2usize, -5.0..5.0f64, any::<bool>()).prop_map(|(index, bound, upper)| {
        let predicate = if upper {
            Predicate::upper_bound(index, bound)
        } else {
            Predicate::component(index, bound)
        };

        Formula::from(predicate)
    })
}

fn arb_window() -> impl Strategy<Value = Window> {
    (0..3usize, 0..3usize).prop_map(|(start, width)| Window::new(start, start + width).expect("start <= end"))
}

/// arb_formula generates formula trees of depth at most 3 over every node kind.
fn arb_formula() -> impl Strategy<Value = Formula> {
    arb_predicate().prop_recursive(3, 24, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|phi| phi.negate()),
            (inner.clone(), inner.clone()).prop_map(|(left, right)| left.and(&right)),
            (inner.clone(), inner.clone()).prop_map(|(left, right)| left.or(&right)),
            (inner.clone(), arb_window()).prop_map(|(phi, window)| phi.always_in(window)),
            (inner.clone(), arb_window()).prop_map(|(phi, window)| phi.eventually_in(window)),
            (inner.clone(), inner, arb_window()).prop_map(|(left, right, window)| left.until_in(&right, window)),
        ]
    })
}

fn arb_signal() -> impl Strategy<Value = Signal> {
    prop::collection::vec(prop::array::uniform2(-10.0..10.0f64), SIGNAL_LEN)
        .prop_map(|rows| Signal::from_rows(rows).expect("rows have two components"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128, .. ProptestConfig::default()
    })]

    #[test]
    fn negation_involution(phi in arb_formula(), signal in arb_signal()) {
        prop_assert_eq!(phi.negate().negate().robustness(&signal, 0)?, phi.robustness(&signal, 0)?);
    }

    #[test]
    fn de_morgan(left in arb_formula(), right in arb_formula(), signal in arb_signal()) {
        let negated_and = left.and(&right).negate();
        let or_of_negated = left.negate().or(&right.negate());
        prop_assert_eq!(negated_and.robustness(&signal, 0)?, or_of_negated.robustness(&signal, 0)?);

        let negated_or = left.or(&right).negate();
        let and_of_negated = left.negate().and(&right.negate());
        prop_assert_eq!(negated_or.robustness(&signal, 0)?, and_of_negated.robustness(&signal, 0)?);
    }

    #[test]
    fn idempotence(phi in arb_formula(), signal in arb_signal()) {
        let rho = phi.robustness(&signal, 0)?;

        prop_assert_eq!(phi.and(&phi).robustness(&signal, 0)?, rho);
        prop_assert_eq!(phi.or(&phi).robustness(&signal, 0)?, rho);
    }

    #[test]
    fn always_eventually_duality(phi in arb_formula(), window in arb_window(), signal in arb_signal()) {
        let negated_always = phi.always_in(window).negate();
        let eventually_negated = phi.negate().eventually_in(window);

        prop_assert_eq!(negated_always.robustness(&signal, 0)?, eventually_negated.robustness(&signal, 0)?);
    }

    #[test]
    fn window_monotonicity(
        phi in arb_formula(),
        signal in arb_signal(),
        (start, shift, width, extension) in (0..3usize, 0..3usize, 0..3usize, 0..3usize)
    ) {
        let narrow = Window::new(start + shift, start + shift + width)?;
        let wide = Window::new(start, start + shift + width + extension)?;
        prop_assert!(narrow.is_within(&wide));

        let always_narrow = phi.always_in(narrow).robustness(&signal, 0)?;
        let always_wide = phi.always_in(wide).robustness(&signal, 0)?;
        prop_assert!(always_wide <= always_narrow);

        let eventually_narrow = phi.eventually_in(narrow).robustness(&signal, 0)?;
        let eventually_wide = phi.eventually_in(wide).robustness(&signal, 0)?;
        prop_assert!(eventually_wide >= eventually_narrow);
    }

    #[test]
    fn evaluation_modes_agree(phi in arb_formula(), signal in arb_signal(), t in 0..8usize) {
        let direct = phi.robustness_with(&signal, t, EvaluationMode::Direct)?;
        let memoized = phi.robustness_with(&signal, t, EvaluationMode::Memoized)?;

        prop_assert_eq!(direct, memoized);
    }

    #[test]
    fn horizon_bounds_evaluation(phi in arb_formula(), signal in arb_signal()) {
        for t in 0..SIGNAL_LEN {
            let in_range = t + phi.horizon() < signal.len();
            prop_assert_eq!(phi.robustness(&signal, t).is_ok(), in_range);
        }
    }

    #[test]
    fn trace_matches_pointwise(phi in arb_formula(), signal in arb_signal()) {
        let trace = phi.robustness_trace(&signal)?;
        prop_assert_eq!(trace.len(), signal.len() - phi.horizon());

        for (t, rho) in trace.into_iter().enumerate() {
            prop_assert_eq!(rho, phi.robustness(&signal, t)?);
        }
    }
}
