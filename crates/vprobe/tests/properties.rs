//! Property tests over arbitrary emission sequences.

use proptest::prelude::*;
use vprobe::prelude::*;
use vprobe_test_utils::{emit_all, MockPublisher};

fn recorded(values: &[i32]) -> (MockPublisher<i32>, ValueProbe<i32>) {
    let mut publisher = MockPublisher::new();
    let probe = publisher.probe();
    emit_all(&mut publisher, values.iter().copied());
    (publisher, probe)
}

fn arb_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..40)
}

proptest! {
    #[test]
    fn values_match_emissions(values in arb_values()) {
        let (_publisher, probe) = recorded(&values);
        prop_assert_eq!(probe.values(), values.clone());
        match values.last() {
            Some(last) => prop_assert_eq!(probe.value(), Ok(*last)),
            None => prop_assert_eq!(probe.value(), Err(ProbeError::EmptyHistory)),
        }
    }

    #[test]
    fn skip_within_bounds_drops_prefix(values in arb_values(), k in 0usize..45) {
        let (_publisher, probe) = recorded(&values);
        if k <= values.len() {
            prop_assert_eq!(probe.skip(k).map(|v| v.values()), Ok(values[k..].to_vec()));
        } else {
            prop_assert_eq!(
                probe.skip(k).map(|v| v.values()),
                Err(ProbeError::InvalidSkip { count: k, size: values.len() })
            );
        }
    }

    #[test]
    fn value_count_passes_only_on_exact_length(values in arb_values(), n in 0usize..45) {
        let (_publisher, probe) = recorded(&values);
        prop_assert_eq!(probe.assert_value_count(n).is_ok(), n == values.len());
    }

    #[test]
    fn only_value_passes_iff_singleton_match(values in arb_values(), x in -50i32..50) {
        let (_publisher, probe) = recorded(&values);
        let expected = values.len() == 1 && values[0] == x;
        prop_assert_eq!(probe.assert_only_value(x).is_ok(), expected);
    }

    #[test]
    fn value_passes_iff_latest_matches(values in arb_values(), x in -50i32..50) {
        let (_publisher, probe) = recorded(&values);
        let expected = values.last() == Some(&x);
        prop_assert_eq!(probe.assert_value(x).is_ok(), expected);
    }

    #[test]
    fn reads_are_idempotent(values in arb_values()) {
        let (_publisher, probe) = recorded(&values);
        prop_assert_eq!(probe.values(), probe.values());
        prop_assert_eq!(probe.get_value(), probe.get_value());
    }

    #[test]
    fn assertions_never_change_history(values in arb_values(), x in -50i32..50) {
        let (_publisher, probe) = recorded(&values);
        let _ = probe.assert_value(x);
        let _ = probe.assert_only_value(x);
        let _ = probe.assert_values(&[x]);
        let _ = probe.assert_value_predicate(|v| *v > x);
        prop_assert_eq!(probe.value_count(), values.len());
        prop_assert_eq!(probe.values(), values);
    }

    #[test]
    fn value_at_matches_indexing(values in arb_values(), i in 0usize..45) {
        let (_publisher, probe) = recorded(&values);
        match values.get(i) {
            Some(v) => prop_assert_eq!(probe.value_at(i), Ok(*v)),
            None => prop_assert_eq!(
                probe.value_at(i),
                Err(ProbeError::InvalidIndex { index: i, size: values.len() })
            ),
        }
    }
}
