//! Property-based tests for quartile summaries

use petal_stats::{quantile_sorted, sorted_finite, GroupSummary, GroupedSummary};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
struct Obs {
    kind: String,
    value: f64,
}

fn observations() -> impl Strategy<Value = Vec<Obs>> {
    prop::collection::vec(("[a-d]{0,2}", -1000.0f64..1000.0), 1..200).prop_map(|rows| {
        rows.into_iter()
            .map(|(kind, value)| Obs { kind, value })
            .collect()
    })
}

proptest! {
    #[test]
    fn test_quartiles_are_ordered(values in prop::collection::vec(-1e6f64..1e6, 1..300)) {
        let s = GroupSummary::from_values(&values).unwrap();
        prop_assert!(s.q1 <= s.median, "q1 {} > median {}", s.q1, s.median);
        prop_assert!(s.median <= s.q3, "median {} > q3 {}", s.median, s.q3);
        prop_assert!(s.iqr() >= 0.0);
    }

    #[test]
    fn test_quartiles_within_data_range(values in prop::collection::vec(-1e6f64..1e6, 1..300)) {
        let sorted = sorted_finite(&values);
        let s = GroupSummary::from_sorted(&sorted).unwrap();
        prop_assert!(s.q1 >= sorted[0]);
        prop_assert!(s.q3 <= sorted[sorted.len() - 1]);
    }

    #[test]
    fn test_quantile_monotone_in_p(
        values in prop::collection::vec(-1e3f64..1e3, 2..100),
        p in 0.0f64..1.0,
        q in 0.0f64..1.0,
    ) {
        let sorted = sorted_finite(&values);
        let (lo, hi) = if p <= q { (p, q) } else { (q, p) };
        prop_assert!(quantile_sorted(&sorted, lo).unwrap() <= quantile_sorted(&sorted, hi).unwrap());
    }

    #[test]
    fn test_single_value_collapses(v in -1e6f64..1e6) {
        let s = GroupSummary::from_values(&[v]).unwrap();
        prop_assert_eq!(s.q1, v);
        prop_assert_eq!(s.median, v);
        prop_assert_eq!(s.q3, v);
    }

    #[test]
    fn test_group_count_matches_distinct_keys(rows in observations()) {
        let summary = GroupedSummary::compute(&rows, |o| o.kind.as_str(), |o| o.value).unwrap();
        let distinct: HashSet<&str> = rows.iter().map(|o| o.kind.as_str()).collect();
        prop_assert_eq!(summary.len(), distinct.len());

        let total: usize = summary.iter().map(|(_, s)| s.count).sum();
        prop_assert_eq!(total, rows.len());
    }

    #[test]
    fn test_grouping_is_deterministic(rows in observations()) {
        let a = GroupedSummary::compute(&rows, |o| o.kind.as_str(), |o| o.value).unwrap();
        let b = GroupedSummary::compute(&rows, |o| o.kind.as_str(), |o| o.value).unwrap();
        prop_assert_eq!(a, b);
    }
}
