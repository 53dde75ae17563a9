//! Correctness and invariant tests for rangecount
//!
//! These tests verify the counting invariants, snapshot semantics, and edge
//! cases for every engine. They complement the unit tests in each module by
//! checking answers against a brute-force count over the raw observations.

use rangecount::capture::DataCapture;
use rangecount::counting::{RangeCountIndex, SortedCountIndex};
use rangecount::traits::{CountQuery, StatsEngine, StatsError};

/// Deterministic spread of values in `[-100, 100]` with plenty of duplicates
fn scattered(n: i64) -> Vec<i64> {
    (0..n).map(|i| (i * 7919 + 13) % 201 - 100).collect()
}

fn brute_less(data: &[i64], x: i64) -> u64 {
    data.iter().filter(|&&v| v < x).count() as u64
}

fn brute_greater(data: &[i64], x: i64) -> u64 {
    data.iter().filter(|&&v| v > x).count() as u64
}

fn brute_between(data: &[i64], low: i64, high: i64) -> u64 {
    data.iter().filter(|&&v| low <= v && v <= high).count() as u64
}

fn filled<E: StatsEngine>(mut engine: E, data: &[i64]) -> E {
    for &v in data {
        engine.add(v);
    }
    engine
}

/// Checks every query on `summary` against brute force over `data`
fn assert_matches_brute_force<S: CountQuery>(summary: &S, data: &[i64]) {
    assert_eq!(summary.count(), data.len() as u64);

    for x in -110..=110 {
        assert_eq!(summary.less_than(x), brute_less(data, x), "less_than({})", x);
        assert_eq!(
            summary.greater_than(x),
            brute_greater(data, x),
            "greater_than({})",
            x
        );
    }

    for low in (-110..=110).step_by(7) {
        for high in (low..=110).step_by(5) {
            assert_eq!(
                summary.between(low, high),
                brute_between(data, low, high),
                "between({}, {})",
                low,
                high
            );
        }
    }
}

// ============================================================================
// Range Count Index
// ============================================================================

mod range_count_index {
    use super::*;

    #[test]
    fn matches_brute_force() {
        let data = scattered(2_000);
        let summary = filled(RangeCountIndex::new(), &data).finalize().unwrap();
        assert_matches_brute_force(&summary, &data);
    }

    #[test]
    fn less_greater_and_occurrences_sum_to_count() {
        let data = scattered(500);
        let index = filled(RangeCountIndex::new(), &data);
        let summary = index.finalize().unwrap();

        for x in -150..=150 {
            let total = summary.less_than(x) + index.occurrences(x) + summary.greater_than(x);
            assert_eq!(
                total,
                summary.count(),
                "less + occurrences + greater should equal count at x={} but got {}",
                x,
                total
            );
        }
    }

    #[test]
    fn queries_are_monotonic() {
        let data = scattered(300);
        let summary = filled(RangeCountIndex::new(), &data).finalize().unwrap();

        let mut prev_less = 0;
        let mut prev_greater = u64::MAX;
        for x in -120..=120 {
            let less = summary.less_than(x);
            let greater = summary.greater_than(x);
            assert!(less >= prev_less, "less_than decreased at x={}", x);
            assert!(greater <= prev_greater, "greater_than increased at x={}", x);
            prev_less = less;
            prev_greater = greater;
        }
    }

    #[test]
    fn queries_are_idempotent_and_leave_data_alone() {
        let data = scattered(100);
        let index = filled(RangeCountIndex::new(), &data);
        let summary = index.finalize().unwrap();

        for x in [-100, -3, 0, 42, 100] {
            assert_eq!(summary.less_than(x), summary.less_than(x));
            assert_eq!(summary.greater_than(x), summary.greater_than(x));
            assert_eq!(summary.between(x, 100), summary.between(x, 100));
        }
        assert_eq!(index.data(), &data[..]);
    }

    #[test]
    fn exercise_scenario() {
        let summary = filled(RangeCountIndex::new(), &[3, 9, 3, 4, 6])
            .finalize()
            .unwrap();

        assert_eq!(summary.less_than(4), 2);
        assert_eq!(summary.greater_than(4), 2);
        assert_eq!(summary.between(3, 6), 4);

        assert_eq!(summary.less_than(3), 0);
        assert_eq!(summary.greater_than(9), 0);
        assert_eq!(summary.less_than(10), 5);
        assert_eq!(summary.greater_than(0), 5);
    }

    #[test]
    fn empty_answers_zero_everywhere() {
        let summary = RangeCountIndex::new().finalize().unwrap();
        for x in [i64::MIN, -1, 0, 1, i64::MAX] {
            assert_eq!(summary.less_than(x), 0);
            assert_eq!(summary.greater_than(x), 0);
            assert_eq!(summary.between(x, i64::MAX), 0);
        }
    }

    #[test]
    fn zero_as_first_observation_is_a_real_bound() {
        let index = filled(RangeCountIndex::new(), &[0, 5, 2]);
        assert_eq!(index.min(), Some(0));
        assert_eq!(index.max(), Some(5));

        let summary = index.finalize().unwrap();
        assert_eq!(summary.less_than(1), 1);
        assert_eq!(summary.greater_than(-1), 3);
    }

    #[test]
    fn summary_ignores_later_observations() {
        let mut index = filled(RangeCountIndex::new(), &[1, 2, 3]);
        let summary = index.finalize().unwrap();

        index.add(0);
        index.add(10);

        assert_eq!(summary.count(), 3);
        assert_eq!(summary.less_than(100), 3);
        assert_eq!(summary.greater_than(-100), 3);
    }

    #[test]
    fn inverted_range_is_empty() {
        let summary = filled(RangeCountIndex::new(), &[5]).finalize().unwrap();
        assert_eq!(summary.between(6, 4), 0);
        assert_eq!(summary.between(5, 5), 1);
    }

    #[test]
    fn wide_sparse_range_is_rejected() {
        let index = filled(RangeCountIndex::with_max_span(1_000), &[-1_000_000, 1_000_000]);
        assert_eq!(
            index.finalize(),
            Err(StatsError::SpanTooWide {
                span: 2_000_001,
                limit: 1_000,
            })
        );
    }

    #[test]
    fn merge_equivalent_to_sequential_add() {
        let data = scattered(1_000);
        let (left, right) = data.split_at(400);

        let mut merged = filled(RangeCountIndex::new(), left);
        merged.merge(&filled(RangeCountIndex::new(), right)).unwrap();
        let sequential = filled(RangeCountIndex::new(), &data);

        assert_eq!(merged.data(), sequential.data());
        assert_eq!(merged.finalize().unwrap(), sequential.finalize().unwrap());
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let data = scattered(50);
        let mut index = filled(RangeCountIndex::new(), &data);
        let before = index.finalize().unwrap();

        index.merge(&RangeCountIndex::new()).unwrap();

        assert_eq!(index.finalize().unwrap(), before);
    }

    #[test]
    fn clear_resets_completely() {
        let mut index = filled(RangeCountIndex::new(), &scattered(100));
        index.clear();

        assert!(index.is_empty());
        assert!(index.data().is_empty());
        assert_eq!(index.bounds(), None);
        assert!(index.finalize().unwrap().is_empty());

        index.add(-7);
        assert_eq!(index.min(), Some(-7));
        assert_eq!(index.max(), Some(-7));
    }
}

// ============================================================================
// Sorted Count Index
// ============================================================================

mod sorted_count_index {
    use super::*;

    #[test]
    fn matches_brute_force() {
        let data = scattered(2_000);
        let summary = filled(SortedCountIndex::new(), &data).finalize();
        assert_matches_brute_force(&summary, &data);
    }

    #[test]
    fn agrees_with_range_table() {
        let data = scattered(777);
        let table = filled(RangeCountIndex::new(), &data).finalize().unwrap();
        let sorted = filled(SortedCountIndex::new(), &data).finalize();

        for x in -120..=120 {
            assert_eq!(table.less_than(x), sorted.less_than(x), "less_than({})", x);
            assert_eq!(
                table.greater_than(x),
                sorted.greater_than(x),
                "greater_than({})",
                x
            );
        }
    }

    #[test]
    fn handles_ranges_the_table_rejects() {
        let data = [i64::MIN, -1, 0, 0, 1, i64::MAX];
        let summary = filled(SortedCountIndex::new(), &data).finalize();

        assert_eq!(summary.less_than(0), 2);
        assert_eq!(summary.greater_than(0), 2);
        assert_eq!(summary.between(-1, 1), 4);
        assert_eq!(summary.between(i64::MIN, i64::MAX), 6);
    }

    #[test]
    fn merge_equivalent_to_sequential_add() {
        let data = scattered(600);
        let (left, right) = data.split_at(250);

        let mut merged = filled(SortedCountIndex::new(), left);
        merged.merge(&filled(SortedCountIndex::new(), right)).unwrap();

        assert_eq!(
            merged.finalize(),
            filled(SortedCountIndex::new(), &data).finalize()
        );
    }

    #[test]
    fn empty_answers_zero_everywhere() {
        let summary = SortedCountIndex::new().finalize();
        assert_eq!(summary.less_than(i64::MAX), 0);
        assert_eq!(summary.greater_than(i64::MIN), 0);
        assert_eq!(summary.between(i64::MIN, i64::MAX), 0);
    }
}

// ============================================================================
// Data Capture
// ============================================================================

mod data_capture {
    use super::*;

    #[test]
    fn default_engine_is_range_table() {
        let mut capture = DataCapture::new();
        for v in [3, 9, 3, 4, 6] {
            capture.add(v);
        }

        let stats = capture.build_stats().unwrap();
        assert_eq!(stats.span(), 7);
        assert_eq!(stats.between(3, 6), 4);
        assert_eq!(capture.data(), &[3, 9, 3, 4, 6]);
    }

    #[test]
    fn generic_over_engines() {
        fn answers<E: StatsEngine>(engine: E) -> (u64, u64, u64) {
            let mut capture = DataCapture::with_engine(engine);
            for v in scattered(300) {
                capture.add(v);
            }
            let stats = capture.build_stats().unwrap();
            (stats.less_than(0), stats.greater_than(0), stats.between(-50, 50))
        }

        assert_eq!(
            answers(RangeCountIndex::new()),
            answers(SortedCountIndex::new())
        );
    }
}
