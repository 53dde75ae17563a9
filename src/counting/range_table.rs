//! Dense prefix-count table over the observed value range
//!
//! [`RangeCountIndex`] accumulates integer observations and, on
//! [`finalize`](RangeCountIndex::finalize), walks every integer between the
//! observed minimum and maximum once to record how many observations fall
//! strictly below and strictly above it. Queries on the resulting
//! [`RangeCountSummary`] are then O(1).
//!
//! # Cost
//!
//! Finalize is O(max - min) in both time and memory, independent of how many
//! observations were added. A handful of values spread across a wide range is
//! the worst case; the index refuses to build tables larger than its
//! configured span limit (see [`RangeCountIndex::with_max_span`]). For sparse,
//! wide data prefer [`SortedCountIndex`](super::SortedCountIndex).

use super::observations::Observations;
use crate::traits::{Bounds, CountQuery, StatsEngine, StatsError};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Helper macro for format! in both std and no_std
macro_rules! fmt {
    ($($arg:tt)*) => {{
        #[cfg(feature = "std")]
        { format!($($arg)*) }
        #[cfg(not(feature = "std"))]
        { alloc::format!($($arg)*) }
    }};
}

/// Default limit on the number of table entries built by finalize (16M)
pub const DEFAULT_MAX_SPAN: u64 = 1 << 24;

/// Observation counts on either side of a value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    /// Observations strictly less than the value
    pub less: u64,
    /// Observations strictly greater than the value
    pub greater: u64,
}

/// Accumulator answering less-than / greater-than / between counts
///
/// # Example
///
/// ```
/// use rangecount::counting::RangeCountIndex;
/// use rangecount::traits::CountQuery;
///
/// let mut index = RangeCountIndex::new();
/// for value in [3, 9, 3, 4, 6] {
///     index.add(value);
/// }
///
/// let summary = index.finalize().unwrap();
/// assert_eq!(summary.less_than(4), 2);
/// assert_eq!(summary.greater_than(4), 2);
/// assert_eq!(summary.between(3, 6), 4);
/// ```
///
/// # Snapshots
///
/// A summary owns its table. Values added after `finalize` only show up in
/// the next summary:
///
/// ```
/// use rangecount::counting::RangeCountIndex;
/// use rangecount::traits::CountQuery;
///
/// let mut index = RangeCountIndex::new();
/// index.add(1);
/// let before = index.finalize().unwrap();
///
/// index.add(2);
/// let after = index.finalize().unwrap();
///
/// assert_eq!(before.count(), 1);
/// assert_eq!(after.count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeCountIndex {
    observations: Observations,
    /// Largest number of integers finalize will tabulate
    max_span: u64,
}

impl Default for RangeCountIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeCountIndex {
    /// Create an empty index with [`DEFAULT_MAX_SPAN`]
    pub fn new() -> Self {
        Self::with_max_span(DEFAULT_MAX_SPAN)
    }

    /// Create an empty index that tabulates at most `max_span` integers
    ///
    /// # Panics
    ///
    /// Panics if `max_span` is zero.
    pub fn with_max_span(max_span: u64) -> Self {
        assert!(max_span > 0, "max_span must be positive");

        Self {
            observations: Observations::new(),
            max_span,
        }
    }

    /// Get the span limit
    pub fn max_span(&self) -> u64 {
        self.max_span
    }

    /// Record one observation
    pub fn add(&mut self, value: i64) {
        self.observations.add(value);
    }

    /// All observations in insertion order
    pub fn data(&self) -> &[i64] {
        self.observations.history()
    }

    /// Number of times `value` was added
    pub fn occurrences(&self, value: i64) -> u64 {
        self.observations.occurrences(value)
    }

    /// Observed min/max, `None` before the first observation
    pub fn bounds(&self) -> Option<Bounds> {
        self.observations.bounds()
    }

    /// Get minimum value seen
    pub fn min(&self) -> Option<i64> {
        self.bounds().map(|b| b.min)
    }

    /// Get maximum value seen
    pub fn max(&self) -> Option<i64> {
        self.bounds().map(|b| b.max)
    }

    /// Get the number of observations
    pub fn len(&self) -> u64 {
        self.observations.count()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build the prefix-count table for the current observations
    ///
    /// Walks `min..=max` in order. For each integer its own occurrences are
    /// removed from the running "greater" count before recording, and added
    /// to the running "less" count after, so equal values land on neither
    /// side.
    ///
    /// An empty index yields an empty summary that answers 0 to every query.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::SpanTooWide`] if `max - min + 1` exceeds the
    /// configured span limit.
    pub fn finalize(&self) -> Result<RangeCountSummary, StatsError> {
        let Some(bounds) = self.observations.bounds() else {
            return Ok(RangeCountSummary::empty());
        };

        let span = bounds.span();
        let len = usize::try_from(span)
            .ok()
            .filter(|_| span <= u128::from(self.max_span))
            .ok_or(StatsError::SpanTooWide {
                span,
                limit: self.max_span,
            })?;

        let count = self.observations.count();
        let mut table = Vec::with_capacity(len);
        let mut distinct = self.observations.distinct().peekable();
        let mut less = 0u64;
        let mut greater = count;

        for i in bounds.min..=bounds.max {
            let occ = distinct.next_if(|&(v, _)| v == i).map_or(0, |(_, occ)| occ);
            greater -= occ;
            table.push(Partition { less, greater });
            less += occ;
        }

        tracing::debug!(
            min = bounds.min,
            max = bounds.max,
            count,
            entries = table.len(),
            "Built range count table."
        );

        Ok(RangeCountSummary {
            bounds: Some(bounds),
            count,
            table,
        })
    }
}

impl StatsEngine for RangeCountIndex {
    type Summary = RangeCountSummary;

    fn add(&mut self, value: i64) {
        RangeCountIndex::add(self, value);
    }

    fn data(&self) -> &[i64] {
        RangeCountIndex::data(self)
    }

    fn finalize(&self) -> Result<Self::Summary, StatsError> {
        RangeCountIndex::finalize(self)
    }

    fn merge(&mut self, other: &Self) -> Result<(), StatsError> {
        if self.max_span != other.max_span {
            return Err(StatsError::IncompatibleConfig {
                expected: fmt!("max_span={}", self.max_span),
                found: fmt!("max_span={}", other.max_span),
            });
        }

        tracing::trace!(
            count = self.len(),
            incoming = other.len(),
            "Merging range count index."
        );
        self.observations.merge(&other.observations);
        Ok(())
    }

    fn clear(&mut self) {
        self.observations.clear();
    }

    fn count(&self) -> u64 {
        self.len()
    }
}

/// Immutable prefix-count table produced by [`RangeCountIndex::finalize`]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RangeCountSummary {
    /// Bounds of the summarized observations, `None` if there were none
    bounds: Option<Bounds>,
    /// Number of summarized observations
    count: u64,
    /// One entry per integer in `[min, max]`, indexed by `value - min`
    table: Vec<Partition>,
}

impl RangeCountSummary {
    fn empty() -> Self {
        Self {
            bounds: None,
            count: 0,
            table: Vec::new(),
        }
    }

    /// Bounds of the summarized observations
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Get minimum summarized value
    pub fn min(&self) -> Option<i64> {
        self.bounds.map(|b| b.min)
    }

    /// Get maximum summarized value
    pub fn max(&self) -> Option<i64> {
        self.bounds.map(|b| b.max)
    }

    /// Number of table entries
    pub fn span(&self) -> usize {
        self.table.len()
    }

    /// Precomputed partition for `x`, `None` outside `[min, max]`
    pub fn partition(&self, x: i64) -> Option<Partition> {
        let bounds = self.bounds?;
        if !bounds.contains(x) {
            return None;
        }
        self.table.get(Self::offset(bounds, x)).copied()
    }

    /// Table position of `x`; caller guarantees `x` lies within `bounds`
    fn offset(bounds: Bounds, x: i64) -> usize {
        (i128::from(x) - i128::from(bounds.min)) as usize
    }
}

impl CountQuery for RangeCountSummary {
    fn count(&self) -> u64 {
        self.count
    }

    fn less_than(&self, x: i64) -> u64 {
        let Some(bounds) = self.bounds else {
            return 0;
        };

        if x <= bounds.min {
            0
        } else if x > bounds.max {
            self.count
        } else {
            self.table[Self::offset(bounds, x)].less
        }
    }

    fn greater_than(&self, x: i64) -> u64 {
        let Some(bounds) = self.bounds else {
            return 0;
        };

        if x >= bounds.max {
            0
        } else if x < bounds.min {
            self.count
        } else {
            self.table[Self::offset(bounds, x)].greater
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
