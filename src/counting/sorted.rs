//! Sorted-array counting engine
//!
//! Same interface as the dense table, but finalize sorts a copy of the
//! observations instead of tabulating the value range. Costs O(n log n) to
//! finalize and O(log n) per query, and memory follows the number of
//! observations rather than `max - min`.

use super::observations::Observations;
use crate::traits::{Bounds, CountQuery, StatsEngine, StatsError};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Accumulator whose summary answers queries by binary search
///
/// # Example
///
/// ```
/// use rangecount::counting::SortedCountIndex;
/// use rangecount::traits::CountQuery;
///
/// let mut index = SortedCountIndex::new();
/// index.add(-1_000_000_000);
/// index.add(0);
/// index.add(1_000_000_000);
///
/// let summary = index.finalize();
/// assert_eq!(summary.less_than(0), 1);
/// assert_eq!(summary.between(-5, 1_000_000_000), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortedCountIndex {
    observations: Observations,
}

impl SortedCountIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
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

    /// Build a sorted snapshot of the current observations
    pub fn finalize(&self) -> SortedCountSummary {
        let mut sorted = self.data().to_vec();
        sorted.sort_unstable();

        tracing::debug!(count = sorted.len(), "Built sorted count summary.");

        SortedCountSummary { sorted }
    }
}

impl StatsEngine for SortedCountIndex {
    type Summary = SortedCountSummary;

    fn add(&mut self, value: i64) {
        SortedCountIndex::add(self, value);
    }

    fn data(&self) -> &[i64] {
        SortedCountIndex::data(self)
    }

    fn finalize(&self) -> Result<Self::Summary, StatsError> {
        Ok(SortedCountIndex::finalize(self))
    }

    fn merge(&mut self, other: &Self) -> Result<(), StatsError> {
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

/// Immutable sorted snapshot produced by [`SortedCountIndex::finalize`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SortedCountSummary {
    sorted: Vec<i64>,
}

impl SortedCountSummary {
    /// Summarized values in ascending order
    pub fn values(&self) -> &[i64] {
        &self.sorted
    }

    /// Get minimum summarized value
    pub fn min(&self) -> Option<i64> {
        self.sorted.first().copied()
    }

    /// Get maximum summarized value
    pub fn max(&self) -> Option<i64> {
        self.sorted.last().copied()
    }
}

impl CountQuery for SortedCountSummary {
    fn count(&self) -> u64 {
        self.sorted.len() as u64
    }

    fn less_than(&self, x: i64) -> u64 {
        self.sorted.partition_point(|&v| v < x) as u64
    }

    fn greater_than(&self, x: i64) -> u64 {
        (self.sorted.len() - self.sorted.partition_point(|&v| v <= x)) as u64
    }
}
