//! Core traits for counting engines
//!
//! Every engine implements [`StatsEngine`] for the accumulate phase and hands
//! out a summary implementing [`CountQuery`] for the query phase. The two
//! phases are separate values: a summary owns its data and never observes
//! observations added after it was built.

use core::fmt::Debug;

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Error raised by a counting engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    /// The observed value range is larger than the engine is allowed to tabulate
    #[error(
        "value span {span} exceeds the configured limit of {limit}; \
         raise the limit or use the sorted engine"
    )]
    SpanTooWide {
        /// Number of integers in `[min, max]`
        span: u128,
        /// Configured maximum span
        limit: u64,
    },
    /// Engines have incompatible configurations and cannot be merged
    #[error("incompatible config: expected {expected}, found {found}")]
    IncompatibleConfig {
        expected: String,
        found: String,
    },
}

/// Inclusive bounds of the observed values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Smallest value observed
    pub min: i64,
    /// Largest value observed
    pub max: i64,
}

impl Bounds {
    /// Bounds of a single observation
    pub fn single(value: i64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Widen the bounds to include `value`
    pub fn include(&mut self, value: i64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Smallest bounds covering both `self` and `other`
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Check if a value falls within bounds
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Number of integers in `[min, max]`
    ///
    /// Computed in `u128` so the full `i64` domain does not overflow.
    pub fn span(&self) -> u128 {
        (i128::from(self.max) - i128::from(self.min) + 1) as u128
    }
}

/// Query side of a counting engine
///
/// All counts are exact. Implementations must satisfy, for every `x`,
/// `less_than(x) + occurrences(x) + greater_than(x) == count()`.
pub trait CountQuery: Debug {
    /// Number of observations summarized
    fn count(&self) -> u64;

    /// Number of observations strictly less than `x`
    fn less_than(&self, x: i64) -> u64;

    /// Number of observations strictly greater than `x`
    fn greater_than(&self, x: i64) -> u64;

    /// Number of observations in the inclusive range `[low, high]`
    ///
    /// An inverted range (`low > high`) is empty and yields 0.
    fn between(&self, low: i64, high: i64) -> u64 {
        if low > high {
            return 0;
        }
        self.count() - self.less_than(low) - self.greater_than(high)
    }

    /// Check if the summary holds no observations
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Accumulate side of a counting engine
pub trait StatsEngine: Clone + Debug {
    /// Queryable snapshot produced by [`finalize`](Self::finalize)
    type Summary: CountQuery;

    /// Record one observation
    fn add(&mut self, value: i64);

    /// All observations in insertion order
    fn data(&self) -> &[i64];

    /// Build a queryable summary over the observations recorded so far
    ///
    /// The accumulation state is left untouched, so more values can be added
    /// and a fresh summary built later.
    fn finalize(&self) -> Result<Self::Summary, StatsError>;

    /// Merge another engine's observations into this one
    ///
    /// Returns an error if the engines are incompatible
    fn merge(&mut self, other: &Self) -> Result<(), StatsError>;

    /// Reset engine to empty state
    fn clear(&mut self);

    /// Number of observations recorded
    fn count(&self) -> u64;

    /// Check if engine is empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
