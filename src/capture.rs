//! Engine-agnostic data capture
//!
//! [`DataCapture`] is the entry point for callers that should not care which
//! counting engine sits underneath. It defaults to [`RangeCountIndex`].

use crate::counting::RangeCountIndex;
use crate::traits::{StatsEngine, StatsError};

/// Collects observations into a counting engine
///
/// # Example
///
/// ```
/// use rangecount::capture::DataCapture;
/// use rangecount::traits::CountQuery;
///
/// let mut capture = DataCapture::new();
/// for value in [3, 9, 3, 4, 6] {
///     capture.add(value);
/// }
///
/// let stats = capture.build_stats().unwrap();
/// assert_eq!(stats.less_than(4), 2);
/// assert_eq!(stats.greater_than(4), 2);
/// assert_eq!(stats.between(3, 6), 4);
/// ```
///
/// Swapping the engine:
///
/// ```
/// use rangecount::capture::DataCapture;
/// use rangecount::counting::SortedCountIndex;
/// use rangecount::traits::CountQuery;
///
/// let mut capture = DataCapture::with_engine(SortedCountIndex::new());
/// capture.add(i64::MIN);
/// capture.add(i64::MAX);
///
/// let stats = capture.build_stats().unwrap();
/// assert_eq!(stats.between(i64::MIN, 0), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DataCapture<E: StatsEngine = RangeCountIndex> {
    engine: E,
}

impl DataCapture {
    /// Create a capture backed by a default [`RangeCountIndex`]
    pub fn new() -> Self {
        Self::with_engine(RangeCountIndex::new())
    }
}

impl<E: StatsEngine> DataCapture<E> {
    /// Create a capture backed by `engine`
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    /// Record one observation
    pub fn add(&mut self, value: i64) {
        self.engine.add(value);
    }

    /// All observations in insertion order
    pub fn data(&self) -> &[i64] {
        self.engine.data()
    }

    /// Build a queryable summary of the observations captured so far
    pub fn build_stats(&self) -> Result<E::Summary, StatsError> {
        self.engine.finalize()
    }

    /// Get the underlying engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Consume the capture, returning the underlying engine
    pub fn into_engine(self) -> E {
        self.engine
    }
}
