//! Exact rank counting over integer observations
//!
//! Engines in this module accumulate integers and produce an immutable
//! summary answering "how many observations are below / above / within".
//!
//! # Engines
//!
//! - [`RangeCountIndex`]: dense table over `[min, max]`, O(1) queries,
//!   O(max - min) finalize
//! - [`SortedCountIndex`]: sorted snapshot, O(log n) queries, O(n log n)
//!   finalize
//!
//! # Example
//!
//! ```
//! use rangecount::counting::RangeCountIndex;
//! use rangecount::traits::CountQuery;
//!
//! let mut index = RangeCountIndex::new();
//! for value in [3, 9, 3, 4, 6] {
//!     index.add(value);
//! }
//!
//! let summary = index.finalize().unwrap();
//! println!("below 4: {}", summary.less_than(4));
//! println!("in [3, 6]: {}", summary.between(3, 6));
//! ```

mod observations;
mod range_table;
mod sorted;

pub use range_table::{Partition, RangeCountIndex, RangeCountSummary, DEFAULT_MAX_SPAN};
pub use sorted::{SortedCountIndex, SortedCountSummary};
