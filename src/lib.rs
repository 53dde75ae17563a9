//! # rangecount
//!
//! Exact rank counting for streams of integers.
//!
//! Feed integer observations into an engine, finalize it once, then ask how
//! many observations are below, above, or within a range. Answers are exact.
//!
//! ## Features
//!
//! - **O(1) queries**: [`RangeCountIndex`] tabulates the observed value range
//! - **Sparse-friendly variant**: [`SortedCountIndex`] answers in O(log n) with
//!   memory proportional to the number of observations
//! - **Snapshots**: a summary owns its data and never changes after it is built
//! - **Mergeable**: engines combine observations gathered separately
//! - **Shell**: a line-oriented command shell (`rangecount` binary)
//!
//! ## Quick Start
//!
//! ```rust
//! use rangecount::prelude::*;
//!
//! let mut index = RangeCountIndex::new();
//! for value in [3, 9, 3, 4, 6] {
//!     index.add(value);
//! }
//!
//! let summary = index.finalize().unwrap();
//! assert_eq!(summary.less_than(4), 2);    // 3, 3
//! assert_eq!(summary.greater_than(4), 2); // 9, 6
//! assert_eq!(summary.between(3, 6), 4);   // 3, 3, 4, 6
//! ```
//!
//! ## Choosing an Engine
//!
//! All engines implement [`StatsEngine`](traits::StatsEngine), so callers can
//! stay generic through [`DataCapture`](capture::DataCapture):
//!
//! ```rust
//! use rangecount::capture::DataCapture;
//! use rangecount::counting::SortedCountIndex;
//! use rangecount::traits::CountQuery;
//!
//! let mut capture = DataCapture::with_engine(SortedCountIndex::new());
//! capture.add(-1_000_000_000_000);
//! capture.add(1_000_000_000_000);
//!
//! let stats = capture.build_stats().unwrap();
//! assert_eq!(stats.greater_than(0), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support; required by `shell`
//! - `serde`: Enable serialization of bounds and summaries
//! - `cli`: Build the `rangecount` shell binary

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

pub mod capture;
pub mod counting;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod shell;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::capture::DataCapture;
    pub use crate::counting::{RangeCountIndex, SortedCountIndex};
}

pub use capture::DataCapture;
pub use counting::{RangeCountIndex, SortedCountIndex};
