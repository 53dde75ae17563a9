//! Raw observation store shared by the counting engines

use crate::traits::Bounds;

#[cfg(feature = "std")]
use std::{collections::BTreeMap, vec::Vec};

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, vec::Vec};

/// Multiset of integer observations
///
/// Keeps the insertion-ordered history next to a value → occurrence map, and
/// tracks the observed bounds. Bounds are `None` until the first observation,
/// so a genuine first value of 0 is never mistaken for "unset".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Observations {
    /// Values in insertion order
    history: Vec<i64>,
    /// Occurrence count per distinct value
    occurrences: BTreeMap<i64, u64>,
    /// Observed min/max
    bounds: Option<Bounds>,
    /// Total number of observations, multiplicities included
    count: u64,
}

impl Observations {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, value: i64) {
        match &mut self.bounds {
            Some(bounds) => bounds.include(value),
            None => self.bounds = Some(Bounds::single(value)),
        }

        *self.occurrences.entry(value).or_insert(0) += 1;
        self.count += 1;
        self.history.push(value);
    }

    pub(crate) fn merge(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }

        self.bounds = match (self.bounds, other.bounds) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (a, b) => a.or(b),
        };
        for (&value, &occ) in &other.occurrences {
            *self.occurrences.entry(value).or_insert(0) += occ;
        }
        self.count += other.count;
        self.history.extend_from_slice(&other.history);
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::new();
    }

    pub(crate) fn history(&self) -> &[i64] {
        &self.history
    }

    pub(crate) fn occurrences(&self, value: i64) -> u64 {
        self.occurrences.get(&value).copied().unwrap_or(0)
    }

    /// Distinct values with their occurrence counts, ascending
    pub(crate) fn distinct(&self) -> impl Iterator<Item = (i64, u64)> + '_ {
        self.occurrences.iter().map(|(&v, &occ)| (v, occ))
    }

    pub(crate) fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub(crate) fn count(&self) -> u64 {
        self.count
    }
}
