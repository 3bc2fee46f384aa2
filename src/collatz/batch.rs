//! Trajectories for a contiguous range of starting values.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::sequence::{generate, Sequence};
use crate::error::{Error, Result};

/// Per-value record in a batch. Statistics are not computed in batch mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub sequence: Sequence,
    pub steps: usize,
    pub max_value: u128,
}

impl BatchEntry {
    fn from_sequence(sequence: Sequence) -> Self {
        Self {
            steps: sequence.steps(),
            max_value: sequence.max_value(),
            sequence,
        }
    }
}

/// Batch results keyed by starting value, iterated in ascending order.
///
/// Serializes as a JSON object whose keys are the decimal starting values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BatchResult(BTreeMap<u64, BatchEntry>);

impl BatchResult {
    pub fn get(&self, n: u64) -> Option<&BatchEntry> {
        self.0.get(&n)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &BatchEntry)> {
        self.0.iter().map(|(n, entry)| (*n, entry))
    }
}

/// Inclusive range of starting values that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchRange {
    pub start: u64,
    pub end: u64,
}

impl BatchRange {
    /// Requires `start >= 1` and `end >= start`.
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start < 1 || end < start {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self {
            start: start as u64,
            end: end as u64,
        })
    }

    /// Number of starting values in the range.
    pub fn width(&self) -> u64 {
        self.end - self.start + 1
    }
}

/// Generates the trajectory of every value in `[start, end]`.
///
/// The range is validated before any generation starts, so an invalid range
/// never yields a partial result.
pub fn run_batch(start: i64, end: i64) -> Result<BatchResult> {
    let range = BatchRange::new(start, end)?;
    debug!(
        "Running batch {}..={} ({} values)",
        range.start,
        range.end,
        range.width()
    );

    let mut results = BTreeMap::new();
    for n in range.start..=range.end {
        results.insert(n, BatchEntry::from_sequence(generate(n)?));
    }
    Ok(BatchResult(results))
}
