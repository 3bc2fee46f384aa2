//! Collatz (Syracuse) computation core.
//!
//! - `sequence` - trajectory generation
//! - `statistics` - mean, population std, max and min over a trajectory
//! - `batch` - trajectories for an inclusive range of starting values
//!
//! [`compute_single`] and [`compute_batch`] are the validated entry points
//! used by the HTTP API and the CLI. Every call works on freshly allocated
//! data; nothing is shared or cached between calls.

pub mod batch;
pub mod sequence;
pub mod statistics;

pub use batch::{run_batch, BatchEntry, BatchRange, BatchResult};
pub use sequence::{generate, next_value, Sequence, Trajectory};
pub use statistics::{summarize, Statistics};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Trajectory of a single starting value with its summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceResult {
    pub sequence: Sequence,
    pub steps: usize,
    pub max_value: u128,
    pub statistics: Statistics,
}

impl SequenceResult {
    pub fn from_sequence(sequence: Sequence) -> Self {
        let statistics = summarize(&sequence);
        Self {
            steps: sequence.steps(),
            max_value: statistics.max,
            statistics,
            sequence,
        }
    }
}

/// Computes the trajectory and statistics of `start_number`.
///
/// Rejects values that are not strictly positive before generating.
pub fn compute_single(start_number: i64) -> Result<SequenceResult> {
    if start_number <= 0 {
        return Err(Error::InvalidInput(format!(
            "start_number must be greater than 0, got {start_number}"
        )));
    }

    let sequence = generate(start_number as u64)?;
    debug!(
        "Computed sequence for {} ({} steps)",
        start_number,
        sequence.steps()
    );
    Ok(SequenceResult::from_sequence(sequence))
}

/// Computes the trajectories of every value in `[start, end]`.
pub fn compute_batch(start: i64, end: i64) -> Result<BatchResult> {
    run_batch(start, end)
}
