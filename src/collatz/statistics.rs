//! Descriptive statistics over a trajectory.

use serde::{Deserialize, Serialize};

use super::sequence::Sequence;

/// Summary of the values visited by a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub mean: f64,
    /// Population standard deviation (divisor is the number of values).
    pub std: f64,
    pub max: u128,
    pub min: u128,
}

/// Computes mean, population standard deviation, max and min.
///
/// Uses two passes over the values: one for the mean, one for the sum of
/// squared deviations.
pub fn summarize(seq: &Sequence) -> Statistics {
    let values = seq.as_slice();
    let count = values.len() as f64;

    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / count;
    let variance = values
        .iter()
        .map(|&v| {
            let deviation = v as f64 - mean;
            deviation * deviation
        })
        .sum::<f64>()
        / count;

    Statistics {
        mean,
        std: variance.sqrt(),
        max: values.iter().copied().max().unwrap_or(1),
        min: values.iter().copied().min().unwrap_or(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collatz::sequence::generate;

    #[test]
    fn test_summarize_single_value() {
        let stats = summarize(&generate(1).unwrap());
        assert_eq!(stats.mean, 1.0);
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.max, 1);
        assert_eq!(stats.min, 1);
    }

    #[test]
    fn test_summarize_six() {
        let seq = Sequence::try_from(vec![6, 3, 10, 5, 16, 8, 4, 2, 1]).unwrap();
        let stats = summarize(&seq);
        assert_eq!(stats.min, 1);
        assert_eq!(stats.max, 16);
        assert!((stats.mean - 55.0 / 9.0).abs() < 1e-12);
        assert!((stats.std - 4.408185427750527).abs() < 1e-9);
    }

    #[test]
    fn test_population_not_sample_deviation() {
        // [2, 1]: population std is 0.5, sample std would be ~0.707
        let stats = summarize(&generate(2).unwrap());
        assert!((stats.mean - 1.5).abs() < 1e-12);
        assert!((stats.std - 0.5).abs() < 1e-12);
    }
}
