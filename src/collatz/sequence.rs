//! Trajectory generation for the Collatz map.
//!
//! A trajectory starts at a positive integer and repeatedly applies
//! `n -> n / 2` (even) or `n -> 3n + 1` (odd) until it reaches 1. Starting
//! values are `u64`; trajectory values are `u128` so that paths climbing past
//! `u64::MAX` still complete. A transition that would leave `u128` is reported as
//! [`Error::Overflow`] rather than wrapping.

use serde::Serialize;

use crate::error::{Error, Result};

/// Applies a single Collatz transition.
///
/// Returns `None` if `3n + 1` does not fit in a `u128`.
pub fn next_value(n: u128) -> Option<u128> {
    if n % 2 == 0 {
        Some(n / 2)
    } else {
        n.checked_mul(3)?.checked_add(1)
    }
}

/// Lazy iterator over the values of a trajectory, starting value included.
///
/// Yields `Err(Error::Overflow)` once and then stops if a transition
/// overflows.
#[derive(Debug, Clone)]
pub struct Trajectory {
    next: Option<u128>,
}

impl Trajectory {
    pub fn new(start: u128) -> Result<Self> {
        if start == 0 {
            return Err(Error::InvalidInput(
                "starting value must be a positive integer".to_string(),
            ));
        }
        Ok(Self { next: Some(start) })
    }
}

impl Iterator for Trajectory {
    type Item = Result<u128>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.next.take()?;
        if value != 1 {
            match next_value(value) {
                Some(following) => self.next = Some(following),
                None => return Some(Err(Error::Overflow { value })),
            }
        }
        Some(Ok(value))
    }
}

/// A complete trajectory: begins with the starting value, ends with 1.
///
/// Only constructed by [`generate`] or by validating a list with
/// `TryFrom<Vec<u128>>`, so every instance obeys the transition rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sequence(Vec<u128>);

impl Sequence {
    pub fn start(&self) -> u128 {
        self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a trajectory holds at least its starting value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of transitions applied.
    pub fn steps(&self) -> usize {
        self.0.len() - 1
    }

    pub fn max_value(&self) -> u128 {
        self.0.iter().copied().max().unwrap_or(1)
    }

    pub fn as_slice(&self) -> &[u128] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u128> {
        self.0.iter()
    }
}

impl AsRef<[u128]> for Sequence {
    fn as_ref(&self) -> &[u128] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a u128;
    type IntoIter = std::slice::Iter<'a, u128>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<Vec<u128>> for Sequence {
    type Error = Error;

    fn try_from(values: Vec<u128>) -> Result<Self> {
        match values.first() {
            None => {
                return Err(Error::InvalidInput(
                    "a sequence needs at least one value".to_string(),
                ))
            }
            Some(0) => {
                return Err(Error::InvalidInput(
                    "starting value must be a positive integer".to_string(),
                ))
            }
            Some(_) => {}
        }

        if values.last() != Some(&1) {
            return Err(Error::InvalidInput(
                "a sequence must end with 1".to_string(),
            ));
        }

        for (index, pair) in values.windows(2).enumerate() {
            if pair[0] == 1 || next_value(pair[0]) != Some(pair[1]) {
                return Err(Error::InvalidInput(format!(
                    "value {} at position {} does not follow {}",
                    pair[1],
                    index + 1,
                    pair[0]
                )));
            }
        }

        Ok(Self(values))
    }
}

/// Generates the full trajectory of `n`.
///
/// No iteration bound is applied; the Collatz conjecture is assumed to hold
/// for every 64-bit starting value.
pub fn generate(n: u64) -> Result<Sequence> {
    let values = Trajectory::new(u128::from(n))?.collect::<Result<Vec<u128>>>()?;
    Ok(Sequence(values))
}
