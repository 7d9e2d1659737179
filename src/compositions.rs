//! Counting ordered compositions of an integer.
//!
//! Given a target and a set of allowed parts, count the ways to write the
//! target as an ordered sum of parts, repetition allowed: for target 4 and
//! parts {1, 2, 3} there are seven (1+1+1+1, 1+1+2, 1+2+1, 1+3, 2+1+1,
//! 2+2, 3+1).
//!
//! One-dimensional DP over partial sums: the only thing that matters at
//! any point is the sum accumulated so far, so `counts[s]` is the number
//! of ordered ways to reach sum `s`, seeded with `counts[0] = 1` (the
//! empty composition).

use thiserror::Error;

/// Errors for composition counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompositionError {
    /// No allowed parts were supplied.
    #[error("allowed parts must be non-empty")]
    NoParts,

    /// A part of zero would make every positive target reachable in
    /// infinitely many ways.
    #[error("part at index {index} is zero")]
    ZeroPart { index: usize },
}

/// Count ordered compositions for every partial sum `0..=target`.
///
/// Returns a vector of length `target + 1` where entry `s` is the number
/// of ordered compositions of `s` from `parts`.
pub fn composition_counts(target: usize, parts: &[usize]) -> Result<Vec<u64>, CompositionError> {
    if parts.is_empty() {
        return Err(CompositionError::NoParts);
    }
    if let Some(index) = parts.iter().position(|&p| p == 0) {
        return Err(CompositionError::ZeroPart { index });
    }

    let mut counts = vec![0u64; target + 1];
    counts[0] = 1;
    for sum in 1..=target {
        for &part in parts {
            if part <= sum {
                counts[sum] += counts[sum - part];
            }
        }
    }
    Ok(counts)
}

/// Count ordered compositions of `target` alone.
pub fn count_compositions(target: usize, parts: &[usize]) -> Result<u64, CompositionError> {
    Ok(composition_counts(target, parts)?[target])
}
