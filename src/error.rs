//! Error taxonomy for the chain-ordering entry points.
//!
//! Two failure classes exist, both deterministic input errors surfaced at
//! the call site that detects them: a malformed dimension sequence, and a
//! reconstruction range that does not fit the table it is asked about.
//! There are no transient failures anywhere in this crate, so there are no
//! retry semantics.

use std::fmt;
use thiserror::Error;

/// What exactly was wrong with a dimension sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFault {
    /// Fewer than two dimensions were supplied, i.e. zero matrices.
    TooShort { len: usize },
    /// A dimension of zero; every matrix extent must be strictly positive.
    /// (Negative extents are unrepresentable in the unsigned input type.)
    ZeroDimension { index: usize },
}

impl fmt::Display for InputFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFault::TooShort { len } => {
                write!(f, "need at least 2 dimensions (one matrix), got {len}")
            }
            InputFault::ZeroDimension { index } => {
                write!(f, "dimension at index {index} is zero")
            }
        }
    }
}

/// Errors produced by the solver and the reconstructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChainOrderError {
    /// The dimension sequence cannot describe a matrix chain.
    #[error("invalid dimension sequence: {0}")]
    InvalidInput(InputFault),

    /// A reconstruction range outside `1..=n`, or inverted.
    #[error("invalid range [{start}, {end}] for a {n}-matrix chain")]
    InvalidRange { start: usize, end: usize, n: usize },
}
