//! Owned DP tables produced by the solver.
//!
//! Both tables are `(n+1) × (n+1)` and 1-indexed: entry `(start, end)` with
//! `1 <= start <= end <= n` describes the sub-chain `A_start .. A_end`.
//! Row and column 0 are allocated but never written, so the grid printed by
//! the demo matches the classic textbook presentation. Cells below the
//! diagonal are likewise untouched and stay zero.
//!
//! Once built, a table is never mutated; the solver hands out both by value
//! and readers only index into them.

use std::fmt;
use std::ops::Index;

/// Minimum scalar-multiplication counts per sub-chain.
///
/// `costs[(i, i)]` is zero for every `i` (a single matrix needs no
/// multiplication); `costs[(i, j)]` for `i < j` is the exact optimum for
/// `A_i .. A_j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    n: usize,
    cells: Vec<Vec<u64>>,
}

/// Optimal split points per sub-chain.
///
/// `splits[(i, j)]` for `i < j` is the first `k` in `i..j` attaining the
/// minimum cost: the optimal grouping is `(A_i .. A_k)(A_{k+1} .. A_j)`.
/// Diagonal entries are meaningless and left at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTable {
    n: usize,
    cells: Vec<Vec<usize>>,
}

impl CostTable {
    pub(crate) fn zeroed(n: usize) -> Self {
        Self {
            n,
            cells: vec![vec![0; n + 1]; n + 1],
        }
    }

    pub(crate) fn set(&mut self, start: usize, end: usize, cost: u64) {
        self.cells[start][end] = cost;
    }

    /// Number of matrices in the chain this table describes.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }
}

impl Index<(usize, usize)> for CostTable {
    type Output = u64;

    #[inline]
    fn index(&self, (start, end): (usize, usize)) -> &u64 {
        &self.cells[start][end]
    }
}

/// Tab-separated grid over rows and columns `0..=n`, one row per line.
/// Every cell is preceded by a tab, matching the reference console output.
impl fmt::Display for CostTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "\t{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl SplitTable {
    pub(crate) fn zeroed(n: usize) -> Self {
        Self {
            n,
            cells: vec![vec![0; n + 1]; n + 1],
        }
    }

    pub(crate) fn set(&mut self, start: usize, end: usize, k: usize) {
        self.cells[start][end] = k;
    }

    /// Number of matrices in the chain this table describes.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }
}

impl Index<(usize, usize)> for SplitTable {
    type Output = usize;

    #[inline]
    fn index(&self, (start, end): (usize, usize)) -> &usize {
        &self.cells[start][end]
    }
}
