//! Matrix-chain ordering by classic interval DP.
//!
//! Given dimensions `d[0..=n]`, matrix `A_i` has shape `d[i-1] x d[i]`.
//! The solver fills a cost table bottom-up by increasing sub-chain length:
//! every window `[offset, end]` of length `len` is resolved by trying each
//! internal split `k`, and all the sub-chains it refers to are strictly
//! shorter, so each cell reads only finalized cells. Ties between split
//! points keep the first (leftmost) `k`, which makes the recorded split
//! table, and therefore the reconstructed expression, deterministic.
//!
//! O(n^3) time, O(n^2) space, exact optimum.

use crate::error::{ChainOrderError, InputFault};
use crate::reconstruct::parenthesization;
use crate::tables::{CostTable, SplitTable};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A validated matrix-chain instance.
#[derive(Debug, Clone)]
pub struct ChainOrderSolver {
    dims: Vec<u64>,
}

impl ChainOrderSolver {
    /// Validate a dimension sequence and capture it.
    ///
    /// Fails if fewer than two dimensions are supplied (no matrices) or if
    /// any dimension is zero.
    pub fn new(dims: Vec<u64>) -> Result<Self, ChainOrderError> {
        if dims.len() < 2 {
            return Err(ChainOrderError::InvalidInput(InputFault::TooShort {
                len: dims.len(),
            }));
        }
        if let Some(index) = dims.iter().position(|&d| d == 0) {
            return Err(ChainOrderError::InvalidInput(InputFault::ZeroDimension {
                index,
            }));
        }
        Ok(Self { dims })
    }

    /// Number of matrices `n` in the chain.
    #[inline]
    pub fn matrix_count(&self) -> usize {
        self.dims.len() - 1
    }

    /// The dimension sequence this solver was built from.
    pub fn dims(&self) -> &[u64] {
        &self.dims
    }

    /// Fill both tables bottom-up and return them.
    ///
    /// Pure: identical inputs produce identical tables, and the solver
    /// itself is never mutated.
    pub fn solve(&self) -> (CostTable, SplitTable) {
        let n = self.matrix_count();
        let mut costs = CostTable::zeroed(n);
        let mut splits = SplitTable::zeroed(n);

        for len in 2..=n {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("length_pass", len, windows = n - len + 1);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            for (offset, end, cost, k) in self.scan_length(len, &costs) {
                costs.set(offset, end, cost);
                splits.set(offset, end, k);
            }
        }

        (costs, splits)
    }

    /// Best cost and first minimizing split for one window `[offset, end]`.
    ///
    /// Requires `offset < end`; every shorter sub-chain referenced must
    /// already be finalized in `costs`.
    fn best_split(&self, costs: &CostTable, offset: usize, end: usize) -> (u64, usize) {
        debug_assert!(offset < end);
        let mut best = u64::MAX;
        let mut best_k = offset;
        for k in offset..end {
            let candidate = costs[(offset, k)]
                + costs[(k + 1, end)]
                + self.dims[offset - 1] * self.dims[k] * self.dims[end];
            if candidate < best {
                best = candidate;
                best_k = k;
            }
        }
        (best, best_k)
    }

    /// Resolve every window of one sub-chain length.
    ///
    /// Windows of the same length are independent of each other, so with
    /// the `parallel` feature they fan out over rayon. Each window still
    /// scans its splits left to right, so the tie-break is unchanged and
    /// the output is identical to the sequential fill.
    #[cfg(feature = "parallel")]
    fn scan_length(&self, len: usize, costs: &CostTable) -> Vec<(usize, usize, u64, usize)> {
        let n = self.matrix_count();
        (1..=n - len + 1)
            .into_par_iter()
            .map(|offset| {
                let end = offset + len - 1;
                let (cost, k) = self.best_split(costs, offset, end);
                (offset, end, cost, k)
            })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn scan_length(&self, len: usize, costs: &CostTable) -> Vec<(usize, usize, u64, usize)> {
        let n = self.matrix_count();
        (1..=n - len + 1)
            .map(|offset| {
                let end = offset + len - 1;
                let (cost, k) = self.best_split(costs, offset, end);
                (offset, end, cost, k)
            })
            .collect()
    }
}

/// One-shot convenience: validate and solve in a single call.
pub fn optimal_order(dims: &[u64]) -> Result<(CostTable, SplitTable), ChainOrderError> {
    let solver = ChainOrderSolver::new(dims.to_vec())?;
    Ok(solver.solve())
}

/// Everything the solver can say about one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainOrdering {
    /// Minimum scalar-multiplication counts per sub-chain.
    pub costs: CostTable,
    /// First minimizing split point per sub-chain.
    pub splits: SplitTable,
    /// Fully parenthesized expression for the whole chain `[1, n]`.
    pub expression: String,
}

/// Solve a chain and reconstruct the full-range expression in one call.
pub fn solve_chain(dims: &[u64]) -> Result<ChainOrdering, ChainOrderError> {
    let solver = ChainOrderSolver::new(dims.to_vec())?;
    let n = solver.matrix_count();
    let (costs, splits) = solver.solve();
    let expression = parenthesization(&splits, 1, n)?;
    Ok(ChainOrdering {
        costs,
        splits,
        expression,
    })
}
