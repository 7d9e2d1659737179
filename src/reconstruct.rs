//! Rebuilding one optimal parenthesization from a split table.
//!
//! The split table fully determines the grouping: `splits[(i, j)]` names
//! the boundary between the two optimally evaluated halves of `A_i .. A_j`.
//! Reconstruction is a depth-first walk of those choices; each recursive
//! call strictly shrinks its range, so depth is bounded by the number of
//! matrices. No numeric work happens here, only traversal.

use crate::error::ChainOrderError;
use crate::tables::SplitTable;

/// Produce the fully parenthesized expression for `A_start .. A_end`.
///
/// A single matrix renders as its bare leaf token (`"A3"`); any wider range
/// renders as `(left right)` around the recorded split. The result is
/// balanced, carries the leaves in order, and nests exactly as the solver
/// chose, so the multiplication cost it implies equals the cost-table entry
/// for the same range.
///
/// Fails with [`ChainOrderError::InvalidRange`] when the range is inverted
/// or falls outside `1..=n`; nothing is produced in that case.
pub fn parenthesization(
    splits: &SplitTable,
    start: usize,
    end: usize,
) -> Result<String, ChainOrderError> {
    let n = splits.n();
    if start < 1 || end > n || start > end {
        return Err(ChainOrderError::InvalidRange { start, end, n });
    }
    let mut out = String::new();
    write_range(splits, start, end, &mut out);
    Ok(out)
}

fn write_range(splits: &SplitTable, start: usize, end: usize, out: &mut String) {
    if start == end {
        out.push('A');
        out.push_str(&start.to_string());
        return;
    }
    let k = splits[(start, end)];
    out.push('(');
    write_range(splits, start, k, out);
    write_range(splits, k + 1, end, out);
    out.push(')');
}
