//! Sequential ANSV: a monotone-stack sweep producing left/right nearest
//! smaller value indices plus the residual boundary stacks the exchange
//! protocol in `boundary.rs` consumes.

use crate::boundary::BoundaryEntry;
use crate::error::{AnsvError, Result};

/// Output of one local sweep over `S[lo..hi)`.
pub struct LocalSweep<T> {
    /// `left[i]` is `Some(global index)` of the nearest strictly-smaller
    /// element to the left of global index `lo + i`, found *within this
    /// block*; `None` if the local sweep found no such element (it may still
    /// exist on an earlier worker — that is what the residual/boundary
    /// protocol resolves).
    pub left: Vec<Option<usize>>,
    pub right: Vec<Option<usize>>,
    /// Residual stack surviving the left-to-right sweep: candidates that may
    /// serve as "nearest smaller to the left" for *later* workers. Strictly
    /// increasing in value, bottom (index 0) to top.
    pub right_boundary: Vec<BoundaryEntry<T>>,
    /// Residual stack surviving the right-to-left sweep: candidates for
    /// *earlier* workers. Strictly increasing in value, bottom to top.
    pub left_boundary: Vec<BoundaryEntry<T>>,
}

/// Run the monotone-stack sweep over `values = S[lo..hi)`, `rank` is this
/// worker's index in the group (used only to tag boundary entries for the
/// cross-boundary resolver).
///
/// `values` may be empty — a worker can legitimately own no elements when
/// there are more workers than input elements; it still must run this (and
/// every later step of `ansv_parallel`) so its contribution to each
/// collective lines up with every other worker's.
pub fn ansv_local<T: Ord + Copy>(values: &[T], lo: usize, rank: usize) -> LocalSweep<T> {
    let n = values.len();
    let mut left = vec![None; n];
    let mut right = vec![None; n];

    // Left pass: pop while top-of-stack value >= current value.
    let mut stack: Vec<usize> = Vec::new(); // local indices, strictly increasing values
    for i in 0..n {
        while let Some(&top) = stack.last() {
            if values[top] >= values[i] {
                stack.pop();
            } else {
                break;
            }
        }
        left[i] = stack.last().map(|&j| lo + j);
        stack.push(i);
    }
    let right_boundary = stack
        .iter()
        .map(|&local| BoundaryEntry::new(rank, local, values[local], lo + local))
        .collect();

    // Right pass: symmetric, from hi-1 down to lo.
    let mut stack: Vec<usize> = Vec::new();
    for i in (0..n).rev() {
        while let Some(&top) = stack.last() {
            if values[top] >= values[i] {
                stack.pop();
            } else {
                break;
            }
        }
        right[i] = stack.last().map(|&j| lo + j);
        stack.push(i);
    }
    let left_boundary = stack
        .iter()
        .map(|&local| BoundaryEntry::new(rank, local, values[local], lo + local))
        .collect();

    LocalSweep {
        left,
        right,
        right_boundary,
        left_boundary,
    }
}

/// Collapse `Option<usize>` to the external sentinel-0 encoding. Kept
/// internal-only (`Option`) everywhere but the public boundary, so a genuine
/// answer of index 0 is never confused with "no such element".
pub fn collapse_sentinel(nsv: &[Option<usize>]) -> Vec<usize> {
    nsv.iter().map(|x| x.unwrap_or(0)).collect()
}

/// `ansv_sequential` — the single-worker public entry point.
///
/// Preconditions: `S` is non-empty. Postconditions: `L.len() == R.len() ==
/// S.len()`; entries are indices in `[0, S.len())` or the sentinel `0`.
pub fn ansv_sequential<T: Ord + Copy>(values: &[T]) -> Result<(Vec<usize>, Vec<usize>)> {
    if values.is_empty() {
        return Err(AnsvError::EmptyInput);
    }
    let sweep = ansv_local(values, 0, 0);
    // A single-worker sweep never has cross-worker queries to resolve:
    // anything left unresolved locally has no smaller element anywhere.
    Ok((collapse_sentinel(&sweep.left), collapse_sentinel(&sweep.right)))
}
