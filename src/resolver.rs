//! Cross-Boundary Resolver (C4): finalize every position left unresolved by
//! the local sweep, consulting the merged residual stacks gathered by C3.

use crate::boundary::{BoundaryEntry, Residuals};

/// Deepest entry in `stack` (read bottom-to-top, strictly increasing in
/// value) whose value is `< target`, if any.
///
/// `stack` is sorted ascending by value (the residual-stack invariant), so a
/// partition point finds the count of entries `< target` in
/// `O(log stack.len())`; the last such entry — the one closest to the
/// boundary, i.e. nearest in index — is the answer.
fn deepest_smaller<T: Ord + Copy>(stack: &[BoundaryEntry<T>], target: T) -> Option<&BoundaryEntry<T>> {
    let count = stack.partition_point(|entry| entry.value < target);
    if count == 0 {
        None
    } else {
        Some(&stack[count - 1])
    }
}

/// Resolve the left-NSV of a position with value `target`, owned by `rank`,
/// by scanning ranks `rank-1, rank-2, .., 0` and consulting each one's
/// `T_left` (= `right_boundary`, the left pass' residual) from nearest to
/// farthest.
pub fn resolve_left<T: Ord + Copy>(residuals: &[Residuals<T>], rank: usize, target: T) -> Option<usize> {
    for q in (0..rank).rev() {
        if let Some(entry) = deepest_smaller(&residuals[q].right_boundary, target) {
            return Some(entry.global_index);
        }
    }
    None
}

/// Resolve the right-NSV of a position with value `target`, owned by `rank`,
/// by scanning ranks `rank+1, .., P-1` and consulting each one's `T_right`
/// (= `left_boundary`, the right pass' residual) from nearest to farthest.
pub fn resolve_right<T: Ord + Copy>(residuals: &[Residuals<T>], rank: usize, target: T) -> Option<usize> {
    let size = residuals.len();
    for q in (rank + 1)..size {
        if let Some(entry) = deepest_smaller(&residuals[q].left_boundary, target) {
            return Some(entry.global_index);
        }
    }
    None
}
