//! `ansv_parallel` — the distributed entry point, driving the
//! `LOCAL_SWEEP -> EXCHANGE_BOUNDARIES -> RESOLVE_CROSS -> DONE` state
//! machine against a `Group`.

use crate::block::{validate_blocks, Block};
use crate::boundary::{exchange_boundaries, Residuals};
use crate::error::{AnsvError, Result};
use crate::resolver::{resolve_left, resolve_right};
use crate::sequential::{ansv_local, collapse_sentinel};
use crate::transport::Group;

#[cfg(debug_assertions)]
use crate::boundary::assert_monotone;

/// Compute `L`/`R` over a block-distributed sequence, `local` being this
/// worker's slice. Every worker in `group` must call this concurrently; the
/// call is a collective operation.
///
/// Preconditions: `group.size() >= 1` and `group.rank() < group.size()`;
/// every worker's `local.len()` forms a valid contiguous, near-equal
/// partition; the *total* sequence across all workers is non-empty.
/// `local` itself is allowed to be empty — that happens legitimately when
/// there are more workers than elements, and such a worker still must take
/// part in every collective below so the workers that do own elements are
/// never left waiting on one that bailed out early.
pub fn ansv_parallel<T, G>(local: &[T], group: &G) -> Result<(Vec<usize>, Vec<usize>)>
where
    T: Ord + Copy + Send + 'static,
    G: Group,
{
    let rank = group.rank();
    let size = group.size();
    if size == 0 || rank >= size {
        return Err(AnsvError::InvalidGroup { rank, size });
    }

    // Every worker's block length, gathered up front so each worker can
    // derive its own global offset and the whole partition can be validated
    // before any further collective runs. Every rank (even one with an empty
    // local slice) calls this, so the gather always sees `size` contributions.
    let lengths = group.all_gather_v(vec![local.len()])?;
    let mut blocks = Vec::with_capacity(size);
    let mut lo = 0usize;
    for counts in &lengths {
        let len = counts[0];
        blocks.push(Block { lo, hi: lo + len });
        lo += len;
    }
    let n = lo;
    if n == 0 {
        return Err(AnsvError::EmptyInput);
    }
    validate_blocks(n, &blocks)?;
    let my_block = blocks[rank];

    // LOCAL_SWEEP
    let sweep = ansv_local(local, my_block.lo, rank);

    // EXCHANGE_BOUNDARIES
    let mine = Residuals {
        right_boundary: sweep.right_boundary,
        left_boundary: sweep.left_boundary,
    };
    let residuals = exchange_boundaries(group, mine)?;

    #[cfg(debug_assertions)]
    for (r, res) in residuals.iter().enumerate() {
        assert_monotone(&res.right_boundary, &format!("rank {r} right_boundary (T_left)"));
        assert_monotone(&res.left_boundary, &format!("rank {r} left_boundary (T_right)"));
    }

    group.barrier()?;

    // RESOLVE_CROSS
    let mut left = sweep.left;
    let mut right = sweep.right;
    for (i, &value) in local.iter().enumerate() {
        if left[i].is_none() {
            left[i] = resolve_left(&residuals, rank, value);
        }
        if right[i].is_none() {
            right[i] = resolve_right(&residuals, rank, value);
        }
    }

    // DONE
    Ok((collapse_sentinel(&left), collapse_sentinel(&right)))
}
