//! Independent verifier for ANSV results: a brute-force NSV oracle, an
//! RMQ-based consistency check, and seeded random-sequence generators for the
//! property tests. Deliberately does not reuse `ansv::sequential` or
//! `ansv::resolver` — the whole point is an oracle that cannot share a bug
//! with the thing it verifies.

use ansv::Rmq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// `O(n^2)` left/right nearest-smaller-value computation, used only as a
/// cross-check oracle in tests — never on the hot path of anything real.
pub fn brute_force_nsv<T: Ord + Copy>(values: &[T]) -> (Vec<usize>, Vec<usize>) {
    let n = values.len();
    let mut l = vec![0usize; n];
    let mut r = vec![0usize; n];
    for i in 0..n {
        l[i] = (0..i).rev().find(|&j| values[j] < values[i]).unwrap_or(0);
        r[i] = ((i + 1)..n).find(|&j| values[j] < values[i]).unwrap_or(0);
    }
    (l, r)
}

/// Verify soundness and completeness of `L` at a single position `i` against
/// an already-built RMQ oracle.
fn verify_left_with<T: Ord + Copy + std::fmt::Debug>(rmq: &Rmq<T>, values: &[T], l: &[usize], i: usize) -> Result<(), String> {
    let j = l[i];
    let answer_is_sentinel_meaning_none = j == 0 && values[0] >= values[i];
    if answer_is_sentinel_meaning_none {
        // Completeness: nothing to the left of i can be smaller.
        if (0..i).any(|k| values[k] < values[i]) {
            return Err(format!("L[{i}]=0 claims no left NSV, but a smaller value exists at some k<{i}"));
        }
        return Ok(());
    }
    // j is a genuine answer (possibly index 0 itself, if values[0] < values[i]).
    if j >= i {
        return Err(format!("L[{i}]={j} is not strictly left of {i}"));
    }
    if !(values[j] < values[i]) {
        return Err(format!("L[{i}]={j}: values[{j}]={:?} is not < values[{i}]={:?}", values[j], values[i]));
    }
    if j + 1 < i {
        let m = rmq.query_value(j + 1, i);
        if m < values[i] {
            return Err(format!("range ({j}, {i}) contains a value {m:?} < values[{i}]={:?}, {j} is not nearest", values[i]));
        }
    }
    Ok(())
}

/// Symmetric to `verify_left_with`, for `R`.
fn verify_right_with<T: Ord + Copy + std::fmt::Debug>(rmq: &Rmq<T>, values: &[T], r: &[usize], i: usize) -> Result<(), String> {
    let n = values.len();
    let j = r[i];
    // Unlike L, a genuine R answer always satisfies j > i >= 0, so j == 0 is
    // never a real answer here — the sentinel is unambiguous for R.
    if j == 0 {
        if ((i + 1)..n).any(|k| values[k] < values[i]) {
            return Err(format!("R[{i}]=0 claims no right NSV, but a smaller value exists at some k>{i}"));
        }
        return Ok(());
    }
    if j <= i {
        return Err(format!("R[{i}]={j} is not strictly right of {i}"));
    }
    if !(values[j] < values[i]) {
        return Err(format!("R[{i}]={j}: values[{j}]={:?} is not < values[{i}]={:?}", values[j], values[i]));
    }
    if i + 1 < j {
        let m = rmq.query_value(i + 1, j);
        if m < values[i] {
            return Err(format!("range ({i}, {j}) contains a value {m:?} < values[{i}]={:?}, {j} is not nearest", values[i]));
        }
    }
    Ok(())
}

/// Verify position `i` of `L` in isolation — builds its own RMQ oracle, so
/// prefer `verify_all` when checking many positions over the same sequence.
pub fn verify_left<T: Ord + Copy + std::fmt::Debug>(values: &[T], l: &[usize], i: usize) -> Result<(), String> {
    verify_left_with(&Rmq::build(values), values, l, i)
}

/// Verify position `i` of `R` in isolation; see `verify_left`.
pub fn verify_right<T: Ord + Copy + std::fmt::Debug>(values: &[T], r: &[usize], i: usize) -> Result<(), String> {
    verify_right_with(&Rmq::build(values), values, r, i)
}

/// Verify every position of `L` and `R` against one shared RMQ oracle,
/// spreading the per-position checks across a rayon thread pool — the
/// reductions this crate's checker uses rayon for (see DESIGN.md).
pub fn verify_all<T: Ord + Copy + std::fmt::Debug + Sync>(values: &[T], l: &[usize], r: &[usize]) -> Result<(), String> {
    let rmq = Rmq::build(values);
    (0..values.len()).into_par_iter().try_for_each(|i| {
        verify_left_with(&rmq, values, l, i)?;
        verify_right_with(&rmq, values, r, i)
    })
}

/// Deterministic random sequence of `n` values in `[0, max)`, used to build
/// reproducible inputs for the partition-invariance and boundary-stress tests.
pub fn random_sequence(n: usize, max: u32, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..max)).collect()
}
