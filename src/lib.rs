//! # ansv — Distributed All-Nearest-Smaller-Values
//!
//! ## Architecture Overview
//!
//! Given a totally ordered sequence `S[0..N)` block-distributed across `P`
//! cooperating workers, this crate computes for every position the nearest
//! position to its left (`L`) and to its right (`R`) whose value is strictly
//! smaller — a building block for parallel LCP-array construction, Cartesian
//! trees, and suffix-tree traversal over distributed text.
//!
//! The work is split into five components:
//!
//! - [`rmq`] (C1) — a sparse-table range-minimum-query oracle, used by the
//!   test suite and the independent checker to verify results.
//! - [`sequential`] (C2) — the single-worker monotone-stack sweep.
//! - [`boundary`] (C3) — the residual-stack representation exchanged across
//!   the group after each worker's local sweep.
//! - [`resolver`] (C4) — resolution of positions the local sweep left
//!   unresolved, by consulting the merged boundary data.
//! - [`transport`] (C5) — the `Group` trait: the collective primitives this
//!   crate requires from a transport. This crate never implements one; see
//!   the sibling `ansv-local-transport` crate for an in-process reference.
//!
//! [`parallel::ansv_parallel`] drives these through the state machine
//! `LOCAL_SWEEP -> EXCHANGE_BOUNDARIES -> RESOLVE_CROSS -> DONE`.
//! [`sequential::ansv_sequential`] is the single-worker equivalent and must
//! agree with `ansv_parallel` pointwise for any `P` (partition-invariance).
//!
//! This crate is pure and transport-agnostic: no I/O, no persisted state.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

pub mod block;
pub mod boundary;
pub mod error;
pub mod parallel;
pub mod resolver;
pub mod rmq;
pub mod sequential;
pub mod transport;

pub use block::{all_blocks, block_for_rank, validate_blocks, Block};
pub use boundary::{exchange_boundaries, BoundaryEntry, Residuals};
pub use error::{AnsvError, Result};
pub use parallel::ansv_parallel;
pub use rmq::Rmq;
pub use sequential::{ansv_sequential, collapse_sentinel};
pub use transport::Group;
