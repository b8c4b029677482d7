//! Collective Primitives Contract — the interface the core requires from a
//! message transport, assumed to provide ranked point-to-point and
//! collective operations over a group. This module only defines the
//! contract; a concrete, in-process reference implementation lives in the
//! sibling `ansv-local-transport` crate so the core never depends on one.

use crate::block::Block;
use crate::error::Result;

/// A stable group of `size()` cooperating workers, this worker being `rank()`.
///
/// Implementations are assumed reliable and totally ordered within a group:
/// these collectives do not need to handle partial failure of individual
/// members — any failure aborts the whole call.
pub trait Group {
    /// This worker's rank, `0 <= rank() < size()`.
    fn rank(&self) -> usize;

    /// Number of workers in the group, `P >= 1`.
    fn size(&self) -> usize;

    /// Root-held sequence fanned out into balanced contiguous blocks; every
    /// worker returns its slice and its `(lo, hi)`.
    ///
    /// `'static` is required on every type parameter below: a value crossing
    /// into another worker's hands must not borrow from the caller's stack
    /// frame, the same rule `std::thread::spawn` enforces.
    fn block_distribute<T: Clone + Send + 'static>(&self, root_data: Option<Vec<T>>) -> Result<(Vec<T>, Block)>;

    /// Each worker obtains every worker's variable-length contribution, in
    /// rank order.
    fn all_gather_v<T: Clone + Send + 'static>(&self, local: Vec<T>) -> Result<Vec<Vec<T>>>;

    /// Root obtains the rank-ordered concatenation of every worker's
    /// contribution; other ranks receive `None`.
    fn gather_v<T: Clone + Send + 'static>(&self, local: Vec<T>, root: usize) -> Result<Option<Vec<T>>>;

    /// Permuted delivery: `sends[dest]` is this worker's contribution destined
    /// for rank `dest`. Returns, in rank order, what every other rank sent
    /// *this* worker.
    fn all_to_all_v<T: Clone + Send + 'static>(&self, sends: Vec<Vec<T>>) -> Result<Vec<Vec<T>>>;

    /// Worker `r` receives the combination of `x_0, .., x_{r-1}` under `combine`
    /// and `identity`; worker 0 receives `identity`.
    fn exclusive_scan<T, F>(&self, x: T, identity: T, combine: F) -> Result<T>
    where
        T: Clone + Send + 'static,
        F: Fn(&T, &T) -> T;

    /// Completion-synchronization point: no worker returns until every worker
    /// has called `barrier()`.
    fn barrier(&self) -> Result<()>;

    /// Point-to-point fetch used opportunistically by the cross-boundary
    /// resolver when the exchanged boundary data alone does not carry enough
    /// information (this crate's own resolver never actually needs this —
    /// boundary entries already carry `value` — but an implementation is
    /// free to issue point-to-point fetches if it ever needs to pull a
    /// target's value from a non-adjacent worker).
    fn fetch_from<T: Clone + Send + 'static>(&self, source_rank: usize, tag: u64) -> Result<Option<T>>;

    /// Publish a value other ranks may retrieve via `fetch_from(self.rank(),
    /// tag)`. Paired with `fetch_from`; a no-op for transports where
    /// `fetch_from` is served directly from already-gathered state.
    fn publish<T: Clone + Send + 'static>(&self, tag: u64, value: T) -> Result<()>;
}
