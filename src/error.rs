use thiserror::Error;

/// Fatal errors a single ANSV call can surface to its caller.
///
/// Every variant is unrecoverable for the *current* call (spec: "All errors are
/// fatal to the current call. The core does not retry."). Internal invariant
/// violations are not represented here — they are bugs and are asserted instead.
#[derive(Debug, Error)]
pub enum AnsvError {
    /// The input sequence (global or local block) was empty.
    #[error("ansv: input sequence is empty")]
    EmptyInput,

    /// Block sizes reported by the group are inconsistent with a valid
    /// contiguous, near-equal partition of `N` elements across `P` workers.
    #[error("ansv: inconsistent block distribution: {detail}")]
    InconsistentBlocks { detail: String },

    /// The group of size `size` cannot serve rank `rank` (`rank >= size`, or
    /// `size == 0`).
    #[error("ansv: invalid group (rank {rank}, size {size})")]
    InvalidGroup { rank: usize, size: usize },

    /// A collective or point-to-point exchange reported failure. Any partial
    /// local state produced by the call must be discarded by the caller.
    #[error("ansv: transport failure: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, AnsvError>;
