//! Error types for the optimizer domain.

use thiserror::Error;

/// Errors surfaced by an optimization run.
///
/// These are the only hard failures of the subsystem. Everything else
/// degrades gracefully: unknown objectives normalize to a default, missing
/// member attributes fall back to documented neutral values, and an
/// exhausted evaluation budget switches the run to the greedy fallback
/// strategy instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    /// The candidate pool is too small for the requested computation.
    #[error("Need at least {required} candidates, got {actual}")]
    InsufficientCandidates { actual: usize, required: usize },

    /// The caller's cancellation signal tripped at a checkpoint.
    #[error("Optimization cancelled by caller")]
    Cancelled,
}

impl OptimizeError {
    /// Creates an insufficient candidates error.
    pub fn insufficient_candidates(actual: usize, required: usize) -> Self {
        OptimizeError::InsufficientCandidates { actual, required }
    }
}
