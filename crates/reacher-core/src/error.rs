use thiserror::Error;

/// Errors produced by the chain model and solvers.
///
/// Deliberately small: degenerate geometry (coincident joints,
/// anti-parallel directions) resolves to defined zero-vector
/// fallbacks, an unreachable FABRIK target is a defined stretch
/// mode, and constraint violations are reported rather than raised.
/// Only structurally invalid input fails.
#[derive(Debug, Error)]
pub enum IkError {
    /// A chain with fewer than two joints cannot define a bone.
    #[error("chain must contain at least 2 joints, got {got}")]
    ChainTooShort { got: usize },

    /// A landmark set did not have the expected point count.
    #[error("expected {expected} landmarks, got {got}")]
    BadLandmarkCount { expected: usize, got: usize },
}
