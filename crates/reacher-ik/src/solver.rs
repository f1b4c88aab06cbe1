//! The solver capability and its result type.

use reacher_core::chain::Chain;
use reacher_core::error::IkError;
use reacher_core::math::Vec3;

/// Result of an IK solve.
#[derive(Debug, Clone)]
pub struct IkResult {
    /// The solved chain (input chain is never mutated).
    pub chain: Chain,
    /// Whether the end effector came within tolerance of the target.
    pub converged: bool,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final end-effector distance to the target.
    pub position_error: f64,
}

/// A position-target IK solver over an articulated chain.
///
/// Implementations are stateless apart from their configuration:
/// every call clones the input chain, runs a bounded deterministic
/// computation, and returns the solved copy. Sharing one solver
/// across threads is safe; sharing one mutable chain is the
/// caller's problem.
pub trait IkSolver {
    /// Solve the chain toward `target`.
    ///
    /// # Errors
    ///
    /// [`IkError::ChainTooShort`] when the chain has fewer than two
    /// joints. No partial result is returned on failure.
    fn solve(&self, chain: &Chain, target: Vec3) -> Result<IkResult, IkError>;

    /// Human-readable solver name for logs and CLI output.
    fn name(&self) -> &'static str;
}

/// Shared precondition: a chain must have at least two joints to
/// define a bone.
pub(crate) fn validate_chain(chain: &Chain) -> Result<(), IkError> {
    if chain.len() < 2 {
        return Err(IkError::ChainTooShort { got: chain.len() });
    }
    Ok(())
}
