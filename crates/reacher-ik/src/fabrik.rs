//! Forward And Backward Reaching IK solver.

use log::debug;

use reacher_core::chain::Chain;
use reacher_core::error::IkError;
use reacher_core::math::{Vec3, distance, normalize_or_zero};

use crate::config::SolveConfig;
use crate::rotation::calculate_bone_rotations;
use crate::solver::{IkResult, IkSolver, validate_chain};

/// FABRIK: treats the chain as rigid segments joined by free joints
/// and alternates two projection passes per iteration — a forward
/// pass that pins the end effector to the target and projects back
/// toward the root, then a backward pass that re-anchors the root at
/// its original position and projects out to the tip. Bone lengths
/// are captured once at solve entry and preserved by construction.
pub struct FabrikSolver {
    config: SolveConfig,
}

impl FabrikSolver {
    #[must_use]
    pub const fn new(config: SolveConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(SolveConfig::default())
    }
}

impl IkSolver for FabrikSolver {
    /// Solve the chain toward `target`.
    ///
    /// When the target lies beyond the chain's total length the chain
    /// is stretched straight along the ray root→target and returned
    /// immediately. Note that this path does NOT derive bone
    /// rotations, matching the reference behavior this library
    /// preserves: after a stretch solve the `rotation` fields still
    /// hold whatever the input chain carried. Callers that need them
    /// can run [`calculate_bone_rotations`] on the result.
    fn solve(&self, chain: &Chain, target: Vec3) -> Result<IkResult, IkError> {
        validate_chain(chain)?;

        let mut solved = chain.clone();
        let last = solved.len() - 1;
        let bone_lengths = solved.bone_lengths();
        let root = solved.joints()[0].position;
        let total_length: f64 = bone_lengths.iter().sum();

        // Unreachable: stretch straight toward the target.
        if distance(root, target) > total_length {
            debug!(
                "fabrik: target at {:.4} beyond reach {:.4}, stretching",
                distance(root, target),
                total_length
            );
            let dir = normalize_or_zero(target - root);
            let mut pos = root;
            for (i, &len) in bone_lengths.iter().enumerate() {
                pos += dir * len;
                solved.joints_mut()[i + 1].position = pos;
            }
            let position_error = distance(solved.joints()[last].position, target);
            return Ok(IkResult {
                chain: solved,
                converged: false,
                iterations: 0,
                position_error,
            });
        }

        let mut iterations_used = 0;
        let mut converged = false;

        for iteration in 0..self.config.max_iterations {
            let end = solved.joints()[last].position;
            if distance(end, target) <= self.config.tolerance {
                converged = true;
                iterations_used = iteration;
                break;
            }
            iterations_used = iteration + 1;

            // Forward reaching: pin the tip to the target, project
            // each joint toward its old position at fixed bone length.
            solved.joints_mut()[last].position = target;
            for i in (0..last).rev() {
                let next = solved.joints()[i + 1].position;
                let dir = normalize_or_zero(solved.joints()[i].position - next);
                solved.joints_mut()[i].position = next + dir * bone_lengths[i];
            }

            // Backward reaching: re-anchor the root, project outward.
            solved.joints_mut()[0].position = root;
            for i in 0..last {
                let prev = solved.joints()[i].position;
                let dir = normalize_or_zero(solved.joints()[i + 1].position - prev);
                solved.joints_mut()[i + 1].position = prev + dir * bone_lengths[i];
            }
        }

        let position_error = distance(solved.joints()[last].position, target);
        if !converged {
            converged = position_error <= self.config.tolerance;
        }

        Ok(IkResult {
            chain: calculate_bone_rotations(&solved),
            converged,
            iterations: iterations_used,
            position_error,
        })
    }

    fn name(&self) -> &'static str {
        "fabrik"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
