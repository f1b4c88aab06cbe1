//! Cyclic Coordinate Descent solver.

use log::debug;

use reacher_core::chain::Chain;
use reacher_core::error::IkError;
use reacher_core::math::{Vec3, distance, normalize_or_zero, rotate_about_axis};

use crate::config::SolveConfig;
use crate::rotation::calculate_bone_rotations;
use crate::solver::{IkResult, IkSolver, validate_chain};

/// Rotations below this (radians) are numerical noise; the joint is
/// skipped for the pass.
const MIN_ROTATION_RAD: f64 = 1e-3;

/// Cyclic Coordinate Descent: each pass sweeps from the second-to-last
/// joint down to the root, rotating the distal part of the chain about
/// the current joint so the end effector swings toward the target.
///
/// Every update is a rigid rotation about a pivot joint, so bone
/// lengths are preserved without explicit re-projection. The
/// tip-to-root sweep order biases distal joints to move most per
/// pass.
pub struct CcdSolver {
    config: SolveConfig,
}

impl CcdSolver {
    #[must_use]
    pub const fn new(config: SolveConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(SolveConfig::default())
    }
}

impl IkSolver for CcdSolver {
    fn solve(&self, chain: &Chain, target: Vec3) -> Result<IkResult, IkError> {
        validate_chain(chain)?;

        let mut solved = chain.clone();
        let last = solved.len() - 1;
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

            // Sweep from the joint nearest the tip down to the root.
            for i in (0..last).rev() {
                let pivot = solved.joints()[i].position;
                let to_end = normalize_or_zero(solved.joints()[last].position - pivot);
                let to_target = normalize_or_zero(target - pivot);

                let angle = to_end.dot(&to_target).clamp(-1.0, 1.0).acos();
                if angle < MIN_ROTATION_RAD {
                    continue;
                }

                // Anti-parallel directions leave a near-zero cross
                // product; the axis normalizes to zero and no rotation
                // can be applied. The joint silently stalls for this
                // pass (inherited behavior, see tests).
                let axis = normalize_or_zero(to_end.cross(&to_target));
                if axis == Vec3::zeros() {
                    debug!("ccd: degenerate axis at joint {i}, skipping");
                    continue;
                }

                for j in i + 1..=last {
                    let offset = solved.joints()[j].position - pivot;
                    solved.joints_mut()[j].position =
                        pivot + rotate_about_axis(offset, axis, angle);
                }
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
        "ccd"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
