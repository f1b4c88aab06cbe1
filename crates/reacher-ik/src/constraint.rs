//! Diagnostic joint-angle constraint reporting.
//!
//! Angle limits on joints are advisory: violations are surfaced for
//! the caller to handle, never corrected. A geometric correction
//! would require re-deriving positions under the constraint, which
//! belongs to a layer this library does not implement.

use log::warn;

use reacher_core::chain::Chain;

use crate::rotation::calculate_joint_angles;

/// One out-of-range interior joint angle.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintViolation {
    /// Index of the offending joint within the chain.
    pub joint_index: usize,
    /// Measured interior angle (degrees).
    pub angle_deg: f64,
    /// Advisory lower bound (degrees).
    pub min_deg: f64,
    /// Advisory upper bound (degrees).
    pub max_deg: f64,
}

/// Interior angles outside their joint's advisory range.
///
/// Root and end effector have no interior angle and are never
/// reported.
#[must_use]
pub fn constraint_violations(chain: &Chain) -> Vec<ConstraintViolation> {
    let angles = calculate_joint_angles(chain);
    angles
        .iter()
        .enumerate()
        .filter_map(|(i, &angle_deg)| {
            let joint_index = i + 1; // interior angles start at joint 1
            let joint = &chain.joints()[joint_index];
            if angle_deg < joint.min_angle_deg || angle_deg > joint.max_angle_deg {
                Some(ConstraintViolation {
                    joint_index,
                    angle_deg,
                    min_deg: joint.min_angle_deg,
                    max_deg: joint.max_angle_deg,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Check every interior angle against its joint's advisory range,
/// logging each violation, and return a structurally identical copy
/// of the chain. Positions are never altered.
#[must_use]
pub fn apply_constraints(chain: &Chain) -> Chain {
    for v in constraint_violations(chain) {
        warn!(
            "joint {} angle {:.2} deg outside [{:.2}, {:.2}]",
            v.joint_index, v.angle_deg, v.min_deg, v.max_deg
        );
    }
    chain.clone()
}
