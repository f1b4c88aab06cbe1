//! Bone-rotation and joint-angle derivation from solved positions.

use reacher_core::chain::Chain;
use reacher_core::math::{Vec3, normalize_or_zero};

/// Derive per-joint Euler rotations (degrees) from bone directions.
///
/// For bone i (joint i → joint i+1) with unit direction `dir`:
/// `yaw = atan2(dir.x, dir.z)`, `pitch = asin(-dir.y)`, `roll = 0`.
/// Twist about the bone axis is not tracked, so roll is always zero.
/// The end effector has no outgoing bone and copies the previous
/// joint's rotation.
///
/// Pure function of the chain's positions: calling it twice on the
/// same positions yields identical rotations.
#[must_use]
pub fn calculate_bone_rotations(chain: &Chain) -> Chain {
    let mut out = chain.clone();
    let n = out.len();
    if n < 2 {
        return out;
    }

    for i in 0..n - 1 {
        let dir = normalize_or_zero(
            chain.joints()[i + 1].position - chain.joints()[i].position,
        );
        let yaw = dir.x.atan2(dir.z).to_degrees();
        let pitch = (-dir.y).asin().to_degrees();
        out.joints_mut()[i].rotation = Vec3::new(pitch, yaw, 0.0);
    }
    let prev = out.joints()[n - 2].rotation;
    out.joints_mut()[n - 1].rotation = prev;

    out
}

/// Interior-joint angles in degrees: for each joint except root and
/// end effector, the angle between the incoming and outgoing bone
/// directions. Read-only; used for reporting and the constraint
/// check.
#[must_use]
pub fn calculate_joint_angles(chain: &Chain) -> Vec<f64> {
    let joints = chain.joints();
    if joints.len() < 3 {
        return Vec::new();
    }

    (1..joints.len() - 1)
        .map(|i| {
            let incoming = normalize_or_zero(joints[i].position - joints[i - 1].position);
            let outgoing = normalize_or_zero(joints[i + 1].position - joints[i].position);
            let dot = incoming.dot(&outgoing).clamp(-1.0, 1.0);
            dot.acos().to_degrees()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use reacher_core::chain::Joint;

    fn chain_of(points: &[[f64; 3]]) -> Chain {
        Chain::new(
            points
                .iter()
                .map(|p| Joint::at(Vec3::new(p[0], p[1], p[2])))
                .collect(),
        )
    }

    #[test]
    fn rotation_along_cardinal_directions() {
        // Bone along +Z: yaw 0, pitch 0.
        let chain = calculate_bone_rotations(&chain_of(&[[0.0, 0.0, 0.0], [0.0, 0.0, 1.0]]));
        let r = chain.joints()[0].rotation;
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(r.y, 0.0, epsilon = 1e-9);

        // Bone along +X: yaw 90.
        let chain = calculate_bone_rotations(&chain_of(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]));
        assert_relative_eq!(chain.joints()[0].rotation.y, 90.0, epsilon = 1e-9);

        // Bone along -Y: pitch 90.
        let chain = calculate_bone_rotations(&chain_of(&[[0.0, 0.0, 0.0], [0.0, -1.0, 0.0]]));
        assert_relative_eq!(chain.joints()[0].rotation.x, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn roll_is_always_zero() {
        let chain = calculate_bone_rotations(&chain_of(&[
            [0.0, 0.0, 0.0],
            [0.3, -0.7, 0.2],
            [1.1, -0.9, -0.4],
        ]));
        for joint in chain.joints() {
            assert_eq!(joint.rotation.z, 0.0);
        }
    }

    #[test]
    fn end_effector_copies_previous_rotation() {
        let chain = calculate_bone_rotations(&chain_of(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
        ]));
        let joints = chain.joints();
        assert_eq!(joints[2].rotation, joints[1].rotation);
    }

    #[test]
    fn derivation_is_idempotent() {
        let chain = chain_of(&[[0.0, 0.0, 0.0], [0.5, 0.5, 0.1], [1.0, 0.2, -0.3]]);
        let once = calculate_bone_rotations(&chain);
        let twice = calculate_bone_rotations(&once);
        for (a, b) in once.joints().iter().zip(twice.joints()) {
            assert_eq!(a.rotation, b.rotation);
        }
    }

    #[test]
    fn right_angle_interior_joint() {
        let angles = calculate_joint_angles(&chain_of(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
        ]));
        assert_eq!(angles.len(), 1);
        assert_relative_eq!(angles[0], 90.0, epsilon = 1e-9);
    }

    #[test]
    fn straight_chain_has_zero_angles() {
        let angles = calculate_joint_angles(&chain_of(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [3.0, 0.0, 0.0],
        ]));
        assert_eq!(angles.len(), 2);
        for a in angles {
            assert_relative_eq!(a, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn short_chains_have_no_interior_angles() {
        assert!(calculate_joint_angles(&chain_of(&[[0.0; 3], [1.0, 0.0, 0.0]])).is_empty());
    }
}
