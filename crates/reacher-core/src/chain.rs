//! Joint and chain data model.
//!
//! A [`Chain`] is an ordered list of joints from the root (index 0,
//! fixed in space during a solve) to the end effector (last index,
//! the point the solver drives toward the target). The segment
//! between two consecutive joints is a bone; its length is the
//! distance between their positions at the start of a solve.
//!
//! Chains are plain values. Solvers clone their input and return the
//! solved copy; nothing in this crate holds shared mutable state.

use nalgebra::Vector3;

use crate::error::IkError;
use crate::math::{Vec3, distance, normalize_or_zero};

/// A single joint in an articulated chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    /// World-space position.
    pub position: Vec3,
    /// Advisory lower bound on the interior angle at this joint (degrees).
    pub min_angle_deg: f64,
    /// Advisory upper bound on the interior angle at this joint (degrees).
    pub max_angle_deg: f64,
    /// Derived Euler angles (pitch, yaw, roll) in degrees.
    ///
    /// Output of rotation derivation only — never read by a solver.
    pub rotation: Vec3,
}

impl Joint {
    /// Joint at `position` with the given interior-angle range.
    #[must_use]
    pub fn new(position: Vec3, min_angle_deg: f64, max_angle_deg: f64) -> Self {
        Self {
            position,
            min_angle_deg,
            max_angle_deg,
            rotation: Vec3::zeros(),
        }
    }

    /// Joint at `position` with an unbounded angle range.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self::new(position, -180.0, 180.0)
    }
}

/// An ordered chain of joints, root to end effector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chain {
    joints: Vec<Joint>,
}

impl Chain {
    #[must_use]
    pub fn new(joints: Vec<Joint>) -> Self {
        Self { joints }
    }

    /// Build an n-bone finger chain: `bone_lengths.len() + 1` joints
    /// laid out from `base` along `direction`, each joint limited to
    /// the finger's advisory interior-angle range of [-20°, 110°].
    #[must_use]
    pub fn finger(base: Vec3, bone_lengths: &[f64], direction: Vec3) -> Self {
        const FINGER_MIN_DEG: f64 = -20.0;
        const FINGER_MAX_DEG: f64 = 110.0;

        let dir = normalize_or_zero(direction);
        let mut joints = Vec::with_capacity(bone_lengths.len() + 1);
        let mut pos = base;
        joints.push(Joint::new(pos, FINGER_MIN_DEG, FINGER_MAX_DEG));
        for &len in bone_lengths {
            pos += dir * len;
            joints.push(Joint::new(pos, FINGER_MIN_DEG, FINGER_MAX_DEG));
        }
        Self { joints }
    }

    /// Build a 3-joint arm chain hanging along -Y from `shoulder`:
    /// shoulder [-180°, 180°], elbow [0°, 160°], wrist [-90°, 90°].
    ///
    /// The rest direction is a convention of this builder, not a
    /// solver requirement; any layout with the same bone lengths
    /// solves identically.
    #[must_use]
    pub fn arm(shoulder: Vec3, upper_arm_len: f64, forearm_len: f64) -> Self {
        let down = Vector3::new(0.0, -1.0, 0.0);
        let elbow = shoulder + down * upper_arm_len;
        let wrist = elbow + down * forearm_len;
        Self {
            joints: vec![
                Joint::new(shoulder, -180.0, 180.0),
                Joint::new(elbow, 0.0, 160.0),
                Joint::new(wrist, -90.0, 90.0),
            ],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    #[must_use]
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn joints_mut(&mut self) -> &mut [Joint] {
        &mut self.joints
    }

    /// Root joint, if the chain is non-empty.
    #[must_use]
    pub fn root(&self) -> Option<&Joint> {
        self.joints.first()
    }

    /// End-effector joint, if the chain is non-empty.
    #[must_use]
    pub fn end_effector(&self) -> Option<&Joint> {
        self.joints.last()
    }

    /// All joint positions in order.
    #[must_use]
    pub fn positions(&self) -> Vec<Vec3> {
        self.joints.iter().map(|j| j.position).collect()
    }

    /// Length of each bone, in order. Empty for chains shorter than 2.
    #[must_use]
    pub fn bone_lengths(&self) -> Vec<f64> {
        self.joints
            .windows(2)
            .map(|w| distance(w[0].position, w[1].position))
            .collect()
    }

    /// Sum of all bone lengths — the chain's maximum reach from root.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.bone_lengths().iter().sum()
    }
}

/// Place a single free joint directly at `target`.
///
/// The degenerate one-joint "chain" needs no iteration; this is the
/// whole solve.
#[must_use]
pub fn solve_single_joint(joint: &Joint, target: Vec3) -> Joint {
    Joint {
        position: target,
        ..joint.clone()
    }
}
