//! Mapping from tracked hand-landmark sets to IK chains.
//!
//! Hand trackers emit 21 named landmarks per hand (wrist plus four
//! points per finger, base to tip). This module is the pure mapping
//! side of that integration: given the 21 points, build the chain
//! for one finger at an application-chosen scale. Capture and
//! inference live upstream and never enter this crate.

use crate::chain::{Chain, Joint};
use crate::error::IkError;
use crate::math::Vec3;

/// Number of landmarks in a single-hand set.
pub const HAND_LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Advisory interior-angle range applied to finger joints (degrees).
const FINGER_MIN_DEG: f64 = -20.0;
const FINGER_MAX_DEG: f64 = 110.0;

/// One finger of a 21-landmark hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// Landmark indices for this finger, base to tip. The thumb chain
    /// is rooted at the wrist; the other fingers start at their MCP
    /// knuckle.
    #[must_use]
    pub fn landmark_indices(self) -> &'static [usize] {
        match self {
            Self::Thumb => &[WRIST, THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP],
            Self::Index => &[INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP],
            Self::Middle => &[MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP],
            Self::Ring => &[RING_MCP, RING_PIP, RING_DIP, RING_TIP],
            Self::Pinky => &[PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP],
        }
    }
}

/// Build the IK chain for one finger from a 21-point landmark set.
///
/// Landmark positions are multiplied by `scale` (trackers report
/// normalized or pixel coordinates; the application picks the world
/// scale).
///
/// # Errors
///
/// [`IkError::BadLandmarkCount`] when `landmarks` is not exactly 21
/// points.
pub fn finger_chain_from_landmarks(
    landmarks: &[Vec3],
    finger: Finger,
    scale: f64,
) -> Result<Chain, IkError> {
    if landmarks.len() != HAND_LANDMARK_COUNT {
        return Err(IkError::BadLandmarkCount {
            expected: HAND_LANDMARK_COUNT,
            got: landmarks.len(),
        });
    }

    let joints = finger
        .landmark_indices()
        .iter()
        .map(|&i| Joint::new(landmarks[i] * scale, FINGER_MIN_DEG, FINGER_MAX_DEG))
        .collect();

    Ok(Chain::new(joints))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fake_hand() -> Vec<Vec3> {
        // Landmark i sits at x = i so mappings are easy to check.
        (0..HAND_LANDMARK_COUNT)
            .map(|i| Vec3::new(i as f64, 0.0, 0.0))
            .collect()
    }

    #[test]
    fn index_finger_maps_mcp_to_tip() {
        let chain = finger_chain_from_landmarks(&fake_hand(), Finger::Index, 1.0).unwrap();
        assert_eq!(chain.len(), 4);

        let xs: Vec<f64> = chain.joints().iter().map(|j| j.position.x).collect();
        assert_eq!(xs, vec![5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn thumb_is_rooted_at_wrist() {
        let chain = finger_chain_from_landmarks(&fake_hand(), Finger::Thumb, 1.0).unwrap();
        assert_eq!(chain.len(), 5);
        assert_relative_eq!(chain.root().unwrap().position.x, 0.0);
        assert_relative_eq!(chain.end_effector().unwrap().position.x, 4.0);
    }

    #[test]
    fn scale_is_applied() {
        let chain = finger_chain_from_landmarks(&fake_hand(), Finger::Pinky, 0.5).unwrap();
        assert_relative_eq!(chain.root().unwrap().position.x, 8.5, epsilon = 1e-12);
    }

    #[test]
    fn wrong_landmark_count_is_rejected() {
        let short = vec![Vec3::zeros(); 20];
        let err = finger_chain_from_landmarks(&short, Finger::Middle, 1.0).unwrap_err();
        assert!(matches!(
            err,
            IkError::BadLandmarkCount { expected: 21, got: 20 }
        ));
    }
}
