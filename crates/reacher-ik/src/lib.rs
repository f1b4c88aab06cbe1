//! Inverse kinematics for articulated chains.
//!
//! Two classical position-based solvers over the [`reacher_core`]
//! chain model:
//!
//! - [`CcdSolver`] — Cyclic Coordinate Descent: sweeps from the tip
//!   toward the root each pass, rigidly rotating the distal part of
//!   the chain about each joint to align the end effector with the
//!   target.
//! - [`FabrikSolver`] — Forward And Backward Reaching IK: alternates
//!   a tip-anchored and a root-anchored projection pass, preserving
//!   bone lengths by construction.
//!
//! Both implement [`IkSolver`], clone their input chain, and run a
//! bounded, deterministic, single-threaded computation:
//!
//! ```text
//! Chain + target ──► IkSolver::solve ──► IkResult { chain, converged, .. }
//! ```
//!
//! Joint angle limits are advisory. [`constraint::apply_constraints`]
//! reports violations; nothing in this crate corrects them.

pub mod ccd;
pub mod config;
pub mod constraint;
pub mod fabrik;
pub mod rotation;
pub mod solver;

pub use ccd::CcdSolver;
pub use config::SolveConfig;
pub use constraint::{ConstraintViolation, apply_constraints, constraint_violations};
pub use fabrik::FabrikSolver;
pub use rotation::{calculate_bone_rotations, calculate_joint_angles};
pub use solver::{IkResult, IkSolver};
