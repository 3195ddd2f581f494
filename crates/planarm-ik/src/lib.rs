//! Inverse kinematics for a planar two-link arm.
//!
//! Provides the closed-form solver (law of cosines), forward kinematics, and
//! the ground-plane configuration selector.
//!
//! # Architecture
//!
//! ```text
//! target + LinkLengths ──► solve ──► SolveResult ──► select ──► SelectionOutcome
//! ```
//!
//! [`solve`] returns zero or two candidate joint-angle pairs; [`select`]
//! filters them against the ground plane at `y = 0` and resolves which elbow
//! branch the caller should display. Both functions are pure and stateless:
//! safe to call concurrently, nothing is retained between calls.

pub mod select;
pub mod solver;

pub use select::{select, validate_candidate};
pub use solver::{forward_kinematics, solve, solve_raw, ArmPose};
