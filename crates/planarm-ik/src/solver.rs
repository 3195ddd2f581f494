//! Closed-form IK for a planar two-link arm.
//!
//! Solves the elbow angle from the triangle formed by the two links and the
//! base-to-target line (law of cosines), then recovers the shoulder angle via
//! the two-argument-arctangent decomposition. Pure arithmetic, no iteration:
//! a target inside the reach annulus always yields exactly two candidate
//! branches, anything else is [`SolveResult::Unreachable`].

use nalgebra::{Point2, Vector2};

use planarm_core::types::{JointAngles, LinkLengths, SolveResult};

/// Joint positions of one arm pose in the base frame.
///
/// Used by the ground-collision check, renderers, and round-trip tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmPose {
    /// First joint (elbow) position.
    pub elbow: Point2<f64>,
    /// End-effector position.
    pub end_effector: Point2<f64>,
}

/// Solve inverse kinematics for `target`.
///
/// Returns [`SolveResult::TwoCandidates`] with the elbow-up and elbow-down
/// branches when the target lies inside the reach annulus, otherwise
/// [`SolveResult::Unreachable`]. No ranking between the branches is imposed;
/// that is the selector's job.
///
/// Pure and deterministic: identical inputs produce bitwise-identical
/// outputs. Non-finite inputs are a caller precondition violation (rejected
/// by `planarm_core::validate_target` / [`LinkLengths::new`] upstream).
pub fn solve(target: Point2<f64>, links: &LinkLengths) -> SolveResult {
    solve_raw(target.x, target.y, links.l1(), links.l2())
}

/// [`solve`] on raw scalars, without a validated [`LinkLengths`].
///
/// Non-positive link lengths describe an invalid mechanism and yield
/// [`SolveResult::Unreachable`] for any target.
pub fn solve_raw(x: f64, y: f64, l1: f64, l2: f64) -> SolveResult {
    // Invalid mechanism, not a geometry failure.
    if l1 <= 0.0 || l2 <= 0.0 {
        return SolveResult::Unreachable;
    }

    let r_squared = x * x + y * y;
    let r = r_squared.sqrt();

    if r > l1 + l2 {
        return SolveResult::Unreachable;
    }
    if r < (l1 - l2).abs() {
        return SolveResult::Unreachable;
    }
    // The origin is reachable only with equal links folded back on themselves.
    if r == 0.0 && l1 != l2 {
        return SolveResult::Unreachable;
    }

    // Law of cosines. The clamp absorbs floating-point overshoot at the reach
    // boundary; it is the sole numeric safety net in the solver.
    let cos_theta2 = (r_squared - l1 * l1 - l2 * l2) / (2.0 * l1 * l2);
    let cos_theta2 = cos_theta2.clamp(-1.0, 1.0);

    let theta2_up = cos_theta2.acos();
    let theta2_down = -theta2_up;

    SolveResult::TwoCandidates {
        elbow_up: JointAngles::new(shoulder_angle(x, y, l1, l2, theta2_up), theta2_up),
        elbow_down: JointAngles::new(shoulder_angle(x, y, l1, l2, theta2_down), theta2_down),
    }
}

/// Shoulder angle for a given elbow branch:
/// `theta1 = atan2(y, x) - atan2(k2, k1)` with `k1 = l1 + l2*cos(theta2)`,
/// `k2 = l2*sin(theta2)`.
fn shoulder_angle(x: f64, y: f64, l1: f64, l2: f64, theta2: f64) -> f64 {
    let k1 = l1 + l2 * theta2.cos();
    let k2 = l2 * theta2.sin();
    y.atan2(x) - k2.atan2(k1)
}

/// Forward kinematics: joint angles to joint positions.
pub fn forward_kinematics(angles: &JointAngles, links: &LinkLengths) -> ArmPose {
    let elbow = Point2::new(
        links.l1() * angles.theta1.cos(),
        links.l1() * angles.theta1.sin(),
    );
    let reach2 = angles.theta1 + angles.theta2;
    let end_effector = elbow + Vector2::new(links.l2() * reach2.cos(), links.l2() * reach2.sin());
    ArmPose {
        elbow,
        end_effector,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
