use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::error::InputError;

// ---------------------------------------------------------------------------
// LinkLengths
// ---------------------------------------------------------------------------

/// The two rigid segment lengths of the arm, in meters.
///
/// Validated at construction (both finite and > 0) and immutable afterwards.
/// Target coordinates must use the same unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkLengths {
    l1: f64,
    l2: f64,
}

impl LinkLengths {
    /// Validate and build link lengths.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NonFinite`] or [`InputError::NonPositiveLength`]
    /// if either length is NaN, infinite, zero, or negative.
    pub fn new(l1: f64, l2: f64) -> Result<Self, InputError> {
        if !l1.is_finite() {
            return Err(InputError::NonFinite { field: "l1" });
        }
        if !l2.is_finite() {
            return Err(InputError::NonFinite { field: "l2" });
        }
        if l1 <= 0.0 {
            return Err(InputError::NonPositiveLength {
                field: "l1",
                value: l1,
            });
        }
        if l2 <= 0.0 {
            return Err(InputError::NonPositiveLength {
                field: "l2",
                value: l2,
            });
        }
        Ok(Self { l1, l2 })
    }

    /// Length of the first link (shoulder to elbow).
    pub const fn l1(&self) -> f64 {
        self.l1
    }

    /// Length of the second link (elbow to end-effector).
    pub const fn l2(&self) -> f64 {
        self.l2
    }

    /// Maximum reach: `l1 + l2`.
    pub fn max_reach(&self) -> f64 {
        self.l1 + self.l2
    }

    /// Minimum reach: `|l1 - l2|` (inner edge of the reach annulus).
    pub fn min_reach(&self) -> f64 {
        (self.l1 - self.l2).abs()
    }
}

// ---------------------------------------------------------------------------
// Target validation
// ---------------------------------------------------------------------------

/// Validate a target point before solving.
///
/// The solver treats non-finite coordinates as a precondition violation, so
/// they are rejected here. A target below the ground plane (`y < 0`) can
/// never yield a legal pose and is rejected up front as well.
///
/// # Errors
///
/// Returns [`InputError::NonFinite`] or [`InputError::TargetBelowGround`].
pub fn validate_target(x: f64, y: f64) -> Result<Point2<f64>, InputError> {
    if !x.is_finite() {
        return Err(InputError::NonFinite { field: "x" });
    }
    if !y.is_finite() {
        return Err(InputError::NonFinite { field: "y" });
    }
    if y < 0.0 {
        return Err(InputError::TargetBelowGround { y });
    }
    Ok(Point2::new(x, y))
}

// ---------------------------------------------------------------------------
// JointAngles
// ---------------------------------------------------------------------------

/// One joint-space solution, in radians.
///
/// `theta1` is the shoulder angle measured from the positive x-axis to link 1.
/// `theta2` is the elbow angle of link 2 relative to the extension of link 1,
/// signed: positive = elbow up, negative = elbow down. Neither angle is
/// normalized to any particular range; degree conversion is display-only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointAngles {
    pub theta1: f64,
    pub theta2: f64,
}

impl JointAngles {
    pub const fn new(theta1: f64, theta2: f64) -> Self {
        Self { theta1, theta2 }
    }

    /// Both angles in degrees, for display.
    pub fn to_degrees(&self) -> (f64, f64) {
        (self.theta1.to_degrees(), self.theta2.to_degrees())
    }
}

// ---------------------------------------------------------------------------
// ElbowMode
// ---------------------------------------------------------------------------

/// The two kinematic branches of a two-link planar arm reaching the same
/// target, distinguished by the sign of the elbow angle `theta2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElbowMode {
    Up,
    Down,
}

impl ElbowMode {
    /// The other branch.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

impl std::fmt::Display for ElbowMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "elbow-up"),
            Self::Down => write!(f, "elbow-down"),
        }
    }
}

// ---------------------------------------------------------------------------
// SolveResult
// ---------------------------------------------------------------------------

/// Result of an IK solve: either the target is outside the reach annulus, or
/// exactly two candidate solutions exist.
///
/// A sum type rather than a list, so the "always exactly zero or two"
/// invariant is type-checked. At the reach boundary the two candidates
/// coincide numerically; that is not a separate state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SolveResult {
    /// Target outside the reach annulus, or invalid mechanism.
    Unreachable,
    /// Both kinematic branches, unranked.
    TwoCandidates {
        elbow_up: JointAngles,
        elbow_down: JointAngles,
    },
}

impl SolveResult {
    pub const fn is_reachable(&self) -> bool {
        matches!(self, Self::TwoCandidates { .. })
    }

    /// The candidate for a given branch, if reachable.
    pub const fn candidate(&self, mode: ElbowMode) -> Option<JointAngles> {
        match self {
            Self::Unreachable => None,
            Self::TwoCandidates {
                elbow_up,
                elbow_down,
            } => match mode {
                ElbowMode::Up => Some(*elbow_up),
                ElbowMode::Down => Some(*elbow_down),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// ValidatedConfiguration / SelectionOutcome
// ---------------------------------------------------------------------------

/// One candidate annotated with its ground-collision check.
///
/// Derived per candidate on every solve; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidatedConfiguration {
    pub angles: JointAngles,
    /// Height of the first joint (elbow): `l1 * sin(theta1)`.
    pub first_joint_height: f64,
    /// True iff the first joint is at or above the ground plane.
    pub is_ground_valid: bool,
}

/// Outcome of configuration selection: the three states of the selection
/// state machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// Unreachable target, or every candidate collides with the ground.
    NoValidConfiguration,
    /// Exactly one branch is ground-valid. A previous selection pointing at
    /// the other branch has been auto-flipped to `mode`.
    SingleValid {
        config: ValidatedConfiguration,
        mode: ElbowMode,
    },
    /// Both branches are ground-valid. `selected` preserves the caller's
    /// previous selection, defaulting to [`ElbowMode::Up`].
    BothValid {
        elbow_up: ValidatedConfiguration,
        elbow_down: ValidatedConfiguration,
        selected: ElbowMode,
    },
}

impl SelectionOutcome {
    /// The currently selected mode, if any configuration is valid.
    pub const fn selected_mode(&self) -> Option<ElbowMode> {
        match self {
            Self::NoValidConfiguration => None,
            Self::SingleValid { mode, .. } => Some(*mode),
            Self::BothValid { selected, .. } => Some(*selected),
        }
    }

    /// The configuration currently selected for display, if any.
    pub const fn selected_config(&self) -> Option<ValidatedConfiguration> {
        match self {
            Self::NoValidConfiguration => None,
            Self::SingleValid { config, .. } => Some(*config),
            Self::BothValid {
                elbow_up,
                elbow_down,
                selected,
            } => match selected {
                ElbowMode::Up => Some(*elbow_up),
                ElbowMode::Down => Some(*elbow_down),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
