//! Configuration selection on top of the solver's candidates.
//!
//! The arm operates above an infinite ground plane at `y = 0`: a first link
//! pointing below ground is physically disallowed even if the end-effector
//! and second link stay above it. The selector filters each candidate on the
//! height of its first joint and resolves which branch the caller should
//! display, honoring the caller's previous elbow selection where possible.
//!
//! Stateless across calls: `previous` is caller-owned view state, passed in
//! and reflected back through the outcome rather than stored here.

use planarm_core::types::{
    ElbowMode, JointAngles, LinkLengths, SelectionOutcome, SolveResult, ValidatedConfiguration,
};

/// Ground-check one candidate: `first_joint_height = l1 * sin(theta1)`,
/// valid iff at or above the ground plane.
pub fn validate_candidate(angles: JointAngles, links: &LinkLengths) -> ValidatedConfiguration {
    let first_joint_height = links.l1() * angles.theta1.sin();
    ValidatedConfiguration {
        angles,
        first_joint_height,
        is_ground_valid: first_joint_height >= 0.0,
    }
}

/// Filter the solver's candidates against the ground plane and pick the
/// branch to display.
///
/// - Both candidates ground-valid: both are exposed; `previous` is preserved
///   if `Some`, otherwise the selection defaults to [`ElbowMode::Up`].
/// - Exactly one valid: that branch wins. A `previous` pointing at the
///   now-invalid branch auto-flips, so the caller never keeps displaying a
///   stale invalid pose.
/// - Neither valid, or [`SolveResult::Unreachable`]:
///   [`SelectionOutcome::NoValidConfiguration`].
pub fn select(
    result: &SolveResult,
    links: &LinkLengths,
    previous: Option<ElbowMode>,
) -> SelectionOutcome {
    let SolveResult::TwoCandidates {
        elbow_up,
        elbow_down,
    } = result
    else {
        return SelectionOutcome::NoValidConfiguration;
    };

    let up = validate_candidate(*elbow_up, links);
    let down = validate_candidate(*elbow_down, links);

    match (up.is_ground_valid, down.is_ground_valid) {
        (true, true) => SelectionOutcome::BothValid {
            elbow_up: up,
            elbow_down: down,
            selected: previous.unwrap_or(ElbowMode::Up),
        },
        (true, false) => SelectionOutcome::SingleValid {
            config: up,
            mode: ElbowMode::Up,
        },
        (false, true) => SelectionOutcome::SingleValid {
            config: down,
            mode: ElbowMode::Down,
        },
        (false, false) => SelectionOutcome::NoValidConfiguration,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;
    use approx::assert_relative_eq;
    use nalgebra::Point2;

    fn links(l1: f64, l2: f64) -> LinkLengths {
        LinkLengths::new(l1, l2).unwrap()
    }

    #[test]
    fn validate_candidate_computes_first_joint_height() {
        let links = links(1.0, 1.0);
        let config = validate_candidate(JointAngles::new(std::f64::consts::FRAC_PI_6, 0.5), &links);
        assert_relative_eq!(config.first_joint_height, 0.5, epsilon = 1e-12);
        assert!(config.is_ground_valid);

        let below = validate_candidate(JointAngles::new(-0.1, 0.5), &links);
        assert!(below.first_joint_height < 0.0);
        assert!(!below.is_ground_valid);
    }

    #[test]
    fn horizontal_first_link_counts_as_valid() {
        let links = links(1.0, 1.0);
        let config = validate_candidate(JointAngles::new(0.0, 0.3), &links);
        assert_relative_eq!(config.first_joint_height, 0.0);
        assert!(config.is_ground_valid);
    }

    #[test]
    fn unreachable_yields_no_valid_configuration() {
        let links = links(0.18, 0.20);
        assert_eq!(
            select(&SolveResult::Unreachable, &links, Some(ElbowMode::Up)),
            SelectionOutcome::NoValidConfiguration
        );
    }

    #[test]
    fn both_valid_defaults_to_elbow_up() {
        // High target: both branches keep the first joint above ground.
        let links = links(1.0, 1.0);
        let result = solve(Point2::new(0.3, 1.5), &links);
        let outcome = select(&result, &links, None);

        match outcome {
            SelectionOutcome::BothValid {
                elbow_up,
                elbow_down,
                selected,
            } => {
                assert!(elbow_up.is_ground_valid);
                assert!(elbow_down.is_ground_valid);
                assert_eq!(selected, ElbowMode::Up);
            }
            other => panic!("expected BothValid, got {other:?}"),
        }
    }

    #[test]
    fn both_valid_preserves_previous_selection() {
        let links = links(1.0, 1.0);
        let result = solve(Point2::new(0.3, 1.5), &links);
        let outcome = select(&result, &links, Some(ElbowMode::Down));
        assert_eq!(outcome.selected_mode(), Some(ElbowMode::Down));
    }

    #[test]
    fn ground_collision_excludes_one_branch() {
        // Near-horizontal reach: the positive-theta2 branch puts theta1
        // slightly negative, sending the first joint below ground. The
        // negative-theta2 branch stays valid.
        let links = links(1.0, 1.0);
        let result = solve(Point2::new(1.8, 0.2), &links);

        let up = validate_candidate(result.candidate(ElbowMode::Up).unwrap(), &links);
        assert!(up.first_joint_height < 0.0);

        let outcome = select(&result, &links, None);
        match outcome {
            SelectionOutcome::SingleValid { config, mode } => {
                assert_eq!(mode, ElbowMode::Down);
                assert!(config.is_ground_valid);
                assert!(config.angles.theta2 <= 0.0);
                assert!(config.angles.theta1.sin() > 0.0);
            }
            other => panic!("expected SingleValid, got {other:?}"),
        }
    }

    #[test]
    fn stale_selection_auto_flips_to_valid_branch() {
        let links = links(1.0, 1.0);
        let result = solve(Point2::new(1.8, 0.2), &links);

        // Caller previously displayed the branch that is now invalid; the
        // selection must flip rather than keep a stale pose.
        let outcome = select(&result, &links, Some(ElbowMode::Up));
        assert_eq!(outcome.selected_mode(), Some(ElbowMode::Down));
    }

    #[test]
    fn both_branches_below_ground_yield_no_valid_configuration() {
        // Reachable target deep below the ground plane: both branches dip
        // the first joint under y = 0.
        let links = links(1.0, 1.0);
        let result = solve(Point2::new(0.5, -1.5), &links);
        assert!(result.is_reachable());

        let outcome = select(&result, &links, Some(ElbowMode::Up));
        assert_eq!(outcome, SelectionOutcome::NoValidConfiguration);
    }

    #[test]
    fn selection_is_stateless_across_calls() {
        let links = links(1.0, 1.0);
        let result = solve(Point2::new(0.3, 1.5), &links);

        let first = select(&result, &links, Some(ElbowMode::Down));
        let second = select(&result, &links, None);
        // The previous call does not leak into the next: with no previous
        // selection the default applies again.
        assert_eq!(first.selected_mode(), Some(ElbowMode::Down));
        assert_eq!(second.selected_mode(), Some(ElbowMode::Up));
    }

    #[test]
    fn selected_config_matches_selected_mode() {
        let links = links(1.0, 1.0);
        let result = solve(Point2::new(0.3, 1.5), &links);
        let outcome = select(&result, &links, Some(ElbowMode::Down));

        let config = outcome.selected_config().unwrap();
        assert_eq!(config.angles, result.candidate(ElbowMode::Down).unwrap());
    }
}
