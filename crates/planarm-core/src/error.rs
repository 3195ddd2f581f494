use thiserror::Error;

/// Input validation errors.
///
/// The solver itself never fails: every domain outcome is a value
/// ([`SolveResult`](crate::types::SolveResult) /
/// [`SelectionOutcome`](crate::types::SelectionOutcome)). These errors cover
/// the caller-side preconditions the solver does not re-check, chiefly
/// non-finite numbers and sub-ground targets.
///
/// Copy + static field names for cheap propagation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InputError {
    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} must be > 0, got {value}")]
    NonPositiveLength { field: &'static str, value: f64 },

    #[error("target y is below ground: {y}")]
    TargetBelowGround { y: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_display_messages() {
        assert_eq!(
            InputError::NonFinite { field: "l1" }.to_string(),
            "l1 is not a finite number"
        );
        assert_eq!(
            InputError::NonPositiveLength {
                field: "l2",
                value: -0.5
            }
            .to_string(),
            "l2 must be > 0, got -0.5"
        );
        assert_eq!(
            InputError::TargetBelowGround { y: -0.1 }.to_string(),
            "target y is below ground: -0.1"
        );
    }

    #[test]
    fn input_error_is_copy() {
        let err = InputError::NonFinite { field: "x" };
        let err2 = err; // Copy
        assert_eq!(err, err2);
    }
}
