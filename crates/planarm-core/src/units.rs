//! Unit conversion between user-facing centimeters and solver meters.
//!
//! The solver core is unit-agnostic as long as target coordinates and link
//! lengths agree; the front end accepts centimeters and converts here before
//! solving. Angle output is radians; degree formatting lives on
//! [`JointAngles`](crate::types::JointAngles).

/// Centimeters to meters.
pub fn cm_to_m(cm: f64) -> f64 {
    cm / 100.0
}

/// Meters to centimeters.
pub fn m_to_cm(m: f64) -> f64 {
    m * 100.0
}
