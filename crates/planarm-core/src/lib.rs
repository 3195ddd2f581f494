// planarm-core: Types, validation, units, and errors for planar arm kinematics.

pub mod error;
pub mod types;
pub mod units;

pub use error::InputError;
pub use types::{
    validate_target, ElbowMode, JointAngles, LinkLengths, SelectionOutcome, SolveResult,
    ValidatedConfiguration,
};
