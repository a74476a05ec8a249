use super::common::math::step_towards;
use strum_macros::Display;

/// Sensitivity band of the heading hold law, selected by the magnitude of the heading error.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
pub enum SensitivityBand {
    /// `|error| < 5°`: aggressive fine correction.
    Fine,
    /// `5° <= |error| < 15°`.
    Medium,
    /// `|error| >= 15°`.
    Coarse,
}

impl SensitivityBand {
    const FINE_LIMIT: f64 = 5.0;
    const MEDIUM_LIMIT: f64 = 15.0;

    pub fn from_error(error: f64) -> Self {
        let abs_err = error.abs();
        if abs_err < Self::FINE_LIMIT {
            SensitivityBand::Fine
        } else if abs_err < Self::MEDIUM_LIMIT {
            SensitivityBand::Medium
        } else {
            SensitivityBand::Coarse
        }
    }

    pub fn divisor(self) -> f64 {
        match self {
            SensitivityBand::Fine => 0.2,
            SensitivityBand::Medium => 0.5,
            SensitivityBand::Coarse => 1.0,
        }
    }
}

/// Heading hold law: maps a heading error onto a desired bank angle.
pub struct RollCommandLaw;

impl RollCommandLaw {
    /// Maximum bank angle the law will ever command, in degrees.
    pub const MAX_COMMAND: f64 = 29.0;

    /// Computes the commanded roll for a heading error.
    ///
    /// The scaled error is saturated to `±MAX_COMMAND` and then inverted: a target to the
    /// right (positive error) yields a negative roll command, which the turn dynamics turn
    /// into an increasing heading.
    ///
    /// # Arguments
    /// - `error`: Signed heading error in degrees, as produced by `heading_error`.
    ///
    /// # Returns
    /// - The roll command in `[-29, 29]` degrees.
    pub fn command(error: f64) -> f64 {
        let band = SensitivityBand::from_error(error);
        let raw = (error / band.divisor()).clamp(-Self::MAX_COMMAND, Self::MAX_COMMAND);
        -raw
    }
}

/// Rate limited roll servo, invoked once per control tick.
pub struct RollActuator;

impl RollActuator {
    /// Maximum roll change per invocation, in degrees.
    pub const RATE: f64 = 0.5;

    /// Moves `current_roll` one rate step towards `target_roll`.
    ///
    /// Below one step of remaining distance the roll snaps onto the target, so the servo
    /// never oscillates around it.
    pub fn step(current_roll: f64, target_roll: f64) -> f64 {
        step_towards(current_roll, target_roll, Self::RATE)
    }
}
