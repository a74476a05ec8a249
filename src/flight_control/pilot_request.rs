use crate::mode_control::ModeRequest;
use std::time::Duration;

/// Everything a pilot (or the instrument front end acting for one) can ask of the
/// flight control unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PilotRequest {
    /// A mode button press.
    Toggle(ModeRequest),
    SetHeadingSelect(f64),
    /// Heading knob rotation in whole degrees.
    AdjustHeadingSelect(i32),
    /// Short push of the heading knob.
    ToggleHeadingManaged,
    SetSpeedSelect(i32),
    /// Speed knob rotation in knots.
    AdjustSpeedSelect(i32),
    SetAltitudeSelect(i32),
    SetVerticalSpeedSelect(i32),
    /// Manual bank command, only honoured while HDG/TRK does not own roll.
    ManualRoll { target: f64, duration: Duration },
    ManualPitch { target: f64, duration: Duration },
}
