use super::common::math::wrap_heading;

/// Simulated aircraft attitude and heading as seen by the instruments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AircraftState {
    /// Heading in degrees, always within `[0, 360)`.
    current_heading: f64,
    /// Bank angle in degrees, always within `[-ROLL_LIMIT, ROLL_LIMIT]`.
    roll: f64,
    /// Pitch in degrees, only written by manual control.
    pitch: f64,
    /// True airspeed in knots.
    true_airspeed: f64,
}

impl AircraftState {
    /// Bank angle limit shown on the attitude indicator arc.
    pub const ROLL_LIMIT: f64 = 30.0;
    /// Bank angles closer to level than this are written as exactly level.
    pub const ROLL_DEADBAND: f64 = 0.18;

    pub fn new(current_heading: f64, true_airspeed: f64) -> Self {
        Self {
            current_heading: wrap_heading(current_heading),
            roll: 0.0,
            pitch: 0.0,
            true_airspeed: true_airspeed.max(0.0),
        }
    }

    pub fn current_heading(&self) -> f64 { self.current_heading }
    pub fn roll(&self) -> f64 { self.roll }
    pub fn pitch(&self) -> f64 { self.pitch }
    pub fn true_airspeed(&self) -> f64 { self.true_airspeed }
    #[allow(clippy::float_cmp)]
    pub fn wings_level(&self) -> bool { self.roll == 0.0 }

    /// Writes a new heading, reduced to `[0, 360)`.
    pub fn set_heading(&mut self, heading: f64) { self.current_heading = wrap_heading(heading); }

    /// Writes a new bank angle.
    ///
    /// The value is clamped to the roll limit and snapped to level inside the dead-band.
    pub fn set_roll(&mut self, roll: f64) {
        let clamped = roll.clamp(-Self::ROLL_LIMIT, Self::ROLL_LIMIT);
        self.roll = if clamped.abs() < Self::ROLL_DEADBAND { 0.0 } else { clamped };
    }

    pub fn set_pitch(&mut self, pitch: f64) { self.pitch = pitch; }
}
