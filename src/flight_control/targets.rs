use super::common::math::wrap_heading;

/// Pilot selected autopilot targets as dialled into the flight control unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutopilotTargets {
    heading_select: f64,
    heading_managed: bool,
    speed_select: u16,
    altitude_select: i32,
    vertical_speed_select: i32,
}

impl AutopilotTargets {
    pub const MAX_SPEED_SELECT: u16 = 999;

    pub fn new(heading_select: f64, speed_select: i32, altitude_select: i32, vs_select: i32) -> Self {
        Self {
            heading_select: wrap_heading(heading_select),
            heading_managed: false,
            speed_select: Self::clamp_speed(speed_select),
            altitude_select,
            vertical_speed_select: vs_select,
        }
    }

    pub fn heading_select(&self) -> f64 { self.heading_select }
    pub fn heading_managed(&self) -> bool { self.heading_managed }
    pub fn speed_select(&self) -> u16 { self.speed_select }
    pub fn altitude_select(&self) -> i32 { self.altitude_select }
    pub fn vertical_speed_select(&self) -> i32 { self.vertical_speed_select }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn clamp_speed(value: i32) -> u16 { value.clamp(0, i32::from(Self::MAX_SPEED_SELECT)) as u16 }

    pub fn set_heading_select(&mut self, heading: f64) { self.heading_select = wrap_heading(heading); }

    /// Turns the heading knob by `delta` degrees. A turn that changes the selection drops
    /// managed heading back to selected heading.
    pub fn adjust_heading_select(&mut self, delta: i32) {
        if delta == 0 {
            return;
        }
        self.heading_managed = false;
        self.heading_select = wrap_heading(self.heading_select + f64::from(delta));
    }

    /// Short push of the heading knob.
    pub fn toggle_heading_managed(&mut self) { self.heading_managed = !self.heading_managed; }

    pub fn set_speed_select(&mut self, speed: i32) { self.speed_select = Self::clamp_speed(speed); }

    pub fn adjust_speed_select(&mut self, delta: i32) {
        self.speed_select = Self::clamp_speed(i32::from(self.speed_select).saturating_add(delta));
    }

    pub fn set_altitude_select(&mut self, altitude: i32) { self.altitude_select = altitude; }

    pub fn set_vertical_speed_select(&mut self, vs: i32) { self.vertical_speed_select = vs; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_knob_wraps_and_cancels_managed() {
        let mut targets = AutopilotTargets::new(17.0, 250, 30000, 1500);
        targets.toggle_heading_managed();
        assert!(targets.heading_managed());
        targets.adjust_heading_select(0);
        assert!(targets.heading_managed());
        targets.adjust_heading_select(-20);
        assert!(!targets.heading_managed());
        assert!((targets.heading_select() - 357.0).abs() < 1e-12);
        targets.adjust_heading_select(5);
        assert!((targets.heading_select() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut targets = AutopilotTargets::new(0.0, 1200, 0, 0);
        assert_eq!(targets.speed_select(), 999);
        targets.set_speed_select(-4);
        assert_eq!(targets.speed_select(), 0);
        targets.adjust_speed_select(250);
        assert_eq!(targets.speed_select(), 250);
        targets.adjust_speed_select(i32::MAX);
        assert_eq!(targets.speed_select(), 999);
    }

    #[test]
    fn test_altitude_and_vs_pass_through() {
        let mut targets = AutopilotTargets::new(0.0, 250, 30000, 1500);
        targets.set_altitude_select(-1200);
        targets.set_vertical_speed_select(-99_999);
        assert_eq!(targets.altitude_select(), -1200);
        assert_eq!(targets.vertical_speed_select(), -99_999);
    }
}
