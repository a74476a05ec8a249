use super::common::math::wrap_heading;

/// Rate-of-turn approximation for a coordinated, banked turn.
pub struct TurnRateModel;

impl TurnRateModel {
    /// Empirical rate-of-turn constant for knots and degrees per second.
    const RATE_CONSTANT: f64 = 1091.0;

    /// Turn rate produced by a bank angle at a given true airspeed.
    ///
    /// # Arguments
    /// - `roll_deg`: Bank angle in degrees, positive is right wing down.
    /// - `airspeed_kt`: True airspeed in knots.
    ///
    /// # Returns
    /// - The turn rate in degrees per second, or `0.0` if the airspeed is not positive.
    pub fn rate(roll_deg: f64, airspeed_kt: f64) -> f64 {
        if airspeed_kt <= 0.0 {
            return 0.0;
        }
        let roll_rad = roll_deg.to_radians();
        let load_factor = 1.0 / roll_rad.cos();
        (Self::RATE_CONSTANT * roll_rad.tan()) / (airspeed_kt * load_factor)
    }
}

/// Integrates the turn rate into the aircraft heading on every dynamics tick.
pub struct HeadingIntegrator;

impl HeadingIntegrator {
    /// Heading change per unit of turn rate and dynamics tick.
    ///
    /// This is a tuned simulation speed, paired with the 30 ms dynamics period. Changing
    /// either one alone changes how fast the simulated aircraft turns.
    pub const SCALE: f64 = 0.01;

    /// Advances `heading` by one integration step.
    ///
    /// # Returns
    /// - `(heading - turn_rate * scale) mod 360`, in `[0, 360)`.
    pub fn advance(heading: f64, turn_rate: f64, scale: f64) -> f64 {
        wrap_heading(heading - turn_rate * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_wings_do_not_turn() {
        for tas in [1.0, 80.0, 150.0, 480.0] {
            assert!(TurnRateModel::rate(0.0, tas).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_zero_or_negative_airspeed_gives_no_turn() {
        for roll in [-30.0, -5.5, 0.0, 12.0, 30.0, 89.0] {
            assert!(TurnRateModel::rate(roll, 0.0).abs() < f64::EPSILON);
            assert!(TurnRateModel::rate(roll, -120.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_rate_reference_fifteen_degrees_at_150_kt() {
        let roll = 15.0_f64.to_radians();
        let expected = (1091.0 * roll.tan()) / (150.0 * (1.0 / roll.cos()));
        let actual = TurnRateModel::rate(15.0, 150.0);
        assert!((actual - expected).abs() < 1e-6, "{actual} vs {expected}");
        // roughly 1.88 deg/s
        assert!((actual - 1.883).abs() < 1e-3);
    }

    #[test]
    fn test_rate_is_odd_in_roll() {
        for roll in [1.0, 7.5, 20.0, 30.0] {
            let right = TurnRateModel::rate(roll, 150.0);
            let left = TurnRateModel::rate(-roll, 150.0);
            assert!(right > 0.0);
            assert!((right + left).abs() < 1e-12);
        }
    }

    #[test]
    fn test_advance_wraps_both_ways() {
        assert!((HeadingIntegrator::advance(0.0, 2.0, 1.0) - 358.0).abs() < 1e-12);
        assert!((HeadingIntegrator::advance(359.5, -1.0, 1.0) - 0.5).abs() < 1e-12);
        assert!((HeadingIntegrator::advance(90.0, 1.5, HeadingIntegrator::SCALE) - 89.985).abs() < 1e-12);
    }

    #[test]
    fn test_repeated_integration_stays_in_range() {
        let mut heading = 17.0;
        let rate = TurnRateModel::rate(-30.0, 150.0);
        for _ in 0..200_000 {
            heading = HeadingIntegrator::advance(heading, rate, HeadingIntegrator::SCALE);
            assert!((0.0..360.0).contains(&heading));
        }
    }
}
