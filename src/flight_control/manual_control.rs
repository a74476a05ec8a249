use super::common::math::lerp;
use std::time::Duration;

/// A timed, linear transition of one attitude axis requested by manual control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualRamp {
    start: f64,
    end: f64,
    duration: Duration,
    elapsed: Duration,
}

impl ManualRamp {
    /// Transition time used when the caller does not name one.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(100);

    pub fn new(start: f64, end: f64, duration: Duration) -> Self {
        Self { start, end, duration, elapsed: Duration::ZERO }
    }

    pub fn is_done(&self) -> bool { self.elapsed >= self.duration }

    /// Value of the axis at the current point of the ramp.
    pub fn value(&self) -> f64 {
        if self.is_done() {
            return self.end;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        lerp(self.start, self.end, t)
    }

    /// Advances the ramp by `dt` and returns the new axis value.
    pub fn advance(&mut self, dt: Duration) -> f64 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }
}
