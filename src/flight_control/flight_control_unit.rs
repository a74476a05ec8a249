use super::{
    aircraft_state::AircraftState,
    common::math::heading_error,
    heading_control::{RollActuator, RollCommandLaw},
    manual_control::ManualRamp,
    pilot_request::PilotRequest,
    targets::AutopilotTargets,
    turn_dynamics::{HeadingIntegrator, TurnRateModel},
};
use crate::config::FcuConfig;
use crate::fatal;
use crate::mode_control::{ModeFlags, ModeRequest, RequestOutcome, ToggleOutcome, transition};
use std::time::Duration;

/// Read-only copy of everything the instruments display, tagged with a revision that
/// increases on every published change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FcuSnapshot {
    pub revision: u64,
    pub state: AircraftState,
    pub targets: AutopilotTargets,
    pub modes: ModeFlags,
}

/// The single owner of aircraft state, autopilot targets and mode flags.
///
/// All methods run to completion without blocking; serialising calls is up to the
/// caller (see `AutopilotSupervisor`).
#[derive(Debug, Clone)]
pub struct FlightControlUnit {
    state: AircraftState,
    targets: AutopilotTargets,
    modes: ModeFlags,
    roll_ramp: Option<ManualRamp>,
    pitch_ramp: Option<ManualRamp>,
}

impl FlightControlUnit {
    /// Period of the heading hold control tick.
    pub const CONTROL_PERIOD: Duration = Duration::from_millis(100);
    /// Period of the turn dynamics tick, coupled to `HeadingIntegrator::SCALE`.
    pub const DYNAMICS_PERIOD: Duration = Duration::from_millis(30);
    const ROLL_OWNED_RATIONALE: &'static str = "HDG/TRK owns roll";
    const NON_FINITE_RATIONALE: &'static str = "non-finite value";

    pub fn new(config: &FcuConfig) -> Self {
        Self {
            state: AircraftState::new(config.initial_heading, config.true_airspeed),
            targets: AutopilotTargets::new(
                config.heading_select,
                config.speed_select,
                config.altitude_select,
                config.vertical_speed_select,
            ),
            modes: ModeFlags::default(),
            roll_ramp: None,
            pitch_ramp: None,
        }
    }

    pub fn state(&self) -> &AircraftState { &self.state }
    pub fn targets(&self) -> &AutopilotTargets { &self.targets }
    pub fn modes(&self) -> &ModeFlags { &self.modes }

    pub fn snapshot(&self, revision: u64) -> FcuSnapshot {
        FcuSnapshot { revision, state: self.state, targets: self.targets, modes: self.modes }
    }

    /// Heading hold pipeline, a no-op unless HDG/TRK is active.
    ///
    /// # Returns
    /// - `true` if the roll changed.
    #[allow(clippy::float_cmp)]
    pub fn control_tick(&mut self) -> bool {
        if !self.modes.hdg_trk_active() {
            return false;
        }
        let error = heading_error(self.targets.heading_select(), self.state.current_heading());
        let desired = RollCommandLaw::command(error);
        let prev_roll = self.state.roll();
        self.state.set_roll(RollActuator::step(prev_roll, desired));
        self.state.roll() != prev_roll
    }

    /// Advances manual attitude transitions and integrates the heading for one dynamics
    /// period. The heading only moves while the wings are banked.
    ///
    /// # Returns
    /// - `true` if any part of the aircraft state changed.
    pub fn dynamics_tick(&mut self) -> bool {
        let before = self.state;
        if let Some(ramp) = self.pitch_ramp.as_mut() {
            self.state.set_pitch(ramp.advance(Self::DYNAMICS_PERIOD));
            if ramp.is_done() {
                self.pitch_ramp = None;
            }
        }
        if let Some(ramp) = self.roll_ramp.as_mut() {
            self.state.set_roll(ramp.advance(Self::DYNAMICS_PERIOD));
            if ramp.is_done() {
                self.roll_ramp = None;
            }
        }
        if !self.state.wings_level() {
            let rate = TurnRateModel::rate(self.state.roll(), self.state.true_airspeed());
            let heading =
                HeadingIntegrator::advance(self.state.current_heading(), rate, HeadingIntegrator::SCALE);
            self.state.set_heading(heading);
        }
        self.state != before
    }

    /// Applies a mode button press through the interlock machine.
    pub fn toggle(&mut self, request: ModeRequest) -> ToggleOutcome {
        let outcome = transition(self.modes, request);
        if let ToggleOutcome::Accepted(next) = outcome {
            if let Err(violation) = next.check_invariants() {
                fatal!("{request} produced illegal mode flags {next:?}: {violation}");
            }
            if next.hdg_trk_active() && !self.modes.hdg_trk_active() {
                // heading hold takes roll away from manual control
                self.roll_ramp = None;
            }
            self.modes = next;
        }
        outcome
    }

    /// Handles any pilot request.
    ///
    /// Manual attitude requests with a non-zero duration start a transition that the
    /// dynamics ticks carry out; they count as applied once the transition is started.
    pub fn handle(&mut self, request: PilotRequest) -> RequestOutcome {
        match request {
            PilotRequest::Toggle(mode_req) => match self.toggle(mode_req) {
                ToggleOutcome::Accepted(_) => RequestOutcome::Applied,
                ToggleOutcome::Rejected(why) => RequestOutcome::Rejected(why),
            },
            PilotRequest::ManualRoll { target, duration } => {
                if self.modes.hdg_trk_active() {
                    return RequestOutcome::Rejected(Self::ROLL_OWNED_RATIONALE);
                }
                if !target.is_finite() {
                    return RequestOutcome::Rejected(Self::NON_FINITE_RATIONALE);
                }
                let target_clamped = target.clamp(-AircraftState::ROLL_LIMIT, AircraftState::ROLL_LIMIT);
                let running = self.roll_ramp.is_some();
                let (outcome, ramp) = Self::start_ramp(self.state.roll(), target_clamped, duration, running);
                self.roll_ramp = ramp;
                if ramp.is_none() {
                    self.state.set_roll(target_clamped);
                }
                outcome
            }
            PilotRequest::ManualPitch { target, duration } => {
                if !target.is_finite() {
                    return RequestOutcome::Rejected(Self::NON_FINITE_RATIONALE);
                }
                let running = self.pitch_ramp.is_some();
                let (outcome, ramp) = Self::start_ramp(self.state.pitch(), target, duration, running);
                self.pitch_ramp = ramp;
                if ramp.is_none() {
                    self.state.set_pitch(target);
                }
                outcome
            }
            PilotRequest::SetHeadingSelect(hdg) if !hdg.is_finite() => {
                RequestOutcome::Rejected(Self::NON_FINITE_RATIONALE)
            }
            PilotRequest::SetHeadingSelect(hdg) => self.update_targets(|t| t.set_heading_select(hdg)),
            PilotRequest::AdjustHeadingSelect(delta) => {
                self.update_targets(|t| t.adjust_heading_select(delta))
            }
            PilotRequest::ToggleHeadingManaged => self.update_targets(AutopilotTargets::toggle_heading_managed),
            PilotRequest::SetSpeedSelect(spd) => self.update_targets(|t| t.set_speed_select(spd)),
            PilotRequest::AdjustSpeedSelect(delta) => self.update_targets(|t| t.adjust_speed_select(delta)),
            PilotRequest::SetAltitudeSelect(alt) => self.update_targets(|t| t.set_altitude_select(alt)),
            PilotRequest::SetVerticalSpeedSelect(vs) => {
                self.update_targets(|t| t.set_vertical_speed_select(vs))
            }
        }
    }

    fn update_targets(&mut self, update: impl FnOnce(&mut AutopilotTargets)) -> RequestOutcome {
        let before = self.targets;
        update(&mut self.targets);
        if self.targets == before { RequestOutcome::Unchanged } else { RequestOutcome::Applied }
    }

    /// Plans a manual transition of one axis. Asking for the current value stops a
    /// running transition of that axis, which counts as applied.
    #[allow(clippy::float_cmp)]
    fn start_ramp(
        from: f64,
        to: f64,
        duration: Duration,
        running: bool,
    ) -> (RequestOutcome, Option<ManualRamp>) {
        if from == to {
            let outcome = if running { RequestOutcome::Applied } else { RequestOutcome::Unchanged };
            return (outcome, None);
        }
        let ramp = ManualRamp::new(from, to, duration);
        if ramp.is_done() {
            (RequestOutcome::Applied, None)
        } else {
            (RequestOutcome::Applied, Some(ramp))
        }
    }
}
