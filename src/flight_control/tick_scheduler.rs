use super::{
    flight_control_unit::FlightControlUnit,
    supervisor::{SupervisorHandle, TickKind},
};
use crate::info;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

/// Emits control and dynamics ticks to the supervisor on their fixed periods.
pub struct TickScheduler {
    handle: SupervisorHandle,
}

impl TickScheduler {
    pub fn new(handle: SupervisorHandle) -> Self { Self { handle } }

    /// Ticks until cancelled or until the supervisor stops accepting events.
    pub async fn run(self, c_tok: CancellationToken) {
        let mut control_interval = interval(FlightControlUnit::CONTROL_PERIOD);
        let mut dynamics_interval = interval(FlightControlUnit::DYNAMICS_PERIOD);
        control_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        dynamics_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            let kind = tokio::select! {
                biased;
                () = c_tok.cancelled() => break,
                _ = control_interval.tick() => TickKind::Control,
                _ = dynamics_interval.tick() => TickKind::Dynamics,
            };
            if !self.handle.tick(kind).await {
                info!("Supervisor gone, tick scheduler stopping.");
                break;
            }
        }
    }
}
