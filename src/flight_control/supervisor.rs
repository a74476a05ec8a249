use super::{
    flight_control_unit::{FcuSnapshot, FlightControlUnit},
    pilot_request::PilotRequest,
};
use crate::config::FcuConfig;
use crate::mode_control::{ModeRequest, RequestOutcome};
use crate::{event, info, log, mode, warn};
use strum_macros::Display;
use tokio::sync::{mpsc, oneshot, watch};
use tokio_util::sync::CancellationToken;

/// Which of the two periodic pipelines a tick belongs to.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Control,
    Dynamics,
}

/// Messages consumed by the supervisor's event loop.
#[derive(Debug)]
pub enum SupervisorEvent {
    Tick(TickKind),
    Pilot { request: PilotRequest, reply: Option<oneshot::Sender<RequestOutcome>> },
}

/// Sole owner of the flight control unit.
///
/// Ticks and pilot requests arrive on one queue and are applied strictly in arrival
/// order, so a tick always sees a mode change either completely or not at all. Every
/// mutation is published as a new `FcuSnapshot` on a watch channel.
pub struct AutopilotSupervisor {
    fcu: FlightControlUnit,
    event_rx: mpsc::Receiver<SupervisorEvent>,
    snapshot_tx: watch::Sender<FcuSnapshot>,
    revision: u64,
}

impl AutopilotSupervisor {
    /// Capacity of the event queue shared by the scheduler and pilot inputs.
    const EVENT_QUEUE_SIZE: usize = 64;

    /// Creates a new supervisor together with the handle used to talk to it.
    pub fn new(config: &FcuConfig) -> (AutopilotSupervisor, SupervisorHandle) {
        let fcu = FlightControlUnit::new(config);
        let (event_tx, event_rx) = mpsc::channel(Self::EVENT_QUEUE_SIZE);
        let (snapshot_tx, snapshot_rx) = watch::channel(fcu.snapshot(0));
        (
            Self { fcu, event_rx, snapshot_tx, revision: 0 },
            SupervisorHandle { event_tx, snapshot_rx },
        )
    }

    /// Runs the event loop until cancelled or until every handle is dropped.
    pub async fn run(mut self, c_tok: CancellationToken) {
        info!(
            "Autopilot supervisor online, HDG {:.1} SEL {:.1}, modes: {}",
            self.fcu.state().current_heading(),
            self.fcu.targets().heading_select(),
            self.fcu.modes()
        );
        loop {
            tokio::select! {
                biased;
                () = c_tok.cancelled() => break,
                ev = self.event_rx.recv() => match ev {
                    Some(event) => self.dispatch(event),
                    None => break,
                },
            }
        }
        info!("Autopilot supervisor offline after {} published updates.", self.revision);
    }

    fn dispatch(&mut self, event: SupervisorEvent) {
        match event {
            SupervisorEvent::Tick(TickKind::Control) => {
                if self.fcu.control_tick() {
                    self.publish();
                }
            }
            SupervisorEvent::Tick(TickKind::Dynamics) => {
                if self.fcu.dynamics_tick() {
                    self.publish();
                }
            }
            SupervisorEvent::Pilot { request, reply } => {
                let outcome = self.fcu.handle(request);
                Self::log_outcome(request, outcome);
                if outcome.changed() {
                    self.publish();
                }
                if let Some(reply_tx) = reply {
                    // the requester may have given up waiting
                    let _ = reply_tx.send(outcome);
                }
            }
        }
    }

    fn log_outcome(request: PilotRequest, outcome: RequestOutcome) {
        match (request, outcome) {
            (PilotRequest::Toggle(mode_req), RequestOutcome::Applied) => {
                mode!("{mode_req} pressed.");
            }
            (PilotRequest::Toggle(mode_req), RequestOutcome::Rejected(why)) => {
                log!("{mode_req} ignored: {why}.");
            }
            (_, RequestOutcome::Rejected(why)) => warn!("Rejected {request:?}: {why}."),
            (_, RequestOutcome::Applied | RequestOutcome::Unchanged) => {
                event!("{request:?} -> {outcome:?}");
            }
        }
    }

    fn publish(&mut self) {
        self.revision += 1;
        let snapshot = self.fcu.snapshot(self.revision);
        event!(
            "rev {}: HDG {:.2} ROLL {:.2} [{}]",
            snapshot.revision,
            snapshot.state.current_heading(),
            snapshot.state.roll(),
            snapshot.modes
        );
        self.snapshot_tx.send_replace(snapshot);
    }
}

/// Cloneable access point to a running `AutopilotSupervisor`.
#[derive(Clone)]
pub struct SupervisorHandle {
    event_tx: mpsc::Sender<SupervisorEvent>,
    snapshot_rx: watch::Receiver<FcuSnapshot>,
}

impl SupervisorHandle {
    const OFFLINE_RATIONALE: &'static str = "supervisor offline";

    /// Submits a pilot request and waits until it has been applied or rejected.
    pub async fn request(&self, request: PilotRequest) -> RequestOutcome {
        let (reply_tx, reply_rx) = oneshot::channel();
        let event = SupervisorEvent::Pilot { request, reply: Some(reply_tx) };
        if self.event_tx.send(event).await.is_err() {
            return RequestOutcome::Rejected(Self::OFFLINE_RATIONALE);
        }
        reply_rx.await.unwrap_or(RequestOutcome::Rejected(Self::OFFLINE_RATIONALE))
    }

    pub async fn toggle(&self, mode_req: ModeRequest) -> RequestOutcome {
        self.request(PilotRequest::Toggle(mode_req)).await
    }

    /// Queues a tick. Returns `false` once the supervisor is gone.
    pub async fn tick(&self, kind: TickKind) -> bool {
        self.event_tx.send(SupervisorEvent::Tick(kind)).await.is_ok()
    }

    /// Subscribes to state-changed notifications.
    pub fn subscribe(&self) -> watch::Receiver<FcuSnapshot> { self.snapshot_rx.clone() }

    /// Latest published state.
    pub fn snapshot(&self) -> FcuSnapshot { *self.snapshot_rx.borrow() }
}
