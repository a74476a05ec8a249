//! Aircraft side of the flight control unit: the heading hold control law, the turn
//! dynamics it drives and the supervisor that runs both on their periodic ticks.

mod aircraft_state;
pub(crate) mod common;
mod flight_control_unit;
mod heading_control;
mod manual_control;
mod pilot_request;
mod supervisor;
mod targets;
mod tick_scheduler;
mod turn_dynamics;

pub use flight_control_unit::FcuSnapshot;
pub use manual_control::ManualRamp;
pub use pilot_request::PilotRequest;
pub use supervisor::{AutopilotSupervisor, SupervisorHandle};
pub use tick_scheduler::TickScheduler;
