//! Mode control of the flight control unit: the armed/engaged flags of every autopilot
//! mode and the pure interlock machine that is the only writer of those flags.

pub(crate) mod mode_flags;
pub(crate) mod mode_machine;
pub(crate) mod mode_request;
pub(crate) mod signal;

#[cfg(test)]
mod tests;

pub(crate) use mode_flags::ModeFlags;
pub(crate) use mode_machine::transition;
pub(crate) use mode_request::ModeRequest;
pub(crate) use signal::{RequestOutcome, ToggleOutcome};
