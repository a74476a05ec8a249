use super::mode_flags::ModeFlags;

/// Result of applying a mode toggle to the mode flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The toggle was applied, carrying the resulting flags.
    Accepted(ModeFlags),
    /// An interlock refused the toggle, the flags are unchanged.
    Rejected(&'static str),
}

/// Result of any pilot request handled by the flight control unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Observable state changed.
    Applied,
    /// The request was valid but left every observable value as it was.
    Unchanged,
    /// The request was refused, with the rationale.
    Rejected(&'static str),
}

impl RequestOutcome {
    pub fn changed(&self) -> bool { matches!(self, RequestOutcome::Applied) }
}
