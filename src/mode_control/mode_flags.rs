use std::fmt::Formatter;
use strum_macros::{Display, EnumIter};

/// The two autopilot channels. At most one is engaged at any time.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ApChannel {
    #[strum(to_string = "AP1")]
    Ap1,
    #[strum(to_string = "AP2")]
    Ap2,
}

impl ApChannel {
    pub fn other(self) -> Self {
        match self {
            ApChannel::Ap1 => ApChannel::Ap2,
            ApChannel::Ap2 => ApChannel::Ap1,
        }
    }
}

/// Joint states of the mode flags that no sequence of pilot requests may produce.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    ApproachWithoutLocalizer,
    AltHoldEngagedWithoutAutopilot,
    AutothrustEngaged,
}

impl std::error::Error for InvariantViolation {}

/// Armed/engaged state of all flight control unit modes.
///
/// The engaged autopilot channel is a single optional value, so both channels being
/// engaged together is not representable. A lateral or vertical mode flagged while no
/// channel is engaged is armed, the same flag with a channel engaged means engaged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModeFlags {
    pub(super) hdg_trk_active: bool,
    pub(super) alt_hold_armed: bool,
    pub(super) alt_hold_active: bool,
    pub(super) loc_active: bool,
    pub(super) appr_active: bool,
    pub(super) autopilot: Option<ApChannel>,
    pub(super) athr_armed: bool,
    pub(super) athr_active: bool,
}

impl ModeFlags {
    pub fn hdg_trk_active(&self) -> bool { self.hdg_trk_active }
    pub fn alt_hold_armed(&self) -> bool { self.alt_hold_armed }
    pub fn alt_hold_active(&self) -> bool { self.alt_hold_active }
    pub fn loc_active(&self) -> bool { self.loc_active }
    pub fn appr_active(&self) -> bool { self.appr_active }
    pub fn ap1_active(&self) -> bool { self.autopilot == Some(ApChannel::Ap1) }
    pub fn ap2_active(&self) -> bool { self.autopilot == Some(ApChannel::Ap2) }
    pub fn athr_armed(&self) -> bool { self.athr_armed }
    pub fn athr_active(&self) -> bool { self.athr_active }
    pub fn autopilot(&self) -> Option<ApChannel> { self.autopilot }
    pub fn autopilot_engaged(&self) -> bool { self.autopilot.is_some() }

    /// Checks the joint-state rules every reachable flag set satisfies.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.appr_active && !self.loc_active {
            return Err(InvariantViolation::ApproachWithoutLocalizer);
        }
        if self.alt_hold_active && !self.autopilot_engaged() {
            return Err(InvariantViolation::AltHoldEngagedWithoutAutopilot);
        }
        if self.athr_active {
            return Err(InvariantViolation::AutothrustEngaged);
        }
        Ok(())
    }
}

impl std::fmt::Display for ModeFlags {
    /// Annunciator style summary, armed modes are marked with `*`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let armed = if self.autopilot_engaged() { "" } else { "*" };
        let mut tokens: Vec<String> = Vec::new();
        if let Some(ch) = self.autopilot {
            tokens.push(ch.to_string());
        }
        if self.hdg_trk_active {
            tokens.push(String::from("HDG/TRK"));
        }
        if self.alt_hold_active {
            tokens.push(String::from("ALT"));
        } else if self.alt_hold_armed {
            tokens.push(String::from("ALT*"));
        }
        if self.appr_active {
            tokens.push(format!("APPR{armed}"));
        }
        if self.loc_active {
            tokens.push(format!("LOC{armed}"));
        }
        if self.athr_active {
            tokens.push(String::from("A/THR"));
        } else if self.athr_armed {
            tokens.push(String::from("A/THR*"));
        }
        if tokens.is_empty() {
            write!(f, "---")
        } else {
            write!(f, "{}", tokens.join(" "))
        }
    }
}
