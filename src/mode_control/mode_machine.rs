//! Interlock rules of the flight control unit mode buttons.
//!
//! Every request is a total, pure function of the current flags. A request that an
//! interlock forbids is not an error, it is answered with `ToggleOutcome::Rejected` and
//! the caller keeps its flags.

use super::{
    mode_flags::{ApChannel, ModeFlags},
    mode_request::ModeRequest,
    signal::ToggleOutcome,
};

const APPR_LOCKOUT: &str = "APPR engaged";

/// Applies one toggle request to `flags`.
///
/// # Arguments
/// - `flags`: The current mode flags.
/// - `request`: The button that was pressed.
///
/// # Returns
/// - `ToggleOutcome::Accepted` with the new flags, or `ToggleOutcome::Rejected` with the
///   interlock rationale if the request is locked out.
pub fn transition(flags: ModeFlags, request: ModeRequest) -> ToggleOutcome {
    match request {
        ModeRequest::HdgTrk => ToggleOutcome::Accepted(toggle_hdg_trk(flags)),
        ModeRequest::Athr => ToggleOutcome::Accepted(toggle_athr(flags)),
        ModeRequest::AltHold => toggle_alt_hold(flags),
        ModeRequest::Loc => toggle_loc(flags),
        ModeRequest::Appr => ToggleOutcome::Accepted(toggle_appr(flags)),
        ModeRequest::Ap1 => ToggleOutcome::Accepted(toggle_ap(flags, ApChannel::Ap1)),
        ModeRequest::Ap2 => ToggleOutcome::Accepted(toggle_ap(flags, ApChannel::Ap2)),
    }
}

fn toggle_hdg_trk(mut flags: ModeFlags) -> ModeFlags {
    flags.hdg_trk_active = !flags.hdg_trk_active;
    flags
}

/// A/THR only ever arms; there is no engage path.
fn toggle_athr(mut flags: ModeFlags) -> ModeFlags {
    flags.athr_armed = !flags.athr_armed;
    flags.athr_active = false;
    flags
}

fn toggle_alt_hold(mut flags: ModeFlags) -> ToggleOutcome {
    if flags.appr_active {
        return ToggleOutcome::Rejected(APPR_LOCKOUT);
    }
    if flags.autopilot_engaged() {
        flags.alt_hold_active = !flags.alt_hold_active;
    } else {
        flags.alt_hold_armed = !flags.alt_hold_armed;
    }
    if !flags.alt_hold_active {
        flags.loc_active = false;
    }
    ToggleOutcome::Accepted(flags)
}

/// LOC arms without an autopilot and engages with one. It is locked while APPR owns it.
fn toggle_loc(mut flags: ModeFlags) -> ToggleOutcome {
    if flags.appr_active {
        return ToggleOutcome::Rejected(APPR_LOCKOUT);
    }
    flags.loc_active = !flags.loc_active;
    ToggleOutcome::Accepted(flags)
}

/// APPR drags LOC along with it and displaces ALT HOLD once an autopilot flies it.
fn toggle_appr(mut flags: ModeFlags) -> ModeFlags {
    flags.appr_active = !flags.appr_active;
    flags.loc_active = flags.appr_active;
    if flags.appr_active && flags.autopilot_engaged() {
        clear_alt_hold(&mut flags);
    }
    flags
}

fn toggle_ap(mut flags: ModeFlags, channel: ApChannel) -> ModeFlags {
    if flags.autopilot == Some(channel) {
        // the last engaged channel drops every captured mode rather than suspending it
        flags.autopilot = None;
        clear_alt_hold(&mut flags);
        flags.appr_active = false;
        flags.loc_active = false;
        return flags;
    }
    // engaging replaces the other channel if it is engaged
    flags.autopilot = Some(channel);
    capture_armed_mode(&mut flags);
    flags
}

/// Engages the highest priority armed mode, APPR over LOC over ALT HOLD. Only the first
/// match engages, lower priority modes are never engaged as a fallback.
fn capture_armed_mode(flags: &mut ModeFlags) {
    if flags.appr_active {
        flags.loc_active = true;
        clear_alt_hold(flags);
    } else if flags.loc_active {
        clear_alt_hold(flags);
    } else if flags.alt_hold_armed {
        flags.alt_hold_active = true;
    }
}

fn clear_alt_hold(flags: &mut ModeFlags) {
    flags.alt_hold_armed = false;
    flags.alt_hold_active = false;
}
