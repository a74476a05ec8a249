use super::{ModeFlags, ModeRequest, ToggleOutcome, mode_flags::ApChannel, transition};
use itertools::Itertools;
use rand::Rng;
use std::collections::{HashSet, VecDeque};
use strum::IntoEnumIterator;

fn apply(flags: ModeFlags, request: ModeRequest) -> ModeFlags {
    match transition(flags, request) {
        ToggleOutcome::Accepted(next) => next,
        ToggleOutcome::Rejected(_) => flags,
    }
}

fn apply_all(requests: &[ModeRequest]) -> ModeFlags {
    requests.iter().fold(ModeFlags::default(), |flags, req| apply(flags, *req))
}

/// Breadth-first closure of the default flags under every toggle request.
fn reachable_states() -> HashSet<ModeFlags> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([ModeFlags::default()]);
    seen.insert(ModeFlags::default());
    while let Some(flags) = queue.pop_front() {
        for req in ModeRequest::iter() {
            let next = apply(flags, req);
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

fn captured_modes_cleared(flags: &ModeFlags) -> bool {
    !flags.alt_hold_armed() && !flags.alt_hold_active() && !flags.appr_active() && !flags.loc_active()
}

fn request_for(channel: ApChannel) -> ModeRequest {
    match channel {
        ApChannel::Ap1 => ModeRequest::Ap1,
        ApChannel::Ap2 => ModeRequest::Ap2,
    }
}

#[test]
fn test_defaults_are_all_off() {
    let flags = ModeFlags::default();
    assert!(!flags.hdg_trk_active() && !flags.ap1_active() && !flags.ap2_active());
    assert!(captured_modes_cleared(&flags));
    assert!(!flags.athr_armed() && !flags.athr_active());
    assert_eq!(flags.to_string(), "---");
}

#[test]
fn test_hdg_trk_is_independent() {
    let base = apply_all(&[ModeRequest::Ap1, ModeRequest::Appr, ModeRequest::Athr]);
    let toggled = apply(base, ModeRequest::HdgTrk);
    assert!(toggled.hdg_trk_active());
    assert_eq!(ModeFlags { hdg_trk_active: false, ..toggled }, base);
    assert_eq!(apply(toggled, ModeRequest::HdgTrk), base);
}

#[test]
fn test_athr_only_arms() {
    let armed = apply_all(&[ModeRequest::Athr]);
    assert!(armed.athr_armed());
    assert!(!armed.athr_active());
    let engaged = apply_all(&[ModeRequest::Athr, ModeRequest::Ap1, ModeRequest::Ap2]);
    assert!(engaged.athr_armed() && !engaged.athr_active());
    assert!(!apply(armed, ModeRequest::Athr).athr_armed());
}

#[test]
fn test_alt_hold_arms_without_autopilot_and_engages_with_one() {
    let armed = apply_all(&[ModeRequest::AltHold]);
    assert!(armed.alt_hold_armed() && !armed.alt_hold_active());

    let engaged = apply_all(&[ModeRequest::Ap1, ModeRequest::AltHold]);
    assert!(!engaged.alt_hold_armed() && engaged.alt_hold_active());

    let dropped = apply(engaged, ModeRequest::AltHold);
    assert!(!dropped.alt_hold_active());
    assert!(dropped.ap1_active());
}

#[test]
fn test_alt_hold_off_clears_loc() {
    let flags = apply_all(&[ModeRequest::Loc, ModeRequest::AltHold]);
    assert!(flags.alt_hold_armed());
    assert!(!flags.loc_active());

    let flags = apply_all(&[ModeRequest::Ap2, ModeRequest::AltHold, ModeRequest::Loc]);
    assert!(flags.alt_hold_active() && flags.loc_active());
    let flags = apply(flags, ModeRequest::AltHold);
    assert!(!flags.alt_hold_active() && !flags.loc_active());
}

#[test]
fn test_appr_locks_out_alt_hold_and_loc() {
    for mut sequence in [vec![], vec![ModeRequest::Ap1]] {
        sequence.push(ModeRequest::Appr);
        let flags = apply_all(&sequence);
        assert!(flags.appr_active() && flags.loc_active());
        assert!(matches!(transition(flags, ModeRequest::AltHold), ToggleOutcome::Rejected(_)));
        assert!(matches!(transition(flags, ModeRequest::Loc), ToggleOutcome::Rejected(_)));
    }
}

#[test]
fn test_appr_mirrors_loc() {
    let on = apply_all(&[ModeRequest::Appr]);
    assert!(on.appr_active() && on.loc_active());
    let off = apply(on, ModeRequest::Appr);
    assert!(!off.appr_active() && !off.loc_active());
}

#[test]
fn test_scenario_appr_with_autopilot_disarms_alt_hold() {
    let flags = apply_all(&[ModeRequest::AltHold, ModeRequest::Ap1]);
    assert!(flags.ap1_active());
    assert!(flags.alt_hold_armed());
    let flags = apply(flags, ModeRequest::Appr);
    assert!(flags.appr_active());
    assert!(flags.loc_active());
    assert!(!flags.alt_hold_armed());
    assert!(!flags.alt_hold_active());
}

#[test]
fn test_scenario_ap1_on_off_without_armed_modes() {
    let on = apply_all(&[ModeRequest::Ap1]);
    assert!(on.ap1_active());
    assert!(captured_modes_cleared(&on));
    let off = apply(on, ModeRequest::Ap1);
    assert!(!off.ap1_active() && !off.ap2_active());
    assert!(captured_modes_cleared(&off));
}

#[test]
fn test_engaging_one_channel_releases_the_other() {
    for channel in ApChannel::iter() {
        let other = channel.other();
        let flags = apply_all(&[request_for(other), ModeRequest::AltHold, request_for(channel)]);
        assert_eq!(flags.autopilot(), Some(channel));
        // switching channels keeps the captured vertical mode
        assert!(flags.alt_hold_active());
    }
}

#[test]
fn test_capture_priority_appr_over_loc_over_alt_hold() {
    let flags = apply_all(&[ModeRequest::AltHold, ModeRequest::Appr, ModeRequest::Ap1]);
    assert!(flags.appr_active() && flags.loc_active());
    assert!(!flags.alt_hold_armed() && !flags.alt_hold_active());

    let flags = apply_all(&[ModeRequest::AltHold, ModeRequest::Loc, ModeRequest::Ap2]);
    assert!(flags.loc_active());
    assert!(!flags.alt_hold_armed() && !flags.alt_hold_active());

    let flags = apply_all(&[ModeRequest::AltHold, ModeRequest::Ap2]);
    assert!(flags.alt_hold_armed() && flags.alt_hold_active());
}

#[test]
fn test_no_fallback_capture_after_higher_mode_drops() {
    let flags = apply_all(&[ModeRequest::AltHold, ModeRequest::Loc, ModeRequest::Ap1]);
    let flags = apply(flags, ModeRequest::Loc);
    assert!(!flags.loc_active());
    assert!(!flags.alt_hold_active());
}

#[test]
fn test_annunciation_marks_armed_modes() {
    let armed = apply_all(&[ModeRequest::AltHold, ModeRequest::Loc, ModeRequest::Athr]);
    assert_eq!(armed.to_string(), "ALT* LOC* A/THR*");
    let engaged = apply_all(&[ModeRequest::HdgTrk, ModeRequest::Appr, ModeRequest::Ap2]);
    assert_eq!(engaged.to_string(), "AP2 HDG/TRK APPR LOC");
}

#[test]
fn test_reachable_states_satisfy_invariants() {
    let states = reachable_states();
    assert!(states.len() < 1 << 9);
    for flags in &states {
        assert_eq!(flags.check_invariants(), Ok(()), "violated by {flags:?}");
        assert!(!(flags.ap1_active() && flags.ap2_active()));
        if flags.appr_active() && flags.autopilot_engaged() {
            assert!(flags.loc_active());
        }
    }
    assert!(states.iter().all(|f| !f.athr_active()));
}

#[test]
fn test_every_reachable_disengage_clears_captured_modes() {
    for (flags, channel) in reachable_states().into_iter().cartesian_product(ApChannel::iter()) {
        if flags.autopilot() != Some(channel) {
            continue;
        }
        let off = apply(flags, request_for(channel));
        assert_eq!(off.autopilot(), None);
        assert!(captured_modes_cleared(&off), "{flags:?} -> {off:?}");
        assert_eq!(off.hdg_trk_active(), flags.hdg_trk_active());
        assert_eq!(off.athr_armed(), flags.athr_armed());
    }
}

#[test]
fn test_rejections_leave_flags_untouched() {
    for flags in reachable_states() {
        for req in ModeRequest::iter() {
            match transition(flags, req) {
                ToggleOutcome::Rejected(_) => {
                    assert!(flags.appr_active());
                    assert!(matches!(req, ModeRequest::AltHold | ModeRequest::Loc));
                }
                ToggleOutcome::Accepted(next) => assert_ne!(next, flags),
            }
        }
    }
}

#[test]
fn test_random_toggle_sequences() {
    let requests: Vec<ModeRequest> = ModeRequest::iter().collect();
    let mut rng = rand::rng();
    for _ in 0..2000 {
        let mut flags = ModeFlags::default();
        for _ in 0..rng.random_range(1..64) {
            let req = requests[rng.random_range(0..requests.len())];
            let before = flags;
            flags = apply(flags, req);
            assert!(!(flags.ap1_active() && flags.ap2_active()));
            assert_eq!(flags.check_invariants(), Ok(()));
            let disengaged = before.autopilot_engaged()
                && !flags.autopilot_engaged()
                && matches!(req, ModeRequest::Ap1 | ModeRequest::Ap2);
            if disengaged {
                assert!(captured_modes_cleared(&flags));
            }
        }
    }
}

#[test]
fn test_requests_parse_from_button_names() {
    assert_eq!("ap1".parse::<ModeRequest>(), Ok(ModeRequest::Ap1));
    assert_eq!("AP2".parse::<ModeRequest>(), Ok(ModeRequest::Ap2));
    assert_eq!("hdg/trk".parse::<ModeRequest>(), Ok(ModeRequest::HdgTrk));
    assert_eq!("Alt_Hold".parse::<ModeRequest>(), Ok(ModeRequest::AltHold));
    assert_eq!("a/thr".parse::<ModeRequest>(), Ok(ModeRequest::Athr));
    assert!("autoland".parse::<ModeRequest>().is_err());
    assert_eq!(ModeRequest::AltHold.to_string(), "ALT HOLD");
}
