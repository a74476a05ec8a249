use strum_macros::{Display, EnumIter, EnumString};

/// The closed set of mode toggle buttons on the flight control unit.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ModeRequest {
    #[strum(to_string = "HDG/TRK", serialize = "hdg_trk", serialize = "hdg/trk", serialize = "trk")]
    HdgTrk,
    #[strum(to_string = "A/THR", serialize = "athr", serialize = "a/thr")]
    Athr,
    #[strum(to_string = "ALT HOLD", serialize = "alt_hold", serialize = "althold")]
    AltHold,
    #[strum(to_string = "LOC", serialize = "loc")]
    Loc,
    #[strum(to_string = "APPR", serialize = "appr")]
    Appr,
    #[strum(to_string = "AP1", serialize = "ap1")]
    Ap1,
    #[strum(to_string = "AP2", serialize = "ap2")]
    Ap2,
}
