//! Line based pilot front end: turns typed commands into pilot requests for the
//! supervisor and announces mode changes as they are published.

use crate::flight_control::{FcuSnapshot, ManualRamp, PilotRequest, SupervisorHandle};
use crate::mode_control::{ModeRequest, RequestOutcome};
use crate::{info, log, mode, warn};
use std::str::FromStr;
use std::time::Duration;
use strum_macros::Display;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

const HELP: &str = "commands: hdg_trk | athr | alt_hold | loc | appr | ap1 | ap2 | \
hdg <deg> | hdg+ <delta> | managed | spd <kt> | spd+ <delta> | alt <ft> | vs <fpm> | \
roll <deg> [ms] | pitch <deg> [ms] | status | help | quit";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PilotCommand {
    Request(PilotRequest),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    Empty,
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidNumber(String),
    TrailingInput(String),
}

impl std::error::Error for CommandParseError {}

fn number<T: FromStr>(arg: Option<&str>, name: &'static str) -> Result<T, CommandParseError> {
    let raw = arg.ok_or(CommandParseError::MissingArgument(name))?;
    raw.parse().map_err(|_| CommandParseError::InvalidNumber(raw.to_string()))
}

/// Like `number`, but refuses `nan` and `inf` which `f64::from_str` accepts.
fn degrees(arg: Option<&str>, name: &'static str) -> Result<f64, CommandParseError> {
    let value: f64 = number(arg, name)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CommandParseError::InvalidNumber(value.to_string()))
    }
}

impl FromStr for PilotCommand {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(CommandParseError::Empty)?.to_ascii_lowercase();
        let arg = words.next();
        let request = match keyword.as_str() {
            "status" => return Ok(PilotCommand::Status),
            "help" | "?" => return Ok(PilotCommand::Help),
            "quit" | "exit" => return Ok(PilotCommand::Quit),
            "hdg" => PilotRequest::SetHeadingSelect(degrees(arg, "heading")?),
            "hdg+" => PilotRequest::AdjustHeadingSelect(number(arg, "heading delta")?),
            "managed" | "push" => PilotRequest::ToggleHeadingManaged,
            "spd" => PilotRequest::SetSpeedSelect(number(arg, "speed")?),
            "spd+" => PilotRequest::AdjustSpeedSelect(number(arg, "speed delta")?),
            "alt" => PilotRequest::SetAltitudeSelect(number(arg, "altitude")?),
            "vs" => PilotRequest::SetVerticalSpeedSelect(number(arg, "vertical speed")?),
            "roll" | "pitch" => {
                let target = degrees(arg, "angle")?;
                let duration = match words.next() {
                    None => ManualRamp::DEFAULT_DURATION,
                    Some(ms) => Duration::from_millis(number(Some(ms), "duration")?),
                };
                if keyword == "roll" {
                    PilotRequest::ManualRoll { target, duration }
                } else {
                    PilotRequest::ManualPitch { target, duration }
                }
            }
            other => match ModeRequest::from_str(other) {
                Ok(mode_req) if arg.is_none() => return Ok(PilotCommand::Request(PilotRequest::Toggle(mode_req))),
                Ok(_) => return Err(CommandParseError::TrailingInput(line.to_string())),
                Err(_) => return Err(CommandParseError::UnknownCommand(other.to_string())),
            },
        };
        match words.next() {
            None => Ok(PilotCommand::Request(request)),
            Some(_) => Err(CommandParseError::TrailingInput(line.to_string())),
        }
    }
}

fn status_line(snap: &FcuSnapshot) -> String {
    let managed = if snap.targets.heading_managed() { " (managed)" } else { "" };
    format!(
        "HDG {:06.2} ROLL {:+06.2} PITCH {:+05.1} | SEL HDG {:03.0}{managed} SPD {} ALT {} VS {} | FMA [{}]",
        snap.state.current_heading(),
        snap.state.roll(),
        snap.state.pitch(),
        snap.targets.heading_select(),
        snap.targets.speed_select(),
        snap.targets.altitude_select(),
        snap.targets.vertical_speed_select(),
        snap.modes,
    )
}

/// Reads pilot commands from stdin until `quit` or end of input.
pub async fn run_console(handle: &SupervisorHandle) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    info!("Pilot console ready, {HELP}");
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                warn!("Pilot console input failed: {err}");
                break;
            }
        };
        match line.parse::<PilotCommand>() {
            Ok(PilotCommand::Quit) => break,
            Ok(PilotCommand::Help) => info!("{HELP}"),
            Ok(PilotCommand::Status) => info!("{}", status_line(&handle.snapshot())),
            Ok(PilotCommand::Request(request)) => {
                if let RequestOutcome::Unchanged = handle.request(request).await {
                    log!("{request:?} left the unit unchanged.");
                }
            }
            Err(CommandParseError::Empty) => {}
            Err(err) => warn!("Cannot parse '{line}': {err}, try 'help'."),
        }
    }
}

/// Announces flight mode and target changes as the supervisor publishes them.
pub async fn run_annunciator(mut snapshot_rx: watch::Receiver<FcuSnapshot>, c_tok: CancellationToken) {
    let mut last = *snapshot_rx.borrow_and_update();
    mode!("FMA [{}]", last.modes);
    loop {
        tokio::select! {
            () = c_tok.cancelled() => break,
            changed = snapshot_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snap = *snapshot_rx.borrow_and_update();
                if snap.modes != last.modes {
                    mode!("FMA [{}]", snap.modes);
                }
                if snap.targets != last.targets {
                    info!("{}", status_line(&snap));
                }
                last = snap;
            }
        }
    }
}
