#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod config;
mod flight_control;
mod logger;
mod mode_control;
mod pilot_console;

use crate::config::FcuConfig;
use crate::flight_control::{AutopilotSupervisor, TickScheduler};
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let config = FcuConfig::from_env();
    info!("Starting flight control unit with {config:?}");

    let (supervisor, handle) = AutopilotSupervisor::new(&config);
    let c_tok = CancellationToken::new();
    let supervisor_task = tokio::spawn(supervisor.run(c_tok.clone()));
    let scheduler_task = tokio::spawn(TickScheduler::new(handle.clone()).run(c_tok.clone()));
    let annunciator_task =
        tokio::spawn(pilot_console::run_annunciator(handle.subscribe(), c_tok.clone()));

    pilot_console::run_console(&handle).await;
    info!("Pilot console closed, shutting down.");
    c_tok.cancel();

    for (name, task) in [
        ("tick scheduler", scheduler_task),
        ("annunciator", annunciator_task),
        ("supervisor", supervisor_task),
    ] {
        if let Err(err) = task.await {
            error!("{name} task failed: {err}");
        }
    }
    let last = handle.snapshot();
    info!(
        "Final state after {} updates: HDG {:.2} ROLL {:.2} [{}]",
        last.revision,
        last.state.current_heading(),
        last.state.roll(),
        last.modes
    );
}
