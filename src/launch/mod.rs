// ABOUTME: Task launch orchestration using the type state pattern.
// ABOUTME: Drives describe, run, report, and the optional wait in sequence.

mod console;
mod error;
mod state;
mod task_run;

pub use console::task_details_url;
pub use error::{LaunchError, LaunchErrorKind};
pub use state::{CommandParsed, Configured, Launched, PlacementFetched, Stopped};
pub use task_run::{TASK_ARN_OUTPUT, TaskRun};

use crate::backend::{TaskHandle, TaskOps, TaskOutcome};
use crate::config::LaunchRequest;
use crate::error::Result;
use crate::output::Output;

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub task: TaskHandle,
    /// `None` when the run did not wait for the task to stop.
    pub outcome: Option<TaskOutcome>,
}

/// Run one task next to `request.service` and optionally wait for it.
///
/// The task ARN output is written as soon as the task starts, so it stays set
/// even if waiting or the exit code check fails afterwards. A started task is
/// never stopped by this function.
pub async fn run_task<O: TaskOps + ?Sized>(
    ops: &O,
    request: LaunchRequest,
    output: &Output,
) -> Result<RunSummary> {
    let wait = request.wait_for_stopped;

    let run = TaskRun::new(request)
        .fetch_placement(ops)
        .await?
        .parse_command()?
        .launch(ops)
        .await?;

    run.report(ops, output)?;

    if !wait {
        return Ok(RunSummary {
            task: run.finish(),
            outcome: None,
        });
    }

    let (task, outcome) = run.wait_until_stopped(ops).await?.evaluate()?;
    Ok(RunSummary {
        task,
        outcome: Some(outcome),
    })
}
