// ABOUTME: Task run parameterized by state, with its state transitions.
// ABOUTME: Each transition consumes self and returns the next state on success.

use crate::backend::{ContainerOverride, RunTaskRequest, TaskHandle, TaskOps, TaskOutcome};
use crate::command::parse_command;
use crate::config::LaunchRequest;
use crate::error::Result;
use crate::output::Output;

use super::console::task_details_url;
use super::error::LaunchError;
use super::state::{CommandParsed, Configured, Launched, PlacementFetched, Stopped};

/// Step output holding the launched task's ARN.
pub const TASK_ARN_OUTPUT: &str = "task-arn";

/// A task run in progress, parameterized by its current state.
#[derive(Debug)]
pub struct TaskRun<S> {
    pub(crate) request: LaunchRequest,
    pub(crate) state: S,
}

impl<S> TaskRun<S> {
    pub fn request(&self) -> &LaunchRequest {
        &self.request
    }
}

impl TaskRun<Configured> {
    pub fn new(request: LaunchRequest) -> Self {
        TaskRun {
            request,
            state: Configured,
        }
    }

    /// Read the placement settings of the configured service.
    ///
    /// # Errors
    ///
    /// Returns `LaunchError::Fetch` if the service cannot be described.
    pub async fn fetch_placement<O: TaskOps + ?Sized>(
        self,
        ops: &O,
    ) -> std::result::Result<TaskRun<PlacementFetched>, LaunchError> {
        tracing::debug!(
            cluster = %self.request.cluster,
            service = %self.request.service,
            "Fetch the configuration"
        );

        let placement = ops
            .describe_service(&self.request.cluster, &self.request.service)
            .await
            .map_err(LaunchError::Fetch)?;

        tracing::debug!(?placement, "service placement");

        Ok(TaskRun {
            request: self.request,
            state: PlacementFetched { placement },
        })
    }
}

impl TaskRun<PlacementFetched> {
    /// Parse the command input into the override argument list.
    ///
    /// # Errors
    ///
    /// Returns `LaunchError::Parse` for a malformed JSON command.
    pub fn parse_command(self) -> std::result::Result<TaskRun<CommandParsed>, LaunchError> {
        let command = parse_command(&self.request.raw_command)?;
        Ok(TaskRun {
            request: self.request,
            state: CommandParsed {
                placement: self.state.placement,
                command,
            },
        })
    }
}

impl TaskRun<CommandParsed> {
    /// The request that `launch()` will submit.
    pub fn run_task_request(&self) -> RunTaskRequest {
        RunTaskRequest::mirroring(
            &self.request.cluster,
            &self.request.task_definition,
            self.state.placement.clone(),
            ContainerOverride {
                container: self.request.container.clone(),
                command: self.state.command.clone(),
            },
        )
    }

    /// Start the task with the service's placement and the command override.
    ///
    /// # Errors
    ///
    /// Returns `LaunchError::Launch` if the backend rejects the request.
    pub async fn launch<O: TaskOps + ?Sized>(
        self,
        ops: &O,
    ) -> std::result::Result<TaskRun<Launched>, LaunchError> {
        let request = self.run_task_request();
        let task = ops.run_task(&request).await.map_err(LaunchError::Launch)?;

        Ok(TaskRun {
            request: self.request,
            state: Launched { task },
        })
    }
}

impl TaskRun<Launched> {
    pub fn task(&self) -> &TaskHandle {
        &self.state.task
    }

    /// Publish the task ARN and log a console link to the task.
    ///
    /// # Errors
    ///
    /// Returns `Error::Output` if the step output cannot be written.
    pub fn report<O: TaskOps + ?Sized>(&self, ops: &O, output: &Output) -> Result<()> {
        output.set_output(TASK_ARN_OUTPUT, &self.state.task.task_arn)?;

        let url = task_details_url(ops.region(), &self.request.cluster, &self.state.task);
        tracing::info!("Task started. Watch this task's details in the Amazon ECS console: {url}");
        Ok(())
    }

    /// Block until the backend reports the task stopped.
    ///
    /// # Errors
    ///
    /// Returns `LaunchError::Wait` if the waiter fails or gives up.
    pub async fn wait_until_stopped<O: TaskOps + ?Sized>(
        self,
        ops: &O,
    ) -> std::result::Result<TaskRun<Stopped>, LaunchError> {
        tracing::debug!(task = %self.state.task.task_arn, "Waiting for the task to stop");

        let outcome = ops
            .wait_until_stopped(&self.request.cluster, &self.state.task)
            .await
            .map_err(LaunchError::Wait)?;

        Ok(TaskRun {
            request: self.request,
            state: Stopped {
                task: self.state.task,
                outcome,
            },
        })
    }

    /// End the run without waiting.
    pub fn finish(self) -> TaskHandle {
        tracing::debug!("Not waiting for the task to stop");
        self.state.task
    }
}

impl TaskRun<Stopped> {
    /// Check container exit codes of the stopped task.
    ///
    /// Other containers may stop without an exit code; the overridden one may not.
    ///
    /// # Errors
    ///
    /// Returns `LaunchError::ExitCode` for the first container that exited non-zero,
    /// or `LaunchError::NotRun` if the overridden container reported no exit code.
    pub fn evaluate(self) -> std::result::Result<(TaskHandle, TaskOutcome), LaunchError> {
        if let Some((container, code)) = self.state.outcome.first_failure() {
            return Err(LaunchError::ExitCode {
                container: container.to_string(),
                code,
            });
        }

        let outcome = &self.state.outcome;
        if outcome.exit_code(&self.request.container).is_none() {
            return Err(LaunchError::NotRun {
                container: self.request.container,
                reason: outcome
                    .stopped_reason
                    .clone()
                    .unwrap_or_else(|| "no exit code reported".to_string()),
            });
        }

        for exit in &self.state.outcome.containers {
            tracing::debug!(container = %exit.name, exit_code = ?exit.exit_code, "container stopped");
        }

        Ok((self.state.task, self.state.outcome))
    }
}
