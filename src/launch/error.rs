// ABOUTME: Error types for the task launch flow.
// ABOUTME: One variant per fatal step, with a kind accessor for callers.

use crate::backend::BackendError;
use crate::command::CommandParseError;

/// Errors that end a task run.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// Reading the service configuration failed.
    #[error("Failed to fetch the configuration from a service: {0}")]
    Fetch(BackendError),

    /// The command input could not be parsed.
    #[error("Failed to parse the command: {0}")]
    Parse(#[from] CommandParseError),

    /// The backend refused to start the task.
    #[error("Failed to start a task in ECS: {0}")]
    Launch(BackendError),

    /// Waiting for the task to stop failed.
    #[error("Failed to wait for the task to stop: {0}")]
    Wait(BackendError),

    /// A container of the stopped task exited with a non-zero code.
    #[error("container {container} exited with code {code}")]
    ExitCode { container: String, code: i32 },

    /// The overridden container stopped without an exit code, so its command never ran.
    #[error("container {container} did not run: {reason}")]
    NotRun { container: String, reason: String },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchErrorKind {
    Fetch,
    Parse,
    Launch,
    Wait,
    ExitCode,
    NotRun,
}

impl LaunchError {
    pub fn kind(&self) -> LaunchErrorKind {
        match self {
            LaunchError::Fetch(_) => LaunchErrorKind::Fetch,
            LaunchError::Parse(_) => LaunchErrorKind::Parse,
            LaunchError::Launch(_) => LaunchErrorKind::Launch,
            LaunchError::Wait(_) => LaunchErrorKind::Wait,
            LaunchError::ExitCode { .. } => LaunchErrorKind::ExitCode,
            LaunchError::NotRun { .. } => LaunchErrorKind::NotRun,
        }
    }
}
