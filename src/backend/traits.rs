// ABOUTME: Capability trait for the task orchestration backend.
// ABOUTME: Describe a service, run a task, and wait for it to stop.

use super::types::{RunTaskRequest, ServicePlacement, TaskHandle, TaskOutcome};
use async_trait::async_trait;

/// Remote operations needed to run a one-off task next to a service.
///
/// Implementations own their retry and timeout policy; callers invoke each
/// operation once.
#[async_trait]
pub trait TaskOps: Send + Sync {
    /// Region the backend is configured for.
    fn region(&self) -> &str;

    /// Read the placement settings of `service` in `cluster`.
    async fn describe_service(
        &self,
        cluster: &str,
        service: &str,
    ) -> Result<ServicePlacement, BackendError>;

    /// Start a task.
    async fn run_task(&self, request: &RunTaskRequest) -> Result<TaskHandle, BackendError>;

    /// Block until the task reaches a stopped state.
    async fn wait_until_stopped(
        &self,
        cluster: &str,
        task: &TaskHandle,
    ) -> Result<TaskOutcome, BackendError>;
}

/// Errors from backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("service {service} not found in cluster {cluster}")]
    ServiceNotFound { cluster: String, service: String },

    #[error("{0}")]
    Describe(String),

    #[error("{0}")]
    RunTask(String),

    #[error("no task was started")]
    NoTaskStarted,

    #[error("{0}")]
    Wait(String),
}
