// ABOUTME: Amazon ECS implementation of TaskOps using the AWS SDK.
// ABOUTME: Maps SDK responses and errors onto backend types.

use super::traits::{BackendError, TaskOps};
use super::types::{ContainerExit, RunTaskRequest, ServicePlacement, TaskHandle, TaskOutcome};
use crate::error::{Error, Result};
use async_trait::async_trait;
use aws_config::{AppName, BehaviorVersion};
use aws_sdk_ecs::Client;
use aws_sdk_ecs::client::Waiters;
use aws_sdk_ecs::error::DisplayErrorContext;
use aws_sdk_ecs::types::{ContainerOverride, Failure, TaskOverride};
use std::time::Duration;

/// Application name appended to the SDK user agent.
const APP_NAME: &str = "ecs-run-task";

/// Upper bound handed to the `tasks_stopped` waiter (100 polls, 6s apart).
const WAIT_TIMEOUT: Duration = Duration::from_secs(600);

/// Reason ECS reports for a service that does not exist.
const MISSING: &str = "MISSING";

// =============================================================================
// Error Mapping Helpers
// =============================================================================

fn sdk_message<E: std::error::Error>(e: &E) -> String {
    DisplayErrorContext(e).to_string()
}

fn failure_message(failure: &Failure) -> String {
    let reason = failure.reason().unwrap_or("unknown reason");
    match (failure.arn(), failure.detail()) {
        (Some(arn), Some(detail)) => format!("{arn}: {reason} ({detail})"),
        (Some(arn), None) => format!("{arn}: {reason}"),
        (None, Some(detail)) => format!("{reason} ({detail})"),
        (None, None) => reason.to_string(),
    }
}

fn map_describe_failure(failure: &Failure, cluster: &str, service: &str) -> BackendError {
    if failure.reason() == Some(MISSING) {
        BackendError::ServiceNotFound {
            cluster: cluster.to_string(),
            service: service.to_string(),
        }
    } else {
        BackendError::Describe(failure_message(failure))
    }
}

// =============================================================================
// EcsBackend
// =============================================================================

/// ECS client bound to the region resolved from the AWS configuration chain.
pub struct EcsBackend {
    client: Client,
    region: String,
}

impl EcsBackend {
    /// Load shared AWS configuration (environment, profile, instance metadata).
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingRegion` when no region can be resolved.
    pub async fn from_env() -> Result<Self> {
        let app_name =
            AppName::new(APP_NAME).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        let config = aws_config::defaults(BehaviorVersion::latest())
            .app_name(app_name)
            .load()
            .await;

        let region = config
            .region()
            .map(|r| r.to_string())
            .ok_or(Error::MissingRegion)?;

        Ok(Self {
            client: Client::new(&config),
            region,
        })
    }
}

#[async_trait]
impl TaskOps for EcsBackend {
    fn region(&self) -> &str {
        &self.region
    }

    async fn describe_service(
        &self,
        cluster: &str,
        service: &str,
    ) -> std::result::Result<ServicePlacement, BackendError> {
        let output = self
            .client
            .describe_services()
            .cluster(cluster)
            .services(service)
            .send()
            .await
            .map_err(|e| BackendError::Describe(sdk_message(&e)))?;

        if let Some(failure) = output.failures().first() {
            return Err(map_describe_failure(failure, cluster, service));
        }

        let found = output
            .services()
            .first()
            .ok_or_else(|| BackendError::ServiceNotFound {
                cluster: cluster.to_string(),
                service: service.to_string(),
            })?;

        Ok(ServicePlacement {
            launch_type: found.launch_type().cloned(),
            network_configuration: found.network_configuration().cloned(),
            capacity_provider_strategy: found.capacity_provider_strategy().to_vec(),
        })
    }

    async fn run_task(
        &self,
        request: &RunTaskRequest,
    ) -> std::result::Result<TaskHandle, BackendError> {
        let container_override = ContainerOverride::builder()
            .name(&request.container_override.container)
            .set_command(Some(request.container_override.command.clone()))
            .build();
        let overrides = TaskOverride::builder()
            .container_overrides(container_override)
            .build();

        let strategy = if request.capacity_provider_strategy.is_empty() {
            None
        } else {
            Some(request.capacity_provider_strategy.clone())
        };

        let output = self
            .client
            .run_task()
            .cluster(&request.cluster)
            .task_definition(&request.task_definition)
            .set_launch_type(request.launch_type.clone())
            .set_network_configuration(request.network_configuration.clone())
            .set_capacity_provider_strategy(strategy)
            .overrides(overrides)
            .send()
            .await
            .map_err(|e| BackendError::RunTask(sdk_message(&e)))?;

        if let Some(failure) = output.failures().first() {
            return Err(BackendError::RunTask(failure_message(failure)));
        }

        output
            .tasks()
            .first()
            .and_then(|task| task.task_arn())
            .map(TaskHandle::new)
            .ok_or(BackendError::NoTaskStarted)
    }

    async fn wait_until_stopped(
        &self,
        cluster: &str,
        task: &TaskHandle,
    ) -> std::result::Result<TaskOutcome, BackendError> {
        let output = self
            .client
            .wait_until_tasks_stopped()
            .cluster(cluster)
            .tasks(&task.task_arn)
            .wait(WAIT_TIMEOUT)
            .await
            .map_err(|e| BackendError::Wait(sdk_message(&e)))?
            .into_result()
            .map_err(|e| BackendError::Wait(sdk_message(&e)))?;

        let containers = output
            .tasks()
            .iter()
            .flat_map(|t| t.containers())
            .map(|c| ContainerExit {
                name: c.name().unwrap_or_default().to_string(),
                exit_code: c.exit_code(),
            })
            .collect();

        let stopped_reason = output
            .tasks()
            .iter()
            .find_map(|t| t.stopped_reason())
            .map(str::to_string);

        Ok(TaskOutcome {
            containers,
            stopped_reason,
        })
    }
}
