// ABOUTME: Values exchanged with the orchestration backend.
// ABOUTME: Service placement, run-task request, task handle, and stopped-task outcome.

use aws_sdk_ecs::types::{CapacityProviderStrategyItem, LaunchType, NetworkConfiguration};

/// Placement settings read from an existing service.
///
/// The backend's own structures are carried as-is so they can be mirrored
/// onto the new task without translation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServicePlacement {
    pub launch_type: Option<LaunchType>,
    pub network_configuration: Option<NetworkConfiguration>,
    pub capacity_provider_strategy: Vec<CapacityProviderStrategyItem>,
}

/// Command override applied to a single container of the task definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerOverride {
    /// Container name as declared in the task definition.
    pub container: String,
    pub command: Vec<String>,
}

/// Everything submitted to the backend to start a task.
#[derive(Debug, Clone, PartialEq)]
pub struct RunTaskRequest {
    pub cluster: String,
    pub task_definition: String,
    pub launch_type: Option<LaunchType>,
    pub network_configuration: Option<NetworkConfiguration>,
    /// Sent only when non-empty.
    pub capacity_provider_strategy: Vec<CapacityProviderStrategyItem>,
    pub container_override: ContainerOverride,
}

impl RunTaskRequest {
    /// Build a request that mirrors `placement` and overrides one container's command.
    pub fn mirroring(
        cluster: &str,
        task_definition: &str,
        placement: ServicePlacement,
        container_override: ContainerOverride,
    ) -> Self {
        Self {
            cluster: cluster.to_string(),
            task_definition: task_definition.to_string(),
            launch_type: placement.launch_type,
            network_configuration: placement.network_configuration,
            capacity_provider_strategy: placement.capacity_provider_strategy,
            container_override,
        }
    }
}

/// A started task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskHandle {
    pub task_arn: String,
}

impl TaskHandle {
    pub fn new(task_arn: impl Into<String>) -> Self {
        Self {
            task_arn: task_arn.into(),
        }
    }

    /// Short task id: the part of the ARN after the final `/`.
    pub fn task_id(&self) -> &str {
        self.task_arn
            .rsplit_once('/')
            .map(|(_, id)| id)
            .unwrap_or(&self.task_arn)
    }
}

/// Exit status of one container of a stopped task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerExit {
    pub name: String,
    /// `None` when the container never reported an exit code.
    pub exit_code: Option<i32>,
}

/// Final state of a task once the backend reports it stopped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskOutcome {
    pub containers: Vec<ContainerExit>,
    /// Why the backend stopped the task, when it says.
    pub stopped_reason: Option<String>,
}

impl TaskOutcome {
    /// Exit code reported for `container`, `None` if it never reported one.
    pub fn exit_code(&self, container: &str) -> Option<i32> {
        self.containers
            .iter()
            .find(|c| c.name == container)
            .and_then(|c| c.exit_code)
    }

    /// First container that exited with a non-zero code, if any.
    pub fn first_failure(&self) -> Option<(&str, i32)> {
        self.containers.iter().find_map(|c| match c.exit_code {
            Some(code) if code != 0 => Some((c.name.as_str(), code)),
            _ => None,
        })
    }
}
