// ABOUTME: Test support utilities.
// ABOUTME: Provides a recording fake backend and sample ECS fixtures.

use async_trait::async_trait;
use aws_sdk_ecs::types::{
    AssignPublicIp, AwsVpcConfiguration, LaunchType, NetworkConfiguration,
};
use ecs_run_task::backend::{
    BackendError, ContainerExit, RunTaskRequest, ServicePlacement, TaskHandle, TaskOps,
    TaskOutcome,
};
use ecs_run_task::cli::Inputs;
use std::sync::{Mutex, Once};

pub const REGION: &str = "fake-region";
pub const TASK_ARN: &str = "arn:aws:ecs:fake-region:123456789012:task/01234-abcd";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("ecs_run_task=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// A backend call, as seen by the fake.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    DescribeService { cluster: String, service: String },
    RunTask(RunTaskRequest),
    WaitUntilStopped { cluster: String, task_arn: String },
}

/// In-memory `TaskOps` that records every call.
pub struct FakeEcs {
    pub placement: ServicePlacement,
    pub describe_error: Option<String>,
    pub run_error: Option<String>,
    pub wait_error: Option<String>,
    pub exits: Vec<ContainerExit>,
    pub stopped_reason: Option<String>,
    calls: Mutex<Vec<Call>>,
}

#[allow(dead_code)]
impl FakeEcs {
    pub fn new(placement: ServicePlacement) -> Self {
        Self {
            placement,
            describe_error: None,
            run_error: None,
            wait_error: None,
            exits: vec![exit("container-123", Some(0))],
            stopped_reason: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn fargate() -> Self {
        Self::new(fargate_placement())
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn run_task_requests(&self) -> Vec<RunTaskRequest> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::RunTask(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    pub fn wait_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::WaitUntilStopped { .. }))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl TaskOps for FakeEcs {
    fn region(&self) -> &str {
        REGION
    }

    async fn describe_service(
        &self,
        cluster: &str,
        service: &str,
    ) -> Result<ServicePlacement, BackendError> {
        self.record(Call::DescribeService {
            cluster: cluster.to_string(),
            service: service.to_string(),
        });
        match &self.describe_error {
            Some(message) => Err(BackendError::Describe(message.clone())),
            None => Ok(self.placement.clone()),
        }
    }

    async fn run_task(&self, request: &RunTaskRequest) -> Result<TaskHandle, BackendError> {
        self.record(Call::RunTask(request.clone()));
        match &self.run_error {
            Some(message) => Err(BackendError::RunTask(message.clone())),
            None => Ok(TaskHandle::new(TASK_ARN)),
        }
    }

    async fn wait_until_stopped(
        &self,
        cluster: &str,
        task: &TaskHandle,
    ) -> Result<TaskOutcome, BackendError> {
        self.record(Call::WaitUntilStopped {
            cluster: cluster.to_string(),
            task_arn: task.task_arn.clone(),
        });
        match &self.wait_error {
            Some(message) => Err(BackendError::Wait(message.clone())),
            None => Ok(TaskOutcome {
                containers: self.exits.clone(),
                stopped_reason: self.stopped_reason.clone(),
            }),
        }
    }
}

pub fn exit(name: &str, code: Option<i32>) -> ContainerExit {
    ContainerExit {
        name: name.to_string(),
        exit_code: code,
    }
}

pub fn network_configuration() -> NetworkConfiguration {
    let vpc = AwsVpcConfiguration::builder()
        .subnets("subnet-123")
        .subnets("subnet-456")
        .assign_public_ip(AssignPublicIp::Disabled)
        .security_groups("sg-123")
        .build()
        .expect("subnets are set");
    NetworkConfiguration::builder()
        .awsvpc_configuration(vpc)
        .build()
}

pub fn fargate_placement() -> ServicePlacement {
    ServicePlacement {
        launch_type: Some(LaunchType::Fargate),
        network_configuration: Some(network_configuration()),
        capacity_provider_strategy: Vec::new(),
    }
}

/// Inputs matching the sample service.
pub fn inputs() -> Inputs {
    Inputs {
        task_definition: Some("task:1".to_string()),
        container: Some("container-123".to_string()),
        command: Some(r#"["echo", "Hello, World"]"#.to_string()),
        service: Some("service-456".to_string()),
        cluster: Some("cluster-789".to_string()),
        wait_for_stopped: None,
    }
}
