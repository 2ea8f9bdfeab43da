// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Every action input can come from a flag or the runner's INPUT_* variable.

use clap::{Args, Parser};

#[derive(Debug, Parser)]
#[command(name = "ecs-run-task")]
#[command(about = "Run a one-off ECS task using an existing service's network configuration")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub inputs: Inputs,

    /// Enable debug logging (also enabled by RUNNER_DEBUG=1)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Raw action inputs, as supplied by the runner or on the command line.
///
/// Values are validated by [`crate::config::LaunchRequest::from_inputs`].
#[derive(Debug, Clone, Default, Args)]
pub struct Inputs {
    /// Task definition family, family:revision, or full ARN
    #[arg(long, env = "INPUT_TASK-DEFINITION")]
    pub task_definition: Option<String>,

    /// Container in the task definition whose command is overridden
    #[arg(long, env = "INPUT_CONTAINER")]
    pub container: Option<String>,

    /// Command as a JSON array, or newline/space separated arguments
    #[arg(long, env = "INPUT_COMMAND", allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Service whose network configuration the task reuses
    #[arg(long, env = "INPUT_SERVICE")]
    pub service: Option<String>,

    /// Cluster hosting the service
    #[arg(long, env = "INPUT_CLUSTER")]
    pub cluster: Option<String>,

    /// Wait for the task to stop when set to "true"
    #[arg(long, env = "INPUT_WAIT-FOR-STOPPED")]
    pub wait_for_stopped: Option<String>,
}
