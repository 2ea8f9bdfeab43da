// ABOUTME: Entry point for the ecs-run-task CI step.
// ABOUTME: Validates inputs, connects to ECS, and runs the launch flow.

use clap::Parser;
use ecs_run_task::backend::EcsBackend;
use ecs_run_task::cli::Cli;
use ecs_run_task::config::LaunchRequest;
use ecs_run_task::error::Result;
use ecs_run_task::launch::run_task;
use ecs_run_task::output::Output;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose and RUNNER_DEBUG
    let debug = cli.verbose || std::env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("info,ecs_run_task=debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let output = Output::from_env();

    if let Err(e) = run(cli, &output).await {
        tracing::debug!(error = ?e, "run failed");
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &Output) -> Result<()> {
    let request = LaunchRequest::from_inputs(&cli.inputs)?;
    let backend = EcsBackend::from_env().await?;

    let summary = run_task(&backend, request, output).await?;
    if let Some(outcome) = summary.outcome {
        let clean = outcome
            .containers
            .iter()
            .filter(|c| c.exit_code == Some(0))
            .count();
        tracing::info!(
            "Task {} stopped ({clean} container(s) exited with code 0)",
            summary.task.task_id()
        );
    }
    Ok(())
}
