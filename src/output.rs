// ABOUTME: Step outputs and failure reporting for the CI runner.
// ABOUTME: Writes to $GITHUB_OUTPUT or falls back to legacy workflow commands.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Environment variable naming the runner's step output file.
pub const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";

/// Where step outputs are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Append `name=value` lines to the runner's output file.
    File(PathBuf),
    /// Print `::set-output` workflow commands to stdout.
    WorkflowCommand,
}

/// Handles step outputs and the final failure annotation.
#[derive(Debug)]
pub struct Output {
    target: OutputTarget,
}

impl Output {
    pub fn new(target: OutputTarget) -> Self {
        Self { target }
    }

    /// Pick the target from `GITHUB_OUTPUT`, if the runner provides one.
    pub fn from_env() -> Self {
        let target = std::env::var_os(GITHUB_OUTPUT)
            .filter(|path| !path.is_empty())
            .map(|path| OutputTarget::File(PathBuf::from(path)))
            .unwrap_or(OutputTarget::WorkflowCommand);
        Self::new(target)
    }

    pub fn target(&self) -> &OutputTarget {
        &self.target
    }

    /// Publish a step output.
    pub fn set_output(&self, name: &str, value: &str) -> Result<()> {
        match &self.target {
            OutputTarget::File(path) => OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .and_then(|mut file| writeln!(file, "{name}={value}"))
                .map_err(|source| Error::Output {
                    path: path.clone(),
                    source,
                }),
            OutputTarget::WorkflowCommand => {
                println!("::set-output name={name}::{}", escape_data(value));
                Ok(())
            }
        }
    }

    /// Mark the step as failed with a single annotation.
    pub fn error(&self, message: &str) {
        println!("{}", error_command(message));
    }
}

/// Workflow command that marks the step failed.
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Escape a workflow command payload so it stays on one line.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
