// ABOUTME: Application-wide error types for ecs-run-task.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::launch::LaunchError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),

    #[error("no AWS region configured")]
    MissingRegion,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to write output to {path}: {source}")]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Launch(#[from] LaunchError),
}

pub type Result<T> = std::result::Result<T, Error>;
