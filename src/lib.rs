// ABOUTME: Library root for ecs-run-task - exposes the launch flow for testing.
// ABOUTME: The main binary is in main.rs.

pub mod backend;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod launch;
pub mod output;
