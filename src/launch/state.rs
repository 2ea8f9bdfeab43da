// ABOUTME: Task run state types for the type state pattern.
// ABOUTME: Each state carries the data produced by the step that reached it.

use crate::backend::{ServicePlacement, TaskHandle, TaskOutcome};

/// Inputs validated, nothing sent to the backend yet.
/// Available actions: `fetch_placement()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Configured;

/// Service placement read from the backend.
/// Available actions: `parse_command()`
#[derive(Debug, Clone)]
pub struct PlacementFetched {
    pub(crate) placement: ServicePlacement,
}

/// Command override parsed.
/// Available actions: `launch()`
#[derive(Debug, Clone)]
pub struct CommandParsed {
    pub(crate) placement: ServicePlacement,
    pub(crate) command: Vec<String>,
}

/// Task started on the backend.
/// Available actions: `report()`, `wait_until_stopped()`, `finish()`
#[derive(Debug, Clone)]
pub struct Launched {
    pub(crate) task: TaskHandle,
}

/// Task reached a stopped state.
/// Available actions: `evaluate()`
#[derive(Debug, Clone)]
pub struct Stopped {
    pub(crate) task: TaskHandle,
    pub(crate) outcome: TaskOutcome,
}
