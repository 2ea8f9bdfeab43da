// ABOUTME: Orchestration backend abstraction and its Amazon ECS implementation.
// ABOUTME: The launch flow only talks to the TaskOps trait.

mod ecs;
mod traits;
mod types;

pub use ecs::EcsBackend;
pub use traits::{BackendError, TaskOps};
pub use types::{
    ContainerExit, ContainerOverride, RunTaskRequest, ServicePlacement, TaskHandle, TaskOutcome,
};
