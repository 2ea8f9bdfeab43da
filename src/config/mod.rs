// ABOUTME: Launch request assembled from action inputs.
// ABOUTME: Trims values, treats empty as absent, and rejects missing required inputs.

use crate::cli::Inputs;
use crate::error::{Error, Result};

pub const INPUT_TASK_DEFINITION: &str = "task-definition";
pub const INPUT_CONTAINER: &str = "container";
pub const INPUT_COMMAND: &str = "command";
pub const INPUT_SERVICE: &str = "service";
pub const INPUT_CLUSTER: &str = "cluster";
pub const INPUT_WAIT_FOR_STOPPED: &str = "wait-for-stopped";

/// Everything needed to run one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub task_definition: String,
    pub container: String,
    pub raw_command: String,
    pub service: String,
    pub cluster: String,
    pub wait_for_stopped: bool,
}

impl LaunchRequest {
    /// Validate raw inputs.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingInput` naming the first required input that is
    /// absent or blank.
    pub fn from_inputs(inputs: &Inputs) -> Result<Self> {
        Ok(Self {
            task_definition: required(&inputs.task_definition, INPUT_TASK_DEFINITION)?,
            container: required(&inputs.container, INPUT_CONTAINER)?,
            raw_command: required(&inputs.command, INPUT_COMMAND)?,
            service: required(&inputs.service, INPUT_SERVICE)?,
            cluster: required(&inputs.cluster, INPUT_CLUSTER)?,
            wait_for_stopped: optional(&inputs.wait_for_stopped)
                .is_some_and(|v| v.eq_ignore_ascii_case("true")),
        })
    }
}

fn optional(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn required(value: &Option<String>, name: &'static str) -> Result<String> {
    optional(value)
        .map(str::to_string)
        .ok_or(Error::MissingInput(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_inputs() -> Inputs {
        Inputs {
            task_definition: Some("task:1".to_string()),
            container: Some("container-123".to_string()),
            command: Some(r#"["echo", "Hello, World"]"#.to_string()),
            service: Some("service-456".to_string()),
            cluster: Some("cluster-789".to_string()),
            wait_for_stopped: None,
        }
    }

    #[test]
    fn complete_inputs_build_request() {
        let request = LaunchRequest::from_inputs(&complete_inputs()).unwrap();
        assert_eq!(request.task_definition, "task:1");
        assert_eq!(request.container, "container-123");
        assert_eq!(request.raw_command, r#"["echo", "Hello, World"]"#);
        assert_eq!(request.service, "service-456");
        assert_eq!(request.cluster, "cluster-789");
        assert!(!request.wait_for_stopped);
    }

    #[test]
    fn values_are_trimmed() {
        let inputs = Inputs {
            cluster: Some("  cluster-789\n".to_string()),
            ..complete_inputs()
        };
        let request = LaunchRequest::from_inputs(&inputs).unwrap();
        assert_eq!(request.cluster, "cluster-789");
    }

    #[test]
    fn missing_required_input_is_named() {
        let inputs = Inputs {
            service: None,
            ..complete_inputs()
        };
        let err = LaunchRequest::from_inputs(&inputs).unwrap_err();
        assert!(matches!(err, Error::MissingInput("service")));
        assert_eq!(err.to_string(), "Input required and not supplied: service");
    }

    #[test]
    fn blank_required_input_counts_as_missing() {
        let inputs = Inputs {
            container: Some("   ".to_string()),
            ..complete_inputs()
        };
        let err = LaunchRequest::from_inputs(&inputs).unwrap_err();
        assert!(matches!(err, Error::MissingInput("container")));
    }

    #[test]
    fn wait_flag_is_case_insensitive() {
        for value in ["true", "TRUE", "True", " true "] {
            let inputs = Inputs {
                wait_for_stopped: Some(value.to_string()),
                ..complete_inputs()
            };
            assert!(LaunchRequest::from_inputs(&inputs).unwrap().wait_for_stopped);
        }
    }

    #[test]
    fn wait_flag_other_values_disable_waiting() {
        for value in ["false", "yes", "1", ""] {
            let inputs = Inputs {
                wait_for_stopped: Some(value.to_string()),
                ..complete_inputs()
            };
            assert!(!LaunchRequest::from_inputs(&inputs).unwrap().wait_for_stopped);
        }
    }
}
