// gh-wrun — Error taxonomy

use crate::config::ConfigError;
use thiserror::Error;

/// The workflow document does not match the expected `workflow_dispatch.inputs` shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid workflow inputs{}: {message}", in_workflow(.workflow))]
pub struct SchemaError {
    /// Document-level `name:` of the workflow, used for diagnostics only.
    pub workflow: Option<String>,
    pub message: String,
}

impl SchemaError {
    pub fn new(workflow: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            workflow: workflow.map(str::to_string),
            message: message.into(),
        }
    }
}

fn in_workflow(workflow: &Option<String>) -> String {
    workflow
        .as_ref()
        .map(|name| format!(" in '{}'", name))
        .unwrap_or_default()
}

#[derive(Error, Debug)]
pub enum WrunError {
    #[error("git: {0}")]
    Vcs(String),
    #[error("gh: {0}")]
    Host(String),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("no remote branches found")]
    NoRemoteBranches,
    #[error("no other executable branch found")]
    NoOtherBranch,
    #[error("no active workflows found")]
    NoActiveWorkflows,
    #[error("no environments exist")]
    NoEnvironments,
    #[error("selected workflow '{0}' is not among the listed workflows")]
    WorkflowNotListed(String),
    #[error("canceled")]
    Canceled,
    #[error("interrupted")]
    Interrupted,
    #[error("prompt failed: {0}")]
    Prompt(String),
    #[error("failed to start workflow: {0}")]
    Dispatch(String),
    #[error("gh-wrun requires gh version {required} or later (found {found})")]
    UnsupportedGh { found: String, required: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl WrunError {
    /// True when the session ended because the user declined or interrupted,
    /// as opposed to a failure.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, WrunError::Canceled | WrunError::Interrupted)
    }
}

pub type Result<T> = std::result::Result<T, WrunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_names_workflow() {
        let err = SchemaError::new(Some("deploy"), "input 'env' is not a mapping");
        assert_eq!(
            err.to_string(),
            "invalid workflow inputs in 'deploy': input 'env' is not a mapping"
        );

        let err = SchemaError::new(None, "bad");
        assert_eq!(err.to_string(), "invalid workflow inputs: bad");
    }

    #[test]
    fn test_cancellation_is_distinct_from_failure() {
        assert!(WrunError::Canceled.is_cancellation());
        assert!(WrunError::Interrupted.is_cancellation());
        assert!(!WrunError::NoActiveWorkflows.is_cancellation());
        assert!(!WrunError::Dispatch("exit 1".into()).is_cancellation());
    }
}
