// gh-wrun — Dispatch the confirmed run

use crate::error::{Result, WrunError};
use crate::gh::WorkflowHost;
use crate::session::SessionResult;

pub struct Dispatcher<'a> {
    host: &'a dyn WorkflowHost,
}

impl<'a> Dispatcher<'a> {
    pub fn new(host: &'a dyn WorkflowHost) -> Self {
        Self { host }
    }

    /// Trigger the workflow exactly once. A failure is returned as-is, never retried.
    pub fn dispatch(&self, result: &SessionResult) -> Result<()> {
        if !result.confirmed {
            return Err(WrunError::Canceled);
        }

        tracing::info!(
            workflow = %result.workflow.name,
            branch = %result.branch,
            inputs = result.answers.len(),
            "Dispatching workflow"
        );
        self.host
            .run_workflow(result.workflow.id, &result.branch, &result.answers)?;
        tracing::info!(workflow = %result.workflow.name, "Workflow dispatched");
        Ok(())
    }
}
