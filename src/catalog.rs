// gh-wrun — Workflow catalog and selection

use crate::error::{Result, WrunError};
use crate::gh::WorkflowHost;
use crate::prompt::Prompter;
use crate::workflow::Workflow;

pub struct WorkflowCatalog<'a> {
    host: &'a dyn WorkflowHost,
}

impl<'a> WorkflowCatalog<'a> {
    pub fn new(host: &'a dyn WorkflowHost) -> Self {
        Self { host }
    }

    /// Workflows that can currently be dispatched, in host order.
    pub fn active_workflows(&self) -> Result<Vec<Workflow>> {
        let workflows: Vec<Workflow> = self
            .host
            .list_workflows()?
            .into_iter()
            .filter(Workflow::is_active)
            .collect();
        if workflows.is_empty() {
            return Err(WrunError::NoActiveWorkflows);
        }
        Ok(workflows)
    }

    /// Ask which workflow to run. A lone workflow only needs a yes/no.
    pub fn select(&self, prompter: &mut dyn Prompter) -> Result<Workflow> {
        let mut workflows = self.active_workflows()?;

        if workflows.len() == 1 {
            let workflow = workflows.remove(0);
            let label = format!("Do you want to run [{}]", workflow.display_name());
            if !prompter.confirm(&label, true)? {
                return Err(WrunError::Canceled);
            }
            return Ok(workflow);
        }

        let names: Vec<String> = workflows
            .iter()
            .map(|w| w.display_name().to_string())
            .collect();
        let chosen = prompter.select_one("Select the workflow you wish to run", &names, &names[0])?;
        find_by_name(workflows, &chosen)
    }
}

/// Resolve a chosen display name back to its workflow.
pub fn find_by_name(workflows: Vec<Workflow>, name: &str) -> Result<Workflow> {
    workflows
        .into_iter()
        .find(|w| w.display_name() == name)
        .ok_or_else(|| WrunError::WorkflowNotListed(name.to_string()))
}
