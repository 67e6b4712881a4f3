// gh-wrun — Interactive session: branch, workflow, inputs, confirmation

use crate::catalog::WorkflowCatalog;
use crate::error::{Result, SchemaError, WrunError};
use crate::gh::WorkflowHost;
use crate::git::{BranchResolver, Vcs};
use crate::prompt::Prompter;
use crate::table::{summary_rows, TableRenderer};
use crate::workflow::parser::parse_workflow_inputs;
use crate::workflow::{InputAnswer, InputDefinition, InputType, Workflow};

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Use the current branch without asking or checking the remote.
    pub auto_branch: bool,
}

/// Everything the user chose. Only dispatch it when `confirmed` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResult {
    pub branch: String,
    pub workflow: Workflow,
    pub answers: Vec<InputAnswer>,
    pub confirmed: bool,
}

/// Where the session is. Each stage owns what the earlier ones produced.
enum Stage {
    ResolveBranch,
    ResolveWorkflow {
        branch: String,
    },
    FetchSchema {
        branch: String,
        workflow: Workflow,
    },
    CollectInputs {
        branch: String,
        workflow: Workflow,
        inputs: Vec<InputDefinition>,
    },
    Confirm(SessionResult),
}

impl Stage {
    fn name(&self) -> &'static str {
        match self {
            Stage::ResolveBranch => "resolve_branch",
            Stage::ResolveWorkflow { .. } => "resolve_workflow",
            Stage::FetchSchema { .. } => "fetch_schema",
            Stage::CollectInputs { .. } => "collect_inputs",
            Stage::Confirm(_) => "confirm",
        }
    }
}

/// One-shot interactive session. Any error aborts it; nothing is dispatched here.
pub struct InteractionSession<'a> {
    vcs: &'a dyn Vcs,
    host: &'a dyn WorkflowHost,
    prompter: &'a mut dyn Prompter,
    renderer: &'a mut dyn TableRenderer,
    options: SessionOptions,
}

impl<'a> InteractionSession<'a> {
    pub fn new(
        vcs: &'a dyn Vcs,
        host: &'a dyn WorkflowHost,
        prompter: &'a mut dyn Prompter,
        renderer: &'a mut dyn TableRenderer,
        options: SessionOptions,
    ) -> Self {
        Self {
            vcs,
            host,
            prompter,
            renderer,
            options,
        }
    }

    pub fn run(mut self) -> Result<SessionResult> {
        let mut stage = Stage::ResolveBranch;
        loop {
            tracing::debug!(stage = stage.name(), "Session stage");
            stage = match stage {
                Stage::ResolveBranch => {
                    let branch = BranchResolver::new(self.vcs)
                        .resolve(self.options.auto_branch, &mut *self.prompter)?;
                    Stage::ResolveWorkflow { branch }
                }
                Stage::ResolveWorkflow { branch } => {
                    let workflow = WorkflowCatalog::new(self.host).select(&mut *self.prompter)?;
                    Stage::FetchSchema { branch, workflow }
                }
                Stage::FetchSchema { branch, workflow } => {
                    let raw = self.host.view_workflow_schema(workflow.id)?;
                    let inputs = parse_workflow_inputs(&raw)?;
                    tracing::debug!(workflow = %workflow.name, inputs = inputs.len(), "Fetched inputs");
                    Stage::CollectInputs {
                        branch,
                        workflow,
                        inputs,
                    }
                }
                Stage::CollectInputs {
                    branch,
                    workflow,
                    inputs,
                } => {
                    let answers = self.collect_inputs(&inputs)?;
                    Stage::Confirm(SessionResult {
                        branch,
                        workflow,
                        answers,
                        confirmed: false,
                    })
                }
                Stage::Confirm(mut result) => {
                    self.renderer.render_table(&summary_rows(&result));
                    result.confirmed = self.prompter.confirm("Run this?", true)?;
                    return Ok(result);
                }
            };
        }
    }

    fn collect_inputs(&mut self, inputs: &[InputDefinition]) -> Result<Vec<InputAnswer>> {
        inputs
            .iter()
            .map(|input| Ok(InputAnswer::new(&input.name, self.ask(input)?)))
            .collect()
    }

    fn ask(&mut self, input: &InputDefinition) -> Result<String> {
        let label = input.label();
        match input.input_type {
            InputType::Choice => {
                let default = input.effective_choice_default().ok_or_else(|| {
                    SchemaError::new(None, format!("choice input '{}' has no options", input.name))
                })?;
                Ok(self.prompter.select_one(label, &input.options, default)?)
            }
            InputType::Boolean => {
                let answer = self.prompter.confirm(label, input.boolean_default())?;
                Ok(answer.to_string())
            }
            InputType::Environment => {
                let environments = self.host.list_environments()?;
                let first = environments.first().ok_or(WrunError::NoEnvironments)?;
                Ok(self.prompter.select_one(label, &environments, first)?)
            }
            InputType::Number => {
                let mut answer = self.prompter.free_text(label, &input.default)?;
                while !number_accepted(input, &answer) {
                    tracing::debug!(input = %input.name, "Not a number, asking again");
                    answer = self
                        .prompter
                        .free_text(&format!("{} (a number)", label), &input.default)?;
                }
                Ok(answer.trim().to_string())
            }
            InputType::String => Ok(self.prompter.free_text(label, &input.default)?),
        }
    }
}

/// A number input takes numeric text, or blank text when it is optional.
fn number_accepted(input: &InputDefinition, answer: &str) -> bool {
    let answer = answer.trim();
    (answer.is_empty() && !input.required) || answer.parse::<f64>().is_ok()
}
