#![allow(dead_code)]

use gh_wrun::error::{Result, WrunError};
use gh_wrun::gh::WorkflowHost;
use gh_wrun::git::Vcs;
use gh_wrun::prompt::{PromptError, Prompter};
use gh_wrun::table::{SummaryRow, TableRenderer};
use gh_wrun::workflow::{InputAnswer, Workflow, WorkflowState};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

// ---------------------------------------------------------------------------
// VCS
// ---------------------------------------------------------------------------

pub struct FakeVcs {
    pub current: String,
    /// Raw `git branch -r` output; `None` makes the call fail.
    pub remote: Option<String>,
}

impl FakeVcs {
    pub fn new(current: &str, remote: &str) -> Self {
        Self {
            current: current.into(),
            remote: Some(remote.into()),
        }
    }
}

impl Vcs for FakeVcs {
    fn current_branch(&self) -> Result<String> {
        Ok(self.current.clone())
    }

    fn remote_branches(&self) -> Result<Vec<String>> {
        match &self.remote {
            Some(raw) => Ok(raw.lines().map(str::to_string).collect()),
            None => Err(WrunError::Vcs("remote listing not expected".into())),
        }
    }
}

// ---------------------------------------------------------------------------
// Workflow host
// ---------------------------------------------------------------------------

pub fn workflow(id: u64, name: &str) -> Workflow {
    Workflow {
        id,
        name: name.into(),
        path: format!(".github/workflows/{}.yml", name.to_lowercase()),
        state: WorkflowState::Active,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunCall {
    pub id: u64,
    pub branch: String,
    pub answers: Vec<InputAnswer>,
}

pub struct FakeHost {
    pub workflows: Vec<Workflow>,
    pub schema: String,
    /// `None` makes the environments call fail.
    pub environments: Option<Vec<String>>,
    pub run_error: Option<String>,
    pub version: String,
    pub runs: RefCell<Vec<RunCall>>,
    pub schema_fetches: Cell<usize>,
}

impl FakeHost {
    pub fn new(workflows: Vec<Workflow>, schema: &str) -> Self {
        Self {
            workflows,
            schema: schema.into(),
            environments: Some(vec!["staging".into(), "production".into()]),
            run_error: None,
            version: "gh version 2.40.1 (2023-12-13)\n".into(),
            runs: RefCell::new(Vec::new()),
            schema_fetches: Cell::new(0),
        }
    }
}

impl WorkflowHost for FakeHost {
    fn list_workflows(&self) -> Result<Vec<Workflow>> {
        Ok(self.workflows.clone())
    }

    fn view_workflow_schema(&self, _id: u64) -> Result<Vec<u8>> {
        self.schema_fetches.set(self.schema_fetches.get() + 1);
        Ok(self.schema.clone().into_bytes())
    }

    fn run_workflow(&self, id: u64, branch: &str, answers: &[InputAnswer]) -> Result<()> {
        self.runs.borrow_mut().push(RunCall {
            id,
            branch: branch.into(),
            answers: answers.to_vec(),
        });
        match &self.run_error {
            Some(msg) => Err(WrunError::Dispatch(msg.clone())),
            None => Ok(()),
        }
    }

    fn list_environments(&self) -> Result<Vec<String>> {
        self.environments
            .clone()
            .ok_or_else(|| WrunError::Host("HTTP 404".into()))
    }

    fn version(&self) -> Result<String> {
        Ok(self.version.clone())
    }
}

// ---------------------------------------------------------------------------
// Prompter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Reply {
    /// Accept whatever default the prompt offers.
    Default,
    Select(String),
    Confirm(bool),
    Text(String),
    Interrupt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asked {
    Select {
        label: String,
        options: Vec<String>,
        default: String,
    },
    Confirm {
        label: String,
        default: bool,
    },
    Text {
        label: String,
        default: String,
    },
}

/// Answers prompts from a script and records what was asked.
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    pub asked: Vec<Asked>,
}

impl ScriptedPrompter {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: replies.into(),
            asked: Vec::new(),
        }
    }

    fn next(&mut self) -> Reply {
        self.replies
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected prompt after {:?}", self.asked))
    }
}

impl Prompter for ScriptedPrompter {
    fn select_one(
        &mut self,
        label: &str,
        options: &[String],
        default: &str,
    ) -> std::result::Result<String, PromptError> {
        self.asked.push(Asked::Select {
            label: label.into(),
            options: options.to_vec(),
            default: default.into(),
        });
        match self.next() {
            Reply::Default => Ok(default.to_string()),
            Reply::Select(choice) => {
                assert!(options.contains(&choice), "{choice} is not offered");
                Ok(choice)
            }
            Reply::Interrupt => Err(PromptError::Interrupted),
            other => panic!("select '{label}' answered with {other:?}"),
        }
    }

    fn confirm(&mut self, label: &str, default: bool) -> std::result::Result<bool, PromptError> {
        self.asked.push(Asked::Confirm {
            label: label.into(),
            default,
        });
        match self.next() {
            Reply::Default => Ok(default),
            Reply::Confirm(answer) => Ok(answer),
            Reply::Interrupt => Err(PromptError::Interrupted),
            other => panic!("confirm '{label}' answered with {other:?}"),
        }
    }

    fn free_text(&mut self, label: &str, default: &str) -> std::result::Result<String, PromptError> {
        self.asked.push(Asked::Text {
            label: label.into(),
            default: default.into(),
        });
        match self.next() {
            Reply::Default => Ok(default.to_string()),
            Reply::Text(text) => Ok(text),
            Reply::Interrupt => Err(PromptError::Interrupted),
            other => panic!("text '{label}' answered with {other:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingRenderer {
    pub tables: Vec<Vec<SummaryRow>>,
}

impl TableRenderer for RecordingRenderer {
    fn render_table(&mut self, rows: &[SummaryRow]) {
        self.tables.push(rows.to_vec());
    }
}
