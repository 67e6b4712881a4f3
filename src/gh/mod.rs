// gh-wrun — GitHub CLI collaborator

use crate::error::{Result, WrunError};
use crate::process::{self, CommandError};
use crate::workflow::{InputAnswer, Workflow};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// WorkflowHost trait
// ---------------------------------------------------------------------------

/// Workflow management calls. Every call blocks until the host answers.
pub trait WorkflowHost {
    fn list_workflows(&self) -> Result<Vec<Workflow>>;
    /// Raw workflow document for the given workflow id.
    fn view_workflow_schema(&self, id: u64) -> Result<Vec<u8>>;
    /// Trigger a run. Not idempotent: callers must not retry.
    fn run_workflow(&self, id: u64, branch: &str, answers: &[InputAnswer]) -> Result<()>;
    fn list_environments(&self) -> Result<Vec<String>>;
    /// Raw `gh version` output.
    fn version(&self) -> Result<String>;
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RepoView {
    #[serde(rename = "nameWithOwner", default)]
    name_with_owner: String,
}

#[derive(Debug, Deserialize)]
struct EnvironmentsResponse {
    #[serde(default)]
    environments: Vec<EnvironmentEntry>,
}

#[derive(Debug, Deserialize)]
struct EnvironmentEntry {
    name: String,
}

/// Error body returned by the REST API.
#[derive(Debug, Deserialize)]
struct ApiFailure {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    documentation_url: String,
}

// ---------------------------------------------------------------------------
// gh executable
// ---------------------------------------------------------------------------

/// `WorkflowHost` backed by the `gh` executable, scoped to the current repository.
pub struct GhCli {
    bin: String,
}

impl GhCli {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }

    fn output(&self, args: Vec<String>) -> std::result::Result<Vec<u8>, CommandError> {
        process::run(&self.bin, &args)
    }

    fn current_repository(&self) -> Result<String> {
        let out = self
            .output(process::args(["repo", "view", "--json", "nameWithOwner"]))
            .map_err(host_error)?;
        let view: RepoView = serde_json::from_slice(&out)
            .map_err(|e| WrunError::Host(format!("unexpected repo view output: {}", e)))?;
        if view.name_with_owner.is_empty() {
            return Err(WrunError::Host("repository not found".into()));
        }
        Ok(view.name_with_owner)
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new("gh")
    }
}

impl WorkflowHost for GhCli {
    fn list_workflows(&self) -> Result<Vec<Workflow>> {
        let out = self
            .output(process::args(["workflow", "list", "--json", "id,name,path,state"]))
            .map_err(host_error)?;
        serde_json::from_slice(&out)
            .map_err(|e| WrunError::Host(format!("unexpected workflow list output: {}", e)))
    }

    fn view_workflow_schema(&self, id: u64) -> Result<Vec<u8>> {
        let id = id.to_string();
        self.output(process::args(["workflow", "view", id.as_str(), "--yaml"]))
            .map_err(host_error)
    }

    fn run_workflow(&self, id: u64, branch: &str, answers: &[InputAnswer]) -> Result<()> {
        self.output(run_args(id, branch, answers))
            .map(|_| ())
            .map_err(|e| match e {
                CommandError::Failed { stderr, status, .. } if !stderr.is_empty() => {
                    WrunError::Dispatch(format!("{} ({})", stderr, status))
                }
                other => WrunError::Dispatch(other.to_string()),
            })
    }

    fn list_environments(&self) -> Result<Vec<String>> {
        let repo = self.current_repository()?;
        let endpoint = format!("/repos/{}/environments", repo);
        let out = self
            .output(process::args([
                "api",
                "-H",
                "Accept: application/vnd.github+json",
                "-H",
                "X-GitHub-Api-Version: 2022-11-28",
                endpoint.as_str(),
            ]))
            .map_err(environments_error)?;
        parse_environments(&out)
    }

    fn version(&self) -> Result<String> {
        let out = self.output(process::args(["version"])).map_err(host_error)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

/// Arguments for `gh workflow run`: one `-f key=value` pair per answer, in order.
pub fn run_args(id: u64, branch: &str, answers: &[InputAnswer]) -> Vec<String> {
    let mut args = process::args([
        "workflow".to_string(),
        "run".into(),
        id.to_string(),
        "--ref".into(),
        branch.to_string(),
    ]);
    for answer in answers {
        args.push("-f".into());
        args.push(answer.as_field());
    }
    args
}

fn parse_environments(out: &[u8]) -> Result<Vec<String>> {
    let res: EnvironmentsResponse = serde_json::from_slice(out)
        .map_err(|e| WrunError::Host(format!("unexpected environments output: {}", e)))?;
    Ok(res.environments.into_iter().map(|e| e.name).collect())
}

fn environments_error(err: CommandError) -> WrunError {
    if let CommandError::Failed { stdout, .. } = &err {
        if let Ok(failure) = serde_json::from_slice::<ApiFailure>(stdout) {
            return WrunError::Host(format!(
                "failed to get environments, message: {}, status: {}, doc url: {}",
                failure.message, failure.status, failure.documentation_url
            ));
        }
    }
    host_error(err)
}

fn host_error(err: CommandError) -> WrunError {
    match err {
        CommandError::Failed { stderr, status, .. } if !stderr.is_empty() => {
            WrunError::Host(format!("{} ({})", stderr, status))
        }
        other => WrunError::Host(other.to_string()),
    }
}
