// gh-wrun — Git collaborator and branch resolution

use crate::error::{Result, WrunError};
use crate::process::{self, CommandError};
use crate::prompt::Prompter;

// ---------------------------------------------------------------------------
// Vcs trait
// ---------------------------------------------------------------------------

/// Source-control queries needed to pick a branch.
pub trait Vcs {
    /// Name of the checked-out branch.
    fn current_branch(&self) -> Result<String>;
    /// Raw remote-tracking branch lines, unfiltered.
    fn remote_branches(&self) -> Result<Vec<String>>;
}

/// `Vcs` backed by the `git` executable.
pub struct GitCli {
    bin: String,
}

impl GitCli {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }

    fn output(&self, args: &[&str]) -> Result<String> {
        let out = process::run(&self.bin, &process::args(args.iter().copied()))
            .map_err(vcs_error)?;
        String::from_utf8(out).map_err(|e| WrunError::Vcs(format!("output is not UTF-8: {}", e)))
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl Vcs for GitCli {
    fn current_branch(&self) -> Result<String> {
        let out = self.output(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        let branch = out.trim();
        if branch.is_empty() {
            return Err(WrunError::Vcs("could not determine the current branch".into()));
        }
        Ok(branch.to_string())
    }

    fn remote_branches(&self) -> Result<Vec<String>> {
        let out = self.output(&["branch", "-r"])?;
        Ok(out.lines().map(str::to_string).collect())
    }
}

fn vcs_error(err: CommandError) -> WrunError {
    match err {
        CommandError::Failed { stderr, status, .. } if !stderr.is_empty() => {
            WrunError::Vcs(format!("{} ({})", stderr, status))
        }
        other => WrunError::Vcs(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Remote branch filtering
// ---------------------------------------------------------------------------

/// Keep real branch references and strip their remote alias.
///
/// Lines with more than one token (`origin/HEAD -> origin/main`) are dropped.
pub fn filter_remote_branches<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| {
            let mut tokens = line.as_ref().split_whitespace();
            match (tokens.next(), tokens.next()) {
                (Some(reference), None) => Some(strip_remote(reference).to_string()),
                _ => None,
            }
        })
        .collect()
}

fn strip_remote(reference: &str) -> &str {
    reference
        .split_once('/')
        .map(|(_, branch)| branch)
        .unwrap_or(reference)
}

/// Move `current` to the front, keeping the order of everything else.
pub fn current_first(mut branches: Vec<String>, current: &str) -> Vec<String> {
    if let Some(pos) = branches.iter().position(|b| b == current) {
        let branch = branches.remove(pos);
        branches.insert(0, branch);
    }
    branches
}

// ---------------------------------------------------------------------------
// Branch resolver
// ---------------------------------------------------------------------------

pub struct BranchResolver<'a> {
    vcs: &'a dyn Vcs,
}

impl<'a> BranchResolver<'a> {
    pub fn new(vcs: &'a dyn Vcs) -> Self {
        Self { vcs }
    }

    pub fn current_branch(&self) -> Result<String> {
        self.vcs.current_branch()
    }

    /// Remote branches with symbolic refs removed and the remote alias stripped.
    pub fn remote_branches(&self) -> Result<Vec<String>> {
        Ok(filter_remote_branches(&self.vcs.remote_branches()?))
    }

    /// Decide which branch the workflow runs on.
    ///
    /// With `auto` the current branch is used as-is, without checking the remote.
    pub fn resolve(&self, auto: bool, prompter: &mut dyn Prompter) -> Result<String> {
        let current = self.current_branch()?;
        if auto {
            tracing::debug!(branch = %current, "Using current branch");
            return Ok(current);
        }

        let remote = self.remote_branches()?;
        if remote.is_empty() {
            return Err(WrunError::NoRemoteBranches);
        }

        if remote.len() == 1 && remote[0] == current {
            let ok = prompter.confirm(&format!("Run on this branch: {}", current), true)?;
            if !ok {
                return Err(WrunError::NoOtherBranch);
            }
            return Ok(current);
        }

        let choices = current_first(remote, &current);
        Ok(prompter.select_one("Select a branch", &choices, &current)?)
    }
}
