// gh-wrun — Blocking subprocess execution for collaborator commands

use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
        /// Some commands (`gh api`) report failures as a JSON body on stdout.
        stdout: Vec<u8>,
    },
}

/// Run `program args..` to completion and return its stdout.
///
/// Stdin is inherited so the command can authenticate interactively if it needs to.
pub fn run(program: &str, args: &[String]) -> Result<Vec<u8>, CommandError> {
    tracing::debug!(program = %program, args = ?args, "Running command");

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| CommandError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if output.status.success() {
        return Ok(output.stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    tracing::warn!(program = %program, status = %output.status, "Command failed");
    Err(CommandError::Failed {
        program: program.to_string(),
        status: output.status.to_string(),
        stderr,
        stdout: output.stdout,
    })
}

/// Build an owned argument list from string literals and values.
pub fn args<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}
