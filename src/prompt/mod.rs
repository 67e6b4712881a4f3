// gh-wrun — Interactive prompting

pub mod terminal;

use crate::error::WrunError;
use thiserror::Error;

pub use terminal::TerminalPrompter;

#[derive(Error, Debug)]
pub enum PromptError {
    /// The user pressed Ctrl-C or closed input.
    #[error("interrupted")]
    Interrupted,
    #[error("{0}")]
    Io(String),
}

impl From<PromptError> for WrunError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::Interrupted => WrunError::Interrupted,
            PromptError::Io(msg) => WrunError::Prompt(msg),
        }
    }
}

/// Blocking questions asked of the user, one at a time.
pub trait Prompter {
    /// Pick one of `options`. If `default` is not among them the first option is the default.
    fn select_one(
        &mut self,
        label: &str,
        options: &[String],
        default: &str,
    ) -> Result<String, PromptError>;

    fn confirm(&mut self, label: &str, default: bool) -> Result<bool, PromptError>;

    /// Free text, pre-filled with `default`.
    fn free_text(&mut self, label: &str, default: &str) -> Result<String, PromptError>;
}
