// gh-wrun — Line-editor prompts on the terminal

use super::{PromptError, Prompter};
use crossterm::style::Stylize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// `Prompter` that reads answers with rustyline.
pub struct TerminalPrompter {
    editor: DefaultEditor,
}

impl TerminalPrompter {
    pub fn new() -> Result<Self, PromptError> {
        let editor = DefaultEditor::new().map_err(readline_error)?;
        Ok(Self { editor })
    }

    fn read(&mut self, prompt: &str, initial: &str) -> Result<String, PromptError> {
        let line = if initial.is_empty() {
            self.editor.readline(prompt)
        } else {
            self.editor.readline_with_initial(prompt, (initial, ""))
        };
        line.map_err(readline_error)
    }
}

impl Prompter for TerminalPrompter {
    fn select_one(
        &mut self,
        label: &str,
        options: &[String],
        default: &str,
    ) -> Result<String, PromptError> {
        if options.is_empty() {
            return Err(PromptError::Io(format!("nothing to choose for '{}'", label)));
        }
        let default_idx = options.iter().position(|o| o == default).unwrap_or(0);

        println!("{} {}", "?".green().bold(), label.bold());
        for (i, option) in options.iter().enumerate() {
            if i == default_idx {
                println!("  {} {}) {}", ">".cyan(), i + 1, option.as_str().cyan());
            } else {
                println!("    {}) {}", i + 1, option);
            }
        }

        let prompt = format!("  Enter a number [{}]: ", default_idx + 1);
        loop {
            let line = self.read(&prompt, "")?;
            match pick(options, default_idx, &line) {
                Some(idx) => return Ok(options[idx].clone()),
                None => println!("  {}", "Please enter one of the listed numbers.".yellow()),
            }
        }
    }

    fn confirm(&mut self, label: &str, default: bool) -> Result<bool, PromptError> {
        let hint = if default { "Y/n" } else { "y/N" };
        let prompt = format!("{} {} ({}) ", "?".green().bold(), label.bold(), hint);
        loop {
            let line = self.read(&prompt, "")?;
            match parse_confirm(&line, default) {
                Some(answer) => return Ok(answer),
                None => println!("  {}", "Please answer y or n.".yellow()),
            }
        }
    }

    fn free_text(&mut self, label: &str, default: &str) -> Result<String, PromptError> {
        let prompt = format!("{} {}: ", "?".green().bold(), label.bold());
        self.read(&prompt, default)
    }
}

fn readline_error(err: ReadlineError) -> PromptError {
    match err {
        ReadlineError::Interrupted | ReadlineError::Eof => PromptError::Interrupted,
        other => PromptError::Io(other.to_string()),
    }
}

/// Index chosen by `input`: blank for the default, a 1-based number, or the option text.
fn pick(options: &[String], default_idx: usize, input: &str) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() {
        return Some(default_idx);
    }
    if let Ok(n) = input.parse::<usize>() {
        return (1..=options.len()).contains(&n).then(|| n - 1);
    }
    options.iter().position(|o| o == input)
}

fn parse_confirm(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> Vec<String> {
        vec!["main".into(), "feature".into(), "dev".into()]
    }

    #[test]
    fn test_pick_blank_is_default() {
        assert_eq!(pick(&opts(), 1, ""), Some(1));
        assert_eq!(pick(&opts(), 1, "   "), Some(1));
    }

    #[test]
    fn test_pick_by_number_or_name() {
        assert_eq!(pick(&opts(), 0, "3"), Some(2));
        assert_eq!(pick(&opts(), 0, "dev"), Some(2));
        assert_eq!(pick(&opts(), 0, "0"), None);
        assert_eq!(pick(&opts(), 0, "4"), None);
        assert_eq!(pick(&opts(), 0, "release"), None);
    }

    #[test]
    fn test_parse_confirm() {
        assert_eq!(parse_confirm("", true), Some(true));
        assert_eq!(parse_confirm("", false), Some(false));
        assert_eq!(parse_confirm("Y", false), Some(true));
        assert_eq!(parse_confirm(" no ", true), Some(false));
        assert_eq!(parse_confirm("maybe", true), None);
    }

    #[test]
    fn test_interrupt_maps_to_interrupted() {
        assert!(matches!(
            readline_error(ReadlineError::Interrupted),
            PromptError::Interrupted
        ));
        assert!(matches!(readline_error(ReadlineError::Eof), PromptError::Interrupted));
    }
}
