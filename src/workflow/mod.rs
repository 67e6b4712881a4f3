// gh-wrun — Workflow and input definition types

pub mod parser;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A workflow as listed by the workflow host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(rename = "state", default)]
    pub state: WorkflowState,
}

impl Workflow {
    pub fn display_name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.state == WorkflowState::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    Active,
    DisabledManually,
    DisabledInactivity,
    DisabledFork,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Type tag of a `workflow_dispatch` input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    String,
    Choice,
    Boolean,
    Environment,
    Number,
}

impl InputType {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "string" => Some(InputType::String),
            "choice" => Some(InputType::Choice),
            "boolean" => Some(InputType::Boolean),
            "environment" => Some(InputType::Environment),
            "number" => Some(InputType::Number),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::String => "string",
            InputType::Choice => "choice",
            InputType::Boolean => "boolean",
            InputType::Environment => "environment",
            InputType::Number => "number",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared input, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputDefinition {
    pub name: String,
    pub description: String,
    /// Always string-encoded; boolean defaults are `"true"` / `"false"`.
    pub default: String,
    pub input_type: InputType,
    pub required: bool,
    pub options: Vec<String>,
}

impl InputDefinition {
    /// Label shown when prompting: the description, or the name when it is empty.
    pub fn label(&self) -> &str {
        if self.description.is_empty() {
            &self.name
        } else {
            &self.description
        }
    }

    /// Default offered by a choice prompt. `None` only when there are no options,
    /// which the parser rejects for choice inputs.
    pub fn effective_choice_default(&self) -> Option<&str> {
        if self.options.iter().any(|o| *o == self.default) {
            Some(&self.default)
        } else {
            self.options.first().map(String::as_str)
        }
    }

    /// Boolean default. Accepts `1`, `t`, `T`, `true`, `TRUE`, `True` as true;
    /// anything else, including empty text, counts as `false`.
    pub fn boolean_default(&self) -> bool {
        matches!(
            self.default.trim(),
            "1" | "t" | "T" | "true" | "TRUE" | "True"
        )
    }
}

/// The user's answer for one input. Values are always text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputAnswer {
    pub key: String,
    pub value: String,
}

impl InputAnswer {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// `key=value`, the form passed to the dispatch call.
    pub fn as_field(&self) -> String {
        format!("{}={}", self.key, self.value)
    }
}
