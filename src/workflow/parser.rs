// gh-wrun — Parser for `on.workflow_dispatch.inputs`

use crate::error::SchemaError;
use crate::workflow::{InputDefinition, InputType};
use serde::Deserialize;
use serde_yaml::Value;

/// Fields accepted on a single input entry.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawInput {
    #[serde(default)]
    required: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    default: Option<Value>,
    #[serde(rename = "type", default)]
    input_type: Option<String>,
    #[serde(default)]
    options: Option<Vec<Value>>,
}

/// Parse the raw workflow document into its declared inputs, in declaration order.
///
/// A document without `inputs`, or with an empty `inputs` mapping, yields an
/// empty list.
pub fn parse_workflow_inputs(src: &[u8]) -> Result<Vec<InputDefinition>, SchemaError> {
    let root: Value = serde_yaml::from_slice(src)
        .map_err(|e| SchemaError::new(None, format!("not a YAML document: {}", e)))?;

    let workflow = root.get("name").and_then(Value::as_str);

    declared_inputs(&root, workflow)?
        .into_iter()
        .map(|(name, value)| parse_entry(name, value, workflow))
        .collect()
}

/// The `inputs` mapping as an ordered association list.
fn declared_inputs(
    root: &Value,
    workflow: Option<&str>,
) -> Result<Vec<(String, Value)>, SchemaError> {
    match root {
        Value::Null | Value::Mapping(_) => {}
        other => {
            return Err(SchemaError::new(
                workflow,
                format!("document root must be a mapping, found {}", kind(other)),
            ))
        }
    }

    // `on: push` and `on: [push, workflow_dispatch]` cannot declare inputs.
    let inputs = root
        .get("on")
        .and_then(|on| on.get("workflow_dispatch"))
        .and_then(|dispatch| dispatch.get("inputs"));

    let mapping = match inputs {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Mapping(m)) => m,
        Some(other) => {
            return Err(SchemaError::new(
                workflow,
                format!("`inputs` must be a mapping, found {}", kind(other)),
            ))
        }
    };

    let mut entries = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let name = key.as_str().ok_or_else(|| {
            SchemaError::new(workflow, format!("input name must be a string, found {}", kind(key)))
        })?;
        entries.push((name.to_string(), value.clone()));
    }
    Ok(entries)
}

fn parse_entry(
    name: String,
    value: Value,
    workflow: Option<&str>,
) -> Result<InputDefinition, SchemaError> {
    let raw = match value {
        Value::Null => RawInput::default(),
        Value::Mapping(_) => serde_yaml::from_value::<RawInput>(value)
            .map_err(|e| SchemaError::new(workflow, format!("input '{}': {}", name, e)))?,
        other => {
            return Err(SchemaError::new(
                workflow,
                format!("input '{}' must be a mapping, found {}", name, kind(&other)),
            ))
        }
    };

    let input_type = match raw.input_type.as_deref() {
        None => InputType::String,
        Some(tag) => InputType::parse(tag).ok_or_else(|| {
            SchemaError::new(workflow, format!("input '{}' has unknown type '{}'", name, tag))
        })?,
    };

    let default = match &raw.default {
        None => String::new(),
        Some(v) => scalar_text(v).ok_or_else(|| {
            SchemaError::new(workflow, format!("input '{}' default must be a scalar", name))
        })?,
    };

    let mut options = Vec::new();
    for option in raw.options.iter().flatten() {
        match option {
            Value::Null => {
                return Err(SchemaError::new(
                    workflow,
                    format!("input '{}' has an empty option", name),
                ))
            }
            v => options.push(scalar_text(v).ok_or_else(|| {
                SchemaError::new(workflow, format!("input '{}' options must be scalars", name))
            })?),
        }
    }

    if input_type == InputType::Choice && options.is_empty() {
        return Err(SchemaError::new(
            workflow,
            format!("choice input '{}' needs at least one option", name),
        ));
    }

    tracing::debug!(input = %name, kind = %input_type, required = raw.required, "Parsed input");

    Ok(InputDefinition {
        name,
        description: raw.description.unwrap_or_default(),
        default,
        input_type,
        required: raw.required,
        options,
    })
}

/// Text form of a scalar. Booleans become `"true"` / `"false"`.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
