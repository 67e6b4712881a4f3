// gh-wrun — Summary table shown before dispatch

use crate::session::SessionResult;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

pub const GROUP_TARGETS: &str = "Targets";
pub const GROUP_INPUTS: &str = "Inputs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub group: String,
    pub key: String,
    pub value: String,
}

impl SummaryRow {
    pub fn new(group: &str, key: &str, value: &str) -> Self {
        Self {
            group: group.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Rows for the branch, the workflow, then every answer in collection order.
pub fn summary_rows(result: &SessionResult) -> Vec<SummaryRow> {
    let mut rows = vec![
        SummaryRow::new(GROUP_TARGETS, "Git branch", &result.branch),
        SummaryRow::new(GROUP_TARGETS, "Workflow", result.workflow.display_name()),
    ];
    rows.extend(
        result
            .answers
            .iter()
            .map(|a| SummaryRow::new(GROUP_INPUTS, &a.key, &a.value)),
    );
    rows
}

pub trait TableRenderer {
    fn render_table(&mut self, rows: &[SummaryRow]);
}

/// Prints the table to stdout.
#[derive(Debug, Default)]
pub struct TerminalTable;

impl TableRenderer for TerminalTable {
    fn render_table(&mut self, rows: &[SummaryRow]) {
        println!("{}", format_table(rows));
    }
}

/// Render rows as a bordered table. A group label is only printed on its first row.
pub fn format_table(rows: &[SummaryRow]) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Disabled);

    let mut previous: Option<&str> = None;
    for row in rows {
        let group = if previous == Some(row.group.as_str()) {
            ""
        } else {
            row.group.as_str()
        };
        previous = Some(row.group.as_str());
        table.add_row(vec![Cell::new(group), Cell::new(&row.key), Cell::new(&row.value)]);
    }

    table.to_string()
}
