// gh-wrun — gh version compatibility gate

use crate::error::{Result, WrunError};
use crate::gh::WorkflowHost;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?(\d+(?:\.\d+)*)(?:[-+].*)?$").expect("valid version pattern")
});

/// Version reported by `gh version` output, e.g. `gh version 2.40.1 (2023-12-13)`.
pub fn parse_gh_version(output: &str) -> Option<String> {
    output.split_whitespace().nth(2).map(str::to_string)
}

/// Compare dotted versions numerically. Missing components count as 0 and
/// anything after `-` or `+` is ignored.
pub fn compare_versions(a: &str, b: &str) -> Option<Ordering> {
    let (a, b) = (numeric_parts(a)?, numeric_parts(b)?);
    let len = a.len().max(b.len());
    let part = |v: &[u64], i: usize| v.get(i).copied().unwrap_or(0);
    Some(
        (0..len)
            .map(|i| part(&a, i).cmp(&part(&b, i)))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal),
    )
}

fn numeric_parts(version: &str) -> Option<Vec<u64>> {
    let caps = VERSION_PATTERN.captures(version.trim())?;
    caps[1].split('.').map(|p| p.parse().ok()).collect()
}

/// Fail unless the installed gh is at least `required`.
pub fn check_gh_version(host: &dyn WorkflowHost, required: &str) -> Result<()> {
    let output = host.version()?;
    let found = parse_gh_version(&output)
        .ok_or_else(|| WrunError::Host(format!("cannot parse gh version from '{}'", output.trim())))?;

    match compare_versions(&found, required) {
        Some(Ordering::Less) => Err(WrunError::UnsupportedGh {
            found,
            required: required.to_string(),
        }),
        Some(_) => {
            tracing::debug!(found = %found, required = %required, "gh version ok");
            Ok(())
        }
        None => Err(WrunError::Host(format!(
            "cannot compare gh version '{}' with '{}'",
            found, required
        ))),
    }
}
