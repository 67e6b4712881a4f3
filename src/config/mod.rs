// gh-wrun — Configuration loading

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("home directory not found")]
    NoHomeDir,
}

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub git: GitConfig,
    #[serde(default)]
    pub gh: GhConfig,
    #[serde(default)]
    pub branch: BranchConfig,
}

// ---------------------------------------------------------------------------
// Collaborator binaries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitConfig {
    #[serde(default = "default_git_bin")]
    pub bin: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            bin: default_git_bin(),
        }
    }
}

fn default_git_bin() -> String {
    "git".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GhConfig {
    #[serde(default = "default_gh_bin")]
    pub bin: String,
    /// Oldest `gh` release that supports `workflow list --json`.
    #[serde(default = "default_required_version")]
    pub required_version: String,
    #[serde(default)]
    pub skip_version_check: bool,
}

impl Default for GhConfig {
    fn default() -> Self {
        Self {
            bin: default_gh_bin(),
            required_version: default_required_version(),
            skip_version_check: false,
        }
    }
}

fn default_gh_bin() -> String {
    "gh".to_string()
}
fn default_required_version() -> String {
    "2.35.0".to_string()
}

// ---------------------------------------------------------------------------
// Branch selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BranchConfig {
    /// Use the current branch without asking.
    #[serde(default)]
    pub auto: bool,
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

impl Config {
    /// Load configuration from a JSON file, falling back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_json::from_str(&contents)?
        } else {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            Config::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (prefix: GH_WRUN_)
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("GH_WRUN_GIT_BIN") {
            self.git.bin = v;
        }
        if let Some(v) = lookup("GH_WRUN_GH_BIN") {
            self.gh.bin = v;
        }
        if let Some(v) = lookup("GH_WRUN_GH_REQUIRED_VERSION") {
            self.gh.required_version = v;
        }
        if let Some(v) = lookup("GH_WRUN_GH_SKIP_VERSION_CHECK") {
            self.gh.skip_version_check = v.parse().unwrap_or(false);
        }
        if let Some(v) = lookup("GH_WRUN_BRANCH_AUTO") {
            self.branch.auto = v.parse().unwrap_or(false);
        }
    }

    /// Get the default config file path: ~/.gh-wrun/config.json
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".gh-wrun").join("config.json"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
