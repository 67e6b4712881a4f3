// gh-wrun — Interactive workflow dispatch for the GitHub CLI
// License: Apache-2.0

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod gh;
pub mod git;
pub mod logger;
pub mod process;
pub mod prompt;
pub mod session;
pub mod table;
pub mod version;
pub mod workflow;

pub use error::{Result, SchemaError, WrunError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
