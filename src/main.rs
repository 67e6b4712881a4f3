// gh-wrun — Interactive workflow dispatch for the GitHub CLI
// License: Apache-2.0

use anyhow::Context;
use clap::Parser;
use gh_wrun::config::Config;
use gh_wrun::dispatch::Dispatcher;
use gh_wrun::gh::GhCli;
use gh_wrun::git::GitCli;
use gh_wrun::prompt::TerminalPrompter;
use gh_wrun::session::{InteractionSession, SessionOptions};
use gh_wrun::table::TerminalTable;
use gh_wrun::version::check_gh_version;
use gh_wrun::WrunError;
use std::path::PathBuf;
use std::process::ExitCode;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(
    name = "gh-wrun",
    about = "Pick a branch and a workflow, answer its inputs, and run it",
    disable_version_flag = true
)]
struct Cli {
    /// Show version
    #[arg(short = 'v', long = "version")]
    version: bool,
    /// Run on the current branch without asking
    #[arg(short = 'a', long = "auto-branch")]
    auto_branch: bool,
    /// Config file path
    #[arg(short, long)]
    config: Option<String>,
}

enum Outcome {
    Started,
    Declined,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    gh_wrun::logger::init();

    let cli = Cli::parse();

    if cli.version {
        println!("gh-wrun version {}", gh_wrun::VERSION);
        return ExitCode::SUCCESS;
    }

    match run(cli) {
        Ok(Outcome::Started) => {
            println!("Workflow started");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Declined) => {
            eprintln!("Canceled");
            ExitCode::FAILURE
        }
        Err(e) => {
            let canceled = e
                .downcast_ref::<WrunError>()
                .is_some_and(WrunError::is_cancellation);
            if canceled {
                eprintln!("Canceled");
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let cfg = load_config(cli.config.as_deref())?;

    let git = GitCli::new(&cfg.git.bin);
    let gh = GhCli::new(&cfg.gh.bin);

    if !cfg.gh.skip_version_check {
        check_gh_version(&gh, &cfg.gh.required_version)?;
    }

    let mut prompter = TerminalPrompter::new().context("failed to initialize the terminal")?;
    let mut renderer = TerminalTable;
    let options = SessionOptions {
        auto_branch: cli.auto_branch || cfg.branch.auto,
    };

    let result = InteractionSession::new(&git, &gh, &mut prompter, &mut renderer, options).run()?;
    if !result.confirmed {
        return Ok(Outcome::Declined);
    }

    Dispatcher::new(&gh).dispatch(&result)?;
    Ok(Outcome::Started)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_config(path: Option<&str>) -> anyhow::Result<Config> {
    let config_path = match path {
        Some(p) => PathBuf::from(p),
        None => Config::default_path().unwrap_or_else(|_| PathBuf::from("config.json")),
    };

    Config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))
}
