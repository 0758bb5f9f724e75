//! Commits command — checks commit messages read from a git repository.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use super::formatting::{emit, render_report};
use crate::data::CheckReport;
use crate::git::GitRepository;
use crate::lint::check_message;

/// Commits command options.
#[derive(Parser)]
pub struct CommitsCommand {
    /// Commit range to check (e.g., HEAD~3..HEAD, abc123..def456, or a single revision).
    #[arg(value_name = "COMMIT_RANGE", default_value = "HEAD")]
    pub range: String,

    /// Repository path (defaults to the current directory).
    #[arg(long)]
    pub repo: Option<PathBuf>,

    /// Output format: text (default), json, yaml.
    #[arg(long)]
    pub format: Option<String>,
}

impl CommitsCommand {
    /// Executes the commits command. Exits with code 1 if any title is invalid.
    pub fn execute(self) -> Result<()> {
        let format = super::output_format(self.format.as_deref())?;

        let repo = match &self.repo {
            Some(path) => GitRepository::open_at(path)?,
            None => GitRepository::open()
                .context("Failed to open git repository. Make sure you're in a git repository.")?,
        };

        let report = check_commits(&repo, &self.range)?;
        emit(&report, format, render_report)?;

        let exit_code = report.exit_code();
        if exit_code != 0 {
            std::process::exit(exit_code);
        }
        Ok(())
    }
}

/// Checks every commit message in `range`.
pub fn check_commits(repo: &GitRepository, range: &str) -> Result<CheckReport> {
    let commits = repo.commit_messages(range)?;
    debug!(range, count = commits.len(), "Checking commits");

    let messages = commits
        .into_iter()
        .map(|commit| {
            let mut check = check_message(&commit.message);
            check.hash = Some(commit.hash);
            check
        })
        .collect();

    Ok(CheckReport::new(messages))
}
