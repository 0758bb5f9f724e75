//! CLI interface for taiga-lint.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::data::OutputFormat;
use crate::error::LintError;
use crate::utils::Settings;

pub mod commits;
pub mod formatting;
pub mod help;
pub mod interactive;
pub mod message;
pub mod refs;
pub mod title;
pub mod types;

/// taiga-lint: checks change titles and descriptions against the team convention.
#[derive(Parser)]
#[command(name = "taiga-lint")]
#[command(
    about = "Validates change titles and extracts Taiga, documentation and testing links",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Validates one or more titles.
    Title(title::TitleCommand),
    /// Extracts reference links from a description.
    Refs(refs::RefsCommand),
    /// Checks a whole commit or merge request message.
    Message(message::MessageCommand),
    /// Checks commit messages from a git repository.
    Commits(commits::CommitsCommand),
    /// Lists the allowed change types.
    Types(types::TypesCommand),
    /// Validates titles typed at a prompt.
    Interactive(interactive::InteractiveCommand),
    /// Displays comprehensive help for all commands.
    #[command(name = "help-all")]
    HelpAll(help::HelpCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Title(cmd) => cmd.execute(),
            Commands::Refs(cmd) => cmd.execute(),
            Commands::Message(cmd) => cmd.execute(),
            Commands::Commits(cmd) => cmd.execute(),
            Commands::Types(cmd) => cmd.execute(),
            Commands::Interactive(cmd) => cmd.execute(),
            Commands::HelpAll(cmd) => cmd.execute(),
        }
    }
}

/// Resolves the output format from the flag, environment and settings file.
pub(crate) fn output_format(flag: Option<&str>) -> Result<OutputFormat> {
    Settings::load()?.output_format(flag)
}

/// Reads a file, or stdin when no path is given.
pub(crate) fn read_input(path: Option<&Path>, what: &'static str) -> Result<String> {
    let content = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {what}: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .with_context(|| format!("Failed to read {what} from stdin"))?;
            buffer
        }
    };

    if content.trim().is_empty() {
        return Err(LintError::EmptyInput(what).into());
    }
    Ok(content)
}
