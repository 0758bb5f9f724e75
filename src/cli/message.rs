//! Message command — checks a whole commit or merge request message.
//!
//! Suitable as a `commit-msg` hook: git passes the message file path as the
//! only argument.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::formatting::{emit, render_message_check};
use crate::lint::check_message;

/// Message command options.
#[derive(Parser)]
pub struct MessageCommand {
    /// Message file to read (defaults to stdin).
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format: text (default), json, yaml.
    #[arg(long)]
    pub format: Option<String>,
}

impl MessageCommand {
    /// Executes the message command. Exits with code 1 if the title is invalid.
    pub fn execute(self) -> Result<()> {
        let format = super::output_format(self.format.as_deref())?;
        let message = super::read_input(self.file.as_deref(), "message")?;

        let check = check_message(&message);
        emit(&check, format, render_message_check)?;

        if !check.passes() {
            std::process::exit(1);
        }
        Ok(())
    }
}
