//! Refs command — extracts reference links from a description.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::formatting::{emit, render_references};
use crate::lint::ReferenceExtractor;

/// Refs command options.
#[derive(Parser)]
pub struct RefsCommand {
    /// Description file to read (defaults to stdin).
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format: text (default), json, yaml.
    #[arg(long)]
    pub format: Option<String>,
}

impl RefsCommand {
    /// Executes the refs command.
    pub fn execute(self) -> Result<()> {
        let format = super::output_format(self.format.as_deref())?;
        let description = super::read_input(self.file.as_deref(), "description")?;

        let references = ReferenceExtractor::new().extract_references(&description);
        emit(&references, format, render_references)
    }
}
