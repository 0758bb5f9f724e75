//! Title command — validates titles given on the command line.

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::formatting::{emit, render_validation};
use crate::data::ValidationResult;
use crate::lint::TitleValidator;

/// Title command options.
#[derive(Parser)]
pub struct TitleCommand {
    /// Titles to validate (quote each one).
    #[arg(value_name = "TITLE", required = true)]
    pub titles: Vec<String>,

    /// Output format: text (default), json, yaml.
    #[arg(long)]
    pub format: Option<String>,
}

/// A title paired with its validation result.
#[derive(Debug, Serialize)]
pub struct TitleOutcome {
    /// Title as given.
    pub title: String,
    /// Validation outcome.
    #[serde(flatten)]
    pub result: ValidationResult,
}

impl TitleCommand {
    /// Executes the title command. Exits with code 1 if any title is invalid.
    pub fn execute(self) -> Result<()> {
        let format = super::output_format(self.format.as_deref())?;
        let outcomes = validate_all(&self.titles);

        emit(&outcomes, format, |outcomes| {
            outcomes
                .iter()
                .map(|o| render_validation(&o.title, &o.result))
                .collect::<Vec<_>>()
                .join("\n")
        })?;

        if outcomes.iter().any(|o| !o.result.is_valid) {
            std::process::exit(1);
        }
        Ok(())
    }
}

/// Validates every title with one shared validator.
pub fn validate_all(titles: &[String]) -> Vec<TitleOutcome> {
    let validator = TitleValidator::new();
    titles
        .iter()
        .map(|title| TitleOutcome {
            title: title.clone(),
            result: validator.validate_title(title),
        })
        .collect()
}
