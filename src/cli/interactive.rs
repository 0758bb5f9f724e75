//! Interactive command — validates titles typed at a prompt.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use super::formatting::render_validation;
use crate::lint::TitleValidator;

const PROMPT: &str = "title> ";

/// Interactive command options.
#[derive(Parser)]
pub struct InteractiveCommand {}

impl InteractiveCommand {
    /// Executes the interactive session on stdin/stdout.
    pub fn execute(self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_session(stdin.lock(), stdout.lock())?;
        Ok(())
    }
}

/// Runs the prompt loop until `exit` or end of input.
///
/// Blank lines are skipped. Returns the number of titles validated.
pub fn run_session<R: BufRead, W: Write>(input: R, mut output: W) -> Result<usize> {
    let validator = TitleValidator::new();
    let mut validated = 0;

    writeln!(output, "Enter a title to validate ('exit' to quit)")?;
    writeln!(output, "Example: feat: add user login flow (Taiga #DATB-10353)")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush().context("Failed to flush prompt")?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line.context("Failed to read title")?;
        let title = line.trim();

        if title.eq_ignore_ascii_case("exit") {
            break;
        }
        if title.is_empty() {
            continue;
        }

        let result = validator.validate_title(title);
        writeln!(output, "{}", render_validation(title, &result))?;
        validated += 1;
    }

    Ok(validated)
}
