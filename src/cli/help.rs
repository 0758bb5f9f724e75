//! `help-all`: every command's help text in one document.

use anyhow::Result;
use clap::{Command, CommandFactory, Parser};

use crate::cli::Cli;

/// Prints help for every command, sorted by command path.
#[derive(Parser)]
pub struct HelpCommand {}

/// Builds the combined help document from the clap command tree.
pub struct HelpGenerator {
    app: Command,
}

impl Default for HelpGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpGenerator {
    /// Creates a generator for the taiga-lint command tree.
    pub fn new() -> Self {
        Self { app: Cli::command() }
    }

    /// Renders the top-level help followed by every subcommand, separated by rules.
    pub fn generate_all_help(&self) -> Result<String> {
        let mut sections = vec![self.render_command_help(&self.app, "")];
        self.collect_sections(&self.app, "", &mut sections);

        let separator = format!("\n\n{}\n\n", "=".repeat(80));
        Ok(sections.join(&separator))
    }

    /// Depth-first walk; siblings sorted by name so output is stable for snapshots.
    fn collect_sections(&self, cmd: &Command, prefix: &str, sections: &mut Vec<String>) {
        let mut children: Vec<&Command> = cmd
            .get_subcommands()
            .filter(|c| c.get_name() != "help")
            .collect();
        children.sort_by(|a, b| a.get_name().cmp(b.get_name()));

        for child in children {
            let path = if prefix.is_empty() {
                child.get_name().to_string()
            } else {
                format!("{prefix} {}", child.get_name())
            };
            sections.push(self.render_command_help(child, &path));
            self.collect_sections(child, &path, sections);
        }
    }

    fn render_command_help(&self, cmd: &Command, path: &str) -> String {
        let name = if path.is_empty() {
            cmd.get_name().to_string()
        } else {
            format!("taiga-lint {path}")
        };
        let about = cmd
            .get_about()
            .map_or_else(|| "No description available".to_string(), ToString::to_string);

        format!("{name} - {about}\n\n{}", cmd.clone().render_help())
    }
}

impl HelpCommand {
    /// Executes the help command.
    pub fn execute(self) -> Result<()> {
        println!("{}", HelpGenerator::new().generate_all_help()?);
        Ok(())
    }
}
