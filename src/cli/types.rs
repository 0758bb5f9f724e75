//! Types command — lists the allowed change types.

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::formatting::emit;
use crate::lint::CommitType;

/// Types command options.
#[derive(Parser)]
pub struct TypesCommand {
    /// Output format: text (default), json, yaml.
    #[arg(long)]
    pub format: Option<String>,
}

/// An allowed type and what it is for.
#[derive(Debug, Serialize)]
pub struct TypeInfo {
    /// Keyword used in titles.
    pub name: &'static str,
    /// What the type is used for.
    pub description: &'static str,
}

impl TypesCommand {
    /// Executes the types command.
    pub fn execute(self) -> Result<()> {
        let format = super::output_format(self.format.as_deref())?;
        emit(&type_table(), format, |types| render_types(types))
    }
}

/// Allowed types in declared order.
pub fn type_table() -> Vec<TypeInfo> {
    CommitType::ALL
        .into_iter()
        .map(|t| TypeInfo {
            name: t.as_str(),
            description: t.description(),
        })
        .collect()
}

fn render_types(types: &[TypeInfo]) -> String {
    types
        .iter()
        .map(|t| format!("{:10} {}", t.name, t.description))
        .collect::<Vec<_>>()
        .join("\n")
}
