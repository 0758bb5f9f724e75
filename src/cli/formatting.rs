//! Text rendering and shared output helpers for CLI commands.

use anyhow::Result;
use serde::Serialize;

use crate::data::{CheckReport, MessageCheck, OutputFormat, ReferenceData, ValidationResult};

/// Truncates a commit hash to [`SHORT_HASH_LEN`](crate::git::SHORT_HASH_LEN) characters.
pub(crate) fn truncate_hash(hash: &str) -> &str {
    let len = crate::git::SHORT_HASH_LEN;
    if hash.len() > len {
        &hash[..len]
    } else {
        hash
    }
}

/// Returns the status icon for a validation outcome.
pub(crate) fn status_icon(is_valid: bool) -> &'static str {
    if is_valid {
        "\u{2705}"
    } else {
        "\u{274c}"
    }
}

/// Renders one title's validation outcome.
pub(crate) fn render_validation(title: &str, result: &ValidationResult) -> String {
    let mut lines = vec![format!("{} {}", status_icon(result.is_valid), title.trim())];

    if let Some(parsed) = &result.parsed_data {
        lines.push(format!("   type: {}", parsed.commit_type));
        lines.push(format!("   summary: {}", parsed.summary));
    }
    if let Some(key) = result.ticket_key() {
        lines.push(format!("   ticket: Taiga #{key}"));
    }
    for error in &result.errors {
        lines.push(format!("   error: {error}"));
    }
    for suggestion in &result.suggestions {
        lines.push(format!("   hint: {suggestion}"));
    }

    lines.join("\n")
}

/// Renders extracted references, one line per link found.
pub(crate) fn render_references(data: &ReferenceData) -> String {
    let mut lines = Vec::new();

    if let Some(ticket) = &data.ticket_link {
        lines.push(format!("\u{1f3ab} Ticket: {} <{}>", ticket.display, ticket.url));
    }
    if let Some(doc) = &data.documentation_link {
        lines.push(format!("\u{1f4c4} Documentation: {} <{}>", doc.name, doc.url));
    }
    if let Some(test) = &data.testing_link {
        lines.push(format!("\u{1f9ea} Testing: {} <{}>", test.name, test.url));
    }

    if lines.is_empty() {
        "No references found".to_string()
    } else {
        lines.join("\n")
    }
}

/// Renders a message check: title outcome followed by its references.
pub(crate) fn render_message_check(check: &MessageCheck) -> String {
    let mut output = String::new();
    if let Some(hash) = &check.hash {
        output.push_str(&format!("{} ", truncate_hash(hash)));
    }
    output.push_str(&render_validation(&check.title, &check.validation));
    for line in render_references(&check.references).lines() {
        output.push_str(&format!("\n   {line}"));
    }
    output
}

/// Renders a whole report with a trailing summary line.
pub(crate) fn render_report(report: &CheckReport) -> String {
    let mut sections: Vec<String> = report.messages.iter().map(render_message_check).collect();
    let summary = &report.summary;
    sections.push(format!(
        "Summary: {} checked, {} passing, {} failing",
        summary.total, summary.passing, summary.failing
    ));
    sections.join("\n")
}

/// Prints `value` in the requested format, using `text` for human output.
pub(crate) fn emit<T: Serialize>(
    value: &T,
    format: OutputFormat,
    text: impl FnOnce(&T) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", text(value)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", crate::data::to_yaml(value)?),
    }
    Ok(())
}
