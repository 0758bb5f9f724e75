//! Check result types for whole commit and merge request messages.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::references::ReferenceData;
use crate::data::validation::ValidationResult;
use crate::error::LintError;

/// Result of checking one message: its title and its body references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCheck {
    /// Commit hash when the message came from a repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// First line of the message.
    pub title: String,
    /// Title validation outcome.
    pub validation: ValidationResult,
    /// References found in the remaining lines.
    pub references: ReferenceData,
}

impl MessageCheck {
    /// Whether the title passes.
    pub fn passes(&self) -> bool {
        self.validation.is_valid
    }
}

/// Report over many checked messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Individual message results.
    pub messages: Vec<MessageCheck>,
    /// Summary statistics.
    pub summary: CheckSummary,
}

/// Summary statistics for a check report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    /// Total number of messages checked.
    pub total: usize,
    /// Messages whose title is valid.
    pub passing: usize,
    /// Messages whose title is invalid.
    pub failing: usize,
    /// Messages carrying no reference in their body.
    pub without_references: usize,
}

impl CheckSummary {
    /// Creates a summary from a list of message results.
    pub fn from_results(results: &[MessageCheck]) -> Self {
        let total = results.len();
        let passing = results.iter().filter(|r| r.passes()).count();
        let without_references = results.iter().filter(|r| r.references.is_empty()).count();

        Self {
            total,
            passing,
            failing: total - passing,
            without_references,
        }
    }
}

impl CheckReport {
    /// Creates a new report from message results.
    pub fn new(messages: Vec<MessageCheck>) -> Self {
        let summary = CheckSummary::from_results(&messages);
        Self { messages, summary }
    }

    /// Checks if any title failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.summary.failing > 0
    }

    /// Process exit code for the report.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_failures())
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = LintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(LintError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::references::TicketLink;

    fn check(valid: bool, with_ref: bool) -> MessageCheck {
        let validation = if valid {
            ValidationResult::valid(crate::data::ParsedTitle {
                commit_type: "fix".to_string(),
                summary: "repair dashboard".to_string(),
                project: "PROJ".to_string(),
                ticket_number: "123".to_string(),
            })
        } else {
            ValidationResult::invalid(vec!["bad".to_string()], Vec::new())
        };
        let references = ReferenceData {
            ticket_link: with_ref.then(|| TicketLink::new("PROJ", "123", "https://t.io")),
            ..ReferenceData::default()
        };
        MessageCheck {
            hash: None,
            title: "t".to_string(),
            validation,
            references,
        }
    }

    #[test]
    fn summary_counts() {
        let report = CheckReport::new(vec![
            check(true, true),
            check(false, false),
            check(true, false),
        ]);
        assert_eq!(report.summary.total, 3);
        assert_eq!(report.summary.passing, 2);
        assert_eq!(report.summary.failing, 1);
        assert_eq!(report.summary.without_references, 2);
        assert!(report.has_failures());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn all_passing_exit_zero() {
        let report = CheckReport::new(vec![check(true, true)]);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn empty_report_exit_zero() {
        let report = CheckReport::new(Vec::new());
        assert_eq!(report.summary.total, 0);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("yml".parse::<OutputFormat>(), Ok(OutputFormat::Yaml));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!(
            "xml".parse::<OutputFormat>(),
            Err(LintError::UnknownFormat("xml".to_string()))
        );
    }

    #[test]
    fn output_format_display_round() {
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Yaml] {
            assert_eq!(format.to_string().parse::<OutputFormat>(), Ok(format));
        }
    }
}
