//! Title validation result types.

use serde::{Deserialize, Serialize};

/// Outcome of validating a single commit or merge request title.
///
/// `parsed_data` is present exactly when the title is valid; both
/// constructors enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the title satisfies every rule.
    pub is_valid: bool,
    /// Diagnostic messages in detection order (empty iff valid).
    pub errors: Vec<String>,
    /// Corrective hints for the author.
    pub suggestions: Vec<String>,
    /// Title components, only present for valid titles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_data: Option<ParsedTitle>,
}

/// Components captured from a valid title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTitle {
    /// Change type, e.g. `feat`.
    #[serde(rename = "type")]
    pub commit_type: String,
    /// Trimmed summary text.
    pub summary: String,
    /// Uppercase Taiga project code.
    pub project: String,
    /// Ticket number within the project.
    pub ticket_number: String,
}

impl ValidationResult {
    /// Creates a passing result carrying the parsed title.
    pub fn valid(parsed: ParsedTitle) -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            suggestions: Vec::new(),
            parsed_data: Some(parsed),
        }
    }

    /// Creates a failing result.
    pub fn invalid(errors: Vec<String>, suggestions: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
            suggestions,
            parsed_data: None,
        }
    }

    /// Returns the Taiga reference of a valid title, e.g. `DATB-10353`.
    pub fn ticket_key(&self) -> Option<String> {
        self.parsed_data
            .as_ref()
            .map(|p| format!("{}-{}", p.project, p.ticket_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed() -> ParsedTitle {
        ParsedTitle {
            commit_type: "feat".to_string(),
            summary: "add login".to_string(),
            project: "DATB".to_string(),
            ticket_number: "10353".to_string(),
        }
    }

    #[test]
    fn valid_has_no_diagnostics() {
        let result = ValidationResult::valid(parsed());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.suggestions.is_empty());
        assert_eq!(result.ticket_key().as_deref(), Some("DATB-10353"));
    }

    #[test]
    fn invalid_has_no_parsed_data() {
        let result = ValidationResult::invalid(vec!["bad".to_string()], Vec::new());
        assert!(!result.is_valid);
        assert!(result.parsed_data.is_none());
        assert!(result.ticket_key().is_none());
    }

    #[test]
    fn parsed_type_serializes_as_type() -> anyhow::Result<()> {
        let json = serde_json::to_value(ValidationResult::valid(parsed()))?;
        assert_eq!(json["parsed_data"]["type"], "feat");
        assert_eq!(json["parsed_data"]["ticket_number"], "10353");
        Ok(())
    }

    #[test]
    fn invalid_omits_parsed_data_field() -> anyhow::Result<()> {
        let json = serde_json::to_value(ValidationResult::invalid(vec!["x".into()], vec![]))?;
        assert!(json.get("parsed_data").is_none());
        Ok(())
    }
}
